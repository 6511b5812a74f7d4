// Shared by `scrollwindow-host`: `$target` keeps each crate's events under its own name.
#[doc(hidden)]
#[macro_export]
#[cfg(feature = "tracing")]
macro_rules! __log {
    ($level:ident, $target:literal, $($tt:tt)*) => {
        $crate::__private::tracing::$level!(target: $target, $($tt)*)
    };
}

#[doc(hidden)]
#[macro_export]
#[cfg(not(feature = "tracing"))]
macro_rules! __log {
    ($level:ident, $target:literal, $($tt:tt)*) => {};
}

macro_rules! wtrace {
    ($($tt:tt)*) => {
        $crate::__log!(trace, "scrollwindow", $($tt)*)
    };
}

macro_rules! wdebug {
    ($($tt:tt)*) => {
        $crate::__log!(debug, "scrollwindow", $($tt)*)
    };
}

macro_rules! wwarn {
    ($($tt:tt)*) => {
        $crate::__log!(warn, "scrollwindow", $($tt)*)
    };
}
