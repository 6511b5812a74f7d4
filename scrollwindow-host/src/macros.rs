macro_rules! htrace {
    ($($tt:tt)*) => {
        scrollwindow::__log!(trace, "scrollwindow_host", $($tt)*)
    };
}

macro_rules! hdebug {
    ($($tt:tt)*) => {
        scrollwindow::__log!(debug, "scrollwindow_host", $($tt)*)
    };
}

macro_rules! hwarn {
    ($($tt:tt)*) => {
        scrollwindow::__log!(warn, "scrollwindow_host", $($tt)*)
    };
}
