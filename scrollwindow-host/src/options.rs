use alloc::boxed::Box;
use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::future::Future;
use core::pin::Pin;

use scrollwindow::{DEFAULT_END_EPSILON, HeightSpec, KeyFn, ResolveMode};

/// A callback fired each time scrolling reaches the end of the list.
pub type OnReachEndCallback = Arc<dyn Fn() + Send + Sync>;

/// The continuation returned by a [`FetchItemsCallback`].
///
/// Resolves to the items to append, or `None` when there is nothing more to load.
pub type FetchFuture<T> = Pin<Box<dyn Future<Output = Option<Vec<T>>> + Send + 'static>>;

/// A callback that starts loading more items when the end of the list is reached.
///
/// The controller never polls the returned future: it is handed to the caller (see
/// [`crate::ScrollOutcome::fetch`]), who drives it on its own executor and passes the result to
/// [`crate::ListController::complete_fetch`].
pub type FetchItemsCallback<T> = Arc<dyn Fn() -> FetchFuture<T> + Send + Sync>;

/// Initial scroll offset configuration.
#[derive(Clone)]
pub enum InitialOffset {
    /// A fixed initial offset.
    Value(f64),
    /// A lazily evaluated initial offset provider (called by `ListController::new`).
    Provider(Arc<dyn Fn() -> f64 + Send + Sync>),
}

impl InitialOffset {
    pub(crate) fn resolve(&self) -> f64 {
        match self {
            Self::Value(v) => *v,
            Self::Provider(f) => f(),
        }
    }
}

impl Default for InitialOffset {
    fn default() -> Self {
        Self::Value(0.0)
    }
}

impl core::fmt::Debug for InitialOffset {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Value(v) => f.debug_tuple("Value").field(v).finish(),
            Self::Provider(_) => f.write_str("Provider(..)"),
        }
    }
}

/// Configuration for [`crate::ListController`].
///
/// Cheap to clone: callbacks are stored in `Arc`s.
pub struct ListOptions<T> {
    pub height: HeightSpec,
    pub mode: ResolveMode,
    /// Optional identity for rendered rows. Rows fall back to their index when unset or when
    /// the function returns an empty string.
    pub get_key: Option<KeyFn>,
    /// Overrides the viewport extent derived from the row heights.
    pub viewport_extent: Option<f64>,
    pub initial_offset: InitialOffset,
    /// How close to the bottom (in list units) counts as reaching the end.
    pub end_epsilon: f64,
    pub on_reach_end: Option<OnReachEndCallback>,
    pub fetch_items: Option<FetchItemsCallback<T>>,
    /// When `false`, no new fetch is started while one is still outstanding.
    pub allow_concurrent_fetches: bool,
}

impl<T> Clone for ListOptions<T> {
    fn clone(&self) -> Self {
        Self {
            height: self.height.clone(),
            mode: self.mode,
            get_key: self.get_key.clone(),
            viewport_extent: self.viewport_extent,
            initial_offset: self.initial_offset.clone(),
            end_epsilon: self.end_epsilon,
            on_reach_end: self.on_reach_end.clone(),
            fetch_items: self.fetch_items.clone(),
            allow_concurrent_fetches: self.allow_concurrent_fetches,
        }
    }
}

impl<T> ListOptions<T> {
    pub fn new(height: impl Into<HeightSpec>) -> Self {
        Self {
            height: height.into(),
            mode: ResolveMode::Uniform,
            get_key: None,
            viewport_extent: None,
            initial_offset: InitialOffset::default(),
            end_epsilon: DEFAULT_END_EPSILON,
            on_reach_end: None,
            fetch_items: None,
            allow_concurrent_fetches: false,
        }
    }

    pub fn with_mode(mut self, mode: ResolveMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_get_key(
        mut self,
        get_key: impl Fn(usize) -> String + Send + Sync + 'static,
    ) -> Self {
        self.get_key = Some(Arc::new(get_key));
        self
    }

    pub fn with_viewport_extent(mut self, viewport_extent: Option<f64>) -> Self {
        self.viewport_extent = viewport_extent;
        self
    }

    pub fn with_initial_offset(mut self, initial_offset: InitialOffset) -> Self {
        self.initial_offset = initial_offset;
        self
    }

    pub fn with_initial_offset_value(mut self, initial_offset: f64) -> Self {
        self.initial_offset = InitialOffset::Value(initial_offset);
        self
    }

    pub fn with_initial_offset_provider(
        mut self,
        initial_offset: impl Fn() -> f64 + Send + Sync + 'static,
    ) -> Self {
        self.initial_offset = InitialOffset::Provider(Arc::new(initial_offset));
        self
    }

    pub fn with_end_epsilon(mut self, end_epsilon: f64) -> Self {
        self.end_epsilon = end_epsilon;
        self
    }

    pub fn with_on_reach_end(mut self, on_reach_end: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_reach_end = Some(Arc::new(on_reach_end));
        self
    }

    /// Sets the continuation fetch. `fetch_items` is called once per trigger and its future is
    /// boxed for the caller's executor.
    pub fn with_fetch_items<F>(
        mut self,
        fetch_items: impl Fn() -> F + Send + Sync + 'static,
    ) -> Self
    where
        F: Future<Output = Option<Vec<T>>> + Send + 'static,
    {
        self.fetch_items = Some(Arc::new(move || Box::pin(fetch_items()) as FetchFuture<T>));
        self
    }

    pub fn with_allow_concurrent_fetches(mut self, allow: bool) -> Self {
        self.allow_concurrent_fetches = allow;
        self
    }
}

impl<T> core::fmt::Debug for ListOptions<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ListOptions")
            .field("height", &self.height)
            .field("mode", &self.mode)
            .field("get_key", &self.get_key.is_some())
            .field("viewport_extent", &self.viewport_extent)
            .field("initial_offset", &self.initial_offset)
            .field("end_epsilon", &self.end_epsilon)
            .field("on_reach_end", &self.on_reach_end.is_some())
            .field("fetch_items", &self.fetch_items.is_some())
            .field("allow_concurrent_fetches", &self.allow_concurrent_fetches)
            .finish()
    }
}
