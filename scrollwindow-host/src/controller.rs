use alloc::string::String;
use alloc::vec::Vec;

use scrollwindow::{
    Extents, PrefixSums, ResolveMode, Result, ScrollMetrics, ScrollSnapshot, ViewportState,
    WindowResult, measured_extents, resolve_key, resolve_window_measured,
};

use crate::{
    EndTrigger, FetchResult, FetchTicket, ListOptions, PendingFetch, ScrollOutcome, VisibleItem,
};

/// A framework-neutral controller for one virtualized list.
///
/// It owns the backing items and the scroll state, and holds no UI objects. Adapters drive it
/// by calling:
/// - `on_scroll` (or `on_scroll_metrics`) once per scroll event
/// - `for_each_visible` when rendering
/// - `complete_fetch` when a continuation fetch handed out by `on_scroll` resolves
///
/// The window is positioned at [`WindowResult::offset_pixels`] inside a container whose outer
/// extent is [`Extents::viewport_extent`] and inner extent is [`Extents::total_extent`].
#[derive(Debug)]
pub struct ListController<T> {
    options: ListOptions<T>,
    items: Vec<T>,
    state: ViewportState,
    sums: Option<PrefixSums>, // Measured mode only
    trigger: EndTrigger,
    fetches_in_flight: usize,
    generation: u64, // bumped by `replace_items`
}

impl<T> ListController<T> {
    /// Creates a controller and applies the configured initial offset.
    pub fn new(options: ListOptions<T>, items: Vec<T>) -> Result<Self> {
        let state = ViewportState::new(items.len(), options.height.clone())
            .with_scroll_offset(options.initial_offset.resolve())?;
        let sums = match options.mode {
            ResolveMode::Uniform => None,
            ResolveMode::Measured => Some(PrefixSums::from_spec(&options.height, items.len())?),
        };
        hdebug!(
            items = items.len(),
            scroll_offset = state.scroll_offset(),
            "ListController::new"
        );
        Ok(Self {
            options,
            items,
            state,
            sums,
            trigger: EndTrigger::new(),
            fetches_in_flight: 0,
            generation: 0,
        })
    }

    pub fn options(&self) -> &ListOptions<T> {
        &self.options
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn state(&self) -> &ViewportState {
        &self.state
    }

    pub fn scroll_offset(&self) -> f64 {
        self.state.scroll_offset()
    }

    /// Sets (or clears) the explicit viewport extent, e.g. after the container was resized.
    pub fn set_viewport_extent(&mut self, viewport_extent: Option<f64>) {
        self.options.viewport_extent = viewport_extent;
    }

    pub fn extents(&self) -> Result<Extents> {
        let mut extents = match &self.sums {
            Some(sums) => measured_extents(sums),
            None => self.state.extents()?,
        };
        if let Some(viewport_extent) = self.options.viewport_extent {
            extents.viewport_extent = viewport_extent;
        }
        Ok(extents)
    }

    /// The window for the current scroll offset.
    pub fn window(&self) -> Result<WindowResult> {
        let extents = self.extents()?;
        self.resolve(extents.viewport_extent)
    }

    fn resolve(&self, viewport_extent: f64) -> Result<WindowResult> {
        match &self.sums {
            Some(sums) => {
                resolve_window_measured(self.state.scroll_offset(), sums, viewport_extent)
            }
            None => self.state.resolve(viewport_extent),
        }
    }

    /// Applies a scroll offset reported by the UI.
    ///
    /// End-of-list detection uses the controller's own extents. Use
    /// [`Self::on_scroll_metrics`] when the container reports its real measurements.
    pub fn on_scroll(&mut self, scroll_offset: f64) -> Result<ScrollOutcome<T>> {
        self.state.set_scroll_offset(scroll_offset)?;
        let extents = self.extents()?;
        let metrics = ScrollMetrics {
            scroll_offset,
            viewport_extent: extents.viewport_extent,
            content_extent: extents.total_extent,
        };
        self.finish_scroll(extents.viewport_extent, metrics)
    }

    /// Applies a scroll event carrying the container's measured scroll metrics.
    ///
    /// The window is still resolved against the controller's extents; `metrics` only drives
    /// end-of-list detection.
    pub fn on_scroll_metrics(&mut self, metrics: ScrollMetrics) -> Result<ScrollOutcome<T>> {
        self.state.set_scroll_offset(metrics.scroll_offset)?;
        let extents = self.extents()?;
        self.finish_scroll(extents.viewport_extent, metrics)
    }

    fn finish_scroll(
        &mut self,
        viewport_extent: f64,
        metrics: ScrollMetrics,
    ) -> Result<ScrollOutcome<T>> {
        let window = self.resolve(viewport_extent)?;
        htrace!(
            scroll_offset = metrics.scroll_offset,
            start_index = window.start_index,
            end_index = window.end_index,
            "on_scroll"
        );
        // An empty list has nothing to continue from.
        let reached_end = !self.items.is_empty()
            && self.trigger.observe(metrics, self.options.end_epsilon);
        let fetch = if reached_end {
            self.fire_reach_end()
        } else {
            None
        };
        Ok(ScrollOutcome {
            window,
            reached_end,
            fetch,
        })
    }

    fn fire_reach_end(&mut self) -> Option<PendingFetch<T>> {
        hdebug!(items = self.items.len(), "reached end of list");
        if let Some(on_reach_end) = &self.options.on_reach_end {
            on_reach_end();
        }
        let fetch_items = self.options.fetch_items.as_ref()?;
        if self.fetches_in_flight > 0 && !self.options.allow_concurrent_fetches {
            hdebug!(
                in_flight = self.fetches_in_flight,
                "fetch already in flight; not starting another"
            );
            return None;
        }
        self.fetches_in_flight += 1;
        Some(PendingFetch::new(self.ticket(), fetch_items()))
    }

    fn ticket(&self) -> FetchTicket {
        FetchTicket {
            generation: self.generation,
        }
    }

    fn is_stale(&self, ticket: FetchTicket) -> bool {
        ticket != self.ticket()
    }

    /// Whether a continuation fetch is outstanding (e.g. to show a loading indicator).
    pub fn is_fetching(&self) -> bool {
        self.fetches_in_flight > 0
    }

    pub fn fetches_in_flight(&self) -> usize {
        self.fetches_in_flight
    }

    /// Finishes a fetch handed out by a scroll event and appends whatever it returned.
    ///
    /// Results of fetches started before the last [`Self::replace_items`] are dropped. Returns
    /// the number of appended items.
    pub fn complete_fetch(&mut self, fetched: FetchResult<T>) -> Result<usize> {
        if self.is_stale(fetched.ticket) {
            hdebug!("dropping result of a superseded fetch");
            return Ok(0);
        }
        self.release_fetch();
        match fetched.items {
            Some(items) => self.append_items(items),
            None => Ok(0),
        }
    }

    /// Releases the in-flight guard for a fetch that was dropped instead of completed.
    pub fn cancel_fetch(&mut self, ticket: FetchTicket) {
        if !self.is_stale(ticket) {
            self.release_fetch();
        }
    }

    fn release_fetch(&mut self) {
        if self.fetches_in_flight == 0 {
            hwarn!("fetch completed with none in flight");
            return;
        }
        self.fetches_in_flight -= 1;
    }

    /// Appends items to the backing collection. Returns the number of appended items.
    ///
    /// In measured mode the new rows' heights are read immediately; if one is invalid nothing is
    /// appended.
    pub fn append_items(&mut self, items: impl IntoIterator<Item = T>) -> Result<usize> {
        let before = self.items.len();
        self.items.extend(items);
        let after = self.items.len();
        if let Some(sums) = &mut self.sums {
            if let Err(err) = sums.extend_from_spec(&self.options.height, after) {
                sums.truncate(before);
                self.items.truncate(before);
                return Err(err);
            }
        }
        self.state.set_number_of_items(after);
        hdebug!(appended = after - before, items = after, "append_items");
        Ok(after - before)
    }

    /// Replaces every item and forgets the end-of-list state. The scroll offset is kept.
    ///
    /// Outstanding fetches are abandoned: their results no longer apply to the new items.
    pub fn replace_items(&mut self, items: Vec<T>) -> Result<()> {
        if self.sums.is_some() {
            self.sums = Some(PrefixSums::from_spec(&self.options.height, items.len())?);
        }
        self.state.set_number_of_items(items.len());
        self.items = items;
        self.trigger.reset();
        if self.fetches_in_flight > 0 {
            hdebug!(abandoned = self.fetches_in_flight, "replace_items");
        }
        self.fetches_in_flight = 0;
        self.generation = self.generation.wrapping_add(1);
        Ok(())
    }

    /// Records a measured row height. Returns whether it was recorded.
    ///
    /// Only measured mode keeps per-row heights: in uniform mode, or for an index past the end,
    /// this returns `Ok(false)` and nothing changes.
    pub fn measure(&mut self, index: usize, height: f64) -> Result<bool> {
        match &mut self.sums {
            Some(sums) if index < sums.len() => {
                sums.set_height(index, height)?;
                Ok(true)
            }
            Some(_) => Ok(false),
            None => {
                hwarn!(index, "measure ignored in uniform mode");
                Ok(false)
            }
        }
    }

    pub fn key_for(&self, index: usize) -> String {
        resolve_key(index, self.options.get_key.as_ref())
    }

    /// Calls `f` for every item in the current window, in index order.
    ///
    /// Returns the window so the renderer can position the rows.
    pub fn for_each_visible<'a>(
        &'a self,
        mut f: impl FnMut(VisibleItem<'a, T>),
    ) -> Result<WindowResult> {
        let window = self.window()?;
        for index in window.indices() {
            let Some(item) = self.items.get(index) else {
                break;
            };
            f(VisibleItem {
                index,
                key: self.key_for(index),
                item,
            });
        }
        Ok(window)
    }

    /// Collects the current window's items into `out` (clears `out` first).
    pub fn collect_visible<'a>(
        &'a self,
        out: &mut Vec<VisibleItem<'a, T>>,
    ) -> Result<WindowResult> {
        out.clear();
        self.for_each_visible(|item| out.push(item))
    }

    pub fn visible_keys(&self) -> Result<Vec<String>> {
        let mut keys = Vec::new();
        self.for_each_visible(|item| keys.push(item.key))?;
        Ok(keys)
    }

    pub fn snapshot(&self) -> ScrollSnapshot {
        self.state.snapshot()
    }

    /// Restores the scroll offset from a snapshot. Does not fire end-of-list callbacks.
    pub fn restore(&mut self, snapshot: ScrollSnapshot) -> Result<()> {
        self.state.restore(snapshot)
    }
}
