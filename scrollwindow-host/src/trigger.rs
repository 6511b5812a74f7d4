use scrollwindow::{ScrollMetrics, reached_end};

/// Edge detector for the end-of-list contract.
///
/// [`EndTrigger::observe`] returns `true` only when the scroll position enters the bottom
/// region; it re-arms once the position leaves it again.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EndTrigger {
    at_end: bool,
}

impl EndTrigger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn observe(&mut self, metrics: ScrollMetrics, epsilon: f64) -> bool {
        let at_end = reached_end(metrics, epsilon);
        let fired = at_end && !self.at_end;
        self.at_end = at_end;
        fired
    }

    pub fn is_at_end(&self) -> bool {
        self.at_end
    }

    /// Forgets the last observation so the next one at the bottom fires again.
    pub fn reset(&mut self) {
        self.at_end = false;
    }
}
