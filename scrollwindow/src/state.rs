use crate::error::{Result, check_scroll_offset};
use crate::{Extents, HeightSpec, WindowResult, compute_extents, resolve_window};

/// A lightweight, serializable snapshot of a list's scroll position.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollSnapshot {
    pub scroll_offset: f64,
    pub number_of_items: usize,
}

/// The inputs of the window resolver for one list instance.
///
/// The host owns this value and updates the scroll offset once per scroll event; the free
/// functions of this crate never hold on to it.
#[derive(Clone, Debug)]
pub struct ViewportState {
    scroll_offset: f64,
    number_of_items: usize,
    height: HeightSpec,
}

impl ViewportState {
    pub fn new(number_of_items: usize, height: impl Into<HeightSpec>) -> Self {
        Self {
            scroll_offset: 0.0,
            number_of_items,
            height: height.into(),
        }
    }

    pub fn with_scroll_offset(mut self, scroll_offset: f64) -> Result<Self> {
        self.set_scroll_offset(scroll_offset)?;
        Ok(self)
    }

    pub fn scroll_offset(&self) -> f64 {
        self.scroll_offset
    }

    pub fn number_of_items(&self) -> usize {
        self.number_of_items
    }

    pub fn height(&self) -> &HeightSpec {
        &self.height
    }

    /// Records a new scroll offset. On error the previous offset is kept.
    pub fn set_scroll_offset(&mut self, scroll_offset: f64) -> Result<()> {
        self.scroll_offset = check_scroll_offset(scroll_offset)?;
        Ok(())
    }

    pub fn set_number_of_items(&mut self, number_of_items: usize) {
        self.number_of_items = number_of_items;
    }

    pub fn extents(&self) -> Result<Extents> {
        compute_extents(&self.height, self.number_of_items)
    }

    /// Resolves the uniform window for the current offset.
    pub fn resolve(&self, viewport_extent: f64) -> Result<WindowResult> {
        resolve_window(
            self.scroll_offset,
            &self.height,
            self.number_of_items,
            viewport_extent,
        )
    }

    pub fn snapshot(&self) -> ScrollSnapshot {
        ScrollSnapshot {
            scroll_offset: self.scroll_offset,
            number_of_items: self.number_of_items,
        }
    }

    /// Restores the scroll offset from a snapshot.
    ///
    /// The item count is owned by the data source and is not restored.
    pub fn restore(&mut self, snapshot: ScrollSnapshot) -> Result<()> {
        self.set_scroll_offset(snapshot.scroll_offset)
    }
}
