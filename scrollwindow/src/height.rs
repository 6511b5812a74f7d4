use alloc::sync::Arc;
use core::fmt;

use crate::error::{Result, check_item_height};

/// A per-index height function.
pub type HeightFn = Arc<dyn Fn(usize) -> f64 + Send + Sync>;

/// How tall each row of the list is.
///
/// Heights live in the caller's coordinate space (typically logical pixels) and must be
/// finite and strictly positive for every index in `0..number_of_items`. Invalid values are
/// reported as [`crate::WindowError::InvalidDimension`] when they are read.
#[derive(Clone)]
pub enum HeightSpec {
    /// Every row has the same height.
    Fixed(f64),
    /// Row heights vary by index.
    Variable(HeightFn),
}

impl HeightSpec {
    pub fn fixed(height: f64) -> Self {
        Self::Fixed(height)
    }

    pub fn variable(height: impl Fn(usize) -> f64 + Send + Sync + 'static) -> Self {
        Self::Variable(Arc::new(height))
    }

    pub fn is_fixed(&self) -> bool {
        matches!(self, Self::Fixed(_))
    }

    /// Checks what can be checked without reading any row: the constant of a
    /// [`HeightSpec::Fixed`]. A variable function is only validated as rows are read.
    pub fn validate(&self) -> Result<()> {
        match self {
            Self::Fixed(h) => check_item_height(0, *h).map(|_| ()),
            Self::Variable(_) => Ok(()),
        }
    }

    /// Returns the validated height of the row at `index`.
    pub fn height(&self, index: usize) -> Result<f64> {
        match self {
            Self::Fixed(h) => check_item_height(index, *h),
            Self::Variable(f) => check_item_height(index, f(index)),
        }
    }

    /// The height used as the divisor for offset → index math in the uniform resolver.
    ///
    /// For [`HeightSpec::Variable`] this is the height of item 0.
    pub fn unit_height(&self) -> Result<f64> {
        self.height(0)
    }
}

impl From<f64> for HeightSpec {
    fn from(height: f64) -> Self {
        Self::Fixed(height)
    }
}

impl fmt::Debug for HeightSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fixed(h) => f.debug_tuple("Fixed").field(h).finish(),
            Self::Variable(_) => f.write_str("Variable(..)"),
        }
    }
}
