use alloc::vec::Vec;
use core::cmp;

use crate::HeightSpec;
use crate::error::{Result, check_item_height};

/// Cumulative row heights backed by a Fenwick tree.
///
/// Appends and point updates are `O(log n)`; prefix sums and offset → index lookups are
/// `O(log n)`. Use this instead of re-summing a [`HeightSpec::Variable`] on every frame.
#[derive(Clone, Debug)]
pub struct PrefixSums {
    tree: Vec<f64>, // 1-indexed
    heights: Vec<f64>,
    total: f64,
    max_bit: usize,
}

impl PrefixSums {
    pub fn new() -> Self {
        Self {
            tree: alloc::vec![0.0],
            heights: Vec::new(),
            total: 0.0,
            max_bit: 0,
        }
    }

    /// Builds the sums for the first `number_of_items` rows of `height`.
    pub fn from_spec(height: &HeightSpec, number_of_items: usize) -> Result<Self> {
        height.validate()?;
        let mut heights = Vec::with_capacity(number_of_items);
        for i in 0..number_of_items {
            heights.push(height.height(i)?);
        }
        wdebug!(number_of_items, "PrefixSums::from_spec");
        Ok(Self::build(heights))
    }

    pub fn from_heights(heights: &[f64]) -> Result<Self> {
        let heights = heights
            .iter()
            .enumerate()
            .map(|(i, &h)| check_item_height(i, h))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::build(heights))
    }

    fn build(heights: Vec<f64>) -> Self {
        let n = heights.len();
        let total = heights.iter().sum();
        let mut sums = Self {
            tree: alloc::vec![0.0; n + 1],
            heights,
            total,
            max_bit: highest_power_of_two_leq(n),
        };
        for i in 1..=n {
            sums.tree[i] = sums.node_sum(i);
        }
        sums
    }

    // tree[i] covers (i - lsb(i), i]; rebuilt from its children so a node depends only on the
    // current heights, never on the update history.
    fn node_sum(&self, i: usize) -> f64 {
        let floor = i - lsb(i);
        let mut node = self.heights[i - 1];
        let mut j = i - 1;
        while j > floor {
            node += self.tree[j];
            j -= lsb(j);
        }
        node
    }

    pub fn len(&self) -> usize {
        self.heights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heights.is_empty()
    }

    pub fn total(&self) -> f64 {
        self.total
    }

    pub fn height(&self, index: usize) -> Option<f64> {
        self.heights.get(index).copied()
    }

    /// Appends one row.
    pub fn push(&mut self, height: f64) -> Result<()> {
        let height = check_item_height(self.len(), height)?;
        self.heights.push(height);
        let i = self.heights.len();
        self.tree.push(0.0);
        self.tree[i] = self.node_sum(i);
        self.total += height;
        self.max_bit = highest_power_of_two_leq(i);
        Ok(())
    }

    /// Appends the rows `len()..number_of_items` of `height`.
    pub fn extend_from_spec(&mut self, height: &HeightSpec, number_of_items: usize) -> Result<()> {
        for i in self.len()..number_of_items {
            self.push(height.height(i)?)?;
        }
        Ok(())
    }

    /// Replaces the height of an existing row. Out-of-range indexes are ignored.
    pub fn set_height(&mut self, index: usize, height: f64) -> Result<()> {
        let n = self.len();
        if index >= n {
            wwarn!(index, len = n, "PrefixSums::set_height out of range");
            return Ok(());
        }
        let height = check_item_height(index, height)?;
        if height == self.heights[index] {
            return Ok(());
        }
        self.heights[index] = height;
        let mut i = index + 1;
        while i <= n {
            self.tree[i] = self.node_sum(i);
            i += lsb(i);
        }
        self.total = self.prefix_sum(n);
        Ok(())
    }

    pub fn truncate(&mut self, new_len: usize) {
        if new_len >= self.len() {
            return;
        }
        self.total = self.prefix_sum(new_len);
        self.tree.truncate(new_len + 1);
        self.heights.truncate(new_len);
        self.max_bit = highest_power_of_two_leq(new_len);
    }

    /// Summed height of the first `count` rows (clamped to `len()`).
    pub fn prefix_sum(&self, count: usize) -> f64 {
        let mut i = cmp::min(count, self.len());
        let mut sum = 0.0;
        while i > 0 {
            sum += self.tree[i];
            i &= i - 1;
        }
        sum
    }

    /// Returns the index of the row containing `offset`, clamped to the last row.
    ///
    /// A row owns `[start, start + height)`, so an offset exactly on a boundary belongs to the
    /// following row. Returns `None` when there are no rows.
    pub fn index_at_offset(&self, offset: f64) -> Option<usize> {
        let n = self.len();
        if n == 0 {
            return None;
        }
        Some(self.lower_bound(offset).min(n - 1))
    }

    /// Largest `count` with `prefix_sum(count) <= target`.
    fn lower_bound(&self, target: f64) -> usize {
        let n = self.len();
        let mut idx = 0usize;
        let mut acc = 0.0;
        let mut bit = self.max_bit;
        while bit != 0 {
            let next = idx + bit;
            if next <= n && acc + self.tree[next] <= target {
                acc += self.tree[next];
                idx = next;
            }
            bit >>= 1;
        }
        // The descent adds nodes in a different order than `prefix_sum`; settle rounding
        // differences against `prefix_sum` so boundaries agree with it exactly.
        while idx < n && self.prefix_sum(idx + 1) <= target {
            idx += 1;
        }
        while idx > 0 && self.prefix_sum(idx) > target {
            idx -= 1;
        }
        idx
    }
}

impl Default for PrefixSums {
    fn default() -> Self {
        Self::new()
    }
}

fn lsb(i: usize) -> usize {
    i & i.wrapping_neg()
}

fn highest_power_of_two_leq(n: usize) -> usize {
    if n == 0 {
        return 0;
    }
    let mut p = 1usize;
    while p <= n / 2 {
        p <<= 1;
    }
    p
}
