//! Fixed-capacity rolling buffer of order-parameter samples.

use std::collections::VecDeque;

/// Circular buffer that drops the oldest sample once full.
#[derive(Debug, Clone)]
pub struct RollingWindow {
    buffer: VecDeque<f64>,
    capacity: usize,
}

impl RollingWindow {
    /// Create a window holding at most `capacity` samples.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is 0.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "Window capacity must be > 0");
        Self {
            buffer: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Add a sample, evicting the oldest when full.
    pub fn push(&mut self, value: f64) {
        if self.buffer.len() >= self.capacity {
            self.buffer.pop_front();
        }
        self.buffer.push_back(value);
    }

    /// Extend with several samples in order.
    pub fn extend<I: IntoIterator<Item = f64>>(&mut self, values: I) {
        for value in values {
            self.push(value);
        }
    }

    /// Most recent sample.
    pub fn last(&self) -> Option<f64> {
        self.buffer.back().copied()
    }

    /// Samples from oldest to newest.
    pub fn to_vec(&self) -> Vec<f64> {
        self.buffer.iter().copied().collect()
    }

    /// Smallest sample, if any.
    pub fn min(&self) -> Option<f64> {
        self.buffer.iter().copied().reduce(f64::min)
    }

    /// Largest sample, if any.
    pub fn max(&self) -> Option<f64> {
        self.buffer.iter().copied().reduce(f64::max)
    }

    /// Largest absolute deviation of any sample from the newest one.
    pub fn max_deviation_from_last(&self) -> Option<f64> {
        let last = self.last()?;
        Some((self.max()? - last).max(last - self.min()?))
    }
}
