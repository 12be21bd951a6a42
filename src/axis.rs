//! Value-axis range accumulation.

/// Running min/max bound tracker for a single value axis.
///
/// A freshly created (or reset) axis is *empty*: both bounds are NaN and
/// [`range_length`](Axis::range_length) is NaN. The first finite bound sets
/// both ends; later bounds only widen the range. The empty state is distinct
/// from a zero-width range, which can only arise from a single finite bound.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Axis {
    min: f64,
    max: f64,
}

impl Axis {
    /// Create an empty axis.
    pub fn new() -> Self {
        Self {
            min: f64::NAN,
            max: f64::NAN,
        }
    }

    /// Clear the axis back to the empty state.
    pub fn reset(&mut self) {
        self.min = f64::NAN;
        self.max = f64::NAN;
    }

    /// Widen the range to include `value`. NaN is a no-op.
    pub fn add_bound(&mut self, value: f64) {
        if value.is_nan() {
            return;
        }
        if self.is_empty() {
            self.min = value;
            self.max = value;
            return;
        }
        if value < self.min {
            self.min = value;
        }
        if value > self.max {
            self.max = value;
        }
    }

    /// Lower bound, NaN while empty.
    pub fn min_value(&self) -> f64 {
        self.min
    }

    /// Upper bound, NaN while empty.
    pub fn max_value(&self) -> f64 {
        self.max
    }

    /// Span of the range (`max - min`), NaN while empty.
    pub fn range_length(&self) -> f64 {
        self.max - self.min
    }

    /// Check whether the axis has received no bounds.
    pub fn is_empty(&self) -> bool {
        self.min.is_nan()
    }

    /// Check whether the range contains zero (inclusive).
    pub fn spans_zero(&self) -> bool {
        self.min <= 0.0 && self.max >= 0.0
    }
}

impl Default for Axis {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_axis_is_empty() {
        let axis = Axis::new();
        assert!(axis.is_empty());
        assert!(axis.min_value().is_nan());
        assert!(axis.range_length().is_nan());
        assert!(!axis.spans_zero());
    }

    #[test]
    fn first_bound_sets_both_ends() {
        let mut axis = Axis::new();
        axis.add_bound(3.0);
        assert_eq!(axis.min_value(), 3.0);
        assert_eq!(axis.max_value(), 3.0);
        assert_eq!(axis.range_length(), 0.0);
    }

    #[test]
    fn bounds_only_widen() {
        let mut axis = Axis::new();
        axis.add_bound(-1.0);
        axis.add_bound(5.0);
        axis.add_bound(2.0);
        assert_eq!(axis.min_value(), -1.0);
        assert_eq!(axis.max_value(), 5.0);
        assert_eq!(axis.range_length(), 6.0);
        assert!(axis.spans_zero());
    }

    #[test]
    fn nan_bound_is_ignored() {
        let mut axis = Axis::new();
        axis.add_bound(f64::NAN);
        assert!(axis.is_empty());
        axis.add_bound(1.0);
        axis.add_bound(f64::NAN);
        assert_eq!(axis.min_value(), 1.0);
        assert_eq!(axis.max_value(), 1.0);
    }

    #[test]
    fn reset_clears_bounds() {
        let mut axis = Axis::new();
        axis.add_bound(1.0);
        axis.reset();
        assert!(axis.is_empty());
    }
}
