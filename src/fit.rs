//! Range fitting, configuration scoring, and automatic axis assignment.
//!
//! [`fit_axes`](PlotConfiguration::fit_axes) computes padded, zero-aware
//! ranges for both value axes. [`goodness_value`](PlotConfiguration::goodness_value)
//! turns a fitted configuration into a scalar desirability score, and
//! [`fill_auto_axes`](PlotConfiguration::fill_auto_axes) searches all
//! assignments of the auto-selected entries for the best score.

use tracing::{debug, trace};

use crate::config::{AXES_COUNT, PlotConfiguration};
use crate::datasource::DataSource;
use crate::error::PlotError;
use crate::series::{AxisSelection, SeriesEntry};

/// Bonus for the first series landing on the primary axis.
const BONUS_FIRST_SERIES_ON_PRIMARY: f64 = 1.0;

/// Bonus for the primary axis range containing zero.
const BONUS_PRIMARY_AXIS_HAS_ZERO: f64 = 2.0;

/// Bonus for both axes containing zero (a successful common-zero alignment).
const BONUS_COMMON_ZERO: f64 = 40.0;

/// Bonus for leaving one axis entirely unused.
const BONUS_SINGLE_AXIS: f64 = 50.0;

/// Zero is pulled into a range when it lies within this fraction of the
/// range length from either bound.
const INCLUDE_ZERO_DISTANCE: f64 = 0.3;

/// Fraction of the range length added as padding on each side.
const RANGE_PADDING: f64 = 0.03;

const EPSILON: f64 = 1e-9;

/// Tolerance-based equality, relative except near zero.
fn approx_equal(a: f64, b: f64) -> bool {
    let scale = b.abs();
    if scale < EPSILON / 2.0 {
        return a.abs() < EPSILON / 2.0;
    }
    (a - b).abs() < EPSILON * scale
}

/// Converted min/max of one entry across all non-empty runs of all sources.
///
/// Returns NaN bounds when no run has samples for the channel.
fn converted_bounds<D: DataSource>(entry: &SeriesEntry, sources: &[D]) -> (f64, f64) {
    let mut min = f64::NAN;
    let mut max = f64::NAN;
    for source in sources {
        for run in 0..source.run_count() {
            if source.sample_count(run) == 0 {
                continue;
            }
            let unit = entry.unit();
            min = min.min(unit.to_display(source.minimum(entry.channel(), run)));
            max = max.max(unit.to_display(source.maximum(entry.channel(), run)));
        }
    }
    (min, max)
}

impl PlotConfiguration {
    /// Fit both axis ranges to the given data.
    ///
    /// Every entry must already carry a concrete axis; an
    /// [`UnassignedSeries`](PlotError::UnassignedSeries) error signals a
    /// caller-ordering bug. An axis without any assigned series is left in
    /// the empty (NaN) state. The fit is deterministic and idempotent for
    /// fixed inputs.
    pub fn fit_axes<D: DataSource>(&mut self, sources: &[D]) -> Result<(), PlotError> {
        for axis in &mut self.axes {
            axis.reset();
        }

        // Widen each entry's target axis by the entry's converted bounds.
        for (index, entry) in self.entries.iter().enumerate() {
            let Some(axis_index) = entry.axis().index() else {
                return Err(PlotError::UnassignedSeries { index });
            };
            let (min, max) = converted_bounds(entry, sources);
            self.axes[axis_index].add_bound(min);
            self.axes[axis_index].add_bound(max);
        }

        // Force degenerate ranges open, pad, and pull in a nearby zero.
        for axis in &mut self.axes {
            if axis.is_empty() {
                continue;
            }
            if approx_equal(axis.min_value(), axis.max_value()) {
                axis.add_bound(axis.min_value() - 1.0);
                axis.add_bound(axis.max_value() + 1.0);
            }

            let padding = axis.range_length() * RANGE_PADDING;
            axis.add_bound(axis.min_value() - padding);
            axis.add_bound(axis.max_value() + padding);

            let distance = axis.min_value().abs().min(axis.max_value().abs());
            if distance <= axis.range_length() * INCLUDE_ZERO_DISTANCE {
                axis.add_bound(0.0);
            }
        }

        self.align_common_zero();
        Ok(())
    }

    /// Stretch the secondary axis so both axes place zero at the same
    /// relative height.
    ///
    /// Skips silently unless both axes span zero with defined bounds; the
    /// alignment is an enhancement, not a requirement.
    fn align_common_zero(&mut self) {
        let primary = self.axes[0];
        let secondary = self.axes[1];

        if primary.min_value() > 0.0
            || primary.max_value() < 0.0
            || secondary.min_value() > 0.0
            || secondary.max_value() < 0.0
            || primary.min_value().is_nan()
            || secondary.min_value().is_nan()
        {
            return;
        }

        // Zero location as a fraction of the range: 0 = bottom, 1 = top.
        let zero_loc_primary = -primary.min_value() / primary.range_length();
        let zero_loc_secondary = -secondary.min_value() / secondary.range_length();

        if zero_loc_primary > zero_loc_secondary {
            let min = -secondary.max_value() * (zero_loc_primary / (1.0 - zero_loc_primary));
            self.axes[1].add_bound(min);
        } else {
            let max = secondary.min_value() * (-1.0 / zero_loc_primary + 1.0);
            self.axes[1].add_bound(max);
        }
        trace!(
            zero_loc = zero_loc_primary,
            "aligned secondary axis to common zero"
        );
    }

    /// Fit the axes and score the resulting configuration; higher is better.
    ///
    /// Per series with defined, non-degenerate bounds the score gains
    /// `100 * sqrt(series_range / axis_range)`; the square root rewards any
    /// reasonable fill over marginal improvements of an already good one.
    /// Flat bonuses favor the first series on the primary axis, zero on the
    /// primary axis, a common zero on both axes, and single-axis plots.
    pub fn goodness_value<D: DataSource>(&mut self, sources: &[D]) -> Result<f64, PlotError> {
        self.fit_axes(sources)?;

        let mut goodness = 0.0;
        for entry in &self.entries {
            // fit_axes has already rejected unassigned entries
            let Some(axis_index) = entry.axis().index() else {
                continue;
            };
            let (min, max) = converted_bounds(entry, sources);
            if min.is_nan() || max.is_nan() || approx_equal(min, max) {
                continue;
            }
            let fill = (max - min) / self.axes[axis_index].range_length();
            goodness += 100.0 * fill.max(0.0).sqrt();
        }

        if self
            .entries
            .first()
            .is_some_and(|entry| entry.axis() == AxisSelection::Axis(0))
        {
            goodness += BONUS_FIRST_SERIES_ON_PRIMARY;
        }

        let primary = self.axes[0];
        let secondary = self.axes[1];
        if primary.spans_zero() {
            goodness += BONUS_PRIMARY_AXIS_HAS_ZERO;
        }
        if primary.spans_zero() && secondary.spans_zero() {
            goodness += BONUS_COMMON_ZERO;
        }
        if primary.is_empty() || secondary.is_empty() {
            goodness += BONUS_SINGLE_AXIS;
        }

        Ok(goodness)
    }

    /// Resolve every auto-selected entry to the axis assignment with the
    /// best goodness value and return the fitted result.
    ///
    /// The receiver is never mutated; every search branch works on its own
    /// clone. The search is exhaustive over `AXES_COUNT ^ auto_entries`
    /// assignments, so callers should keep the number of auto entries small
    /// (presets use a handful at most). Ties keep the first-found branch,
    /// i.e. the lowest axis index, which makes the result reproducible.
    pub fn fill_auto_axes<D: DataSource>(&self, sources: &[D]) -> Result<Self, PlotError> {
        let (mut best, score) = self.search_assignments(sources)?;
        debug!(score, name = %best.name, "auto axis assignment selected");
        best.fit_axes(sources)?;
        Ok(best)
    }

    fn search_assignments<D: DataSource>(&self, sources: &[D]) -> Result<(Self, f64), PlotError> {
        let auto_index = self.entries.iter().position(|entry| entry.axis().is_auto());
        let Some(auto_index) = auto_index else {
            // Leaf: fully assigned, score it.
            let mut candidate = self.clone();
            let score = candidate.goodness_value(sources)?;
            trace!(score, "scored candidate assignment");
            return Ok((candidate, score));
        };

        let mut best = {
            let mut candidate = self.clone();
            candidate.entries[auto_index].set_axis(AxisSelection::Axis(0));
            candidate.search_assignments(sources)?
        };
        for axis in 1..AXES_COUNT {
            let mut candidate = self.clone();
            candidate.entries[auto_index].set_axis(AxisSelection::Axis(axis));
            let result = candidate.search_assignments(sources)?;
            if result.1 > best.1 {
                best = result;
            }
        }
        Ok(best)
    }
}
