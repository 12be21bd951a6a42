//! Error types for configuration and fitting.

use thiserror::Error;

use crate::units::{Unit, UnitGroup};

/// Errors raised by [`PlotConfiguration`](crate::PlotConfiguration) operations.
///
/// All variants indicate contract violations by the caller; the fitting and
/// scoring routines are deterministic and never fail on the data itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlotError {
    /// An axis index at or beyond the fixed axis count.
    #[error("axis index {index} out of range for {axes} axes")]
    AxisIndexOutOfRange {
        /// The rejected axis index.
        index: usize,
        /// Number of axes in the configuration.
        axes: usize,
    },

    /// A unit that does not belong to the channel's unit group.
    #[error("unit `{unit:?}` does not belong to the {group} unit group")]
    IncompatibleUnit {
        /// The rejected unit.
        unit: Unit,
        /// The group the unit must belong to.
        group: UnitGroup,
    },

    /// A series index at or beyond the number of entries.
    #[error("series index {index} out of range ({count} series)")]
    SeriesIndexOutOfRange {
        /// The rejected series index.
        index: usize,
        /// Number of series entries in the configuration.
        count: usize,
    },

    /// Range fitting or scoring was invoked while an entry is still
    /// auto-assigned.
    #[error("series entry {index} has no axis assigned")]
    UnassignedSeries {
        /// Index of the first unassigned entry.
        index: usize,
    },
}
