//! Series table entries and axis selection.

use std::fmt;

use crate::units::{Channel, Unit};

/// Axis choice for one series entry.
///
/// Entries start out [`Auto`](AxisSelection::Auto) unless pinned at creation;
/// the auto-assigner resolves every `Auto` entry to a concrete axis before
/// range fitting runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AxisSelection {
    /// Let the auto-assigner choose.
    Auto,
    /// Pinned to the axis with this index.
    Axis(usize),
}

impl AxisSelection {
    /// The concrete axis index, if one is assigned.
    pub fn index(self) -> Option<usize> {
        match self {
            Self::Auto => None,
            Self::Axis(index) => Some(index),
        }
    }

    /// Check whether this selection is still unresolved.
    pub fn is_auto(self) -> bool {
        matches!(self, Self::Auto)
    }
}

impl fmt::Display for AxisSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Auto => f.write_str("auto"),
            Self::Axis(index) => write!(f, "axis {index}"),
        }
    }
}

/// One row of the plotted-series table: what to plot, in which unit, on
/// which axis.
///
/// Entries are plain values; a configuration clone copies them wholesale.
/// The same channel may appear in several entries with different units or
/// axes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesEntry {
    channel: Channel,
    unit: Unit,
    axis: AxisSelection,
}

impl SeriesEntry {
    /// Create an entry with the channel's default unit and automatic axis
    /// selection.
    pub fn new(channel: Channel) -> Self {
        Self {
            channel,
            unit: channel.default_unit(),
            axis: AxisSelection::Auto,
        }
    }

    /// The plotted channel.
    pub fn channel(&self) -> Channel {
        self.channel
    }

    /// The display unit.
    pub fn unit(&self) -> Unit {
        self.unit
    }

    /// The axis selection.
    pub fn axis(&self) -> AxisSelection {
        self.axis
    }

    pub(crate) fn set_channel(&mut self, channel: Channel) {
        self.channel = channel;
    }

    pub(crate) fn set_unit(&mut self, unit: Unit) {
        self.unit = unit;
    }

    pub(crate) fn set_axis(&mut self, axis: AxisSelection) {
        self.axis = axis;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_entry_uses_default_unit_and_auto_axis() {
        let entry = SeriesEntry::new(Channel::Altitude);
        assert_eq!(entry.channel(), Channel::Altitude);
        assert_eq!(entry.unit(), Unit::Meters);
        assert!(entry.axis().is_auto());
        assert_eq!(entry.axis().index(), None);
    }

    #[test]
    fn axis_selection_index() {
        assert_eq!(AxisSelection::Axis(1).index(), Some(1));
        assert!(!AxisSelection::Axis(0).is_auto());
    }
}
