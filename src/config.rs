//! Plot configuration aggregate.

use std::collections::BTreeSet;
use std::fmt;

use crate::axis::Axis;
use crate::error::PlotError;
use crate::series::{AxisSelection, SeriesEntry};
use crate::units::{Channel, Unit};

/// Number of value axes in a configuration.
///
/// The range fitter and the common-zero alignment assume exactly two axes.
pub const AXES_COUNT: usize = 2;

/// Opaque marker for a flight event shown on the plot.
///
/// Tags have membership-only semantics: a configuration either shows a tag's
/// events or it does not, and the order of tags is irrelevant.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EventTag(String);

impl EventTag {
    /// Create a tag from its name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The tag name.
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl From<&str> for EventTag {
    fn from(name: &str) -> Self {
        Self(name.to_owned())
    }
}

impl fmt::Display for EventTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A named chart layout: domain axis, plotted series, event markers, and the
/// two value axes.
///
/// Configurations are plain values. [`Clone`] yields a fully independent
/// copy (axes included), which is what lets the auto-assignment search
/// branch without aliasing; see [`fill_auto_axes`](Self::fill_auto_axes).
#[derive(Debug, Clone)]
pub struct PlotConfiguration {
    pub(crate) name: String,
    pub(crate) domain_channel: Channel,
    pub(crate) domain_unit: Unit,
    pub(crate) entries: Vec<SeriesEntry>,
    pub(crate) axes: [Axis; AXES_COUNT],
    pub(crate) events: BTreeSet<EventTag>,
}

impl PlotConfiguration {
    /// Create a configuration plotted against simulation time.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_domain(name, Channel::Time)
    }

    /// Create a configuration with an explicit domain channel.
    pub fn with_domain(name: impl Into<String>, domain: Channel) -> Self {
        Self {
            name: name.into(),
            domain_channel: domain,
            domain_unit: domain.default_unit(),
            entries: Vec::new(),
            axes: [Axis::new(); AXES_COUNT],
            events: BTreeSet::new(),
        }
    }

    /// The configuration name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rename the configuration.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// The domain (x) axis channel.
    pub fn domain_channel(&self) -> Channel {
        self.domain_channel
    }

    /// Change the domain channel.
    ///
    /// The domain unit is kept when the new channel shares the old unit
    /// group, and reset to the new group's default otherwise.
    pub fn set_domain_channel(&mut self, channel: Channel) {
        if self.domain_channel.unit_group() != channel.unit_group() {
            self.domain_unit = channel.default_unit();
        }
        self.domain_channel = channel;
    }

    /// The domain axis display unit.
    pub fn domain_unit(&self) -> Unit {
        self.domain_unit
    }

    /// Change the domain display unit.
    pub fn set_domain_unit(&mut self, unit: Unit) -> Result<(), PlotError> {
        let group = self.domain_channel.unit_group();
        if !group.contains(unit) {
            return Err(PlotError::IncompatibleUnit { unit, group });
        }
        self.domain_unit = unit;
        Ok(())
    }

    /// Append a series with automatic axis selection and the channel's
    /// default unit.
    pub fn add_series(&mut self, channel: Channel) {
        self.entries.push(SeriesEntry::new(channel));
    }

    /// Append a series pinned to the given axis.
    pub fn add_series_on(&mut self, channel: Channel, axis: usize) -> Result<(), PlotError> {
        Self::check_axis(axis)?;
        let mut entry = SeriesEntry::new(channel);
        entry.set_axis(AxisSelection::Axis(axis));
        self.entries.push(entry);
        Ok(())
    }

    /// All series entries in plot order.
    pub fn series(&self) -> &[SeriesEntry] {
        &self.entries
    }

    /// Number of series entries.
    pub fn series_count(&self) -> usize {
        self.entries.len()
    }

    /// A single series entry.
    pub fn entry(&self, index: usize) -> Option<&SeriesEntry> {
        self.entries.get(index)
    }

    /// Replace the channel of an entry.
    ///
    /// The entry's unit is kept across same-group changes and reset to the
    /// new group's default otherwise.
    pub fn set_series_channel(&mut self, index: usize, channel: Channel) -> Result<(), PlotError> {
        self.check_series(index)?;
        let entry = &mut self.entries[index];
        if entry.channel().unit_group() != channel.unit_group() {
            entry.set_unit(channel.default_unit());
        }
        entry.set_channel(channel);
        Ok(())
    }

    /// Replace the display unit of an entry.
    pub fn set_series_unit(&mut self, index: usize, unit: Unit) -> Result<(), PlotError> {
        self.check_series(index)?;
        let group = self.entries[index].channel().unit_group();
        if !group.contains(unit) {
            return Err(PlotError::IncompatibleUnit { unit, group });
        }
        self.entries[index].set_unit(unit);
        Ok(())
    }

    /// Replace the axis selection of an entry.
    pub fn set_series_axis(
        &mut self,
        index: usize,
        axis: AxisSelection,
    ) -> Result<(), PlotError> {
        self.check_series(index)?;
        if let Some(axis_index) = axis.index() {
            Self::check_axis(axis_index)?;
        }
        self.entries[index].set_axis(axis);
        Ok(())
    }

    /// Remove and return an entry.
    pub fn remove_series(&mut self, index: usize) -> Result<SeriesEntry, PlotError> {
        self.check_series(index)?;
        Ok(self.entries.remove(index))
    }

    /// Reset every entry (and the domain) to its group's default unit.
    pub fn reset_units(&mut self) {
        self.domain_unit = self.domain_channel.default_unit();
        for entry in &mut self.entries {
            entry.set_unit(entry.channel().default_unit());
        }
    }

    /// Show or hide an event tag.
    pub fn set_event(&mut self, tag: impl Into<EventTag>, active: bool) {
        let tag = tag.into();
        if active {
            self.events.insert(tag);
        } else {
            self.events.remove(&tag);
        }
    }

    /// Check whether an event tag is shown.
    pub fn is_event_active(&self, tag: &EventTag) -> bool {
        self.events.contains(tag)
    }

    /// All active event tags.
    pub fn active_events(&self) -> impl Iterator<Item = &EventTag> {
        self.events.iter()
    }

    /// The value axes with their most recently fitted ranges.
    pub fn axes(&self) -> &[Axis; AXES_COUNT] {
        &self.axes
    }

    /// A single value axis.
    pub fn axis(&self, index: usize) -> Option<Axis> {
        self.axes.get(index).copied()
    }

    pub(crate) fn check_axis(index: usize) -> Result<(), PlotError> {
        if index >= AXES_COUNT {
            return Err(PlotError::AxisIndexOutOfRange {
                index,
                axes: AXES_COUNT,
            });
        }
        Ok(())
    }

    fn check_series(&self, index: usize) -> Result<(), PlotError> {
        if index >= self.entries.len() {
            return Err(PlotError::SeriesIndexOutOfRange {
                index,
                count: self.entries.len(),
            });
        }
        Ok(())
    }
}

impl fmt::Display for PlotConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_series_defaults_to_auto() {
        let mut config = PlotConfiguration::new("test");
        config.add_series(Channel::Altitude);
        let entry = config.entry(0).unwrap();
        assert!(entry.axis().is_auto());
        assert_eq!(entry.unit(), Unit::Meters);
        assert_eq!(config.series_count(), 1);
    }

    #[test]
    fn pinned_series_validates_axis_index() {
        let mut config = PlotConfiguration::new("test");
        assert!(config.add_series_on(Channel::Altitude, 1).is_ok());
        assert_eq!(
            config.add_series_on(Channel::Altitude, 2),
            Err(PlotError::AxisIndexOutOfRange { index: 2, axes: 2 })
        );
    }

    #[test]
    fn unit_setter_rejects_foreign_group() {
        let mut config = PlotConfiguration::new("test");
        config.add_series(Channel::Altitude);
        assert!(config.set_series_unit(0, Unit::Feet).is_ok());
        assert_eq!(
            config.set_series_unit(0, Unit::Seconds),
            Err(PlotError::IncompatibleUnit {
                unit: Unit::Seconds,
                group: crate::units::UnitGroup::Length,
            })
        );
    }

    #[test]
    fn series_index_is_validated() {
        let mut config = PlotConfiguration::new("test");
        assert_eq!(
            config.set_series_axis(0, AxisSelection::Axis(0)),
            Err(PlotError::SeriesIndexOutOfRange { index: 0, count: 0 })
        );
        assert!(config.remove_series(0).is_err());
    }

    #[test]
    fn channel_change_keeps_unit_within_group() {
        let mut config = PlotConfiguration::new("test");
        config.add_series(Channel::Altitude);
        config.set_series_unit(0, Unit::Feet).unwrap();

        config.set_series_channel(0, Channel::CpLocation).unwrap();
        assert_eq!(config.entry(0).unwrap().unit(), Unit::Feet);

        config.set_series_channel(0, Channel::VelocityZ).unwrap();
        assert_eq!(config.entry(0).unwrap().unit(), Unit::MetersPerSecond);
    }

    #[test]
    fn domain_change_keeps_unit_within_group() {
        let mut config = PlotConfiguration::new("test");
        config.set_domain_unit(Unit::Minutes).unwrap();
        config.set_domain_channel(Channel::TimeStep);
        assert_eq!(config.domain_unit(), Unit::Minutes);

        config.set_domain_channel(Channel::MachNumber);
        assert_eq!(config.domain_unit(), Unit::Unitless);
        assert!(config.set_domain_unit(Unit::Seconds).is_err());
    }

    #[test]
    fn event_tags_are_membership_only() {
        let mut config = PlotConfiguration::new("test");
        config.set_event("apogee", true);
        config.set_event("burnout", true);
        config.set_event("burnout", false);
        assert!(config.is_event_active(&EventTag::new("apogee")));
        assert!(!config.is_event_active(&EventTag::new("burnout")));
        assert_eq!(config.active_events().count(), 1);
    }

    #[test]
    fn reset_units_restores_defaults() {
        let mut config = PlotConfiguration::new("test");
        config.add_series(Channel::Altitude);
        config.set_series_unit(0, Unit::Kilometers).unwrap();
        config.reset_units();
        assert_eq!(config.entry(0).unwrap().unit(), Unit::Meters);
    }

    #[test]
    fn clone_is_independent() {
        let mut original = PlotConfiguration::new("original");
        original.add_series(Channel::Altitude);
        original.set_event("apogee", true);
        original.axes[0].add_bound(5.0);

        let mut copy = original.clone();
        copy.set_series_unit(0, Unit::Feet).unwrap();
        copy.set_event("apogee", false);
        copy.axes[0].add_bound(-100.0);

        assert_eq!(original.entry(0).unwrap().unit(), Unit::Meters);
        assert!(original.is_event_active(&EventTag::new("apogee")));
        assert_eq!(original.axes()[0].min_value(), 5.0);
    }
}
