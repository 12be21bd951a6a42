//! Measurement units and telemetry channel definitions.
//!
//! Raw telemetry is always stored in SI base units; a [`Unit`] converts a raw
//! value into its display representation. Units are grouped into
//! [`UnitGroup`]s of mutually compatible units, and every [`Channel`] belongs
//! to exactly one group.

use std::fmt;

const STANDARD_GRAVITY: f64 = 9.806_65;
const FEET_PER_METER: f64 = 1.0 / 0.304_8;

/// A family of mutually convertible units with one default member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnitGroup {
    /// Elapsed time.
    Time,
    /// Distances and positions.
    Length,
    /// Linear velocities.
    Velocity,
    /// Linear accelerations.
    Acceleration,
    /// Orientation angles.
    Angle,
    /// Rotation rates.
    AngularVelocity,
    /// Static stability margin.
    Stability,
    /// Dimensionless quantities (coefficients, Mach number).
    Dimensionless,
}

impl UnitGroup {
    /// The unit used when no explicit choice has been made.
    pub fn default_unit(self) -> Unit {
        match self {
            Self::Time => Unit::Seconds,
            Self::Length => Unit::Meters,
            Self::Velocity => Unit::MetersPerSecond,
            Self::Acceleration => Unit::MetersPerSecondSquared,
            Self::Angle => Unit::Degrees,
            Self::AngularVelocity => Unit::DegreesPerSecond,
            Self::Stability => Unit::Calibers,
            Self::Dimensionless => Unit::Unitless,
        }
    }

    /// Check whether `unit` belongs to this group.
    pub fn contains(self, unit: Unit) -> bool {
        unit.group() == self
    }

    /// All members of this group, default first.
    pub fn units(self) -> &'static [Unit] {
        match self {
            Self::Time => &[Unit::Seconds, Unit::Minutes],
            Self::Length => &[Unit::Meters, Unit::Kilometers, Unit::Feet],
            Self::Velocity => &[
                Unit::MetersPerSecond,
                Unit::KilometersPerHour,
                Unit::FeetPerSecond,
            ],
            Self::Acceleration => &[
                Unit::MetersPerSecondSquared,
                Unit::FeetPerSecondSquared,
                Unit::Gravities,
            ],
            Self::Angle => &[Unit::Degrees, Unit::Radians],
            Self::AngularVelocity => &[Unit::DegreesPerSecond, Unit::RadiansPerSecond],
            Self::Stability => &[Unit::Calibers],
            Self::Dimensionless => &[Unit::Unitless],
        }
    }
}

impl fmt::Display for UnitGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Time => "time",
            Self::Length => "length",
            Self::Velocity => "velocity",
            Self::Acceleration => "acceleration",
            Self::Angle => "angle",
            Self::AngularVelocity => "angular velocity",
            Self::Stability => "stability",
            Self::Dimensionless => "dimensionless",
        };
        f.write_str(name)
    }
}

/// A display unit for one [`UnitGroup`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Unit {
    /// Seconds (time base unit).
    Seconds,
    /// Minutes.
    Minutes,
    /// Meters (length base unit).
    Meters,
    /// Kilometers.
    Kilometers,
    /// Feet.
    Feet,
    /// Meters per second (velocity base unit).
    MetersPerSecond,
    /// Kilometers per hour.
    KilometersPerHour,
    /// Feet per second.
    FeetPerSecond,
    /// Meters per second squared (acceleration base unit).
    MetersPerSecondSquared,
    /// Feet per second squared.
    FeetPerSecondSquared,
    /// Multiples of standard gravity.
    Gravities,
    /// Degrees.
    Degrees,
    /// Radians (angle base unit).
    Radians,
    /// Degrees per second.
    DegreesPerSecond,
    /// Radians per second (rotation base unit).
    RadiansPerSecond,
    /// Body calibers (stability margin).
    Calibers,
    /// No unit.
    Unitless,
}

impl Unit {
    /// Convert a raw SI value into this unit for display.
    pub fn to_display(self, raw: f64) -> f64 {
        match self {
            Self::Seconds | Self::Meters | Self::MetersPerSecond => raw,
            Self::MetersPerSecondSquared | Self::Radians | Self::RadiansPerSecond => raw,
            Self::Calibers | Self::Unitless => raw,
            Self::Minutes => raw / 60.0,
            Self::Kilometers => raw / 1000.0,
            Self::Feet => raw * FEET_PER_METER,
            Self::KilometersPerHour => raw * 3.6,
            Self::FeetPerSecond => raw * FEET_PER_METER,
            Self::FeetPerSecondSquared => raw * FEET_PER_METER,
            Self::Gravities => raw / STANDARD_GRAVITY,
            Self::Degrees => raw.to_degrees(),
            Self::DegreesPerSecond => raw.to_degrees(),
        }
    }

    /// The group this unit belongs to.
    pub fn group(self) -> UnitGroup {
        match self {
            Self::Seconds | Self::Minutes => UnitGroup::Time,
            Self::Meters | Self::Kilometers | Self::Feet => UnitGroup::Length,
            Self::MetersPerSecond | Self::KilometersPerHour | Self::FeetPerSecond => {
                UnitGroup::Velocity
            }
            Self::MetersPerSecondSquared | Self::FeetPerSecondSquared | Self::Gravities => {
                UnitGroup::Acceleration
            }
            Self::Degrees | Self::Radians => UnitGroup::Angle,
            Self::DegreesPerSecond | Self::RadiansPerSecond => UnitGroup::AngularVelocity,
            Self::Calibers => UnitGroup::Stability,
            Self::Unitless => UnitGroup::Dimensionless,
        }
    }

    /// Short symbol for axis labels.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Seconds => "s",
            Self::Minutes => "min",
            Self::Meters => "m",
            Self::Kilometers => "km",
            Self::Feet => "ft",
            Self::MetersPerSecond => "m/s",
            Self::KilometersPerHour => "km/h",
            Self::FeetPerSecond => "ft/s",
            Self::MetersPerSecondSquared => "m/s\u{b2}",
            Self::FeetPerSecondSquared => "ft/s\u{b2}",
            Self::Gravities => "G",
            Self::Degrees => "\u{b0}",
            Self::Radians => "rad",
            Self::DegreesPerSecond => "\u{b0}/s",
            Self::RadiansPerSecond => "rad/s",
            Self::Calibers => "cal",
            Self::Unitless => "",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A measured telemetry quantity.
///
/// Channels are value types: two references to `Channel::Altitude` always
/// denote the same quantity with the same unit group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Channel {
    /// Simulation time.
    Time,
    /// Altitude above launch site.
    Altitude,
    /// Vertical velocity.
    VelocityZ,
    /// Vertical acceleration.
    AccelerationZ,
    /// Total velocity magnitude.
    VelocityTotal,
    /// Total acceleration magnitude.
    AccelerationTotal,
    /// Downrange position, east component.
    PositionEast,
    /// Downrange position, north component.
    PositionNorth,
    /// Static stability margin.
    Stability,
    /// Center of pressure location.
    CpLocation,
    /// Center of gravity location.
    CgLocation,
    /// Mach number.
    MachNumber,
    /// Total drag coefficient.
    DragCoefficient,
    /// Friction drag coefficient.
    FrictionDragCoefficient,
    /// Base drag coefficient.
    BaseDragCoefficient,
    /// Pressure drag coefficient.
    PressureDragCoefficient,
    /// Roll rate.
    RollRate,
    /// Roll moment coefficient.
    RollMomentCoefficient,
    /// Roll forcing coefficient.
    RollForcingCoefficient,
    /// Roll damping coefficient.
    RollDampingCoefficient,
    /// Angle of attack.
    AngleOfAttack,
    /// Orientation azimuth angle.
    OrientationPhi,
    /// Orientation zenith angle.
    OrientationTheta,
    /// Simulator time step.
    TimeStep,
    /// Wall-clock computation time.
    ComputationTime,
}

impl Channel {
    /// The unit group this channel's values belong to.
    pub fn unit_group(self) -> UnitGroup {
        match self {
            Self::Time | Self::TimeStep | Self::ComputationTime => UnitGroup::Time,
            Self::Altitude
            | Self::PositionEast
            | Self::PositionNorth
            | Self::CpLocation
            | Self::CgLocation => UnitGroup::Length,
            Self::VelocityZ | Self::VelocityTotal => UnitGroup::Velocity,
            Self::AccelerationZ | Self::AccelerationTotal => UnitGroup::Acceleration,
            Self::Stability => UnitGroup::Stability,
            Self::AngleOfAttack | Self::OrientationPhi | Self::OrientationTheta => UnitGroup::Angle,
            Self::RollRate => UnitGroup::AngularVelocity,
            Self::MachNumber
            | Self::DragCoefficient
            | Self::FrictionDragCoefficient
            | Self::BaseDragCoefficient
            | Self::PressureDragCoefficient
            | Self::RollMomentCoefficient
            | Self::RollForcingCoefficient
            | Self::RollDampingCoefficient => UnitGroup::Dimensionless,
        }
    }

    /// The default display unit for this channel.
    pub fn default_unit(self) -> Unit {
        self.unit_group().default_unit()
    }

    /// Human-readable channel name.
    pub fn label(self) -> &'static str {
        match self {
            Self::Time => "Time",
            Self::Altitude => "Altitude",
            Self::VelocityZ => "Vertical velocity",
            Self::AccelerationZ => "Vertical acceleration",
            Self::VelocityTotal => "Total velocity",
            Self::AccelerationTotal => "Total acceleration",
            Self::PositionEast => "Position east",
            Self::PositionNorth => "Position north",
            Self::Stability => "Stability margin",
            Self::CpLocation => "CP location",
            Self::CgLocation => "CG location",
            Self::MachNumber => "Mach number",
            Self::DragCoefficient => "Drag coefficient",
            Self::FrictionDragCoefficient => "Friction drag coefficient",
            Self::BaseDragCoefficient => "Base drag coefficient",
            Self::PressureDragCoefficient => "Pressure drag coefficient",
            Self::RollRate => "Roll rate",
            Self::RollMomentCoefficient => "Roll moment coefficient",
            Self::RollForcingCoefficient => "Roll forcing coefficient",
            Self::RollDampingCoefficient => "Roll damping coefficient",
            Self::AngleOfAttack => "Angle of attack",
            Self::OrientationPhi => "Orientation azimuth",
            Self::OrientationTheta => "Orientation zenith",
            Self::TimeStep => "Time step",
            Self::ComputationTime => "Computation time",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn group_contains_its_units() {
        for group in [
            UnitGroup::Time,
            UnitGroup::Length,
            UnitGroup::Velocity,
            UnitGroup::Acceleration,
            UnitGroup::Angle,
            UnitGroup::AngularVelocity,
            UnitGroup::Stability,
            UnitGroup::Dimensionless,
        ] {
            assert!(group.contains(group.default_unit()));
            for unit in group.units() {
                assert!(group.contains(*unit));
                assert_eq!(unit.group(), group);
            }
        }
    }

    #[test]
    fn group_rejects_foreign_units() {
        assert!(!UnitGroup::Length.contains(Unit::Seconds));
        assert!(!UnitGroup::Velocity.contains(Unit::Meters));
    }

    #[test]
    fn display_conversion() {
        assert_eq!(Unit::Meters.to_display(1500.0), 1500.0);
        assert_eq!(Unit::Kilometers.to_display(1500.0), 1.5);
        assert!((Unit::Feet.to_display(1.0) - 3.280_84).abs() < 1e-4);
        assert!((Unit::Gravities.to_display(9.806_65) - 1.0).abs() < 1e-12);
        assert!((Unit::Degrees.to_display(std::f64::consts::PI) - 180.0).abs() < 1e-9);
    }

    #[test]
    fn channel_default_unit_matches_group() {
        assert_eq!(Channel::Altitude.default_unit(), Unit::Meters);
        assert_eq!(Channel::VelocityZ.default_unit(), Unit::MetersPerSecond);
        assert_eq!(Channel::MachNumber.default_unit(), Unit::Unitless);
        assert_eq!(Channel::AngleOfAttack.default_unit(), Unit::Degrees);
    }
}
