//! Stock plot configurations.
//!
//! Each call builds a fresh, independent list; there is no shared registry.
//! Presets pin only the series whose axis matters (typically the headline
//! quantity on the primary axis) and leave the rest to the auto-assigner.

use crate::config::PlotConfiguration;
use crate::units::Channel;

/// Event tags toggled by most presets.
const COMMON_EVENTS: &[&str] = &[
    "ignition",
    "burnout",
    "apogee",
    "recovery-device-deployment",
    "stage-separation",
    "ground-hit",
    "tumble",
    "exception",
    "sim-abort",
];

/// Pin a series to an axis. Axis indices in this module are static and
/// below `AXES_COUNT`.
fn pin(config: &mut PlotConfiguration, channel: Channel, axis: usize) {
    let _ = config.add_series_on(channel, axis);
}

fn with_events(mut config: PlotConfiguration, events: &[&str]) -> PlotConfiguration {
    for event in events {
        config.set_event(*event, true);
    }
    config
}

/// Build the stock preset list in display order.
pub fn default_presets() -> Vec<PlotConfiguration> {
    let mut presets = Vec::new();

    let mut config = PlotConfiguration::new("Vertical motion vs. time");
    pin(&mut config, Channel::Altitude, 0);
    config.add_series(Channel::VelocityZ);
    config.add_series(Channel::AccelerationZ);
    presets.push(with_events(config, COMMON_EVENTS));

    let mut config = PlotConfiguration::new("Total motion vs. time");
    pin(&mut config, Channel::Altitude, 0);
    config.add_series(Channel::VelocityTotal);
    config.add_series(Channel::AccelerationTotal);
    presets.push(with_events(config, COMMON_EVENTS));

    let mut config = PlotConfiguration::with_domain("Flight side profile", Channel::PositionEast);
    config.add_series(Channel::Altitude);
    presets.push(with_events(config, COMMON_EVENTS));

    let mut config = PlotConfiguration::with_domain("Ground track", Channel::PositionEast);
    pin(&mut config, Channel::PositionNorth, 0);
    pin(&mut config, Channel::Altitude, 1);
    presets.push(with_events(
        config,
        &[
            "ignition",
            "burnout",
            "apogee",
            "recovery-device-deployment",
            "ground-hit",
            "exception",
            "sim-abort",
        ],
    ));

    let mut config = PlotConfiguration::new("Stability vs. time");
    pin(&mut config, Channel::Stability, 0);
    pin(&mut config, Channel::CpLocation, 1);
    pin(&mut config, Channel::CgLocation, 1);
    let mut config = with_events(config, COMMON_EVENTS);
    config.set_event("exception", false);
    presets.push(config);

    let mut config =
        PlotConfiguration::with_domain("Drag coefficients vs. Mach number", Channel::MachNumber);
    pin(&mut config, Channel::DragCoefficient, 0);
    pin(&mut config, Channel::FrictionDragCoefficient, 0);
    pin(&mut config, Channel::BaseDragCoefficient, 0);
    pin(&mut config, Channel::PressureDragCoefficient, 0);
    presets.push(with_events(config, &["exception", "sim-abort"]));

    let mut config = PlotConfiguration::new("Roll characteristics");
    pin(&mut config, Channel::RollRate, 0);
    pin(&mut config, Channel::RollMomentCoefficient, 1);
    pin(&mut config, Channel::RollForcingCoefficient, 1);
    pin(&mut config, Channel::RollDampingCoefficient, 1);
    let mut config = with_events(config, COMMON_EVENTS);
    config.set_event("launch-rod-clear", true);
    presets.push(config);

    let mut config = PlotConfiguration::new("Angle of attack and orientation vs. time");
    pin(&mut config, Channel::AngleOfAttack, 0);
    config.add_series(Channel::OrientationPhi);
    config.add_series(Channel::OrientationTheta);
    presets.push(with_events(config, COMMON_EVENTS));

    let mut config = PlotConfiguration::new("Simulation time step and computation time");
    config.add_series(Channel::TimeStep);
    config.add_series(Channel::ComputationTime);
    presets.push(with_events(config, COMMON_EVENTS));

    presets
}
