//! flightplot computes axis layouts for flight telemetry charts.
//! Given a set of series, some pinned to an axis and some not, it chooses
//! axis assignments and padded, zero-aware ranges that keep every series
//! legible across up to two independent value axes.

#![forbid(unsafe_code)]

pub mod axis;
pub mod config;
pub mod datasource;
pub mod error;
mod fit;
pub mod presets;
pub mod series;
pub mod units;

pub use axis::Axis;
pub use config::{AXES_COUNT, EventTag, PlotConfiguration};
pub use datasource::{DataSource, FlightRun, SimulationData};
pub use error::PlotError;
pub use presets::default_presets;
pub use series::{AxisSelection, SeriesEntry};
pub use units::{Channel, Unit, UnitGroup};
