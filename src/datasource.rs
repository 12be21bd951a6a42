//! Telemetry data providers.
//!
//! Range fitting only ever needs per-channel bounds and sample counts, so the
//! [`DataSource`] trait exposes exactly that. [`FlightRun`] is the bundled
//! in-memory provider: it stores raw samples per channel and tracks bounds
//! incrementally on append.

use std::collections::BTreeMap;

use crate::units::Channel;

/// Provider of per-channel value bounds over one or more simulation runs.
///
/// All values are raw (SI base) units; unit conversion happens in the fitter.
/// Implementations return NaN for channels a run never recorded. Runs may be
/// empty (zero samples); callers skip those when aggregating bounds.
pub trait DataSource {
    /// Number of concurrent runs in this source.
    fn run_count(&self) -> usize;

    /// Number of samples recorded in the given run.
    fn sample_count(&self, run: usize) -> usize;

    /// Smallest raw value of `channel` in the given run, NaN if absent.
    fn minimum(&self, channel: Channel, run: usize) -> f64;

    /// Largest raw value of `channel` in the given run, NaN if absent.
    fn maximum(&self, channel: Channel, run: usize) -> f64;
}

/// Per-channel sample storage with incrementally tracked bounds.
#[derive(Debug, Clone)]
struct Trace {
    values: Vec<f64>,
    min: f64,
    max: f64,
}

impl Trace {
    fn new() -> Self {
        Self {
            values: Vec::new(),
            min: f64::NAN,
            max: f64::NAN,
        }
    }

    fn push(&mut self, value: f64) {
        self.values.push(value);
        if !value.is_finite() {
            return;
        }
        if self.min.is_nan() || value < self.min {
            self.min = value;
        }
        if self.max.is_nan() || value > self.max {
            self.max = value;
        }
    }
}

/// One simulation run recorded channel by channel.
///
/// Channels may have different sample counts; the run's sample count is the
/// longest trace. Non-finite samples are stored but excluded from bounds.
#[derive(Debug, Clone, Default)]
pub struct FlightRun {
    traces: BTreeMap<Channel, Trace>,
}

impl FlightRun {
    /// Create an empty run.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a single sample to a channel.
    pub fn record(&mut self, channel: Channel, value: f64) {
        self.traces.entry(channel).or_insert_with(Trace::new).push(value);
    }

    /// Append multiple samples to a channel.
    pub fn record_all<I>(&mut self, channel: Channel, values: I)
    where
        I: IntoIterator<Item = f64>,
    {
        let trace = self.traces.entry(channel).or_insert_with(Trace::new);
        for value in values {
            trace.push(value);
        }
    }

    /// Number of samples in the longest channel trace.
    pub fn len(&self) -> usize {
        self.traces
            .values()
            .map(|trace| trace.values.len())
            .max()
            .unwrap_or(0)
    }

    /// Check whether no samples have been recorded.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Raw samples of a channel, empty if never recorded.
    pub fn samples(&self, channel: Channel) -> &[f64] {
        self.traces
            .get(&channel)
            .map(|trace| trace.values.as_slice())
            .unwrap_or(&[])
    }
}

impl DataSource for FlightRun {
    fn run_count(&self) -> usize {
        1
    }

    fn sample_count(&self, run: usize) -> usize {
        if run == 0 { self.len() } else { 0 }
    }

    fn minimum(&self, channel: Channel, run: usize) -> f64 {
        if run != 0 {
            return f64::NAN;
        }
        self.traces.get(&channel).map_or(f64::NAN, |trace| trace.min)
    }

    fn maximum(&self, channel: Channel, run: usize) -> f64 {
        if run != 0 {
            return f64::NAN;
        }
        self.traces.get(&channel).map_or(f64::NAN, |trace| trace.max)
    }
}

/// Several concurrent runs exposed as one [`DataSource`].
#[derive(Debug, Clone, Default)]
pub struct SimulationData {
    runs: Vec<FlightRun>,
}

impl SimulationData {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a run.
    pub fn push_run(&mut self, run: FlightRun) {
        self.runs.push(run);
    }

    /// Access all runs.
    pub fn runs(&self) -> &[FlightRun] {
        &self.runs
    }
}

impl FromIterator<FlightRun> for SimulationData {
    fn from_iter<I: IntoIterator<Item = FlightRun>>(iter: I) -> Self {
        Self {
            runs: iter.into_iter().collect(),
        }
    }
}

impl DataSource for SimulationData {
    fn run_count(&self) -> usize {
        self.runs.len()
    }

    fn sample_count(&self, run: usize) -> usize {
        self.runs.get(run).map_or(0, FlightRun::len)
    }

    fn minimum(&self, channel: Channel, run: usize) -> f64 {
        self.runs
            .get(run)
            .map_or(f64::NAN, |r| r.minimum(channel, 0))
    }

    fn maximum(&self, channel: Channel, run: usize) -> f64 {
        self.runs
            .get(run)
            .map_or(f64::NAN, |r| r.maximum(channel, 0))
    }
}
