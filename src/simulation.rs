use std::io;

use serde::Serialize;
use tracing::debug;

use crate::input::SimulationInput;
use crate::kinetics::{FirstOrder, RateLaw};
use crate::timeseries::linspace;
use crate::Result;

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Sample {
    pub time: f64,
    pub concentration: f64,
}

/// Ordered `(time, concentration)` samples of one run.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SimulationResult {
    samples: Vec<Sample>,
}

impl SimulationResult {
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn times(&self) -> impl Iterator<Item = f64> + '_ {
        self.samples.iter().map(|s| s.time)
    }

    pub fn concentrations(&self) -> impl Iterator<Item = f64> + '_ {
        self.samples.iter().map(|s| s.concentration)
    }

    /// Write `time,concentration` rows with a header line. The header is
    /// written even when there are no samples.
    pub fn write_csv<W: io::Write>(&self, writer: W) -> Result<()> {
        let mut wtr = csv::WriterBuilder::new().has_headers(false).from_writer(writer);
        wtr.write_record(["time", "concentration"])?;
        for s in &self.samples {
            wtr.serialize(s)?;
        }
        wtr.flush()?;
        Ok(())
    }
}

/// Sample the first-order law over `[0, t_total]`.
pub fn simulate(input: &SimulationInput) -> SimulationResult {
    let law = FirstOrder::new(input.a0, input.k);
    let times = linspace(input.t_total, input.steps);
    let concentrations = law.evaluate(&times);
    let samples: Vec<Sample> = times
        .into_iter()
        .zip(concentrations)
        .map(|(time, concentration)| Sample { time, concentration })
        .collect();
    debug!(?law, t_total = input.t_total, samples = samples.len(), "simulated decay curve");
    SimulationResult { samples }
}
