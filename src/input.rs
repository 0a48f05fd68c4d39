//! Form input parsing.
//!
//! Only parse success is checked. Zero or negative values are passed through
//! untouched: a negative rate constant is growth, a negative total time just
//! runs the sample grid backwards.

use std::fmt;
use std::str::FromStr;

use tracing::warn;

use crate::{Error, Result};

/// The four form fields, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    InitialConcentration,
    RateConstant,
    TotalTime,
    Steps,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::InitialConcentration, Field::RateConstant, Field::TotalTime, Field::Steps];

    /// Label shown next to the entry box.
    pub fn label(self) -> &'static str {
        match self {
            Field::InitialConcentration => "Initial Concentration of A [A0] (mol/L)",
            Field::RateConstant => "Rate Constant k (1/s)",
            Field::TotalTime => "Total Time t (s)",
            Field::Steps => "Time Steps",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::InitialConcentration => "A0",
            Field::RateConstant => "k",
            Field::TotalTime => "t_total",
            Field::Steps => "steps",
        };
        f.write_str(name)
    }
}

/// Raw text as typed by the user.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RawInput {
    pub a0: String,
    pub k: String,
    pub t_total: String,
    pub steps: String,
}

impl RawInput {
    pub fn new(a0: impl Into<String>, k: impl Into<String>, t_total: impl Into<String>, steps: impl Into<String>) -> Self {
        RawInput { a0: a0.into(), k: k.into(), t_total: t_total.into(), steps: steps.into() }
    }

    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::InitialConcentration => &self.a0,
            Field::RateConstant => &self.k,
            Field::TotalTime => &self.t_total,
            Field::Steps => &self.steps,
        }
    }

    pub fn field_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::InitialConcentration => &mut self.a0,
            Field::RateConstant => &mut self.k,
            Field::TotalTime => &mut self.t_total,
            Field::Steps => &mut self.steps,
        }
    }

    /// Parse all four fields. The first failure aborts the whole parse.
    pub fn parse(&self) -> Result<SimulationInput> {
        Ok(SimulationInput {
            a0: parse_field(Field::InitialConcentration, &self.a0)?,
            k: parse_field(Field::RateConstant, &self.k)?,
            t_total: parse_field(Field::TotalTime, &self.t_total)?,
            steps: parse_steps(&self.steps)?,
        })
    }
}

/// Largest sample count a run will allocate. Anything above is treated as
/// unparseable rather than risking an allocation failure.
pub const MAX_STEPS: usize = 1_000_000;

fn parse_steps(text: &str) -> Result<usize> {
    let steps: usize = parse_field(Field::Steps, text)?;
    if steps > MAX_STEPS {
        warn!(steps, max = MAX_STEPS, "sample count too large");
        return Err(Error::InvalidNumericInput { field: Field::Steps, value: text.to_string() });
    }
    Ok(steps)
}

fn parse_field<T: FromStr>(field: Field, text: &str) -> Result<T> {
    text.trim().parse::<T>().map_err(|_| {
        warn!(%field, value = text, "rejected form input");
        Error::InvalidNumericInput { field, value: text.to_string() }
    })
}

/// Parsed parameters for one simulation run.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimulationInput {
    /// initial concentration (mol/L)
    pub a0: f64,
    /// rate constant (1/s)
    pub k: f64,
    /// total simulated time (s)
    pub t_total: f64,
    /// number of samples, endpoints included
    pub steps: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid() {
        let input = RawInput::new("1.0", "1", "2", "3").parse().unwrap();
        assert_eq!(input, SimulationInput { a0: 1.0, k: 1.0, t_total: 2.0, steps: 3 });
    }

    #[test]
    fn test_parse_trims_whitespace_and_exponents() {
        let input = RawInput::new(" 2.5e-3 ", "\t0.1", "10 ", " 50").parse().unwrap();
        assert_eq!(input.a0, 2.5e-3);
        assert_eq!(input.k, 0.1);
        assert_eq!(input.t_total, 10.0);
        assert_eq!(input.steps, 50);
    }

    #[test]
    fn test_non_positive_values_pass_through() {
        let input = RawInput::new("-1", "-0.5", "0", "0").parse().unwrap();
        assert_eq!(input.a0, -1.0);
        assert_eq!(input.k, -0.5);
        assert_eq!(input.t_total, 0.0);
        assert_eq!(input.steps, 0);
    }

    #[test]
    fn test_reports_first_bad_field() {
        let err = RawInput::new("abc", "x", "10", "5").parse().unwrap_err();
        match err {
            Error::InvalidNumericInput { field, value } => {
                assert_eq!(field, Field::InitialConcentration);
                assert_eq!(value, "abc");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_steps_must_be_integer() {
        for bad in ["2.5", "-3", "", "ten"] {
            let err = RawInput::new("1", "1", "1", bad).parse().unwrap_err();
            assert!(matches!(err, Error::InvalidNumericInput { field: Field::Steps, .. }));
        }
    }

    #[test]
    fn test_steps_above_cap_rejected() {
        let ok = RawInput::new("1", "1", "1", MAX_STEPS.to_string()).parse().unwrap();
        assert_eq!(ok.steps, MAX_STEPS);
        for big in [(MAX_STEPS + 1).to_string(), "10000000000".to_string(), usize::MAX.to_string()] {
            let err = RawInput::new("1", "1", "1", big).parse().unwrap_err();
            assert!(matches!(err, Error::InvalidNumericInput { field: Field::Steps, .. }));
        }
    }

    #[test]
    fn test_empty_field_is_invalid() {
        let err = RawInput::new("1", "", "1", "1").parse().unwrap_err();
        assert!(matches!(err, Error::InvalidNumericInput { field: Field::RateConstant, .. }));
        assert_eq!(err.to_string(), "Please enter valid numerical values.");
    }

    #[test]
    fn test_field_accessors() {
        let mut raw = RawInput::default();
        for (i, field) in Field::ALL.into_iter().enumerate() {
            *raw.field_mut(field) = i.to_string();
        }
        assert_eq!(raw, RawInput::new("0", "1", "2", "3"));
        assert_eq!(raw.field(Field::Steps), "3");
    }
}
