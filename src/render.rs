use std::fmt::Write;

use crate::simulation::SimulationResult;

pub const TABLE_HEADER: &str = "Time (s)\tConcentration of A (mol/L)";

/// Two-column table: time to 2 decimals, concentration to 4.
pub fn render_table(result: &SimulationResult) -> String {
    let mut s = String::with_capacity(32 * (result.len() + 1));
    s.push_str(TABLE_HEADER);
    s.push('\n');
    for sample in result.samples() {
        // writing into a String cannot fail
        let _ = writeln!(s, "{}\t\t{}", fixed(sample.time, 2), fixed(sample.concentration, 4));
    }
    s
}

// NaN prints lowercase like the infinities do
fn fixed(v: f64, decimals: usize) -> String {
    if v.is_nan() {
        "nan".to_string()
    } else {
        format!("{:.*}", decimals, v)
    }
}

/// Text area contents. Supports only clearing and appending at the end.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TextLog {
    buf: String,
}

impl TextLog {
    pub fn new() -> Self {
        TextLog { buf: String::new() }
    }

    pub fn clear(&mut self) {
        self.buf.clear();
    }

    pub fn append(&mut self, text: &str) {
        self.buf.push_str(text);
    }

    pub fn append_line(&mut self, line: &str) {
        self.buf.push_str(line);
        self.buf.push('\n');
    }

    /// Clear, then write `text`.
    pub fn replace(&mut self, text: &str) {
        self.clear();
        self.append(text);
    }

    pub fn as_str(&self) -> &str {
        &self.buf
    }

    pub fn lines(&self) -> std::str::Lines<'_> {
        self.buf.lines()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }
}
