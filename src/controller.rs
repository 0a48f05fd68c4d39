//! The kinetics form, minus the widgets.
//!
//! [`KineticsForm`] owns what the window shows: the four entry buffers, the
//! result text and the current chart. The GUI binds widgets to these and
//! calls [`KineticsForm::run`] when the button is pressed.

use tracing::debug;

use crate::input::{Field, RawInput};
use crate::kinetics::FirstOrder;
use crate::plot::ChartSpec;
use crate::render::{render_table, TextLog};
use crate::simulation::{simulate, SimulationResult};
use crate::Result;

#[derive(Debug, Default)]
pub struct KineticsForm {
    pub input: RawInput,
    log: TextLog,
    chart: Option<ChartSpec>,
    last: Option<SimulationResult>,
    half_life: Option<f64>,
    plot_enabled: bool,
}

impl KineticsForm {
    pub fn new(plot_enabled: bool) -> Self {
        KineticsForm { plot_enabled, ..Default::default() }
    }

    pub fn field_mut(&mut self, field: Field) -> &mut String {
        self.input.field_mut(field)
    }

    /// Parse, simulate and render.
    ///
    /// On bad input the diagnostic is appended to the log, everything else
    /// on screen stays as it was and the error is returned.
    pub fn run(&mut self) -> Result<&SimulationResult> {
        let params = match self.input.parse() {
            Ok(p) => p,
            Err(e) => {
                self.log.append_line(&e.to_string());
                return Err(e);
            }
        };

        let result = simulate(&params);
        self.log.replace(&render_table(&result));
        // tear down the old chart before building the new one
        self.chart = None;
        if self.plot_enabled {
            self.chart = Some(ChartSpec::from_result(&result));
        }
        self.half_life = FirstOrder::new(params.a0, params.k).half_life();
        debug!(samples = result.len(), plot = self.plot_enabled, "form run complete");
        Ok(self.last.insert(result))
    }

    pub fn log(&self) -> &TextLog {
        &self.log
    }

    pub fn chart(&self) -> Option<&ChartSpec> {
        self.chart.as_ref()
    }

    pub fn last_result(&self) -> Option<&SimulationResult> {
        self.last.as_ref()
    }

    pub fn half_life(&self) -> Option<f64> {
        self.half_life
    }

    pub fn plot_enabled(&self) -> bool {
        self.plot_enabled
    }

    pub fn set_plot_enabled(&mut self, enabled: bool) {
        self.plot_enabled = enabled;
        self.chart = if enabled { self.last.as_ref().map(ChartSpec::from_result) } else { None };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    fn form_with(a0: &str, k: &str, t: &str, steps: &str) -> KineticsForm {
        let mut form = KineticsForm::new(true);
        form.input = RawInput::new(a0, k, t, steps);
        form
    }

    #[test]
    fn test_run_fills_log_and_chart() {
        let mut form = form_with("1.0", "1.0", "2.0", "3");
        let res = form.run().unwrap();
        assert_eq!(res.len(), 3);
        assert_eq!(form.log().lines().count(), 4);
        assert_eq!(form.chart().unwrap().points.len(), 3);
        assert!(form.half_life().is_some());
    }

    #[test]
    fn test_invalid_input_appends_single_diagnostic() {
        let mut form = form_with("abc", "1", "10", "5");
        let err = form.run().unwrap_err();
        assert!(matches!(err, Error::InvalidNumericInput { .. }));
        assert_eq!(form.log().as_str(), "Please enter valid numerical values.\n");
        assert!(form.chart().is_none());
        assert!(form.last_result().is_none());
    }

    #[test]
    fn test_invalid_input_keeps_previous_output() {
        let mut form = form_with("1", "1", "2", "3");
        form.run().unwrap();
        let table = form.log().as_str().to_string();
        let chart = form.chart().cloned();

        *form.field_mut(Field::Steps) = "three".into();
        assert!(form.run().is_err());
        assert_eq!(form.log().as_str(), format!("{table}Please enter valid numerical values.\n"));
        assert_eq!(form.chart().cloned(), chart);
    }

    #[test]
    fn test_rerun_replaces_output() {
        let mut form = form_with("1", "1", "2", "3");
        form.run().unwrap();
        *form.field_mut(Field::Steps) = "5".into();
        form.run().unwrap();
        assert_eq!(form.log().lines().count(), 6);
        assert_eq!(form.chart().unwrap().points.len(), 5);
    }

    #[test]
    fn test_toggling_plot_restores_last_chart() {
        let mut form = form_with("1", "1", "2", "3");
        form.run().unwrap();
        let chart = form.chart().cloned();
        form.set_plot_enabled(false);
        assert!(form.chart().is_none());
        form.set_plot_enabled(true);
        assert_eq!(form.chart().cloned(), chart);
    }

    #[test]
    fn test_enabling_plot_before_any_run() {
        let mut form = KineticsForm::new(false);
        form.set_plot_enabled(true);
        assert!(form.chart().is_none());
    }

    #[test]
    fn test_plot_disabled_has_no_chart() {
        let mut form = KineticsForm::new(false);
        form.input = RawInput::new("1", "1", "2", "3");
        form.run().unwrap();
        assert!(form.chart().is_none());
        assert_eq!(form.log().lines().count(), 4);
    }
}
