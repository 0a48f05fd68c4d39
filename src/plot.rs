//! Line chart of a simulation run.
//!
//! [`ChartSpec`] is plain data so the controller can build and replace it
//! without a display. Drawing goes through `egui_plot` when the `gui`
//! feature is on.

use crate::simulation::SimulationResult;

pub const X_LABEL: &str = "Time (s)";
pub const Y_LABEL: &str = "Concentration of A (mol/L)";
pub const SERIES_NAME: &str = "A(t)";

#[derive(Clone, Debug, PartialEq)]
pub struct ChartSpec {
    pub series_name: String,
    pub x_label: String,
    pub y_label: String,
    pub points: Vec<[f64; 2]>,
}

impl ChartSpec {
    pub fn from_result(result: &SimulationResult) -> Self {
        ChartSpec {
            series_name: SERIES_NAME.to_string(),
            x_label: X_LABEL.to_string(),
            y_label: Y_LABEL.to_string(),
            points: result.samples().iter().map(|s| [s.time, s.concentration]).collect(),
        }
    }
}

#[cfg(feature = "gui")]
pub fn show_chart(ui: &mut eframe::egui::Ui, chart: &ChartSpec) {
    use egui_plot::{Corner, Legend, Line, Plot, PlotPoints};

    let pts: PlotPoints = chart.points.iter().copied().collect();
    Plot::new("concentration_plot")
        .x_axis_label(chart.x_label.as_str())
        .y_axis_label(chart.y_label.as_str())
        .legend(Legend::default().position(Corner::RightTop))
        .allow_zoom(true)
        .allow_drag(true)
        .show(ui, |plot_ui| {
            plot_ui.line(Line::new(pts).width(2.0).name(&chart.series_name));
        });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::SimulationInput;
    use crate::simulation::simulate;

    #[test]
    fn test_chart_points_follow_samples() {
        let res = simulate(&SimulationInput { a0: 2.0, k: 0.0, t_total: 4.0, steps: 3 });
        let chart = ChartSpec::from_result(&res);
        assert_eq!(chart.points, vec![[0.0, 2.0], [2.0, 2.0], [4.0, 2.0]]);
        assert_eq!(chart.x_label, X_LABEL);
        assert_eq!(chart.y_label, Y_LABEL);
        assert_eq!(chart.series_name, SERIES_NAME);
    }
}
