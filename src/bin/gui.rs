use clap::Parser;
use eframe::egui;
use kinetics_sim::{plot, Config, Field, KineticsForm};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Chemical process simulator (native GUI)
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Config file path
    #[arg(short, long)]
    config: Option<PathBuf>,
}

struct App {
    form: KineticsForm,
}

impl App {
    fn new(config: &Config) -> Self {
        Self { form: KineticsForm::new(config.form.plot_enabled) }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::Grid::new("inputs").num_columns(2).spacing([12.0, 6.0]).show(ui, |ui| {
                for field in Field::ALL {
                    ui.label(field.label());
                    ui.text_edit_singleline(self.form.field_mut(field));
                    ui.end_row();
                }
            });

            ui.horizontal(|ui| {
                if ui.button("Run Simulation").clicked() {
                    // the diagnostic is already in the text area
                    let _ = self.form.run();
                }
                let mut show_plot = self.form.plot_enabled();
                if ui.checkbox(&mut show_plot, "Plot").changed() {
                    self.form.set_plot_enabled(show_plot);
                }
                if let Some(t_half) = self.form.half_life() {
                    ui.label(format!("half-life: {:.4} s", t_half));
                }
            });

            ui.separator();
            egui::ScrollArea::vertical().max_height(180.0).auto_shrink([false, true]).show(ui, |ui| {
                ui.monospace(self.form.log().as_str());
            });

            if let Some(chart) = self.form.chart() {
                ui.separator();
                plot::show_chart(ui, chart);
            }
        });
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let default_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .init();

    let config = Config::load_or_default(args.config.as_deref())?;
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(config.form.title.clone())
            .with_inner_size([config.form.window_width, config.form.window_height]),
        ..Default::default()
    };
    let title = config.form.title.clone();
    eframe::run_native(&title, native_options, Box::new(move |_cc| Box::new(App::new(&config))))
        .map_err(|e| anyhow::anyhow!("gui failed: {e}"))
}
