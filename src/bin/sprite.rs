use clap::Parser;
use eframe::egui;
use kinetics_sim::sprite_view::SpriteView;
use kinetics_sim::{Config, Point, PointerEvent, Sprite};
use std::path::PathBuf;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

/// Drag an image around a canvas with the mouse
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Image to drag; overrides the configured path
    image: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Config file path
    #[arg(short, long)]
    config: Option<PathBuf>,
}

struct App {
    view: SpriteView,
    sprite: Sprite,
}

impl App {
    fn new(cc: &eframe::CreationContext<'_>, config: &Config, image: Option<PathBuf>) -> Self {
        let ctx = &cc.egui_ctx;
        let view = match image.or_else(|| config.sprite.image_path.clone()) {
            Some(path) => SpriteView::from_file(ctx, &path).unwrap_or_else(|e| {
                warn!(error = %e, "falling back to generated sprite");
                SpriteView::placeholder(ctx, config.sprite.placeholder_size)
            }),
            None => SpriteView::placeholder(ctx, config.sprite.placeholder_size),
        };
        let size = view.size();
        let sprite = Sprite::new(Point::new(config.sprite.start_x, config.sprite.start_y), size.x, size.y);
        Self { view, sprite }
    }

    /// Translate this frame's primary-button input into canvas events.
    fn pointer_events(ctx: &egui::Context, origin: egui::Pos2) -> Vec<PointerEvent> {
        ctx.input(|i| {
            let mut out = Vec::new();
            // release must still arrive when the pointer has left the window
            let pos = i.pointer.interact_pos().or(i.pointer.latest_pos()).unwrap_or(origin);
            let p = Point::new(pos.x - origin.x, pos.y - origin.y);
            if i.pointer.primary_pressed() {
                out.push(PointerEvent::Press(p));
            } else if i.pointer.primary_down() && i.pointer.delta() != egui::Vec2::ZERO {
                out.push(PointerEvent::Move(p));
            }
            if i.pointer.primary_released() {
                out.push(PointerEvent::Release(p));
            }
            out
        })
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().frame(egui::Frame::none()).show(ctx, |ui| {
            let (response, painter) = ui.allocate_painter(ui.available_size(), egui::Sense::drag());
            let origin = response.rect.min;

            for ev in Self::pointer_events(ctx, origin) {
                if let Some(delta) = self.sprite.handle(ev) {
                    debug!(?delta, position = %self.sprite.position, "sprite moved");
                }
            }

            painter.rect_filled(response.rect, 0.0, ui.visuals().extreme_bg_color);
            self.view.paint(&painter, origin, &self.sprite);
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
        viewport: egui::ViewportBuilder::default().with_title(config.sprite.title.clone()),
        ..Default::default()
    };
    let title = config.sprite.title.clone();
    let image = args.image;
    eframe::run_native(&title, native_options, Box::new(move |cc| Box::new(App::new(cc, &config, image))))
        .map_err(|e| anyhow::anyhow!("gui failed: {e}"))
}
