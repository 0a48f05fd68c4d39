use std::fs::File;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use kinetics_sim::render::render_table;
use kinetics_sim::{simulate, Config, Error, Point, PointerEvent, RawInput, Sprite};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Kinetics simulator - headless runs of the form and the sprite drag
#[derive(Parser, Debug)]
#[command(name = "kinetics-cli")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Compute A(t) = A0 * exp(-k t) and print the result table
    Simulate {
        /// Initial concentration of A (mol/L)
        #[arg(long, allow_hyphen_values = true)]
        a0: String,

        /// Rate constant (1/s)
        #[arg(long, allow_hyphen_values = true)]
        k: String,

        /// Total time (s)
        #[arg(long, allow_hyphen_values = true)]
        t_total: String,

        /// Number of time steps
        #[arg(long, allow_hyphen_values = true)]
        steps: String,

        /// Also write time,concentration rows to this CSV file
        #[arg(long)]
        csv: Option<PathBuf>,
    },

    /// Replay pointer events (press:x,y move:x,y release:x,y) against the sprite
    Drag {
        /// Initial sprite top-left corner (defaults to the configured start)
        #[arg(long, allow_hyphen_values = true)]
        start: Option<Point>,

        /// Sprite width,height (defaults to the configured placeholder size)
        #[arg(long)]
        size: Option<Point>,

        /// Events in order
        #[arg(required = true, allow_hyphen_values = true)]
        events: Vec<PointerEvent>,
    },
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .with_writer(std::io::stderr)
        .init();

    let config = Config::load_or_default(cli.config.as_deref())?;
    debug!(?config, "loaded configuration");

    match cli.command {
        Commands::Simulate { a0, k, t_total, steps, csv } => {
            let raw = RawInput::new(a0, k, t_total, steps);
            run_simulate(&raw, csv)
        }
        Commands::Drag { start, size, events } => {
            let start = start.unwrap_or(Point::new(config.sprite.start_x, config.sprite.start_y));
            let edge = config.sprite.placeholder_size as f32;
            let size = size.unwrap_or(Point::new(edge, edge));
            run_drag(start, size, &events);
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn run_simulate(raw: &RawInput, csv: Option<PathBuf>) -> anyhow::Result<ExitCode> {
    let params = match raw.parse() {
        Ok(p) => p,
        Err(e @ Error::InvalidNumericInput { .. }) => {
            println!("{e}");
            return Ok(ExitCode::FAILURE);
        }
        Err(e) => return Err(e.into()),
    };
    let result = simulate(&params);
    print!("{}", render_table(&result));

    if let Some(path) = csv {
        result.write_csv(File::create(&path)?)?;
        info!(path = %path.display(), rows = result.len(), "wrote CSV");
    }
    Ok(ExitCode::SUCCESS)
}

fn run_drag(start: Point, size: Point, events: &[PointerEvent]) {
    let mut sprite = Sprite::new(start, size.x, size.y);
    println!("start {}", sprite.position);
    for ev in events {
        let delta = sprite.handle(*ev);
        debug!(?ev, ?delta, state = ?sprite.state(), "pointer event");
        println!("{:?} -> {}", ev, sprite.position);
    }
}
