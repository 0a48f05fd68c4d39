//! First-order reaction kinetics and a draggable sprite.
//!
//! The numeric core (`input`, `timeseries`, `kinetics`, `simulation`,
//! `render`) has no GUI dependency. The `gui` feature adds the egui pieces
//! used by the desktop binaries.

pub mod config;
pub mod controller;
pub mod input;
pub mod kinetics;
pub mod plot;
pub mod render;
pub mod simulation;
pub mod sprite;
#[cfg(feature = "gui")]
pub mod sprite_view;
pub mod timeseries;

pub use config::Config;
pub use controller::KineticsForm;
pub use input::{Field, RawInput, SimulationInput};
pub use kinetics::{concentration, FirstOrder, RateLaw};
pub use simulation::{simulate, Sample, SimulationResult};
pub use sprite::{Delta, DragState, Point, PointerEvent, Sprite};

/// Result type alias for the simulator
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the simulator
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A form field did not parse as its numeric type. The message is the
    /// line shown to the user.
    #[error("Please enter valid numerical values.")]
    InvalidNumericInput { field: Field, value: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Image error: {0}")]
    Image(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}
