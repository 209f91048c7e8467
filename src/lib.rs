//! Ruler crate root: re-exports and module wiring.
//!
//! An on-screen ruler built on egui/eframe. The measurement core is free of
//! any GUI types and can be used on its own:
//! - `data`: unit conversion, tick tables, scale layout, angle gauge geometry,
//!   fraction labels and the ruler view state
//! - `persistence`: settings file (JSON)
//! - `config`: run-time configuration
//! - `panels`: egui painters for the ruler body, angle overlay and context menu
//! - `app`: the eframe application and its [`run_ruler`] entry point

pub mod app;
pub mod config;
pub mod data;
pub mod error;
pub mod panels;
pub mod persistence;

// Public re-exports for a compact external API
pub use app::{run_ruler, RulerApp};
pub use config::RulerConfig;
pub use data::ruler::RulerState;
pub use data::units::{Orientation, Units, ZeroPoint};
pub use error::{Result, RulerError};
pub use persistence::Settings;
