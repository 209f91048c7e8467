//! Application module for the ruler.
//!
//! | Sub-module      | Responsibility |
//! | --------------- | -------------- |
//! | [`ruler_app`]   | [`RulerApp`] (eframe): input, window sync, overlay, save on close |
//! | [`run`]         | Top-level [`run_ruler()`] entry point and icon loading |

mod ruler_app;
mod run;

pub use ruler_app::RulerApp;
pub use run::run_ruler;
