//! Error type shared by the measurement core and the settings layer.

use std::path::PathBuf;

/// Everything that can go wrong in this crate.
///
/// The math variants are programming-error guards: callers are expected never
/// to hit them with values produced by the tick table or the unit converter.
#[derive(Debug, thiserror::Error)]
pub enum RulerError {
    /// `modulo` was asked to divide by zero or by/into NaN.
    #[error("modulo called with a = {a} and b = {b}; b must be non-zero and neither may be NaN")]
    InvalidModulus { a: f64, b: f64 },

    /// A tick step must be finite and strictly positive.
    #[error("tick step {0} must be finite and greater than zero")]
    InvalidStep(f64),

    /// Fraction formatting only supports power-of-two denominators.
    #[error("maximum denominator {0} is not a power of two >= 2")]
    InvalidDenominator(u32),

    /// No power-of-two denominator evenly divides the fractional remainder.
    #[error("no denominator up to {max} divides remainder {remainder}")]
    NoDenominator { remainder: f64, max: u32 },

    #[error("HOME env var not set")]
    HomeNotSet,

    #[error("I/O error on {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("settings JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("hotkeys YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl RulerError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        RulerError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T, E = RulerError> = std::result::Result<T, E>;
