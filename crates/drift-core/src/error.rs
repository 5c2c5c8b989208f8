//! Framework error type.
//!
//! Errors only ever surface at construction/configuration time.  Per-frame
//! stepping in `drift-motion` and `drift-timer` is infallible: degenerate
//! input is clamped, never reported.

use thiserror::Error;

/// The top-level error type for `drift-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum DriftError {
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for all `drift-*` crates.
pub type DriftResult<T> = Result<T, DriftError>;
