//! Crate-wide error types.

use thiserror::Error;

/// Errors caused by invalid or unresolvable configuration.
///
/// These are the only aborting errors in the crate: missing training maxes,
/// disabled features, and out-of-range advisory values all degrade to empty
/// results or warning strings instead.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Muscle group has no volume landmarks registered.
    #[error("Unknown muscle group: {0}")]
    UnknownMuscle(String),

    /// Lift key has no configured training max.
    #[error("Unknown lift: {0}")]
    UnknownLift(String),

    /// Program configuration file could not be read.
    #[error("Failed to read program config: {0}")]
    FileReadError(String),

    /// Program configuration could not be parsed.
    #[error("Failed to parse program config: {0}")]
    ParseError(String),

    /// Volume landmarks violate the MV <= MEV <= MAV <= MRV ordering.
    #[error("Invalid volume landmarks for {muscle}: {detail}")]
    InvalidLandmarks { muscle: String, detail: String },
}

/// Non-fatal advisory emitted alongside a successful result.
///
/// Callers decide whether to surface these; they never affect control flow.
pub type ValidationWarning = String;
