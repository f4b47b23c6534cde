//! Error types.

use thiserror::Error;

/// Errors surfaced when loading a screen snapshot.
///
/// Rendering itself is infallible; the only fallible boundary is decoding
/// the emulator's JSON dump.
#[derive(Debug, Error)]
pub enum ScreenError {
    /// The dump was not valid JSON, or did not match the dump shape.
    #[error("malformed screen dump: {0}")]
    MalformedDump(#[from] serde_json::Error),
}
