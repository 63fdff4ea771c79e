//! Render errors and their inline diagnostics.

use std::fmt;

/// Written in place of the slice when no config is given.
pub const CONFIG_MISSING: &str = "%!(slice formatter given nil *Config)";

/// Written in place of the slice when the input is not a sequence.
pub const NOT_A_SEQUENCE: &str = "%!(slice formatter only formats slices)";

/// Why a render stopped early.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    /// No config was supplied.
    #[error("slice formatter given nil *Config")]
    ConfigMissing,
    /// The input was not an ordered, indexable collection.
    #[error("slice formatter only formats slices")]
    NotASequence,
    /// The sink rejected a write. Nothing further was emitted.
    #[error("slice formatter sink failed")]
    Sink(#[from] fmt::Error),
}

impl RenderError {
    /// The inline text written for this error, if it has one.
    pub fn diagnostic(self) -> Option<&'static str> {
        match self {
            RenderError::ConfigMissing => Some(CONFIG_MISSING),
            RenderError::NotASequence => Some(NOT_A_SEQUENCE),
            RenderError::Sink(_) => None,
        }
    }
}

/// Collapse a render result to what a `core::fmt` impl returns.
///
/// Diagnostics were already written inline, so only sink failures remain errors.
pub(crate) fn into_fmt_result(result: Result<(), RenderError>) -> fmt::Result {
    match result {
        Ok(()) | Err(RenderError::ConfigMissing | RenderError::NotASequence) => Ok(()),
        Err(RenderError::Sink(e)) => Err(e),
    }
}
