//! Error type shared by the codec and both synchronizers.

use thiserror::Error;

use crate::page::ElementId;

/// Errors produced while parsing colors or routing picker events.
///
/// `InvalidHex` is the only error a user can cause by typing. Hosts treat it
/// as "no visual update": the bound state is never touched when it is
/// returned.
#[derive(Debug, Error)]
pub enum ColorError {
    #[error("invalid hex color: {0:?}")]
    InvalidHex(String),
    #[error("element {0} is not bound to a color picker")]
    Unbound(ElementId),
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}

impl ColorError {
    /// True for rejected color text, the case callers silently ignore.
    pub fn is_invalid_hex(&self) -> bool {
        matches!(self, Self::InvalidHex(_))
    }
}

pub type Result<T, E = ColorError> = std::result::Result<T, E>;
