//! Errors raised at the host boundary
//!
//! The simulation itself is total; only parsing tunes, settings and command
//! line values can fail.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid note {found:?} at position {position} in tune")]
    InvalidNote { position: usize, found: String },
    #[error("invalid tone {0:?} (expected one of t, s, p, n)")]
    InvalidTone(char),
    #[error("invalid volume {0:?} (expected 0-7)")]
    InvalidVolume(char),
    #[error("invalid settings: {0}")]
    Settings(#[from] serde_json::Error),
    #[error("invalid value {value:?} for {name}")]
    InvalidArgument { name: String, value: String },
}

pub type Result<T> = std::result::Result<T, Error>;
