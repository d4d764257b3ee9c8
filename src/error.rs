//! Error types
//!
//! Every error here is fatal at startup. Steady-state play has no
//! recoverable failures.

use std::fmt;
use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, PongError>;

#[derive(Debug)]
pub enum PongError {
    /// A scene name was used that was never registered
    UnknownScene(String),
    /// An image or sound could not be loaded
    AssetLoad { path: String, reason: String },
    /// A settings file could not be read
    Io { path: PathBuf, source: std::io::Error },
    /// A settings document was malformed
    Settings(serde_json::Error),
}

impl fmt::Display for PongError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PongError::UnknownScene(name) => write!(f, "unknown scene `{name}`"),
            PongError::AssetLoad { path, reason } => {
                write!(f, "failed to load asset `{path}`: {reason}")
            }
            PongError::Io { path, source } => {
                write!(f, "failed to read {}: {source}", path.display())
            }
            PongError::Settings(e) => write!(f, "invalid settings: {e}"),
        }
    }
}

impl std::error::Error for PongError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PongError::Io { source, .. } => Some(source),
            PongError::Settings(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for PongError {
    fn from(e: serde_json::Error) -> Self {
        PongError::Settings(e)
    }
}
