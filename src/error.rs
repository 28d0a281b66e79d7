use std::fmt;
use std::path::PathBuf;

/// Everything that can stop a session before it finishes normally.
#[derive(Debug)]
pub enum GameError {
    /// A sprite image could not be opened or decoded.
    Asset {
        path: PathBuf,
        source: image::ImageError,
    },
    /// Terminal or channel I/O failed.
    Io(std::io::Error),
    /// The configuration is unusable.
    Config(String),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::Asset { path, source } => {
                write!(f, "failed to load sprite {}: {}", path.display(), source)
            }
            GameError::Io(e) => write!(f, "I/O error: {}", e),
            GameError::Config(msg) => write!(f, "invalid configuration: {}", msg),
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::Asset { source, .. } => Some(source),
            GameError::Io(e) => Some(e),
            GameError::Config(_) => None,
        }
    }
}

impl From<std::io::Error> for GameError {
    fn from(e: std::io::Error) -> Self {
        GameError::Io(e)
    }
}
