use core::fmt;
use std::path::PathBuf;

use crate::canvas::FontRole;

/// Startup failures while preparing fonts and sprites. All of them are fatal.
#[derive(Debug)]
pub enum AssetError {
    /// The display configuration did not parse.
    Config { message: String },
    /// A font role was given an empty candidate list.
    NoFontCandidates { role: FontRole },
    /// A sprite file could not be read.
    Missing { path: PathBuf, source: std::io::Error },
}

impl fmt::Display for AssetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config { message } => write!(f, "invalid display config: {message}"),
            Self::NoFontCandidates { role } => {
                write!(f, "no font candidates configured for {role:?}")
            }
            Self::Missing { path, source } => {
                write!(f, "cannot load asset {}: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for AssetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Missing { source, .. } => Some(source),
            _ => None,
        }
    }
}
