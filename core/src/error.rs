use std::path::PathBuf;
use thiserror::Error;

/// Failures raised by the skill operations.
///
/// A missing descriptor is not an error: validation reports it through
/// [`crate::skills::Validation`].
#[derive(Debug, Error)]
pub enum SkillError {
    #[error("Skill name must not be empty")]
    EmptyName,

    #[error("Skill directory not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("I/O error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to copy {} into {}: {source}", from.display(), into.display())]
    Copy {
        from: PathBuf,
        into: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to walk skill directory: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("Failed to write archive: {0}")]
    Zip(#[from] zip::result::ZipError),
}

impl SkillError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, SkillError>;
