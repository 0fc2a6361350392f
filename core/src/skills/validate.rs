use super::{DESCRIPTOR_FILE, descriptor_path};
use std::path::{Path, PathBuf};

/// Outcome of checking a skill directory for its descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Validation {
    pub valid: bool,
    pub descriptor: PathBuf,
    pub message: String,
}

/// Presence-only check for `root/name/SKILL.md`. A missing directory is a
/// negative result, not an error.
pub fn validate(root: &Path, name: &str) -> Validation {
    let md_path = descriptor_path(&root.join(name));

    if md_path.exists() {
        tracing::debug!(path = %md_path.display(), "Descriptor found");
        Validation {
            valid: true,
            descriptor: md_path,
            message: "Validation passed!".to_string(),
        }
    } else {
        tracing::debug!(path = %md_path.display(), "Descriptor missing");
        Validation {
            valid: false,
            descriptor: md_path,
            message: format!("Error: {} missing!", DESCRIPTOR_FILE),
        }
    }
}
