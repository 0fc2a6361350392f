use super::{descriptor_path, skill_dir};
use crate::error::{Result, SkillError};
use std::fs;
use std::path::{Path, PathBuf};

/// Template written into a freshly initialised skill.
pub fn default_descriptor(name: &str) -> String {
    format!("# {}\n\nDescription goes here.", name)
}

/// Creates `root/name` if needed and (over)writes its `SKILL.md` with the
/// default template. Returns the descriptor path.
pub fn initialize(root: &Path, name: &str) -> Result<PathBuf> {
    let dir = skill_dir(root, name)?;

    fs::create_dir_all(&dir).map_err(|e| SkillError::io(&dir, e))?;

    let md_path = descriptor_path(&dir);
    if md_path.exists() {
        tracing::warn!(path = %md_path.display(), "Overwriting existing descriptor");
    }

    fs::write(&md_path, default_descriptor(name)).map_err(|e| SkillError::io(&md_path, e))?;

    tracing::info!(skill = name, path = %dir.display(), "Skill initialized");

    Ok(md_path)
}
