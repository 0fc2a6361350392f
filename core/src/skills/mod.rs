pub mod init;
pub mod package;
pub mod validate;

pub use init::{default_descriptor, initialize};
pub use package::{PackageReport, archive_path, package};
pub use validate::{Validation, validate};

use crate::error::{Result, SkillError};
use std::path::{Path, PathBuf};

/// File whose presence marks a directory as a skill.
pub const DESCRIPTOR_FILE: &str = "SKILL.md";

pub fn descriptor_path(skill_dir: &Path) -> PathBuf {
    skill_dir.join(DESCRIPTOR_FILE)
}

/// Resolves `name` against `root`. Only the empty name is refused; anything
/// else, whitespace included, is used verbatim.
pub fn skill_dir(root: &Path, name: &str) -> Result<PathBuf> {
    if name.is_empty() {
        return Err(SkillError::EmptyName);
    }
    Ok(root.join(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skill_dir_joins_name() {
        let dir = skill_dir(Path::new("/tmp/work"), "my-skill").unwrap();
        assert_eq!(dir, PathBuf::from("/tmp/work/my-skill"));
        assert_eq!(
            descriptor_path(&dir),
            PathBuf::from("/tmp/work/my-skill/SKILL.md")
        );
    }

    #[test]
    fn skill_dir_rejects_only_the_empty_name() {
        assert!(matches!(
            skill_dir(Path::new("."), ""),
            Err(SkillError::EmptyName)
        ));
        assert_eq!(
            skill_dir(Path::new("root"), "   ").unwrap(),
            PathBuf::from("root/   ")
        );
    }

    #[test]
    fn skill_dir_passes_nested_names_through() {
        let dir = skill_dir(Path::new("root"), "group/inner").unwrap();
        assert_eq!(dir, PathBuf::from("root/group/inner"));
    }
}
