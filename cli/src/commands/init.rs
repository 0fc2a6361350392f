use super::{Outcome, usage};
use anyhow::{Context, Result};
use console::style;
use skillkit_core::skills;
use std::path::{Path, PathBuf};

pub const USAGE: &str = "Usage: init_skill <skill_name>";

pub fn run(root: &Path, name: Option<&str>) -> Result<Outcome<PathBuf>> {
    let Some(name) = name else {
        return Ok(usage(USAGE));
    };

    println!("{}", style(format!("Initializing skill: {}", name)).cyan());

    let md_path = skills::initialize(root, name)
        .with_context(|| format!("Failed to initialize skill '{}'", name))?;

    println!("{}", style("Skill initialized successfully.").green().bold());
    Ok(Outcome::Done(md_path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_name_prints_usage_only() {
        let tmp = TempDir::new().unwrap();

        let outcome = run(tmp.path(), None).unwrap();

        assert_eq!(outcome, Outcome::Usage("Usage: init_skill <skill_name>"));
        assert_eq!(std::fs::read_dir(tmp.path()).unwrap().count(), 0);
    }

    #[test]
    fn creates_skill() {
        let tmp = TempDir::new().unwrap();
        let outcome = run(tmp.path(), Some("demo")).unwrap();
        assert_eq!(
            outcome,
            Outcome::Done(tmp.path().join("demo").join("SKILL.md"))
        );
        assert!(tmp.path().join("demo").join("SKILL.md").exists());
    }

    #[test]
    fn empty_name_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let err = run(tmp.path(), Some("")).unwrap_err();
        assert!(err.to_string().contains("Failed to initialize skill"));
    }
}
