use super::{Outcome, usage};
use anyhow::Result;
use console::style;
use skillkit_core::skills::{self, Validation};
use std::path::Path;

pub const USAGE: &str = "Usage: quick_validate <skill_name>";

/// A failed validation is still `Ok`.
pub fn run(root: &Path, name: Option<&str>) -> Result<Outcome<Validation>> {
    let Some(name) = name else {
        return Ok(usage(USAGE));
    };

    println!("{}", style(format!("Validating skill: {}", name)).cyan());

    let validation = skills::validate(root, name);
    if validation.valid {
        println!("{}", style(&validation.message).green().bold());
    } else {
        println!("{}", style(&validation.message).red().bold());
    }

    Ok(Outcome::Done(validation))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn validation(outcome: Outcome<Validation>) -> Validation {
        match outcome {
            Outcome::Done(validation) => validation,
            Outcome::Usage(line) => panic!("unexpected usage: {}", line),
        }
    }

    #[test]
    fn missing_name_prints_usage() {
        let tmp = TempDir::new().unwrap();

        let outcome = run(tmp.path(), None).unwrap();

        assert_eq!(
            outcome,
            Outcome::Usage("Usage: quick_validate <skill_name>")
        );
        assert_eq!(std::fs::read_dir(tmp.path()).unwrap().count(), 0);
    }

    #[test]
    fn reports_missing_descriptor() {
        let tmp = TempDir::new().unwrap();
        std::fs::create_dir(tmp.path().join("bare")).unwrap();

        let result = validation(run(tmp.path(), Some("bare")).unwrap());
        assert!(!result.valid);
    }

    #[test]
    fn accepts_initialized_skill() {
        let tmp = TempDir::new().unwrap();
        skills::initialize(tmp.path(), "ok").unwrap();

        let result = validation(run(tmp.path(), Some("ok")).unwrap());
        assert!(result.valid);
    }
}
