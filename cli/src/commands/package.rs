use super::{Outcome, usage};
use anyhow::{Context, Result};
use console::style;
use skillkit_core::skills::{self, PackageReport};
use std::path::Path;

pub const USAGE: &str = "Usage: package_skill <skill_name>";

pub fn run(root: &Path, name: Option<&str>) -> Result<Outcome<PackageReport>> {
    let Some(name) = name else {
        return Ok(usage(USAGE));
    };

    println!("{}", style(format!("Packaging skill: {}", name)).cyan());

    let report = skills::package(root, name)
        .with_context(|| format!("Failed to package skill '{}'", name))?;

    println!(
        "{}",
        style(format!("Skill packaged into {}.zip", name)).green().bold()
    );
    tracing::debug!(entries = report.entries.len(), archive = %report.archive.display());

    Ok(Outcome::Done(report))
}
