use anyhow::Result;
use clap::Parser;
use skillkit_cli::commands::validate;
use std::path::Path;

#[derive(Parser)]
#[command(name = "quick_validate", about = "Check that a skill directory contains SKILL.md")]
struct Args {
    skill_name: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    if args.skill_name.is_some() {
        skillkit_cli::bootstrap();
    }
    validate::run(Path::new("."), args.skill_name.as_deref())?;
    Ok(())
}
