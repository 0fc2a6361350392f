use anyhow::Result;
use clap::Parser;
use skillkit_cli::commands::init;
use std::path::Path;

#[derive(Parser)]
#[command(name = "init_skill", about = "Create a skill directory with a template SKILL.md")]
struct Args {
    skill_name: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    if args.skill_name.is_some() {
        skillkit_cli::bootstrap();
    }
    init::run(Path::new("."), args.skill_name.as_deref())?;
    Ok(())
}
