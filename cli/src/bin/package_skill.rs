use anyhow::Result;
use clap::Parser;
use skillkit_cli::commands::package;
use std::path::Path;

#[derive(Parser)]
#[command(name = "package_skill", about = "Zip a skill directory into <skill_name>.zip")]
struct Args {
    skill_name: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    if args.skill_name.is_some() {
        skillkit_cli::bootstrap();
    }
    package::run(Path::new("."), args.skill_name.as_deref())?;
    Ok(())
}
