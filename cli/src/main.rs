use anyhow::Result;
use clap::{Parser, Subcommand};
use skillkit_cli::commands::{init, landing, package, validate};
use std::path::Path;

#[derive(Parser)]
#[command(name = "skillkit")]
#[command(about = "skillkit - scaffold, check and package skills", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create <name>/SKILL.md from the default template
    Init { name: String },
    /// Check that <name>/SKILL.md exists
    Validate { name: String },
    /// Write <name>.zip with every file under <name>
    Package { name: String },
    /// Print a landing-page JSON skeleton
    Landing {
        product_name: String,
        transformation: String,
        mechanism: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    skillkit_cli::bootstrap();

    let root = Path::new(".");

    match cli.command {
        Commands::Init { name } => {
            init::run(root, Some(name.as_str()))?;
        }
        Commands::Validate { name } => {
            validate::run(root, Some(name.as_str()))?;
        }
        Commands::Package { name } => {
            package::run(root, Some(name.as_str()))?;
        }
        Commands::Landing {
            product_name,
            transformation,
            mechanism,
        } => {
            landing::run(
                Some(product_name.as_str()),
                Some(transformation.as_str()),
                Some(mechanism.as_str()),
            )?;
        }
    }

    Ok(())
}
