use anyhow::Result;
use clap::Parser;
use skillkit_cli::commands::landing;

#[derive(Parser)]
#[command(
    name = "generate_structure",
    about = "Print a landing-page JSON skeleton"
)]
struct Args {
    product_name: Option<String>,
    transformation: Option<String>,
    mechanism: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    if args.product_name.is_some() && args.transformation.is_some() && args.mechanism.is_some() {
        skillkit_cli::bootstrap();
    }
    landing::run(
        args.product_name.as_deref(),
        args.transformation.as_deref(),
        args.mechanism.as_deref(),
    )?;
    Ok(())
}
