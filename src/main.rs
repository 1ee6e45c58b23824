use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use semver_resource::cli::orchestration::{run_in_step, InStepArgs};
use semver_resource::{config, logging, ui};

#[derive(clap::Parser)]
#[command(
    name = "semver-in",
    version,
    about = "Fetch a semantic version, bump it, and stage it for the pipeline"
)]
struct Args {
    #[arg(help = "Directory to write the bumped version into")]
    destination: PathBuf,

    #[arg(
        short,
        long,
        env = "SEMVER_RESOURCE_CONFIG",
        help = "Custom configuration file path"
    )]
    config: Option<PathBuf>,
}

fn main() {
    logging::init();

    if let Err(err) = run() {
        ui::display_error(&format!("{:#}", err));
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = Args::parse();

    let config = config::load_config(args.config.as_deref()).context("loading configuration")?;

    let step_args = InStepArgs {
        destination: args.destination,
    };
    let outcome = run_in_step(&step_args, &config, io::stdin().lock(), io::stdout().lock())
        .context("fetching version")?;

    if outcome.was_bumped() && !config.behavior.quiet {
        ui::display_bump(&outcome.input.to_string(), &outcome.bumped.to_string());
    }

    Ok(())
}
