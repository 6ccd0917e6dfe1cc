use blade_helpers::cli::{Cli, run_command};
use blade_helpers::config::HelperConfig;
use blade_helpers::logging::init_logging;
use clap::Parser;
use tracing::error;

fn main() {
    init_logging();

    if let Err(e) = run() {
        error!("{}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Cli::parse();
    let config = HelperConfig::load_or_default(args.config.as_deref())?;
    let output = run_command(&args.cmd, config)?;
    println!("{output}");
    Ok(())
}
