//! # Trowel CLI
//!
//! Command-line front end for `trowel_core`. Each subcommand builds one
//! estimator input from its arguments, or reads a JSON job or project
//! file, and prints the result as text or (`--json`) as JSON.
//!
//! ```text
//! trowel tiles --width 3 --length 2.4 --tile 300x300
//! trowel masonry --wall-type cavity --wall 6x2.4 --opening 1.2x2.1
//! trowel --json run job.json
//! ```

mod cli;
mod commands;
mod render;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use trowel_core::CalcError;

use cli::Cli;

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = commands::execute(&cli) {
        eprintln!("Error: {:#}", e);
        if cli.json {
            if let Some(calc_error) = e.downcast_ref::<CalcError>() {
                if let Ok(body) = serde_json::to_string_pretty(calc_error) {
                    println!("{}", body);
                }
            }
        }
        std::process::exit(1);
    }
}
