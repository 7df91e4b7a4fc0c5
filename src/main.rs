use clap::Parser;
use colored::*;
use std::process;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use enginectl::cli::Args;
use enginectl::commands;
use enginectl::config::Config;
use enginectl::ui::{display_error, render};
use enginectl::Client;

#[tokio::main]
async fn main() {
    let args = Args::parse();

    let config = match Config::from_env_and_args(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{} {:#}", "Error:".red(), e);
            process::exit(1);
        }
    };

    init_tracing(config.verbose);
    tracing::debug!(endpoint = %config.endpoint, "configuration loaded");

    let client = match Client::connect(config.transport_settings()) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("{} {}", "Error:".red(), e);
            process::exit(1);
        }
    };

    let result = match commands::execute(&client, &args.command).await {
        Ok(output) => render(output).await,
        Err(e) => Err(e),
    };

    if let Err(e) = result {
        display_error(&e);
        process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "enginectl=debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .init();
}
