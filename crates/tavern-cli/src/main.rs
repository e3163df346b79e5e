use anyhow::Context;
use clap::Parser;
use tavern_config::TavernConfig;

use crate::cli::root_commands::Route;

mod cli;
mod commands;
mod context;
mod output;
mod ui;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("tav error: {error:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let flags = cli.global_flags();
    ui::init(&flags);

    let config = TavernConfig::load_with_dotenv().context("failed to load tavern configuration")?;
    context::warn_unconfigured(&config);

    match cli.command.route() {
        Route::Offline(command) => commands::dispatch::dispatch_offline(&command, &config, &flags),
        Route::Server(command) => {
            let ctx =
                context::AppContext::init(config).context("failed to initialize tavern client")?;
            commands::dispatch::dispatch(command, &ctx, &flags).await
        }
    }
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("TAVERN_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
