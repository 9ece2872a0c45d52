// file: src/main.rs
// description: commandline application entry point with the interactive command loop
// reference: application bootstrap and orchestration

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use ml_console::console::menu;
use ml_console::{Config, ConsoleSession, DatabaseClient};
use std::io;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "ml_console")]
#[command(author = "cipher")]
#[command(version = "0.1.0")]
#[command(about = "Read, write and search MarkLogic documents from an interactive console", long_about = None)]
struct Cli {
    #[arg(
        short,
        long,
        value_name = "FILE",
        default_value = "config/default.toml",
        env = "ML_CONSOLE_CONFIG"
    )]
    config: PathBuf,

    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    color: bool,

    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    ml_console::utils::logging::init_logger(cli.color, cli.verbose);

    info!("Loading configuration from: {}", cli.config.display());
    let config = Config::load(Some(cli.config.as_path())).with_context(|| {
        format!(
            "Failed to load configuration from {}",
            cli.config.display()
        )
    })?;

    // Dropped on every path out of main, including `?` on a console failure.
    let client = DatabaseClient::new(&config.connection)
        .context("Failed to create MarkLogic client")?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    menu::print_banner(&mut out).context("Failed to write to console")?;

    let mut session = ConsoleSession::new(&client, config.search.options(), io::stdin().lock(), out);
    session.run().await.context("Console session failed")?;
    drop(session);

    client.release();
    Ok(())
}
