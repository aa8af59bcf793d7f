mod cli_messages;
mod config;
mod consts;
mod environment;
mod error_classifier;
mod events;
mod logging;
mod runtime;
mod scheduler;
mod series;
mod session;
mod state;
mod ui;
mod wallet;
mod workers;

use crate::config::Config;
use crate::session::{run_headless_mode, run_once, run_tui_mode, setup_session};
use clap::{Parser, Subcommand};
use std::error::Error;

#[derive(Parser)]
#[command(author, version, about = "Terminal dashboard for a Lightning wallet", long_about = None)]
/// Command-line arguments
struct Args {
    /// Command to execute
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Start polling and show the dashboard
    Start {
        /// Run without the terminal UI, printing events to stdout
        #[arg(long, action = clap::ArgAction::SetTrue)]
        headless: bool,

        /// Enable background colors
        #[arg(long = "with-background", action = clap::ArgAction::SetTrue)]
        with_background: bool,
    },
    /// Fetch price, balance and payments once and exit
    Once,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    logging::init_max_level();

    let args = Args::parse();
    let config = Config::from_env();

    match args.command {
        Command::Start {
            headless,
            with_background,
        } => {
            let session = setup_session(config);
            if headless {
                run_headless_mode(session).await
            } else {
                run_tui_mode(session, with_background).await
            }
        }
        Command::Once => {
            if !config.has_api_key() {
                print_cmd_warn!(
                    "No API key",
                    "set {} to fetch balance and payments",
                    consts::cli_consts::wallet::API_KEY_ENV
                );
            }
            run_once(config).await.inspect_err(|e| {
                print_cmd_error!("Fetch failed", &e.to_string());
            })
        }
    }
}
