//! Bird bidding command-line client.
//!
//! Submits bids, fetches game state, and watches live bidding updates
//! against a running Bird server.

use std::process::ExitCode;
use std::time::Duration;

use anyhow::Result;
use bird_sdk::client::{BiddingClient, ClientConfig};
use bird_sdk::{BidAmount, BidContext, BidStore, BiddingSession, GameStore};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

#[derive(Parser)]
#[command(name = "bird-bid")]
#[command(about = "Bid on Bird games from the command line")]
struct Cli {
    /// Base URL of the Bird web application
    #[arg(long, env = "BIRD_API_URL", default_value = "http://localhost:3000")]
    api_url: String,

    /// Request timeout in seconds
    #[arg(long, env = "BIRD_TIMEOUT_SECS", default_value_t = 30)]
    timeout: u64,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Submit a bid
    Bid {
        /// Bid/game identifier
        id: String,

        /// Amount to bid
        #[arg(allow_negative_numbers = true)]
        amount: BidAmount,
    },

    /// Fetch and print the current game state
    Game {
        /// Bid/game identifier
        id: String,
    },

    /// Print live bidding updates until interrupted
    Watch {
        /// Bid/game identifier
        id: String,

        /// Pretty-print JSON payloads
        #[arg(long)]
        json: bool,
    },
}

impl Commands {
    fn id(&self) -> &str {
        match self {
            Self::Bid { id, .. } | Self::Game { id } | Self::Watch { id, .. } => id,
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,bird_sdk=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(2),
        Err(err) => {
            tracing::error!("{:#}", err);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<bool> {
    let config = ClientConfig::new(cli.api_url).with_timeout(Duration::from_secs(cli.timeout));
    tracing::debug!("Bird API URL: {}", config.base_url);

    let client = BiddingClient::new(config)?;
    let bids = BidStore::with_value(BidContext::new(cli.command.id()));
    let session = BiddingSession::new(client, bids, GameStore::empty());

    let mut out = std::io::stdout().lock();
    match cli.command {
        Commands::Bid { amount, .. } => commands::bid_cmd(&session, amount, &mut out).await,
        Commands::Game { .. } => commands::game_cmd(&session, &mut out).await,
        Commands::Watch { json, .. } => commands::watch_cmd(&session, json, &mut out).await,
    }
}
