//! Command implementations.
//!
//! Each command takes a session whose bid store already holds the target
//! bid, writes human-readable output to `out`, and returns whether the
//! server accepted the request.

use std::io::Write;

use anyhow::{anyhow, Context, Result};
use bird_sdk::stream::SseEvent;
use bird_sdk::{BidAmount, BiddingSession, VisibleGameState};
use tracing::{info, warn};

/// Submits a bid and prints the outcome.
pub async fn bid_cmd<W: Write>(
    session: &BiddingSession,
    amount: BidAmount,
    out: &mut W,
) -> Result<bool> {
    let outcome = session
        .submit_bid(amount)
        .await
        .context("submitting bid")?;

    if outcome.ok {
        info!("Bid of {} accepted", amount);
        writeln!(out, "Bid accepted")?;
    } else {
        warn!("Bid of {} rejected: {}", amount, outcome);
        writeln!(out, "Bid rejected")?;
    }
    writeln!(out, "  Amount: {}", amount)?;
    writeln!(out, "  Status: {}", outcome.status)?;

    Ok(outcome.ok)
}

/// Fetches the game state and prints it.
pub async fn game_cmd<W: Write>(session: &BiddingSession, out: &mut W) -> Result<bool> {
    let outcome = session
        .fetch_game_state()
        .await
        .context("fetching game state")?;

    if !outcome.ok {
        warn!("Game state request failed: {}", outcome);
        writeln!(out, "Game state unavailable (status {})", outcome.status)?;
        return Ok(false);
    }

    let state = session
        .game_store()
        .get()
        .ok_or_else(|| anyhow!("game store empty after successful fetch"))?;

    writeln!(out, "{}", serde_json::to_string_pretty(state.as_json())?)?;
    if let Ok(visible) = state.visible() {
        write_summary(&visible, out)?;
    }

    Ok(true)
}

/// Streams bidding updates until the server closes the stream or the user
/// interrupts.
pub async fn watch_cmd<W: Write>(
    session: &BiddingSession,
    json: bool,
    out: &mut W,
) -> Result<bool> {
    let mut stream = session
        .open_update_stream()
        .ok_or_else(|| anyhow!("no active bid"))?;

    info!("Watching {}", stream.url());

    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                info!("Interrupted, closing update stream");
                stream.close();
                return Ok(true);
            }
            next = stream.next_event() => match next {
                Some(Ok(event)) => write_event(&event, json, out)?,
                Some(Err(err)) => return Err(err).context("reading update stream"),
                None => {
                    info!("Update stream ended");
                    return Ok(true);
                }
            },
        }
    }
}

fn write_event<W: Write>(event: &SseEvent, json: bool, out: &mut W) -> Result<()> {
    let timestamp = chrono::Local::now().format("%H:%M:%S");
    let payload = if json {
        event
            .json::<serde_json::Value>()
            .ok()
            .and_then(|v| serde_json::to_string_pretty(&v).ok())
            .unwrap_or_else(|| event.data.clone())
    } else {
        event.data.clone()
    };
    writeln!(out, "[{}] {}: {}", timestamp, event.event, payload)?;
    Ok(())
}

fn write_summary<W: Write>(state: &VisibleGameState, out: &mut W) -> Result<()> {
    let hand: Vec<String> = state.hand.iter().map(ToString::to_string).collect();
    writeln!(out, "Summary:")?;
    writeln!(out, "  Hand: {}", hand.join(", "))?;
    writeln!(out, "  Cards on table: {}", state.table.len())?;
    writeln!(out, "  Current player: {}", state.current_player)?;
    writeln!(out, "  Trump: {}", state.trump)?;
    writeln!(out, "  Bid: {} (player {})", state.bid, state.bid_winner)?;
    Ok(())
}
