//! Draw command handler for pulling loose cards from a shuffled deck.
//!
//! Cards are sampled, not dealt: the deck keeps every card, and a repeated
//! draw with the `top` strategy returns the same cards.

use std::io::Write;

use tracing::info;

use super::Session;
use crate::cli::SessionArgs;
use crate::error::CliError;
use crate::formatters::format_card_line;

/// Handle the draw command.
///
/// Shuffles the deck and draws up to `count` cards with the configured
/// selection strategy. A count larger than the deck yields the whole deck.
///
/// # Arguments
///
/// * `count` - Number of cards requested
/// * `json` - Emit the drawn cards as a JSON array instead of text lines
/// * `session` - Seed, strategy and data overrides
/// * `out` - Output stream for command results
pub fn handle_draw_command(
    count: usize,
    json: bool,
    session: &SessionArgs,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    if count == 0 {
        return Err(CliError::InvalidInput("count must be >= 1".into()));
    }
    let session = Session::resolve(session)?;
    let mut deck = session.open_deck()?;
    deck.shuffle();
    let mut selection = session.selection();
    let drawn = deck.draw_cards(count, selection.as_mut());
    info!(requested = count, drawn = drawn.len(), "draw complete");

    if json {
        let cards: Vec<_> = drawn.iter().map(|c| c.as_ref()).collect();
        writeln!(out, "{}", serde_json::to_string_pretty(&cards)?)?;
    } else {
        for card in &drawn {
            writeln!(out, "{}", format_card_line(card))?;
        }
    }
    Ok(())
}
