//! Read command handler: shuffle, lay a spread and print the reading.

use std::io::Write;
use std::sync::Arc;

use arcana_engine::generator::ReadingGenerator;
use arcana_engine::spread::SpreadDefinition;
use tracing::info;

use super::Session;
use crate::cli::SessionArgs;
use crate::error::CliError;
use crate::ui;

/// Handle the read command.
///
/// Opens a deck from the configured source, shuffles it, and lays a reading
/// into the bundled spread named by `spread_id`. Prints the deal-order
/// interpretation, or the full reading as JSON when `json` is set.
///
/// A reading that could not fill every position (small custom decks) is
/// still printed; a warning goes to `err`.
pub fn handle_read_command(
    spread_id: &str,
    question: Option<String>,
    json: bool,
    session: &SessionArgs,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let spread = Arc::new(SpreadDefinition::builtin(spread_id)?);
    let session = Session::resolve(session)?;

    let mut deck = session.open_deck()?;
    deck.shuffle();
    let mut generator = match session.reversal_seed() {
        Some(seed) => {
            ReadingGenerator::with_seed(deck, session.config.reversal_probability, seed)?
        }
        None => ReadingGenerator::new(deck, session.config.reversal_probability)?,
    };
    let mut selection = session.selection();
    let reading = generator.generate_reading(&spread, selection.as_mut(), question);
    info!(
        spread = spread.id(),
        drawn = reading.drawn_cards.len(),
        reversed = reading.reversed_count(),
        "reading complete"
    );

    if !reading.is_complete() {
        ui::display_warning(
            err,
            &format!(
                "deck ran short: {} of {} positions filled",
                reading.drawn_cards.len(),
                spread.card_count()
            ),
        )?;
    }

    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&reading)?)?;
    } else {
        writeln!(out, "{}", reading.basic_interpretation())?;
    }
    Ok(())
}
