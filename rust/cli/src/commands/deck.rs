//! Deck command handler: list cards in canonical order.

use std::io::Write;
use std::path::PathBuf;

use arcana_engine::cards::Suit;

use super::Session;
use crate::cli::ArcanaFilter;
use crate::error::CliError;
use crate::formatters::format_card_line;

/// Handle the deck command.
///
/// Prints one line per card. `suit` narrows the listing to that suit;
/// otherwise `arcana` selects majors, minors or both.
pub fn handle_deck_command(
    arcana: ArcanaFilter,
    suit: Option<Suit>,
    data_dir: Option<PathBuf>,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let session = Session::for_data_dir(data_dir)?;
    let deck = session.open_deck()?;
    let cards = match (suit, arcana) {
        (Some(s), _) => deck.get_cards(s),
        (None, ArcanaFilter::Major) => deck.get_major_arcana_cards(),
        (None, ArcanaFilter::Minor) => deck.get_minor_arcana_cards(),
        (None, ArcanaFilter::All) => {
            let mut all = deck.get_major_arcana_cards();
            all.extend(deck.get_minor_arcana_cards());
            all
        }
    };
    for card in &cards {
        writeln!(out, "{}", format_card_line(card))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn lists_full_deck() {
        let mut out = Vec::new();
        handle_deck_command(ArcanaFilter::All, None, None, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 78);
        assert!(lines[0].ends_with("The Fool"));
        assert!(lines[22].ends_with("Ace of Cups"));
    }

    #[test]
    #[serial]
    fn suit_filter_lists_fourteen() {
        let mut out = Vec::new();
        handle_deck_command(ArcanaFilter::All, Some(Suit::Wands), None, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap().lines().count(), 14);
    }
}
