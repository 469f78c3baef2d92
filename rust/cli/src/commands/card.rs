//! Card command handler: look up one card by rank and suit.

use std::io::Write;
use std::path::PathBuf;

use arcana_engine::cards::{MinorRank, Suit};

use super::Session;
use crate::error::CliError;
use crate::formatters::format_card_detail;

/// Handle the card command.
///
/// Looks up a major arcana card by `major` rank, or a minor arcana card by
/// `suit` and `rank`. A miss is reported as [`CliError::NotFound`].
pub fn handle_card_command(
    major: Option<u8>,
    suit: Option<Suit>,
    rank: Option<MinorRank>,
    data_dir: Option<PathBuf>,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let session = Session::for_data_dir(data_dir)?;
    let deck = session.open_deck()?;
    let card = match (major, suit, rank) {
        (Some(r), None, None) => deck
            .get_major_arcana(r)
            .ok_or_else(|| CliError::NotFound(format!("major arcana rank {}", r)))?,
        (None, Some(s), Some(r)) => deck
            .get_minor_arcana(s, r)
            .ok_or_else(|| CliError::NotFound(format!("{} of {}", r.name(), s)))?,
        _ => {
            return Err(CliError::InvalidInput(
                "either --major or --suit with --rank is required".into(),
            ));
        }
    };
    writeln!(out, "{}", format_card_detail(&card))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn finds_major_card() {
        let mut out = Vec::new();
        handle_card_command(Some(0), None, None, None, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("The Fool (major-00)"));
    }

    #[test]
    #[serial]
    fn missing_rank_is_not_found() {
        let mut out = Vec::new();
        let result = handle_card_command(Some(30), None, None, None, &mut out);
        assert!(matches!(result, Err(CliError::NotFound(_))));
    }

    #[test]
    #[serial]
    fn requires_a_selector() {
        let mut out = Vec::new();
        let result = handle_card_command(None, None, None, None, &mut out);
        assert!(matches!(result, Err(CliError::InvalidInput(_))));
    }
}
