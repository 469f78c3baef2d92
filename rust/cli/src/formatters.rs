//! Card, spread and reading formatters for terminal display.
//!
//! Pure functions turning engine data into lines of text. Suits are tagged
//! with their alchemical element symbol, falling back to a single ASCII
//! letter on terminals without Unicode support.
//!
//! ## Example
//!
//! ```rust
//! use arcana_engine::cards::Element;
//! use arcana_cli::formatters::format_element;
//!
//! let fire = format_element(Element::Fire);
//! assert!(fire == "🜂" || fire == "F");
//! ```

use arcana_engine::cards::{Arcana, Card, Element};
use arcana_engine::spread::SpreadDefinition;

/// Check if the terminal supports Unicode symbols by detecting modern terminal environments.
///
/// On Windows, checks for Windows Terminal (WT_SESSION), modern terminals (TERM_PROGRAM),
/// or VS Code (VSCODE_INJECTION). On Unix-like systems, assumes Unicode support.
pub fn supports_unicode() -> bool {
    if cfg!(windows) {
        std::env::var("WT_SESSION").is_ok()
            || std::env::var("TERM_PROGRAM").is_ok()
            || std::env::var("VSCODE_INJECTION").is_ok()
    } else {
        true
    }
}

/// Element symbol (🜂 🜄 🜁 🜃) with ASCII fallback (F W A E).
pub fn format_element(element: Element) -> String {
    if supports_unicode() {
        match element {
            Element::Fire => "🜂",
            Element::Water => "🜄",
            Element::Air => "🜁",
            Element::Earth => "🜃",
        }
        .to_string()
    } else {
        match element {
            Element::Fire => "F",
            Element::Water => "W",
            Element::Air => "A",
            Element::Earth => "E",
        }
        .to_string()
    }
}

/// Short marker shown before a card name: the Roman numeral for majors,
/// the suit's element symbol for minors.
pub fn format_marker(card: &Card) -> String {
    match card.arcana() {
        Arcana::Major { .. } => card.arcana().numeral(),
        Arcana::Minor { suit, .. } => format_element(suit.element()),
    }
}

/// One-line listing entry: identity, marker and name.
pub fn format_card_line(card: &Card) -> String {
    format!(
        "{:<18} {:>5}  {}",
        card.id().as_str(),
        format_marker(card),
        card.name()
    )
}

/// Multi-line description of a single card.
pub fn format_card_detail(card: &Card) -> String {
    let mut lines = vec![format!("{} ({})", card.name(), card.id())];
    match card.arcana() {
        Arcana::Major { rank } => {
            lines.push(format!("Major Arcana {} (rank {})", card.arcana().numeral(), rank));
        }
        Arcana::Minor { suit, rank } => {
            let kind = if rank.is_court() { "court" } else { "pip" };
            lines.push(format!(
                "Minor Arcana, {} of {} {} ({} card)",
                rank.name(),
                suit,
                format_element(suit.element()),
                kind
            ));
        }
    }
    if !card.keywords().is_empty() {
        lines.push(format!("Keywords: {}", card.keywords().join(", ")));
    }
    lines.push(format!("Upright: {}", card.upright().join("; ")));
    lines.push(format!("Reversed: {}", card.reversed().join("; ")));
    if let Some(desc) = card.description() {
        lines.push(format!("Imagery: {}", desc));
    }
    lines.join("\n")
}

/// Spread header plus one line per position in deal order.
pub fn format_spread(spread: &SpreadDefinition) -> String {
    let mut lines = vec![format!(
        "{} ({}, {} cards)",
        spread.name(),
        spread.id(),
        spread.card_count()
    )];
    lines.push(format!("  {}", spread.description()));
    for pos in spread.positions_by_deal_order() {
        lines.push(format!(
            "  {:>2}. {} - {}",
            pos.deal_order + 1,
            pos.name,
            pos.significance
        ));
    }
    lines.join("\n")
}
