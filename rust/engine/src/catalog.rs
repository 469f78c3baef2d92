//! Built-in card data for the standard 78-card deck.

use crate::cards::{Arcana, Card, MinorRank, Suit};
use crate::errors::LoadError;
use crate::loader::CardSource;

struct MajorEntry {
    name: &'static str,
    keywords: &'static [&'static str],
    upright: &'static [&'static str],
    reversed: &'static [&'static str],
}

const MAJORS: [MajorEntry; 22] = [
    MajorEntry {
        name: "The Fool",
        keywords: &["beginnings", "innocence", "spontaneity"],
        upright: &["a leap into the unknown", "fresh start"],
        reversed: &["recklessness", "hesitation at the threshold"],
    },
    MajorEntry {
        name: "The Magician",
        keywords: &["willpower", "skill", "manifestation"],
        upright: &["resources at hand", "focused intent"],
        reversed: &["manipulation", "untapped talent"],
    },
    MajorEntry {
        name: "The High Priestess",
        keywords: &["intuition", "mystery", "inner voice"],
        upright: &["hidden knowledge", "trust in intuition"],
        reversed: &["secrets withheld", "disconnection from instinct"],
    },
    MajorEntry {
        name: "The Empress",
        keywords: &["abundance", "nurture", "fertility"],
        upright: &["growth and creativity", "care given freely"],
        reversed: &["dependence", "creative block"],
    },
    MajorEntry {
        name: "The Emperor",
        keywords: &["authority", "structure", "stability"],
        upright: &["order and leadership", "firm foundations"],
        reversed: &["rigidity", "domination"],
    },
    MajorEntry {
        name: "The Hierophant",
        keywords: &["tradition", "institutions", "guidance"],
        upright: &["established teaching", "shared beliefs"],
        reversed: &["rebellion", "questioning convention"],
    },
    MajorEntry {
        name: "The Lovers",
        keywords: &["union", "choice", "harmony"],
        upright: &["a meaningful bond", "alignment of values"],
        reversed: &["disharmony", "a difficult choice avoided"],
    },
    MajorEntry {
        name: "The Chariot",
        keywords: &["determination", "control", "victory"],
        upright: &["momentum through willpower", "success by discipline"],
        reversed: &["lack of direction", "opposing forces"],
    },
    MajorEntry {
        name: "Strength",
        keywords: &["courage", "patience", "compassion"],
        upright: &["quiet inner strength", "gentle mastery"],
        reversed: &["self-doubt", "raw emotion unchecked"],
    },
    MajorEntry {
        name: "The Hermit",
        keywords: &["solitude", "introspection", "guidance"],
        upright: &["soul searching", "inner wisdom"],
        reversed: &["isolation", "withdrawal"],
    },
    MajorEntry {
        name: "Wheel of Fortune",
        keywords: &["cycles", "fate", "turning point"],
        upright: &["change of luck", "destiny in motion"],
        reversed: &["resistance to change", "setbacks"],
    },
    MajorEntry {
        name: "Justice",
        keywords: &["fairness", "truth", "law"],
        upright: &["cause and effect", "accountability"],
        reversed: &["unfairness", "avoided responsibility"],
    },
    MajorEntry {
        name: "The Hanged Man",
        keywords: &["surrender", "pause", "new perspective"],
        upright: &["letting go", "seeing from another angle"],
        reversed: &["stalling", "needless sacrifice"],
    },
    MajorEntry {
        name: "Death",
        keywords: &["endings", "transformation", "transition"],
        upright: &["a chapter closes", "clearing the way"],
        reversed: &["resistance to endings", "stagnation"],
    },
    MajorEntry {
        name: "Temperance",
        keywords: &["balance", "moderation", "patience"],
        upright: &["finding the middle path", "blending opposites"],
        reversed: &["excess", "imbalance"],
    },
    MajorEntry {
        name: "The Devil",
        keywords: &["attachment", "bondage", "shadow"],
        upright: &["unhealthy ties", "materialism"],
        reversed: &["release", "reclaiming power"],
    },
    MajorEntry {
        name: "The Tower",
        keywords: &["upheaval", "revelation", "sudden change"],
        upright: &["collapse of false structures", "abrupt awakening"],
        reversed: &["disaster narrowly averted", "fear of change"],
    },
    MajorEntry {
        name: "The Star",
        keywords: &["hope", "renewal", "serenity"],
        upright: &["faith restored", "healing"],
        reversed: &["despair", "disconnection"],
    },
    MajorEntry {
        name: "The Moon",
        keywords: &["illusion", "dreams", "the unconscious"],
        upright: &["uncertainty", "intuition in the dark"],
        reversed: &["confusion lifting", "repressed fears surfacing"],
    },
    MajorEntry {
        name: "The Sun",
        keywords: &["joy", "success", "vitality"],
        upright: &["warmth and positivity", "clarity"],
        reversed: &["temporary gloom", "overconfidence"],
    },
    MajorEntry {
        name: "Judgement",
        keywords: &["reckoning", "awakening", "absolution"],
        upright: &["an inner calling", "rebirth"],
        reversed: &["self-doubt", "refusing the call"],
    },
    MajorEntry {
        name: "The World",
        keywords: &["completion", "integration", "fulfilment"],
        upright: &["a cycle completed", "wholeness"],
        reversed: &["loose ends", "seeking closure"],
    },
];

fn suit_domain(suit: Suit) -> &'static str {
    match suit {
        Suit::Wands => "ambition and creative drive",
        Suit::Cups => "emotion and relationships",
        Suit::Swords => "thought and conflict",
        Suit::Pentacles => "work and material security",
    }
}

/// (keyword, upright theme, reversed theme) per rank.
fn rank_theme(rank: MinorRank) -> (&'static str, &'static str, &'static str) {
    match rank {
        MinorRank::Ace => ("potential", "a new beginning in", "a missed opening in"),
        MinorRank::Two => ("choice", "a partnership or decision in", "indecision in"),
        MinorRank::Three => ("growth", "early expansion of", "delays in"),
        MinorRank::Four => ("stability", "consolidation of", "stagnation in"),
        MinorRank::Five => ("challenge", "conflict or loss in", "recovery within"),
        MinorRank::Six => ("harmony", "restored balance in", "lingering imbalance in"),
        MinorRank::Seven => ("assessment", "perseverance in", "wavering commitment to"),
        MinorRank::Eight => ("movement", "swift progress in", "obstacles to"),
        MinorRank::Nine => ("fruition", "near-completion of", "anxiety around"),
        MinorRank::Ten => ("completion", "the culmination of", "burdens carried in"),
        MinorRank::Page => ("curiosity", "a student's eagerness for", "immaturity in"),
        MinorRank::Knight => ("pursuit", "bold action toward", "haste or inertia in"),
        MinorRank::Queen => ("nurture", "mature care for", "insecurity about"),
        MinorRank::King => ("mastery", "command of", "misuse of control over"),
    }
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Standard 78-card deck bundled with the engine.
///
/// ```
/// use arcana_engine::catalog::StandardCatalog;
/// use arcana_engine::cards::Suit;
/// use arcana_engine::loader::CardSource;
///
/// let catalog = StandardCatalog;
/// assert_eq!(catalog.major_arcana().unwrap().len(), 22);
/// assert_eq!(catalog.suit(Suit::Cups).unwrap().len(), 14);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardCatalog;

impl CardSource for StandardCatalog {
    fn major_arcana(&self) -> Result<Vec<Card>, LoadError> {
        MAJORS
            .iter()
            .zip(0u8..)
            .map(|(entry, rank)| {
                Card::new(
                    Arcana::Major { rank },
                    entry.name,
                    owned(entry.keywords),
                    owned(entry.upright),
                    owned(entry.reversed),
                )
            })
            .collect()
    }

    fn suit(&self, suit: Suit) -> Result<Vec<Card>, LoadError> {
        let domain = suit_domain(suit);
        MinorRank::ALL
            .into_iter()
            .map(|rank| {
                let (keyword, up, down) = rank_theme(rank);
                Card::new(
                    Arcana::Minor { suit, rank },
                    format!("{} of {}", rank.name(), suit),
                    vec![keyword.to_string(), suit.element().to_string().to_lowercase()],
                    vec![format!("{} {}", up, domain)],
                    vec![format!("{} {}", down, domain)],
                )
            })
            .collect()
    }
}
