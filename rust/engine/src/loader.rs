//! Card data sources.
//!
//! A [`CardSource`] yields validated cards per arcana and suit. The deck
//! treats any failure as fatal to construction.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cards::{Arcana, Card, MinorRank, Suit};
use crate::errors::LoadError;

pub trait CardSource {
    /// All major arcana cards, in any order.
    fn major_arcana(&self) -> Result<Vec<Card>, LoadError>;

    /// All cards of one minor arcana suit, in any order.
    fn suit(&self, suit: Suit) -> Result<Vec<Card>, LoadError>;
}

/// On-disk shape of one card entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardRecord {
    pub rank: u8,
    pub name: String,
    #[serde(default)]
    pub keywords: Vec<String>,
    pub upright: Vec<String>,
    pub reversed: Vec<String>,
    /// Optional on the wire; when present it must match the file's suit.
    #[serde(default)]
    pub suit: Option<Suit>,
    #[serde(default)]
    pub description: Option<String>,
}

impl CardRecord {
    fn into_card(self, expected_suit: Option<Suit>, what: &str) -> Result<Card, LoadError> {
        let arcana = match expected_suit {
            None => {
                if self.suit.is_some() {
                    return Err(LoadError::malformed(
                        what,
                        format!("major arcana card '{}' carries a suit", self.name),
                    ));
                }
                Arcana::Major { rank: self.rank }
            }
            Some(suit) => {
                if let Some(declared) = self.suit {
                    if declared != suit {
                        return Err(LoadError::malformed(
                            what,
                            format!("card '{}' declares suit {} in {} data", self.name, declared, suit),
                        ));
                    }
                }
                let rank = MinorRank::from_value(self.rank).ok_or_else(|| {
                    LoadError::malformed(what, format!("minor rank {} out of range 1..=14", self.rank))
                })?;
                Arcana::Minor { suit, rank }
            }
        };
        let card = Card::new(arcana, self.name, self.keywords, self.upright, self.reversed)?;
        Ok(match self.description {
            Some(desc) => card.with_description(desc),
            None => card,
        })
    }
}

/// Reads `major.json` and `<suit>.json` files from a directory.
/// Each file holds a JSON array of [`CardRecord`]s.
#[derive(Debug, Clone)]
pub struct JsonDirectory {
    root: PathBuf,
}

impl JsonDirectory {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn read_records(&self, stem: &str) -> Result<Vec<CardRecord>, LoadError> {
        let path = self.root.join(format!("{}.json", stem));
        debug!(path = %path.display(), "reading card data");
        let text = match fs::read_to_string(&path) {
            Ok(t) => t,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(LoadError::NotFound {
                    what: path.display().to_string(),
                });
            }
            Err(source) => return Err(LoadError::Io { path, source }),
        };
        serde_json::from_str(&text)
            .map_err(|e| LoadError::malformed(path.display().to_string(), e.to_string()))
    }

    fn load(&self, stem: &str, suit: Option<Suit>) -> Result<Vec<Card>, LoadError> {
        let what = format!("{}.json", stem);
        self.read_records(stem)?
            .into_iter()
            .map(|rec| rec.into_card(suit, &what))
            .collect()
    }
}

impl CardSource for JsonDirectory {
    fn major_arcana(&self) -> Result<Vec<Card>, LoadError> {
        self.load("major", None)
    }

    fn suit(&self, suit: Suit) -> Result<Vec<Card>, LoadError> {
        self.load(suit.label(), Some(suit))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_rejects_mismatched_suit() {
        let rec = CardRecord {
            rank: 2,
            name: "Two of Cups".into(),
            keywords: vec![],
            upright: vec!["union".into()],
            reversed: vec!["imbalance".into()],
            suit: Some(Suit::Swords),
            description: None,
        };
        let err = rec.into_card(Some(Suit::Cups), "cups.json").unwrap_err();
        assert!(matches!(err, LoadError::Malformed { .. }));
    }

    #[test]
    fn record_rejects_bad_minor_rank() {
        let rec = CardRecord {
            rank: 0,
            name: "Zero of Cups".into(),
            keywords: vec![],
            upright: vec!["a".into()],
            reversed: vec!["b".into()],
            suit: None,
            description: None,
        };
        assert!(rec.into_card(Some(Suit::Cups), "cups.json").is_err());
    }

    #[test]
    fn missing_directory_reports_not_found() {
        let dir = JsonDirectory::new("/definitely/not/here");
        assert!(matches!(
            dir.major_arcana(),
            Err(LoadError::NotFound { .. })
        ));
    }
}
