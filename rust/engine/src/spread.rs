//! Spread definitions: named positions plus their table layout.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::errors::SpreadError;

/// A slot in a spread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    /// Declaration index, `0..card_count`
    pub index: usize,
    pub name: String,
    /// What a card in this slot speaks to
    pub significance: String,
    /// Rank in which the slot is dealt and read
    pub deal_order: usize,
}

impl Position {
    pub fn new(
        index: usize,
        name: impl Into<String>,
        significance: impl Into<String>,
        deal_order: usize,
    ) -> Self {
        Self {
            index,
            name: name.into(),
            significance: significance.into(),
            deal_order,
        }
    }
}

/// Where a position sits on the table, in abstract grid units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutEntry {
    pub position: usize,
    pub x: f32,
    pub y: f32,
    /// Clockwise rotation in degrees
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotation: Option<f32>,
}

impl LayoutEntry {
    pub fn at(position: usize, x: f32, y: f32) -> Self {
        Self {
            position,
            x,
            y,
            rotation: None,
        }
    }

    pub fn rotated(mut self, degrees: f32) -> Self {
        self.rotation = Some(degrees);
        self
    }
}

/// Immutable template a reading is drawn into.
/// Deserialization goes through [`SpreadDefinition::new`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "SpreadWire")]
pub struct SpreadDefinition {
    id: String,
    name: String,
    description: String,
    positions: Vec<Position>,
    layout: Vec<LayoutEntry>,
    allow_reversals: bool,
}

#[derive(Deserialize)]
struct SpreadWire {
    id: String,
    name: String,
    #[serde(default)]
    description: String,
    positions: Vec<Position>,
    #[serde(default)]
    layout: Vec<LayoutEntry>,
    allow_reversals: bool,
}

impl TryFrom<SpreadWire> for SpreadDefinition {
    type Error = SpreadError;

    fn try_from(wire: SpreadWire) -> Result<Self, Self::Error> {
        SpreadDefinition::new(
            wire.id,
            wire.name,
            wire.description,
            wire.positions,
            wire.layout,
            wire.allow_reversals,
        )
    }
}

const BUILTIN_IDS: [&str; 4] = ["single-card", "three-card", "horseshoe", "celtic-cross"];

impl SpreadDefinition {
    /// Validates and builds a spread.
    ///
    /// Positions must be declared in index order starting at 0, deal orders
    /// must be pairwise distinct, and layout entries must name declared positions.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        positions: Vec<Position>,
        layout: Vec<LayoutEntry>,
        allow_reversals: bool,
    ) -> Result<Self, SpreadError> {
        if positions.is_empty() {
            return Err(SpreadError::NoPositions);
        }
        let mut deal_orders = HashSet::new();
        for (slot, pos) in positions.iter().enumerate() {
            if pos.index != slot {
                return Err(SpreadError::PositionIndex {
                    slot,
                    index: pos.index,
                });
            }
            if !deal_orders.insert(pos.deal_order) {
                return Err(SpreadError::DuplicateDealOrder {
                    deal_order: pos.deal_order,
                });
            }
        }
        if let Some(entry) = layout.iter().find(|e| e.position >= positions.len()) {
            return Err(SpreadError::UnknownLayoutPosition {
                position: entry.position,
            });
        }
        Ok(Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            positions,
            layout,
            allow_reversals,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn description(&self) -> &str {
        &self.description
    }
    pub fn positions(&self) -> &[Position] {
        &self.positions
    }
    pub fn layout(&self) -> &[LayoutEntry] {
        &self.layout
    }
    pub fn allow_reversals(&self) -> bool {
        self.allow_reversals
    }

    pub fn card_count(&self) -> usize {
        self.positions.len()
    }

    /// Positions sorted by deal order.
    pub fn positions_by_deal_order(&self) -> Vec<&Position> {
        let mut sorted: Vec<&Position> = self.positions.iter().collect();
        sorted.sort_by_key(|p| p.deal_order);
        sorted
    }

    pub fn builtin_ids() -> &'static [&'static str] {
        &BUILTIN_IDS
    }

    /// Looks up a bundled spread by id.
    pub fn builtin(id: &str) -> Result<Self, SpreadError> {
        match id {
            "single-card" => Ok(Self::single_card()),
            "three-card" => Ok(Self::three_card()),
            "horseshoe" => Ok(Self::horseshoe()),
            "celtic-cross" => Ok(Self::celtic_cross()),
            other => Err(SpreadError::UnknownSpread(other.to_string())),
        }
    }

    /// Every bundled spread, in [`SpreadDefinition::builtin_ids`] order.
    pub fn builtins() -> Vec<Self> {
        vec![
            Self::single_card(),
            Self::three_card(),
            Self::horseshoe(),
            Self::celtic_cross(),
        ]
    }

    pub fn single_card() -> Self {
        Self::bundled(
            "single-card",
            "Single Card",
            "One card for a focused question or daily draw.",
            vec![Position::new(0, "Focus", "The heart of the matter", 0)],
            vec![LayoutEntry::at(0, 0.0, 0.0)],
        )
    }

    pub fn three_card() -> Self {
        Self::bundled(
            "three-card",
            "Past, Present, Future",
            "A simple timeline of how the situation developed and where it leads.",
            vec![
                Position::new(0, "Past", "Influences that led here", 0),
                Position::new(1, "Present", "The situation as it stands", 1),
                Position::new(2, "Future", "Where things are heading", 2),
            ],
            vec![
                LayoutEntry::at(0, -1.0, 0.0),
                LayoutEntry::at(1, 0.0, 0.0),
                LayoutEntry::at(2, 1.0, 0.0),
            ],
        )
    }

    pub fn horseshoe() -> Self {
        Self::bundled(
            "horseshoe",
            "Horseshoe",
            "Seven cards in an arc tracing a problem from its roots to its outcome.",
            vec![
                Position::new(0, "Past", "Events behind the question", 0),
                Position::new(1, "Present", "Current circumstances", 1),
                Position::new(2, "Hidden Influences", "Forces not yet seen", 2),
                Position::new(3, "Obstacles", "What stands in the way", 3),
                Position::new(4, "Surroundings", "Attitudes of others", 4),
                Position::new(5, "Advice", "The suggested course", 5),
                Position::new(6, "Outcome", "The likely result", 6),
            ],
            vec![
                LayoutEntry::at(0, -3.0, 2.0),
                LayoutEntry::at(1, -2.0, 1.0),
                LayoutEntry::at(2, -1.0, 0.0),
                LayoutEntry::at(3, 0.0, -0.5),
                LayoutEntry::at(4, 1.0, 0.0),
                LayoutEntry::at(5, 2.0, 1.0),
                LayoutEntry::at(6, 3.0, 2.0),
            ],
        )
    }

    /// The ten-card Celtic Cross. The challenge card lies across the present.
    pub fn celtic_cross() -> Self {
        Self::bundled(
            "celtic-cross",
            "Celtic Cross",
            "The classic ten-card spread covering the situation, its causes and its course.",
            vec![
                Position::new(0, "Present", "The situation as it stands", 0),
                Position::new(1, "Challenge", "What crosses the querent", 1),
                Position::new(2, "Foundation", "The root of the matter", 2),
                Position::new(3, "Recent Past", "What is passing away", 3),
                Position::new(4, "Crown", "The best that can be achieved", 4),
                Position::new(5, "Near Future", "What is approaching", 5),
                Position::new(6, "Self", "The querent's stance", 6),
                Position::new(7, "Environment", "Outside influences", 7),
                Position::new(8, "Hopes and Fears", "What is wished for or dreaded", 8),
                Position::new(9, "Outcome", "Where the path leads", 9),
            ],
            vec![
                LayoutEntry::at(0, 0.0, 0.0),
                LayoutEntry::at(1, 0.0, 0.0).rotated(90.0),
                LayoutEntry::at(2, 0.0, 1.5),
                LayoutEntry::at(3, -1.5, 0.0),
                LayoutEntry::at(4, 0.0, -1.5),
                LayoutEntry::at(5, 1.5, 0.0),
                LayoutEntry::at(6, 3.0, 2.25),
                LayoutEntry::at(7, 3.0, 0.75),
                LayoutEntry::at(8, 3.0, -0.75),
                LayoutEntry::at(9, 3.0, -2.25),
            ],
        )
    }

    // invariants checked by tests::bundled_spreads_pass_validation
    fn bundled(
        id: &str,
        name: &str,
        description: &str,
        positions: Vec<Position>,
        layout: Vec<LayoutEntry>,
    ) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            positions,
            layout,
            allow_reversals: true,
        }
    }
}
