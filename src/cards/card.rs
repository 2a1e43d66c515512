//! Card data as delivered by the card-data provider.
//!
//! A `Card` is immutable for the lifetime of a request. Lookups that fail are
//! still represented as a `Card` with `found == false`, so the result of a
//! bulk lookup always lines up one-to-one with the requested names.

use serde::{Deserialize, Serialize};

use super::types::CardTypes;

/// One face of a multi-faced card.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardFace {
    pub name: String,
    #[serde(default)]
    pub mana_cost: String,
    #[serde(default)]
    pub type_line: String,
    #[serde(default)]
    pub oracle_text: String,
}

/// Card metadata.
///
/// ## Example
///
/// ```
/// use tolaria::cards::Card;
///
/// let bolt = Card::new("Lightning Bolt", "Instant")
///     .with_mana_cost("{R}")
///     .with_oracle_text("Lightning Bolt deals 3 damage to any target.");
///
/// assert!(bolt.found);
/// assert!(bolt.types().is_instant);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Card {
    /// Card name, unique within a resolution request.
    pub name: String,

    #[serde(default)]
    pub mana_cost: String,

    #[serde(default)]
    pub cmc: f64,

    #[serde(default)]
    pub type_line: String,

    /// Rules text. Empty for vanilla cards and for most multi-faced cards,
    /// whose text lives on the faces.
    #[serde(default)]
    pub oracle_text: String,

    #[serde(default)]
    pub colors: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub power: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub toughness: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loyalty: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub card_faces: Vec<CardFace>,

    /// False when the lookup failed and this entry is a placeholder.
    pub found: bool,

    /// Lookup failure message, set only on placeholders.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Card {
    /// Create a found card with a name and type line.
    #[must_use]
    pub fn new(name: impl Into<String>, type_line: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_line: type_line.into(),
            found: true,
            ..Self::default()
        }
    }

    /// Create a placeholder for a name the provider could not resolve.
    #[must_use]
    pub fn not_found(name: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            found: false,
            error: Some(error.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_mana_cost(mut self, cost: impl Into<String>) -> Self {
        self.mana_cost = cost.into();
        self
    }

    #[must_use]
    pub fn with_oracle_text(mut self, text: impl Into<String>) -> Self {
        self.oracle_text = text.into();
        self
    }

    #[must_use]
    pub fn with_stats(mut self, power: impl Into<String>, toughness: impl Into<String>) -> Self {
        self.power = Some(power.into());
        self.toughness = Some(toughness.into());
        self
    }

    #[must_use]
    pub fn with_face(mut self, face: CardFace) -> Self {
        self.card_faces.push(face);
        self
    }

    /// Effect text used for resolution.
    ///
    /// Falls back to the faces' texts joined with `" // "` when the card has
    /// no top-level oracle text.
    #[must_use]
    pub fn effect_text(&self) -> String {
        if !self.oracle_text.is_empty() || self.card_faces.is_empty() {
            return self.oracle_text.clone();
        }

        self.card_faces
            .iter()
            .map(|face| face.oracle_text.as_str())
            .filter(|text| !text.is_empty())
            .collect::<Vec<_>>()
            .join(" // ")
    }

    /// Type facts derived from the type line.
    #[must_use]
    pub fn types(&self) -> CardTypes {
        CardTypes::from_type_line(&self.type_line)
    }
}
