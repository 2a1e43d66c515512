//! Card lookup boundary.
//!
//! `CardSource` is the seam to the card-data provider. The engine only ever
//! asks for cards by name and receives fully resolved `Card` values; how the
//! provider finds them (HTTP, a local dump, a fixture) is its own business.
//! `CardCatalog` is the in-memory implementation used for fixtures and
//! offline card pools.

use rustc_hash::FxHashMap;

use super::card::Card;
use crate::core::{Result, TolariaError};

/// Card-data provider.
pub trait CardSource {
    /// Look up a single card by name.
    ///
    /// Returns `CardNotFound` when the provider has no match.
    fn lookup_card(&self, name: &str) -> Result<Card>;

    /// Look up several cards, preserving order.
    ///
    /// Exactly one result per input name. Misses become placeholders with
    /// `found == false`; the call as a whole never fails.
    fn lookup_cards(&self, names: &[String]) -> Vec<Card> {
        names
            .iter()
            .map(|name| match self.lookup_card(name) {
                Ok(card) => card,
                Err(err) => {
                    tracing::warn!(card = %name, error = %err, "card lookup failed, using placeholder");
                    Card::not_found(name.clone(), err.to_string())
                }
            })
            .collect()
    }
}

/// In-memory card pool.
///
/// Names match case-insensitively with runs of whitespace collapsed, so
/// `"lightning  bolt"` finds `"Lightning Bolt"`.
///
/// ## Example
///
/// ```
/// use tolaria::cards::{Card, CardCatalog, CardSource};
///
/// let mut catalog = CardCatalog::new();
/// catalog.insert(Card::new("Counterspell", "Instant").with_oracle_text("Counter target spell."));
///
/// let card = catalog.lookup_card("counterspell").unwrap();
/// assert_eq!(card.name, "Counterspell");
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardCatalog {
    cards: FxHashMap<String, Card>,
}

impl CardCatalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from a list of cards.
    pub fn from_cards(cards: impl IntoIterator<Item = Card>) -> Self {
        let mut catalog = Self::new();
        for card in cards {
            catalog.insert(card);
        }
        catalog
    }

    /// Insert a card, replacing any card with the same normalized name.
    pub fn insert(&mut self, card: Card) {
        self.cards.insert(normalize_name(&card.name), card);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl CardSource for CardCatalog {
    fn lookup_card(&self, name: &str) -> Result<Card> {
        self.cards
            .get(&normalize_name(name))
            .cloned()
            .ok_or_else(|| TolariaError::CardNotFound(name.to_string()))
    }
}

fn normalize_name(name: &str) -> String {
    name.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> CardCatalog {
        CardCatalog::from_cards([
            Card::new("Lightning Bolt", "Instant")
                .with_oracle_text("Lightning Bolt deals 3 damage to any target."),
            Card::new("Counterspell", "Instant").with_oracle_text("Counter target spell."),
        ])
    }

    #[test]
    fn test_lookup_normalizes_name() {
        let catalog = catalog();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.lookup_card("  lightning   BOLT ").unwrap().name, "Lightning Bolt");
    }

    #[test]
    fn test_lookup_missing() {
        let err = catalog().lookup_card("Black Lotus").unwrap_err();
        assert!(matches!(err, TolariaError::CardNotFound(ref name) if name == "Black Lotus"));
    }

    #[test]
    fn test_bulk_lookup_preserves_order_and_placeholders() {
        let names = vec![
            "Counterspell".to_string(),
            "Black Lotus".to_string(),
            "Lightning Bolt".to_string(),
        ];
        let cards = catalog().lookup_cards(&names);

        assert_eq!(cards.len(), 3);
        assert_eq!(cards[0].name, "Counterspell");
        assert!(cards[0].found);
        assert_eq!(cards[1].name, "Black Lotus");
        assert!(!cards[1].found);
        assert!(cards[1].error.is_some());
        assert_eq!(cards[2].name, "Lightning Bolt");
    }

    #[test]
    fn test_insert_replaces_same_name() {
        let mut catalog = CardCatalog::new();
        catalog.insert(Card::new("Shock", "Instant"));
        catalog.insert(Card::new("shock", "Instant").with_oracle_text("Shock deals 2 damage to any target."));
        assert_eq!(catalog.len(), 1);
        assert!(!catalog.lookup_card("Shock").unwrap().oracle_text.is_empty());
    }
}
