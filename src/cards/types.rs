//! Card type classification from a type line.

use serde::{Deserialize, Serialize};

/// Boolean type facts for a card.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardTypes {
    pub is_creature: bool,
    pub is_instant: bool,
    pub is_sorcery: bool,
    pub is_enchantment: bool,
    pub is_artifact: bool,
    pub is_planeswalker: bool,
    pub is_land: bool,
    pub is_tribal: bool,
}

impl CardTypes {
    /// Classify a type line such as `"Legendary Creature — Elf"`.
    ///
    /// Matching is a case-insensitive substring check per type word.
    #[must_use]
    pub fn from_type_line(type_line: &str) -> Self {
        let line = type_line.to_lowercase();
        Self {
            is_creature: line.contains("creature"),
            is_instant: line.contains("instant"),
            is_sorcery: line.contains("sorcery"),
            is_enchantment: line.contains("enchantment"),
            is_artifact: line.contains("artifact"),
            is_planeswalker: line.contains("planeswalker"),
            is_land: line.contains("land"),
            is_tribal: line.contains("tribal"),
        }
    }

    /// Instants and sorceries go to the stack as spells and leave no permanent.
    #[must_use]
    pub fn is_spell_only(&self) -> bool {
        self.is_instant || self.is_sorcery
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instant() {
        let types = CardTypes::from_type_line("Instant");
        assert!(types.is_instant);
        assert!(!types.is_creature);
        assert!(types.is_spell_only());
    }

    #[test]
    fn test_artifact_creature() {
        let types = CardTypes::from_type_line("Artifact Creature — Golem");
        assert!(types.is_artifact);
        assert!(types.is_creature);
        assert!(!types.is_spell_only());
    }

    #[test]
    fn test_tribal_and_case() {
        let types = CardTypes::from_type_line("TRIBAL INSTANT — Goblin");
        assert!(types.is_tribal);
        assert!(types.is_instant);
    }

    #[test]
    fn test_empty_type_line() {
        assert_eq!(CardTypes::from_type_line(""), CardTypes::default());
    }
}
