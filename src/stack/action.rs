//! Player actions: one card put on the stack by one player.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Target list for an action.
/// Most spells have zero to two targets, so these stay inline.
pub type Targets = SmallVec<[String; 2]>;

/// A card played by a player, with its declared targets.
///
/// Actions are supplied in push order: index 0 is the first card put on
/// the stack (the bottom).
///
/// ## Example
///
/// ```
/// use tolaria::stack::Action;
///
/// let bolt = Action::new("Lightning Bolt", "Player 1").with_target("Player 2");
/// assert_eq!(bolt.targets.len(), 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
    /// Name of the card being played.
    pub card: String,

    /// Player identifier.
    #[serde(alias = "player")]
    pub controller: String,

    /// Targets by card name or player identifier, in declaration order.
    #[serde(default)]
    pub targets: Targets,
}

impl Action {
    /// Create an action with no targets.
    #[must_use]
    pub fn new(card: impl Into<String>, controller: impl Into<String>) -> Self {
        Self {
            card: card.into(),
            controller: controller.into(),
            targets: SmallVec::new(),
        }
    }

    /// Add a target (builder pattern).
    #[must_use]
    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.targets.push(target.into());
        self
    }

    /// Check if this action declares no targets.
    #[must_use]
    pub fn is_untargeted(&self) -> bool {
        self.targets.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_targets() {
        let action = Action::new("Fireball", "Player 1")
            .with_target("Player 2")
            .with_target("Grizzly Bears");

        assert_eq!(action.card, "Fireball");
        assert_eq!(action.controller, "Player 1");
        assert!(!action.is_untargeted());
        assert_eq!(action.targets[0], "Player 2");
        assert_eq!(action.targets[1], "Grizzly Bears");
    }

    #[test]
    fn test_action_deserialize_player_alias() {
        let json = r#"{"card": "Counterspell", "player": "Player 2", "targets": ["Lightning Bolt"]}"#;
        let action: Action = serde_json::from_str(json).unwrap();

        assert_eq!(action.controller, "Player 2");
        assert_eq!(action.targets.as_slice(), ["Lightning Bolt".to_string()]);
    }

    #[test]
    fn test_action_deserialize_without_targets() {
        let json = r#"{"card": "Opt", "controller": "Player 1"}"#;
        let action: Action = serde_json::from_str(json).unwrap();
        assert!(action.is_untargeted());
    }
}
