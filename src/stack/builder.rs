//! Stack construction from actions or a bare card list.
//!
//! The stack is stored in push order (index 0 = bottom, last = top).
//! Building never fails: actions naming a card that was not fetched, and
//! placeholder cards, are skipped.

use serde::{Deserialize, Serialize};

use super::action::{Action, Targets};
use crate::cards::Card;
use crate::core::EngineConfig;

/// An entry on the stack.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StackEntry {
    /// The card being resolved.
    pub card: Card,

    /// Who put this entry on the stack.
    pub controller: String,

    /// Declared targets, in order.
    pub targets: Targets,

    /// Push index, 0-based. The highest position is the top of the stack.
    pub position: usize,
}

/// A LIFO stack of entries for one resolution request.
///
/// Positions are assigned on push and are always contiguous from 0.
///
/// ## Example
///
/// ```
/// use tolaria::cards::Card;
/// use tolaria::stack::{Action, Stack};
///
/// let cards = vec![
///     Card::new("Lightning Bolt", "Instant"),
///     Card::new("Counterspell", "Instant"),
/// ];
/// let actions = vec![
///     Action::new("Lightning Bolt", "Player 1").with_target("Player 2"),
///     Action::new("Counterspell", "Player 2").with_target("Lightning Bolt"),
/// ];
///
/// let stack = Stack::from_actions(&cards, &actions);
/// assert_eq!(stack.len(), 2);
/// assert_eq!(stack.top().unwrap().card.name, "Counterspell");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Stack {
    /// The stack (index 0 = bottom, last = top).
    entries: Vec<StackEntry>,
}

impl Stack {
    /// Create an empty stack.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from explicit actions when given, otherwise from the card list.
    pub fn build(cards: &[Card], actions: Option<&[Action]>, config: &EngineConfig) -> Self {
        match actions {
            Some(actions) if !actions.is_empty() => Self::from_actions(cards, actions),
            _ => Self::from_cards(cards, config),
        }
    }

    /// Build from player actions, in the order given.
    ///
    /// Each action's card is matched by exact name among the found `cards`.
    /// Actions without a match, including those naming a placeholder,
    /// contribute nothing.
    pub fn from_actions(cards: &[Card], actions: &[Action]) -> Self {
        let mut stack = Self::new();

        for action in actions {
            match cards.iter().find(|card| card.found && card.name == action.card) {
                Some(card) => {
                    stack.push(card.clone(), action.controller.clone(), action.targets.clone());
                }
                None => {
                    tracing::warn!(card = %action.card, "no fetched card for action, skipping");
                }
            }
        }

        tracing::debug!(entries = stack.len(), actions = actions.len(), "built stack from actions");
        stack
    }

    /// Build from the fetched card list, treating list order as push order.
    ///
    /// Placeholder cards are skipped. Controllers alternate between the two
    /// configured defaults by the card's index in `cards`.
    pub fn from_cards(cards: &[Card], config: &EngineConfig) -> Self {
        let mut stack = Self::new();

        for (idx, card) in cards.iter().enumerate() {
            if !card.found {
                continue;
            }
            let controller = config.default_controller(idx).to_string();
            stack.push(card.clone(), controller, Targets::new());
        }

        tracing::debug!(entries = stack.len(), cards = cards.len(), "built stack from card list");
        stack
    }

    /// Push an entry on top of the stack and return its position.
    pub fn push(&mut self, card: Card, controller: String, targets: Targets) -> usize {
        let position = self.entries.len();
        self.entries.push(StackEntry {
            card,
            controller,
            targets,
            position,
        });
        position
    }

    /// Get the number of entries on the stack.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Peek at the top of the stack.
    #[must_use]
    pub fn top(&self) -> Option<&StackEntry> {
        self.entries.last()
    }

    /// Entries in push order (bottom to top).
    #[must_use]
    pub fn entries(&self) -> &[StackEntry] {
        &self.entries
    }

    /// Entries in resolution order (top to bottom).
    pub fn resolution_order(&self) -> impl Iterator<Item = &StackEntry> {
        self.entries.iter().rev()
    }

    /// Card names in push order.
    #[must_use]
    pub fn push_order_names(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.card.name.clone()).collect()
    }

    /// Consume the stack, returning entries in push order.
    #[must_use]
    pub fn into_entries(self) -> Vec<StackEntry> {
        self.entries
    }
}
