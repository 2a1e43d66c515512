//! Context bundle and enriched prompt for the reasoning service.

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::rules::RankedPassage;
use crate::stack::{ResolutionStep, Stack};

/// Name, type and effect text of a found card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardSummary {
    pub name: String,
    #[serde(rename = "type")]
    pub type_line: String,
    pub text: String,
}

impl CardSummary {
    pub fn from_card(card: &Card) -> Self {
        Self {
            name: card.name.clone(),
            type_line: card.type_line.clone(),
            text: card.effect_text(),
        }
    }
}

/// Structured context handed to the reasoning service with the prompt.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExplanationContext {
    /// Summaries of every card the provider found, in lookup order.
    pub cards: Vec<CardSummary>,
    /// Card names bottom to top.
    pub stack_order: Vec<String>,
    /// Card names in the order they resolve (top first).
    pub resolution_order: Vec<String>,
    /// Ranked rule and glossary passages for the question.
    pub relevant_rules: Vec<RankedPassage>,
}

impl ExplanationContext {
    pub fn new(
        cards: &[Card],
        stack: &Stack,
        steps: &[ResolutionStep],
        relevant_rules: Vec<RankedPassage>,
    ) -> Self {
        Self {
            cards: cards
                .iter()
                .filter(|card| card.found)
                .map(CardSummary::from_card)
                .collect(),
            stack_order: stack.push_order_names(),
            resolution_order: steps.iter().map(|step| step.card.name.clone()).collect(),
            relevant_rules,
        }
    }
}

/// Build the question sent to the reasoning service: the user's question,
/// the stack contents, and the four points every answer must cover.
#[must_use]
pub fn enriched_prompt(question: &str, stack_order: &[String]) -> String {
    let contents = if stack_order.is_empty() {
        "(empty)".to_string()
    } else {
        stack_order.join(", ")
    };

    format!(
        "{question}\n\
         \n\
         The stack currently contains (bottom to top): {contents}\n\
         \n\
         How does this resolve according to the comprehensive rules?\n\
         Please explain:\n\
         1. The correct resolution order (LIFO)\n\
         2. Whether any spells/abilities counter each other\n\
         3. Any relevant priority or timing considerations\n\
         4. The final game state after full resolution\n"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::EngineConfig;
    use crate::stack::{Action, ResolutionSequencer};

    #[test]
    fn test_enriched_prompt_lists_stack_and_directives() {
        let prompt = enriched_prompt(
            "What happens?",
            &["Lightning Bolt".to_string(), "Counterspell".to_string()],
        );

        assert!(prompt.starts_with("What happens?\n\n"));
        assert!(prompt.contains("(bottom to top): Lightning Bolt, Counterspell\n"));
        assert!(prompt.contains("1. The correct resolution order (LIFO)"));
        assert!(prompt.contains("2. Whether any spells/abilities counter each other"));
        assert!(prompt.contains("3. Any relevant priority or timing considerations"));
        assert!(prompt.contains("4. The final game state after full resolution"));
    }

    #[test]
    fn test_enriched_prompt_empty_stack() {
        let prompt = enriched_prompt("Anything?", &[]);
        assert!(prompt.contains("(bottom to top): (empty)"));
    }

    #[test]
    fn test_context_skips_placeholders() {
        let cards = vec![
            Card::new("Lightning Bolt", "Instant")
                .with_oracle_text("Lightning Bolt deals 3 damage to any target."),
            Card::not_found("Typo Card", "not found"),
            Card::new("Counterspell", "Instant").with_oracle_text("Counter target spell."),
        ];
        let actions = vec![
            Action::new("Lightning Bolt", "Player 1"),
            Action::new("Counterspell", "Player 2").with_target("Lightning Bolt"),
        ];
        let config = EngineConfig::default();
        let stack = Stack::from_actions(&cards, &actions);
        let steps = ResolutionSequencer::new(&config).sequence(&stack);

        let context = ExplanationContext::new(&cards, &stack, &steps, Vec::new());

        assert_eq!(context.cards.len(), 2);
        assert_eq!(context.cards[1].text, "Counter target spell.");
        assert_eq!(context.stack_order, vec!["Lightning Bolt", "Counterspell"]);
        assert_eq!(context.resolution_order, vec!["Counterspell", "Lightning Bolt"]);
    }

    #[test]
    fn test_card_summary_serializes_type_key() {
        let summary = CardSummary::from_card(&Card::new("Opt", "Instant"));
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["type"], "Instant");
    }
}
