//! Property tests for stack resolution and passage ranking.

use proptest::prelude::*;

use tolaria::cards::Card;
use tolaria::core::EngineConfig;
use tolaria::rules::{rank_passages, GlossaryEntry, RuleEntry};
use tolaria::stack::{Action, ResolutionSequencer, Stack, EMPTY_STACK_STATE};

const NAMES: [&str; 6] = ["Shock", "Opt", "Counterspell", "Negate", "Giant Growth", "Lightning Bolt"];

fn arb_card() -> impl Strategy<Value = Card> {
    (0..NAMES.len(), any::<bool>(), any::<bool>()).prop_map(|(idx, cancels, found)| {
        let name = NAMES[idx];
        if !found {
            return Card::not_found(name, "not found");
        }
        let text = if cancels { "Counter target spell." } else { "Draw a card." };
        Card::new(name, "Instant").with_oracle_text(text)
    })
}

fn arb_action() -> impl Strategy<Value = Action> {
    (0..NAMES.len(), 0..NAMES.len(), any::<bool>()).prop_map(|(card, target, targeted)| {
        let action = Action::new(NAMES[card], if card % 2 == 0 { "Player 1" } else { "Player 2" });
        if targeted {
            action.with_target(NAMES[target])
        } else {
            action
        }
    })
}

fn arb_word() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["stack", "counter", "target", "spell", "resolves", "the", "a", "flying"])
        .prop_map(str::to_string)
}

fn arb_sentence() -> impl Strategy<Value = String> {
    prop::collection::vec(arb_word(), 0..8).prop_map(|words| words.join(" "))
}

proptest! {
    #[test]
    fn steps_match_stack(
        cards in prop::collection::vec(arb_card(), 0..8),
        actions in prop::collection::vec(arb_action(), 0..8),
    ) {
        let config = EngineConfig::default();
        let stack = Stack::build(&cards, Some(actions.as_slice()), &config);
        let steps = ResolutionSequencer::new(&config).sequence(&stack);

        prop_assert_eq!(steps.len(), stack.len());

        let resolved: Vec<_> = steps.iter().map(|s| s.card.name.clone()).collect();
        let mut pushed = stack.push_order_names();
        pushed.reverse();
        prop_assert_eq!(resolved, pushed);

        for (idx, step) in steps.iter().enumerate() {
            prop_assert_eq!(step.step_number, idx + 1);
        }
        if let Some(last) = steps.last() {
            prop_assert_eq!(last.state_after.as_str(), EMPTY_STACK_STATE);
        }

        let positions: Vec<_> = stack.entries().iter().map(|e| e.position).collect();
        prop_assert_eq!(positions, (0..stack.len()).collect::<Vec<_>>());
        prop_assert!(stack.entries().iter().all(|e| e.card.found));
    }

    #[test]
    fn cancelled_entries_are_named_by_a_canceller(
        cards in prop::collection::vec(arb_card(), 0..8),
        actions in prop::collection::vec(arb_action(), 0..8),
    ) {
        let config = EngineConfig::default();
        let sequencer = ResolutionSequencer::new(&config);
        let stack = Stack::build(&cards, Some(actions.as_slice()), &config);

        for step in sequencer.sequence(&stack) {
            let named = stack.entries().iter().any(|e| {
                sequencer.is_cancelling(&e.card.effect_text())
                    && e.targets.iter().any(|t| *t == step.card.name)
            });
            prop_assert_eq!(step.cancelled, named);
        }
    }

    #[test]
    fn ranking_is_sorted_bounded_and_deterministic(
        texts in prop::collection::vec(arb_sentence(), 0..10),
        definitions in prop::collection::vec(arb_sentence(), 0..5),
        query in arb_sentence(),
        limit in 0usize..6,
    ) {
        let rules: Vec<_> = texts
            .iter()
            .enumerate()
            .map(|(idx, text)| RuleEntry::new(format!("100.{idx}"), text.clone()))
            .collect();
        let glossary: Vec<_> = definitions
            .iter()
            .enumerate()
            .map(|(idx, def)| GlossaryEntry::new(format!("term{idx}"), def.clone()))
            .collect();

        let ranked = rank_passages(&query, &rules, &glossary, limit);

        prop_assert!(ranked.len() <= limit);
        prop_assert!(ranked.iter().all(|p| p.score > 0));
        prop_assert!(ranked.windows(2).all(|w| w[0].score >= w[1].score));
        prop_assert_eq!(ranked, rank_passages(&query, &rules, &glossary, limit));
    }
}
