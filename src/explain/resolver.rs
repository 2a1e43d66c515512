//! End-to-end resolution of one interaction question.

use std::sync::Arc;

use super::assembler::{ContextAssembler, InteractionResult};
use super::reasoning::ReasoningService;
use crate::cards::{Card, CardSource};
use crate::core::{EngineConfig, Result};
use crate::rules::RuleCorpus;
use crate::stack::{Action, ResolutionSequencer, Stack};

/// Resolves interaction questions.
///
/// Construct once at startup with the loaded corpus and the collaborators,
/// then call [`resolve_interaction`](Self::resolve_interaction) per request.
/// Nothing is cached between requests.
pub struct InteractionResolver<C, R> {
    config: EngineConfig,
    corpus: Arc<RuleCorpus>,
    cards: C,
    reasoning: R,
}

impl<C, R> InteractionResolver<C, R>
where
    C: CardSource,
    R: ReasoningService,
{
    pub fn new(config: EngineConfig, corpus: Arc<RuleCorpus>, cards: C, reasoning: R) -> Self {
        Self {
            config,
            corpus,
            cards,
            reasoning,
        }
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    #[must_use]
    pub fn corpus(&self) -> &RuleCorpus {
        &self.corpus
    }

    /// Look up the cards, build and resolve the stack, and explain it.
    ///
    /// Every name is looked up before the stack is built; names the card
    /// source cannot find are left out of the stack.
    pub fn resolve_interaction(
        &self,
        question: &str,
        card_names: &[String],
        actions: Option<&[Action]>,
    ) -> Result<InteractionResult> {
        let cards = self.cards.lookup_cards(card_names);
        self.resolve_with_cards(question, &cards, actions)
    }

    /// Same as `resolve_interaction`, for callers that fetched cards themselves.
    pub fn resolve_with_cards(
        &self,
        question: &str,
        cards: &[Card],
        actions: Option<&[Action]>,
    ) -> Result<InteractionResult> {
        let stack = Stack::build(cards, actions, &self.config);
        let steps = ResolutionSequencer::new(&self.config).sequence(&stack);

        if stack.is_empty() {
            tracing::info!(cards = cards.len(), "no card resolved to a stack entry");
        }

        let result = ContextAssembler::new(&self.config, &self.corpus)
            .explain(question, cards, stack, steps, &self.reasoning)?;

        tracing::info!(
            entries = result.stack.len(),
            steps = result.resolution_steps.len(),
            degraded = result.degraded,
            "resolved interaction"
        );
        Ok(result)
    }
}
