//! Explanation assembly.
//!
//! Packages the locally computed stack and steps for the reasoning service,
//! makes exactly one call, and merges the answer into the final response.
//! When the service fails, the response degrades to an explanation built
//! from the steps and the ranked passages, unless the config requires a
//! narrative.

use serde::{Deserialize, Serialize};

use super::context::{enriched_prompt, ExplanationContext};
use super::reasoning::{ReasoningAnswer, ReasoningService};
use crate::cards::Card;
use crate::core::{EngineConfig, Result, TolariaError};
use crate::rules::{RankedPassage, RuleCorpus};
use crate::stack::{ResolutionStep, Stack, StackEntry};

/// Final response for one resolution request.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InteractionResult {
    /// Stack in push order.
    pub stack: Vec<StackEntry>,
    pub resolution_steps: Vec<ResolutionStep>,
    pub explanation: String,
    pub rule_references: Vec<String>,
    pub step_by_step: Vec<String>,
    pub summary: Option<String>,
    /// True when the explanation was synthesized locally.
    pub degraded: bool,
    /// Raw reasoning failure behind a degraded response.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reasoning_error: Option<String>,
}

impl InteractionResult {
    /// Nothing resolved to a stack entry.
    #[must_use]
    pub fn is_empty_stack(&self) -> bool {
        self.stack.is_empty()
    }
}

/// Builds reasoning context and merges answers.
pub struct ContextAssembler<'a> {
    config: &'a EngineConfig,
    corpus: &'a RuleCorpus,
}

impl<'a> ContextAssembler<'a> {
    pub fn new(config: &'a EngineConfig, corpus: &'a RuleCorpus) -> Self {
        Self { config, corpus }
    }

    /// Context bundle for a request, including ranked passages for the question.
    pub fn build_context(
        &self,
        question: &str,
        cards: &[Card],
        stack: &Stack,
        steps: &[ResolutionStep],
    ) -> ExplanationContext {
        let passages = self
            .corpus
            .search_relevant(question, self.config.explanation_passages);
        ExplanationContext::new(cards, stack, steps, passages)
    }

    /// Ask the reasoning service about the resolution and merge its answer.
    ///
    /// Consumes the stack and steps: they move into the response.
    pub fn explain<R>(
        &self,
        question: &str,
        cards: &[Card],
        stack: Stack,
        steps: Vec<ResolutionStep>,
        reasoning: &R,
    ) -> Result<InteractionResult>
    where
        R: ReasoningService + ?Sized,
    {
        let context = self.build_context(question, cards, &stack, &steps);
        let prompt = enriched_prompt(question, &context.stack_order);

        match reasoning.answer(&prompt, &context) {
            Ok(answer) => Ok(InteractionResult {
                stack: stack.into_entries(),
                resolution_steps: steps,
                explanation: answer.answer,
                rule_references: answer.rule_references,
                step_by_step: answer.step_by_step,
                summary: answer.summary,
                degraded: false,
                reasoning_error: None,
            }),
            Err(err) if self.config.require_narrative => {
                tracing::error!(error = %err, "reasoning service failed, narrative required");
                Err(match err {
                    TolariaError::ReasoningUnavailable(_) => err,
                    other => TolariaError::ReasoningUnavailable(other.to_string()),
                })
            }
            Err(err) => {
                tracing::warn!(error = %err, "reasoning service failed, using local explanation");
                let fallback = self.fallback_answer(&steps, &context.relevant_rules);
                Ok(InteractionResult {
                    stack: stack.into_entries(),
                    resolution_steps: steps,
                    explanation: fallback.answer,
                    rule_references: fallback.rule_references,
                    step_by_step: fallback.step_by_step,
                    summary: fallback.summary,
                    degraded: true,
                    reasoning_error: Some(err.to_string()),
                })
            }
        }
    }

    /// Explanation built from local data only.
    pub fn fallback_answer(
        &self,
        steps: &[ResolutionStep],
        passages: &[RankedPassage],
    ) -> ReasoningAnswer {
        let step_by_step: Vec<String> = steps
            .iter()
            .map(|step| format!("Step {}: {}", step.step_number, step.description))
            .collect();

        let mut answer = String::from(
            "The reasoning service was unavailable, so this explanation was assembled from the \
             resolution trace and the most relevant rules.\n\n",
        );

        if step_by_step.is_empty() {
            answer.push_str("The stack is empty, so nothing resolves.\n");
        } else {
            answer.push_str("Resolution (top of the stack first):\n");
            for line in &step_by_step {
                answer.push_str(line);
                answer.push('\n');
            }
        }

        if !passages.is_empty() {
            answer.push_str("\nRelevant rules:\n");
            for passage in passages {
                answer.push_str(&passage.content);
                answer.push('\n');
            }
        }

        let rule_references = passages
            .iter()
            .filter_map(|p| p.rule_number().map(str::to_string))
            .collect();

        let summary = match steps {
            [] => "The stack is empty, so nothing resolves.".to_string(),
            _ => {
                let resolved = steps.iter().filter(|s| !s.cancelled).count();
                let cancelled = steps.len() - resolved;
                format!(
                    "{} resolve{} and {} {} countered.",
                    resolved,
                    if resolved == 1 { "s" } else { "" },
                    cancelled,
                    if cancelled == 1 { "is" } else { "are" },
                )
            }
        };

        ReasoningAnswer {
            answer,
            rule_references,
            step_by_step,
            summary: Some(truncate_chars(&summary, self.config.summary_chars)),
        }
    }
}

/// Truncate to at most `max` characters, marking the cut with `...`.
fn truncate_chars(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let cut: String = text.chars().take(max).collect();
    format!("{cut}...")
}
