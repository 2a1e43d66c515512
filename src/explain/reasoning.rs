//! Reasoning service boundary.
//!
//! The reasoning service turns a prompt plus structured context into a
//! narrative explanation with rule citations. Adapters must hand back a
//! validated `ReasoningAnswer` or a `ReasoningUnavailable` error; free text
//! is never scraped for embedded JSON.

use serde::{Deserialize, Serialize};

use super::context::ExplanationContext;
use crate::core::{Result, TolariaError};

/// System prompt for adapters that talk to a chat-style model.
pub const SYSTEM_PROMPT: &str = "You are Tolaria, an expert judge and rules advisor.
Your role is to provide clear, accurate explanations of the comprehensive rules and card interactions.

When answering questions:
1. Cite specific rule numbers when applicable
2. Explain the reasoning step-by-step
3. Use clear, accessible language
4. Address common misconceptions if relevant
5. Consider the stack order and priority carefully

Always be precise and refer to the official comprehensive rules provided.";

/// Structured answer from the reasoning service.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReasoningAnswer {
    /// The main explanation.
    pub answer: String,

    /// Rule numbers cited, in order.
    #[serde(default)]
    pub rule_references: Vec<String>,

    #[serde(default)]
    pub step_by_step: Vec<String>,

    /// One-sentence summary.
    #[serde(default)]
    pub summary: Option<String>,
}

impl ReasoningAnswer {
    /// Parse a model response that must be exactly one JSON object.
    ///
    /// Surrounding whitespace is allowed; surrounding prose is not.
    pub fn from_json(text: &str) -> Result<Self> {
        let answer: ReasoningAnswer = serde_json::from_str(text.trim())
            .map_err(|err| TolariaError::ReasoningUnavailable(format!("unparseable answer: {err}")))?;

        if answer.answer.trim().is_empty() {
            return Err(TolariaError::ReasoningUnavailable(
                "answer has no explanation text".to_string(),
            ));
        }

        Ok(answer)
    }
}

/// External reasoning collaborator.
///
/// Called once per resolution request. Implementations own any network
/// I/O, timeouts and retries.
pub trait ReasoningService {
    fn answer(&self, prompt: &str, context: &ExplanationContext) -> Result<ReasoningAnswer>;
}

impl<F> ReasoningService for F
where
    F: Fn(&str, &ExplanationContext) -> Result<ReasoningAnswer>,
{
    fn answer(&self, prompt: &str, context: &ExplanationContext) -> Result<ReasoningAnswer> {
        self(prompt, context)
    }
}

/// User message for chat-style adapters: the prompt, the ranked passages,
/// the rest of the context as JSON, and the required response format.
pub fn render_user_prompt(prompt: &str, context: &ExplanationContext) -> Result<String> {
    let rules = context
        .relevant_rules
        .iter()
        .map(|passage| passage.content.as_str())
        .collect::<Vec<_>>()
        .join("\n\n");

    let additional = serde_json::json!({
        "cards": context.cards,
        "stack_order": context.stack_order,
        "resolution_order": context.resolution_order,
    });

    Ok(format!(
        "Question: {prompt}\n\
         \n\
         Relevant Rules:\n\
         {rules}\n\
         \n\
         Additional Context:\n\
         {context}\n\
         \n\
         Please provide a detailed answer that:\n\
         1. Directly answers the question\n\
         2. References specific rules by number\n\
         3. Explains the reasoning step-by-step\n\
         4. Addresses how this would play out in a game\n\
         \n\
         Respond with a single JSON object and nothing else, with these fields:\n\
         - answer: The main explanation\n\
         - rule_references: List of rule numbers referenced\n\
         - step_by_step: List of steps if explaining a sequence of events\n\
         - summary: Brief one-sentence summary\n",
        context = serde_json::to_string_pretty(&additional)?,
    ))
}
