//! Resolution sequencing.
//!
//! Walks the stack top to bottom and produces one `ResolutionStep` per
//! entry. Cancellation is a text heuristic: an entry whose effect text
//! contains the configured phrase cancels every target it declared. No
//! effect parsing happens beyond that substring check.
//!
//! Cancellations are collected from every entry before any step is
//! emitted. A target is therefore cancelled wherever its canceller sits on
//! the stack, and a cancelled canceller still cancels its targets. Chained
//! cancellation ("counter the counterspell, so the original spell
//! resolves") is not modelled.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::builder::{Stack, StackEntry};
use crate::cards::Card;
use crate::core::EngineConfig;

/// `state_after` of a step that leaves nothing on the stack.
pub const EMPTY_STACK_STATE: &str = "Stack is empty. Priority returns to active player.";

/// One step of the resolution trace.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ResolutionStep {
    /// 1-based index in resolution order; step 1 is the top of the stack.
    pub step_number: usize,

    /// Short label such as `"Resolve Counterspell"`.
    pub action: String,

    pub card: Card,

    pub description: String,

    /// Remaining stack after this step, bottom to top, or
    /// [`EMPTY_STACK_STATE`].
    pub state_after: String,

    /// True when the entry was cancelled and produced no effect.
    pub cancelled: bool,
}

/// Produces resolution steps for a stack.
#[derive(Clone, Debug)]
pub struct ResolutionSequencer {
    /// Lowercased cancellation phrase.
    cancel_phrase: String,
}

impl ResolutionSequencer {
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            cancel_phrase: config.cancel_phrase.to_lowercase(),
        }
    }

    /// Check if an effect text cancels its targets.
    #[must_use]
    pub fn is_cancelling(&self, effect_text: &str) -> bool {
        !self.cancel_phrase.is_empty() && effect_text.to_lowercase().contains(&self.cancel_phrase)
    }

    /// Resolve the whole stack, top first.
    ///
    /// Every entry yields exactly one step. An empty stack yields no steps.
    pub fn sequence(&self, stack: &Stack) -> Vec<ResolutionStep> {
        let order: Vec<&StackEntry> = stack.resolution_order().collect();
        let cancelled = self.cancelled_targets(&order);
        let mut steps = Vec::with_capacity(order.len());

        for (idx, entry) in order.iter().enumerate() {
            let effect_text = entry.card.effect_text();
            let is_cancelled = cancelled.contains(entry.card.name.as_str());
            let is_last = idx + 1 == order.len();
            let name = &entry.card.name;

            let (action, description) = if is_cancelled {
                (
                    format!("{name} is countered"),
                    format!(
                        "{name} is countered and does not resolve. It goes to the graveyard \
                         without its effect taking place."
                    ),
                )
            } else {
                (
                    format!("Resolve {name}"),
                    describe_resolution(entry, &effect_text, is_last),
                )
            };

            tracing::debug!(step = idx + 1, card = %name, cancelled = is_cancelled, "resolution step");

            steps.push(ResolutionStep {
                step_number: idx + 1,
                action,
                card: entry.card.clone(),
                description,
                state_after: describe_remaining(&order[idx + 1..]),
                cancelled: is_cancelled,
            });
        }

        steps
    }

    /// Every target named by a cancelling entry. Set semantics: naming the
    /// same target twice is the same as naming it once.
    fn cancelled_targets<'s>(&self, order: &[&'s StackEntry]) -> FxHashSet<&'s str> {
        order
            .iter()
            .filter(|entry| self.is_cancelling(&entry.card.effect_text()))
            .flat_map(|entry| entry.targets.iter().map(String::as_str))
            .collect()
    }
}

/// First sentence of an effect text: everything before the first period,
/// or the whole text when there is none.
fn first_sentence(text: &str) -> &str {
    text.split('.').next().unwrap_or(text).trim()
}

fn describe_resolution(entry: &StackEntry, effect_text: &str, is_last: bool) -> String {
    let mut description = format!("{} resolves {}.", entry.controller, entry.card.name);

    if !effect_text.is_empty() {
        description.push_str(&format!(" Effect: {}.", first_sentence(effect_text)));
    }

    if !entry.targets.is_empty() {
        description.push_str(&format!(" Targeting: {}.", entry.targets.join(", ")));
    }

    if is_last {
        description.push_str(" The stack is now empty.");
    }

    description
}

/// `remaining` is in resolution order (top first); render it bottom to top.
fn describe_remaining(remaining: &[&StackEntry]) -> String {
    if remaining.is_empty() {
        return EMPTY_STACK_STATE.to_string();
    }

    let names: Vec<&str> = remaining.iter().rev().map(|e| e.card.name.as_str()).collect();
    format!("Stack contains (bottom to top): {}", names.join(", "))
}
