//! # tolaria
//!
//! Stack resolution engine for card game rules questions.
//!
//! Given the cards involved in an interaction and the order players cast
//! them, the engine builds the stack, resolves it top to bottom, and
//! produces a step-by-step trace plus the rule passages most relevant to
//! the question.
//!
//! ## Design Principles
//!
//! 1. **No I/O in the core**: card lookup and narrative explanation are
//!    collaborators behind the `CardSource` and `ReasoningService` traits.
//!
//! 2. **Explicit dependencies**: the rule corpus and collaborators are
//!    constructed once and passed in. There are no globals.
//!
//! 3. **Deterministic output**: the same inputs always produce the same
//!    steps and the same passage ranking.
//!
//! ## Modules
//!
//! - `core`: Configuration and errors
//! - `cards`: Card data, type classification, card lookup
//! - `stack`: Stack building and resolution sequencing
//! - `rules`: Rule corpus and keyword relevance ranking
//! - `explain`: Reasoning context, fallback explanations, orchestration

pub mod core;
pub mod cards;
pub mod stack;
pub mod rules;
pub mod explain;

// Re-export commonly used types
pub use crate::core::{EngineConfig, Result, TolariaError};

pub use crate::cards::{Card, CardCatalog, CardFace, CardSource, CardTypes};

pub use crate::stack::{
    Action, ResolutionSequencer, ResolutionStep, Stack, StackEntry, EMPTY_STACK_STATE,
};

pub use crate::rules::{
    rank_passages, GlossaryEntry, PassageMetadata, RankedPassage, RuleCorpus, RuleEntry,
};

pub use crate::explain::{
    ContextAssembler, ExplanationContext, InteractionResolver, InteractionResult,
    ReasoningAnswer, ReasoningService,
};
