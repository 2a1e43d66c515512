//! Explanation of a resolved stack.
//!
//! - `ExplanationContext` / `enriched_prompt`: what the reasoning service sees
//! - `ReasoningService`: the external reasoning collaborator
//! - `ContextAssembler`: one reasoning call, merged into `InteractionResult`
//! - `InteractionResolver`: lookup, build, sequence and explain in one call

pub mod assembler;
pub mod context;
pub mod reasoning;
pub mod resolver;

pub use assembler::{ContextAssembler, InteractionResult};
pub use context::{enriched_prompt, CardSummary, ExplanationContext};
pub use reasoning::{render_user_prompt, ReasoningAnswer, ReasoningService, SYSTEM_PROMPT};
pub use resolver::InteractionResolver;
