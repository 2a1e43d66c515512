//! Comprehensive rules corpus and keyword ranking.
//!
//! - `RuleCorpus`: numbered rules plus glossary, loaded once at startup
//! - `rank_passages`: multi-signal keyword scoring, no embeddings
//!
//! The corpus is read-only after construction; share it with `Arc`.

pub mod corpus;
pub mod ranker;

pub use corpus::{section_for_number, GlossaryEntry, RuleCorpus, RuleEntry};
pub use ranker::{rank_passages, PassageMetadata, RankedPassage};
