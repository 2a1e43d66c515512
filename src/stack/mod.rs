//! Stack and resolution system.
//!
//! Cards are pushed onto a stack in the order players act and resolve in
//! LIFO order: the last card pushed resolves first.
//!
//! ## Example Usage
//!
//! ```
//! use tolaria::cards::Card;
//! use tolaria::core::EngineConfig;
//! use tolaria::stack::{Action, ResolutionSequencer, Stack};
//!
//! let cards = vec![
//!     Card::new("Lightning Bolt", "Instant")
//!         .with_oracle_text("Lightning Bolt deals 3 damage to any target."),
//!     Card::new("Counterspell", "Instant").with_oracle_text("Counter target spell."),
//! ];
//! let actions = vec![
//!     Action::new("Lightning Bolt", "Player 1").with_target("Player 2"),
//!     Action::new("Counterspell", "Player 2").with_target("Lightning Bolt"),
//! ];
//!
//! let config = EngineConfig::default();
//! let stack = Stack::build(&cards, Some(actions.as_slice()), &config);
//! let steps = ResolutionSequencer::new(&config).sequence(&stack);
//!
//! assert_eq!(steps[0].card.name, "Counterspell");
//! assert!(steps[1].cancelled);
//! ```

mod action;
mod builder;
mod sequencer;

pub use action::{Action, Targets};
pub use builder::{Stack, StackEntry};
pub use sequencer::{ResolutionSequencer, ResolutionStep, EMPTY_STACK_STATE};
