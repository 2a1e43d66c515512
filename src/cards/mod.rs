//! Card data and the card lookup boundary.
//!
//! ## Key Types
//!
//! - `Card`: Card metadata as returned by the card-data provider
//! - `CardTypes`: Boolean type facts derived from a type line
//! - `CardSource`: Lookup trait implemented by card-data providers
//! - `CardCatalog`: In-memory `CardSource`
//!
//! ## Placeholders
//!
//! A failed lookup is not an error at this level. It produces a `Card`
//! with `found == false`, which the stack builder skips.

pub mod card;
pub mod catalog;
pub mod types;

pub use card::{Card, CardFace};
pub use catalog::{CardCatalog, CardSource};
pub use types::CardTypes;
