//! Prelude module for epoch_parser crate.
//!
//! Re-exports the derive_more macros the crate derives with.

pub use derive_more::{Display, Into};
