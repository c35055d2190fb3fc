//! `eventboard-core`: domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns).

pub mod error;
pub mod id;
pub mod reducer;

pub use error::{DomainError, DomainResult};
pub use id::EventId;
pub use reducer::{Reducer, Snapshot, dispatch};
