//! Adapters Layer (Driven Adapters)
//!
//! - `InMemoryRelationStore` - Relation data held in process memory
//! - `InMemoryStatus` - Unit status history held in process memory
//!
//! The hook-tool adapters that talk to the real framework live in
//! `charm-runtime`.

pub mod in_memory;

pub use in_memory::{InMemoryRelationStore, InMemoryStatus};
