//! Framework adapters for the hook executable
//!
//! - `HookToolRelationStore` - `RelationStore` over `relation-*` hook tools
//! - `HookToolStatus` - `StatusSink` over `status-set`

pub mod hook_tools;

pub use hook_tools::{HookToolRelationStore, HookToolStatus, HookTools};
