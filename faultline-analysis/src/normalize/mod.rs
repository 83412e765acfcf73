//! Resolves raw mentions to canonical edges and deduplicates them.

pub mod canonical;
pub mod resolver;

pub use canonical::{canonical_db_node, engine_label, resolve_db_keyword};
pub use resolver::normalize_mentions;
