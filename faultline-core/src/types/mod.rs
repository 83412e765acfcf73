//! Data structures shared across the Faultline crates.

pub mod collections;

pub use collections::{FxHashMap, FxHashSet};
