//! Re-exports of performance-oriented collection types.

pub use rustc_hash::{FxHashMap, FxHashSet};
pub use smallvec::SmallVec;

/// SmallVec sized for per-file keyword hits (usually <8).
pub type SmallVec8<T> = SmallVec<[T; 8]>;

/// SmallVec sized for URL candidate segments (usually <4).
pub type SmallVec4<T> = SmallVec<[T; 4]>;
