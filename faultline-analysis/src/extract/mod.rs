//! Per-file, stateless scanning for raw dependency mentions.
//!
//! Extraction is heuristic: regex and keyword matching over
//! raw source text, not parsing. Each file is processed independently,
//! which makes the phase embarrassingly parallel. Resolution of the
//! extracted hints is the normalizer's job.

pub mod extractor;
pub mod rules;
pub mod types;

pub use extractor::{extract_all, extract_file};
pub use rules::{Matcher, PatternRule, RuleSet};
pub use types::{MentionCategory, RawMention, SourceFile};
