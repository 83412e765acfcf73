//! Extraction data types: source files, mention categories, raw mentions.

use serde::{Deserialize, Serialize};

/// One code file under a service's source root, already read into memory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceFile {
    /// Name of the service this file belongs to.
    pub service: String,
    /// Path of the file, relative to the service root where possible.
    pub path: String,
    /// Full file content.
    pub content: String,
}

/// Category of a raw dependency mention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MentionCategory {
    /// An HTTP-call-like string (URL or path literal at a call site).
    HttpCall,
    /// Usage of a database or cache client library.
    DatabaseUsage,
    /// A relative import pointing outside the current module.
    InternalImport,
}

impl MentionCategory {
    /// Stable name of the category.
    pub fn name(&self) -> &'static str {
        match self {
            Self::HttpCall => "httpCall",
            Self::DatabaseUsage => "databaseUsage",
            Self::InternalImport => "internalImport",
        }
    }
}

/// A raw, unresolved dependency mention emitted by the extraction engine.
///
/// The `target_hint` is whatever the matcher captured: a URL fragment,
/// a database keyword, or an import path string. No resolution has
/// happened yet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawMention {
    /// Source service the mention was found in.
    pub service: String,
    pub category: MentionCategory,
    /// Unresolved target: URL/path fragment, db keyword, or import path.
    pub target_hint: String,
    /// The source line the match came from, trimmed.
    pub evidence: String,
    /// File the mention was found in.
    pub file: String,
    /// 1-based line number of the match.
    pub line: u32,
}
