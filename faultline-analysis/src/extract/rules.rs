//! Immutable pattern-rule tables driving extraction.
//!
//! Each rule is a `(category, matcher)` pair with a stable id. Rules are
//! compiled once into a `RuleSet` and passed by reference into the
//! stateless per-file extractor; there are no global pattern tables.
//! New ecosystems are added by extending `builtin_rules`, never by
//! touching extraction logic.

use aho_corasick::{AhoCorasick, AhoCorasickBuilder, MatchKind};
use regex::Regex;

use faultline_core::errors::ExtractError;
use faultline_core::types::collections::SmallVec8;

use super::types::MentionCategory;

/// How a rule matches file content.
#[derive(Debug)]
pub enum Matcher {
    /// Regex whose first capture group is the target hint.
    Capture(Regex),
    /// Literal keyword (matched case-insensitively at word boundaries);
    /// the keyword itself is the target hint.
    Keyword(&'static str),
}

/// A single extraction rule.
#[derive(Debug)]
pub struct PatternRule {
    /// Stable rule id, e.g. `"http-js-fetch"`.
    pub id: &'static str,
    pub category: MentionCategory,
    pub matcher: Matcher,
}

/// A compiled, immutable set of extraction rules.
///
/// Keyword rules are folded into a single Aho-Corasick automaton so a
/// file is scanned once for all database keywords regardless of how
/// many are registered.
pub struct RuleSet {
    rules: Vec<PatternRule>,
    /// Maps automaton pattern index → index into `rules`.
    keyword_rule_index: Vec<usize>,
    keyword_automaton: AhoCorasick,
}

impl RuleSet {
    /// Compile a rule set from explicit rules.
    pub fn new(rules: Vec<PatternRule>) -> Result<Self, ExtractError> {
        let mut keywords = Vec::new();
        let mut keyword_rule_index = Vec::new();
        for (idx, rule) in rules.iter().enumerate() {
            if let Matcher::Keyword(kw) = rule.matcher {
                keywords.push(kw);
                keyword_rule_index.push(idx);
            }
        }

        // Leftmost-longest so "postgresql" beats its "postgres" prefix
        // and "ioredis" beats the embedded "redis".
        let keyword_automaton = AhoCorasickBuilder::new()
            .ascii_case_insensitive(true)
            .match_kind(MatchKind::LeftmostLongest)
            .build(&keywords)
            .map_err(|e| ExtractError::InvalidRule {
                rule_id: "keyword-automaton".to_string(),
                message: e.to_string(),
            })?;

        Ok(Self {
            rules,
            keyword_rule_index,
            keyword_automaton,
        })
    }

    /// The built-in rule table covering the supported ecosystems.
    pub fn builtin() -> Result<Self, ExtractError> {
        Self::new(builtin_rules()?)
    }

    /// All rules, in declaration order.
    pub fn rules(&self) -> &[PatternRule] {
        &self.rules
    }

    /// Number of rules in the set.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the rule set is empty.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Single-pass keyword scan. Returns `(rule_index, byte_offset)` for
    /// the first boundary-respecting hit of each keyword rule, ordered
    /// by offset.
    pub(crate) fn keyword_hits(&self, content: &str) -> SmallVec8<(usize, usize)> {
        let mut seen = vec![false; self.rules.len()];
        let mut hits = SmallVec8::new();
        for mat in self.keyword_automaton.find_iter(content) {
            let rule_idx = self.keyword_rule_index[mat.pattern().as_usize()];
            if seen[rule_idx] {
                continue;
            }
            if !at_word_boundary(content, mat.start(), mat.end()) {
                continue;
            }
            seen[rule_idx] = true;
            hits.push((rule_idx, mat.start()));
        }
        hits
    }
}

/// Rejects keyword hits embedded in a larger identifier, e.g. `redis`
/// inside `ioredis` (which has its own rule).
fn at_word_boundary(content: &str, start: usize, end: usize) -> bool {
    let before = content[..start].chars().next_back();
    let after = content[end..].chars().next();
    let is_word = |c: char| c.is_alphanumeric() || c == '_';
    !before.is_some_and(is_word) && !after.is_some_and(is_word)
}

fn capture(
    id: &'static str,
    category: MentionCategory,
    pattern: &str,
) -> Result<PatternRule, ExtractError> {
    let regex = Regex::new(pattern).map_err(|e| ExtractError::InvalidRule {
        rule_id: id.to_string(),
        message: e.to_string(),
    })?;
    Ok(PatternRule {
        id,
        category,
        matcher: Matcher::Capture(regex),
    })
}

fn keyword(id: &'static str, kw: &'static str) -> PatternRule {
    PatternRule {
        id,
        category: MentionCategory::DatabaseUsage,
        matcher: Matcher::Keyword(kw),
    }
}

/// The built-in rule table.
fn builtin_rules() -> Result<Vec<PatternRule>, ExtractError> {
    use MentionCategory::{HttpCall, InternalImport};

    let mut rules = Vec::with_capacity(32);

    // ── HTTP calls ──
    rules.push(capture(
        "http-js-fetch",
        HttpCall,
        r#"fetch\(\s*[`'"]([^`'"\s]+)[`'"]"#,
    )?);
    rules.push(capture(
        "http-js-axios",
        HttpCall,
        r#"axios\.(?:get|post|put|patch|delete|head|options|request)\(\s*[`'"]([^`'"\s]+)[`'"]"#,
    )?);
    rules.push(capture(
        "http-py-requests",
        HttpCall,
        r#"(?:requests|httpx)\.(?:get|post|put|patch|delete|head|options)\(\s*['"]([^'"\s]+)['"]"#,
    )?);
    rules.push(capture(
        "http-go-client",
        HttpCall,
        r#"http\.(?:Get|Post|Head|PostForm)\(\s*"([^"\s]+)""#,
    )?);
    rules.push(capture(
        "http-java-client",
        HttpCall,
        r#"(?:restTemplate|webClient)\.(?:getForObject|getForEntity|postForObject|postForEntity|exchange)\(\s*"([^"\s]+)""#,
    )?);
    rules.push(capture(
        "http-url-literal",
        HttpCall,
        r#"["'](https?://[^"'\s]+)["']"#,
    )?);

    // ── Database / cache client usage ──
    rules.push(keyword("db-postgresql", "postgresql"));
    rules.push(keyword("db-postgres", "postgres"));
    rules.push(keyword("db-pg", "pg"));
    rules.push(keyword("db-psycopg2", "psycopg2"));
    rules.push(keyword("db-pgx", "pgx"));
    rules.push(keyword("db-mongodb", "mongodb"));
    rules.push(keyword("db-mongoose", "mongoose"));
    rules.push(keyword("db-redis", "redis"));
    rules.push(keyword("db-ioredis", "ioredis"));
    rules.push(keyword("db-jedis", "jedis"));
    rules.push(keyword("db-mysql", "mysql"));
    rules.push(keyword("db-mysql2", "mysql2"));
    rules.push(keyword("db-mariadb", "mariadb"));

    // ── Relative imports (JS/TS) ──
    rules.push(capture(
        "import-js-from",
        InternalImport,
        r#"import\s+(?:[\w$*{},\s]+\s+from\s+)?['"](\.\.?/[^'"]+)['"]"#,
    )?);
    rules.push(capture(
        "import-js-require",
        InternalImport,
        r#"require\(\s*['"](\.\.?/[^'"]+)['"]\s*\)"#,
    )?);
    rules.push(capture(
        "import-js-dynamic",
        InternalImport,
        r#"import\(\s*['"](\.\.?/[^'"]+)['"]\s*\)"#,
    )?);

    // ── Relative imports (Python) ──
    rules.push(capture(
        "import-py-relative",
        InternalImport,
        r"from\s+(\.+[A-Za-z_][\w.]*)\s+import",
    )?);

    Ok(rules)
}
