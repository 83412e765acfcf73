//! Stateless per-file extraction and the parallel fan-out over files.

use rayon::prelude::*;
use tracing::debug;

use faultline_core::cancel::{Cancellable, CancellationToken};
use faultline_core::config::ScanConfig;
use faultline_core::errors::ExtractError;

use super::rules::{Matcher, RuleSet};
use super::types::{RawMention, SourceFile};

const MAX_EVIDENCE_LEN: usize = 160;

/// Extract raw mentions from a single file.
///
/// Pure and order-independent: the result depends only on the arguments,
/// never on other files. This is what makes the extraction phase safely
/// parallelizable.
pub fn extract_file(
    service: &str,
    path: &str,
    content: &str,
    rules: &RuleSet,
) -> Vec<RawMention> {
    let mut mentions = Vec::new();

    for rule in rules.rules() {
        if let Matcher::Capture(regex) = &rule.matcher {
            for caps in regex.captures_iter(content) {
                let Some(hint) = caps.get(1) else { continue };
                mentions.push(RawMention {
                    service: service.to_string(),
                    category: rule.category,
                    target_hint: hint.as_str().to_string(),
                    evidence: evidence_line(content, hint.start()),
                    file: path.to_string(),
                    line: line_of(content, hint.start()),
                });
            }
        }
    }

    for (rule_idx, offset) in rules.keyword_hits(content) {
        let rule = &rules.rules()[rule_idx];
        let Matcher::Keyword(kw) = &rule.matcher else {
            continue;
        };
        mentions.push(RawMention {
            service: service.to_string(),
            category: rule.category,
            target_hint: kw.to_string(),
            evidence: evidence_line(content, offset),
            file: path.to_string(),
            line: line_of(content, offset),
        });
    }

    mentions
}

/// Extract mentions from all files, fanning out across a bounded worker
/// pool. The merged result preserves input file order, so the output is
/// deterministic regardless of worker scheduling.
///
/// Oversized files are skipped and contribute zero mentions. On
/// cancellation all partial output is discarded.
pub fn extract_all(
    files: &[SourceFile],
    rules: &RuleSet,
    scan: &ScanConfig,
    token: &CancellationToken,
) -> Result<Vec<RawMention>, ExtractError> {
    let run = || -> Vec<Vec<RawMention>> {
        files
            .par_iter()
            .map(|file| {
                // Checked between file tasks, not within one.
                if token.is_cancelled() {
                    return Vec::new();
                }
                if file.content.len() as u64 > scan.effective_max_file_size() {
                    debug!(
                        file = %file.path,
                        size = file.content.len(),
                        "skipping oversized file"
                    );
                    return Vec::new();
                }
                extract_file(&file.service, &file.path, &file.content, rules)
            })
            .collect()
    };

    let per_file = match scan.threads {
        Some(threads) => {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build()
                .map_err(|e| ExtractError::InvalidRule {
                    rule_id: "worker-pool".to_string(),
                    message: e.to_string(),
                })?;
            pool.install(run)
        }
        None => run(),
    };

    if token.is_cancelled() {
        return Err(ExtractError::Cancelled);
    }

    Ok(per_file.into_iter().flatten().collect())
}

/// 1-based line number of a byte offset.
fn line_of(content: &str, offset: usize) -> u32 {
    content[..offset].bytes().filter(|&b| b == b'\n').count() as u32 + 1
}

/// The trimmed source line containing `offset`, truncated for storage.
fn evidence_line(content: &str, offset: usize) -> String {
    let start = content[..offset].rfind('\n').map(|i| i + 1).unwrap_or(0);
    let end = content[offset..]
        .find('\n')
        .map(|i| offset + i)
        .unwrap_or(content.len());
    let line = content[start..end].trim();
    if line.len() > MAX_EVIDENCE_LEN {
        let mut cut = MAX_EVIDENCE_LEN;
        while !line.is_char_boundary(cut) {
            cut -= 1;
        }
        line[..cut].to_string()
    } else {
        line.to_string()
    }
}
