//! File enumeration: shared ignore set and source walking.
//!
//! The ignore set is the single source of truth for excluded
//! directories; every traversal goes through it rather than carrying
//! its own membership list.

use std::path::Path;

use ignore::WalkBuilder;
use tracing::debug;

use faultline_core::config::ScanConfig;
use faultline_core::errors::ScanError;
use faultline_core::types::collections::FxHashSet;

use crate::extract::SourceFile;

/// Extensions treated as code for extraction purposes.
const CODE_EXTENSIONS: &[&str] = &[
    "ts", "tsx", "js", "jsx", "mjs", "cjs", "py", "go", "rs", "java", "kt", "cs",
    "rb", "php",
];

/// Directory names excluded from every traversal.
const DEFAULT_IGNORED_DIRS: &[&str] = &[
    "node_modules",
    ".git",
    "target",
    "dist",
    "build",
    "out",
    "vendor",
    "__pycache__",
    ".venv",
    "venv",
    "coverage",
    ".next",
    ".idea",
    ".vscode",
];

/// The reusable excluded-directory collaborator.
#[derive(Debug, Clone)]
pub struct IgnoreSet {
    dirs: FxHashSet<String>,
}

impl IgnoreSet {
    /// The standard build/dependency/VCS exclusions.
    pub fn standard() -> Self {
        Self {
            dirs: DEFAULT_IGNORED_DIRS.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// The standard set extended with project-specific directory names.
    pub fn with_extra(extra: &[String]) -> Self {
        let mut set = Self::standard();
        set.dirs.extend(extra.iter().cloned());
        set
    }

    /// Whether a directory name is excluded.
    pub fn is_ignored(&self, dir_name: &str) -> bool {
        self.dirs.contains(dir_name)
    }
}

impl Default for IgnoreSet {
    fn default() -> Self {
        Self::standard()
    }
}

/// Enumerate code files under a service root, reading each into memory.
///
/// Unreadable, binary, and oversized files are skipped with a debug log.
/// Results are sorted by path so enumeration order is deterministic
/// regardless of filesystem ordering.
pub fn enumerate_sources(
    service: &str,
    root: &Path,
    ignore_set: &IgnoreSet,
    scan: &ScanConfig,
) -> Result<Vec<SourceFile>, ScanError> {
    if !root.exists() {
        return Err(ScanError::MissingRoot {
            path: root.to_path_buf(),
        });
    }

    let ignore_for_filter = ignore_set.clone();
    let walker = WalkBuilder::new(root)
        .standard_filters(false)
        .hidden(false)
        .filter_entry(move |entry| {
            let is_dir = entry.file_type().is_some_and(|ft| ft.is_dir());
            if !is_dir {
                return true;
            }
            let name = entry.file_name().to_string_lossy();
            !ignore_for_filter.is_ignored(&name)
        })
        .build();

    let mut files = Vec::new();
    for entry in walker {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                debug!(error = %e, "skipping unreadable walk entry");
                continue;
            }
        };
        if !entry.file_type().is_some_and(|ft| ft.is_file()) {
            continue;
        }
        let path = entry.path();
        let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
            continue;
        };
        if !CODE_EXTENSIONS.contains(&ext) {
            continue;
        }

        if let Some(content) = read_text_file(path, scan) {
            let rel = path
                .strip_prefix(root)
                .unwrap_or(path)
                .to_string_lossy()
                .replace('\\', "/");
            files.push(SourceFile {
                service: service.to_string(),
                path: rel,
                content,
            });
        }
    }

    files.sort_by(|a, b| a.path.cmp(&b.path));
    Ok(files)
}

/// Read a file as text, or `None` if it is oversized, binary, or
/// unreadable. Skipped files are never fatal.
fn read_text_file(path: &Path, scan: &ScanConfig) -> Option<String> {
    let metadata = match std::fs::metadata(path) {
        Ok(m) => m,
        Err(e) => {
            debug!(path = %path.display(), error = %e, "skipping unreadable file");
            return None;
        }
    };
    if metadata.len() > scan.effective_max_file_size() {
        debug!(
            path = %path.display(),
            size = metadata.len(),
            "skipping oversized file"
        );
        return None;
    }

    let bytes = match std::fs::read(path) {
        Ok(b) => b,
        Err(e) => {
            debug!(path = %path.display(), error = %e, "skipping unreadable file");
            return None;
        }
    };

    let sniff = scan.effective_binary_sniff_bytes().min(bytes.len());
    if bytes[..sniff].contains(&0) {
        debug!(path = %path.display(), "skipping binary file");
        return None;
    }

    match String::from_utf8(bytes) {
        Ok(s) => Some(s),
        Err(_) => {
            debug!(path = %path.display(), "skipping non-utf8 file");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ignore_set_covers_standard_directories() {
        let set = IgnoreSet::standard();
        assert!(set.is_ignored("node_modules"));
        assert!(set.is_ignored(".git"));
        assert!(!set.is_ignored("src"));
    }

    #[test]
    fn extra_directories_extend_the_standard_set() {
        let set = IgnoreSet::with_extra(&["generated".to_string()]);
        assert!(set.is_ignored("generated"));
        assert!(set.is_ignored("node_modules"));
    }

    #[test]
    fn enumerates_code_files_and_skips_ignored_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        std::fs::create_dir_all(root.join("src")).unwrap();
        std::fs::create_dir_all(root.join("node_modules/dep")).unwrap();
        std::fs::write(root.join("src/app.ts"), "fetch('http://x/api')").unwrap();
        std::fs::write(root.join("src/notes.md"), "# notes").unwrap();
        std::fs::write(root.join("node_modules/dep/index.js"), "redis").unwrap();

        let files = enumerate_sources(
            "web",
            root,
            &IgnoreSet::standard(),
            &ScanConfig::default(),
        )
        .unwrap();
        let paths: Vec<&str> = files.iter().map(|f| f.path.as_str()).collect();
        assert_eq!(paths, vec!["src/app.ts"]);
        assert_eq!(files[0].service, "web");
    }

    #[test]
    fn skips_binary_and_oversized_files() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        std::fs::write(root.join("bin.js"), b"\x00\x01\x02binary").unwrap();
        std::fs::write(root.join("big.js"), "x".repeat(64)).unwrap();
        std::fs::write(root.join("ok.js"), "redis").unwrap();

        let scan = ScanConfig {
            max_file_size: Some(32),
            ..Default::default()
        };
        let files =
            enumerate_sources("web", root, &IgnoreSet::standard(), &scan).unwrap();
        let paths: Vec<&str> = files.iter().map(|f| f.path.as_str()).collect();
        assert_eq!(paths, vec!["ok.js"]);
    }

    #[test]
    fn missing_root_is_an_error() {
        let err = enumerate_sources(
            "web",
            Path::new("/nonexistent/faultline-test-root"),
            &IgnoreSet::standard(),
            &ScanConfig::default(),
        )
        .unwrap_err();
        assert!(matches!(err, ScanError::MissingRoot { .. }));
    }
}
