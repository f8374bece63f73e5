use anyhow::{Context, Result};
use globset::{GlobBuilder, GlobMatcher};
use std::fmt;
use std::path::Path;

/// A single entry of the descriptor's `content` list, compiled for matching.
///
/// The descriptor itself stores content patterns as plain ordered strings;
/// this struct is the runtime form used by the validator and the scan
/// engine. It pairs the raw string with a compiled glob matcher so each
/// pattern is compiled once per command instead of once per file.
#[derive(Debug, Clone)]
pub struct ContentPattern {
    /// The glob string exactly as it appears in the descriptor.
    pub raw: String,
    /// The compiled matcher. `*` does not cross directory separators
    /// (`literal_separator`), `**` does, which is the dialect the
    /// downstream style tool uses.
    matcher: GlobMatcher,
}

/// The `PathMatcher` trait defines the core behavior for matching a pattern
/// against a candidate file path.
///
/// The scan engine treats all patterns uniformly through this trait when it
/// walks the project tree, abstracting away how each pattern was built.
pub trait PathMatcher {
    /// Checks whether a path, relative to the descriptor's directory,
    /// matches the pattern.
    fn matches_path(&self, path: &Path) -> bool;
}

/// Implements `fmt::Display` so patterns print as their raw glob string
/// in listings and reports.
impl fmt::Display for ContentPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}

impl ContentPattern {
    /// Compiles a new `ContentPattern` from a raw glob string.
    ///
    /// # Arguments
    /// * `raw`: The glob string from the descriptor's `content` list
    ///   (e.g., `templates/**/*.html`).
    ///
    /// # Returns
    /// `Result<Self>` with the compiled pattern, or an error if the string
    /// is empty or not valid glob syntax.
    pub fn new(raw: &str) -> Result<Self> {
        if raw.trim().is_empty() {
            anyhow::bail!("Content pattern cannot be empty");
        }

        let matcher = GlobBuilder::new(raw)
            .literal_separator(true)
            .build()
            .with_context(|| format!("Invalid glob pattern: {raw}"))?
            .compile_matcher();

        Ok(Self {
            raw: raw.to_string(),
            matcher,
        })
    }

    /// Validates a raw glob string without keeping the compiled form.
    ///
    /// The validator uses this to report syntax issues for every entry of
    /// the `content` list while leaving the descriptor untouched.
    pub fn check(raw: &str) -> Result<()> {
        Self::new(raw).map(|_| ())
    }

    /// Normalizes a pattern imported from a foreign config file.
    ///
    /// The original tailwind descriptor lives in a nested directory
    /// (`theme/static_src/`), so its patterns carry `../../` prefixes.
    /// Patterns in `style-scan.toml` are relative to the descriptor's own
    /// directory, so leading parent-directory segments are stripped on
    /// import.
    pub fn normalize(raw: &str) -> String {
        let mut rest = raw.trim();
        while let Some(stripped) = rest.strip_prefix("../") {
            rest = stripped;
        }
        rest.to_string()
    }
}

/// Implementation of the `PathMatcher` trait for `ContentPattern`.
impl PathMatcher for ContentPattern {
    fn matches_path(&self, path: &Path) -> bool {
        self.matcher.is_match(path)
    }
}
