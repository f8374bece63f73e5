use crate::builders::patterns::{ContentPattern, PathMatcher};
use crate::builders::reporter::PatternStatus;
use crate::core::config::{CONFIG_FILE_NAME, ConfigManager, ConfigProvider, ScanConfig};
use anyhow::Result;
use ignore::WalkBuilder;
use std::collections::BTreeSet;
use std::path::PathBuf;

/// How many matched paths each pattern keeps for verbose output.
const SAMPLE_LIMIT: usize = 5;

/// Resolves the descriptor's content patterns against the real project
/// tree.
///
/// This is a preview of what the downstream style tool will scan: it
/// walks the tree once, matches every file against every pattern, and
/// reports per-pattern match counts plus the effective (deduplicated)
/// file set. A pattern with zero matches is the failure mode the
/// descriptor's non-empty invariant guards against, surfaced early.
pub struct ScanEngine {
    config_manager: ConfigManager,
}

impl ScanEngine {
    pub fn new(config_manager: ConfigManager) -> Self {
        Self { config_manager }
    }

    /// Walks the project tree and returns the per-pattern preview along
    /// with the number of unique files the patterns cover.
    pub fn pattern_statuses(&self) -> Result<(Vec<PatternStatus>, usize)> {
        let config = self.config_manager.load_config()?;
        let patterns = self.compile_patterns(&config)?;

        let mut counts = vec![0usize; patterns.len()];
        let mut samples: Vec<Vec<PathBuf>> = vec![Vec::new(); patterns.len()];
        let mut unique = BTreeSet::new();

        for relative in self.walk_files(&config) {
            for (i, pattern) in patterns.iter().enumerate() {
                if pattern.matches_path(&relative) {
                    counts[i] += 1;
                    if samples[i].len() < SAMPLE_LIMIT {
                        samples[i].push(relative.clone());
                    }
                    unique.insert(relative.clone());
                }
            }
        }

        let statuses = patterns
            .into_iter()
            .zip(counts)
            .zip(samples)
            .map(|((pattern, matched_count), sample_files)| PatternStatus {
                pattern: pattern.raw,
                matched_count,
                sample_files,
            })
            .collect();

        Ok((statuses, unique.len()))
    }

    /// Returns the effective file set: every file matched by at least one
    /// content pattern, deduplicated and sorted, relative to the project
    /// root.
    pub fn resolve_files(&self) -> Result<Vec<PathBuf>> {
        let config = self.config_manager.load_config()?;
        let patterns = self.compile_patterns(&config)?;

        let mut resolved = BTreeSet::new();
        for relative in self.walk_files(&config) {
            if patterns.iter().any(|p| p.matches_path(&relative)) {
                resolved.insert(relative);
            }
        }

        Ok(resolved.into_iter().collect())
    }

    fn compile_patterns(&self, config: &ScanConfig) -> Result<Vec<ContentPattern>> {
        config
            .content
            .iter()
            .map(|raw| ContentPattern::new(raw))
            .collect()
    }

    /// Walks the project tree and yields file paths relative to the
    /// project root. Hidden files and gitignored files are skipped
    /// according to `global_settings`; the descriptor itself is never a
    /// scan candidate.
    fn walk_files(&self, config: &ScanConfig) -> Vec<PathBuf> {
        let root = self.config_manager.get_project_root().to_path_buf();
        let respect_gitignore = config.global_settings.respect_gitignore;

        let walker = WalkBuilder::new(&root)
            .hidden(!config.global_settings.include_hidden)
            .git_ignore(respect_gitignore)
            .git_global(respect_gitignore)
            .git_exclude(respect_gitignore)
            .build();

        let mut files = Vec::new();
        for entry in walker.flatten() {
            let path = entry.path();

            if !path.is_file() {
                continue;
            }

            if let Ok(relative) = path.strip_prefix(&root) {
                if relative.as_os_str() == CONFIG_FILE_NAME {
                    continue;
                }
                files.push(relative.to_path_buf());
            }
        }

        files
    }
}
