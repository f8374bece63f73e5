use anyhow::Result;
use std::path::PathBuf;

use crate::core::config::ScanConfig;

/// The scan-preview result for a single content pattern.
///
/// This provides a clean way to pass per-pattern data from the
/// `ScanEngine` to the `StatusReporter`.
#[derive(Debug)]
pub struct PatternStatus {
    /// The glob string as it appears in the descriptor.
    pub pattern: String,
    /// The number of files in the project tree this pattern matches.
    pub matched_count: usize,
    /// A few of the matched paths, for verbose output.
    pub sample_files: Vec<PathBuf>,
}

pub trait StatusReporter {
    fn generate_status_report(
        &self,
        config: &ScanConfig,
        statuses: &[PatternStatus],
        unique_files: usize,
    ) -> Result<()>;
}

/// A concrete implementation of `StatusReporter` that prints the report
/// to the console. This is the primary reporter used by the `status`
/// command.
pub struct ConsoleReporter;

impl ConsoleReporter {
    /// Constructs a new `ConsoleReporter` instance.
    pub fn new() -> Self {
        Self
    }

    /// Formats the status line for a single pattern.
    ///
    /// # Arguments
    /// * `status`: A reference to the `PatternStatus` for this pattern.
    ///
    /// # Returns
    /// A `String` containing the formatted status report line.
    fn format_pattern_status(&self, status: &PatternStatus) -> String {
        // 🟢: pattern matches at least one file.
        // 🔴: dead pattern, matches nothing in the current tree.
        let status_icon = if status.matched_count > 0 {
            "🟢"
        } else {
            "🔴"
        };

        format!(
            "{} {} ({} files matched)",
            status_icon, status.pattern, status.matched_count
        )
    }
}

/// Implementation of the `StatusReporter` trait for `ConsoleReporter`.
impl StatusReporter for ConsoleReporter {
    /// Generates and prints the full scan preview to standard output.
    fn generate_status_report(
        &self,
        config: &ScanConfig,
        statuses: &[PatternStatus],
        unique_files: usize,
    ) -> Result<()> {
        println!("📊 Style Scan Status Report");
        println!("===========================");

        if statuses.is_empty() {
            println!("No content patterns configured.");
            return Ok(());
        }

        let mut dead_patterns = 0;

        for status in statuses {
            if status.matched_count == 0 {
                dead_patterns += 1;
            }

            println!("{}", self.format_pattern_status(status));

            if config.global_settings.verbose {
                for file in &status.sample_files {
                    println!("  └─ {}", file.display());
                }
            }
        }

        println!("\n📈 Summary:");
        println!("  Total patterns: {}", statuses.len());
        println!("  Files to scan: {unique_files}");
        println!("  Dead patterns: {dead_patterns}");

        if !config.plugins.is_empty() {
            println!("  Plugins: {}", config.plugins.len());
        }
        if !config.theme.extend.is_empty() {
            println!("  Theme categories extended: {}", config.theme.extend.len());
        }

        if dead_patterns > 0 {
            println!("\n⚠️  Dead patterns match no files; check them before the next build");
        }

        Ok(())
    }
}
