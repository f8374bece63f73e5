use anyhow::{Context, Result};
use regex::Regex;
use std::fs;

use crate::builders::patterns::ContentPattern;

/// A trait that defines the behavior for importing content patterns from
/// an external source.
///
/// This trait allows different importer implementations (e.g., from files,
/// from a network source) to be used interchangeably.
pub trait PatternImporter {
    /// Imports patterns from a file and returns them in descriptor order.
    ///
    /// # Arguments
    /// * `file_path`: The path to the file to be imported.
    /// * `import_type`: The format to parse (e.g., "tailwind", "list").
    ///
    /// # Returns
    /// A `Result<Vec<String>>` of normalized glob strings ready to be
    /// merged into the descriptor's `content` list.
    fn import_from_file(&mut self, file_path: &str, import_type: &str) -> Result<Vec<String>>;
}

/// A concrete implementation of `PatternImporter` for file-based imports.
///
/// Two formats are supported: a plain list file (one glob per line) and a
/// `tailwind.config.js` file, from which the `content:` array is
/// extracted.
pub struct FileImporter;

impl PatternImporter for FileImporter {
    fn import_from_file(&mut self, file_path: &str, import_type: &str) -> Result<Vec<String>> {
        let content = fs::read_to_string(file_path).context("Failed to read import file")?;

        let patterns = match import_type {
            "tailwind" => self.parse_tailwind_config(&content)?,
            "list" | _ => self.parse_list(&content)?,
        };

        if patterns.is_empty() {
            anyhow::bail!("No content patterns found in {}", file_path);
        }

        Ok(patterns)
    }
}

impl FileImporter {
    /// Constructs a new `FileImporter` instance.
    pub fn new() -> Self {
        Self
    }

    /// Parses a plain list file: one glob per line, `#` comments and
    /// blank lines skipped. Each pattern is syntax-checked and has
    /// leading `../` segments stripped.
    fn parse_list(&self, content: &str) -> Result<Vec<String>> {
        let mut patterns = Vec::new();

        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let pattern = ContentPattern::normalize(line);
            ContentPattern::check(&pattern)?;
            patterns.push(pattern);
        }

        Ok(patterns)
    }

    /// Extracts the `content:` array from a `tailwind.config.js` file.
    ///
    /// This is a textual extraction, not a JS evaluation: line comments
    /// are stripped, the bracketed array following the `content` key is
    /// located, and every single- or double-quoted string inside it is
    /// taken as a pattern. Patterns are normalized relative to the
    /// descriptor's directory, so `../../templates/**/*.html` in a nested
    /// tailwind config becomes `templates/**/*.html`.
    fn parse_tailwind_config(&self, content: &str) -> Result<Vec<String>> {
        // Strip // comments so commented-out patterns are not imported.
        let stripped: String = content
            .lines()
            .map(|line| match line.find("//") {
                Some(idx) => &line[..idx],
                None => line,
            })
            .collect::<Vec<_>>()
            .join("\n");

        let array_re = Regex::new(r"content\s*:\s*\[([^\]]*)\]")
            .context("Failed to build content-array regex")?;
        let array_body = array_re
            .captures(&stripped)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
            .context("No 'content: [...]' array found in tailwind config")?;

        let string_re =
            Regex::new(r#"'([^']+)'|"([^"]+)""#).context("Failed to build string regex")?;

        let mut patterns = Vec::new();
        for caps in string_re.captures_iter(array_body) {
            let raw = caps
                .get(1)
                .or_else(|| caps.get(2))
                .map(|m| m.as_str())
                .unwrap_or_default();

            let pattern = ContentPattern::normalize(raw);
            ContentPattern::check(&pattern)?;
            patterns.push(pattern);
        }

        Ok(patterns)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TAILWIND_CONFIG: &str = r#"
module.exports = {
  content: [
    // main templates directory
    '../../templates/**/*.html',

    // templates inside each app
    '../../**/templates/**/*.html',

    // if you use Tailwind classes in JS/TS files
    '../../**/*.js',
    '../../**/*.jsx',
    '../../**/*.ts',
    '../../**/*.tsx',
  ],
  theme: {
    extend: {},
  },
  plugins: [],
}
"#;

    #[test]
    fn test_tailwind_content_extraction() {
        let importer = FileImporter::new();
        let patterns = importer.parse_tailwind_config(TAILWIND_CONFIG).unwrap();

        assert_eq!(
            patterns,
            vec![
                "templates/**/*.html",
                "**/templates/**/*.html",
                "**/*.js",
                "**/*.jsx",
                "**/*.ts",
                "**/*.tsx",
            ]
        );
    }

    #[test]
    fn test_tailwind_commented_pattern_skipped() {
        let importer = FileImporter::new();
        let config = "content: [\n  '**/*.html',\n  // '**/*.vue',\n]";
        let patterns = importer.parse_tailwind_config(config).unwrap();
        assert_eq!(patterns, vec!["**/*.html"]);
    }

    #[test]
    fn test_tailwind_missing_content_array() {
        let importer = FileImporter::new();
        assert!(importer.parse_tailwind_config("module.exports = {}").is_err());
    }

    #[test]
    fn test_list_format_skips_comments_and_blanks() {
        let importer = FileImporter::new();
        let patterns = importer
            .parse_list("# templates\ntemplates/**/*.html\n\n**/*.js\n")
            .unwrap();
        assert_eq!(patterns, vec!["templates/**/*.html", "**/*.js"]);
    }
}
