use crate::builders::importer::{FileImporter, PatternImporter};
use crate::builders::patterns::ContentPattern;
use crate::builders::validator::{ConfigValidator, StandardValidator};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// File name of the descriptor, looked up from the current directory upward.
pub const CONFIG_FILE_NAME: &str = "style-scan.toml";

/// Descriptor schema version written by this tool.
pub const CONFIG_VERSION: &str = "1.0";

/// Content scaffold written by `init`: the template directories first,
/// then script files that may also carry class names.
pub const DEFAULT_CONTENT: &[&str] = &[
    "templates/**/*.html",
    "**/templates/**/*.html",
    "**/*.js",
    "**/*.jsx",
    "**/*.ts",
    "**/*.tsx",
];

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct GlobalSettings {
    pub respect_gitignore: bool,
    pub include_hidden: bool,
    pub verbose: bool,
}

/// Theme overrides layered on top of the style tool's built-in design
/// tokens. The on-disk shape is `theme.extend.<category>.<token> = value`,
/// mirroring the external contract consumers expect.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct ThemeConfig {
    #[serde(default)]
    pub extend: BTreeMap<String, BTreeMap<String, String>>,
}

/// A reference to a downstream style-tool plugin, by name, with optional
/// string options passed through verbatim.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct PluginRef {
    pub name: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub options: BTreeMap<String, String>,
}

/// The scan configuration descriptor.
///
/// `content` holds plain glob strings in the order the user wrote them.
/// Order is irrelevant to matching (set semantics in practice) but is
/// preserved for readability, so no sorting or deduplication happens on
/// write. Duplicates are a validator warning, not an error.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ScanConfig {
    pub version: String,
    pub content: Vec<String>,
    #[serde(default)]
    pub plugins: Vec<PluginRef>,
    #[serde(default)]
    pub theme: ThemeConfig,
    pub global_settings: GlobalSettings,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION.to_string(),
            content: DEFAULT_CONTENT.iter().map(|s| s.to_string()).collect(),
            plugins: Vec::new(),
            theme: ThemeConfig::default(),
            global_settings: GlobalSettings {
                respect_gitignore: true,
                include_hidden: false,
                verbose: false,
            },
        }
    }
}

pub struct ConfigManager {
    config_path: PathBuf,
    project_root: PathBuf,
}

impl ConfigManager {
    /// Creates a manager rooted at the nearest directory containing a
    /// descriptor, or at the current directory if none exists yet (the
    /// `init` case).
    pub fn new() -> Result<Self> {
        let cwd = std::env::current_dir()?;
        let project_root = find_project_root(&cwd).unwrap_or(cwd);
        Ok(Self::new_at(project_root))
    }

    /// Creates a manager rooted at an explicit directory. Used by tests
    /// and by callers that already know the project root.
    pub fn new_at(project_root: PathBuf) -> Self {
        let config_path = project_root.join(CONFIG_FILE_NAME);
        Self {
            config_path,
            project_root,
        }
    }

    pub fn initialize(&self) -> Result<()> {
        if self.config_path.exists() {
            return Ok(());
        }

        let default_config = ScanConfig::default();
        self.save_config(&default_config)?;
        Ok(())
    }

    pub fn validate_config(&self) -> Result<()> {
        let config = self.load_config()?;
        let validator = StandardValidator::new();
        let issues = validator.validate_config(&config)?;

        if issues.is_empty() {
            println!("✓ Configuration is valid.");
            Ok(())
        } else {
            println!("⚠️  Found issues in configuration:");
            for issue in issues {
                println!("  - {issue}");
            }
            anyhow::bail!("Configuration validation failed.");
        }
    }

    /// Appends a content pattern after checking its glob syntax.
    /// Duplicates are appended as written; the validator reports them.
    pub fn add_pattern(&mut self, pattern: String) -> Result<()> {
        ContentPattern::check(&pattern)?;

        let mut config = self.load_config()?;
        if config.content.contains(&pattern) {
            println!("⚠️  Pattern already present: {pattern}");
        }
        config.content.push(pattern);

        self.save_config(&config)?;
        Ok(())
    }

    /// Removes a content pattern by zero-based index or by exact string.
    ///
    /// Emptying the list is allowed but warned about: a descriptor with
    /// no content patterns makes the downstream tool strip every style.
    pub fn remove_pattern(&mut self, selector: &str) -> Result<()> {
        let mut config = self.load_config()?;

        let before = config.content.len();
        if let Ok(index) = selector.parse::<usize>() {
            if index >= config.content.len() {
                anyhow::bail!(
                    "Index {} out of range ({} patterns configured)",
                    index,
                    config.content.len()
                );
            }
            config.content.remove(index);
        } else {
            config.content.retain(|p| p != selector);
        }

        if config.content.len() == before {
            anyhow::bail!("No pattern matches '{}'", selector);
        }

        if config.content.is_empty() {
            println!("⚠️  Content list is now empty; the downstream tool will find no class usages.");
        }

        self.save_config(&config)?;
        Ok(())
    }

    pub fn set_theme_token(&mut self, category: &str, token: &str, value: &str) -> Result<()> {
        if category.trim().is_empty() || token.trim().is_empty() {
            anyhow::bail!("Theme category and token cannot be empty");
        }

        let mut config = self.load_config()?;
        config
            .theme
            .extend
            .entry(category.to_string())
            .or_default()
            .insert(token.to_string(), value.to_string());

        self.save_config(&config)?;
        Ok(())
    }

    /// Removes a single theme override, or a whole category when no token
    /// is given. Empty categories are dropped rather than left behind.
    pub fn unset_theme_token(&mut self, category: &str, token: Option<&str>) -> Result<()> {
        let mut config = self.load_config()?;

        match token {
            Some(token) => {
                let removed = config
                    .theme
                    .extend
                    .get_mut(category)
                    .and_then(|tokens| tokens.remove(token))
                    .is_some();
                if !removed {
                    anyhow::bail!("No theme override for {}.{}", category, token);
                }
                if config
                    .theme
                    .extend
                    .get(category)
                    .is_some_and(|tokens| tokens.is_empty())
                {
                    config.theme.extend.remove(category);
                }
            }
            None => {
                if config.theme.extend.remove(category).is_none() {
                    anyhow::bail!("No theme category '{}'", category);
                }
            }
        }

        self.save_config(&config)?;
        Ok(())
    }

    pub fn add_plugin(&mut self, name: &str, options: BTreeMap<String, String>) -> Result<()> {
        if name.trim().is_empty() {
            anyhow::bail!("Plugin name cannot be empty");
        }

        let mut config = self.load_config()?;
        if config.plugins.iter().any(|p| p.name == name) {
            anyhow::bail!("Plugin '{}' is already configured", name);
        }
        config.plugins.push(PluginRef {
            name: name.to_string(),
            options,
        });

        self.save_config(&config)?;
        Ok(())
    }

    pub fn remove_plugin(&mut self, name: &str) -> Result<()> {
        let mut config = self.load_config()?;

        let before = config.plugins.len();
        config.plugins.retain(|p| p.name != name);
        if config.plugins.len() == before {
            anyhow::bail!("No plugin named '{}'", name);
        }

        self.save_config(&config)?;
        Ok(())
    }

    /// Merges patterns imported from an external file into the descriptor.
    /// Exact duplicates are skipped. Returns (added, skipped).
    pub fn import_patterns(&mut self, file_path: &str, format: &str) -> Result<(usize, usize)> {
        let mut importer = FileImporter::new();
        let patterns = importer.import_from_file(file_path, format)?;

        let mut config = self.load_config()?;
        let mut added = 0;
        let mut skipped = 0;
        for pattern in patterns {
            if config.content.contains(&pattern) {
                skipped += 1;
            } else {
                config.content.push(pattern);
                added += 1;
            }
        }

        self.save_config(&config)?;
        Ok((added, skipped))
    }

    pub fn export_config(&self, file_path: &str, format: &str) -> Result<()> {
        let config = self.load_config()?;

        let content = match format {
            "json" => {
                serde_json::to_string_pretty(&config).context("Failed to serialize to JSON")?
            }
            "yaml" => serde_yaml::to_string(&config).context("Failed to serialize to YAML")?,
            "toml" | _ => toml::to_string_pretty(&config).context("Failed to serialize to TOML")?,
        };

        fs::write(file_path, content).context("Failed to write export file")?;

        Ok(())
    }

    pub fn get_project_root(&self) -> &Path {
        &self.project_root
    }
}

pub trait ConfigProvider {
    fn load_config(&self) -> Result<ScanConfig>;
    fn save_config(&self, config: &ScanConfig) -> Result<()>;
    fn get_config_path(&self) -> Result<PathBuf>;
}

impl ConfigProvider for ConfigManager {
    fn load_config(&self) -> Result<ScanConfig> {
        if !self.config_path.exists() {
            return Ok(ScanConfig::default());
        }

        let content =
            fs::read_to_string(&self.config_path).context("Failed to read config file")?;

        toml::from_str(&content).context("Failed to parse config file")
    }

    fn save_config(&self, config: &ScanConfig) -> Result<()> {
        let content = toml::to_string_pretty(config).context("Failed to serialize config")?;

        fs::write(&self.config_path, content).context("Failed to write config file")?;

        Ok(())
    }

    fn get_config_path(&self) -> Result<PathBuf> {
        Ok(self.config_path.clone())
    }
}

fn find_project_root(start: &Path) -> Option<PathBuf> {
    let mut dir = start;

    loop {
        if dir.join(CONFIG_FILE_NAME).exists() {
            return Some(dir.to_path_buf());
        }

        match dir.parent() {
            Some(parent) => dir = parent,
            None => return None,
        }
    }
}
