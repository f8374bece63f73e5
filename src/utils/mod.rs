use crate::builders::reporter::{ConsoleReporter, StatusReporter};
use crate::core::config::{ConfigManager, ConfigProvider};
use crate::core::engine::ScanEngine;
use anyhow::Result;
use std::collections::BTreeMap;

pub fn initialize_project() -> Result<()> {
    let config_manager = ConfigManager::new()?;
    config_manager.initialize()?;
    println!("✓ Initialized style-scan descriptor");
    println!("Run 'style-scan status' to preview which files the content patterns match");
    Ok(())
}

pub fn add_pattern(pattern: String) -> Result<()> {
    let mut config_manager = get_config_manager()?;
    config_manager.add_pattern(pattern.clone())?;
    println!("✓ Added content pattern: {pattern}");
    Ok(())
}

pub fn remove_pattern(selector: String) -> Result<()> {
    let mut config_manager = get_config_manager()?;
    config_manager.remove_pattern(&selector)?;
    println!("✓ Removed content pattern: {selector}");
    Ok(())
}

pub fn list_config() -> Result<()> {
    let config_manager = get_config_manager()?;
    let config = config_manager.load_config()?;

    println!("📄 Content patterns:");
    if config.content.is_empty() {
        println!("  (none)");
    }
    for (index, pattern) in config.content.iter().enumerate() {
        println!("  [{index}] {pattern}");
    }

    println!("\n🎨 Theme extensions:");
    if config.theme.extend.is_empty() {
        println!("  (none)");
    }
    for (category, tokens) in &config.theme.extend {
        for (token, value) in tokens {
            println!("  {category}.{token} = {value}");
        }
    }

    println!("\n🔌 Plugins:");
    if config.plugins.is_empty() {
        println!("  (none)");
    }
    for plugin in &config.plugins {
        if plugin.options.is_empty() {
            println!("  {}", plugin.name);
        } else {
            let options: Vec<String> = plugin
                .options
                .iter()
                .map(|(k, v)| format!("{k}={v}"))
                .collect();
            println!("  {} ({})", plugin.name, options.join(", "));
        }
    }

    Ok(())
}

pub fn validate() -> Result<()> {
    let config_manager = get_config_manager()?;
    config_manager.validate_config()
}

pub fn set_theme_token(category: String, token: String, value: String) -> Result<()> {
    let mut config_manager = get_config_manager()?;
    config_manager.set_theme_token(&category, &token, &value)?;
    println!("✓ Set theme override {category}.{token} = {value}");
    Ok(())
}

pub fn unset_theme_token(category: String, token: Option<String>) -> Result<()> {
    let mut config_manager = get_config_manager()?;
    config_manager.unset_theme_token(&category, token.as_deref())?;
    match token {
        Some(token) => println!("✓ Removed theme override {category}.{token}"),
        None => println!("✓ Removed theme category {category}"),
    }
    Ok(())
}

pub fn add_plugin(name: String, options: Vec<String>) -> Result<()> {
    let mut parsed = BTreeMap::new();
    for option in options {
        match option.split_once('=') {
            Some((key, value)) => {
                parsed.insert(key.to_string(), value.to_string());
            }
            None => anyhow::bail!("Plugin option must be in 'key=value' form: {option}"),
        }
    }

    let mut config_manager = get_config_manager()?;
    config_manager.add_plugin(&name, parsed)?;
    println!("✓ Added plugin: {name}");
    Ok(())
}

pub fn remove_plugin(name: String) -> Result<()> {
    let mut config_manager = get_config_manager()?;
    config_manager.remove_plugin(&name)?;
    println!("✓ Removed plugin: {name}");
    Ok(())
}

pub fn show_status() -> Result<()> {
    let config_manager = get_config_manager()?;
    let config = config_manager.load_config()?;

    let engine = ScanEngine::new(config_manager);
    let (statuses, unique_files) = engine.pattern_statuses()?;

    let reporter = ConsoleReporter::new();
    reporter.generate_status_report(&config, &statuses, unique_files)
}

pub fn resolve_files() -> Result<()> {
    let config_manager = get_config_manager()?;
    let engine = ScanEngine::new(config_manager);

    let files = engine.resolve_files()?;
    if files.is_empty() {
        println!("No files matched; the downstream tool would emit an empty stylesheet.");
        return Ok(());
    }

    for file in files {
        println!("{}", file.display());
    }
    Ok(())
}

pub fn import_patterns(file: String, format: String) -> Result<()> {
    let mut config_manager = get_config_manager()?;
    let (added, skipped) = config_manager.import_patterns(&file, &format)?;
    println!("✓ Imported {added} pattern(s) from {file} ({skipped} duplicate(s) skipped)");
    Ok(())
}

pub fn export_config(file: String, format: String) -> Result<()> {
    let config_manager = get_config_manager()?;
    config_manager.export_config(&file, &format)?;
    println!("✓ Exported configuration to {file} ({format})");
    Ok(())
}

// Helper function to create a ConfigManager instance
fn get_config_manager() -> Result<ConfigManager> {
    ConfigManager::new()
}
