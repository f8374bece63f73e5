/// The Big IDEA:
/// Utility-class style tools strip every rule whose class name they never
/// saw in the sources, so the list of files they scan *is* the contract:
/// one missing glob and working styles silently disappear from the build.
/// style-scan owns that contract as a small descriptor file next to the
/// project, lets you edit and validate it, and previews exactly which
/// files each pattern reaches before the style tool ever runs.
use anyhow::Result;
use clap::{Parser, Subcommand};

use style_scan::core::version;
use style_scan::utils;

#[derive(Parser)]
#[command(name = "style-scan")]
#[command(about = "Manage the content-scan configuration for utility-class stylesheets")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a style-scan.toml scaffold in the current directory
    Init,
    /// Add a content glob pattern to the descriptor
    AddPattern {
        /// Glob pattern relative to the descriptor's directory
        pattern: String,
    },
    /// Remove a content pattern by index or exact string
    RemovePattern {
        /// Zero-based index or the exact pattern string
        selector: String,
    },
    /// List content patterns, theme overrides, and plugins
    List,
    /// Check the descriptor for structural issues
    Validate,
    /// Preview how many files each content pattern matches
    Status,
    /// Print the effective file set the style tool would scan
    Resolve,
    /// Set a theme override (theme.extend.CATEGORY.TOKEN = VALUE)
    ThemeSet {
        category: String,
        token: String,
        value: String,
    },
    /// Remove a theme override, or a whole category if no token is given
    ThemeUnset {
        category: String,
        token: Option<String>,
    },
    /// Register a downstream plugin by name
    PluginAdd {
        name: String,
        /// Plugin option in key=value form; repeatable
        #[arg(long = "option")]
        options: Vec<String>,
    },
    /// Remove a registered plugin
    PluginRemove { name: String },
    /// Import content patterns from an external file
    Import {
        file: String,
        /// Source format: "list" or "tailwind"
        #[arg(long, default_value = "list")]
        format: String,
    },
    /// Export the descriptor to another format
    Export {
        file: String,
        /// Target format: "toml", "json", or "yaml"
        #[arg(long, default_value = "toml")]
        format: String,
    },
    /// Show the local version and check for a newer release
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Init => utils::initialize_project(),
        Commands::AddPattern { pattern } => utils::add_pattern(pattern),
        Commands::RemovePattern { selector } => utils::remove_pattern(selector),
        Commands::List => utils::list_config(),
        Commands::Validate => utils::validate(),
        Commands::Status => utils::show_status(),
        Commands::Resolve => utils::resolve_files(),
        Commands::ThemeSet {
            category,
            token,
            value,
        } => utils::set_theme_token(category, token, value),
        Commands::ThemeUnset { category, token } => utils::unset_theme_token(category, token),
        Commands::PluginAdd { name, options } => utils::add_plugin(name, options),
        Commands::PluginRemove { name } => utils::remove_plugin(name),
        Commands::Import { file, format } => utils::import_patterns(file, format),
        Commands::Export { file, format } => utils::export_config(file, format),
        Commands::Version => {
            version::run();
            Ok(())
        }
    }
}
