use std::fs;
use std::path::{Path, PathBuf};
use style_scan::core::config::{ConfigManager, ConfigProvider, ScanConfig};
use style_scan::core::engine::ScanEngine;
use tempfile::TempDir;

/// Lays out a small project tree resembling the web app the descriptor
/// scaffold is written for: a root templates directory, per-app template
/// directories, and scripts.
fn setup_project() -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path().to_path_buf();

    for sub in [
        "templates",
        "app/templates/app",
        "static/js",
    ] {
        fs::create_dir_all(root.join(sub)).unwrap();
    }
    fs::write(root.join("templates/base.html"), "<div class=\"p-4\"></div>").unwrap();
    fs::write(
        root.join("app/templates/app/index.html"),
        "<span class=\"text-sm\"></span>",
    )
    .unwrap();
    fs::write(root.join("static/js/app.js"), "el.className = 'mt-2';").unwrap();
    fs::write(root.join("static/js/app.ts"), "const cls = 'mb-2';").unwrap();
    fs::write(root.join("README.md"), "# demo").unwrap();

    (dir, root)
}

#[test]
fn test_core_workflow() {
    let (_td, root) = setup_project();

    // 1. Setup the descriptor with the default scaffold
    let config_manager = ConfigManager::new_at(root.clone());
    config_manager.initialize().unwrap();

    // 2. Preview the scan
    let engine = ScanEngine::new(ConfigManager::new_at(root.clone()));
    let (statuses, unique_files) = engine.pattern_statuses().unwrap();

    // One status per pattern, in descriptor order
    assert_eq!(statuses.len(), 6);
    assert_eq!(statuses[0].pattern, "templates/**/*.html");

    // templates/**/*.html reaches the root templates directory only
    assert_eq!(statuses[0].matched_count, 1);
    assert_eq!(statuses[0].sample_files, vec![Path::new("templates/base.html")]);

    // **/templates/**/*.html reaches the per-app template directory
    let app_status = &statuses[1];
    assert!(app_status.matched_count >= 1);
    assert!(
        app_status
            .sample_files
            .contains(&PathBuf::from("app/templates/app/index.html"))
    );

    // Script patterns: .js and .ts match, .jsx and .tsx are dead here
    assert_eq!(statuses[2].matched_count, 1);
    assert_eq!(statuses[3].matched_count, 0);
    assert_eq!(statuses[4].matched_count, 1);
    assert_eq!(statuses[5].matched_count, 0);

    assert!(unique_files >= 4);

    // 3. Resolve the effective file set
    let files = engine.resolve_files().unwrap();
    assert!(files.contains(&PathBuf::from("templates/base.html")));
    assert!(files.contains(&PathBuf::from("app/templates/app/index.html")));
    assert!(files.contains(&PathBuf::from("static/js/app.js")));
    assert!(files.contains(&PathBuf::from("static/js/app.ts")));
    assert!(!files.contains(&PathBuf::from("README.md")));
    assert!(!files.contains(&PathBuf::from("style-scan.toml")));

    // 4. Narrow the descriptor and verify the preview follows
    let mut config_manager = ConfigManager::new_at(root.clone());
    config_manager.remove_pattern("**/*.ts").unwrap();
    let files = engine.resolve_files().unwrap();
    assert!(!files.contains(&PathBuf::from("static/js/app.ts")));
}

#[test]
fn test_import_from_tailwind_config() {
    let (_td, root) = setup_project();

    let tailwind = r#"
module.exports = {
  content: [
    '../../templates/**/*.html',
    '../../**/templates/**/*.html',
    '../../**/*.js',
    '../../**/*.jsx',
    '../../**/*.ts',
    '../../**/*.tsx',
    '../../**/*.vue',
  ],
  theme: {
    extend: {},
  },
  plugins: [],
}
"#;
    let tailwind_path = root.join("tailwind.config.js");
    fs::write(&tailwind_path, tailwind).unwrap();

    let mut config_manager = ConfigManager::new_at(root.clone());
    config_manager.initialize().unwrap();

    // Six of the seven normalize to patterns already in the scaffold
    let (added, skipped) = config_manager
        .import_patterns(tailwind_path.to_str().unwrap(), "tailwind")
        .unwrap();
    assert_eq!(added, 1);
    assert_eq!(skipped, 6);

    let config = config_manager.load_config().unwrap();
    assert_eq!(config.content.last().unwrap(), "**/*.vue");
}

#[test]
fn test_import_from_list_file() {
    let (_td, root) = setup_project();

    let list_path = root.join("patterns.txt");
    fs::write(&list_path, "# extra sources\n**/*.svelte\n\n**/*.astro\n").unwrap();

    let mut config_manager = ConfigManager::new_at(root.clone());
    config_manager.initialize().unwrap();

    let (added, skipped) = config_manager
        .import_patterns(list_path.to_str().unwrap(), "list")
        .unwrap();
    assert_eq!(added, 2);
    assert_eq!(skipped, 0);
}

#[test]
fn test_export_round_trip() {
    let (_td, root) = setup_project();

    let mut config_manager = ConfigManager::new_at(root.clone());
    config_manager.initialize().unwrap();
    config_manager
        .set_theme_token("colors", "primary", "#1d4ed8")
        .unwrap();

    for format in ["toml", "json", "yaml"] {
        let export_path = root.join(format!("export.{format}"));
        config_manager
            .export_config(export_path.to_str().unwrap(), format)
            .unwrap();

        let exported = fs::read_to_string(&export_path).unwrap();
        let parsed: ScanConfig = match format {
            "json" => serde_json::from_str(&exported).unwrap(),
            "yaml" => serde_yaml::from_str(&exported).unwrap(),
            _ => toml::from_str(&exported).unwrap(),
        };
        assert_eq!(parsed, config_manager.load_config().unwrap());
    }
}
