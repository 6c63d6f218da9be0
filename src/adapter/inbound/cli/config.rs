//! Handler for the `config` command group.

use std::fs;
use std::path::Path;

use serde_json::json;

use crate::adapter::inbound::cli::output;
use crate::adapter::outbound::store::ConfiguredStore;
use crate::error::{ConfigError, Result};
use crate::infrastructure::config::settings::{Config, STORE_PATH_ENV};

/// Default config template with documentation.
const CONFIG_TEMPLATE: &str = include_str!("../../../../config.toml.example");

/// Execute `config init`.
pub fn execute_init(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(ConfigError::InvalidValue {
            field: "config",
            reason: "file already exists (use --force to overwrite)".to_string(),
        }
        .into());
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    fs::write(path, CONFIG_TEMPLATE)?;

    if output::is_json() {
        output::json_output(json!({
            "command": "config init",
            "path": path.display().to_string(),
        }));
        return Ok(());
    }

    output::section("Config Initialized");
    output::success("Created configuration file");
    output::field("Path", path.display());
    output::section("Next Steps");
    output::note(&format!("1. Edit {} to taste", path.display()));
    output::note(&format!(
        "2. Run: traderisk config show -c {}",
        path.display()
    ));
    Ok(())
}

/// Execute `config show`.
pub fn execute_show(path: &Path, config: &Config, store: &ConfiguredStore) {
    let tutorial = config.ui.tutorial();
    let custom_tour = !config.ui.tutorial.is_empty();

    if output::is_json() {
        output::json_output(json!({
            "command": "config show",
            "path": path.display().to_string(),
            "loaded": path.exists(),
            "logging": {
                "level": config.logging.level,
                "format": config.logging.format,
            },
            "store": store.describe(),
            "ui": {
                "banner": config.ui.banner,
                "show_qa_items": config.ui.show_qa_items,
                "tutorial_pages": tutorial.len(),
                "custom_tutorial": custom_tour,
            },
        }));
        return;
    }

    output::section("Effective Configuration");
    if path.exists() {
        output::field("File", path.display());
    } else {
        output::field("File", output::muted(format!("{} (not found, using defaults)", path.display())));
    }

    output::section("Logging");
    output::field("Level", &config.logging.level);
    output::field("Format", &config.logging.format);

    output::section("Store");
    output::field("Location", store.describe());
    if std::env::var_os(STORE_PATH_ENV).is_some_and(|v| !v.is_empty()) {
        output::note(&format!("path taken from {STORE_PATH_ENV}"));
    }

    output::section("Interface");
    output::field("Banner", if config.ui.banner { "yes" } else { "no" });
    output::field("QA items", if config.ui.show_qa_items { "yes" } else { "no" });
    output::field(
        "Tutorial",
        format!(
            "{} pages ({})",
            tutorial.len(),
            if custom_tour { "custom" } else { "built-in" }
        ),
    );
}
