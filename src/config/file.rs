//! Configuration file loading and discovery.
//!
//! Supports loading configuration from YAML files with automatic discovery.

use super::types::ExportConfig;
use std::path::{Path, PathBuf};
use thiserror::Error;

// ============================================================================
// Configuration File Discovery
// ============================================================================

/// Standard config file names to search for.
const CONFIG_FILE_NAMES: &[&str] = &[
    ".sbom-normalizer.yaml",
    ".sbom-normalizer.yml",
    "sbom-normalizer.yaml",
    "sbom-normalizer.yml",
];

/// Directory below the user config directory that may hold a config file.
const USER_CONFIG_DIR: &str = "sbom-normalizer";

/// Discover a config file by searching standard locations.
///
/// Search order:
/// 1. Explicit path if provided
/// 2. Current directory
/// 3. User config directory (~/.config/sbom-normalizer/)
#[must_use]
pub fn discover_config_file(explicit_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit_path {
        if path.exists() {
            return Some(path.to_path_buf());
        }
    }

    if let Ok(cwd) = std::env::current_dir() {
        if let Some(path) = find_config_in_dir(&cwd) {
            return Some(path);
        }
    }

    dirs::config_dir().and_then(|dir| find_config_in_dir(&dir.join(USER_CONFIG_DIR)))
}

/// Find a config file in a specific directory.
#[must_use]
pub fn find_config_in_dir(dir: &Path) -> Option<PathBuf> {
    CONFIG_FILE_NAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.exists())
}

// ============================================================================
// Configuration File Loading
// ============================================================================

/// Error type for config file operations.
#[derive(Debug, Error)]
pub enum ConfigFileError {
    #[error("Config file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] serde_yaml::Error),
}

/// Load an `ExportConfig` from a YAML file.
pub fn load_config_file(path: &Path) -> Result<ExportConfig, ConfigFileError> {
    if !path.exists() {
        return Err(ConfigFileError::NotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;
    let config: ExportConfig = serde_yaml::from_str(&content)?;
    Ok(config)
}

/// Load config from discovered file, or return default.
#[must_use]
pub fn load_or_default(explicit_path: Option<&Path>) -> (ExportConfig, Option<PathBuf>) {
    discover_config_file(explicit_path).map_or_else(
        || (ExportConfig::default(), None),
        |path| match load_config_file(&path) {
            Ok(config) => {
                tracing::debug!(path = %path.display(), "Loaded config file");
                (config, Some(path))
            }
            Err(e) => {
                tracing::warn!("Failed to load config from {}: {}", path.display(), e);
                (ExportConfig::default(), None)
            }
        },
    )
}

// ============================================================================
// Example Config Generation
// ============================================================================

/// Generate an example config file content.
#[must_use]
pub fn generate_example_config() -> String {
    r#"# SBOM Normalizer Configuration
# Place this file at .sbom-normalizer.yaml in your project root
# or in ~/.config/sbom-normalizer/

# Target CycloneDX version: "1.1" to "1.6"
spec_version: "1.6"

# Output format: json or xml (JSON requires 1.2 or later)
format: json

# Indent nested elements/objects by two spaces
pretty: true

# Rename duplicate bom-ref values (dup, dup-1, dup-2, ...)
discriminate_bom_refs: true

# Start XML output with an XML declaration
xml_declaration: true
"#
    .to_string()
}
