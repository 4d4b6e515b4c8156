use miette::{IntoDiagnostic, Result, WrapErr};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::constraint::{ExtensionSdk, ExtensionSdkRegistry};
use crate::desugar::{BuildVariantDesugaring, ProjectDesugaring};

/// Configuration for lintmeta
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Where to look for manifests
    pub discovery: DiscoveryConfig,

    /// Desugaring data sources
    pub desugaring: DesugaringConfig,

    /// Extension SDKs in addition to the built-in ones
    pub extension_sdks: Vec<ExtensionSdk>,

    /// Report configuration
    pub report: ReportConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DiscoveryConfig {
    /// Directories to scan, relative to the project root
    pub targets: Vec<PathBuf>,

    /// Patterns to exclude from discovery
    pub exclude: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DesugaringConfig {
    /// Descriptor sources replacing the built-in table: paths, `file:` or
    /// `jar:` URLs, or `none`
    pub files: Vec<String>,

    /// Per source set descriptor files reported by the build
    pub variant: Option<BuildVariantDesugaring>,

    /// Whether core library desugaring is enabled
    pub core_library_desugaring: bool,

    /// Minimum SDK, when not taken from the manifest
    pub min_sdk: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Output format: terminal, json
    pub format: String,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            targets: vec![],
            exclude: vec![
                "**/build/**".to_string(),
                "**/generated/**".to_string(),
                "**/.gradle/**".to_string(),
                "**/.idea/**".to_string(),
            ],
        }
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            format: "terminal".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from a file (YAML or TOML)
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .into_diagnostic()
            .wrap_err_with(|| format!("Failed to read config file: {}", path.display()))?;

        let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("");

        match extension {
            "yml" | "yaml" => serde_yaml::from_str(&contents)
                .into_diagnostic()
                .wrap_err("Failed to parse YAML config"),
            "toml" => toml::from_str(&contents)
                .into_diagnostic()
                .wrap_err("Failed to parse TOML config"),
            _ => {
                // Try YAML first, then TOML
                if let Ok(config) = serde_yaml::from_str(&contents) {
                    Ok(config)
                } else {
                    toml::from_str(&contents)
                        .into_diagnostic()
                        .wrap_err("Failed to parse config file")
                }
            }
        }
    }

    /// Try to load configuration from default locations
    pub fn from_default_locations(project_root: &Path) -> Result<Self> {
        let default_names = [
            ".lintmeta.yml",
            ".lintmeta.yaml",
            ".lintmeta.toml",
            "lintmeta.yml",
            "lintmeta.yaml",
            "lintmeta.toml",
        ];

        for name in &default_names {
            let path = project_root.join(name);
            if path.exists() {
                debug!("Using config file {}", path.display());
                return Self::from_file(&path);
            }
        }

        // No config file found, use defaults
        Ok(Self::default())
    }

    /// Check if a pattern matches for exclusion
    pub fn should_exclude(&self, path: &Path) -> bool {
        let path_str = path.to_string_lossy().replace('\\', "/");
        self.discovery
            .exclude
            .iter()
            .any(|pattern| glob_match(pattern, &path_str))
    }

    /// The built-in extension SDKs plus the configured ones; configured
    /// entries replace built-in entries with the same id.
    pub fn extension_registry(&self) -> ExtensionSdkRegistry {
        let mut registry = ExtensionSdkRegistry::builtin();
        for sdk in &self.extension_sdks {
            registry.register(sdk.clone());
        }
        registry
    }

    /// Desugaring model of the configured project. `manifest_min_sdk` is
    /// used when the config does not name a minimum SDK.
    pub fn project_desugaring(&self, manifest_min_sdk: i32) -> ProjectDesugaring {
        ProjectDesugaring::new(
            self.desugaring.variant.clone(),
            self.desugaring.core_library_desugaring,
            self.desugaring.min_sdk.unwrap_or(manifest_min_sdk),
        )
    }
}

/// Simple glob matching for patterns like "*Test" or "**/build/**"
fn glob_match(pattern: &str, text: &str) -> bool {
    if let Some(suffix) = pattern.strip_prefix('*').filter(|_| !pattern.contains('/')) {
        return text.ends_with(suffix);
    }

    if let Some(prefix) = pattern.strip_suffix('*').filter(|_| !pattern.contains('/')) {
        return text.starts_with(prefix);
    }

    if pattern.contains("**") {
        // "**/build/**" matches a complete "build" directory anywhere in the path
        if pattern.starts_with("**/") && pattern.ends_with("/**") {
            let dir_name = pattern.replace("**/", "").replace("/**", "");
            let dir_name = dir_name.trim_matches('/');
            return text.contains(&format!("/{}/", dir_name)) || text.starts_with(&format!("{}/", dir_name));
        }

        let parts: Vec<&str> = pattern.split("**").collect();
        if parts.len() == 2 {
            let prefix = parts[0].trim_end_matches('/');
            let suffix = parts[1].trim_start_matches('/');

            if prefix.is_empty() && suffix.is_empty() {
                return true;
            }

            if prefix.is_empty() {
                return text.ends_with(suffix) || text.contains(&format!("/{}", suffix));
            }

            if suffix.is_empty() {
                return text.starts_with(prefix) || text.contains(&format!("{}/", prefix));
            }

            return (text.starts_with(prefix) || text.contains(&format!("/{}/", prefix)))
                && (text.ends_with(suffix) || text.contains(&format!("/{}", suffix)));
        }
    }

    text == pattern
}
