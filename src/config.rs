//! `.bindmetarc.json` loading.
//!
//! The config file is looked up from the working directory upwards, stopping
//! at the first directory that contains `.git`. Missing config means defaults.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use glob::Pattern;
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".bindmetarc.json";

pub const DEFAULT_MANIFEST_SUFFIX: &str = ".model.json";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    /// Directories or globs to scan, relative to `source_root`. Empty scans everything.
    pub includes: Vec<String>,
    /// Globs or literal paths to skip.
    pub ignores: Vec<String>,
    pub source_root: String,
    pub manifest_suffix: String,
    /// Report constructible types whose bound constructor cannot be chosen.
    pub warn_on_unresolved_constructor: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            includes: Vec::new(),
            ignores: Vec::new(),
            source_root: "./".to_string(),
            manifest_suffix: DEFAULT_MANIFEST_SUFFIX.to_string(),
            warn_on_unresolved_constructor: true,
        }
    }
}

impl Config {
    /// Reject patterns that do not compile and suffixes that cannot name a file.
    pub fn validate(&self) -> Result<()> {
        validate_patterns("ignores", self.ignores.iter())?;
        // Includes without wildcards are literal directories, brackets and all.
        validate_patterns(
            "includes",
            self.includes.iter().filter(|p| p.contains(['*', '?'])),
        )?;

        if self.manifest_suffix.is_empty() || self.manifest_suffix.contains(['/', '\\']) {
            bail!(
                "Invalid 'manifestSuffix': \"{}\" (expected a file name suffix such as \"{}\")",
                self.manifest_suffix,
                DEFAULT_MANIFEST_SUFFIX
            );
        }
        Ok(())
    }
}

fn validate_patterns<'a>(field: &str, patterns: impl Iterator<Item = &'a String>) -> Result<()> {
    for pattern in patterns {
        Pattern::new(pattern)
            .with_context(|| format!("Invalid glob pattern in '{}': \"{}\"", field, pattern))?;
    }
    Ok(())
}

/// Pretty JSON for `bindmeta init`.
pub fn default_config_json() -> Result<String> {
    serde_json::to_string_pretty(&Config::default()).context("Failed to generate default config.")
}

/// Nearest config file at or above `start_dir`, not crossing a `.git` root.
pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    for dir in start_dir.ancestors() {
        let candidate = dir.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            return Some(candidate);
        }
        if dir.join(".git").exists() {
            break;
        }
    }
    None
}

/// Result of loading configuration.
#[derive(Debug)]
pub struct ConfigLoadResult {
    pub config: Config,
    /// Config file path, `None` when using defaults.
    pub path: Option<PathBuf>,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    let Some(path) = find_config_file(start_dir) else {
        tracing::debug!(start = %start_dir.display(), "no config file found, using defaults");
        return Ok(ConfigLoadResult {
            config: Config::default(),
            path: None,
        });
    };

    let content = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    let config: Config = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
    config.validate()?;

    tracing::debug!(path = %path.display(), "loaded config");
    Ok(ConfigLoadResult {
        config,
        path: Some(path),
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    use super::*;

    fn write_config(dir: &Path, content: &str) -> PathBuf {
        let path = dir.join(CONFIG_FILE_NAME);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let config: Config = serde_json::from_str(r#"{ "includes": ["models"] }"#).unwrap();
        assert_eq!(
            config,
            Config {
                includes: vec!["models".to_string()],
                ..Config::default()
            }
        );
    }

    #[test]
    fn test_all_fields_are_camel_case() {
        let config: Config = serde_json::from_str(
            r#"{
                "sourceRoot": "domain",
                "manifestSuffix": ".binding.json",
                "warnOnUnresolvedConstructor": false
            }"#,
        )
        .unwrap();
        assert_eq!(config.source_root, "domain");
        assert_eq!(config.manifest_suffix, ".binding.json");
        assert!(!config.warn_on_unresolved_constructor);
    }

    #[test]
    fn test_default_config_round_trips() {
        let json = default_config_json().unwrap();
        let parsed: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, Config::default());
    }

    #[test]
    fn test_config_found_in_ancestor() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("models/orders");
        fs::create_dir_all(&nested).unwrap();
        let path = write_config(dir.path(), "{}");

        assert_eq!(find_config_file(&nested), Some(path));
    }

    #[test]
    fn test_lookup_stops_at_git_root() {
        let dir = tempdir().unwrap();
        write_config(dir.path(), "{}");
        let repo = dir.path().join("repo");
        fs::create_dir_all(repo.join(".git")).unwrap();

        assert_eq!(find_config_file(&repo), None);
    }

    #[test]
    fn test_load_defaults_without_file() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join(".git")).unwrap();

        let result = load_config(dir.path()).unwrap();
        assert!(result.path.is_none());
        assert_eq!(result.config, Config::default());
    }

    #[test]
    fn test_load_reports_invalid_json() {
        let dir = tempdir().unwrap();
        write_config(dir.path(), "{ ignores: }");

        let err = load_config(dir.path()).unwrap_err();
        assert!(err.to_string().starts_with("Failed to parse config file"));
    }

    #[test]
    fn test_invalid_globs_name_their_field() {
        let bad_ignore = Config {
            ignores: vec!["[unclosed".to_string()],
            ..Config::default()
        };
        let err = bad_ignore.validate().unwrap_err().to_string();
        assert!(err.contains("'ignores'"));

        let bad_include = Config {
            includes: vec!["models/*/[unclosed".to_string()],
            ..Config::default()
        };
        let err = bad_include.validate().unwrap_err().to_string();
        assert!(err.contains("'includes'"));
    }

    #[test]
    fn test_literal_include_is_not_a_glob() {
        let config = Config {
            includes: vec!["models/[v2]".to_string()],
            ..Config::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_manifest_suffix_must_name_a_file() {
        for suffix in ["", "models/x.json", "models\\x.json"] {
            let config = Config {
                manifest_suffix: suffix.to_string(),
                ..Config::default()
            };
            assert!(
                config.validate().is_err(),
                "{:?} should be rejected",
                suffix
            );
        }
    }
}
