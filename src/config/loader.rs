//! Config file loading

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "GIT_RECLONE_CONFIG";

const SECTION: &str = "git-reclone";

/// User settings. Every key is optional in the file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Show the "preparing" animation before the confirmation.
    pub animate: bool,
    /// Pause per animation frame, in milliseconds.
    pub frame_delay_ms: u64,
    /// Probe the remote with `git ls-remote` before deleting anything.
    pub verify_remote: bool,
    /// Filter used when none is passed on the command line.
    pub default_filter: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self { animate: true, frame_delay_ms: 10, verify_remote: true, default_filter: None }
    }
}

/// Load settings from `config_path` if given, else from the first candidate
/// file found in `search_dir`.
pub fn load_config(config_path: Option<&Path>, search_dir: Option<&Path>) -> Result<Config> {
    let config_path_provided = config_path.is_some();

    let discovered = match config_path {
        Some(path) => Some(path.to_path_buf()),
        None => search_dir.and_then(discover_config),
    };

    let Some(config_file) = discovered else {
        return Ok(Config::default());
    };

    let parsed = read_config(&config_file);
    match parsed {
        Ok(cfg) => {
            tracing::debug!("Loaded config from {}", config_file.display());
            Ok(cfg)
        }
        Err(e) if !config_path_provided => {
            tracing::warn!(
                "Failed to parse auto-discovered config {}: {:#}",
                config_file.display(),
                e
            );
            Ok(Config::default())
        }
        Err(e) => Err(e),
    }
}

fn read_config(config_file: &Path) -> Result<Config> {
    let content = fs::read_to_string(config_file)
        .with_context(|| format!("Failed reading config file: {}", config_file.display()))?;

    let ext = config_file.extension().and_then(|e| e.to_str()).unwrap_or("").to_ascii_lowercase();

    match ext.as_str() {
        "toml" => parse_toml_config(&content, config_file),
        "yaml" | "yml" => parse_yaml_config(&content, config_file),
        other => anyhow::bail!(
            "Unsupported config extension '.{}' for file {}",
            other,
            config_file.display()
        ),
    }
}

/// Parse TOML config, accepting keys at top level or under `[git-reclone]`.
fn parse_toml_config(content: &str, config_file: &Path) -> Result<Config> {
    let raw: toml::Value = toml::from_str(content)
        .with_context(|| format!("Invalid TOML syntax: {}", config_file.display()))?;

    let config_val = match raw.get(SECTION) {
        Some(nested) => nested.clone(),
        None => raw,
    };

    config_val.try_into().with_context(|| format!("Invalid TOML config: {}", config_file.display()))
}

/// Parse YAML config, accepting keys at top level or under `git-reclone:`.
fn parse_yaml_config(content: &str, config_file: &Path) -> Result<Config> {
    let raw: serde_yaml::Value = serde_yaml::from_str(content)
        .with_context(|| format!("Invalid YAML syntax: {}", config_file.display()))?;

    // An empty file parses as null.
    if raw.is_null() {
        return Ok(Config::default());
    }

    let config_val = match raw.get(SECTION) {
        Some(nested) => nested.clone(),
        None => raw,
    };

    serde_yaml::from_value(config_val)
        .with_context(|| format!("Invalid YAML config: {}", config_file.display()))
}

fn discover_config(dir: &Path) -> Option<PathBuf> {
    ["config.toml", "config.yml", "config.yaml"]
        .into_iter()
        .map(|candidate| dir.join(candidate))
        .find(|path| path.is_file())
}

/// Per-user config directory for git-reclone.
pub fn default_config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        std::env::var_os("APPDATA").map(|base| PathBuf::from(base).join(SECTION))
    }
    #[cfg(not(target_os = "windows"))]
    {
        if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME") {
            return Some(PathBuf::from(xdg).join(SECTION));
        }
        std::env::var_os("HOME").map(|home| PathBuf::from(home).join(".config").join(SECTION))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_when_missing() {
        let tmp = TempDir::new().expect("tmp");
        let cfg = load_config(None, Some(tmp.path())).expect("config");
        assert_eq!(cfg, Config::default());
        assert!(cfg.verify_remote);
        assert!(cfg.default_filter.is_none());
    }

    #[test]
    fn test_discovers_toml_config() {
        let tmp = TempDir::new().expect("tmp");
        fs::write(
            tmp.path().join("config.toml"),
            "animate = false\ndefault_filter = 'github'\n",
        )
        .expect("write");

        let cfg = load_config(None, Some(tmp.path())).expect("config");
        assert!(!cfg.animate);
        assert_eq!(cfg.default_filter.as_deref(), Some("github"));
        assert_eq!(cfg.frame_delay_ms, 10);
    }

    #[test]
    fn test_nested_section_in_toml() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("custom.toml");
        fs::write(&path, "[git-reclone]\nverify_remote = false\nframe_delay_ms = 0\n")
            .expect("write");

        let cfg = load_config(Some(&path), None).expect("config");
        assert!(!cfg.verify_remote);
        assert_eq!(cfg.frame_delay_ms, 0);
    }

    #[test]
    fn test_yaml_config() {
        let tmp = TempDir::new().expect("tmp");
        fs::write(tmp.path().join("config.yml"), "git-reclone:\n  animate: false\n")
            .expect("write");

        let cfg = load_config(None, Some(tmp.path())).expect("config");
        assert!(!cfg.animate);
    }

    #[test]
    fn test_explicit_config_invalid_type_returns_err() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("bad.toml");
        fs::write(&path, "verify_remote = \"maybe\"\n").expect("write");

        let result = load_config(Some(&path), None);
        assert!(result.is_err(), "explicit config with invalid type should return Err");
    }

    #[test]
    fn test_explicit_config_unsupported_extension_returns_err() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("reclone.ini");
        fs::write(&path, "animate=false\n").expect("write");

        assert!(load_config(Some(&path), None).is_err());
    }

    #[test]
    fn test_auto_discovered_invalid_config_returns_default() {
        let tmp = TempDir::new().expect("tmp");
        fs::write(tmp.path().join("config.toml"), "unknown_key = 1\n").expect("write");

        let cfg = load_config(None, Some(tmp.path())).expect("should not error on auto-discovery");
        assert_eq!(cfg, Config::default());
    }
}
