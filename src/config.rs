use crate::aliases::AliasRule;
use crate::xdg;
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

/// Parsed launcher configuration. The file is JSON under the XDG config
/// dir; a missing or unreadable file falls back to defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub custom_apps: Vec<CustomApp>,
    #[serde(default)]
    pub aliases: Vec<AliasRule>,
    #[serde(default)]
    pub exclusions: ExclusionRules,
    #[serde(default)]
    pub always_new_window: bool,
}

/// User-declared catalog entry. Wins over a discovered app sharing a path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomApp {
    pub name: String,
    pub path: String,
    /// Command line to run instead of opening `path` directly.
    pub command: Option<String>,
    #[serde(default)]
    pub cli: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExclusionRules {
    /// Exact display names to drop from the catalog.
    #[serde(default)]
    pub names: Vec<String>,
    /// Anchored wildcard patterns, `*` = any run of characters,
    /// case-insensitive.
    #[serde(default)]
    pub patterns: Vec<String>,
}

pub fn load() -> Config {
    load_from(&xdg::config_path())
}

pub fn load_from(path: &Path) -> Config {
    let Ok(data) = fs::read_to_string(path) else {
        return Config::default();
    };

    let mut cfg: Config = match serde_json::from_str(&data) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("quicklaunch: bad config {} ({e}), using defaults", path.display());
            return Config::default();
        }
    };

    // Custom apps pointing nowhere never enter the catalog.
    cfg.custom_apps
        .retain(|a| Path::new(&a.path).exists() || a.command.is_some());

    cfg
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn missing_file_yields_defaults() {
        let cfg = load_from(&PathBuf::from("/nonexistent/quicklaunch-config.json"));
        assert!(cfg.custom_apps.is_empty());
        assert!(cfg.aliases.is_empty());
        assert!(cfg.exclusions.names.is_empty());
        assert!(!cfg.always_new_window);
    }

    #[test]
    fn garbage_file_yields_defaults() {
        let path = std::env::temp_dir().join("quicklaunch-test-bad-config.json");
        std::fs::write(&path, "{ not json").unwrap();
        let cfg = load_from(&path);
        assert!(cfg.aliases.is_empty());
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn parses_full_shape() {
        let path = std::env::temp_dir().join("quicklaunch-test-config.json");
        std::fs::write(
            &path,
            r#"{
                "custom_apps": [
                    {"name": "My Script", "path": "/tmp/missing-script", "command": "sh -c true", "cli": true}
                ],
                "aliases": [{"app": "Code", "shortcuts": ["vsc", "code"]}],
                "exclusions": {"names": ["Secret"], "patterns": ["*Helper*"]},
                "always_new_window": true
            }"#,
        )
        .unwrap();

        let cfg = load_from(&path);
        // Kept despite the missing path: it has a command.
        assert_eq!(cfg.custom_apps.len(), 1);
        assert!(cfg.custom_apps[0].cli);
        assert_eq!(cfg.aliases[0].shortcuts, vec!["vsc", "code"]);
        assert_eq!(cfg.exclusions.patterns, vec!["*Helper*"]);
        assert!(cfg.always_new_window);
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn drops_custom_apps_with_dead_paths() {
        let path = std::env::temp_dir().join("quicklaunch-test-deadpath.json");
        std::fs::write(
            &path,
            r#"{"custom_apps": [{"name": "Gone", "path": "/nonexistent/app", "command": null}]}"#,
        )
        .unwrap();

        let cfg = load_from(&path);
        assert!(cfg.custom_apps.is_empty());
        let _ = std::fs::remove_file(&path);
    }
}
