use crate::aliases::{AliasIndex, build_alias_index};
use crate::catalog::build_catalog;
use crate::config::Config;
use crate::discover;
use crate::models::{AppRecord, ScoredApp};
use crate::search;
use std::path::PathBuf;

/// The launcher's context object: owns the built catalog and alias index.
/// Rebuilt wholesale on refresh, so a search never observes a half-built
/// catalog; there is no global state and no interior mutability.
pub struct Engine {
    catalog: Vec<AppRecord>,
    aliases: AliasIndex,
}

impl Engine {
    /// Discovers installed applications under `scan_roots` and assembles
    /// the full snapshot from them plus the config's custom apps.
    pub fn build(config: &Config, scan_roots: &[PathBuf]) -> Self {
        let discovered = discover::discover_applications(scan_roots);
        Self::from_parts(config, discovered)
    }

    pub fn from_parts(config: &Config, discovered: Vec<AppRecord>) -> Self {
        let custom: Vec<AppRecord> = config
            .custom_apps
            .iter()
            .map(|c| AppRecord {
                name: c.name.clone(),
                path: c.path.clone(),
                package_id: None,
                icon: None,
                is_cli: c.cli,
                exec: c.command.clone(),
            })
            .collect();

        Self {
            catalog: build_catalog(custom, discovered, &config.exclusions),
            aliases: build_alias_index(&config.aliases),
        }
    }

    pub fn catalog(&self) -> &[AppRecord] {
        &self.catalog
    }

    pub fn search(&self, query: &str, limit: usize) -> Vec<ScoredApp> {
        search::search(query, &self.catalog, &self.aliases, limit)
    }
}
