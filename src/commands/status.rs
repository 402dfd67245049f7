use crate::cli::Cli;
use crate::config;
use crate::engine::Engine;
use crate::output::print_json;
use crate::registry::SingleInstanceStore;
use crate::xdg;

use super::common::{timing, trace};

pub fn status(cli: &Cli, scan_roots: &[std::path::PathBuf], json: bool) -> i32 {
    let start = std::time::Instant::now();

    let cfg = config::load();
    let engine = Engine::build(&cfg, scan_roots);
    let registry = SingleInstanceStore::load();

    #[derive(serde::Serialize)]
    struct StatusOut {
        catalog_count: usize,
        single_instance_count: usize,
        alias_count: usize,
        config: String,
    }

    let out = StatusOut {
        catalog_count: engine.catalog().len(),
        single_instance_count: registry.len(),
        alias_count: cfg.aliases.iter().map(|r| r.shortcuts.len()).sum(),
        config: xdg::config_path().to_string_lossy().to_string(),
    };

    trace(cli, &format!("catalog={} (status)", out.catalog_count));
    timing("status", start);

    if json {
        print_json(&out);
    } else {
        println!("catalog={}", out.catalog_count);
        println!("single-instance={}", out.single_instance_count);
        println!("aliases={}", out.alias_count);
        println!("config={}", out.config);
    }

    0
}
