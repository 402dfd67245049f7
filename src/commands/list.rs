use crate::cli::Cli;
use crate::config;
use crate::engine::Engine;
use crate::output::print_json;

use super::common::{timing, trace};

pub fn list(cli: &Cli, scan_roots: &[std::path::PathBuf], json: bool) -> i32 {
    let start = std::time::Instant::now();

    let cfg = config::load();
    let engine = Engine::build(&cfg, scan_roots);

    trace(cli, &format!("catalog={} (list)", engine.catalog().len()));
    timing("list", start);

    if json {
        print_json(&engine.catalog());
    } else {
        for app in engine.catalog() {
            println!("{}\t{}", app.path, app.name);
        }
    }

    0
}
