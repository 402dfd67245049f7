use crate::cli::Cli;
use crate::config;
use crate::engine::Engine;
use crate::output::print_json;
use crate::search::DEFAULT_LIMIT;

use super::common::{timing, trace};

pub fn search(
    cli: &Cli,
    scan_roots: &[std::path::PathBuf],
    query: &str,
    limit: Option<usize>,
    json: bool,
) -> i32 {
    let start = std::time::Instant::now();

    let cfg = config::load();
    let engine = Engine::build(&cfg, scan_roots);
    let matches = engine.search(query, limit.unwrap_or(DEFAULT_LIMIT));

    trace(
        cli,
        &format!("catalog={} matches={} (search)", engine.catalog().len(), matches.len()),
    );
    timing("search", start);

    if json {
        print_json(&matches);
    } else {
        for m in &matches {
            println!("{}\t{}", m.app.path, m.app.name);
        }
    }

    0
}
