use crate::cli::Cli;
use crate::config;
use crate::engine::Engine;
use crate::policy::decide_instance_mode;
use crate::registry::SingleInstanceStore;
use crate::search::DEFAULT_LIMIT;
use crate::spawn::FireAndForgetSpawn;

use super::common::{timing, trace};

pub fn launch(cli: &Cli, scan_roots: &[std::path::PathBuf], query: &str) -> i32 {
    let start = std::time::Instant::now();

    let cfg = config::load();
    let engine = Engine::build(&cfg, scan_roots);

    let matches = engine.search(query, DEFAULT_LIMIT);
    let Some(top) = matches.first() else {
        eprintln!("quicklaunch: no match for '{query}'");
        return 1;
    };

    let registry = SingleInstanceStore::load();
    let mode = decide_instance_mode(&top.app.name, registry.names(), cfg.always_new_window);

    trace(
        cli,
        &format!("launching '{}' mode={mode:?} (launch)", top.app.name),
    );
    timing("launch", start);

    // Failures past this point are invisible on purpose.
    FireAndForgetSpawn.spawn(&top.app, mode);

    0
}
