use crate::cli::Cli;
use crate::registry::SingleInstanceStore;

use super::common::{timing, trace};

pub fn mark(cli: &Cli, name: &str) -> i32 {
    let start = std::time::Instant::now();

    let mut registry = SingleInstanceStore::load();
    let added = registry.mark(name);
    registry.flush();

    trace(cli, &format!("registry={} (mark)", registry.len()));
    timing("mark", start);

    if added {
        println!("marked '{name}' as single-instance");
    } else {
        println!("'{name}' already marked as single-instance");
    }

    0
}
