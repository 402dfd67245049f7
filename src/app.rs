use crate::cli::{Cli, Cmd};
use crate::commands;

pub fn run(cli: Cli) -> i32 {
    // Resolve scan roots from XDG + -p paths
    let scan_roots = crate::xdg::build_scan_roots(&cli.paths);

    match &cli.cmd {
        Cmd::Search { query, limit, json } => {
            commands::search::search(&cli, &scan_roots, query, *limit, *json)
        }
        Cmd::List { json } => commands::list::list(&cli, &scan_roots, *json),
        Cmd::Launch { query } => commands::launch::launch(&cli, &scan_roots, query),
        Cmd::Mark { name } => commands::mark::mark(&cli, name),
        Cmd::Status { json } => commands::status::status(&cli, &scan_roots, *json),
    }
}
