mod aliases;
mod app;
mod catalog;
mod cli;
mod commands;
mod config;
mod discover;
mod engine;
mod models;
mod output;
mod policy;
mod registry;
mod search;
mod spawn;
mod xdg;

use clap::Parser;
use cli::Cli;

fn main() {
    let cli = Cli::parse();

    let code = app::run(cli);
    if code != 0 {
        std::process::exit(code);
    }
}
