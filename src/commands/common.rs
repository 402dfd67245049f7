use crate::cli::Cli;

pub fn timing_enabled() -> bool {
    matches!(
        std::env::var("QUICKLAUNCH_TIMING").as_deref(),
        Ok("1") | Ok("true") | Ok("yes")
    )
}

pub fn trace(cli: &Cli, msg: &str) {
    if cli.trace {
        eprintln!("quicklaunch: {msg}");
    }
}

pub fn timing(what: &str, start: std::time::Instant) {
    if timing_enabled() {
        eprintln!("quicklaunch timing: {what} elapsed={:?}", start.elapsed());
    }
}
