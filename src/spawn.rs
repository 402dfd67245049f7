use crate::models::AppRecord;
use crate::policy::InstanceMode;
use std::process::Command;

/// Fire-and-forget spawner: every launch failure is swallowed on purpose.
/// The launcher's only failure surface is "nothing happens"; nothing is
/// retried and nothing flows back into ranking state.
pub struct FireAndForgetSpawn;

impl FireAndForgetSpawn {
    pub fn spawn(&self, app: &AppRecord, mode: InstanceMode) {
        match mode {
            // Desktop activation brings a running instance to the front
            // when the app supports it.
            InstanceMode::ReuseExisting => {
                if let Some(id) = app.package_id.as_deref() {
                    let launched = Command::new("gtk-launch").arg(id).status();
                    if matches!(launched, Ok(s) if s.success()) {
                        return;
                    }
                }
                // Activation unavailable; fall through to a plain spawn.
                self.exec_argv(app);
            }
            InstanceMode::NewInstance => self.exec_argv(app),
        }
    }

    fn exec_argv(&self, app: &AppRecord) {
        let Some(exec_line) = app.exec.as_deref() else {
            return;
        };

        let argv = exec_to_argv(exec_line);
        let Some((program, args)) = argv.split_first() else {
            return;
        };

        let _ = Command::new(program).args(args).spawn();
    }
}

pub fn exec_to_argv(exec_line: &str) -> Vec<String> {
    // Desktop Entry spec allows field codes like %u, %U, %f, %F, etc.
    // We launch without file/url args, so they are dropped.
    let Some(tokens) = shlex::split(exec_line) else {
        return Vec::new();
    };

    tokens
        .into_iter()
        .filter_map(|t| {
            if is_field_code_token(&t) {
                return None;
            }

            // Best-effort: strip field codes embedded in an arg
            // Example: "--foo=%u" -> "--foo="
            if t.contains('%') {
                return Some(strip_field_codes(&t));
            }

            Some(t)
        })
        .filter(|t| !t.is_empty())
        .collect()
}

fn is_field_code_token(t: &str) -> bool {
    matches!(
        t,
        "%f" | "%F" | "%u" | "%U" | "%d" | "%D" | "%n" | "%N" | "%i" | "%c" | "%k" | "%v" | "%m"
    )
}

fn strip_field_codes(s: &str) -> String {
    // Minimal: remove any occurrences of %<char>.
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '%' {
            // Skip next char if present (the code), or keep '%' if it's the end.
            if chars.peek().is_some() {
                chars.next();
                continue;
            }
        }
        out.push(ch);
    }

    out
}
