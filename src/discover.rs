use crate::models::AppRecord;
use std::{fs, path::Path, path::PathBuf};
use walkdir::WalkDir;

/// Walks the application dirs and turns `.desktop` files into records.
/// Files that fail to parse, carry NoDisplay=true, or have no Name= are
/// skipped silently; they are simply not launch targets.
pub fn discover_applications(scan_roots: &[PathBuf]) -> Vec<AppRecord> {
    let mut apps: Vec<AppRecord> = Vec::new();

    for root in scan_roots {
        if !root.is_dir() {
            continue;
        }

        for entry in WalkDir::new(root)
            .follow_links(true)
            .into_iter()
            .filter_map(Result::ok)
        {
            let path = entry.path();
            if !entry.file_type().is_file() {
                continue;
            }
            if !path.extension().map(|e| e == "desktop").unwrap_or(false) {
                continue;
            }

            if let Some(app) = parse_desktop_file(path) {
                apps.push(app);
            }
        }
    }

    apps
}

fn parse_desktop_file(path: &Path) -> Option<AppRecord> {
    let content = fs::read_to_string(path).ok()?;

    let mut name: Option<String> = None;
    let mut exec: Option<String> = None;
    let mut icon: Option<String> = None;
    let mut terminal = false;
    let mut in_entry_group = false;

    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if line.starts_with('[') {
            // Only the main group; actions and friends come later sections.
            in_entry_group = line == "[Desktop Entry]";
            continue;
        }
        if !in_entry_group {
            continue;
        }

        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        let (key, value) = (key.trim(), value.trim());

        match key {
            "Name" if name.is_none() => name = Some(value.to_string()),
            "Exec" if exec.is_none() => exec = Some(value.to_string()),
            "Icon" if icon.is_none() => icon = Some(value.to_string()),
            "Terminal" => terminal = value.eq_ignore_ascii_case("true"),
            "NoDisplay" | "Hidden" if value.eq_ignore_ascii_case("true") => return None,
            _ => {}
        }
    }

    Some(AppRecord {
        name: name?,
        path: path.to_string_lossy().to_string(),
        package_id: desktop_id(path),
        icon,
        is_cli: terminal,
        exec,
    })
}

/// Desktop id from the file stem, e.g. `org.gnome.Calculator`.
fn desktop_id(path: &Path) -> Option<String> {
    path.file_stem().map(|s| s.to_string_lossy().to_string())
}
