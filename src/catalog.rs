use crate::config::ExclusionRules;
use crate::models::AppRecord;
use std::collections::HashSet;

/// Builds the search universe: custom entries first, then discovered apps,
/// deduped by path (first occurrence wins, so custom beats discovered),
/// exclusions applied, then sorted by path for a stable base order.
pub fn build_catalog(
    custom: Vec<AppRecord>,
    discovered: Vec<AppRecord>,
    exclusions: &ExclusionRules,
) -> Vec<AppRecord> {
    let mut seen_paths: HashSet<String> = HashSet::new();
    let mut catalog: Vec<AppRecord> = Vec::with_capacity(custom.len() + discovered.len());

    for app in custom.into_iter().chain(discovered) {
        if !seen_paths.insert(app.path.clone()) {
            continue;
        }
        if is_excluded(&app.name, exclusions) {
            continue;
        }
        catalog.push(app);
    }

    catalog.sort_by(|a, b| a.path.to_lowercase().cmp(&b.path.to_lowercase()));
    catalog
}

fn is_excluded(name: &str, exclusions: &ExclusionRules) -> bool {
    if exclusions.names.iter().any(|n| n == name) {
        return true;
    }

    let name_lc = name.to_lowercase();
    exclusions
        .patterns
        .iter()
        .any(|p| wildcard_match(&p.to_lowercase(), &name_lc))
}

/// Anchored full-string match where `*` matches any run of characters.
/// Both sides are expected pre-lowercased by the caller.
pub fn wildcard_match(pattern: &str, text: &str) -> bool {
    let mut segments = pattern.split('*');

    // Text before the first `*` must sit at the very start.
    let first = segments.next().unwrap_or("");
    let Some(mut rest) = text.strip_prefix(first) else {
        return false;
    };

    let mut last: Option<&str> = None;
    for seg in segments {
        // A previous segment was not the final one after all; it only
        // needed to occur somewhere, not at the end.
        if let Some(prev) = last.take() {
            let Some(pos) = rest.find(prev) else {
                return false;
            };
            rest = &rest[pos + prev.len()..];
        }
        last = Some(seg);
    }

    match last {
        // No `*` at all: the whole pattern had to consume the whole text.
        None => rest.is_empty(),
        Some(tail) => tail.is_empty() || rest.ends_with(tail),
    }
}
