use crate::aliases::AliasIndex;
use crate::models::{AppRecord, ScoredApp};

pub const DEFAULT_LIMIT: usize = 50;

const SCORE_EXACT_NAME: i32 = 1000;
const SCORE_ALIAS_EXACT: i32 = 950;
const SCORE_PREFIX: i32 = 900;
const SCORE_ALIAS_PREFIX: i32 = 850;
const SCORE_SUBSTRING: i32 = 500;

/// Ranks catalog entries for a query. Empty queries return the catalog
/// prefix in base order; otherwise each candidate gets at most one score
/// from the tier table and non-matches are dropped. Ties keep catalog
/// order (stable sort).
pub fn search(
    query: &str,
    catalog: &[AppRecord],
    aliases: &AliasIndex,
    limit: usize,
) -> Vec<ScoredApp> {
    if limit == 0 {
        return Vec::new();
    }

    let query_lc = query.trim().to_lowercase();
    if query_lc.is_empty() {
        return catalog
            .iter()
            .take(limit)
            .map(|app| ScoredApp {
                app: app.clone(),
                score: 0,
            })
            .collect();
    }

    let mut matches: Vec<ScoredApp> = catalog
        .iter()
        .filter_map(|app| {
            score_app(&app.name.to_lowercase(), &query_lc, aliases).map(|score| ScoredApp {
                app: app.clone(),
                score,
            })
        })
        .collect();

    matches.sort_by(|a, b| b.score.cmp(&a.score));
    matches.truncate(limit);
    matches
}

/// One score per candidate, first matching tier wins. The alias tiers run
/// before the exact-name tier on purpose: a name that is also an alias
/// target scores 950/850, never 1000. Callers pass pre-lowercased strings.
fn score_app(name_lc: &str, query_lc: &str, aliases: &AliasIndex) -> Option<i32> {
    // Tier 1: the query is a registered shortcut for this app.
    if let Some(target) = aliases.get(query_lc)
        && target.to_lowercase() == name_lc
    {
        return Some(SCORE_ALIAS_EXACT);
    }

    // Tier 2: the query is a prefix of some shortcut for this app.
    if aliases.iter().any(|(shortcut, target)| {
        shortcut.starts_with(query_lc) && target.to_lowercase() == name_lc
    }) {
        return Some(SCORE_ALIAS_PREFIX);
    }

    if name_lc == query_lc {
        return Some(SCORE_EXACT_NAME);
    }

    if name_lc.starts_with(query_lc) {
        return Some(SCORE_PREFIX);
    }

    if name_lc.contains(query_lc) {
        return Some(SCORE_SUBSTRING);
    }

    let fuzzy = subsequence_score(query_lc, name_lc);
    if fuzzy > 0 { Some(fuzzy) } else { None }
}

/// Two-cursor subsequence walk. A hit awards `1 + consecutive_run` and
/// advances the query cursor; a miss resets the run. Counts only if the
/// whole query was consumed, so consecutive hits beat scattered ones.
fn subsequence_score(query_lc: &str, name_lc: &str) -> i32 {
    let query: Vec<char> = query_lc.chars().collect();
    if query.is_empty() {
        return 0;
    }

    let mut qi = 0usize;
    let mut run = 0i32;
    let mut score = 0i32;

    for ch in name_lc.chars() {
        if qi < query.len() && ch == query[qi] {
            score += 1 + run;
            run += 1;
            qi += 1;
        } else {
            run = 0;
        }
    }

    if qi == query.len() { score } else { 0 }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aliases::build_alias_index;
    use crate::aliases::AliasRule;

    fn app(name: &str, path: &str) -> AppRecord {
        AppRecord {
            name: name.to_string(),
            path: path.to_string(),
            package_id: None,
            icon: None,
            is_cli: false,
            exec: None,
        }
    }

    fn no_aliases() -> AliasIndex {
        AliasIndex::new()
    }

    fn names(results: &[ScoredApp]) -> Vec<&str> {
        results.iter().map(|r| r.app.name.as_str()).collect()
    }

    #[test]
    fn empty_query_returns_catalog_prefix_in_base_order() {
        let catalog: Vec<AppRecord> = (0..60)
            .map(|i| app(&format!("App {i}"), &format!("/apps/{i:03}")))
            .collect();

        let results = search("", &catalog, &no_aliases(), DEFAULT_LIMIT);
        assert_eq!(results.len(), 50);
        assert_eq!(results[0].app.name, "App 0");
        assert_eq!(results[49].app.name, "App 49");

        let small = vec![app("Only", "/only")];
        assert_eq!(search("  ", &small, &no_aliases(), DEFAULT_LIMIT).len(), 1);
    }

    #[test]
    fn zero_limit_returns_nothing() {
        let catalog = vec![app("Gimp", "/gimp")];
        assert!(search("gimp", &catalog, &no_aliases(), 0).is_empty());
    }

    #[test]
    fn exact_name_scores_1000_without_aliases() {
        let catalog = vec![app("Firefox", "/ff")];
        let results = search("FIREFOX", &catalog, &no_aliases(), DEFAULT_LIMIT);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].score, 1000);
    }

    #[test]
    fn prefix_beats_substring() {
        let catalog = vec![app("Avahi SSH Browser", "/a"), app("Browser", "/b")];
        let results = search("brow", &catalog, &no_aliases(), DEFAULT_LIMIT);
        assert_eq!(names(&results), vec!["Browser", "Avahi SSH Browser"]);
        assert_eq!(results[0].score, 900);
        assert_eq!(results[1].score, 500);
    }

    #[test]
    fn alias_target_scores_950_even_when_name_would_be_exact() {
        // "Code" is an alias target; searching its literal name still goes
        // through the alias tier first.
        let aliases = build_alias_index(&[AliasRule {
            app: "Code".to_string(),
            shortcuts: vec!["code".to_string()],
        }]);
        let catalog = vec![app("Code", "/code")];

        let results = search("code", &catalog, &aliases, DEFAULT_LIMIT);
        assert_eq!(results[0].score, 950);
    }

    #[test]
    fn alias_shortcut_ranks_target_and_literal_match_coexists() {
        let aliases = build_alias_index(&[AliasRule {
            app: "Code".to_string(),
            shortcuts: vec!["vsc".to_string()],
        }]);
        // A literal app named like the shortcut is also present.
        let catalog = vec![app("Code", "/code"), app("vsc", "/vsc")];

        let results = search("vsc", &catalog, &aliases, DEFAULT_LIMIT);
        assert_eq!(names(&results), vec!["vsc", "Code"]);
        // Literal exact name keeps 1000; the alias target gets 950.
        assert_eq!(results[0].score, 1000);
        assert_eq!(results[1].score, 950);
    }

    #[test]
    fn partial_shortcut_scores_850() {
        let aliases = build_alias_index(&[AliasRule {
            app: "Visual Studio Code".to_string(),
            shortcuts: vec!["vsc".to_string()],
        }]);
        let catalog = vec![app("Visual Studio Code", "/vsc")];

        let results = search("vs", &catalog, &aliases, DEFAULT_LIMIT);
        assert_eq!(results[0].score, 850);
    }

    #[test]
    fn fuzzy_consecutive_run_beats_scattered_match() {
        let scattered = subsequence_score("ps", "photoshop");
        let adjacent = subsequence_score("ps", "caps");
        assert!(scattered > 0);
        assert!(adjacent > scattered);
    }

    #[test]
    fn fuzzy_run_resets_on_miss() {
        // "abc" adjacent: 1 + 2 + 3 = 6; fully scattered: 1 + 1 + 1 = 3.
        assert_eq!(subsequence_score("abc", "abc"), 6);
        assert_eq!(subsequence_score("abc", "a-b-c"), 3);
    }

    #[test]
    fn incomplete_subsequence_is_excluded() {
        let catalog = vec![app("Finder", "/finder")];
        assert!(search("xyz", &catalog, &no_aliases(), DEFAULT_LIMIT).is_empty());
        assert_eq!(subsequence_score("xyz", "finder"), 0);
    }

    #[test]
    fn fuzzy_match_is_returned_with_its_computed_score() {
        let catalog = vec![app("Photoshop", "/ps")];
        let results = search("ps", &catalog, &no_aliases(), DEFAULT_LIMIT);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].score, subsequence_score("ps", "photoshop"));
    }

    #[test]
    fn ties_keep_catalog_order() {
        let catalog = vec![
            app("Note One", "/a"),
            app("Note Two", "/b"),
            app("Note Three", "/c"),
        ];
        let results = search("note", &catalog, &no_aliases(), DEFAULT_LIMIT);
        assert_eq!(names(&results), vec!["Note One", "Note Two", "Note Three"]);
    }

    #[test]
    fn results_truncate_to_limit() {
        let catalog: Vec<AppRecord> = (0..10)
            .map(|i| app(&format!("Term {i}"), &format!("/t/{i}")))
            .collect();
        let results = search("term", &catalog, &no_aliases(), 3);
        assert_eq!(results.len(), 3);
    }

    #[test]
    fn empty_catalog_yields_empty_results() {
        assert!(search("anything", &[], &no_aliases(), DEFAULT_LIMIT).is_empty());
        assert!(search("", &[], &no_aliases(), DEFAULT_LIMIT).is_empty());
    }
}
