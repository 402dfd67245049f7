use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Maps one canonical application name to its shortcut strings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AliasRule {
    pub app: String,
    #[serde(default)]
    pub shortcuts: Vec<String>,
}

/// Lowercased shortcut -> target application name. Rebuilt in full whenever
/// the rule set changes; never persisted.
pub type AliasIndex = HashMap<String, String>;

/// Flat overwrite: if two rules declare the same shortcut, the last rule
/// processed wins, silently.
pub fn build_alias_index(rules: &[AliasRule]) -> AliasIndex {
    let mut index = AliasIndex::new();

    for rule in rules {
        for shortcut in &rule.shortcuts {
            let key = shortcut.to_lowercase();
            if key.is_empty() {
                continue;
            }
            index.insert(key, rule.app.clone());
        }
    }

    index
}
