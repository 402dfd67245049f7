use serde::{Deserialize, Serialize};

/// One launchable entity. `path` is the identity key used for dedup; `name`
/// is what the matcher scores against and what the user sees (not unique).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppRecord {
    pub name: String,
    pub path: String,
    pub package_id: Option<String>,
    pub icon: Option<String>,
    /// Script-like entry rather than a GUI app. Display hint only.
    pub is_cli: bool,
    /// Exec line used by the spawner (desktop Exec= or custom command).
    pub exec: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScoredApp {
    pub app: AppRecord,
    /// Used only for ordering; never surfaced to callers as meaning.
    pub score: i32,
}
