use crate::xdg;
use serde::{Deserialize, Serialize};
use std::{collections::HashSet, fs, path::PathBuf};

const REGISTRY_VERSION: u32 = 1;

#[derive(Debug, Serialize, Deserialize)]
struct RegistryFile {
    version: u32,
    names: Vec<String>,
}

/// Persisted set of display names that must reuse an existing window.
/// Append-only from the launcher's perspective.
#[derive(Debug, Default)]
pub struct SingleInstanceStore {
    names: HashSet<String>,
    dirty: bool,
    path: PathBuf,
}

impl SingleInstanceStore {
    pub fn load() -> Self {
        Self::load_from(registry_path())
    }

    pub fn load_from(path: PathBuf) -> Self {
        let mut store = Self {
            names: HashSet::new(),
            dirty: false,
            path,
        };

        if let Ok(data) = fs::read(&store.path)
            && let Ok(file) = postcard::from_bytes::<RegistryFile>(&data)
            && file.version == REGISTRY_VERSION
        {
            store.names = file.names.into_iter().collect();
        }

        store
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn names(&self) -> &HashSet<String> {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Adds a name; returns false (without failing) when already present.
    pub fn mark(&mut self, name: &str) -> bool {
        let added = self.names.insert(name.to_string());
        if added {
            self.dirty = true;
        }
        added
    }

    pub fn flush(&mut self) {
        if !self.dirty {
            return;
        }

        let Some(dir) = self.path.parent() else {
            return;
        };
        if fs::create_dir_all(dir).is_err() {
            return;
        }

        let mut names: Vec<String> = self.names.iter().cloned().collect();
        names.sort();

        let file = RegistryFile {
            version: REGISTRY_VERSION,
            names,
        };

        let Ok(data) = postcard::to_stdvec(&file) else {
            return;
        };

        // Best-effort atomic-ish write.
        let tmp = self.path.with_extension("bin.tmp");
        if fs::write(&tmp, data).is_ok() {
            let _ = fs::rename(tmp, &self.path);
            self.dirty = false;
        }
    }
}

fn registry_path() -> PathBuf {
    xdg::data_dir().join(format!("single-instance.v{REGISTRY_VERSION}.bin"))
}
