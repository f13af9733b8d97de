use crate::config::{DATA_DIR_ENV, DEFAULT_DATA_DIR, STORAGE_KEY};
use crate::errors::Result;
use crate::state::AppState;
use std::{env, fs, io, path::Path, path::PathBuf};
use tracing::{debug, error, info, warn};

pub fn resolve_data_dir() -> PathBuf {
    if let Ok(dir) = env::var(DATA_DIR_ENV) {
        return PathBuf::from(dir);
    }

    PathBuf::from(DEFAULT_DATA_DIR)
}

/// The durable slot holding the full state snapshot.
#[derive(Debug, Clone)]
pub struct Storage {
    path: PathBuf,
}

impl Storage {
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        Self {
            path: data_dir.as_ref().join(format!("{STORAGE_KEY}.json")),
        }
    }

    pub fn from_env() -> Self {
        Self::new(resolve_data_dir())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load_state(&self) -> AppState {
        load_state(&self.path)
    }

    pub fn save_state(&self, state: &AppState) {
        save_state(&self.path, state)
    }
}

/// Never fails: a missing, unreadable or invalid slot yields the default state.
pub fn load_state(path: &Path) -> AppState {
    match fs::read(path) {
        Ok(bytes) => match serde_json::from_slice::<AppState>(&bytes) {
            Ok(state) => match state.validate() {
                Ok(()) => state,
                Err(err) => {
                    warn!(path = %path.display(), "discarding stored state: {err}");
                    AppState::default()
                }
            },
            Err(err) => {
                error!(path = %path.display(), "failed to parse state file: {err}");
                AppState::default()
            }
        },
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            info!(path = %path.display(), "no stored state, starting from defaults");
            AppState::default()
        }
        Err(err) => {
            error!(path = %path.display(), "failed to read state file: {err}");
            AppState::default()
        }
    }
}

/// Best-effort full snapshot write. Failures are logged and dropped.
pub fn save_state(path: &Path, state: &AppState) {
    match persist_state(path, state) {
        Ok(()) => debug!(path = %path.display(), "state saved"),
        Err(err) => error!(path = %path.display(), "failed to save state: {err}"),
    }
}

pub fn persist_state(path: &Path, state: &AppState) -> Result<()> {
    if let Some(parent) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let payload = serde_json::to_vec_pretty(state)?;
    fs::write(path, payload)?;
    Ok(())
}
