use anyhow::{bail, Context};
use canasta_core::GameState;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const SAVE_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedSession {
    pub version: u32,
    pub state: GameState,
}

pub fn default_snapshot_path() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os("CANASTA_SAVE") {
        return Some(PathBuf::from(path));
    }
    std::env::var_os("HOME").map(|home| PathBuf::from(home).join(".canasta_session.json"))
}

pub fn save_session(state: &GameState, path: &Path) -> anyhow::Result<()> {
    let payload = SavedSession {
        version: SAVE_SCHEMA_VERSION,
        state: state.clone(),
    };
    let body = serde_json::to_string_pretty(&payload).context("serialize session")?;
    fs::write(path, body).with_context(|| format!("write {}", path.display()))?;
    Ok(())
}

pub fn load_session(path: &Path) -> anyhow::Result<GameState> {
    let body = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let payload: SavedSession =
        serde_json::from_str(&body).with_context(|| format!("parse {}", path.display()))?;
    if payload.version != SAVE_SCHEMA_VERSION {
        bail!(
            "unsupported save version {} (expected {})",
            payload.version,
            SAVE_SCHEMA_VERSION
        );
    }
    Ok(payload.state)
}
