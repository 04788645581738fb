use anyhow::Context;
use canasta_core::GameConfig;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

/// Load a rules config from a JSON file. Missing file means the standard
/// table applies.
pub fn load_game_config(path: &Path) -> anyhow::Result<GameConfig> {
    if !path.exists() {
        return Ok(GameConfig::standard());
    }
    load_json(path)
}

fn load_json<T: DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let raw = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let value = serde_json::from_str(&raw).with_context(|| format!("parse {}", path.display()))?;
    Ok(value)
}
