use crate::error::{FairwayError, Result};
use crate::types::config::FairwayConfig;
use std::path::{Path, PathBuf};
use toml::map::Map;
use toml::Value;

pub const DEFAULT_CONFIG_FILE: &str = "fairway.toml";
pub const DEFAULT_LOCAL_FILE: &str = ".fairway/local.toml";
pub const DEFAULT_GLOBAL_CONFIG_FILE: &str = ".config/fairway/config.toml";

/// Load configuration for a working directory. Layers merge in order:
/// global config, then `fairway.toml` in `root`, then `.fairway/local.toml`.
/// Returns `None` (defaults apply) when the directory has no `fairway.toml`.
pub fn load_config(root: &Path) -> Result<Option<FairwayConfig>> {
    let global = std::env::var_os("HOME")
        .map(PathBuf::from)
        .map(|home| home.join(DEFAULT_GLOBAL_CONFIG_FILE));
    load_config_with_global(root, global.as_deref())
}

pub(crate) fn load_config_with_global(
    root: &Path,
    global_path: Option<&Path>,
) -> Result<Option<FairwayConfig>> {
    let repo_path = root.join(DEFAULT_CONFIG_FILE);
    if !repo_path.exists() {
        return Ok(None);
    }

    let mut merged = Value::Table(Map::new());
    if let Some(path) = global_path {
        merge_file_if_exists(&mut merged, path)?;
    }
    merge_file_if_exists(&mut merged, &repo_path)?;
    merge_file_if_exists(&mut merged, &root.join(DEFAULT_LOCAL_FILE))?;

    let cfg: FairwayConfig = merged
        .try_into()
        .map_err(|e: toml::de::Error| FairwayError::ConfigParse(e.to_string()))?;
    tracing::debug!(root = %root.display(), "loaded layered configuration");
    Ok(Some(cfg))
}

fn merge_file_if_exists(merged: &mut Value, path: &Path) -> Result<()> {
    if !path.exists() {
        return Ok(());
    }
    let value = read_toml_value(path)?;
    merge_toml(merged, value);
    Ok(())
}

fn read_toml_value(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content)
        .map_err(|e| FairwayError::ConfigParse(format!("{}: {}", path.display(), e)))
}

fn merge_toml(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Table(base_table), Value::Table(overlay_table)) => {
            for (key, value) in overlay_table {
                match base_table.get_mut(&key) {
                    Some(existing) => merge_toml(existing, value),
                    None => {
                        base_table.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => {
            *slot = value;
        }
    }
}
