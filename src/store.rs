use crate::error::{FairwayError, Result};
use crate::types::report::CalculationMethod;
use crate::types::round::GolfRound;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// On-disk shape of a rounds file: a TOML document with `[[rounds]]` entries.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RoundsFile {
    #[serde(default)]
    pub rounds: Vec<GolfRound>,
}

/// One saved handicap calculation, appended to the history file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationRecord {
    pub handicap_index: f64,
    pub method: String,
    pub round_count: usize,
    pub computed_at: DateTime<Utc>,
}

impl CalculationRecord {
    pub fn new(handicap_index: f64, method: CalculationMethod, round_count: usize) -> Self {
        CalculationRecord {
            handicap_index,
            method: method.label().to_string(),
            round_count,
            computed_at: Utc::now(),
        }
    }
}

pub fn load_rounds(path: &Path) -> Result<Vec<GolfRound>> {
    if !path.exists() {
        return Err(FairwayError::PathNotFound(path.display().to_string()));
    }
    let content = std::fs::read_to_string(path)?;
    let file: RoundsFile = toml::from_str(&content)
        .map_err(|e| FairwayError::RoundsParse(format!("{}: {}", path.display(), e)))?;
    tracing::debug!(path = %path.display(), rounds = file.rounds.len(), "loaded rounds file");
    Ok(file.rounds)
}

/// Append one round, creating the file on first use. Returns the new count.
pub fn append_round(path: &Path, round: GolfRound) -> Result<usize> {
    let mut file = if path.exists() {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| FairwayError::RoundsParse(format!("{}: {}", path.display(), e)))?
    } else {
        RoundsFile::default()
    };

    file.rounds.push(round);
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(path, toml::to_string_pretty(&file)?)?;
    Ok(file.rounds.len())
}

pub fn load_history(path: &Path) -> Result<Vec<CalculationRecord>> {
    if !path.exists() {
        return Ok(Vec::new());
    }
    let content = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

pub fn append_history(path: &Path, record: &CalculationRecord) -> Result<()> {
    let mut records = load_history(path)?;
    records.push(record.clone());
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(path, serde_json::to_string_pretty(&records)?)?;
    tracing::debug!(path = %path.display(), total = records.len(), "saved calculation record");
    Ok(())
}
