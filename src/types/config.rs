use serde::Deserialize;

/// Merged `fairway.toml` configuration. Every section is optional; absent
/// values fall back to the defaults below.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FairwayConfig {
    pub files: Option<FilesConfig>,
    pub validation: Option<ValidationConfig>,
    pub plan: Option<PlanConfig>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FilesConfig {
    pub rounds: Option<String>,
    pub history: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ValidationConfig {
    pub min_score: Option<i32>,
    pub max_score: Option<i32>,
    pub min_course_rating: Option<f64>,
    pub max_course_rating: Option<f64>,
    pub min_slope_rating: Option<i32>,
    pub max_slope_rating: Option<i32>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlanConfig {
    pub max_timeline_months: Option<u32>,
}

/// Capture-layer bounds for a single round. Defaults follow the usual
/// ranges for real courses: ratings sit between 60 and 80 and slopes
/// between 55 and 155, both exclusive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoundBounds {
    pub min_score: i32,
    pub max_score: i32,
    pub min_course_rating: f64,
    pub max_course_rating: f64,
    pub min_slope_rating: i32,
    pub max_slope_rating: i32,
}

impl Default for RoundBounds {
    fn default() -> Self {
        RoundBounds {
            min_score: 51,
            max_score: 199,
            min_course_rating: 60.0,
            max_course_rating: 80.0,
            min_slope_rating: 56,
            max_slope_rating: 154,
        }
    }
}

pub const DEFAULT_ROUNDS_FILE: &str = "rounds.toml";
pub const DEFAULT_HISTORY_FILE: &str = ".fairway/history.json";
pub const DEFAULT_MAX_TIMELINE_MONTHS: u32 = 36;

impl FairwayConfig {
    pub fn round_bounds(&self) -> RoundBounds {
        let defaults = RoundBounds::default();
        let validation = self.validation.clone().unwrap_or_default();
        RoundBounds {
            min_score: validation.min_score.unwrap_or(defaults.min_score),
            max_score: validation.max_score.unwrap_or(defaults.max_score),
            min_course_rating: validation
                .min_course_rating
                .unwrap_or(defaults.min_course_rating),
            max_course_rating: validation
                .max_course_rating
                .unwrap_or(defaults.max_course_rating),
            min_slope_rating: validation
                .min_slope_rating
                .unwrap_or(defaults.min_slope_rating),
            max_slope_rating: validation
                .max_slope_rating
                .unwrap_or(defaults.max_slope_rating),
        }
    }

    pub fn max_timeline_months(&self) -> u32 {
        self.plan
            .as_ref()
            .and_then(|plan| plan.max_timeline_months)
            .unwrap_or(DEFAULT_MAX_TIMELINE_MONTHS)
    }

    pub fn rounds_file(&self) -> String {
        self.files
            .as_ref()
            .and_then(|files| files.rounds.clone())
            .unwrap_or_else(|| DEFAULT_ROUNDS_FILE.to_string())
    }

    pub fn history_file(&self) -> String {
        self.files
            .as_ref()
            .and_then(|files| files.history.clone())
            .unwrap_or_else(|| DEFAULT_HISTORY_FILE.to_string())
    }
}
