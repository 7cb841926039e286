use crate::error::Result;
use crate::types::round::GolfRound;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// How the index was derived. Below the full 20-round sample the index is a
/// prediction; at 20 or more rounds it follows the official selection rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CalculationMethod {
    Predicted,
    Official,
}

impl CalculationMethod {
    pub fn for_round_count(count: usize) -> Self {
        if count >= 20 {
            CalculationMethod::Official
        } else {
            CalculationMethod::Predicted
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CalculationMethod::Predicted => "predicted",
            CalculationMethod::Official => "official",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RoundSummary {
    pub course_name: String,
    pub score: i32,
    pub course_rating: f64,
    pub slope_rating: i32,
    pub differential: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct HandicapReport {
    pub handicap_index: f64,
    pub method: CalculationMethod,
    pub round_count: usize,
    pub rounds: Vec<RoundSummary>,
    pub computed_at: DateTime<Utc>,
}

impl HandicapReport {
    pub fn new(handicap_index: f64, rounds: &[GolfRound]) -> Result<Self> {
        let mut summaries = Vec::with_capacity(rounds.len());
        for round in rounds {
            summaries.push(RoundSummary {
                course_name: round.course_name.clone(),
                score: round.score,
                course_rating: round.course_rating,
                slope_rating: round.slope_rating,
                differential: round.differential()?,
            });
        }
        Ok(HandicapReport {
            handicap_index,
            method: CalculationMethod::for_round_count(rounds.len()),
            round_count: rounds.len(),
            rounds: summaries,
            computed_at: Utc::now(),
        })
    }

    /// Plain-language line shown at the foot of the report.
    pub fn summary(&self) -> String {
        format!(
            "Your {} handicap index is {:.1}, based on {} round{}.",
            self.method.label(),
            self.handicap_index,
            self.round_count,
            if self.round_count == 1 { "" } else { "s" }
        )
    }
}
