use chrono::{DateTime, Utc};
use serde::Serialize;

/// Practice emphasis for a handicap band. The bands run from fundamentals
/// at high handicaps down to fine-grained scoring work near scratch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Focus {
    Fundamentals,
    ApproachPlay,
    ShortGame,
    Scoring,
}

impl Focus {
    pub fn for_index(index: f64) -> Self {
        if index >= 25.0 {
            Focus::Fundamentals
        } else if index >= 15.0 {
            Focus::ApproachPlay
        } else if index >= 5.0 {
            Focus::ShortGame
        } else {
            Focus::Scoring
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Focus::Fundamentals => "full swing fundamentals and course management",
            Focus::ApproachPlay => "approach play and greens in regulation",
            Focus::ShortGame => "short game and putting under pressure",
            Focus::Scoring => "scoring consistency and shot shaping",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Milestone {
    pub month: u32,
    pub target_index: f64,
    pub focus: Focus,
}

#[derive(Debug, Clone, Serialize)]
pub struct TrainingPlan {
    pub current_handicap: f64,
    pub target_handicap: f64,
    pub timeline_months: u32,
    pub milestones: Vec<Milestone>,
    pub created_at: DateTime<Utc>,
}

impl TrainingPlan {
    /// Build a plan with one milestone per month, stepping the index down
    /// linearly from current to target. Inputs are assumed validated
    /// (target below current, months at least 1).
    pub fn build(current_handicap: f64, target_handicap: f64, timeline_months: u32) -> Self {
        let step = (current_handicap - target_handicap) / f64::from(timeline_months);
        let milestones = (1..=timeline_months)
            .map(|month| {
                let raw = current_handicap - step * f64::from(month);
                let target_index = (raw * 10.0).round() / 10.0;
                Milestone {
                    month,
                    target_index,
                    focus: Focus::for_index(target_index),
                }
            })
            .collect();

        TrainingPlan {
            current_handicap,
            target_handicap,
            timeline_months,
            milestones,
            created_at: Utc::now(),
        }
    }
}
