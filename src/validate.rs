use crate::error::{FairwayError, Result};
use crate::types::config::RoundBounds;
use crate::types::round::GolfRound;

/// Bound violations for one round, one message per field.
pub fn round_errors(round: &GolfRound, bounds: &RoundBounds) -> Vec<String> {
    let mut errors = Vec::new();

    if round.course_name.trim().chars().count() < 3 {
        errors.push("course name must be at least 3 characters".to_string());
    }
    if round.score < bounds.min_score || round.score > bounds.max_score {
        errors.push(format!(
            "score {} outside {}..={}",
            round.score, bounds.min_score, bounds.max_score
        ));
    }
    if round.course_rating <= bounds.min_course_rating
        || round.course_rating >= bounds.max_course_rating
    {
        errors.push(format!(
            "course rating {} outside ({}, {})",
            round.course_rating, bounds.min_course_rating, bounds.max_course_rating
        ));
    }
    if round.slope_rating < bounds.min_slope_rating
        || round.slope_rating > bounds.max_slope_rating
    {
        errors.push(format!(
            "slope rating {} outside {}..={}",
            round.slope_rating, bounds.min_slope_rating, bounds.max_slope_rating
        ));
    }

    errors
}

/// Validate a batch of captured rounds, collecting every violation before
/// failing so the player sees all of them at once.
pub fn validate_rounds(rounds: &[GolfRound], bounds: &RoundBounds) -> Result<()> {
    let mut messages = Vec::new();
    for (index, round) in rounds.iter().enumerate() {
        for error in round_errors(round, bounds) {
            messages.push(format!("round {}: {}", index + 1, error));
        }
    }

    if messages.is_empty() {
        Ok(())
    } else {
        Err(FairwayError::InvalidRound(messages.join("; ")))
    }
}

const HANDICAP_RANGE: std::ops::RangeInclusive<f64> = 0.0..=54.0;

pub fn validate_plan(
    current_handicap: f64,
    target_handicap: f64,
    timeline_months: u32,
    max_timeline_months: u32,
) -> Result<()> {
    let mut messages = Vec::new();

    if !HANDICAP_RANGE.contains(&current_handicap) {
        messages.push(format!(
            "current handicap {current_handicap} outside 0.0..=54.0"
        ));
    }
    if !HANDICAP_RANGE.contains(&target_handicap) {
        messages.push(format!(
            "target handicap {target_handicap} outside 0.0..=54.0"
        ));
    }
    if target_handicap >= current_handicap {
        messages.push("target handicap must be lower than current handicap".to_string());
    }
    if timeline_months == 0 || timeline_months > max_timeline_months {
        messages.push(format!(
            "timeline of {timeline_months} months outside 1..={max_timeline_months}"
        ));
    }

    if messages.is_empty() {
        Ok(())
    } else {
        Err(FairwayError::InvalidPlan(messages.join("; ")))
    }
}
