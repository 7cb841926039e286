pub mod aggregate;
pub mod differential;

use crate::error::Result;
use crate::types::round::GolfRound;

/// Compute the handicap index for a set of rounds: one score differential
/// per round, then the tiered best-of aggregation. Fails on the first round
/// with an invalid slope; no partial index is ever returned.
pub fn calculate(rounds: &[GolfRound]) -> Result<f64> {
    let mut differentials = Vec::with_capacity(rounds.len());
    for round in rounds {
        differentials.push(round.differential()?);
    }
    tracing::debug!(
        rounds = rounds.len(),
        "aggregating score differentials"
    );
    Ok(aggregate::aggregate(&differentials))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FairwayError;

    fn round(score: i32, course_rating: f64, slope_rating: i32) -> GolfRound {
        GolfRound {
            course_name: "Test Links".to_string(),
            score,
            course_rating,
            slope_rating,
            played_at: None,
        }
    }

    #[test]
    fn no_rounds_yields_zero_index() {
        let index = calculate(&[]).expect("empty input is not an error");
        assert_eq!(index, 0.0);
    }

    #[test]
    fn three_rounds_use_the_lowest_differential_with_adjustment() {
        // slope 113 makes each differential exactly score - rating:
        // 9.8, 10.2, 12.5 -> min 9.8 - 2.0 = 7.8
        let rounds = [
            round(81, 71.2, 113),
            round(82, 71.8, 113),
            round(85, 72.5, 113),
        ];
        let index = calculate(&rounds).expect("rounds are valid");
        assert_eq!(index, 7.8);
    }

    #[test]
    fn six_rounds_average_the_best_two() {
        let rounds: Vec<GolfRound> = (76..=81).map(|score| round(score, 71.0, 113)).collect();
        let index = calculate(&rounds).expect("rounds are valid");
        assert_eq!(index, 5.5);
    }

    #[test]
    fn zero_slope_fails_the_whole_batch() {
        let rounds = [round(81, 71.2, 113), round(90, 72.0, 0)];
        let err = calculate(&rounds).expect_err("zero slope must abort");
        assert!(matches!(err, FairwayError::InvalidSlopeRating(0)));
    }

    #[test]
    fn input_order_does_not_matter() {
        let forward = [
            round(81, 71.2, 125),
            round(88, 70.0, 140),
            round(95, 73.5, 110),
            round(84, 72.0, 130),
        ];
        let mut reversed = forward.clone();
        reversed.reverse();
        assert_eq!(
            calculate(&forward).expect("valid"),
            calculate(&reversed).expect("valid")
        );
    }
}
