use crate::error::Result;
use crate::handicap::differential::differential;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One recorded round of golf, as captured from the player.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GolfRound {
    pub course_name: String,
    /// Gross stroke count for the round.
    pub score: i32,
    /// Expected scratch score for the course.
    pub course_rating: f64,
    /// Relative course difficulty; 113 is standard.
    pub slope_rating: i32,
    pub played_at: Option<NaiveDate>,
}

impl GolfRound {
    pub fn differential(&self) -> Result<f64> {
        differential(self.score, self.course_rating, self.slope_rating)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_toml() {
        let round = GolfRound {
            course_name: "Pebble Creek".to_string(),
            score: 90,
            course_rating: 72.0,
            slope_rating: 130,
            played_at: NaiveDate::from_ymd_opt(2025, 6, 14),
        };

        let encoded = toml::to_string(&round).expect("round should serialize");
        let decoded: GolfRound = toml::from_str(&encoded).expect("round should parse");
        assert_eq!(decoded.course_name, "Pebble Creek");
        assert_eq!(decoded.score, 90);
        assert_eq!(decoded.slope_rating, 130);
        assert_eq!(decoded.played_at, NaiveDate::from_ymd_opt(2025, 6, 14));
    }

    #[test]
    fn differential_delegates_to_the_calculator() {
        let round = GolfRound {
            course_name: "Pebble Creek".to_string(),
            score: 90,
            course_rating: 72.0,
            slope_rating: 130,
            played_at: None,
        };
        let value = round.differential().expect("slope is non-zero");
        assert!((value - 15.646).abs() < 1e-3);
    }
}
