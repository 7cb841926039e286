use crate::error::{FairwayError, Result};

/// Slope rating of a course of standard playing difficulty.
pub const STANDARD_SLOPE: f64 = 113.0;

/// Score differential for a single round:
/// `(113 / slope_rating) * (score - course_rating)`.
///
/// No rounding happens here; full precision is carried into aggregation.
/// Range validation of the inputs belongs to the capture layer — the only
/// condition rejected here is a zero slope, which would divide by zero.
pub fn differential(score: i32, course_rating: f64, slope_rating: i32) -> Result<f64> {
    if slope_rating == 0 {
        return Err(FairwayError::InvalidSlopeRating(slope_rating));
    }
    Ok((STANDARD_SLOPE / f64::from(slope_rating)) * (f64::from(score) - course_rating))
}
