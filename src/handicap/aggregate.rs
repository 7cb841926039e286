/// One row of the handicap tier policy: for a round count in
/// `min_rounds..=max_rounds`, average the `best_of` lowest differentials and
/// subtract `adjustment`. Adjustment rows always select a single value.
struct Tier {
    min_rounds: usize,
    max_rounds: usize,
    best_of: usize,
    adjustment: f64,
}

// World Handicap System selection table. Counts of 1-2 intentionally reuse
// the 3-round rule.
const TIERS: &[Tier] = &[
    Tier { min_rounds: 1, max_rounds: 3, best_of: 1, adjustment: 2.0 },
    Tier { min_rounds: 4, max_rounds: 4, best_of: 1, adjustment: 1.0 },
    Tier { min_rounds: 5, max_rounds: 5, best_of: 1, adjustment: 0.0 },
    Tier { min_rounds: 6, max_rounds: 8, best_of: 2, adjustment: 0.0 },
    Tier { min_rounds: 9, max_rounds: 11, best_of: 3, adjustment: 0.0 },
    Tier { min_rounds: 12, max_rounds: 14, best_of: 4, adjustment: 0.0 },
    Tier { min_rounds: 15, max_rounds: 16, best_of: 5, adjustment: 0.0 },
    Tier { min_rounds: 17, max_rounds: 18, best_of: 6, adjustment: 0.0 },
    Tier { min_rounds: 19, max_rounds: 19, best_of: 7, adjustment: 0.0 },
    Tier { min_rounds: 20, max_rounds: usize::MAX, best_of: 8, adjustment: 0.0 },
];

/// Reduce a set of score differentials to a handicap index, rounded to one
/// decimal place. An empty input yields 0.0 (the CLI layer surfaces that as
/// a "no data" warning). Order of the input is irrelevant.
pub fn aggregate(differentials: &[f64]) -> f64 {
    let count = differentials.len();
    if count == 0 {
        return 0.0;
    }

    let tier = TIERS
        .iter()
        .find(|tier| count >= tier.min_rounds && count <= tier.max_rounds)
        .unwrap_or_else(|| unreachable!("tier table covers every non-zero count"));

    let mut sorted = differentials.to_vec();
    sorted.sort_by(f64::total_cmp);

    let selected = &sorted[..tier.best_of];
    let mean = selected.iter().sum::<f64>() / tier.best_of as f64;
    round_to_tenth(mean - tier.adjustment)
}

// Half-away-from-zero at the tenths place, which is what f64::round does.
fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
