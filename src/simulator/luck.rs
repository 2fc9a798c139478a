use super::types::ExpectedRecord;

/// Scale simulated totals down to a one-opponent-per-week schedule.
/// `opponents_per_week` is `total_teams - 1`, derived from the league
/// rather than assumed to be 9.
pub fn expected_record(
    total_wins: u32,
    total_losses: u32,
    opponents_per_week: usize,
) -> ExpectedRecord {
    let divisor = opponents_per_week as f64;
    ExpectedRecord {
        wins: f64::from(total_wins) / divisor,
        losses: f64::from(total_losses) / divisor,
    }
}

/// Luck rating: how far the actual win count runs ahead of (positive) or
/// behind (negative) the expected one, as a ratio minus one.
///
/// Returns `None` when `expected_wins` is zero (a team with no simulated
/// wins all season); the ratio is undefined and the caller renders a dash
/// instead. This is a display derivation, never a fatal condition.
pub fn luck_rating(actual_wins: u32, expected_wins: f64, precision_digits: u32) -> Option<f64> {
    if expected_wins == 0.0 {
        return None;
    }
    let luck = f64::from(actual_wins) / expected_wins - 1.0;
    Some(round_to_digits(luck, precision_digits))
}

fn round_to_digits(value: f64, digits: u32) -> f64 {
    let factor = 10f64.powi(digits as i32);
    (value * factor).round() / factor
}
