use crate::error::CoreError;
use crate::model::Round;

/// Reject rounds that would corrupt averages or ratio-of-sums figures.
///
/// # Errors
/// Returns `CoreError::MalformedRound` for the first offending round.
pub fn validate_rounds(rounds: &[Round]) -> Result<(), CoreError> {
    rounds.iter().try_for_each(validate_round)
}

/// # Errors
/// Returns `CoreError::MalformedRound` describing the first broken rule.
pub fn validate_round(round: &Round) -> Result<(), CoreError> {
    let id = round.id;
    if round.holes != 9 && round.holes != 18 {
        return Err(CoreError::malformed(
            id,
            format!("holes must be 9 or 18, got {}", round.holes),
        ));
    }
    if let Some(score) = round.score {
        if score < 1 {
            return Err(CoreError::malformed(id, format!("score must be >= 1, got {score}")));
        }
    }
    check_pair(id, "fir", round.fir_hit, round.fir_total)?;
    check_pair(id, "gir", round.gir_hit, round.gir_total)?;
    for (name, value) in [("putts", round.putts), ("penalties", round.penalties)] {
        if value.is_some_and(|v| v < 0) {
            return Err(CoreError::malformed(id, format!("{name} must not be negative")));
        }
    }
    if let Some(slope) = round.slope {
        if !slope.is_finite() || slope <= 0.0 {
            return Err(CoreError::malformed(id, format!("slope must be positive, got {slope}")));
        }
    }
    if round.rating.is_some_and(|r| !r.is_finite()) {
        return Err(CoreError::malformed(id, "rating must be a finite number"));
    }
    Ok(())
}

fn check_pair(id: i64, name: &str, hit: Option<i32>, total: Option<i32>) -> Result<(), CoreError> {
    match (hit, total) {
        (None, None) => Ok(()),
        (Some(hit), Some(total)) => {
            if hit < 0 || total < 0 {
                Err(CoreError::malformed(id, format!("{name} counts must not be negative")))
            } else if hit > total {
                Err(CoreError::malformed(
                    id,
                    format!("{name}_hit ({hit}) exceeds {name}_total ({total})"),
                ))
            } else {
                Ok(())
            }
        }
        _ => Err(CoreError::malformed(
            id,
            format!("{name}_hit and {name}_total must be recorded together"),
        )),
    }
}
