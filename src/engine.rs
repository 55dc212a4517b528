use rayon::prelude::*;
use tracing::debug;

use crate::error::{PredictionError, Result};
use crate::expected_goals::expected_goals;
use crate::markets::derive_prediction;
use crate::poisson::goal_distribution;
use crate::strength;
use crate::types::{MatchInput, MatchPrediction, MAX_GOALS};

/// Runs the full pipeline for one fixture: validate, resolve strengths,
/// compute expected goals, build the two goal tables, derive the markets.
///
/// Either a complete, internally consistent prediction comes back or an
/// error does before any output is produced. There are no partial
/// results.
pub fn predict(input: &MatchInput) -> Result<MatchPrediction> {
    validate(input)?;

    let (home, away) = strength::resolve(&input.home, &input.away, input.use_fallback);
    let (home_xg, away_xg) = expected_goals(home, away, &input.baseline);
    debug!(
        home_team = %input.home_team,
        away_team = %input.away_team,
        home_xg,
        away_xg,
        fallback = input.use_fallback,
        "resolved expected goals"
    );

    let home_dist = goal_distribution(home_xg, MAX_GOALS);
    let away_dist = goal_distribution(away_xg, MAX_GOALS);

    Ok(derive_prediction(
        &home_dist,
        &away_dist,
        home_xg,
        away_xg,
        &input.home_team,
        &input.away_team,
    ))
}

/// Predicts a slice of fixtures in parallel. Each prediction is a pure
/// function of its own input, so the only coordination needed is the join.
pub fn predict_batch(inputs: &[MatchInput]) -> Vec<Result<MatchPrediction>> {
    inputs.par_iter().map(predict).collect()
}

fn validate(input: &MatchInput) -> Result<()> {
    let strengths = [
        ("home.home.attack", input.home.home.attack),
        ("home.home.defense", input.home.home.defense),
        ("home.away.attack", input.home.away.attack),
        ("home.away.defense", input.home.away.defense),
        ("away.home.attack", input.away.home.attack),
        ("away.home.defense", input.away.home.defense),
        ("away.away.attack", input.away.away.attack),
        ("away.away.defense", input.away.away.defense),
    ];
    for (field, value) in strengths {
        if !value.is_finite() || value < 0.0 {
            return Err(PredictionError::InvalidStrength { field, value });
        }
    }

    let baseline = [
        ("home_goals", input.baseline.home_goals),
        ("away_goals", input.baseline.away_goals),
        (
            "home_advantage_factor",
            input.baseline.home_advantage_factor,
        ),
    ];
    for (field, value) in baseline {
        if !value.is_finite() || value < 0.0 {
            return Err(PredictionError::InvalidBaseline { field, value });
        }
    }

    Ok(())
}
