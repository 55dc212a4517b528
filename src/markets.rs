use std::cmp::Ordering;

use tracing::warn;

use crate::types::{
    MatchPrediction, OverUnderSplit, Prob3, ScoreProbability, OVER_UNDER_LINES, TOP_SCORELINES,
};

/// Builds the joint score grid from the two marginal tables and derives
/// every market from it in a single pass.
///
/// The grid only captures goals up to the cap, so its total mass falls
/// short of 1; every market is divided by that mass to restore closure.
/// BTTS is divided by the same mass as the rest, which slightly misstates
/// it (its truncation loss is not proportional to the grid's); the
/// approximation is intentional and kept.
pub fn derive_prediction(
    home_dist: &[f64],
    away_dist: &[f64],
    home_xg: f64,
    away_xg: f64,
    home_team: &str,
    away_team: &str,
) -> MatchPrediction {
    let mut win = 0.0_f64;
    let mut draw = 0.0_f64;
    let mut loss = 0.0_f64;
    let mut btts = 0.0_f64;
    let mut total_le = [0.0_f64; 4];
    let mut cells = Vec::with_capacity(home_dist.len() * away_dist.len());

    for (h, ph) in home_dist.iter().enumerate() {
        for (a, pa) in away_dist.iter().enumerate() {
            // Independence between the two sides' goal counts is the
            // modeling assumption the whole grid rests on.
            let p = ph * pa;

            match h.cmp(&a) {
                Ordering::Greater => win += p,
                Ordering::Equal => draw += p,
                Ordering::Less => loss += p,
            }
            if h > 0 && a > 0 {
                btts += p;
            }
            for (threshold, acc) in total_le.iter_mut().enumerate() {
                if h + a <= threshold {
                    *acc += p;
                }
            }
            cells.push(ScoreProbability {
                home_goals: h as u8,
                away_goals: a as u8,
                probability: p,
            });
        }
    }

    // Equals the sum of every grid cell: each cell lands in exactly one of
    // the three outcome buckets.
    let total_mass = win + draw + loss;
    if total_mass <= 0.0 {
        warn!(
            home_team,
            away_team, home_xg, away_xg, "score grid holds no probability mass, returning zeros"
        );
        return zeroed_prediction(home_team, away_team, home_xg, away_xg);
    }
    let inv = 1.0 / total_mass;

    let mut over_under = [OverUnderSplit {
        line: 0.0,
        over: 0.0,
        under: 0.0,
    }; 4];
    for (i, split) in over_under.iter_mut().enumerate() {
        let under = total_le[i] * inv;
        *split = OverUnderSplit {
            line: OVER_UNDER_LINES[i],
            over: 1.0 - under,
            under,
        };
    }

    // Stable sort: ties keep grid order (home goals ascending, then away
    // goals ascending), so equal-probability scorelines rank reproducibly.
    cells.sort_by(|x, y| {
        y.probability
            .partial_cmp(&x.probability)
            .unwrap_or(Ordering::Equal)
    });
    let top_scorelines = cells
        .into_iter()
        .take(TOP_SCORELINES)
        .map(|mut cell| {
            cell.probability *= inv;
            cell
        })
        .collect();

    MatchPrediction {
        home_team: home_team.to_string(),
        away_team: away_team.to_string(),
        home_xg,
        away_xg,
        outcome: Prob3 {
            home: win * inv,
            draw: draw * inv,
            away: loss * inv,
        },
        btts: btts * inv,
        over_under,
        top_scorelines,
    }
}

/// Never reachable through validated inputs; if it fires, something
/// upstream broke its contract and the caller should treat the zeros as a
/// flag, not a forecast.
fn zeroed_prediction(
    home_team: &str,
    away_team: &str,
    home_xg: f64,
    away_xg: f64,
) -> MatchPrediction {
    MatchPrediction {
        home_team: home_team.to_string(),
        away_team: away_team.to_string(),
        home_xg,
        away_xg,
        outcome: Prob3::ZERO,
        btts: 0.0,
        over_under: OVER_UNDER_LINES.map(|line| OverUnderSplit {
            line,
            over: 0.0,
            under: 0.0,
        }),
        top_scorelines: Vec::new(),
    }
}
