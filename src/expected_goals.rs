use crate::types::{LeagueBaseline, VenueStrength};

/// Expected goals for each side, home first.
///
/// Each side's rate is its attack multiplier times the opponent's defense
/// weakness times the league base rate for that venue. The league's
/// home-advantage factor scales the home rate only; the away rate stays on
/// the raw away base. That asymmetry is the model, not an oversight.
pub fn expected_goals(
    home: VenueStrength,
    away: VenueStrength,
    baseline: &LeagueBaseline,
) -> (f64, f64) {
    let home_xg =
        home.attack * away.defense * baseline.home_goals * baseline.home_advantage_factor;
    let away_xg = away.attack * home.defense * baseline.away_goals;

    // Validated inputs cannot go negative; the floor covers direct callers
    // that skip the engine boundary.
    (home_xg.max(0.0), away_xg.max(0.0))
}
