//! Static baseline catalog for the competitions the surrounding
//! application ships with. Lookup only; team and league records proper
//! live in the application's data store.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::types::LeagueBaseline;

/// Home-advantage multiplier for the leagues where home crowds are worth
/// measurably more than the norm.
pub const AMPLIFIED_HOME_FACTOR: f64 = 1.05;

static CATALOG: Lazy<HashMap<&'static str, LeagueBaseline>> = Lazy::new(|| {
    HashMap::from([
        // The two national divisions run with the amplified factor.
        (
            "Brasileirão Série A",
            LeagueBaseline::new(1.47, 0.98).with_home_advantage(AMPLIFIED_HOME_FACTOR),
        ),
        (
            "Brasileirão Série B",
            LeagueBaseline::new(1.32, 0.95).with_home_advantage(AMPLIFIED_HOME_FACTOR),
        ),
        ("Premier League", LeagueBaseline::new(1.48, 1.18)),
        ("La Liga", LeagueBaseline::new(1.51, 1.12)),
        ("Bundesliga", LeagueBaseline::new(1.65, 1.35)),
        ("Serie A", LeagueBaseline::new(1.46, 1.18)),
        ("Ligue 1", LeagueBaseline::new(1.45, 1.10)),
    ])
});

pub fn baseline_for(league: &str) -> Option<LeagueBaseline> {
    CATALOG.get(league.trim()).copied()
}

pub fn league_names() -> Vec<&'static str> {
    let mut names: Vec<&'static str> = CATALOG.keys().copied().collect();
    names.sort_unstable();
    names
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn national_divisions_carry_the_amplified_factor() {
        let serie_a = baseline_for("Brasileirão Série A").unwrap();
        assert_eq!(serie_a.home_advantage_factor, AMPLIFIED_HOME_FACTOR);

        let premier = baseline_for("Premier League").unwrap();
        assert_eq!(premier.home_advantage_factor, 1.0);
    }

    #[test]
    fn lookup_trims_whitespace_and_rejects_unknowns() {
        assert!(baseline_for("  La Liga ").is_some());
        assert!(baseline_for("Conference of Nowhere").is_none());
    }
}
