use serde::{Deserialize, Serialize};

/// Goal cap per side. The score grid covers 0..=MAX_GOALS goals for each
/// team; probability mass beyond the cap is recovered by renormalizing the
/// grid in the market deriver.
pub const MAX_GOALS: u8 = 5;

/// How many exact scorelines a prediction ranks.
pub const TOP_SCORELINES: usize = 5;

/// Total-goals lines quoted in every prediction. Line N.5 splits the grid
/// at cumulative total N.
pub const OVER_UNDER_LINES: [f64; 4] = [0.5, 1.5, 2.5, 3.5];

/// Per-competition scoring rates: average goals scored by the home and the
/// away side across the league. Reference data, never mutated by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LeagueBaseline {
    pub home_goals: f64,
    pub away_goals: f64,
    /// Multiplier applied to the home side's expected goals only. 1.0 for
    /// most competitions; a handful of leagues carry an amplified value.
    #[serde(default = "default_home_advantage")]
    pub home_advantage_factor: f64,
}

fn default_home_advantage() -> f64 {
    1.0
}

impl LeagueBaseline {
    pub fn new(home_goals: f64, away_goals: f64) -> Self {
        Self {
            home_goals,
            away_goals,
            home_advantage_factor: 1.0,
        }
    }

    pub fn with_home_advantage(mut self, factor: f64) -> Self {
        self.home_advantage_factor = factor;
        self
    }
}

/// Relative multipliers for one venue context. 1.0 means exactly
/// league-average; attack scales goals scored, defense scales goals
/// conceded.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VenueStrength {
    pub attack: f64,
    pub defense: f64,
}

impl VenueStrength {
    pub const LEAGUE_AVERAGE: Self = Self {
        attack: 1.0,
        defense: 1.0,
    };
}

impl Default for VenueStrength {
    fn default() -> Self {
        Self::LEAGUE_AVERAGE
    }
}

/// A team's stored multipliers, one set per venue context.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TeamStrength {
    pub home: VenueStrength,
    pub away: VenueStrength,
}

impl TeamStrength {
    /// Same multipliers at both venues. Mostly useful for tests and for
    /// callers that do not track venue splits.
    pub fn uniform(attack: f64, defense: f64) -> Self {
        let venue = VenueStrength { attack, defense };
        Self {
            home: venue,
            away: venue,
        }
    }
}

/// Everything one prediction needs. Built fresh per request; the engine
/// keeps no state between calls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchInput {
    pub home_team: String,
    pub away_team: String,
    pub home: TeamStrength,
    pub away: TeamStrength,
    pub baseline: LeagueBaseline,
    /// Set by the caller when a team's historical sample is too thin to
    /// trust; forces every multiplier to exactly league average.
    #[serde(default)]
    pub use_fallback: bool,
}

/// One cell of the score grid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreProbability {
    pub home_goals: u8,
    pub away_goals: u8,
    pub probability: f64,
}

/// Over/under split for one total-goals line. `over + under` sums to 1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OverUnderSplit {
    pub line: f64,
    pub over: f64,
    pub under: f64,
}

/// Three-way outcome probabilities, home side's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Prob3 {
    pub home: f64,
    pub draw: f64,
    pub away: f64,
}

impl Prob3 {
    pub const ZERO: Self = Self {
        home: 0.0,
        draw: 0.0,
        away: 0.0,
    };

    pub fn sum(&self) -> f64 {
        self.home + self.draw + self.away
    }
}

/// Full prediction for one fixture. Immutable once returned; the
/// presentation layer consumes it read-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchPrediction {
    pub home_team: String,
    pub away_team: String,
    pub home_xg: f64,
    pub away_xg: f64,
    pub outcome: Prob3,
    pub btts: f64,
    pub over_under: [OverUnderSplit; 4],
    pub top_scorelines: Vec<ScoreProbability>,
}
