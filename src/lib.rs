//! Match outcome prediction from relative team strength.
//!
//! Converts two teams' attack/defense multipliers plus a league baseline
//! into a truncated two-dimensional Poisson score distribution, then reads
//! every market off that one grid: 1X2, both-teams-to-score, four
//! over/under lines and the ranked most-likely scorelines. The whole
//! computation is a pure function of its inputs: no I/O, no shared state,
//! safe to call from any number of threads.

pub mod engine;
pub mod error;
pub mod expected_goals;
pub mod leagues;
pub mod markets;
pub mod poisson;
pub mod strength;
pub mod types;

pub use engine::{predict, predict_batch};
pub use error::PredictionError;
pub use types::{
    LeagueBaseline, MatchInput, MatchPrediction, OverUnderSplit, Prob3, ScoreProbability,
    TeamStrength, VenueStrength, MAX_GOALS, OVER_UNDER_LINES, TOP_SCORELINES,
};
