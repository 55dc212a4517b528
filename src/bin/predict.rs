use std::fs;
use std::path::PathBuf;

use matchcast::leagues;
use matchcast::types::{LeagueBaseline, MatchInput, TeamStrength};

#[derive(Debug, serde::Deserialize)]
struct MatchCase {
    home: String,
    away: String,
    #[serde(default)]
    league: Option<String>,
    #[serde(default)]
    baseline: Option<LeagueBaseline>,
    #[serde(default)]
    home_strength: Option<TeamStrength>,
    #[serde(default)]
    away_strength: Option<TeamStrength>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("tests/fixtures/match_case.json"));

    let raw = fs::read_to_string(&path)?;
    let case: MatchCase = serde_json::from_str(&raw)?;

    let baseline = case
        .baseline
        .or_else(|| case.league.as_deref().and_then(leagues::baseline_for))
        .ok_or_else(|| {
            anyhow::anyhow!(
                "case needs an inline baseline or a known league (one of: {})",
                leagues::league_names().join(", ")
            )
        })?;

    // Missing strength records mean the data store had too thin a sample;
    // run the engine in league-average mode.
    let use_fallback = case.home_strength.is_none() || case.away_strength.is_none();
    let input = MatchInput {
        home_team: case.home,
        away_team: case.away,
        home: case.home_strength.unwrap_or_default(),
        away: case.away_strength.unwrap_or_default(),
        baseline,
        use_fallback,
    };

    let prediction = matchcast::predict(&input)?;

    println!("{} vs {}", prediction.home_team, prediction.away_team);
    if use_fallback {
        println!("(league-average fallback: no reliable strength data)");
    }
    println!(
        "expected goals  {:.2} - {:.2}",
        prediction.home_xg, prediction.away_xg
    );
    println!(
        "1X2             H {:>5.1}%  D {:>5.1}%  A {:>5.1}%",
        prediction.outcome.home * 100.0,
        prediction.outcome.draw * 100.0,
        prediction.outcome.away * 100.0
    );
    println!("both score      {:>5.1}%", prediction.btts * 100.0);
    for split in &prediction.over_under {
        println!(
            "total {:>3.1}       over {:>5.1}%  under {:>5.1}%",
            split.line,
            split.over * 100.0,
            split.under * 100.0
        );
    }
    println!("most likely scorelines:");
    for cell in &prediction.top_scorelines {
        println!(
            "  {}-{}  {:>5.1}%",
            cell.home_goals,
            cell.away_goals,
            cell.probability * 100.0
        );
    }

    Ok(())
}
