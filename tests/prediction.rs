use matchcast::types::{LeagueBaseline, MatchInput, TeamStrength};
use matchcast::{predict, PredictionError, TOP_SCORELINES};

fn sample_baseline() -> LeagueBaseline {
    LeagueBaseline::new(1.45, 1.05).with_home_advantage(1.05)
}

fn sample_input(
    home_attack: f64,
    home_defense: f64,
    away_attack: f64,
    away_defense: f64,
) -> MatchInput {
    MatchInput {
        home_team: "HOM".to_string(),
        away_team: "AWY".to_string(),
        home: TeamStrength::uniform(home_attack, home_defense),
        away: TeamStrength::uniform(away_attack, away_defense),
        baseline: sample_baseline(),
        use_fallback: false,
    }
}

#[test]
fn outcome_probabilities_close_to_one() {
    let p = predict(&sample_input(1.2, 0.8, 1.0, 1.0)).unwrap();
    assert!((p.outcome.sum() - 1.0).abs() < 1e-9);
}

#[test]
fn every_over_under_pair_closes() {
    let p = predict(&sample_input(1.1, 0.9, 0.95, 1.05)).unwrap();
    assert_eq!(p.over_under.len(), 4);
    for split in &p.over_under {
        assert!((split.over + split.under - 1.0).abs() < 1e-9);
        assert!(split.over >= 0.0 && split.over <= 1.0);
    }
}

#[test]
fn strong_home_side_concrete_scenario() {
    let p = predict(&sample_input(1.2, 0.8, 1.0, 1.0)).unwrap();

    assert!((p.home_xg - 1.827).abs() < 1e-9);
    assert!((p.away_xg - 0.84).abs() < 1e-9);
    assert!(p.outcome.home > p.outcome.away);

    // With rates of roughly 1.8 vs 0.8 the modal score is a tight home win.
    let top = &p.top_scorelines[0];
    assert_eq!((top.home_goals, top.away_goals), (1, 0));
}

#[test]
fn fallback_equals_explicit_league_average() {
    let mut via_flag = sample_input(1.7, 0.4, 0.6, 1.9);
    via_flag.use_fallback = true;

    let explicit = sample_input(1.0, 1.0, 1.0, 1.0);

    assert_eq!(predict(&via_flag).unwrap(), predict(&explicit).unwrap());
}

#[test]
fn identical_inputs_give_identical_output() {
    let input = sample_input(1.15, 0.85, 1.05, 0.95);
    assert_eq!(predict(&input).unwrap(), predict(&input).unwrap());
}

#[test]
fn more_home_firepower_never_hurts_the_home_win() {
    let base = predict(&sample_input(1.2, 0.8, 1.0, 1.0)).unwrap();
    let nudged = predict(&sample_input(1.25, 0.8, 1.0, 1.0)).unwrap();
    assert!(nudged.home_xg > base.home_xg);
    assert!(nudged.outcome.home >= base.outcome.home);
}

#[test]
fn scorelines_rank_by_descending_probability() {
    let p = predict(&sample_input(1.3, 0.75, 1.1, 0.9)).unwrap();

    assert_eq!(p.top_scorelines.len(), TOP_SCORELINES);
    for pair in p.top_scorelines.windows(2) {
        assert!(pair[0].probability >= pair[1].probability);
    }

    let top_sum: f64 = p.top_scorelines.iter().map(|c| c.probability).sum();
    assert!(top_sum <= 1.0 + 1e-9);
    assert!(top_sum > 0.0);
}

#[test]
fn zero_attack_collapses_that_side() {
    let p = predict(&sample_input(0.0, 1.0, 1.0, 1.0)).unwrap();

    assert_eq!(p.home_xg, 0.0);
    // The home side cannot outscore anyone without a goal.
    assert_eq!(p.outcome.home, 0.0);
    assert!(p.outcome.draw > 0.0);
    assert!((p.outcome.sum() - 1.0).abs() < 1e-9);
    assert_eq!(p.btts, 0.0);
}

#[test]
fn btts_stays_inside_the_unit_interval() {
    let p = predict(&sample_input(1.4, 0.7, 1.2, 0.85)).unwrap();
    assert!(p.btts > 0.0 && p.btts < 1.0);
}

#[test]
fn invalid_inputs_are_rejected_before_computing() {
    let mut negative = sample_input(1.0, 1.0, 1.0, 1.0);
    negative.home.home.attack = -0.5;
    assert!(matches!(
        predict(&negative),
        Err(PredictionError::InvalidStrength { .. })
    ));

    let mut non_finite = sample_input(1.0, 1.0, 1.0, 1.0);
    non_finite.baseline.away_goals = f64::INFINITY;
    assert!(matches!(
        predict(&non_finite),
        Err(PredictionError::InvalidBaseline { .. })
    ));
}
