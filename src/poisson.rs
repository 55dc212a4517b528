/// P(k; λ) = e^(−λ) · λ^k / k!, evaluated with the multiplicative
/// recurrence so `λ = 0` falls out naturally as P(0) = 1, P(k>0) = 0
/// (0^0 treated as 1).
pub fn pmf(k: u8, lambda: f64) -> f64 {
    let lambda = lambda.max(0.0);
    let mut p = (-lambda).exp();
    for i in 1..=u32::from(k) {
        p *= lambda / f64::from(i);
    }
    p
}

/// Per-goal-count probabilities for k = 0..=max_goals.
///
/// The tail above `max_goals` is truncated and left missing here, so the
/// entries sum to strictly less than 1 whenever λ > 0. The market deriver
/// renormalizes the joint grid in one place instead of patching each
/// marginal table.
pub fn goal_distribution(lambda: f64, max_goals: u8) -> Vec<f64> {
    let lambda = lambda.max(0.0);
    let mut out = Vec::with_capacity(max_goals as usize + 1);
    let mut p = (-lambda).exp();
    out.push(p);
    for k in 1..=u32::from(max_goals) {
        p *= lambda / f64::from(k);
        out.push(p);
    }
    out
}
