use crate::types::{TeamStrength, VenueStrength};

/// Effective multipliers for one fixture: the home side plays on its home
/// context, the away side on its away context. With `use_fallback` both
/// sides are treated as exactly league average; whether the stored sample
/// is large enough to trust is the caller's call, not this module's.
pub fn resolve(
    home: &TeamStrength,
    away: &TeamStrength,
    use_fallback: bool,
) -> (VenueStrength, VenueStrength) {
    if use_fallback {
        return (VenueStrength::LEAGUE_AVERAGE, VenueStrength::LEAGUE_AVERAGE);
    }
    (home.home, away.away)
}
