//! Strategy resolution — the greedy best-response rule and the distinct
//! bootstrap rule used before any payoffs exist.
//!
//! Both rules carry the hard GDP-per-capita eligibility gate and resolve
//! ties to free-riding (strict inequalities throughout).

use crate::country::Strategy;

/// Pre-round-1 rule: adopt when the static economic gains beat the
/// baseline cost. Deliberately distinct from the in-loop best response,
/// since no payoffs exist yet to compare.
pub fn initial_strategy(
    economic_gains: f64,
    baseline_cost: f64,
    gdp_per_capita: f64,
    min_gdp_threshold: f64,
) -> Strategy {
    if economic_gains > baseline_cost && gdp_per_capita > min_gdp_threshold {
        Strategy::Adopt
    } else {
        Strategy::FreeRide
    }
}

/// In-loop rule: adopt when adopting strictly beats free-riding. The GDP
/// gate filters independently of the payoff comparison; an ineligible
/// country never adopts, however favorable the payoffs.
pub fn best_response(
    payoff_adopt: f64,
    payoff_free_ride: f64,
    gdp_per_capita: f64,
    min_gdp_threshold: f64,
) -> Strategy {
    if payoff_adopt > payoff_free_ride && gdp_per_capita > min_gdp_threshold {
        Strategy::Adopt
    } else {
        Strategy::FreeRide
    }
}
