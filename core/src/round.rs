//! Round state update — the per-round formulas, applied to every country
//! against the single scalar W_t read at round start.

use crate::{country::CountryState, types::Round};

/// Adoption cost this round, decayed from the baseline by global
/// adoption. Not clamped: Z(1 + W_t) > 1 drives the cost negative, which
/// the model accepts (adoption turns into a subsidy).
pub fn decayed_cost(baseline_cost: f64, w: f64, z: f64) -> f64 {
    baseline_cost * (1.0 - z * (1.0 + w))
}

/// Political pressure against free-riding. Compounds from the previous
/// round's value, so it is path-dependent on the full W_t history and
/// unbounded.
pub fn grown_pressure(prev_pressure: f64, w: f64, gamma: f64) -> f64 {
    prev_pressure * gamma * (1.0 + w)
}

/// Urgency scalar U_t = (t/N)^λ × 0.1, strictly increasing in t for
/// λ > 0 and in (0, 0.1] over rounds 1..=N.
pub fn urgency(round: Round, total_rounds: u64, lambda_u: f64) -> f64 {
    (round as f64 / total_rounds as f64).powf(lambda_u) * 0.1
}

/// Anticipatory benefit, paid only while the threshold is uncrossed.
pub fn perceived_climate_benefit(crossed: bool, urgency: f64, climate_payoff: f64) -> f64 {
    if crossed {
        0.0
    } else {
        urgency * climate_payoff * 0.25
    }
}

/// Realized benefit once the threshold is crossed. Deliberately ignores
/// urgency and the 0.25 anticipatory scaling.
pub fn real_climate_benefit(crossed: bool, climate_payoff: f64) -> f64 {
    if crossed {
        climate_payoff
    } else {
        0.0
    }
}

/// Produce the next state for one country from the previous round's
/// state, the start-of-round W_t, and this round's urgency and threshold
/// dummy. Strategy is left untouched; the resolver runs once all
/// payoffs exist.
pub fn update_country(
    prev: &CountryState,
    w: f64,
    urgency: f64,
    crossed: bool,
    z: f64,
    gamma: f64,
) -> CountryState {
    let cost = decayed_cost(prev.baseline_cost, w, z);
    let pressure = grown_pressure(prev.pressure, w, gamma);
    let perceived_benefit = perceived_climate_benefit(crossed, urgency, prev.climate_payoff);
    let real_benefit = real_climate_benefit(crossed, prev.climate_payoff);

    // Adopters take the economics and both benefit channels but pay the
    // cost; free-riders keep the realized benefit net of pressure.
    let payoff_adopt = prev.economic_gains + perceived_benefit + real_benefit - cost;
    let payoff_free_ride = real_benefit - pressure;

    CountryState {
        cost,
        pressure,
        perceived_benefit,
        real_benefit,
        payoff_adopt,
        payoff_free_ride,
        ..prev.clone()
    }
}
