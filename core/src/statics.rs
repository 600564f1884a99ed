//! Static game variables — time-invariant per-country parameters derived
//! once from the raw indicators and the normalized shares.

use crate::{
    country::{CountryState, RawCountry, Strategy},
    error::{GameError, GameResult},
    influence::InfluenceShares,
};
use serde::{Deserialize, Serialize};

/// Scale constants for the static variables.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ScaleConstants {
    /// Ceiling of the dirtiness factor alpha.
    pub base_alpha: f64,
    /// Scales costs, gains, and pressure into comparable magnitudes.
    pub scaling_factor: f64,
    /// Scales the climate payoff ceiling.
    pub payoff_scale: f64,
}

impl Default for ScaleConstants {
    fn default() -> Self {
        Self {
            base_alpha: 1.0,
            scaling_factor: 100_000.0,
            payoff_scale: 10_000.0,
        }
    }
}

/// Build the full country-state set: the statics plus the round-0 mutable
/// fields (cost at baseline, pressure at its initial value, no benefits,
/// everyone free-riding until the driver bootstraps strategies).
///
/// Pure in the records, shares, and constants: recomputing on identical
/// input yields identical output.
pub fn initialize_countries(
    records: &[RawCountry],
    shares: &[InfluenceShares],
    scales: &ScaleConstants,
) -> GameResult<Vec<CountryState>> {
    debug_assert_eq!(records.len(), shares.len());

    let max_carbon_intensity = records
        .iter()
        .map(|r| r.carbon_intensity)
        .fold(0.0f64, f64::max);
    if max_carbon_intensity == 0.0 {
        return Err(GameError::DegenerateInput {
            reason: "maximum carbon intensity is zero".into(),
        });
    }

    let max_gdp_per_capita = records
        .iter()
        .map(|r| r.gdp_per_capita)
        .fold(0.0f64, f64::max);
    if max_gdp_per_capita == 0.0 {
        return Err(GameError::DegenerateInput {
            reason: "maximum GDP per capita is zero".into(),
        });
    }

    Ok(records
        .iter()
        .zip(shares)
        .map(|(r, s)| {
            // Dirtiness rescaled against the dirtiest included country.
            let alpha = scales.base_alpha * (r.carbon_intensity / max_carbon_intensity);

            // Smooth development penalty in (1, 2]: a GDP ratio near 0
            // gives exp(0)+1 ≈ 2, the richest country gets exp(-1)+1.
            let gdp_ratio = r.gdp_per_capita / max_gdp_per_capita;
            let gdp_penalty = (-gdp_ratio).exp() + 1.0;

            let fossil_frac = r.fossil_fuel_pct / 100.0;
            let baseline_cost =
                alpha * s.gdp_share * (1.0 + fossil_frac) * gdp_penalty * scales.scaling_factor;
            let economic_gains =
                (1.0 - alpha) * s.gdp_share * (1.0 - fossil_frac) * scales.scaling_factor;
            let climate_payoff =
                (1.0 - r.vulnerability / 100.0) * s.gdp_share * scales.payoff_scale;
            let initial_pressure = s.gdp_share * (1.0 - alpha) * 0.05 * scales.scaling_factor;

            CountryState {
                name: r.name.clone(),
                gdp_per_capita: r.gdp_per_capita,
                fossil_fuel_pct: r.fossil_fuel_pct,
                vulnerability: r.vulnerability,
                gdp_share: s.gdp_share,
                investment_share: s.investment_share,
                energy_share: s.energy_share,
                influence: s.influence,
                alpha,
                gdp_penalty,
                baseline_cost,
                economic_gains,
                climate_payoff,
                initial_pressure,
                cost: baseline_cost,
                pressure: initial_pressure,
                strategy: Strategy::FreeRide,
                perceived_benefit: 0.0,
                real_benefit: 0.0,
                payoff_adopt: 0.0,
                payoff_free_ride: 0.0,
            }
        })
        .collect())
}
