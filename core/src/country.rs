//! Country records — the raw collaborator input and the evolving
//! per-round state.

use crate::{
    error::{GameError, GameResult},
    types::CountryName,
};
use serde::{Deserialize, Serialize};

/// One row of the prepared upstream dataset. All fields are required;
/// the core does not handle missing data. Cleaning is the loader's job.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawCountry {
    pub name: CountryName,
    /// GDP, constant-currency level.
    pub gdp: f64,
    /// Gross capital formation, same currency basis as GDP.
    pub investment: f64,
    pub energy_usage: f64,
    /// kg CO2e per constant-currency unit of GDP.
    pub carbon_intensity: f64,
    pub gdp_per_capita: f64,
    /// Fossil fuel share of energy consumption, percent.
    pub fossil_fuel_pct: f64,
    /// Climate vulnerability score on a 0–100 scale.
    pub vulnerability: f64,
}

impl RawCountry {
    /// Fail fast on non-finite values. A NaN here is a missing cell the
    /// upstream cleaning step let through; left alone it would poison
    /// every downstream round.
    pub fn validate(&self) -> GameResult<()> {
        let fields: [(&'static str, f64); 7] = [
            ("gdp", self.gdp),
            ("investment", self.investment),
            ("energy_usage", self.energy_usage),
            ("carbon_intensity", self.carbon_intensity),
            ("gdp_per_capita", self.gdp_per_capita),
            ("fossil_fuel_pct", self.fossil_fuel_pct),
            ("vulnerability", self.vulnerability),
        ];
        for (field, value) in fields {
            if !value.is_finite() {
                return Err(GameError::MissingField {
                    field,
                    country: self.name.clone(),
                });
            }
        }
        Ok(())
    }
}

/// A country's adoption strategy for one round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    Adopt,
    FreeRide,
}

impl Strategy {
    /// 1.0 when adopting, 0.0 when free-riding: the G indicator in the
    /// influence-weighted adoption sum.
    pub fn indicator(self) -> f64 {
        match self {
            Strategy::Adopt => 1.0,
            Strategy::FreeRide => 0.0,
        }
    }

    pub fn is_adopt(self) -> bool {
        self == Strategy::Adopt
    }
}

/// Full per-country simulation state: statics computed once by the
/// initializer, plus the per-round fields the updater replaces.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountryState {
    pub name: CountryName,

    // Raw indicators the round loop still reads.
    pub gdp_per_capita: f64,
    pub fossil_fuel_pct: f64,
    pub vulnerability: f64,

    // Normalized shares; influence sums to 1 across the run's subset.
    pub gdp_share: f64,
    pub investment_share: f64,
    pub energy_share: f64,
    pub influence: f64,

    // Static game variables, immutable after initialization.
    /// Carbon-intensity-scaled dirtiness factor, in [0, base_alpha].
    pub alpha: f64,
    /// Development penalty in (1, 2]; lower for richer countries.
    pub gdp_penalty: f64,
    /// Baseline adoption cost C_0.
    pub baseline_cost: f64,
    pub economic_gains: f64,
    /// Climate payoff ceiling. Never mutated, only gated by the
    /// threshold dummy.
    pub climate_payoff: f64,
    pub initial_pressure: f64,

    // Mutable per-round state.
    pub cost: f64,
    pub pressure: f64,
    pub strategy: Strategy,
    pub perceived_benefit: f64,
    pub real_benefit: f64,
    pub payoff_adopt: f64,
    pub payoff_free_ride: f64,
}
