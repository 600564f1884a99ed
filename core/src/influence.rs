//! Influence normalization — each country's weight in the global adoption
//! level, combining economic size, energy usage, and investment.
//!
//! Influence is defined relative to whatever subset of countries is
//! passed in: excluding a country changes every other country's
//! influence.

use crate::{
    country::RawCountry,
    error::{GameError, GameResult},
};
use serde::{Deserialize, Serialize};

/// Weights for the three indicator shares. They need not sum to 1 (the
/// combined influence is renormalized), but conventionally do.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct InfluenceWeights {
    pub gdp: f64,
    pub energy: f64,
    pub investment: f64,
}

impl Default for InfluenceWeights {
    fn default() -> Self {
        Self {
            gdp: 0.5,
            energy: 0.25,
            investment: 0.25,
        }
    }
}

/// Normalized indicator shares and the resulting influence weight,
/// index-aligned with the input records.
#[derive(Debug, Clone, Copy)]
pub struct InfluenceShares {
    pub gdp_share: f64,
    pub investment_share: f64,
    pub energy_share: f64,
    pub influence: f64,
}

/// Normalize each indicator by its cross-country sum, combine the shares
/// with the weights, and renormalize so influence sums to exactly 1.
///
/// A zero indicator sum (empty or degenerate subsets) fails loud instead
/// of sending NaN through every round downstream.
pub fn compute_influence(
    records: &[RawCountry],
    weights: &InfluenceWeights,
) -> GameResult<Vec<InfluenceShares>> {
    let gdp_sum: f64 = records.iter().map(|r| r.gdp).sum();
    let investment_sum: f64 = records.iter().map(|r| r.investment).sum();
    let energy_sum: f64 = records.iter().map(|r| r.energy_usage).sum();

    for (indicator, sum) in [
        ("gdp", gdp_sum),
        ("investment", investment_sum),
        ("energy_usage", energy_sum),
    ] {
        if sum == 0.0 {
            return Err(GameError::DegenerateInput {
                reason: format!("{indicator} sums to zero across the included countries"),
            });
        }
    }

    let mut shares: Vec<InfluenceShares> = records
        .iter()
        .map(|r| {
            let gdp_share = r.gdp / gdp_sum;
            let investment_share = r.investment / investment_sum;
            let energy_share = r.energy_usage / energy_sum;
            let influence = weights.gdp * gdp_share
                + weights.energy * energy_share
                + weights.investment * investment_share;
            InfluenceShares {
                gdp_share,
                investment_share,
                energy_share,
                influence,
            }
        })
        .collect();

    let influence_sum: f64 = shares.iter().map(|s| s.influence).sum();
    if influence_sum == 0.0 {
        return Err(GameError::DegenerateInput {
            reason: "combined influence sums to zero".into(),
        });
    }
    for s in &mut shares {
        s.influence /= influence_sum;
    }

    Ok(shares)
}
