use crate::{
    error::{GameError, GameResult},
    influence::InfluenceWeights,
    statics::ScaleConstants,
};
use serde::{Deserialize, Serialize};

/// Simulation parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of rounds N. Zero is allowed and yields an empty history.
    pub rounds: u64,
    /// Urgency growth exponent λ ≥ 0; U_t = (t/N)^λ × 0.1.
    pub lambda_u: f64,
    /// Pressure growth rate γ > 0; pressure compounds by γ(1 + W_t) per round.
    pub gamma: f64,
    /// Cost reduction rate Z; C_t = C_0 × (1 − Z(1 + W_t)). Large values
    /// drive the cost negative, which the model accepts.
    pub z: f64,
    /// Adoption threshold θ ∈ (0, 1], a fraction of total influence.
    pub theta: f64,
    /// GDP-per-capita eligibility floor. Countries at or below it never adopt.
    pub min_gdp_threshold: f64,
    #[serde(default)]
    pub weights: InfluenceWeights,
    #[serde(default)]
    pub scales: ScaleConstants,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rounds: 10,
            lambda_u: 1.0,
            gamma: 1.05,
            z: 0.1,
            theta: 0.8,
            min_gdp_threshold: 5000.0,
            weights: InfluenceWeights::default(),
            scales: ScaleConstants::default(),
        }
    }
}

impl GameConfig {
    /// Reject parameter values that would corrupt every round. Unusual
    /// but mathematically valid settings (large Z, γ well above 1) pass.
    pub fn validate(&self) -> GameResult<()> {
        if !self.theta.is_finite() || self.theta <= 0.0 || self.theta > 1.0 {
            return Err(GameError::InvalidConfig {
                reason: format!("theta must be in (0, 1], got {}", self.theta),
            });
        }
        if !self.gamma.is_finite() || self.gamma <= 0.0 {
            return Err(GameError::InvalidConfig {
                reason: format!("gamma must be finite and > 0, got {}", self.gamma),
            });
        }
        if !self.lambda_u.is_finite() || self.lambda_u < 0.0 {
            return Err(GameError::InvalidConfig {
                reason: format!("lambda_u must be finite and >= 0, got {}", self.lambda_u),
            });
        }
        if !self.z.is_finite() {
            return Err(GameError::InvalidConfig {
                reason: format!("z must be finite, got {}", self.z),
            });
        }
        if !self.min_gdp_threshold.is_finite() {
            return Err(GameError::InvalidConfig {
                reason: format!(
                    "min_gdp_threshold must be finite, got {}",
                    self.min_gdp_threshold
                ),
            });
        }
        Ok(())
    }
}
