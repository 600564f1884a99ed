//! The simulation driver — bootstraps the game state and iterates rounds.
//!
//! ROUND ORDERING (fixed, never reordered):
//!   1. Urgency U_t and threshold dummy T_d from the START-of-round W_t.
//!   2. Cost, pressure, benefits, and both payoffs for every country.
//!   3. Best-response strategy resolution.
//!   4. W_t recomputed from the NEW strategies.
//!   5. One snapshot per country: the new W_t next to the
//!      old-W_t-derived U_t/T_d, exactly as the model emits it.
//!
//! Round t+1 reads only round t's final state: each round maps the
//! previous country-state set plus W_t to a fresh set plus a new W_t,
//! so there is no aliasing between rounds.

use crate::{
    config::GameConfig,
    country::{CountryState, RawCountry},
    error::{GameError, GameResult},
    influence, round,
    snapshot::{History, RoundSnapshot},
    statics, strategy,
    types::Round,
};

#[derive(Debug)]
pub struct GameEngine {
    config:    GameConfig,
    countries: Vec<CountryState>,
    /// Influence-weighted adoption level from the latest strategies.
    w:         f64,
    /// Fixed adoption threshold T = θ × Σ influence (the sum is 1 by
    /// construction, so effectively θ).
    threshold: f64,
    round:     Round,
}

impl GameEngine {
    /// Validate config and records, normalize influence, initialize the
    /// static variables, and bootstrap the round-0 strategies and W_t.
    pub fn new(records: &[RawCountry], config: GameConfig) -> GameResult<Self> {
        config.validate()?;
        if records.is_empty() {
            return Err(GameError::DegenerateInput {
                reason: "no countries in the input dataset".into(),
            });
        }
        for record in records {
            record.validate()?;
        }

        let shares = influence::compute_influence(records, &config.weights)?;
        let mut countries = statics::initialize_countries(records, &shares, &config.scales)?;

        // Bootstrap rule: static gains vs baseline cost, GDP-gated. The
        // in-loop best response replaces this from round 1 onward.
        for c in &mut countries {
            c.strategy = strategy::initial_strategy(
                c.economic_gains,
                c.baseline_cost,
                c.gdp_per_capita,
                config.min_gdp_threshold,
            );
        }

        let w = weighted_adoption(&countries);
        let total_influence: f64 = countries.iter().map(|c| c.influence).sum();
        let threshold = config.theta * total_influence;

        log::debug!(
            "engine ready: countries={} w0={:.6} threshold={:.6}",
            countries.len(),
            w,
            threshold,
        );

        Ok(Self {
            config,
            countries,
            w,
            threshold,
            round: 0,
        })
    }

    pub fn countries(&self) -> &[CountryState] {
        &self.countries
    }

    pub fn w(&self) -> f64 {
        self.w
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn current_round(&self) -> Round {
        self.round
    }

    /// Advance one round, appending one snapshot per country.
    fn step(&mut self, history: &mut History) {
        self.round += 1;

        let u = round::urgency(self.round, self.config.rounds, self.config.lambda_u);
        let crossed = self.w >= self.threshold; // recomputed fresh each round, not sticky

        let mut next: Vec<CountryState> = self
            .countries
            .iter()
            .map(|c| {
                round::update_country(c, self.w, u, crossed, self.config.z, self.config.gamma)
            })
            .collect();

        for c in &mut next {
            c.strategy = strategy::best_response(
                c.payoff_adopt,
                c.payoff_free_ride,
                c.gdp_per_capita,
                self.config.min_gdp_threshold,
            );
        }

        let w_new = weighted_adoption(&next);

        for c in &next {
            history.push(RoundSnapshot {
                round: self.round,
                country: c.name.clone(),
                strategy: c.strategy,
                w: w_new,
                urgency: u,
                threshold_crossed: crossed,
                cost: c.cost,
                economic_gains: c.economic_gains,
                pressure: c.pressure,
                perceived_benefit: c.perceived_benefit,
                real_benefit: c.real_benefit,
                payoff_adopt: c.payoff_adopt,
                payoff_free_ride: c.payoff_free_ride,
            });
        }

        log::debug!(
            "round={} w={:.6} crossed={} adopters={}",
            self.round,
            w_new,
            crossed,
            next.iter().filter(|c| c.strategy.is_adopt()).count(),
        );

        self.countries = next;
        self.w = w_new;
    }

    /// Run all configured rounds and return the history. Consumes the
    /// engine; after a run only the history survives. Always runs
    /// exactly N rounds, whether or not adoption has stabilized. N = 0
    /// yields an empty history.
    pub fn run(mut self) -> History {
        let mut history = History::default();
        for _ in 0..self.config.rounds {
            self.step(&mut history);
        }
        history
    }
}

/// The scalar coupling every country: Σ G_i × influence_i.
fn weighted_adoption(countries: &[CountryState]) -> f64 {
    countries
        .iter()
        .map(|c| c.strategy.indicator() * c.influence)
        .sum()
}
