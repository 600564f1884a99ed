//! Round snapshots and the run history.
//!
//! One snapshot per (round, country) pair, appended after strategy
//! resolution and never mutated. The recorded `w` is the round's NEW
//! adoption level; `urgency` and `threshold_crossed` were computed from
//! the START-of-round level. That temporal mismatch is part of the
//! model's output contract and is kept as-is.

use crate::{
    country::Strategy,
    error::GameResult,
    types::{CountryName, Round},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoundSnapshot {
    pub round: Round,
    pub country: CountryName,
    pub strategy: Strategy,
    /// Influence-weighted adoption level after this round's resolution.
    pub w: f64,
    pub urgency: f64,
    pub threshold_crossed: bool,
    pub cost: f64,
    pub economic_gains: f64,
    pub pressure: f64,
    pub perceived_benefit: f64,
    pub real_benefit: f64,
    pub payoff_adopt: f64,
    pub payoff_free_ride: f64,
}

/// Append-only sequence of snapshots, ordered by round then country.
/// A run of N rounds over k countries holds exactly N × k rows.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct History {
    rows: Vec<RoundSnapshot>,
}

impl History {
    pub(crate) fn push(&mut self, row: RoundSnapshot) {
        self.rows.push(row);
    }

    pub fn rows(&self) -> &[RoundSnapshot] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of rounds recorded.
    pub fn rounds(&self) -> Round {
        self.rows.last().map_or(0, |r| r.round)
    }

    /// The global adoption level W_t per round. Every country row of a
    /// round carries the same value; one entry per round is returned.
    pub fn global_adoption(&self) -> Vec<(Round, f64)> {
        let mut out: Vec<(Round, f64)> = Vec::new();
        for row in &self.rows {
            if out.last().map_or(true, |(r, _)| *r != row.round) {
                out.push((row.round, row.w));
            }
        }
        out
    }

    /// Unweighted share of countries adopting, per round.
    pub fn adoption_share(&self) -> Vec<(Round, f64)> {
        let mut out: Vec<(Round, f64)> = Vec::new();
        let mut counts: Vec<usize> = Vec::new();
        for row in &self.rows {
            if out.last().map_or(true, |(r, _)| *r != row.round) {
                out.push((row.round, 0.0));
                counts.push(0);
            }
            let last = out.len() - 1;
            out[last].1 += row.strategy.indicator();
            counts[last] += 1;
        }
        for (entry, n) in out.iter_mut().zip(counts) {
            entry.1 /= n as f64;
        }
        out
    }

    /// One country's rows in round order, for time-series extraction.
    pub fn country_series(&self, name: &str) -> Vec<&RoundSnapshot> {
        self.rows.iter().filter(|r| r.country == name).collect()
    }

    /// The full history as a JSON array of rows.
    pub fn to_json(&self) -> GameResult<String> {
        Ok(serde_json::to_string_pretty(&self.rows)?)
    }
}
