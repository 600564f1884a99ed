//! climate-core — deterministic engine for the climate adoption game.
//!
//! A fixed set of countries repeatedly chooses between adopting a costly
//! green-transition strategy and free-riding on everyone else's adoption.
//! Each round is a pure function of the previous round's country states
//! plus one shared scalar: the influence-weighted global adoption level
//! W_t. The engine runs exactly N rounds and returns an append-only
//! history of per-country snapshots.
//!
//! Dataset loading and result presentation are the caller's concern;
//! see the game-runner binary in tools/.

pub mod config;
pub mod country;
pub mod engine;
pub mod error;
pub mod influence;
pub mod round;
pub mod snapshot;
pub mod statics;
pub mod strategy;
pub mod types;

pub use config::GameConfig;
pub use engine::GameEngine;
pub use snapshot::History;
