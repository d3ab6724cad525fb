//! Deterministic trading simulator.
//!
//! This crate turns a [`SimulationInput`](tradesim_domain::SimulationInput)
//! into a monthly balance projection, summary statistics and a handful of
//! synthetic trade signals:
//! - Seeded Mulberry32 generator
//! - Balance projection with drift ramp and drawdown tracking
//! - Signal generation continuing the same random stream
//! - Chart geometry for the balance curve

/// Prelude module for convenient imports.
pub mod prelude;

/// Chart geometry.
pub mod curve;
/// Simulation engine.
pub mod engine;
/// Monthly balance projection.
pub mod projection;
/// Seeded random source.
pub mod rng;
/// Trade signal generation.
pub mod signals;

pub use engine::{SimulationEngine, run_simulation};
