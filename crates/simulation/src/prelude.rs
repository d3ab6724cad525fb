//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types from the crate.
//!
//! # Example
//!
//! ```rust
//! use tradesim_simulation::prelude::*;
//!
//! let result = run_simulation(&SimulationInput::default()).unwrap();
//! assert_eq!(result.points.len(), 12);
//! ```

// Engine
pub use crate::engine::{SimulationEngine, loss_probability, run_simulation, sharpe_proxy};

// Chart geometry
pub use crate::curve::{CurvePoint, PerformanceCurve};

// Projection
pub use crate::projection::{Projection, project_balances};

// Random source
pub use crate::rng::{Mulberry32, UnitSource, derive_seed};

// Signals
pub use crate::signals::{SIGNAL_SYMBOLS, SignalDraw, generate_signals};

// Domain types
pub use tradesim_domain::{
    RiskLevel, Signal, SignalAction, SimulationError, SimulationInput, SimulationPoint,
    SimulationResult, Strategy,
};
