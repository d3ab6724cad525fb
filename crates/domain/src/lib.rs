//! Domain types for the trading simulator.
//!
//! Value objects describing simulator inputs and outputs, the strategy and
//! risk parameter tables, and the shared error type.

pub mod enums;
pub mod error;
pub mod math;
pub mod value_objects;

pub use enums::{RiskLevel, SignalAction, Strategy};
pub use error::SimulationError;
pub use value_objects::{Signal, SimulationInput, SimulationPoint, SimulationResult};
