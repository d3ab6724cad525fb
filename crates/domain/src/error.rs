//! Errors raised by the simulator core.

/// Simulation errors.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SimulationError {
    /// A parameter is outside the engine's input domain.
    #[error("Invalid {field}: {reason}")]
    InvalidInput {
        /// Name of the offending parameter.
        field: &'static str,
        /// Human-readable explanation.
        reason: String,
    },
}

impl SimulationError {
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field,
            reason: reason.into(),
        }
    }
}
