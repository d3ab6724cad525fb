use crate::enums::{RiskLevel, Strategy};
use crate::error::SimulationError;
use serde::{Deserialize, Serialize};

/// Parameters collected by the simulator form.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationInput {
    /// Initial capital in USD.
    pub capital: f64,
    pub risk: RiskLevel,
    pub strategy: Strategy,
    /// Projection horizon. The form offers 3 to 36 months; the engine
    /// accepts any value of at least one.
    pub duration_months: u32,
}

impl SimulationInput {
    pub const DEFAULT_CAPITAL: f64 = 25_000.0;
    pub const DEFAULT_DURATION_MONTHS: u32 = 12;

    #[must_use]
    pub fn new(capital: f64, risk: RiskLevel, strategy: Strategy, duration_months: u32) -> Self {
        Self {
            capital,
            risk,
            strategy,
            duration_months,
        }
    }

    /// Sets the initial capital.
    #[must_use]
    pub fn with_capital(mut self, capital: f64) -> Self {
        self.capital = capital;
        self
    }

    /// Sets the risk level.
    #[must_use]
    pub fn with_risk(mut self, risk: RiskLevel) -> Self {
        self.risk = risk;
        self
    }

    /// Sets the strategy.
    #[must_use]
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Sets the projection horizon in months.
    #[must_use]
    pub fn with_duration_months(mut self, months: u32) -> Self {
        self.duration_months = months;
        self
    }

    /// Checks that the input lies inside the engine's domain.
    ///
    /// # Errors
    ///
    /// Returns [`SimulationError::InvalidInput`] when the duration is zero or
    /// the capital is not a positive finite amount.
    pub fn validate(&self) -> Result<(), SimulationError> {
        if self.duration_months == 0 {
            return Err(SimulationError::invalid(
                "duration_months",
                "must be at least one month",
            ));
        }
        if !self.capital.is_finite() || self.capital <= 0.0 {
            return Err(SimulationError::invalid(
                "capital",
                format!("must be a positive amount, got {}", self.capital),
            ));
        }
        Ok(())
    }
}

impl Default for SimulationInput {
    fn default() -> Self {
        Self::new(
            Self::DEFAULT_CAPITAL,
            RiskLevel::default(),
            Strategy::default(),
            Self::DEFAULT_DURATION_MONTHS,
        )
    }
}
