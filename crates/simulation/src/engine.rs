//! Simulation engine.
//!
//! Ties the seeded generator, the balance projection and the signal generator
//! together. Every run builds a fresh generator from the input, so results
//! depend on nothing but the input.

use crate::projection::project_balances;
use crate::rng::{Mulberry32, derive_seed};
use crate::signals::generate_signals;
use tracing::debug;
use tradesim_domain::{SimulationError, SimulationInput, SimulationResult};

/// Baseline probability of loss before strategy and drawdown adjustments.
const BASE_LOSS_PROBABILITY: f64 = 0.35;
/// Weight of the realized max drawdown in the loss probability.
const DRAWDOWN_LOSS_WEIGHT: f64 = 0.4;

/// A validated simulation ready to run.
#[derive(Debug, Clone)]
pub struct SimulationEngine {
    input: SimulationInput,
    seed: u32,
}

impl SimulationEngine {
    /// Validates `input` and derives its seed.
    ///
    /// # Errors
    ///
    /// Returns [`SimulationError::InvalidInput`] for a zero duration or a
    /// non-positive capital.
    pub fn new(input: SimulationInput) -> Result<Self, SimulationError> {
        input.validate()?;
        Ok(Self {
            seed: derive_seed(&input),
            input,
        })
    }

    #[must_use]
    pub fn input(&self) -> &SimulationInput {
        &self.input
    }

    /// Seed the generator starts from.
    #[must_use]
    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// Runs the projection, then the signal generator, on one generator.
    #[must_use]
    pub fn run(&self) -> SimulationResult {
        let input = &self.input;
        let alpha = input.strategy.alpha();
        let risk_factor = input.risk.multiplier();

        debug!(
            seed = self.seed,
            capital = input.capital,
            months = input.duration_months,
            risk = %input.risk,
            strategy = %input.strategy,
            "Running simulation"
        );

        let mut rng = Mulberry32::new(self.seed);
        let projection = project_balances(input, &mut rng);

        let expected_return_pct = projection.expected_return_pct(input.capital);
        let sharpe = sharpe_proxy(alpha, risk_factor);
        let win_rate_pct = projection.win_rate_pct();
        let max_drawdown_pct = projection.max_drawdown * 100.0;
        let probability_of_loss_pct =
            loss_probability(alpha, risk_factor, projection.max_drawdown) * 100.0;

        let signals = generate_signals(&mut rng, input.risk, input.strategy);

        debug!(
            expected_return_pct,
            max_drawdown_pct,
            signals = signals.len(),
            "Simulation complete"
        );

        SimulationResult {
            points: projection.points,
            expected_return_pct,
            sharpe,
            win_rate_pct,
            max_drawdown_pct,
            probability_of_loss_pct,
            signals,
        }
    }
}

/// Closed-form Sharpe proxy: annualized alpha over a risk-scaled deviation.
#[must_use]
pub fn sharpe_proxy(alpha: f64, risk_factor: f64) -> f64 {
    (alpha * 12.0) / (0.4 / risk_factor + 0.001)
}

/// Heuristic probability of ending below capital, as a fraction.
#[must_use]
pub fn loss_probability(alpha: f64, risk_factor: f64, max_drawdown: f64) -> f64 {
    (BASE_LOSS_PROBABILITY - alpha * risk_factor + max_drawdown * DRAWDOWN_LOSS_WEIGHT).max(0.0)
}

/// Runs one simulation.
///
/// # Errors
///
/// Returns [`SimulationError::InvalidInput`] when the input fails validation.
pub fn run_simulation(input: &SimulationInput) -> Result<SimulationResult, SimulationError> {
    Ok(SimulationEngine::new(*input)?.run())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tradesim_domain::{RiskLevel, Strategy};

    #[test]
    fn test_engine_exposes_seed() {
        let engine = SimulationEngine::new(SimulationInput::default()).unwrap();
        assert_eq!(engine.seed(), 26_164);
        assert_eq!(engine.input(), &SimulationInput::default());
    }

    #[test]
    fn test_rejects_invalid_input() {
        let zero_capital = SimulationInput::default().with_capital(0.0);
        assert!(matches!(
            run_simulation(&zero_capital),
            Err(SimulationError::InvalidInput { field: "capital", .. })
        ));

        let zero_months = SimulationInput::default().with_duration_months(0);
        assert!(matches!(
            run_simulation(&zero_months),
            Err(SimulationError::InvalidInput {
                field: "duration_months",
                ..
            })
        ));
    }

    #[test]
    fn test_deterministic() {
        for strategy in Strategy::ALL {
            for risk in RiskLevel::ALL {
                let input = SimulationInput::new(12_500.0, risk, strategy, 18);
                assert_eq!(
                    run_simulation(&input).unwrap(),
                    run_simulation(&input).unwrap()
                );
            }
        }
    }

    #[test]
    fn test_sharpe_proxy() {
        let sharpe = sharpe_proxy(0.22, 1.0);
        assert!((sharpe - 2.64 / 0.401).abs() < 1e-12);
        assert!(sharpe_proxy(0.22, 1.35) > sharpe);
    }

    #[test]
    fn test_loss_probability_floors_at_zero() {
        assert_eq!(loss_probability(0.5, 1.0, 0.0), 0.0);
        assert!(loss_probability(0.22, 1.35, 0.0) > 0.0);
        let expected = 0.35 - 0.072 + 0.04;
        assert!((loss_probability(0.12, 0.6, 0.1) - expected).abs() < 1e-12);
    }

    #[test]
    fn test_scalars_consistent_with_series() {
        let input =
            SimulationInput::new(8_000.0, RiskLevel::High, Strategy::LiquiditySaturation, 24);
        let result = run_simulation(&input).unwrap();

        let max_dd = result
            .points
            .iter()
            .map(|p| p.drawdown_pct)
            .fold(0.0, f64::max);
        assert_eq!(result.max_drawdown_pct, max_dd);

        let last = result.points.last().unwrap();
        assert_eq!(result.expected_return_pct, last.profit / 8_000.0 * 100.0);
        assert!((0.0..=100.0).contains(&result.win_rate_pct));
        assert!(result.probability_of_loss_pct >= 0.0);
    }

    #[test]
    fn test_single_month_horizon() {
        let input = SimulationInput::default().with_duration_months(1);
        let result = run_simulation(&input).unwrap();
        assert_eq!(result.points.len(), 1);
        assert_eq!(result.points[0].month, 1);
        assert!(result.win_rate_pct == 0.0 || result.win_rate_pct == 100.0);
    }
}
