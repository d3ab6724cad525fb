use crate::value_objects::signal::Signal;
use crate::value_objects::simulation_point::SimulationPoint;
use serde::{Deserialize, Serialize};

/// Output of one simulator run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    /// Monthly series, chronological, one entry per projected month.
    pub points: Vec<SimulationPoint>,
    pub expected_return_pct: f64,
    pub sharpe: f64,
    pub win_rate_pct: f64,
    pub max_drawdown_pct: f64,
    pub probability_of_loss_pct: f64,
    pub signals: Vec<Signal>,
}

impl SimulationResult {
    /// Balance at the end of the horizon.
    pub fn final_balance(&self) -> Option<f64> {
        self.points.last().map(|p| p.balance)
    }

    /// Profit at the end of the horizon, zero for an empty series.
    pub fn final_profit(&self) -> f64 {
        self.points.last().map(|p| p.profit).unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(month: u32, balance: f64) -> SimulationPoint {
        SimulationPoint {
            month,
            balance,
            profit: balance - 1_000.0,
            drawdown_pct: 0.0,
        }
    }

    #[test]
    fn test_final_accessors() {
        let result = SimulationResult {
            points: vec![point(1, 1_050.0), point(2, 1_200.0)],
            expected_return_pct: 20.0,
            sharpe: 1.0,
            win_rate_pct: 100.0,
            max_drawdown_pct: 0.0,
            probability_of_loss_pct: 10.0,
            signals: Vec::new(),
        };
        assert_eq!(result.final_balance(), Some(1_200.0));
        assert_eq!(result.final_profit(), 200.0);
    }

    #[test]
    fn test_empty_series() {
        let result = SimulationResult {
            points: Vec::new(),
            expected_return_pct: 0.0,
            sharpe: 0.0,
            win_rate_pct: 0.0,
            max_drawdown_pct: 0.0,
            probability_of_loss_pct: 0.0,
            signals: Vec::new(),
        };
        assert_eq!(result.final_balance(), None);
        assert_eq!(result.final_profit(), 0.0);
    }

    #[test]
    fn test_serializes_to_json() {
        let result = SimulationResult {
            points: vec![point(1, 1_100.0)],
            expected_return_pct: 10.0,
            sharpe: 2.5,
            win_rate_pct: 100.0,
            max_drawdown_pct: 0.0,
            probability_of_loss_pct: 5.0,
            signals: Vec::new(),
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["points"][0]["month"], 1);
        assert_eq!(json["sharpe"], 2.5);
    }
}
