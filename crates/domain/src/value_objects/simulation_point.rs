use serde::{Deserialize, Serialize};

/// Account state at the end of one projected month.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationPoint {
    /// 1-based month index.
    pub month: u32,
    /// Account balance. Unbounded below: adverse compounding may push it
    /// to zero or negative.
    pub balance: f64,
    /// Balance minus initial capital.
    pub profit: f64,
    /// Decline from the running peak balance, in percent.
    pub drawdown_pct: f64,
}
