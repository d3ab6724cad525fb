use crate::enums::SignalAction;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Synthetic trade recommendation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Signal {
    pub symbol: String,
    pub action: SignalAction,
    /// Confidence in percent, one decimal, never above 99.
    pub confidence_pct: Decimal,
    pub entry: Decimal,
    pub stop_loss: Decimal,
    pub take_profit: Decimal,
}

impl Signal {
    pub fn is_buy(&self) -> bool {
        self.action == SignalAction::Buy
    }
}
