use crate::error::SimulationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lowercases and maps `_`/space separators to `-` so that `Momentum Class`,
/// `momentum_class` and `momentum-class` all compare equal.
fn normalize(value: &str) -> String {
    value
        .trim()
        .chars()
        .map(|c| match c {
            '_' | ' ' => '-',
            other => other.to_ascii_lowercase(),
        })
        .collect()
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    #[default]
    Medium,
    High,
}

impl RiskLevel {
    pub const ALL: [RiskLevel; 3] = [RiskLevel::Low, RiskLevel::Medium, RiskLevel::High];

    /// Scalar applied to both drift and signal noise.
    pub fn multiplier(&self) -> f64 {
        match self {
            Self::Low => 0.6,
            Self::Medium => 1.0,
            Self::High => 1.35,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for RiskLevel {
    type Err = SimulationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize(s);
        Self::ALL
            .into_iter()
            .find(|r| normalize(r.label()) == wanted)
            .ok_or_else(|| SimulationError::invalid("risk", format!("unknown risk level `{s}`")))
    }
}

/// Trading strategy offered by the simulator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Strategy {
    #[default]
    MomentumClass,
    SmartBalance,
    AdaptiveMarketMaker,
    LiquiditySaturation,
}

impl Strategy {
    pub const ALL: [Strategy; 4] = [
        Strategy::MomentumClass,
        Strategy::SmartBalance,
        Strategy::AdaptiveMarketMaker,
        Strategy::LiquiditySaturation,
    ];

    /// Annualized drift constant.
    pub fn alpha(&self) -> f64 {
        match self {
            Self::MomentumClass => 0.22,
            Self::SmartBalance => 0.16,
            Self::AdaptiveMarketMaker => 0.12,
            Self::LiquiditySaturation => 0.19,
        }
    }

    /// Multiplier applied to signal volatility when placing stop-loss and
    /// take-profit levels. Momentum strategies trade with wider stops.
    pub fn stop_buffer(&self) -> f64 {
        match self {
            Self::MomentumClass => 1.8,
            Self::SmartBalance | Self::AdaptiveMarketMaker | Self::LiquiditySaturation => 1.4,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::MomentumClass => "Momentum-class",
            Self::SmartBalance => "Smart-balance",
            Self::AdaptiveMarketMaker => "Adaptive-market-maker",
            Self::LiquiditySaturation => "Liquidity-saturation",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Strategy {
    type Err = SimulationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize(s);
        Self::ALL
            .into_iter()
            .find(|st| normalize(st.label()) == wanted)
            .ok_or_else(|| SimulationError::invalid("strategy", format!("unknown strategy `{s}`")))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SignalAction {
    Buy,
    Sell,
}

impl SignalAction {
    pub const ALL: [SignalAction; 2] = [SignalAction::Buy, SignalAction::Sell];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Buy => "Buy",
            Self::Sell => "Sell",
        }
    }
}

impl fmt::Display for SignalAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SignalAction {
    type Err = SimulationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize(s);
        Self::ALL
            .into_iter()
            .find(|a| normalize(a.label()) == wanted)
            .ok_or_else(|| SimulationError::invalid("action", format!("unknown action `{s}`")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parameter_tables() {
        assert_eq!(RiskLevel::Low.multiplier(), 0.6);
        assert_eq!(RiskLevel::Medium.multiplier(), 1.0);
        assert_eq!(RiskLevel::High.multiplier(), 1.35);

        assert_eq!(Strategy::MomentumClass.alpha(), 0.22);
        assert_eq!(Strategy::SmartBalance.alpha(), 0.16);
        assert_eq!(Strategy::AdaptiveMarketMaker.alpha(), 0.12);
        assert_eq!(Strategy::LiquiditySaturation.alpha(), 0.19);
    }

    #[test]
    fn test_stop_buffer_only_widens_momentum() {
        for strategy in Strategy::ALL {
            let expected = if strategy == Strategy::MomentumClass { 1.8 } else { 1.4 };
            assert_eq!(strategy.stop_buffer(), expected, "{strategy}");
        }
    }

    #[test]
    fn test_parse_accepts_label_and_kebab_case() {
        assert_eq!(
            "Momentum-class".parse::<Strategy>().unwrap(),
            Strategy::MomentumClass
        );
        assert_eq!(
            "smart_balance".parse::<Strategy>().unwrap(),
            Strategy::SmartBalance
        );
        assert_eq!(
            "adaptive market maker".parse::<Strategy>().unwrap(),
            Strategy::AdaptiveMarketMaker
        );
        assert_eq!("HIGH".parse::<RiskLevel>().unwrap(), RiskLevel::High);
        assert_eq!("sell".parse::<SignalAction>().unwrap(), SignalAction::Sell);
    }

    #[test]
    fn test_parse_rejects_unknown() {
        let err = "scalping".parse::<Strategy>().unwrap_err();
        assert!(matches!(
            err,
            SimulationError::InvalidInput {
                field: "strategy",
                ..
            }
        ));
        assert!("extreme".parse::<RiskLevel>().is_err());
    }

    #[test]
    fn test_display_round_trips_through_from_str() {
        for risk in RiskLevel::ALL {
            assert_eq!(risk.to_string().parse::<RiskLevel>().unwrap(), risk);
        }
        for strategy in Strategy::ALL {
            assert_eq!(strategy.to_string().parse::<Strategy>().unwrap(), strategy);
        }
    }
}
