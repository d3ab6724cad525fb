//! Synthetic trade signal generation.

use crate::rng::UnitSource;
use rust_decimal::Decimal;
use tradesim_domain::math::round_half_up;
use tradesim_domain::{RiskLevel, Signal, SignalAction, Strategy};

/// Tickers offered to the signal generator, in selection order.
pub const SIGNAL_SYMBOLS: [&str; 7] = [
    "BTCUSDT", "ETHUSDT", "XAUUSD", "US500", "EURUSD", "NVDA", "TSLA",
];

/// Smallest number of signals produced per run.
pub const MIN_SIGNALS: usize = 4;
/// Largest number of signals produced per run.
pub const MAX_SIGNALS: usize = 6;

const MAX_CONFIDENCE_PCT: u32 = 99;
const TAKE_PROFIT_STRETCH: f64 = 1.6;

/// Raw draws behind one signal, before rounding.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SignalDraw {
    pub action: SignalAction,
    pub confidence: f64,
    pub base_price: f64,
    pub volatility: f64,
}

impl SignalDraw {
    /// Draws action, confidence, base price and volatility, in that order.
    pub fn sample<R: UnitSource + ?Sized>(rng: &mut R, risk: RiskLevel) -> Self {
        let risk_factor = risk.multiplier();
        let actions = SignalAction::ALL;
        let action_index = (rng.next_unit() * actions.len() as f64).floor() as usize;
        let confidence = 65.0 + rng.next_unit() * 30.0 * risk_factor;
        let base_price = 100.0 + rng.next_unit() * 900.0;
        let volatility = 0.02 + rng.next_unit() * 0.05 * risk_factor;

        Self {
            action: actions[action_index.min(actions.len() - 1)],
            confidence,
            base_price,
            volatility,
        }
    }

    /// Rounds the draw into a signal for `symbol`.
    ///
    /// Stop-loss and take-profit are placed around the unrounded base price
    /// with the same formula for both actions.
    #[must_use]
    pub fn into_signal(self, symbol: &str, strategy: Strategy) -> Signal {
        let buffer = strategy.stop_buffer();
        let band = self.volatility * buffer;

        Signal {
            symbol: symbol.to_string(),
            action: self.action,
            confidence_pct: round_half_up(self.confidence, 1)
                .min(Decimal::from(MAX_CONFIDENCE_PCT)),
            entry: round_half_up(self.base_price, 2),
            stop_loss: round_half_up(self.base_price * (1.0 - band), 2),
            take_profit: round_half_up(self.base_price * (1.0 + band * TAKE_PROFIT_STRETCH), 2),
        }
    }
}

/// Produces between [`MIN_SIGNALS`] and [`MAX_SIGNALS`] signals, continuing
/// the draw sequence of `rng`.
pub fn generate_signals<R: UnitSource + ?Sized>(
    rng: &mut R,
    risk: RiskLevel,
    strategy: Strategy,
) -> Vec<Signal> {
    let spread = (MAX_SIGNALS - MIN_SIGNALS + 1) as f64;
    let count = (MIN_SIGNALS + (rng.next_unit() * spread).floor() as usize).min(MAX_SIGNALS);

    SIGNAL_SYMBOLS
        .iter()
        .take(count)
        .map(|symbol| SignalDraw::sample(rng, risk).into_signal(symbol, strategy))
        .collect()
}
