//! Monthly balance projection.
//!
//! Compounds the account month by month with a strategy drift that ramps in
//! over the horizon plus uniform noise, tracking the running peak so that each
//! point carries its drawdown.

use crate::rng::UnitSource;
use tracing::trace;
use tradesim_domain::{SimulationInput, SimulationPoint};

/// Half-width of the uniform monthly noise band.
const NOISE_AMPLITUDE: f64 = 0.1;

/// Balance series plus the aggregates collected while building it.
#[derive(Debug, Clone, PartialEq)]
pub struct Projection {
    /// One point per month, chronological.
    pub points: Vec<SimulationPoint>,
    /// Months whose realized return was strictly positive.
    pub winning_months: u32,
    /// Largest drawdown seen, as a fraction of the peak.
    pub max_drawdown: f64,
}

impl Projection {
    /// Profit at the end of the horizon relative to capital, in percent.
    #[must_use]
    pub fn expected_return_pct(&self, capital: f64) -> f64 {
        let profit = self.points.last().map(|p| p.profit).unwrap_or(0.0);
        profit / capital * 100.0
    }

    /// Share of winning months, in percent.
    #[must_use]
    pub fn win_rate_pct(&self) -> f64 {
        if self.points.is_empty() {
            return 0.0;
        }
        f64::from(self.winning_months) / self.points.len() as f64 * 100.0
    }
}

/// Drift contribution for `month` of a `duration`-month horizon.
///
/// Ramps from near zero towards `alpha * risk_factor` following
/// `1 - e^(-month / duration)`.
#[must_use]
pub fn drift(alpha: f64, risk_factor: f64, month: u32, duration: u32) -> f64 {
    let progress = f64::from(month) / f64::from(duration);
    alpha * risk_factor * (1.0 - (-progress).exp())
}

/// Projects the balance over `input.duration_months` months.
///
/// Consumes exactly one value from `rng` per month.
pub fn project_balances<R: UnitSource + ?Sized>(
    input: &SimulationInput,
    rng: &mut R,
) -> Projection {
    let capital = input.capital;
    let alpha = input.strategy.alpha();
    let risk_factor = input.risk.multiplier();
    let duration = input.duration_months;

    let mut points = Vec::with_capacity(duration as usize);
    let mut balance = capital;
    let mut peak = capital;
    let mut max_drawdown: f64 = 0.0;
    let mut winning_months = 0;

    for month in 1..=duration {
        let noise = rng.next_unit() * (2.0 * NOISE_AMPLITUDE) - NOISE_AMPLITUDE;
        let monthly_return = drift(alpha, risk_factor, month, duration) + noise;
        balance *= 1.0 + monthly_return;

        if balance > peak {
            peak = balance;
        }

        let drawdown = (peak - balance) / peak;
        max_drawdown = max_drawdown.max(drawdown);

        if monthly_return > 0.0 {
            winning_months += 1;
        }

        trace!(month, balance, monthly_return, drawdown, "projected month");

        points.push(SimulationPoint {
            month,
            balance,
            profit: balance - capital,
            drawdown_pct: drawdown * 100.0,
        });
    }

    Projection {
        points,
        winning_months,
        max_drawdown,
    }
}
