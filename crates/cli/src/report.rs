//! Text rendering of simulation results.

use prettytable::{Table, format, row};
use tradesim_domain::{SimulationInput, SimulationResult};

/// One headline metric with its caption.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricCard {
    pub label: &'static str,
    pub value: String,
    pub detail: &'static str,
}

/// Formats an amount as whole US dollars with thousands separators.
pub fn format_usd(amount: f64) -> String {
    let rounded = amount.round();
    let digits = format!("{:.0}", rounded.abs());
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if rounded < 0.0 {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}

/// The six headline metrics shown above the chart.
pub fn metric_cards(input: &SimulationInput, result: &SimulationResult) -> Vec<MetricCard> {
    let projected = result.final_balance().unwrap_or(input.capital);
    vec![
        MetricCard {
            label: "Expected return",
            value: format!("{:.1}%", result.expected_return_pct),
            detail: "Over the full simulation horizon",
        },
        MetricCard {
            label: "Sharpe ratio",
            value: format!("{:.2}", result.sharpe),
            detail: "Return efficiency against risk",
        },
        MetricCard {
            label: "Winning months",
            value: format!("{:.0}%", result.win_rate_pct),
            detail: "Share of months with a positive return",
        },
        MetricCard {
            label: "Max drawdown",
            value: format!("{:.1}%", result.max_drawdown_pct),
            detail: "Deepest decline from a running peak",
        },
        MetricCard {
            label: "Probability of loss",
            value: format!("{:.1}%", result.probability_of_loss_pct),
            detail: "Heuristic estimate under adverse scenarios",
        },
        MetricCard {
            label: "Projected balance",
            value: format_usd(projected),
            detail: "At the end of the simulation",
        },
    ]
}

fn boxed(mut table: Table) -> Table {
    table.set_format(*format::consts::FORMAT_BOX_CHARS);
    table
}

pub fn metrics_table(input: &SimulationInput, result: &SimulationResult) -> Table {
    let mut table = Table::new();
    table.set_titles(row!["Metric", "Value", "Detail"]);
    for card in metric_cards(input, result) {
        table.add_row(row![card.label, r->card.value, card.detail]);
    }
    boxed(table)
}

pub fn series_table(result: &SimulationResult) -> Table {
    let mut table = Table::new();
    table.set_titles(row!["Month", "Balance", "Profit", "Drawdown"]);
    for point in &result.points {
        table.add_row(row![
            r->point.month,
            r->format!("{:.2}", point.balance),
            r->format!("{:.2}", point.profit),
            r->format!("{:.2}%", point.drawdown_pct)
        ]);
    }
    boxed(table)
}

pub fn signals_table(result: &SimulationResult) -> Table {
    let mut table = Table::new();
    table.set_titles(row![
        "Symbol",
        "Action",
        "Confidence",
        "Entry",
        "Stop loss",
        "Take profit"
    ]);
    for signal in &result.signals {
        table.add_row(row![
            signal.symbol,
            signal.action,
            r->format!("{}%", signal.confidence_pct),
            r->signal.entry,
            r->signal.stop_loss,
            r->signal.take_profit
        ]);
    }
    boxed(table)
}

/// One row per simulated parameter combination.
pub fn sweep_table(runs: &[(SimulationInput, SimulationResult)]) -> Table {
    let mut table = Table::new();
    table.set_titles(row![
        "Strategy",
        "Risk",
        "Projected",
        "Return",
        "Sharpe",
        "Max DD",
        "P(loss)"
    ]);
    for (input, result) in runs {
        table.add_row(row![
            input.strategy,
            input.risk,
            r->format_usd(result.final_balance().unwrap_or(input.capital)),
            r->format!("{:.1}%", result.expected_return_pct),
            r->format!("{:.2}", result.sharpe),
            r->format!("{:.1}%", result.max_drawdown_pct),
            r->format!("{:.1}%", result.probability_of_loss_pct)
        ]);
    }
    boxed(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tradesim_simulation::run_simulation;

    #[test]
    fn test_format_usd() {
        assert_eq!(format_usd(0.0), "$0");
        assert_eq!(format_usd(999.4), "$999");
        assert_eq!(format_usd(25_000.0), "$25,000");
        assert_eq!(format_usd(60_870.399), "$60,870");
        assert_eq!(format_usd(1_234_567.5), "$1,234,568");
        assert_eq!(format_usd(-4_200.0), "-$4,200");
    }

    #[test]
    fn test_metric_cards_for_default_form() {
        let input = SimulationInput::default();
        let result = run_simulation(&input).unwrap();
        let cards = metric_cards(&input, &result);

        let values: Vec<&str> = cards.iter().map(|c| c.value.as_str()).collect();
        assert_eq!(
            values,
            ["143.5%", "6.58", "92%", "3.1%", "14.2%", "$60,870"]
        );
    }

    #[test]
    fn test_tables_have_one_row_per_entry() {
        let input = SimulationInput::default();
        let result = run_simulation(&input).unwrap();

        assert_eq!(metrics_table(&input, &result).len(), 6);
        assert_eq!(series_table(&result).len(), result.points.len());
        assert_eq!(signals_table(&result).len(), result.signals.len());

        let rendered = signals_table(&result).to_string();
        assert!(rendered.contains("BTCUSDT"));
        assert!(rendered.contains("113.32"));
    }

    #[test]
    fn test_sweep_table() {
        let input = SimulationInput::default();
        let result = run_simulation(&input).unwrap();
        let table = sweep_table(&[(input, result)]);
        assert_eq!(table.len(), 1);
        assert!(table.to_string().contains("Momentum-class"));
    }
}
