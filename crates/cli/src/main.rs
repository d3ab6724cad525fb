//! Command Line Interface for the trading simulator.
use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use dotenv::dotenv;
use tracing::info;
use tracing_subscriber::EnvFilter;
use tradesim_domain::{RiskLevel, SimulationInput, Strategy};
use tradesim_simulation::curve::{DEFAULT_HEIGHT, DEFAULT_WIDTH, PerformanceCurve};
use tradesim_simulation::{SimulationEngine, run_simulation};

mod report;

#[derive(Parser)]
#[command(name = "tradesim")]
#[command(about = "Deterministic AI trading simulator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Capital and horizon, shared by every subcommand.
#[derive(Args, Debug, Clone, Copy, PartialEq)]
struct HorizonArgs {
    /// Initial capital in USD
    #[arg(
        short,
        long,
        env = "TRADESIM_CAPITAL",
        default_value_t = SimulationInput::DEFAULT_CAPITAL
    )]
    capital: f64,

    /// Projection horizon in months
    #[arg(
        short,
        long,
        env = "TRADESIM_MONTHS",
        default_value_t = SimulationInput::DEFAULT_DURATION_MONTHS
    )]
    months: u32,
}

/// Simulator form parameters. Each can also come from the environment or a
/// `.env` file.
#[derive(Args, Debug, Clone, PartialEq)]
struct SimulationArgs {
    #[command(flatten)]
    horizon: HorizonArgs,

    /// Risk level (low, medium, high)
    #[arg(short, long, env = "TRADESIM_RISK", default_value = "medium")]
    risk: RiskLevel,

    /// Strategy (momentum-class, smart-balance, adaptive-market-maker, liquidity-saturation)
    #[arg(short, long, env = "TRADESIM_STRATEGY", default_value = "momentum-class")]
    strategy: Strategy,
}

impl SimulationArgs {
    fn to_input(&self) -> SimulationInput {
        SimulationInput::new(
            self.horizon.capital,
            self.risk,
            self.strategy,
            self.horizon.months,
        )
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a single simulation
    Run {
        #[command(flatten)]
        params: SimulationArgs,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },
    /// Compare every strategy and risk level for one capital and horizon
    Sweep {
        #[command(flatten)]
        horizon: HorizonArgs,
    },
    /// Print the balance curve as an SVG document
    Chart {
        #[command(flatten)]
        params: SimulationArgs,

        /// Canvas width
        #[arg(long, default_value_t = DEFAULT_WIDTH)]
        width: f64,

        /// Canvas height
        #[arg(long, default_value_t = DEFAULT_HEIGHT)]
        height: f64,
    },
}

fn main() -> Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match &cli.command {
        Commands::Run { params, format } => {
            let input = params.to_input();
            let engine = SimulationEngine::new(input).context("invalid simulation parameters")?;
            info!(seed = engine.seed(), "Simulating");
            let result = engine.run();

            match format {
                OutputFormat::Json => {
                    println!("{}", serde_json::to_string_pretty(&result)?);
                }
                OutputFormat::Table => {
                    println!(
                        "📊 {} | {} risk | {} months | {}",
                        input.strategy,
                        input.risk,
                        input.duration_months,
                        report::format_usd(input.capital)
                    );
                    report::metrics_table(&input, &result).printstd();
                    println!("\n📈 Performance curve");
                    report::series_table(&result).printstd();
                    println!("\n🤖 Signals");
                    report::signals_table(&result).printstd();
                }
            }
        }
        Commands::Sweep { horizon } => {
            let HorizonArgs { capital, months } = *horizon;
            let mut runs = Vec::with_capacity(Strategy::ALL.len() * RiskLevel::ALL.len());
            for strategy in Strategy::ALL {
                for risk in RiskLevel::ALL {
                    let input = SimulationInput::new(capital, risk, strategy, months);
                    let result = run_simulation(&input)
                        .with_context(|| format!("simulating {strategy} at {risk} risk"))?;
                    runs.push((input, result));
                }
            }

            println!(
                "🔍 Sweep over {} combinations ({} | {} months)",
                runs.len(),
                report::format_usd(capital),
                months
            );
            report::sweep_table(&runs).printstd();
        }
        Commands::Chart {
            params,
            width,
            height,
        } => {
            let result =
                run_simulation(&params.to_input()).context("invalid simulation parameters")?;
            let curve = PerformanceCurve::from_points(&result.points, *width, *height);
            print!("{}", curve.to_svg());
        }
    }

    Ok(())
}
