use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use grati_cli::form::GratificationForm;
use grati_cli::report;
use grati_core::GratificationWorksheet;
use grati_core::models::SemesterConfig;

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Estimates the Peruvian semi-annual gratificación payment.
///
/// Field values are taken exactly as typed and validated before the
/// worksheet runs; amounts may carry an `S/` prefix and comma thousands
/// separators.
#[derive(Debug, Parser)]
struct Cli {
    /// Monthly gross base salary, in soles.
    #[arg(long)]
    salary: String,

    /// Complete months worked in the semester (1-6).
    #[arg(long, default_value = "6")]
    months: String,

    /// Health-insurance scheme: EsSalud or EPS.
    #[arg(long, default_value = "EsSalud")]
    insurance: String,

    /// Add the statutory family allowance to the computation base.
    #[arg(long)]
    family_allowance: bool,

    /// Apply the small-company regime (REMYPE), halving the gratification.
    #[arg(long)]
    small_company: bool,

    /// Total bonuses and commissions received over the semester.
    #[arg(long)]
    bonuses: Option<String>,

    /// Total overtime pay received over the semester.
    #[arg(long)]
    overtime: Option<String>,

    /// Project the fifth-category income-tax withholding on the bonus.
    #[arg(long)]
    project_tax: bool,

    /// Print the raw result as JSON instead of the formatted breakdown.
    #[arg(long)]
    json: bool,
}

impl Cli {
    fn into_form(self) -> GratificationForm {
        GratificationForm {
            salary: self.salary,
            months_worked: self.months,
            insurance_type: self.insurance,
            has_family_allowance: self.family_allowance,
            is_small_company: self.small_company,
            bonus_amount: self.bonuses,
            overtime_amount: self.overtime,
            should_calculate_tax: self.project_tax,
        }
    }
}

// ─── tracing ─────────────────────────────────────────────────────────────────

/// Initialise the tracing subscriber.
///
/// * Honours `RUST_LOG` when set.
/// * Falls back to `info` so normal runs are quiet.
/// * Strips timestamps and target names to keep CLI output clean.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::from("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .without_time()
        .with_target(false)
        .init();
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let as_json = cli.json;

    let input = cli.into_form().validate()?;
    debug!(?input, "validated form input");

    let config = SemesterConfig::current();
    let brackets = config.income_tax_brackets();
    let worksheet = GratificationWorksheet::new(&config, &brackets);
    let result = worksheet.calculate(&input);

    if as_json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print!("{}", report::render(&result));
    }

    Ok(())
}
