use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use netto_core::NetSalaryCalculator;
use tracing::{debug, info};

use crate::config::resolve_profile;
use crate::csv_loader;
use crate::report::{self, Assumptions, Breakdown};
use crate::utils::{SALARY_MIN, format_eur, is_salary_entered, parse_salary};

/// Salary used when none is given on the command line.
pub const DEFAULT_SALARY: &str = "30000";

/// What a single run of the binary should do.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Salary text as typed; normalised before use.
    pub salary: Option<String>,
    pub json: bool,
    pub batch: Option<PathBuf>,
    pub profile: Option<PathBuf>,
    pub year: Option<i32>,
    pub assumptions: bool,
}

/// Builds the calculator for the selected profile.
pub fn build_calculator(options: &RunOptions) -> Result<NetSalaryCalculator> {
    let constants = resolve_profile(options.profile.as_deref(), options.year)
        .context("cannot load fiscal profile")?;
    let calculator = NetSalaryCalculator::new(constants)?;
    Ok(calculator)
}

/// Executes one run, writing everything meant for the user to `out`.
pub fn run<W: Write>(
    options: &RunOptions,
    out: &mut W,
) -> Result<()> {
    let calculator = build_calculator(options)?;

    if options.assumptions {
        writeln!(out, "{}", Assumptions(calculator.constants()))?;
        return Ok(());
    }

    if let Some(path) = &options.batch {
        let rows = csv_loader::load_from_file(path)?;
        let results = csv_loader::calculate_batch(&calculator, &rows)?;
        csv_loader::write_results(&mut *out, &results)?;
        info!(rows = results.len(), "batch complete");
        return Ok(());
    }

    let text = options.salary.as_deref().unwrap_or(DEFAULT_SALARY);
    let salary = parse_salary(text).with_context(|| format!("cannot read salary '{text}'"))?;
    if !is_salary_entered(salary) {
        writeln!(out, "Inserisci una RAL di almeno {}.", format_eur(SALARY_MIN))?;
        return Ok(());
    }

    debug!(%salary, "calculating");
    let result = calculator.calculate(salary)?;

    if options.json {
        writeln!(out, "{}", report::to_json(&result)?)?;
    } else {
        writeln!(out, "{}", Breakdown::new(&result, calculator.constants()))?;
    }
    Ok(())
}
