//! Batch CSV input and output.
//!
//! ## Input format
//!
//! Headers are matched by name, so column order does not matter. Whitespace
//! around headers and values is trimmed.
//!
//! | Column  | Required | Type    | Notes                          |
//! |---------|----------|---------|--------------------------------|
//! | `ral`   | yes      | decimal | Gross annual salary, e.g. `30000` |
//! | `label` | no       | string  | Copied to the output as is     |
//!
//! ```csv
//! label,ral
//! junior,28000
//! senior,55000.00
//! ```
//!
//! ## Output format
//!
//! One row per input row: `label`, then every [`CalculationResult`] field in
//! declaration order. `effective_rate` is left empty when undefined.
use std::io;
use std::path::Path;

use netto_core::{CalculationResult, NetSalaryCalculator, NetSalaryError};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// One input row.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SalaryRow {
    /// Read from the cell text; a numeric round trip would go through `f64`.
    #[serde(with = "rust_decimal::serde::str")]
    pub ral: Decimal,
    #[serde(default)]
    pub label: Option<String>,
}

/// A calculated row, ready to be written out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchResult {
    pub label: String,
    pub result: CalculationResult,
}

/// Flat output record. The csv writer cannot flatten nested structs.
#[derive(Serialize)]
struct OutputRecord<'a> {
    label: &'a str,
    gross_salary: Decimal,
    social_security_contribution: Decimal,
    taxable_base: Decimal,
    gross_tax: Decimal,
    standard_deduction: Decimal,
    bonus_relief: Decimal,
    credit_relief: Decimal,
    supplementary_support: Decimal,
    net_tax: Decimal,
    regional_surcharge: Decimal,
    municipal_surcharge: Decimal,
    total_surcharges: Decimal,
    net_annual_salary: Decimal,
    net_monthly_salary: Decimal,
    total_withheld: Decimal,
    effective_rate: Option<Decimal>,
}

impl<'a> From<&'a BatchResult> for OutputRecord<'a> {
    fn from(row: &'a BatchResult) -> Self {
        let r = &row.result;
        Self {
            label: &row.label,
            gross_salary: r.gross_salary,
            social_security_contribution: r.social_security_contribution,
            taxable_base: r.taxable_base,
            gross_tax: r.gross_tax,
            standard_deduction: r.standard_deduction,
            bonus_relief: r.bonus_relief,
            credit_relief: r.credit_relief,
            supplementary_support: r.supplementary_support,
            net_tax: r.net_tax,
            regional_surcharge: r.regional_surcharge,
            municipal_surcharge: r.municipal_surcharge,
            total_surcharges: r.total_surcharges,
            net_annual_salary: r.net_annual_salary,
            net_monthly_salary: r.net_monthly_salary,
            total_withheld: r.total_withheld,
            effective_rate: r.effective_rate,
        }
    }
}

/// Errors that can occur while reading, calculating or writing a batch.
///
/// Row numbers are 1-based and count data rows only (header = row 0).
#[derive(Debug, thiserror::Error)]
pub enum CsvLoadError {
    #[error("cannot read '{}': {source}", path.display())]
    Io {
        path: std::path::PathBuf,
        #[source]
        source: io::Error,
    },

    /// Bad structure, missing `ral` column, or a value of the wrong type.
    #[error("CSV parse error on row {row}: {source}")]
    Parse {
        row: usize,
        #[source]
        source: csv::Error,
    },

    #[error("row {row}: {source}")]
    Calculation {
        row: usize,
        #[source]
        source: NetSalaryError,
    },

    #[error("cannot write results: {0}")]
    Write(#[from] csv::Error),
}

/// Parses CSV text and returns the rows in file order.
pub fn load_from_str(input: &str) -> Result<Vec<SalaryRow>, CsvLoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .flexible(false)
        .from_reader(input.as_bytes());

    reader
        .deserialize::<SalaryRow>()
        .enumerate()
        .map(|(idx, result)| {
            result.map_err(|source| CsvLoadError::Parse {
                row: idx + 1,
                source,
            })
        })
        .collect()
}

/// Reads a file from disk and delegates to [`load_from_str`].
pub fn load_from_file(path: &Path) -> Result<Vec<SalaryRow>, CsvLoadError> {
    let contents = std::fs::read_to_string(path).map_err(|source| CsvLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let rows = load_from_str(&contents)?;
    debug!(path = %path.display(), rows = rows.len(), "batch loaded");
    Ok(rows)
}

/// Runs every row through `calculator`, stopping at the first failure.
pub fn calculate_batch(
    calculator: &NetSalaryCalculator,
    rows: &[SalaryRow],
) -> Result<Vec<BatchResult>, CsvLoadError> {
    rows.iter()
        .enumerate()
        .map(|(idx, row)| {
            let result = calculator
                .calculate(row.ral)
                .map_err(|source| CsvLoadError::Calculation {
                    row: idx + 1,
                    source,
                })?;
            Ok(BatchResult {
                label: row.label.clone().unwrap_or_default(),
                result,
            })
        })
        .collect()
}

/// Writes results as CSV with a header row.
pub fn write_results<W: io::Write>(
    writer: W,
    results: &[BatchResult],
) -> Result<(), CsvLoadError> {
    let mut writer = csv::Writer::from_writer(writer);
    for row in results {
        writer.serialize(OutputRecord::from(row))?;
    }
    writer.flush().map_err(csv::Error::from)?;
    Ok(())
}
