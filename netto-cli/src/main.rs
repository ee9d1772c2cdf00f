use std::io;
use std::path::PathBuf;

use clap::Parser;

use netto_cli::app::{self, RunOptions};
use netto_cli::logging::init_logging;

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Net salary calculator for an Italian private-sector employee.
///
/// Turns a gross annual salary (RAL) into net annual and monthly pay,
/// showing every contribution, tax, relief and surcharge on the way.
#[derive(Debug, Parser)]
#[command(name = "netto", version)]
struct Cli {
    /// Gross annual salary, e.g. `30000`, `30.000` or `"€ 30 000"`.
    #[arg(default_value = app::DEFAULT_SALARY, conflicts_with_all = ["batch", "assumptions"])]
    ral: String,

    /// Print the result as JSON.
    #[arg(long)]
    json: bool,

    /// CSV file with a `ral` column (and optional `label`); results go to
    /// stdout as CSV.
    #[arg(long, value_name = "FILE", conflicts_with = "json")]
    batch: Option<PathBuf>,

    /// TOML fiscal profile to use instead of the built-in one.
    #[arg(long, value_name = "FILE")]
    profile: Option<PathBuf>,

    /// Tax year of the built-in profile.
    #[arg(long)]
    year: Option<i32>,

    /// Print the assumptions behind the profile and exit.
    #[arg(long)]
    assumptions: bool,

    /// Also append log output to this file.
    #[arg(long, value_name = "FILE")]
    log_file: Option<PathBuf>,
}

impl From<Cli> for RunOptions {
    fn from(cli: Cli) -> Self {
        Self {
            salary: Some(cli.ral),
            json: cli.json,
            batch: cli.batch,
            profile: cli.profile,
            year: cli.year,
            assumptions: cli.assumptions,
        }
    }
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_file.as_deref())?;

    let options = RunOptions::from(cli);
    app::run(&options, &mut io::stdout().lock())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn salary_rejected_with_batch() {
        assert!(Cli::try_parse_from(["netto", "30000", "--batch", "in.csv"]).is_err());
        assert!(Cli::try_parse_from(["netto", "--batch", "in.csv"]).is_ok());
    }

    #[test]
    fn salary_rejected_with_assumptions() {
        assert!(Cli::try_parse_from(["netto", "30000", "--assumptions"]).is_err());
        assert!(Cli::try_parse_from(["netto", "--assumptions"]).is_ok());
    }

    #[test]
    fn salary_defaults_when_omitted() {
        let cli = Cli::try_parse_from(["netto", "--json"]).unwrap();

        assert_eq!(cli.ral, app::DEFAULT_SALARY);
    }
}
