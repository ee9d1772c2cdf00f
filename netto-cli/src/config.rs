//! Fiscal profile selection.
//!
//! A profile is either one of the built-in [`FiscalConstants`] (picked by
//! year) or a TOML file with one table per calculation step. Amounts and
//! rates are written as strings so they load as exact decimals:
//!
//! ```toml
//! tax_year = 2026
//! payments_per_year = 13
//!
//! [municipal_surcharge]
//! rate = "0.008"
//! exemption_ceiling = "23000"
//! ```
//!
//! See `profiles/milan-2026.toml` for a complete file.

use std::path::{Path, PathBuf};

use netto_core::{FiscalConstants, FiscalConstantsError};
use thiserror::Error;
use tracing::debug;

/// Year used when neither a year nor a profile file is given.
pub const DEFAULT_TAX_YEAR: i32 = 2026;

#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("cannot read profile '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot parse profile: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid profile: {0}")]
    Invalid(#[from] FiscalConstantsError),

    #[error("no built-in profile for tax year {0}")]
    UnknownYear(i32),

    #[error("profile is for tax year {found}, but {requested} was requested")]
    YearMismatch { requested: i32, found: i32 },
}

/// Parses and validates a profile from TOML text.
pub fn profile_from_str(input: &str) -> Result<FiscalConstants, ProfileError> {
    let constants: FiscalConstants = toml::from_str(input)?;
    constants.validate()?;
    Ok(constants)
}

/// Reads a profile file from disk and delegates to [`profile_from_str`].
pub fn load_profile(path: &Path) -> Result<FiscalConstants, ProfileError> {
    let contents = std::fs::read_to_string(path).map_err(|source| ProfileError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let constants = profile_from_str(&contents)?;
    debug!(path = %path.display(), tax_year = constants.tax_year, "profile loaded");
    Ok(constants)
}

/// Picks the fiscal profile for a run.
///
/// A profile file wins over the built-in table; when both a file and a year
/// are given they must agree.
pub fn resolve_profile(
    profile: Option<&Path>,
    year: Option<i32>,
) -> Result<FiscalConstants, ProfileError> {
    match profile {
        Some(path) => {
            let constants = load_profile(path)?;
            match year {
                Some(requested) if requested != constants.tax_year => {
                    Err(ProfileError::YearMismatch {
                        requested,
                        found: constants.tax_year,
                    })
                }
                _ => Ok(constants),
            }
        }
        None => {
            let year = year.unwrap_or(DEFAULT_TAX_YEAR);
            debug!(tax_year = year, "using built-in profile");
            FiscalConstants::for_year(year).ok_or(ProfileError::UnknownYear(year))
        }
    }
}
