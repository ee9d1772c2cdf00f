//! Human-readable and JSON renderings of a calculation.

use std::fmt;

use netto_core::{CalculationResult, FiscalConstants, IncomeTier};
use rust_decimal::Decimal;

use crate::utils::{format_eur, format_pct, format_rate, opt_pct_display};

/// Full breakdown of one salary, printed by the default command.
#[derive(Debug, Clone, Copy)]
pub struct Breakdown<'a> {
    pub result: &'a CalculationResult,
    pub tier: IncomeTier,
    pub payments_per_year: u32,
}

impl<'a> Breakdown<'a> {
    pub fn new(
        result: &'a CalculationResult,
        constants: &FiscalConstants,
    ) -> Self {
        Self {
            result,
            tier: IncomeTier::classify(result.gross_salary, constants),
            payments_per_year: constants.payments_per_year,
        }
    }
}

fn line(
    f: &mut fmt::Formatter<'_>,
    label: &str,
    amount: Decimal,
) -> fmt::Result {
    writeln!(f, "  {label:<24}{:>12}", format_eur(amount))
}

impl fmt::Display for Breakdown<'_> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let r = self.result;

        writeln!(f, "RAL:                {:>14}", format_eur(r.gross_salary))?;
        writeln!(f, "Fascia:             {}", self.tier)?;
        writeln!(f)?;
        writeln!(f, "Netto annuo:        {:>14}", format_eur(r.net_annual_salary))?;
        writeln!(
            f,
            "Netto mensile:      {:>14}  ({} mensilità)",
            format_eur(r.net_monthly_salary),
            self.payments_per_year
        )?;
        writeln!(f, "Aliquota effettiva: {:>14}", opt_pct_display(r.effective_rate))?;
        writeln!(f)?;

        writeln!(f, "Trattenute")?;
        line(f, "Contributi INPS", r.social_security_contribution)?;
        line(f, "IRPEF lorda", r.gross_tax)?;
        line(f, "Detrazioni lavoro dip.", r.standard_deduction)?;
        line(f, "Cuneo fiscale B", r.credit_relief)?;
        line(f, "IRPEF netta", r.net_tax)?;
        line(f, "Add. regionale", r.regional_surcharge)?;
        line(f, "Add. comunale", r.municipal_surcharge)?;

        if r.has_integrations() {
            writeln!(f)?;
            writeln!(f, "Integrazioni")?;
            if r.bonus_relief > Decimal::ZERO {
                line(f, "Bonus cuneo fiscale A", r.bonus_relief)?;
            }
            if r.supplementary_support > Decimal::ZERO {
                line(f, "Trattamento integrativo", r.supplementary_support)?;
            }
        }

        if let Some(shares) = r.shares() {
            writeln!(f)?;
            write!(
                f,
                "Ripartizione:       netto {} · tasse {} · INPS {}",
                format_pct(shares.net),
                format_pct(shares.taxes),
                format_pct(shares.social_security)
            )?;
        }
        Ok(())
    }
}

/// The fixed assumptions behind a profile.
#[derive(Debug, Clone, Copy)]
pub struct Assumptions<'a>(pub &'a FiscalConstants);

impl fmt::Display for Assumptions<'_> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let c = self.0;
        let regional = c
            .regional_surcharge
            .rates
            .iter()
            .map(|rate| format_rate(*rate))
            .collect::<Vec<_>>()
            .join(" / ");

        writeln!(f, "Assunzioni (anno fiscale {})", c.tax_year)?;
        writeln!(f, "  Contratto:          tempo indeterminato, anno intero")?;
        writeln!(f, "  Residenza:          Milano, Lombardia")?;
        writeln!(f, "  Carichi familiari:  nessuno")?;
        writeln!(f, "  Agevolazioni:       nessuna (no Under 36, no Bonus Mamme)")?;
        writeln!(f, "  Mensilità:          {}", c.payments_per_year)?;
        writeln!(
            f,
            "  Contributi INPS:    {} (+{} oltre {})",
            format_rate(c.social_security.base_rate),
            format_rate(c.social_security.additional_rate),
            format_eur(c.social_security.additional_threshold)
        )?;
        writeln!(
            f,
            "  Add. regionale:     {} scaglioni: {regional}",
            c.regional_surcharge.rates.len()
        )?;
        writeln!(
            f,
            "  Add. comunale:      {} · esente se imponibile ≤ {}",
            format_rate(c.municipal_surcharge.rate),
            format_eur(c.municipal_surcharge.exemption_ceiling)
        )?;
        write!(f, "  TFR:                non incluso")
    }
}

/// Pretty-printed JSON of the result.
pub fn to_json(result: &CalculationResult) -> serde_json::Result<String> {
    serde_json::to_string_pretty(result)
}
