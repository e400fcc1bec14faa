//! Semi-annual gratification worksheet.
//!
//! Estimates the statutory gratification payment for one semester from
//! the worker's remuneration and situation:
//!
//! | Step | Description |
//! |------|-------------|
//! | 1    | Computable remuneration base: salary + family allowance + semester averages of bonuses and overtime |
//! | 2    | Small-company regime (REMYPE): halve the base |
//! | 3    | Base gratification: (base ÷ 6) × complete months worked |
//! | 4    | Extraordinary bonus: base gratification × insurance rate (9% EsSalud, 6.75% EPS) |
//! | 5    | Gross total: base gratification + extraordinary bonus |
//! | 6    | Income tax: bonus × projected effective rate (optional; the gratification itself is exempt) |
//! | 7    | Net total: gross total − income tax |
//!
//! Every monetary output is rounded to two decimal places independently;
//! intermediates are carried unrounded.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use grati_core::calculations::worksheets::{GratificationInput, GratificationWorksheet};
//! use grati_core::models::{InsuranceType, SemesterConfig};
//!
//! let config = SemesterConfig::current();
//! let brackets = config.income_tax_brackets();
//! let worksheet = GratificationWorksheet::new(&config, &brackets);
//!
//! let input = GratificationInput {
//!     salary: dec!(3000),
//!     months_worked: 6,
//!     insurance_type: InsuranceType::EsSalud,
//!     has_family_allowance: false,
//!     is_small_company: false,
//!     has_bonuses: false,
//!     bonus_amount: dec!(0),
//!     has_overtime: false,
//!     overtime_amount: dec!(0),
//!     project_income_tax: false,
//! };
//!
//! let result = worksheet.calculate(&input);
//!
//! assert_eq!(result.base_gratification, dec!(3000.00));
//! assert_eq!(result.extraordinary_bonus, dec!(270.00));
//! assert_eq!(result.gross_total, dec!(3270.00));
//! assert_eq!(result.net_total, dec!(3270.00));
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculations::common::round_half_up;
use crate::calculations::worksheets::IncomeTaxProjection;
use crate::models::{InsuranceType, SemesterConfig, TaxBracket};

/// Input values for the gratification worksheet.
///
/// The worksheet assumes these were validated by the caller: a positive
/// salary, months worked in 1..=6, non-negative amounts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GratificationInput {
    /// Monthly gross base salary.
    pub salary: Decimal,

    /// Complete months worked in the semester (1..=6).
    pub months_worked: u8,

    /// Health-insurance scheme; decides the extraordinary bonus rate.
    pub insurance_type: InsuranceType,

    /// Whether the worker receives the statutory family allowance.
    pub has_family_allowance: bool,

    /// Whether the employer is registered in the small-company regime
    /// (REMYPE), which halves the gratification.
    pub is_small_company: bool,

    /// Whether bonuses or commissions were received during the semester.
    pub has_bonuses: bool,

    /// Total bonuses and commissions over the semester.
    /// Meaningful only when `has_bonuses` is set.
    pub bonus_amount: Decimal,

    /// Whether overtime was worked in enough months to count.
    pub has_overtime: bool,

    /// Total overtime pay over the semester.
    /// Meaningful only when `has_overtime` is set.
    pub overtime_amount: Decimal,

    /// Whether to project the fifth-category withholding on the bonus.
    pub project_income_tax: bool,
}

/// Result of the gratification worksheet.
///
/// Totals first, then the breakdown of the computable remuneration the
/// totals were derived from. All monetary fields are rounded to two
/// decimal places; `salary_input` is echoed as supplied and
/// `insurance_rate` is the raw rate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GratificationResult {
    /// Gratification prorated to the months worked.
    pub base_gratification: Decimal,

    /// Extraordinary bonus: the insurance surcharge on the gratification.
    pub extraordinary_bonus: Decimal,

    /// Base gratification plus extraordinary bonus.
    pub gross_total: Decimal,

    /// Projected fifth-category withholding; zero when not requested.
    pub income_tax: Decimal,

    /// Gross total minus income tax.
    pub net_total: Decimal,

    pub salary_input: Decimal,
    pub family_allowance: Decimal,
    pub average_bonuses: Decimal,
    pub average_overtime: Decimal,
    /// Computable remuneration before the small-company halving.
    pub computation_base: Decimal,
    pub insurance_rate: Decimal,
    pub months_worked: u8,
    pub is_small_company: bool,
}

/// Calculator for the semi-annual gratification.
///
/// Borrows the semester figures and the income-tax bracket table. The
/// calculation is a total function: inputs are assumed pre-validated and
/// no step can fail.
#[derive(Debug, Clone)]
pub struct GratificationWorksheet<'a> {
    config: &'a SemesterConfig,
    brackets: &'a [TaxBracket],
}

impl<'a> GratificationWorksheet<'a> {
    pub fn new(
        config: &'a SemesterConfig,
        brackets: &'a [TaxBracket],
    ) -> Self {
        Self { config, brackets }
    }

    /// Runs the whole worksheet and returns the rounded breakdown.
    pub fn calculate(
        &self,
        input: &GratificationInput,
    ) -> GratificationResult {
        let family_allowance = self.family_allowance(input.has_family_allowance);
        let average_bonuses = self.semester_average(input.has_bonuses, input.bonus_amount);
        let average_overtime = self.semester_average(input.has_overtime, input.overtime_amount);

        let computation_base = input.salary + family_allowance + average_bonuses + average_overtime;
        let proration_base = self.proration_base(computation_base, input.is_small_company);
        let base_gratification = proration_base / self.config.semester_months
            * Decimal::from(input.months_worked);

        let insurance_rate = self.config.bonus_rate(input.insurance_type);
        let extraordinary_bonus = base_gratification * insurance_rate;
        let gross_total = base_gratification + extraordinary_bonus;

        // The projection always annualises the full computation base; the
        // exemption and the bands apply to income, not to the halved
        // proration base.
        let income_tax = if input.project_income_tax {
            let projection = IncomeTaxProjection::new(self.config, self.brackets);
            extraordinary_bonus * projection.effective_rate(computation_base)
        } else {
            Decimal::ZERO
        };
        let net_total = gross_total - income_tax;

        GratificationResult {
            base_gratification: round_half_up(base_gratification),
            extraordinary_bonus: round_half_up(extraordinary_bonus),
            gross_total: round_half_up(gross_total),
            income_tax: round_half_up(income_tax),
            net_total: round_half_up(net_total),
            salary_input: input.salary,
            family_allowance: round_half_up(family_allowance),
            average_bonuses: round_half_up(average_bonuses),
            average_overtime: round_half_up(average_overtime),
            computation_base: round_half_up(computation_base),
            insurance_rate,
            months_worked: input.months_worked,
            is_small_company: input.is_small_company,
        }
    }

    fn family_allowance(
        &self,
        has_family_allowance: bool,
    ) -> Decimal {
        if has_family_allowance {
            self.config.family_allowance_amount()
        } else {
            Decimal::ZERO
        }
    }

    /// Monthly average of a semester total, zero when the item is off.
    fn semester_average(
        &self,
        enabled: bool,
        semester_total: Decimal,
    ) -> Decimal {
        if enabled {
            semester_total / self.config.semester_months
        } else {
            Decimal::ZERO
        }
    }

    fn proration_base(
        &self,
        computation_base: Decimal,
        is_small_company: bool,
    ) -> Decimal {
        if is_small_company {
            computation_base / Decimal::TWO
        } else {
            computation_base
        }
    }
}
