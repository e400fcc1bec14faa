//! Fifth-category income-tax projection.
//!
//! The gratification itself is exempt from fifth-category income tax; the
//! extraordinary insurance bonus paid with it is not. To estimate the
//! withholding on that bonus, the projection annualises the worker's
//! computable remuneration and derives an effective rate from the
//! progressive schedule:
//!
//! | Step | Description |
//! |------|-------------|
//! | 1    | Projected annual income: computation base × 14 (12 salaries + 2 gratifications) |
//! | 2    | Taxable income: annual income − 7 UIT, floored at zero |
//! | 3    | Projected annual tax: taxable income through the UIT bands, low to high |
//! | 4    | Effective rate: annual tax ÷ annual income |
//!
//! The projection always uses the full computation base, even under the
//! small-company regime; only the gratification proration is halved there.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use grati_core::calculations::common::round_half_up;
//! use grati_core::calculations::worksheets::IncomeTaxProjection;
//! use grati_core::models::SemesterConfig;
//!
//! let config = SemesterConfig::current();
//! let brackets = config.income_tax_brackets();
//! let projection = IncomeTaxProjection::new(&config, &brackets);
//!
//! // S/ 3,000 a month projects to S/ 42,000 a year: S/ 5,950 taxable in
//! // the 8% band, so a S/ 270 bonus carries S/ 3.06 of withholding.
//! let rate = projection.effective_rate(dec!(3000));
//! assert_eq!(round_half_up(rate * dec!(270)), dec!(3.06));
//! ```

use rust_decimal::Decimal;
use tracing::debug;

use crate::models::{SemesterConfig, TaxBracket};

/// Effective-rate projection over the progressive schedule.
///
/// Borrows the semester figures and the bracket table; all methods are
/// total, so a worksheet composing this projection has no failure modes.
#[derive(Debug, Clone)]
pub struct IncomeTaxProjection<'a> {
    config: &'a SemesterConfig,
    brackets: &'a [TaxBracket],
}

impl<'a> IncomeTaxProjection<'a> {
    /// Brackets must be contiguous and sorted ascending, as produced by
    /// [`SemesterConfig::income_tax_brackets`].
    pub fn new(
        config: &'a SemesterConfig,
        brackets: &'a [TaxBracket],
    ) -> Self {
        Self { config, brackets }
    }

    /// Effective tax rate to apply to the taxable part of the payment.
    ///
    /// Returns zero when the projected annual income is not positive.
    pub fn effective_rate(
        &self,
        monthly_base: Decimal,
    ) -> Decimal {
        let annual_income = self.projected_annual_income(monthly_base);
        if annual_income <= Decimal::ZERO {
            return Decimal::ZERO;
        }

        let taxable_income = self.taxable_income(annual_income);
        let annual_tax = self.annual_tax(taxable_income);
        debug!(%annual_income, %taxable_income, %annual_tax, "projected fifth-category tax");

        annual_tax / annual_income
    }

    fn projected_annual_income(
        &self,
        monthly_base: Decimal,
    ) -> Decimal {
        monthly_base * self.config.annual_remunerations
    }

    /// Annual income above the 7-UIT exemption, floored at zero.
    fn taxable_income(
        &self,
        annual_income: Decimal,
    ) -> Decimal {
        (annual_income - self.config.uit_exemption_factor * self.config.uit).max(Decimal::ZERO)
    }

    /// Walks the bands low to high, taxing what falls inside each one.
    fn annual_tax(
        &self,
        taxable_income: Decimal,
    ) -> Decimal {
        let mut remaining = taxable_income;
        let mut tax = Decimal::ZERO;
        for bracket in self.brackets {
            if remaining <= Decimal::ZERO {
                break;
            }
            let taxed_here = match bracket.max_income {
                Some(upper) => remaining.min(upper - bracket.min_income),
                None => remaining,
            };
            tax += taxed_here * bracket.tax_rate;
            remaining -= taxed_here;
        }
        tax
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn config() -> SemesterConfig {
        SemesterConfig::current()
    }

    // =========================================================================
    // annual_tax tests
    // =========================================================================

    #[test]
    fn annual_tax_is_zero_for_zero_taxable_income() {
        let config = config();
        let brackets = config.income_tax_brackets();
        let projection = IncomeTaxProjection::new(&config, &brackets);

        assert_eq!(projection.annual_tax(Decimal::ZERO), Decimal::ZERO);
    }

    #[test]
    fn annual_tax_first_band_only() {
        let config = config();
        let brackets = config.income_tax_brackets();
        let projection = IncomeTaxProjection::new(&config, &brackets);

        // 5950 entirely inside the 8% band.
        assert_eq!(projection.annual_tax(dec!(5950)), dec!(476.00));
    }

    #[test]
    fn annual_tax_at_exactly_five_uit() {
        let config = config();
        let brackets = config.income_tax_brackets();
        let projection = IncomeTaxProjection::new(&config, &brackets);

        // 25750 * 8% = 2060, nothing spills into the 14% band.
        assert_eq!(projection.annual_tax(dec!(25750)), dec!(2060.00));
    }

    #[test]
    fn annual_tax_spanning_three_bands() {
        let config = config();
        let brackets = config.income_tax_brackets();
        let projection = IncomeTaxProjection::new(&config, &brackets);

        // 2060 + 77250 * 14% + 950 * 17% = 2060 + 10815 + 161.50
        assert_eq!(projection.annual_tax(dec!(103950)), dec!(13036.50));
    }

    #[test]
    fn annual_tax_top_band_is_unbounded() {
        let config = config();
        let brackets = config.income_tax_brackets();
        let projection = IncomeTaxProjection::new(&config, &brackets);

        // Through all four bounded bands (36307.50) plus 100000 at 30%.
        assert_eq!(projection.annual_tax(dec!(331750)), dec!(66307.50));
    }

    #[test]
    fn annual_tax_with_empty_table_accumulates_nothing() {
        let config = config();
        let projection = IncomeTaxProjection::new(&config, &[]);

        assert_eq!(projection.annual_tax(dec!(103950)), Decimal::ZERO);
    }

    // =========================================================================
    // taxable_income tests
    // =========================================================================

    #[test]
    fn taxable_income_subtracts_the_seven_uit_exemption() {
        let config = config();
        let brackets = config.income_tax_brackets();
        let projection = IncomeTaxProjection::new(&config, &brackets);

        assert_eq!(projection.taxable_income(dec!(42000)), dec!(5950));
    }

    #[test]
    fn taxable_income_floors_at_zero_below_the_exemption() {
        let config = config();
        let brackets = config.income_tax_brackets();
        let projection = IncomeTaxProjection::new(&config, &brackets);

        // 14 monthly payments of 2000 stay under 7 UIT.
        assert_eq!(projection.taxable_income(dec!(28000)), Decimal::ZERO);
    }

    // =========================================================================
    // effective_rate tests
    // =========================================================================

    #[test]
    fn effective_rate_is_zero_for_zero_base() {
        let config = config();
        let brackets = config.income_tax_brackets();
        let projection = IncomeTaxProjection::new(&config, &brackets);

        assert_eq!(projection.effective_rate(Decimal::ZERO), Decimal::ZERO);
    }

    #[test]
    fn effective_rate_is_zero_below_the_exemption() {
        let config = config();
        let brackets = config.income_tax_brackets();
        let projection = IncomeTaxProjection::new(&config, &brackets);

        assert_eq!(projection.effective_rate(dec!(2000)), Decimal::ZERO);
    }

    #[test]
    fn effective_rate_is_annual_tax_over_annual_income() {
        let config = config();
        let brackets = config.income_tax_brackets();
        let projection = IncomeTaxProjection::new(&config, &brackets);

        // 476 / 42000, checked through a round trip to avoid asserting on
        // the full 28-digit quotient.
        let rate = projection.effective_rate(dec!(3000));

        assert_eq!(
            rate.round_dp_with_strategy(6, rust_decimal::RoundingStrategy::MidpointAwayFromZero),
            dec!(0.011333)
        );
    }
}
