use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{InsuranceType, TaxBracket};

/// Statutory figures for one gratification semester.
///
/// Groups every legally-set number the worksheets need: the minimum wage
/// (RMV) and the family-allowance rate derived from it, the extraordinary
/// bonus rate per insurance scheme, and the UIT figures behind the
/// income-tax projection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SemesterConfig {
    pub minimum_wage: Decimal,
    pub family_allowance_rate: Decimal,
    pub essalud_bonus_rate: Decimal,
    pub eps_bonus_rate: Decimal,
    /// Complete months in a gratification semester.
    pub semester_months: Decimal,
    pub uit: Decimal,
    /// Annual income below this many UIT is exempt from fifth-category tax.
    pub uit_exemption_factor: Decimal,
    /// Remunerations received in a year: 12 salaries plus 2 gratifications.
    pub annual_remunerations: Decimal,
}

impl SemesterConfig {
    /// Figures in force for the 2024 semesters.
    pub fn current() -> Self {
        Self {
            minimum_wage: Decimal::from(1025),
            family_allowance_rate: Decimal::new(10, 2),
            essalud_bonus_rate: Decimal::new(9, 2),
            eps_bonus_rate: Decimal::new(675, 4),
            semester_months: Decimal::from(6),
            uit: Decimal::from(5150),
            uit_exemption_factor: Decimal::from(7),
            annual_remunerations: Decimal::from(14),
        }
    }

    /// Monthly family allowance: 10% of the minimum wage.
    pub fn family_allowance_amount(&self) -> Decimal {
        self.minimum_wage * self.family_allowance_rate
    }

    /// Extraordinary bonus rate for the given insurance scheme.
    pub fn bonus_rate(&self, insurance_type: InsuranceType) -> Decimal {
        match insurance_type {
            InsuranceType::EsSalud => self.essalud_bonus_rate,
            InsuranceType::Eps => self.eps_bonus_rate,
        }
    }

    /// Builds the progressive income-tax schedule for this semester's UIT.
    ///
    /// Bands end at 5, 20, 35 and 45 UIT, with the last band unbounded.
    pub fn income_tax_brackets(&self) -> Vec<TaxBracket> {
        let bands = [
            (Some(Decimal::from(5)), Decimal::new(8, 2)),
            (Some(Decimal::from(20)), Decimal::new(14, 2)),
            (Some(Decimal::from(35)), Decimal::new(17, 2)),
            (Some(Decimal::from(45)), Decimal::new(20, 2)),
            (None, Decimal::new(30, 2)),
        ];

        let mut brackets = Vec::with_capacity(bands.len());
        let mut lower = Decimal::ZERO;
        for (uit_ceiling, tax_rate) in bands {
            let max_income = uit_ceiling.map(|factor| factor * self.uit);
            brackets.push(TaxBracket {
                min_income: lower,
                max_income,
                tax_rate,
            });
            if let Some(upper) = max_income {
                lower = upper;
            }
        }
        brackets
    }
}
