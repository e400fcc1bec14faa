//! Raw form state and its validation.
//!
//! The worksheet is total over pre-validated input, so every rejection
//! happens here first: the field values arrive exactly as typed and
//! either become a [`GratificationInput`] or a [`FormError`] telling the
//! user what to fix.

use rust_decimal::Decimal;
use thiserror::Error;

use grati_core::models::InsuranceType;
use grati_core::GratificationInput;

use crate::utils::{ParseAmountError, parse_amount};

/// Raw field values as collected from the command line.
#[derive(Debug, Clone, Default)]
pub struct GratificationForm {
    pub salary: String,
    pub months_worked: String,
    pub insurance_type: String,
    pub has_family_allowance: bool,
    pub is_small_company: bool,
    /// Semester total of bonuses and commissions; `Some` means the
    /// toggle is on.
    pub bonus_amount: Option<String>,
    /// Semester total of overtime pay; `Some` means the toggle is on.
    pub overtime_amount: Option<String>,
    pub should_calculate_tax: bool,
}

/// Reasons a form is rejected before the worksheet runs.
#[derive(Debug, Error)]
pub enum FormError {
    #[error("{field}: {source}")]
    InvalidAmount {
        field: &'static str,
        #[source]
        source: ParseAmountError,
    },

    #[error("monthly salary must be greater than zero")]
    NonPositiveSalary,

    #[error("months worked must be a whole number between 1 and 6, got '{0}'")]
    InvalidMonths(String),

    #[error("unknown insurance type '{0}', expected 'EsSalud' or 'EPS'")]
    UnknownInsuranceType(String),

    #[error("{field} is enabled, so its semester total must be greater than zero")]
    NonPositiveToggleAmount { field: &'static str },
}

impl GratificationForm {
    /// Validates the raw fields into a worksheet input.
    ///
    /// # Errors
    ///
    /// Returns [`FormError`] when the salary is missing, non-numeric or
    /// not positive; when the months fall outside 1..=6; when the
    /// insurance scheme is unknown; or when an enabled bonus/overtime
    /// toggle carries a missing or non-positive amount.
    pub fn validate(&self) -> Result<GratificationInput, FormError> {
        let salary = parse_amount(&self.salary).map_err(|source| FormError::InvalidAmount {
            field: "salary",
            source,
        })?;
        if salary <= Decimal::ZERO {
            return Err(FormError::NonPositiveSalary);
        }

        let months_worked = self
            .months_worked
            .trim()
            .parse::<u8>()
            .ok()
            .filter(|months| (1..=6).contains(months))
            .ok_or_else(|| FormError::InvalidMonths(self.months_worked.clone()))?;

        let insurance_type = InsuranceType::parse(self.insurance_type.trim())
            .ok_or_else(|| FormError::UnknownInsuranceType(self.insurance_type.clone()))?;

        let (has_bonuses, bonus_amount) = toggle_amount("bonuses", self.bonus_amount.as_deref())?;
        let (has_overtime, overtime_amount) =
            toggle_amount("overtime", self.overtime_amount.as_deref())?;

        Ok(GratificationInput {
            salary,
            months_worked,
            insurance_type,
            has_family_allowance: self.has_family_allowance,
            is_small_company: self.is_small_company,
            has_bonuses,
            bonus_amount,
            has_overtime,
            overtime_amount,
            project_income_tax: self.should_calculate_tax,
        })
    }
}

/// An absent field means the toggle is off and zero flows to the core;
/// a present field must parse and be strictly positive.
fn toggle_amount(
    field: &'static str,
    raw: Option<&str>,
) -> Result<(bool, Decimal), FormError> {
    let Some(raw) = raw else {
        return Ok((false, Decimal::ZERO));
    };
    let amount = parse_amount(raw).map_err(|source| FormError::InvalidAmount { field, source })?;
    if amount <= Decimal::ZERO {
        return Err(FormError::NonPositiveToggleAmount { field });
    }
    Ok((true, amount))
}
