use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One band of the progressive fifth-category income-tax schedule.
///
/// Bands are contiguous and sorted ascending; the last band is unbounded
/// (`max_income` is `None`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBracket {
    pub min_income: Decimal,
    pub max_income: Option<Decimal>,
    pub tax_rate: Decimal,
}
