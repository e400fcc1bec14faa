mod insurance_type;
mod semester_config;
mod tax_bracket;

pub use insurance_type::InsuranceType;
pub use semester_config::SemesterConfig;
pub use tax_bracket::TaxBracket;
