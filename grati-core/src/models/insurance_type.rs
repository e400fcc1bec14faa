use serde::{Deserialize, Serialize};

/// Health-insurance scheme of the worker.
///
/// The scheme decides the rate of the extraordinary bonus the employer
/// pays on top of the gratification: the EsSalud contribution it stops
/// making, or the smaller EPS share.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InsuranceType {
    EsSalud,
    Eps,
}

impl InsuranceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::EsSalud => "EsSalud",
            Self::Eps => "EPS",
        }
    }

    /// Parses the scheme name, case-insensitively.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "essalud" => Some(Self::EsSalud),
            "eps" => Some(Self::Eps),
            _ => None,
        }
    }
}
