pub mod calculations;
pub mod models;

pub use calculations::worksheets::{
    GratificationInput, GratificationResult, GratificationWorksheet, IncomeTaxProjection,
};
pub use models::*;
