pub mod calculator;
pub mod session;
pub mod verification;

pub use crate::domain::model::{BatchInput, DoseReport, Verification};
pub use crate::domain::ports::{InputProvider, ReportRenderer};
pub use crate::utils::error::Result;
