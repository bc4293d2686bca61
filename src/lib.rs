pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use app::form::{Form, FormInput};
pub use app::render::{JsonRenderer, Locale, OutputFormat, TextRenderer};
pub use config::toml_config::TomlConfig;
pub use crate::core::{calculator::compute, calculator::SugarDoseCalculator, session::DoseSession};
pub use domain::model::{BatchInput, DoseReport, Verification};
pub use utils::error::{DoseError, Result};
