use crate::domain::model::{BatchInput, DoseReport};
use crate::utils::error::Result;

/// Anything that can hand over the three form values: CLI flags, a TOML file, the prompted form.
pub trait InputProvider {
    fn initial_mass_kg(&self) -> f64;
    fn initial_brix(&self) -> f64;
    fn target_brix(&self) -> f64;

    fn batch_input(&self) -> BatchInput {
        BatchInput::new(self.initial_mass_kg(), self.initial_brix(), self.target_brix())
    }
}

impl InputProvider for BatchInput {
    fn initial_mass_kg(&self) -> f64 {
        self.initial_mass_kg
    }

    fn initial_brix(&self) -> f64 {
        self.initial_brix
    }

    fn target_brix(&self) -> f64 {
        self.target_brix
    }
}

pub trait ReportRenderer {
    fn render(&self, report: &DoseReport) -> Result<String>;
}
