use crate::core::calculator::SugarDoseCalculator;
use crate::domain::model::{BatchInput, DoseReport, Verification};
use crate::domain::ports::{InputProvider, ReportRenderer};
use crate::utils::error::{DoseError, Result};
use crate::utils::validation::Validate;

/// One explicit request/response cycle: collect, validate, compute, report.
pub struct DoseSession<P: InputProvider> {
    provider: P,
    calculator: SugarDoseCalculator,
}

impl<P: InputProvider> DoseSession<P> {
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            calculator: SugarDoseCalculator,
        }
    }

    pub fn run(&self) -> Result<DoseReport> {
        let input = self.provider.batch_input();
        tracing::debug!("Submitted batch: {:?}", input);

        input.validate()?;

        // 只擋嚴格反轉；相等時照常計算並得到 0
        if input.initial_brix > input.target_brix {
            tracing::warn!(
                "Rejected inverted range: {} °Brix -> {} °Brix",
                input.initial_brix,
                input.target_brix
            );
            return Err(DoseError::InvertedRange {
                initial: input.initial_brix,
                target: input.target_brix,
            });
        }

        let sugar_mass_kg = self.calculator.compute(
            input.initial_mass_kg,
            input.initial_brix,
            input.target_brix,
        )?;
        let verification = Verification::from_dose(&input, sugar_mass_kg);

        tracing::info!(
            "Sugar dose: {:.4} kg for {} kg at {} -> {} °Brix",
            sugar_mass_kg,
            input.initial_mass_kg,
            input.initial_brix,
            input.target_brix
        );

        Ok(DoseReport {
            input,
            sugar_mass_kg,
            verification,
        })
    }

    pub fn run_and_render<R: ReportRenderer>(&self, renderer: &R) -> Result<String> {
        let report = self.run()?;
        renderer.render(&report)
    }
}

impl Validate for BatchInput {
    fn validate(&self) -> Result<()> {
        crate::utils::validation::validate_non_negative("initial_mass_kg", self.initial_mass_kg)?;
        crate::utils::validation::validate_non_negative("initial_brix", self.initial_brix)?;
        crate::utils::validation::validate_non_negative("target_brix", self.target_brix)?;
        Ok(())
    }
}
