use serde::{Deserialize, Serialize};

pub const DEFAULT_INITIAL_MASS_KG: f64 = 50.0;
pub const DEFAULT_INITIAL_BRIX: f64 = 7.0;
pub const DEFAULT_TARGET_BRIX: f64 = 10.0;

/// One pulp batch as submitted by the user.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BatchInput {
    pub initial_mass_kg: f64,
    pub initial_brix: f64,
    pub target_brix: f64,
}

impl BatchInput {
    pub fn new(initial_mass_kg: f64, initial_brix: f64, target_brix: f64) -> Self {
        Self {
            initial_mass_kg,
            initial_brix,
            target_brix,
        }
    }
}

impl Default for BatchInput {
    fn default() -> Self {
        Self::new(
            DEFAULT_INITIAL_MASS_KG,
            DEFAULT_INITIAL_BRIX,
            DEFAULT_TARGET_BRIX,
        )
    }
}

/// Mass balance after the sugar is added, recomputed from the dose.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Verification {
    pub initial_solids_kg: f64,
    pub new_total_mass_kg: f64,
    pub new_solids_kg: f64,
    /// `None` for an empty batch, where the concentration is undefined.
    pub final_brix: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DoseReport {
    pub input: BatchInput,
    pub sugar_mass_kg: f64,
    pub verification: Verification,
}
