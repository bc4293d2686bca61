//! Sugar dose from a solids mass balance.
//!
//! Added sugar is treated as 100% soluble solids, so it raises both the
//! solids mass and the total mass of the batch:
//!
//! ```text
//! c1 = (m * c0 + x) / (m + x)   =>   x = m * (c1 - c0) / (1 - c1)
//! ```

use crate::utils::error::{DoseError, Result};
use crate::utils::validation::validate_non_negative;

/// Returns the kilograms of sugar to add to `initial_mass_kg` of pulp at
/// `initial_brix` to reach `target_brix`.
///
/// Returns `0.0` when the target is already met or the batch is empty.
/// Fails with [`DoseError::DegenerateTarget`] when sugar is needed but the
/// target is 100 °Brix or more. An empty batch wins over a degenerate
/// target: `compute(0.0, 5.0, 100.0)` is `Ok(0.0)`.
/// Fails with [`DoseError::NonFiniteResult`] when the dose or the resulting
/// batch mass overflows `f64`.
pub fn compute(initial_mass_kg: f64, initial_brix: f64, target_brix: f64) -> Result<f64> {
    validate_non_negative("initial_mass_kg", initial_mass_kg)?;
    validate_non_negative("initial_brix", initial_brix)?;
    validate_non_negative("target_brix", target_brix)?;

    let c0 = initial_brix / 100.0;
    let c1 = target_brix / 100.0;

    if c0 >= c1 || initial_mass_kg == 0.0 {
        return Ok(0.0);
    }

    if c1 >= 1.0 {
        return Err(DoseError::DegenerateTarget {
            target: target_brix,
        });
    }

    let sugar_mass_kg = initial_mass_kg * (c1 - c0) / (1.0 - c1);
    if !sugar_mass_kg.is_finite() || !(initial_mass_kg + sugar_mass_kg).is_finite() {
        return Err(DoseError::NonFiniteResult {
            initial_mass_kg,
            target: target_brix,
        });
    }

    Ok(sugar_mass_kg)
}

/// Zero-sized handle over [`compute`], held by [`DoseSession`](crate::core::session::DoseSession).
#[derive(Debug, Clone, Copy, Default)]
pub struct SugarDoseCalculator;

impl SugarDoseCalculator {
    pub fn compute(&self, initial_mass_kg: f64, initial_brix: f64, target_brix: f64) -> Result<f64> {
        compute(initial_mass_kg, initial_brix, target_brix)
    }
}
