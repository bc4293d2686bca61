use crate::domain::model::{BatchInput, Verification};

impl Verification {
    /// Recomputes the batch after `sugar_mass_kg` is mixed in, so the dose can be audited.
    pub fn from_dose(input: &BatchInput, sugar_mass_kg: f64) -> Self {
        let initial_solids_kg = input.initial_mass_kg * (input.initial_brix / 100.0);
        let new_total_mass_kg = input.initial_mass_kg + sugar_mass_kg;
        let new_solids_kg = initial_solids_kg + sugar_mass_kg;

        let final_brix = if new_total_mass_kg > 0.0 {
            Some(new_solids_kg / new_total_mass_kg * 100.0)
        } else {
            None
        };

        Self {
            initial_solids_kg,
            new_total_mass_kg,
            new_solids_kg,
            final_brix,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::calculator::compute;

    #[test]
    fn test_verification_of_worked_example() {
        let input = BatchInput::new(50.0, 7.0, 10.0);
        let sugar = compute(50.0, 7.0, 10.0).unwrap();
        let v = Verification::from_dose(&input, sugar);

        assert!((v.initial_solids_kg - 3.5).abs() < 1e-9);
        assert!((v.new_total_mass_kg - 51.6667).abs() < 1e-4);
        assert!((v.new_solids_kg - 5.1667).abs() < 1e-4);
        assert!((v.final_brix.unwrap() - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_no_sugar_keeps_initial_brix() {
        let input = BatchInput::new(40.0, 12.0, 12.0);
        let v = Verification::from_dose(&input, 0.0);

        assert_eq!(v.new_total_mass_kg, 40.0);
        assert!((v.final_brix.unwrap() - 12.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_batch_has_no_final_brix() {
        let input = BatchInput::new(0.0, 7.0, 10.0);
        let v = Verification::from_dose(&input, 0.0);

        assert_eq!(v.initial_solids_kg, 0.0);
        assert_eq!(v.final_brix, None);
    }
}
