use thiserror::Error;

#[derive(Error, Debug)]
pub enum DoseError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}': {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("{field} must be non-negative, got {value}")]
    NegativeInput { field: String, value: f64 },

    #[error("{field} must be a finite number, got {value}")]
    NonFiniteInput { field: String, value: f64 },

    #[error("Initial Brix ({initial}) is greater than target Brix ({target})")]
    InvertedRange { initial: f64, target: f64 },

    #[error("Target Brix {target} cannot be reached by adding sugar")]
    DegenerateTarget { target: f64 },

    #[error("Sugar dose for {initial_mass_kg} kg at target {target} °Brix overflows")]
    NonFiniteResult { initial_mass_kg: f64, target: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl DoseError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            DoseError::NegativeInput { .. }
            | DoseError::NonFiniteInput { .. }
            | DoseError::InvertedRange { .. }
            | DoseError::DegenerateTarget { .. }
            | DoseError::NonFiniteResult { .. } => ErrorCategory::Input,
            DoseError::ConfigError { .. } | DoseError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            DoseError::IoError(_) | DoseError::SerializationError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// 對應的程序退出碼
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 1,
            ErrorSeverity::High => 2,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            DoseError::InvertedRange { .. } => {
                "Target Brix must be greater than the initial Brix to add sugar.".to_string()
            }
            DoseError::DegenerateTarget { target } => format!(
                "A target of {} °Brix is not reachable: pure sugar is 100 °Brix.",
                target
            ),
            DoseError::NegativeInput { field, .. } => {
                format!("The value for {} cannot be negative.", field)
            }
            DoseError::NonFiniteInput { field, .. } => {
                format!("The value for {} is not a valid number.", field)
            }
            DoseError::NonFiniteResult { initial_mass_kg, .. } => format!(
                "The sugar dose for {} kg of pulp is too large to compute.",
                initial_mass_kg
            ),
            DoseError::IoError(e) => format!("Could not read or write a file: {}", e),
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            DoseError::InvertedRange { .. } => {
                "Lower the initial Brix or raise the target Brix"
            }
            DoseError::DegenerateTarget { .. } => "Choose a target Brix below 100",
            DoseError::NegativeInput { .. } | DoseError::NonFiniteInput { .. } => {
                "Enter a number greater than or equal to 0"
            }
            DoseError::ConfigError { .. } => "Check that the configuration file is valid TOML",
            DoseError::InvalidConfigValueError { .. } => {
                "Fix the highlighted configuration value and try again"
            }
            DoseError::NonFiniteResult { .. } => "Use a smaller initial pulp mass",
            DoseError::IoError(_) => "Check that the path exists and is readable",
            DoseError::SerializationError(_) => "Retry with --format text",
        }
    }
}

pub type Result<T> = std::result::Result<T, DoseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_errors_are_medium_severity() {
        let err = DoseError::InvertedRange {
            initial: 12.0,
            target: 10.0,
        };
        assert_eq!(err.category(), ErrorCategory::Input);
        assert_eq!(err.severity(), ErrorSeverity::Medium);
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_config_and_system_exit_codes() {
        let config = DoseError::ConfigError {
            message: "bad".to_string(),
        };
        assert_eq!(config.exit_code(), 2);

        let io = DoseError::IoError(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));
        assert_eq!(io.category(), ErrorCategory::System);
        assert_eq!(io.exit_code(), 3);
    }

    #[test]
    fn test_overflow_is_an_input_error() {
        let err = DoseError::NonFiniteResult {
            initial_mass_kg: 1e308,
            target: 99.0,
        };
        assert_eq!(err.category(), ErrorCategory::Input);
        assert_eq!(err.exit_code(), 1);
        assert!(err.user_friendly_message().contains("too large"));
    }

    #[test]
    fn test_degenerate_target_message() {
        let err = DoseError::DegenerateTarget { target: 100.0 };
        assert!(err.user_friendly_message().contains("100"));
        assert_eq!(err.recovery_suggestion(), "Choose a target Brix below 100");
    }
}
