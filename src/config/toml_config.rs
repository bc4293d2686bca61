use crate::app::render::{
    Locale, OutputFormat, TextRenderer, DEFAULT_BRIX_DECIMALS, DEFAULT_MASS_DECIMALS,
};
use crate::core::InputProvider;
use crate::domain::model::{DEFAULT_INITIAL_BRIX, DEFAULT_INITIAL_MASS_KG, DEFAULT_TARGET_BRIX};
use crate::utils::error::{DoseError, Result};
use crate::utils::validation::{validate_non_negative, validate_range, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

const MAX_DECIMALS: usize = 10;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub batch: BatchConfig,
    pub output: Option<OutputConfig>,
}

/// `[batch]` 區塊，缺少的欄位沿用表單預設值
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BatchConfig {
    pub name: Option<String>,
    pub initial_mass_kg: Option<f64>,
    pub initial_brix: Option<f64>,
    pub target_brix: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: Option<OutputFormat>,
    pub lang: Option<Locale>,
    pub mass_decimals: Option<usize>,
    pub brix_decimals: Option<usize>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| DoseError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${INITIAL_BRIX})
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| DoseError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }

    pub fn validate_config(&self) -> Result<()> {
        validate_non_negative("batch.initial_mass_kg", self.initial_mass_kg())?;
        validate_non_negative("batch.initial_brix", self.initial_brix())?;
        validate_non_negative("batch.target_brix", self.target_brix())?;

        validate_range("output.mass_decimals", self.mass_decimals(), 0, MAX_DECIMALS)?;
        validate_range("output.brix_decimals", self.brix_decimals(), 0, MAX_DECIMALS)?;

        Ok(())
    }

    pub fn batch_name(&self) -> Option<&str> {
        self.batch.name.as_deref()
    }

    pub fn format(&self) -> OutputFormat {
        self.output
            .as_ref()
            .and_then(|o| o.format)
            .unwrap_or_default()
    }

    pub fn lang(&self) -> Locale {
        self.output.as_ref().and_then(|o| o.lang).unwrap_or_default()
    }

    pub fn mass_decimals(&self) -> usize {
        self.output
            .as_ref()
            .and_then(|o| o.mass_decimals)
            .unwrap_or(DEFAULT_MASS_DECIMALS)
    }

    pub fn brix_decimals(&self) -> usize {
        self.output
            .as_ref()
            .and_then(|o| o.brix_decimals)
            .unwrap_or(DEFAULT_BRIX_DECIMALS)
    }

    pub fn text_renderer(&self) -> TextRenderer {
        TextRenderer {
            locale: self.lang(),
            mass_decimals: self.mass_decimals(),
            brix_decimals: self.brix_decimals(),
        }
    }
}

impl InputProvider for TomlConfig {
    fn initial_mass_kg(&self) -> f64 {
        self.batch.initial_mass_kg.unwrap_or(DEFAULT_INITIAL_MASS_KG)
    }

    fn initial_brix(&self) -> f64 {
        self.batch.initial_brix.unwrap_or(DEFAULT_INITIAL_BRIX)
    }

    fn target_brix(&self) -> f64 {
        self.batch.target_brix.unwrap_or(DEFAULT_TARGET_BRIX)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_basic_toml_config() {
        let toml_content = r#"
[batch]
name = "mango-lot-3"
initial_mass_kg = 100.0
initial_brix = 5.0
target_brix = 20.0

[output]
format = "json"
lang = "es"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.batch_name(), Some("mango-lot-3"));
        assert_eq!(config.initial_mass_kg(), 100.0);
        assert_eq!(config.target_brix(), 20.0);
        assert_eq!(config.format(), OutputFormat::Json);
        assert_eq!(config.lang(), Locale::Es);
        assert_eq!(config.mass_decimals(), 4);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_fields_use_form_defaults() {
        let config = TomlConfig::from_toml_str("[batch]\n").unwrap();

        assert_eq!(
            config.batch_input(),
            crate::domain::model::BatchInput::default()
        );
        assert_eq!(config.format(), OutputFormat::Text);
        assert_eq!(config.brix_decimals(), 2);
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("BRIX_DOSE_TEST_TARGET", "12.5");

        let toml_content = r#"
[batch]
initial_mass_kg = 50.0
initial_brix = 7.0
target_brix = ${BRIX_DOSE_TEST_TARGET}
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.target_brix(), 12.5);

        std::env::remove_var("BRIX_DOSE_TEST_TARGET");
    }

    #[test]
    fn test_unset_env_var_is_left_alone() {
        let toml_content = r#"
[batch]
name = "${BRIX_DOSE_TEST_UNSET_NAME}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.batch_name(), Some("${BRIX_DOSE_TEST_UNSET_NAME}"));
    }

    #[test]
    fn test_config_validation() {
        let negative = TomlConfig::from_toml_str("[batch]\ninitial_brix = -1.0\n").unwrap();
        assert!(matches!(
            negative.validate(),
            Err(DoseError::NegativeInput { .. })
        ));

        let decimals =
            TomlConfig::from_toml_str("[batch]\n[output]\nmass_decimals = 42\n").unwrap();
        assert!(matches!(
            decimals.validate(),
            Err(DoseError::InvalidConfigValueError { .. })
        ));
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = TomlConfig::from_toml_str("[batch\ninitial_mass_kg = ").unwrap_err();
        assert!(matches!(err, DoseError::ConfigError { .. }));
    }

    #[test]
    fn test_unknown_format_rejected() {
        let err = TomlConfig::from_toml_str("[batch]\n[output]\nformat = \"xml\"\n").unwrap_err();
        assert!(matches!(err, DoseError::ConfigError { .. }));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();

        let toml_content = r#"
[batch]
name = "file-test"
initial_mass_kg = 80.0
"#;

        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.batch_name(), Some("file-test"));
        assert_eq!(config.initial_mass_kg(), 80.0);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = TomlConfig::from_file("/nonexistent/brix-dose.toml").unwrap_err();
        assert!(matches!(err, DoseError::IoError(_)));
    }
}
