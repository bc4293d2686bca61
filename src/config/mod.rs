pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli_config::CliConfig;

#[cfg(feature = "cli")]
mod cli_config {
    use crate::app::render::{Locale, OutputFormat, TextRenderer};
    use crate::core::InputProvider;
    use crate::domain::model::{DEFAULT_INITIAL_BRIX, DEFAULT_INITIAL_MASS_KG, DEFAULT_TARGET_BRIX};
    use crate::utils::error::Result;
    use crate::utils::validation::{validate_non_negative, Validate};
    use clap::Parser;

    #[derive(Debug, Clone, Parser)]
    #[command(name = "brix-dose")]
    #[command(about = "Sugar needed to raise a fruit pulp batch to a target °Brix")]
    pub struct CliConfig {
        /// Initial pulp mass in kg
        #[arg(long, default_value_t = DEFAULT_INITIAL_MASS_KG)]
        pub initial_mass: f64,

        /// Initial °Brix of the pulp
        #[arg(long, default_value_t = DEFAULT_INITIAL_BRIX)]
        pub initial_brix: f64,

        /// Target °Brix
        #[arg(long, default_value_t = DEFAULT_TARGET_BRIX)]
        pub target_brix: f64,

        /// Prompt for the values instead of reading flags
        #[arg(short, long)]
        pub interactive: bool,

        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        pub format: OutputFormat,

        #[arg(long, value_enum, default_value_t = Locale::En)]
        pub lang: Locale,

        #[arg(short, long, help = "Enable verbose output")]
        pub verbose: bool,

        #[arg(long, help = "Emit logs as JSON on stderr")]
        pub log_json: bool,
    }

    impl CliConfig {
        pub fn text_renderer(&self) -> TextRenderer {
            TextRenderer::new(self.lang)
        }
    }

    impl InputProvider for CliConfig {
        fn initial_mass_kg(&self) -> f64 {
            self.initial_mass
        }

        fn initial_brix(&self) -> f64 {
            self.initial_brix
        }

        fn target_brix(&self) -> f64 {
            self.target_brix
        }
    }

    impl Validate for CliConfig {
        fn validate(&self) -> Result<()> {
            // 互動模式下旗標只當預設值，同樣不可為負
            validate_non_negative("--initial-mass", self.initial_mass)?;
            validate_non_negative("--initial-brix", self.initial_brix)?;
            validate_non_negative("--target-brix", self.target_brix)?;
            Ok(())
        }
    }

}
