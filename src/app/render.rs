use crate::domain::model::DoseReport;
use crate::domain::ports::ReportRenderer;
use crate::utils::error::Result;
use serde::{Deserialize, Serialize};

pub const DEFAULT_MASS_DECIMALS: usize = 4;
pub const DEFAULT_BRIX_DECIMALS: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Es,
}

struct Labels {
    headline: &'static str,
    headline_tail: &'static str,
    analysis: &'static str,
    initial_mass: &'static str,
    initial_solids: &'static str,
    of_solids: &'static str,
    sugar: &'static str,
    new_total: &'static str,
    new_solids: &'static str,
    check: &'static str,
    solids: &'static str,
    pulp: &'static str,
    undefined: &'static str,
}

static EN: Labels = Labels {
    headline: "To adjust the pulp, add",
    headline_tail: "of sugar.",
    analysis: "Solution analysis",
    initial_mass: "Initial pulp mass",
    initial_solids: "Initial solids",
    of_solids: "of solids",
    sugar: "Sugar to add",
    new_total: "New total pulp mass",
    new_solids: "New solids mass",
    check: "Final Brix check",
    solids: "solids",
    pulp: "pulp",
    undefined: "undefined (empty batch)",
};

// 原表單的西班牙文字串
static ES: Labels = Labels {
    headline: "Para ajustar la pulpa, debe agregar",
    headline_tail: "de azúcar.",
    analysis: "Análisis de la Solución",
    initial_mass: "Masa inicial de pulpa",
    initial_solids: "Sólidos iniciales",
    of_solids: "de sólidos",
    sugar: "Masa de azúcar a agregar",
    new_total: "Nueva masa total de pulpa",
    new_solids: "Nueva masa de sólidos",
    check: "Verificación de los °Brix finales",
    solids: "de sólidos",
    pulp: "de pulpa",
    undefined: "indefinido (lote vacío)",
};

impl Locale {
    fn labels(self) -> &'static Labels {
        match self {
            Locale::En => &EN,
            Locale::Es => &ES,
        }
    }
}

/// Human-readable result plus the worked verification block.
#[derive(Debug, Clone, Copy)]
pub struct TextRenderer {
    pub locale: Locale,
    pub mass_decimals: usize,
    pub brix_decimals: usize,
}

impl TextRenderer {
    pub fn new(locale: Locale) -> Self {
        Self {
            locale,
            mass_decimals: DEFAULT_MASS_DECIMALS,
            brix_decimals: DEFAULT_BRIX_DECIMALS,
        }
    }
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self::new(Locale::default())
    }
}

impl ReportRenderer for TextRenderer {
    fn render(&self, report: &DoseReport) -> Result<String> {
        let l = self.locale.labels();
        let md = self.mass_decimals;
        let bd = self.brix_decimals;
        let input = &report.input;
        let v = &report.verification;

        let check = match v.final_brix {
            Some(final_brix) => format!(
                "{}: ({:.md$} kg {}) / ({:.md$} kg {}) = {:.bd$} °Brix",
                l.check, v.new_solids_kg, l.solids, v.new_total_mass_kg, l.pulp, final_brix
            ),
            None => format!("{}: {}", l.check, l.undefined),
        };

        let lines = [
            format!(
                "{} {:.md$} kg {}",
                l.headline, report.sugar_mass_kg, l.headline_tail
            ),
            String::new(),
            format!("--- {} ---", l.analysis),
            // 初始質量沿用原表單的浮點寫法 (50.0、12.25)
            format!("{}: {:?} kg", l.initial_mass, input.initial_mass_kg),
            format!(
                "{}: {:?} kg * ({:.bd$}) = {:.bd$} kg {}",
                l.initial_solids,
                input.initial_mass_kg,
                input.initial_brix / 100.0,
                v.initial_solids_kg,
                l.of_solids
            ),
            String::new(),
            format!("{}: {:.md$} kg", l.sugar, report.sugar_mass_kg),
            format!("{}: {:.md$} kg", l.new_total, v.new_total_mass_kg),
            format!("{}: {:.md$} kg", l.new_solids, v.new_solids_kg),
            String::new(),
            check,
        ];

        let mut out = lines.join("\n");
        out.push('\n');
        Ok(out)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRenderer {
    pub pretty: bool,
}

impl ReportRenderer for JsonRenderer {
    fn render(&self, report: &DoseReport) -> Result<String> {
        let json = if self.pretty {
            serde_json::to_string_pretty(report)?
        } else {
            serde_json::to_string(report)?
        };
        Ok(json)
    }
}

/// Renders with whichever renderer the output settings select.
pub fn render_report(
    report: &DoseReport,
    format: OutputFormat,
    text: TextRenderer,
) -> Result<String> {
    match format {
        OutputFormat::Text => text.render(report),
        OutputFormat::Json => JsonRenderer { pretty: true }.render(report),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::session::DoseSession;
    use crate::domain::model::BatchInput;

    fn worked_example() -> DoseReport {
        DoseSession::new(BatchInput::default()).run().unwrap()
    }

    #[test]
    fn test_text_report_english() {
        let text = TextRenderer::default().render(&worked_example()).unwrap();

        assert!(text.starts_with("To adjust the pulp, add 1.6667 kg of sugar."));
        assert!(text.contains("Initial pulp mass: 50.0 kg"));
        assert!(text.contains("Initial solids: 50.0 kg * (0.07) = 3.50 kg of solids"));
        assert!(text.contains("New total pulp mass: 51.6667 kg"));
        assert!(text.contains("New solids mass: 5.1667 kg"));
        assert!(text.contains("= 10.00 °Brix"));
    }

    #[test]
    fn test_text_report_spanish() {
        let text = TextRenderer::new(Locale::Es)
            .render(&worked_example())
            .unwrap();

        assert!(text.contains("debe agregar 1.6667 kg de azúcar."));
        assert!(text.contains("Masa inicial de pulpa: 50.0 kg"));
        assert!(text.contains("Sólidos iniciales: 50.0 kg * (0.07) = 3.50 kg de sólidos"));
        assert!(text.contains("Verificación de los °Brix finales"));
    }

    #[test]
    fn test_custom_decimals() {
        let renderer = TextRenderer {
            locale: Locale::En,
            mass_decimals: 2,
            brix_decimals: 1,
        };
        let text = renderer.render(&worked_example()).unwrap();
        assert!(text.contains("add 1.67 kg"));
        assert!(text.contains("= 10.0 °Brix"));
    }

    #[test]
    fn test_fractional_initial_mass_keeps_its_digits() {
        let report = DoseSession::new(BatchInput::new(12.25, 7.0, 10.0))
            .run()
            .unwrap();
        let text = TextRenderer::default().render(&report).unwrap();
        assert!(text.contains("Initial pulp mass: 12.25 kg"));
        assert!(text.ends_with("°Brix\n"));
    }

    #[test]
    fn test_empty_batch_text() {
        let report = DoseSession::new(BatchInput::new(0.0, 7.0, 10.0))
            .run()
            .unwrap();
        let text = TextRenderer::default().render(&report).unwrap();
        assert!(text.contains("Final Brix check: undefined (empty batch)"));
    }

    #[test]
    fn test_json_report_fields() {
        let json = JsonRenderer { pretty: false }
            .render(&worked_example())
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["input"]["initial_mass_kg"], 50.0);
        let sugar = value["sugar_mass_kg"].as_f64().unwrap();
        assert!((sugar - 1.6667).abs() < 1e-4);
        assert!(value["verification"]["final_brix"].is_number());
    }

    #[test]
    fn test_format_and_locale_deserialize_lowercase() {
        let format: OutputFormat = serde_json::from_str("\"json\"").unwrap();
        let locale: Locale = serde_json::from_str("\"es\"").unwrap();
        assert_eq!(format, OutputFormat::Json);
        assert_eq!(locale, Locale::Es);
    }
}
