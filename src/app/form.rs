use crate::domain::model::BatchInput;
use crate::domain::ports::InputProvider;
use crate::utils::error::Result;
use std::io::{BufRead, Write};

struct Field {
    label: &'static str,
    default: f64,
}

/// Prompted entry of the three batch values over any reader/writer pair.
///
/// An empty line (or end of input) keeps the shown default. Values that do
/// not parse or are negative are refused and asked for again.
pub struct Form<R: BufRead, W: Write> {
    reader: R,
    writer: W,
    defaults: BatchInput,
}

impl<R: BufRead, W: Write> Form<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self::with_defaults(reader, writer, BatchInput::default())
    }

    pub fn with_defaults(reader: R, writer: W, defaults: BatchInput) -> Self {
        Self {
            reader,
            writer,
            defaults,
        }
    }

    pub fn collect(&mut self) -> Result<FormInput> {
        let fields = [
            Field {
                label: "Initial pulp mass (kg)",
                default: self.defaults.initial_mass_kg,
            },
            Field {
                label: "Initial °Brix",
                default: self.defaults.initial_brix,
            },
            Field {
                label: "Target °Brix",
                default: self.defaults.target_brix,
            },
        ];

        let mut values = [0.0; 3];
        for (slot, field) in values.iter_mut().zip(fields.iter()) {
            *slot = self.ask(field)?;
        }

        let input = BatchInput::new(values[0], values[1], values[2]);
        tracing::debug!("Form submitted: {:?}", input);
        Ok(FormInput(input))
    }

    fn ask(&mut self, field: &Field) -> Result<f64> {
        loop {
            write!(self.writer, "{} [{}]: ", field.label, field.default)?;
            self.writer.flush()?;

            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                writeln!(self.writer)?;
                return Ok(field.default);
            }

            let trimmed = line.trim();
            if trimmed.is_empty() {
                return Ok(field.default);
            }

            match trimmed.replace(',', ".").parse::<f64>() {
                Ok(value) if value.is_finite() && value >= 0.0 => return Ok(value),
                Ok(_) => writeln!(self.writer, "  Value must be a number >= 0.")?,
                Err(_) => writeln!(self.writer, "  '{}' is not a number.", trimmed)?,
            }
        }
    }
}

/// Values collected by [`Form::collect`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FormInput(pub BatchInput);

impl InputProvider for FormInput {
    fn initial_mass_kg(&self) -> f64 {
        self.0.initial_mass_kg
    }

    fn initial_brix(&self) -> f64 {
        self.0.initial_brix
    }

    fn target_brix(&self) -> f64 {
        self.0.target_brix
    }
}
