//! Emission of projected values.
//!
//! Values are written as soon as their page arrives; the emitter never
//! buffers across pages.

use colored::Colorize;
use serde_json::Value;

/// Output format for emitted values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    /// Pretty-printed for people; bare strings print without quotes.
    #[default]
    Human,
    /// One compact JSON document per line.
    Json,
    /// YAML documents separated by `---`.
    Yaml,
}

/// Writes projected values to stdout in the selected format.
#[derive(Debug)]
pub struct Emitter {
    format: Format,
    emitted: usize,
}

impl Emitter {
    pub fn new(format: Format) -> Self {
        Self { format, emitted: 0 }
    }

    /// Emits one value.
    pub fn emit(&mut self, value: &Value) {
        self.emitted += 1;
        match self.format {
            Format::Human => match value {
                Value::String(s) => println!("{}", s),
                other => match serde_json::to_string_pretty(other) {
                    Ok(rendered) => println!("{}", rendered),
                    Err(e) => tracing::warn!("could not render value: {}", e),
                },
            },
            Format::Json => match serde_json::to_string(value) {
                Ok(rendered) => println!("{}", rendered),
                Err(e) => tracing::warn!("could not render value: {}", e),
            },
            Format::Yaml => match serde_yaml::to_string(value) {
                Ok(rendered) => {
                    println!("---");
                    print!("{}", rendered);
                }
                Err(e) => tracing::warn!("could not render value: {}", e),
            },
        }
    }

    /// Number of values emitted so far.
    pub fn emitted(&self) -> usize {
        self.emitted
    }

    /// Closing note for interactive runs; machine formats stay clean.
    pub fn finish(&self) {
        if self.format == Format::Human && self.emitted == 0 {
            eprintln!("{}", "(no output)".bright_black());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn emitter_counts_values() {
        let mut emitter = Emitter::new(Format::Json);
        emitter.emit(&json!({"Id": "j-1"}));
        emitter.emit(&json!("plain"));
        assert_eq!(emitter.emitted(), 2);
    }
}
