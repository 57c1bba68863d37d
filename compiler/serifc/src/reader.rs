//! Run documents.
//!
//! A document is a JSON object holding the styled runs of a text, in
//! order. Every style field is optional:
//!
//! ```json
//! {"runs": [
//!   {"text": "Sub", "underline": true},
//!   {"text": "x y", "underline": true, "super": true},
//!   {"text": "ten", "color": "00000A"},
//!   {"text": "hi", "font": "Courier New", "size": 12}
//! ]}
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;
use serif_ir::{Style, DEFAULT_COLOR, DEFAULT_SIZE};
use serif_parse::StyledRun;
use thiserror::Error;

/// A document that could not be turned into styled runs.
#[derive(Debug, Error)]
pub enum ReadError {
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("malformed run document {origin}: {source}")]
    Json {
        origin: String,
        source: serde_json::Error,
    },
    #[error("invalid colour {value:?} in {origin}")]
    Color { origin: String, value: String },
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RunDocument {
    runs: Vec<RunRecord>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RunRecord {
    text: String,
    #[serde(default)]
    bold: bool,
    #[serde(default)]
    italic: bool,
    #[serde(default)]
    underline: bool,
    #[serde(default)]
    strike: bool,
    #[serde(default)]
    sub: bool,
    #[serde(default, rename = "super")]
    superscript: bool,
    size: Option<u32>,
    color: Option<ColorSpec>,
    font: Option<String>,
}

/// `"FF0000"`, `"#FF0000"`, `"auto"` or a plain integer.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ColorSpec {
    Rgb(u32),
    Hex(String),
}

impl ColorSpec {
    fn resolve(self, origin: &str) -> Result<u32, ReadError> {
        match self {
            ColorSpec::Rgb(value) => Ok(value),
            ColorSpec::Hex(text) if text.eq_ignore_ascii_case("auto") => Ok(DEFAULT_COLOR),
            ColorSpec::Hex(text) => {
                let digits = text.strip_prefix('#').unwrap_or(&text);
                u32::from_str_radix(digits, 16).map_err(|_| ReadError::Color {
                    origin: origin.to_string(),
                    value: text.clone(),
                })
            }
        }
    }
}

impl RunRecord {
    fn into_run(self, origin: &str) -> Result<StyledRun, ReadError> {
        let color = match self.color {
            Some(spec) => spec.resolve(origin)?,
            None => DEFAULT_COLOR,
        };
        let style = Style {
            bold: self.bold,
            italic: self.italic,
            underline: self.underline,
            strike: self.strike,
            sub: self.sub,
            superscript: self.superscript,
            size: self.size.unwrap_or(DEFAULT_SIZE),
            color,
            font: self.font.unwrap_or_default(),
        };
        Ok(StyledRun::new(self.text, style))
    }
}

/// Parse a run document held in memory. `origin` names it in errors.
pub fn parse_runs(json: &str, origin: &str) -> Result<Vec<StyledRun>, ReadError> {
    let document: RunDocument = serde_json::from_str(json).map_err(|source| ReadError::Json {
        origin: origin.to_string(),
        source,
    })?;
    document
        .runs
        .into_iter()
        .map(|record| record.into_run(origin))
        .collect()
}

/// Read and parse the run document at `path`.
pub fn read_runs(path: &Path) -> Result<Vec<StyledRun>, ReadError> {
    let json = std::fs::read_to_string(path).map_err(|source| ReadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), bytes = json.len(), "read run document");
    parse_runs(&json, &path.display().to_string())
}

#[cfg(test)]
mod tests;
