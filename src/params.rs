//! Numeric parameter values as they appear in model strings.
//!
//! Parameters parsed from text keep their original lexeme so that a model
//! string round-trips byte-identically (`5.30` stays `5.30`, not `5.3`).
//! Parameters built from typed values format with the standard float
//! formatting, which is this crate's canonical form.

use std::fmt::Display;

use anyhow::bail;
use itertools::Itertools;

use crate::errors::GrammarError;
use crate::Result;

#[derive(Debug, Clone)]
pub struct ParamValue {
    value: f64,
    lexeme: Option<String>,
}

impl ParamValue {
    /// Parses a single numeric token, preserving its written form.
    pub fn parse(token: &str) -> Result<Self> {
        let trimmed = token.trim();
        let Ok(value) = trimmed.parse::<f64>() else {
            bail!(GrammarError {
                message: format!("Expected a numeric parameter value, got '{trimmed}'."),
            });
        };
        Ok(ParamValue {
            value,
            lexeme: Some(trimmed.to_string()),
        })
    }

    pub fn value(&self) -> f64 {
        self.value
    }
}

impl From<f64> for ParamValue {
    fn from(value: f64) -> Self {
        ParamValue {
            value,
            lexeme: None,
        }
    }
}

impl PartialEq for ParamValue {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Display for ParamValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.lexeme {
            Some(lexeme) => f.write_str(lexeme),
            None => write!(f, "{}", self.value),
        }
    }
}

/// Parses the comma-separated contents of a `{...}` parameter block.
pub fn parse_param_list(text: &str) -> Result<Vec<ParamValue>> {
    text.split(',').map(ParamValue::parse).collect()
}

/// Joins parameters back into the comma-separated block contents.
pub fn join_params(params: &[ParamValue]) -> String {
    params.iter().join(",")
}

pub fn param_values(params: &[ParamValue]) -> Vec<f64> {
    params.iter().map(ParamValue::value).collect()
}
