use std::fmt::Display;

use anyhow::bail;

use crate::errors::GrammarError;
use crate::params::{join_params, parse_param_list, ParamValue};
use crate::Result;

/// Base (state) frequency settings for a model.
///
/// Custom frequencies fix the equilibrium distribution explicitly; values
/// are not checked for summing to one since the engine normalises them.
#[derive(Clone, Debug, PartialEq)]
pub enum BaseFrequencies {
    /// Empirical state frequencies observed from the data (`F`).
    Empirical,
    /// State frequencies optimised by maximum likelihood (`FO`).
    Optimised,
    /// Equal state frequencies (`FQ`).
    Equal,
    /// Fixed frequencies, 4 values for DNA or 20 for amino acids.
    Custom(Vec<ParamValue>),
}

impl BaseFrequencies {
    pub fn custom(frequencies: Vec<f64>) -> Result<Self> {
        check_frequency_count(frequencies.len())?;
        Ok(BaseFrequencies::Custom(
            frequencies.into_iter().map(ParamValue::from).collect(),
        ))
    }

    /// Parses a frequency component, with or without a leading `+`.
    pub fn parse(token: &str) -> Result<Self> {
        let token = token.strip_prefix('+').unwrap_or(token);
        match token {
            "F" => return Ok(BaseFrequencies::Empirical),
            "FO" => return Ok(BaseFrequencies::Optimised),
            "FQ" => return Ok(BaseFrequencies::Equal),
            _ => {}
        }
        if let Some(block) = token
            .strip_prefix("F{")
            .and_then(|rest| rest.strip_suffix('}'))
        {
            let frequencies = parse_param_list(block)?;
            check_frequency_count(frequencies.len())?;
            return Ok(BaseFrequencies::Custom(frequencies));
        }
        bail!(GrammarError {
            message: format!("Unknown state frequency type: '{token}'."),
        });
    }

    pub fn description(&self) -> &'static str {
        match self {
            BaseFrequencies::Empirical => "Empirical state frequency observed from the data.",
            BaseFrequencies::Optimised => {
                "State frequency optimized by maximum-likelihood from the data. Note that this is with letter-O and not digit-0."
            }
            BaseFrequencies::Equal => "Equal state frequency.",
            BaseFrequencies::Custom(_) => "Fixed base frequencies.",
        }
    }
}

impl Display for BaseFrequencies {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BaseFrequencies::Empirical => write!(f, "F"),
            BaseFrequencies::Optimised => write!(f, "FO"),
            BaseFrequencies::Equal => write!(f, "FQ"),
            BaseFrequencies::Custom(frequencies) => {
                write!(f, "F{{{}}}", join_params(frequencies))
            }
        }
    }
}

fn check_frequency_count(count: usize) -> Result<()> {
    if count != 4 && count != 20 {
        bail!(GrammarError {
            message: format!(
                "Expected either 4 frequencies for DNA model or 20 for AA model but got {count}."
            ),
        });
    }
    Ok(())
}
