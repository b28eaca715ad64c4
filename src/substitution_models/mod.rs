//! Registries of the substitution-model families understood by the engine
//! and the tagged union tying them together.

use std::fmt::Display;

use anyhow::bail;
use log::debug;

use crate::errors::{GrammarError, SemanticError};
use crate::params::{join_params, parse_param_list, ParamValue};
use crate::Result;

mod amino_acid;
mod lie_markov;
mod standard_dna;

pub use amino_acid::AaModel;
pub use lie_markov::{LieModel, LiePairing};
pub use standard_dna::StandardDnaModel;
pub(crate) use standard_dna::RateNaming;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModelType {
    Nucleotide,
    Protein,
}

impl Display for ModelType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ModelType::Nucleotide => write!(f, "nucleotide"),
            ModelType::Protein => write!(f, "protein"),
        }
    }
}

/// A substitution model from one of the three supported families, together
/// with any user-supplied parameter vector.
///
/// Rate-parameter arity is not checked here; the engine is the authority on
/// rejecting vectors of the wrong length or with out-of-range values.
#[derive(Clone, Debug, PartialEq)]
pub enum SubstitutionModel {
    StandardDna(StandardDnaModel, Option<Vec<ParamValue>>),
    LieMarkov(LieModel, Option<LiePairing>, Option<Vec<ParamValue>>),
    AminoAcid(AaModel),
}

impl SubstitutionModel {
    /// Resolves a submodel token such as `GTR`, `GTR{1.0,2.0}`, `WS6.6` or
    /// `LG` against the family registries.
    ///
    /// A trailing `{...}` block is split off first (unbalanced braces are a
    /// grammar error), then amino-acid names are tried (they take no
    /// parameters), then Lie-Markov names with an optional two-letter
    /// pairing prefix, then standard DNA names.
    pub fn identify(name: &str) -> Result<Self> {
        let (bare, params) = split_off_params(name)?;

        if let Some(aa_model) = AaModel::from_name(bare) {
            if params.is_some() {
                bail!(GrammarError {
                    message: format!(
                        "Amino-acid model '{bare}' does not take a parameter block."
                    ),
                });
            }
            return Ok(SubstitutionModel::AminoAcid(aa_model));
        }

        let (pairing, lie_name) = match bare.get(..2).and_then(LiePairing::from_name) {
            Some(pairing) => (Some(pairing), &bare[2..]),
            None => (None, bare),
        };
        if let Some(lie_model) = LieModel::from_name(lie_name) {
            return Ok(SubstitutionModel::LieMarkov(lie_model, pairing, params));
        }

        if let Some(dna_model) = StandardDnaModel::from_name(bare) {
            return Ok(SubstitutionModel::StandardDna(dna_model, params));
        }

        debug!("No family registry matched '{}'", name);
        bail!(SemanticError {
            message: format!("Unknown substitution model: '{name}'."),
        });
    }

    /// The family token without pairing prefix or parameters.
    pub fn base_name(&self) -> &'static str {
        match self {
            SubstitutionModel::StandardDna(model, _) => model.name(),
            SubstitutionModel::LieMarkov(model, _, _) => model.name(),
            SubstitutionModel::AminoAcid(model) => model.name(),
        }
    }

    pub fn model_type(&self) -> ModelType {
        match self {
            SubstitutionModel::AminoAcid(_) => ModelType::Protein,
            _ => ModelType::Nucleotide,
        }
    }

    pub fn description(&self) -> String {
        match self {
            SubstitutionModel::StandardDna(model, _) => model.description().to_string(),
            SubstitutionModel::LieMarkov(model, pairing, _) => match pairing {
                Some(pairing) => {
                    format!("{} Pairing: {}", model.description(), pairing.description())
                }
                None => model.description().to_string(),
            },
            SubstitutionModel::AminoAcid(model) => model.description().to_string(),
        }
    }
}

impl Display for SubstitutionModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SubstitutionModel::StandardDna(model, params) => {
                write!(f, "{}{}", model.name(), param_block(params))
            }
            SubstitutionModel::LieMarkov(model, pairing, params) => {
                let prefix = pairing.map(|p| p.name()).unwrap_or_default();
                write!(f, "{}{}{}", prefix, model.name(), param_block(params))
            }
            SubstitutionModel::AminoAcid(model) => write!(f, "{}", model.name()),
        }
    }
}

fn param_block(params: &Option<Vec<ParamValue>>) -> String {
    match params {
        Some(params) if !params.is_empty() => format!("{{{}}}", join_params(params)),
        _ => String::new(),
    }
}

/// Splits a trailing `{...}` parameter block off a submodel token.
fn split_off_params(name: &str) -> Result<(&str, Option<Vec<ParamValue>>)> {
    let Some(start) = name.find('{') else {
        if name.contains('}') {
            bail!(GrammarError {
                message: format!("Unbalanced brackets in model name '{name}'."),
            });
        }
        return Ok((name, None));
    };
    if !name.ends_with('}') {
        bail!(GrammarError {
            message: format!("Missing closing bracket for parameterisation of '{name}'."),
        });
    }
    let params = parse_param_list(&name[start + 1..name.len() - 1])?;
    Ok((&name[..start], Some(params)))
}

#[cfg(test)]
mod tests;
