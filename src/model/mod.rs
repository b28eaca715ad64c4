//! The model aggregate: a substitution model with optional base frequency
//! and rate-type components, and its canonical engine-string form.

use std::fmt::Display;
use std::str::FromStr;

use anyhow::bail;
use log::debug;

use crate::errors::SemanticError;
use crate::substitution_models::SubstitutionModel;
use crate::Result;

mod freq_type;
mod rate_type;

pub use freq_type::BaseFrequencies;
pub use rate_type::{
    DiscreteGamma, FreeRate, InvariableSites, RateHeterogeneity, RateType,
};

/// A complete model specification.
///
/// Components may arrive in any order in a parsed string but are always
/// re-emitted in the fixed order {submodel, frequency, rate type}. Models
/// are immutable once constructed.
#[derive(Clone, Debug, PartialEq)]
pub struct Model {
    submodel: SubstitutionModel,
    frequencies: Option<BaseFrequencies>,
    rate_type: Option<RateType>,
}

impl Model {
    pub fn new(
        submodel: SubstitutionModel,
        frequencies: Option<BaseFrequencies>,
        rate_type: Option<RateType>,
    ) -> Self {
        // An empty rate type serializes to nothing and is dropped.
        let rate_type = rate_type.filter(|rate_type| !rate_type.is_empty());
        Model {
            submodel,
            frequencies,
            rate_type,
        }
    }

    /// Parses an engine model string such as
    /// `GTR{4.39,5.30,4.39,1.0,12.1}+F{0.1,0.2,0.3,0.4}+I{0.2}+G3{0.7}`.
    pub fn parse(text: &str) -> Result<Self> {
        debug!("Parsing model string '{}'", text);
        let Some((submodel_str, components)) = text.split_once('+') else {
            return Ok(Model::new(SubstitutionModel::identify(text)?, None, None));
        };
        let submodel = SubstitutionModel::identify(submodel_str)?;

        let mut frequencies = None;
        let mut invariable_sites: Option<InvariableSites> = None;
        let mut heterogeneity = None;

        for component in components.split('+') {
            if component.starts_with('F') {
                if frequencies.is_some() {
                    bail!(SemanticError {
                        message: format!(
                            "Model '{text}' contains multiple base frequency specifications."
                        ),
                    });
                }
                frequencies = Some(BaseFrequencies::parse(component)?);
            } else if component.starts_with('I') {
                if invariable_sites.is_some() {
                    bail!(SemanticError {
                        message: format!(
                            "Model '{text}' contains multiple specifications for invariable sites."
                        ),
                    });
                }
                invariable_sites = Some(InvariableSites::parse(component)?);
            } else if component.starts_with('G') || component.starts_with('R') {
                if heterogeneity.is_some() {
                    bail!(SemanticError {
                        message: format!(
                            "Model '{text}' contains multiple rate heterogeneity specifications."
                        ),
                    });
                }
                heterogeneity = Some(RateHeterogeneity::parse(component)?);
            } else {
                bail!(SemanticError {
                    message: format!("Model '{text}' contains unexpected component."),
                });
            }
        }

        let rate_type = if invariable_sites.is_some() || heterogeneity.is_some() {
            Some(RateType::new(
                invariable_sites.unwrap_or_default(),
                heterogeneity,
            ))
        } else {
            None
        };
        Ok(Model::new(submodel, frequencies, rate_type))
    }

    pub fn submodel(&self) -> &SubstitutionModel {
        &self.submodel
    }

    pub fn frequencies(&self) -> Option<&BaseFrequencies> {
        self.frequencies.as_ref()
    }

    pub fn rate_type(&self) -> Option<&RateType> {
        self.rate_type.as_ref()
    }

    pub fn invariable_sites(&self) -> bool {
        self.rate_type
            .as_ref()
            .is_some_and(|rate_type| rate_type.invariable_sites().is_active())
    }

    pub fn heterogeneity(&self) -> Option<&RateHeterogeneity> {
        self.rate_type
            .as_ref()
            .and_then(|rate_type| rate_type.heterogeneity())
    }
}

impl Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.submodel)?;
        if let Some(frequencies) = &self.frequencies {
            write!(f, "+{frequencies}")?;
        }
        if let Some(rate_type) = &self.rate_type {
            write!(f, "+{rate_type}")?;
        }
        Ok(())
    }
}

impl FromStr for Model {
    type Err = anyhow::Error;

    fn from_str(text: &str) -> Result<Self> {
        Model::parse(text)
    }
}

#[cfg(test)]
mod tests;
