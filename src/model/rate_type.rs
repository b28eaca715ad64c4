use std::fmt::Display;

use anyhow::bail;
use itertools::Itertools;

use crate::errors::{GrammarError, SemanticError};
use crate::params::{parse_param_list, ParamValue};
use crate::{Result, DEFAULT_RATE_CATEGORIES};

/// Invariable-sites setting of a model.
///
/// The flag and the proportion share one slot: a proportion implies the
/// flag, so the two cannot be supplied independently.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum InvariableSites {
    #[default]
    Off,
    On,
    Proportion(ParamValue),
}

impl InvariableSites {
    pub fn proportion(p: f64) -> Result<Self> {
        check_proportion(p)?;
        Ok(InvariableSites::Proportion(ParamValue::from(p)))
    }

    /// Parses an `I` or `I{p}` component. The token must start with `I`.
    pub(crate) fn parse(component: &str) -> Result<Self> {
        let remainder = &component[1..];
        if remainder.is_empty() {
            return Ok(InvariableSites::On);
        }
        let Some(block) = remainder
            .strip_prefix('{')
            .and_then(|rest| rest.strip_suffix('}'))
        else {
            bail!(GrammarError {
                message: format!(
                    "Invalid specification for proportion of invariable sites, got '{component}'."
                ),
            });
        };
        let p = ParamValue::parse(block)?;
        check_proportion(p.value())?;
        Ok(InvariableSites::Proportion(p))
    }

    pub fn is_active(&self) -> bool {
        !matches!(self, InvariableSites::Off)
    }
}

fn check_proportion(p: f64) -> Result<()> {
    if !(0.0..1.0).contains(&p) {
        bail!(SemanticError {
            message: format!(
                "The proportion of invariable sites must be in the range [0,1), got {p}."
            ),
        });
    }
    Ok(())
}

/// Discrete Gamma rate heterogeneity (Yang, 1994), `G[n][{alpha}]`.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct DiscreteGamma {
    categories: Option<u32>,
    alpha: Option<ParamValue>,
}

impl DiscreteGamma {
    pub fn new(categories: Option<u32>, alpha: Option<f64>) -> Self {
        DiscreteGamma {
            categories,
            alpha: alpha.map(ParamValue::from),
        }
    }

    pub fn categories(&self) -> u32 {
        self.categories.unwrap_or(DEFAULT_RATE_CATEGORIES)
    }

    pub fn alpha(&self) -> Option<f64> {
        self.alpha.as_ref().map(ParamValue::value)
    }

    fn parse(component: &str) -> Result<Self> {
        let (categories, block) = split_categories(component)?;
        let alpha = match block {
            None => None,
            Some(block) => {
                if block.trim().parse::<f64>().is_err() {
                    bail!(GrammarError {
                        message: format!(
                            "Parameterisation of Discrete Gamma Model is not a number, got '{component}'."
                        ),
                    });
                }
                Some(ParamValue::parse(block)?)
            }
        };
        Ok(DiscreteGamma { categories, alpha })
    }
}

impl Display for DiscreteGamma {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "G")?;
        if let Some(n) = self.categories {
            if n != DEFAULT_RATE_CATEGORIES {
                write!(f, "{n}")?;
            }
        }
        if let Some(alpha) = &self.alpha {
            write!(f, "{{{alpha}}}")?;
        }
        Ok(())
    }
}

/// FreeRate heterogeneity (Yang, 1995; Soubrier et al., 2012),
/// `R[n][{w1,r1,...}]`.
///
/// The parameter block interleaves weights and rates positionally; this is
/// the engine's wire format and is preserved as-is on serialization.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct FreeRate {
    categories: Option<u32>,
    weights: Option<Vec<ParamValue>>,
    rates: Option<Vec<ParamValue>>,
}

impl FreeRate {
    pub fn new(categories: Option<u32>) -> Self {
        FreeRate {
            categories,
            weights: None,
            rates: None,
        }
    }

    pub fn with_parameters(
        categories: Option<u32>,
        weights: Vec<f64>,
        rates: Vec<f64>,
    ) -> Result<Self> {
        let expected = categories.unwrap_or(DEFAULT_RATE_CATEGORIES) as usize;
        if weights.len() != expected || rates.len() != expected {
            bail!(GrammarError {
                message: format!(
                    "Expected {} weights and rates but got {} and {}.",
                    expected,
                    weights.len(),
                    rates.len()
                ),
            });
        }
        Ok(FreeRate {
            categories,
            weights: Some(weights.into_iter().map(ParamValue::from).collect()),
            rates: Some(rates.into_iter().map(ParamValue::from).collect()),
        })
    }

    pub fn categories(&self) -> u32 {
        self.categories.unwrap_or(DEFAULT_RATE_CATEGORIES)
    }

    pub fn weights(&self) -> Option<Vec<f64>> {
        self.weights
            .as_ref()
            .map(|weights| weights.iter().map(ParamValue::value).collect())
    }

    pub fn rates(&self) -> Option<Vec<f64>> {
        self.rates
            .as_ref()
            .map(|rates| rates.iter().map(ParamValue::value).collect())
    }

    fn parse(component: &str) -> Result<Self> {
        let (categories, block) = split_categories(component)?;
        let Some(block) = block else {
            return Ok(FreeRate::new(categories));
        };
        let values = parse_param_list(block)?;
        let expected = 2 * categories.unwrap_or(DEFAULT_RATE_CATEGORIES) as usize;
        if values.len() != expected {
            bail!(GrammarError {
                message: format!(
                    "Expected {} parameters but got {}.",
                    expected,
                    values.len()
                ),
            });
        }
        let (weights, rates) = deinterleave(values);
        Ok(FreeRate {
            categories,
            weights: Some(weights),
            rates: Some(rates),
        })
    }
}

fn deinterleave(values: Vec<ParamValue>) -> (Vec<ParamValue>, Vec<ParamValue>) {
    let mut weights = Vec::with_capacity(values.len() / 2);
    let mut rates = Vec::with_capacity(values.len() / 2);
    for (i, value) in values.into_iter().enumerate() {
        if i % 2 == 0 {
            weights.push(value);
        } else {
            rates.push(value);
        }
    }
    (weights, rates)
}

impl Display for FreeRate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "R")?;
        if let Some(n) = self.categories {
            if n != DEFAULT_RATE_CATEGORIES {
                write!(f, "{n}")?;
            }
        }
        if let (Some(weights), Some(rates)) = (&self.weights, &self.rates) {
            let interleaved = weights
                .iter()
                .zip(rates.iter())
                .flat_map(|(w, r)| [w, r])
                .join(",");
            write!(f, "{{{interleaved}}}")?;
        }
        Ok(())
    }
}

/// Cross-site rate variation, either discrete-Gamma or FreeRate.
#[derive(Clone, Debug, PartialEq)]
pub enum RateHeterogeneity {
    Gamma(DiscreteGamma),
    FreeRate(FreeRate),
}

impl RateHeterogeneity {
    /// Parses a heterogeneity component, dispatching on the leading letter.
    pub fn parse(component: &str) -> Result<Self> {
        match component.chars().next() {
            Some('G') => Ok(RateHeterogeneity::Gamma(DiscreteGamma::parse(component)?)),
            Some('R') => Ok(RateHeterogeneity::FreeRate(FreeRate::parse(component)?)),
            _ => bail!(GrammarError {
                message: format!("Unexpected value for rate model '{component}'."),
            }),
        }
    }
}

impl Display for RateHeterogeneity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RateHeterogeneity::Gamma(gamma) => write!(f, "{gamma}"),
            RateHeterogeneity::FreeRate(free_rate) => write!(f, "{free_rate}"),
        }
    }
}

/// Invariable sites combined with an optional rate heterogeneity component.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct RateType {
    invariable_sites: InvariableSites,
    heterogeneity: Option<RateHeterogeneity>,
}

impl RateType {
    pub fn new(invariable_sites: InvariableSites, heterogeneity: Option<RateHeterogeneity>) -> Self {
        RateType {
            invariable_sites,
            heterogeneity,
        }
    }

    /// Parses a joined rate-type token such as `I`, `I{0.2}+G3{0.7}` or `R5`,
    /// with or without a leading `+`.
    pub fn parse(token: &str) -> Result<Self> {
        let token = token.strip_prefix('+').unwrap_or(token);
        if !token.starts_with('I') {
            return Ok(RateType::new(
                InvariableSites::Off,
                Some(RateHeterogeneity::parse(token)?),
            ));
        }
        let (invariable_token, heterogeneity) = match token.split_once('+') {
            Some((invariable_token, rest)) => {
                (invariable_token, Some(RateHeterogeneity::parse(rest)?))
            }
            None => (token, None),
        };
        Ok(RateType::new(
            InvariableSites::parse(invariable_token)?,
            heterogeneity,
        ))
    }

    pub fn invariable_sites(&self) -> &InvariableSites {
        &self.invariable_sites
    }

    pub fn heterogeneity(&self) -> Option<&RateHeterogeneity> {
        self.heterogeneity.as_ref()
    }

    /// True when neither part is present; such a RateType is omitted from
    /// the model string entirely.
    pub fn is_empty(&self) -> bool {
        !self.invariable_sites.is_active() && self.heterogeneity.is_none()
    }

    pub fn description(&self) -> &'static str {
        match (self.invariable_sites.is_active(), &self.heterogeneity) {
            (false, None) => "no invariable sites, no rate heterogeneity model.",
            (true, None) => "allowing for a proportion of invariable sites.",
            (false, Some(RateHeterogeneity::Gamma(_))) => {
                "discrete Gamma model (Yang, 1994) with default 4 rate categories. The number of categories can be changed with e.g. +G8."
            }
            (true, Some(RateHeterogeneity::Gamma(_))) => {
                "invariable site plus discrete Gamma model (Gu et al., 1995)."
            }
            (false, Some(RateHeterogeneity::FreeRate(_))) => {
                "FreeRate model (Yang, 1995; Soubrier et al., 2012) that generalizes the +G model by relaxing the assumption of Gamma-distributed rates. The number of categories can be specified with e.g. +R6 (default 4 categories if not specified). The FreeRate model typically fits data better than the +G model and is recommended for analysis of large data sets."
            }
            (true, Some(RateHeterogeneity::FreeRate(_))) => {
                "invariable site plus FreeRate model."
            }
        }
    }
}

impl Display for RateType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.invariable_sites {
            InvariableSites::Off => {}
            InvariableSites::On => write!(f, "I")?,
            InvariableSites::Proportion(p) => write!(f, "I{{{p}}}")?,
        }
        if let Some(heterogeneity) = &self.heterogeneity {
            // Invariable sites and a rate model are joined by a '+'.
            if self.invariable_sites.is_active() {
                write!(f, "+")?;
            }
            write!(f, "{heterogeneity}")?;
        }
        Ok(())
    }
}

/// Splits a heterogeneity component into its category count and the raw
/// contents of the optional `{...}` block. The leading letter is skipped.
fn split_categories(component: &str) -> Result<(Option<u32>, Option<&str>)> {
    let (categories_str, block) = match component.find('{') {
        None => (&component[1..], None),
        Some(start) => {
            if !component.ends_with('}') {
                bail!(GrammarError {
                    message: format!(
                        "Missing end bracket for parameterisation '{component}'."
                    ),
                });
            }
            (
                &component[1..start],
                Some(&component[start + 1..component.len() - 1]),
            )
        }
    };
    if categories_str.is_empty() {
        return Ok((None, block));
    }
    let Ok(categories) = categories_str.parse::<u32>() else {
        bail!(GrammarError {
            message: format!("Invalid specification for rate categories '{component}'."),
        });
    };
    Ok((Some(categories), block))
}
