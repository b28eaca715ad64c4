//! Interpretation of the engine's YAML result blob.
//!
//! The blob carries the fitted topology, a candidate set of visited
//! topologies with their likelihoods, one model-parameter block keyed by
//! family and an optional rate-heterogeneity block. The shapes below are the
//! engine's wire contract and are parsed defensively.

use std::collections::BTreeMap;

use anyhow::bail;
use log::debug;
use serde::Deserialize;
use serde_yaml::{Mapping, Value};

use crate::errors::UpstreamDataError;
use crate::model::Model;
use crate::substitution_models::{RateNaming, SubstitutionModel};
use crate::tree::{tree_parser, Tree};
use crate::Result;

// Parameter orders as the engine emits them.
pub(crate) const MOTIF_PARS: [&str; 4] = ["A", "C", "G", "T"];
pub(crate) const RATE_PARS: [&str; 6] = ["A/C", "A/G", "A/T", "C/G", "C/T", "G/T"];
pub(crate) const RATE_PARS_UNREST: [&str; 12] = [
    "A/C", "A/G", "A/T", "C/A", "C/G", "C/T", "G/A", "G/C", "G/T", "T/A", "T/C", "T/G",
];

/// A tree fitted by the engine.
///
/// Every non-root node carries the motif probabilities and the family's
/// renamed rate parameters in its `params` map; the root carries motif
/// probabilities only since it has no incoming branch.
#[derive(Debug)]
pub struct FittedTree {
    pub tree: Tree,
    pub ln_likelihood: f64,
    /// Canonical string of the model the fit was requested with.
    pub model: String,
    /// Free-form Lie-Markov parameter list, absent for other families.
    pub model_parameters: Option<Vec<f64>>,
    /// Raw rate-heterogeneity block, keyed by the engine's block name.
    pub rate_heterogeneity: Option<(String, BTreeMap<String, f64>)>,
}

/// One family-keyed parameter block as the engine writes it. Frequencies
/// and rates are comma-joined strings, not YAML sequences.
#[derive(Debug, Default, Deserialize)]
struct ModelBlock {
    #[serde(default)]
    state_freq: String,
    #[serde(default)]
    rates: String,
    #[serde(default)]
    model_parameters: Option<Value>,
}

/// Maps the engine result blob onto an annotated tree.
pub fn map_tree_result(blob: &str, names: &[String], model: &Model) -> Result<FittedTree> {
    let doc: Mapping = match serde_yaml::from_str(blob) {
        Ok(doc) => doc,
        Err(error) => bail!(UpstreamDataError {
            message: format!("Engine result malformed, not valid YAML: {error}."),
        }),
    };

    let newick = mapping_entry(&doc, "PhyloTree")
        .and_then(|block| str_entry(block, "newick"))
        .ok_or_else(|| UpstreamDataError {
            message: "Engine result malformed, tree topology not found.".to_string(),
        })?;
    let mut tree = tree_parser::single_from_newick(newick)?;

    let ln_likelihood = candidate_likelihood(&doc, &tree)?;
    debug!("Matched candidate topology with lnL {}", ln_likelihood);

    let mut motifs = BTreeMap::new();
    let mut rates = BTreeMap::new();
    let mut model_parameters = None;
    if let Some(block) = decode_block(doc.get("ModelDNA"))? {
        motifs = parse_motifs(&block)?;
        rates = rename_rates(parse_rates(&block, &RATE_PARS)?, model);
    } else if let Some(block) = decode_block(doc.get("ModelUnrest"))? {
        motifs = parse_motifs(&block)?;
        rates = parse_rates(&block, &RATE_PARS_UNREST)?;
    } else if let Some((_, value)) = prefixed_entry(&doc, "ModelLieMarkov") {
        let block = decode_block(Some(value))?.unwrap_or_default();
        motifs = parse_motifs(&block)?;
        model_parameters = parse_lie_parameters(&block)?;
    }

    let rate_heterogeneity = prefixed_entry(&doc, "Rate").and_then(|(key, value)| {
        Some((key.to_string(), float_entries(value.as_mapping()?)))
    });

    broadcast_params(&mut tree, &motifs, &rates);
    rename_leaves(&mut tree, names)?;
    name_unnamed_nodes(&mut tree);

    Ok(FittedTree {
        tree,
        ln_likelihood,
        model: model.to_string(),
        model_parameters,
        rate_heterogeneity,
    })
}

/// Finds the candidate whose topology is structurally identical to the
/// fitted tree and adopts its likelihood.
fn candidate_likelihood(doc: &Mapping, tree: &Tree) -> Result<f64> {
    let candidates = mapping_entry(doc, "CandidateSet");
    for candidate in candidates.iter().flat_map(|mapping| mapping.values()) {
        let Some(text) = candidate.as_str() else {
            continue;
        };
        let Some((likelihood, newick)) = text.split_once(' ') else {
            continue;
        };
        let Ok(likelihood) = likelihood.parse::<f64>() else {
            continue;
        };
        let Ok(candidate_tree) = tree_parser::single_from_newick(newick) else {
            continue;
        };
        if candidate_tree.same_structure(tree) {
            return Ok(likelihood);
        }
    }
    bail!(UpstreamDataError {
        message: "Engine result malformed, likelihood not found.".to_string(),
    });
}

fn decode_block(value: Option<&Value>) -> Result<Option<ModelBlock>> {
    let Some(value) = value else {
        return Ok(None);
    };
    match serde_yaml::from_value(value.clone()) {
        Ok(block) => Ok(Some(block)),
        Err(error) => bail!(UpstreamDataError {
            message: format!("Engine result malformed, bad model block: {error}."),
        }),
    }
}

fn parse_motifs(block: &ModelBlock) -> Result<BTreeMap<String, f64>> {
    if block.state_freq.is_empty() {
        bail!(UpstreamDataError {
            message: "Engine result malformed, motif parameters not found.".to_string(),
        });
    }
    keyed_floats(&block.state_freq, &MOTIF_PARS, "motif")
}

fn parse_rates(block: &ModelBlock, keys: &[&str]) -> Result<BTreeMap<String, f64>> {
    if block.rates.is_empty() {
        bail!(UpstreamDataError {
            message: "Engine result malformed, rate parameters not found.".to_string(),
        });
    }
    keyed_floats(&block.rates, keys, "rate")
}

/// Renames the raw reversible rate set the way each family's free
/// parameters are conventionally named. Simpler families collapse the set;
/// the general time-reversible family drops the reference rate.
fn rename_rates(mut raw: BTreeMap<String, f64>, model: &Model) -> BTreeMap<String, f64> {
    let naming = match model.submodel() {
        SubstitutionModel::StandardDna(dna_model, _) => dna_model.rate_naming(),
        _ => RateNaming::Full,
    };
    match naming {
        RateNaming::Constant => BTreeMap::new(),
        RateNaming::Kappa => BTreeMap::from([("kappa".to_string(), raw["A/G"])]),
        RateNaming::KappaRy => BTreeMap::from([
            ("kappa_r".to_string(), raw["A/G"]),
            ("kappa_y".to_string(), raw["C/T"]),
        ]),
        RateNaming::Gtr => {
            raw.remove("G/T");
            raw
        }
        RateNaming::Full => raw,
    }
}

/// The optional Lie-Markov parameter list arrives as a comma-joined string,
/// a bare scalar or a sequence.
fn parse_lie_parameters(block: &ModelBlock) -> Result<Option<Vec<f64>>> {
    let Some(value) = &block.model_parameters else {
        return Ok(None);
    };
    let parameters = match value {
        Value::String(text) => float_list(text)?,
        Value::Number(number) => match number.as_f64() {
            Some(value) => vec![value],
            None => Vec::new(),
        },
        Value::Sequence(values) => {
            let mut parameters = Vec::with_capacity(values.len());
            for value in values {
                let Some(value) = value.as_f64() else {
                    bail!(UpstreamDataError {
                        message: "Engine result malformed, non-numeric model parameters."
                            .to_string(),
                    });
                };
                parameters.push(value);
            }
            parameters
        }
        _ => bail!(UpstreamDataError {
            message: "Engine result malformed, non-numeric model parameters.".to_string(),
        }),
    };
    Ok(Some(parameters))
}

/// Applies the global parameter set uniformly. Rates describe branches, so
/// the root only receives motif probabilities.
fn broadcast_params(
    tree: &mut Tree,
    motifs: &BTreeMap<String, f64>,
    rates: &BTreeMap<String, f64>,
) {
    let root = tree.root;
    for node in &mut tree.nodes {
        node.params
            .extend(motifs.iter().map(|(key, value)| (key.clone(), *value)));
        if node.idx != root {
            node.params
                .extend(rates.iter().map(|(key, value)| (key.clone(), *value)));
        }
    }
}

/// The engine emits leaves labelled with 0-based indices into the caller's
/// sequence-name list; restore the original names.
fn rename_leaves(tree: &mut Tree, names: &[String]) -> Result<()> {
    for node in tree.nodes.iter_mut().filter(|node| node.is_leaf()) {
        let Ok(index) = node.id.parse::<usize>() else {
            continue;
        };
        let Some(name) = names.get(index) else {
            bail!(UpstreamDataError {
                message: format!(
                    "Engine result malformed, leaf index {index} does not match any sequence name."
                ),
            });
        };
        node.id = name.clone();
    }
    Ok(())
}

fn name_unnamed_nodes(tree: &mut Tree) {
    let root = tree.root;
    let mut counter = 0;
    for node in &mut tree.nodes {
        if node.is_leaf() || !node.id.is_empty() {
            continue;
        }
        if node.idx == root {
            node.id = "root".to_string();
        } else {
            node.id = format!("edge.{counter}");
            counter += 1;
        }
    }
}

fn mapping_entry<'a>(doc: &'a Mapping, key: &str) -> Option<&'a Mapping> {
    doc.get(key).and_then(Value::as_mapping)
}

fn prefixed_entry<'a>(doc: &'a Mapping, prefix: &str) -> Option<(&'a str, &'a Value)> {
    doc.iter().find_map(|(key, value)| {
        let key = key.as_str()?;
        key.starts_with(prefix).then_some((key, value))
    })
}

fn str_entry<'a>(block: &'a Mapping, key: &str) -> Option<&'a str> {
    block.get(key).and_then(Value::as_str)
}

/// Numeric entries of a block, non-numeric ones skipped.
fn float_entries(block: &Mapping) -> BTreeMap<String, f64> {
    block
        .iter()
        .filter_map(|(key, value)| {
            let key = key.as_str()?.to_string();
            let value = value
                .as_f64()
                .or_else(|| value.as_str().and_then(|text| text.trim().parse().ok()))?;
            Some((key, value))
        })
        .collect()
}

fn float_list(text: &str) -> Result<Vec<f64>> {
    text.split(',')
        .map(|value| {
            value.trim().parse::<f64>().map_err(|_| {
                UpstreamDataError {
                    message: format!(
                        "Engine result malformed, expected a numeric value, got '{}'.",
                        value.trim()
                    ),
                }
                .into()
            })
        })
        .collect()
}

fn keyed_floats(text: &str, keys: &[&str], kind: &str) -> Result<BTreeMap<String, f64>> {
    let values = float_list(text)?;
    if values.len() != keys.len() {
        bail!(UpstreamDataError {
            message: format!(
                "Engine result malformed, expected {} {kind} parameters but got {}.",
                keys.len(),
                values.len()
            ),
        });
    }
    Ok(keys
        .iter()
        .zip(values)
        .map(|(key, value)| (key.to_string(), value))
        .collect())
}
