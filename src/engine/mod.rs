//! The call boundary to the external phylogenetics engine.
//!
//! The engine is an opaque collaborator: a request goes out as plain lists
//! and strings, a YAML result blob comes back and is mapped onto a tree by
//! [`results`]. Everything numerical happens on the other side of this
//! boundary.

use anyhow::bail;
use log::info;

use crate::errors::SemanticError;
use crate::model::Model;
use crate::Result;

pub mod results;
mod scratch;

pub use results::{map_tree_result, FittedTree};
pub use scratch::ScratchDir;

/// One engine invocation, fully specified.
#[derive(Clone, Debug)]
pub struct EngineRequest {
    pub names: Vec<String>,
    pub seqs: Vec<String>,
    /// Canonical model string.
    pub model: String,
    /// A seed of 0 lets the engine pick its own, at every entry point.
    pub seed: u64,
    pub bootstrap_replicates: u32,
    pub threads: u32,
    /// Passed through to the engine command line verbatim.
    pub extra_options: String,
}

/// The external engine. Implementations run one blocking tree search and
/// return the raw YAML result blob.
pub trait PhyloEngine {
    fn run(&self, request: &EngineRequest) -> Result<String>;
}

#[derive(Clone, Debug)]
pub struct SearchSettings {
    pub seed: u64,
    pub bootstrap_replicates: u32,
    pub threads: u32,
    pub extra_options: String,
}

impl Default for SearchSettings {
    fn default() -> Self {
        SearchSettings {
            seed: 0,
            bootstrap_replicates: 0,
            threads: 1,
            extra_options: String::new(),
        }
    }
}

/// Reconstructs a maximum-likelihood tree for the given aligned sequences.
///
/// The engine scribbles checkpoint files into the working directory, so the
/// invocation runs inside a [`ScratchDir`] that is released before the
/// result blob is interpreted.
pub fn build_tree(
    engine: &dyn PhyloEngine,
    names: &[String],
    seqs: &[String],
    model: &Model,
    settings: &SearchSettings,
) -> Result<FittedTree> {
    if names.len() != seqs.len() {
        bail!(SemanticError {
            message: format!(
                "Expected one sequence per name but got {} names and {} sequences.",
                names.len(),
                seqs.len()
            ),
        });
    }
    let request = EngineRequest {
        names: names.to_vec(),
        seqs: seqs.to_vec(),
        model: model.to_string(),
        seed: settings.seed,
        bootstrap_replicates: settings.bootstrap_replicates,
        threads: settings.threads,
        extra_options: settings.extra_options.clone(),
    };
    info!(
        "Running tree search for {} sequences with model '{}'",
        names.len(),
        request.model
    );
    let blob = {
        let _scratch = ScratchDir::acquire()?;
        engine.run(&request)?
    };
    map_tree_result(&blob, names, model)
}
