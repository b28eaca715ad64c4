//! Error kinds raised by the model grammar and the engine-result mapper.
//!
//! All three are terminal: every operation in this crate is a deterministic
//! pure function, so nothing is retried. They are distinct types so that
//! callers can tell malformed user input apart from unexpected engine output
//! by downcasting the `anyhow::Error`.

use std::error::Error;
use std::fmt;

/// A malformed token: bad prefix, unbalanced braces, wrong parameter arity
/// or a non-numeric value. Raised at parse time with the offending token in
/// the message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrammarError {
    pub message: String,
}

impl fmt::Display for GrammarError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}
impl Error for GrammarError {}

/// Structurally valid but logically inconsistent input: a duplicate
/// component kind, an out-of-range proportion or an unknown model identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SemanticError {
    pub message: String,
}

impl fmt::Display for SemanticError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}
impl Error for SemanticError {}

/// The engine's result blob violated its wire contract: an expected block or
/// field is absent, or no candidate matches the primary topology.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamDataError {
    pub message: String,
}

impl fmt::Display for UpstreamDataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}
impl Error for UpstreamDataError {}
