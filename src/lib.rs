use anyhow::Error;

pub mod engine;
pub mod errors;
pub mod io;
pub mod model;
pub mod params;
pub mod substitution_models;
pub mod tree;

type Result<T> = std::result::Result<T, Error>;

/// Number of rate categories the engine assumes when a rate heterogeneity
/// component does not set one explicitly.
pub const DEFAULT_RATE_CATEGORIES: u32 = 4;

#[cfg(test)]
pub(crate) fn assert_float_slice_eq(actual: &[f64], expected: &[f64]) {
    use approx::relative_eq;
    assert_eq!(
        actual.len(),
        expected.len(),
        "Must have the same number of entries."
    );
    for (i, (&act, &exp)) in actual.iter().zip(expected.iter()).enumerate() {
        assert!(
            relative_eq!(act, exp, epsilon = 1e-10),
            "Entries at position {} do not match, actual: {}, expected: {}",
            i,
            act,
            exp,
        );
    }
}
