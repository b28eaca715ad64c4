use assert_matches::assert_matches;
use rstest::rstest;

use crate::assert_float_slice_eq;
use crate::errors::{GrammarError, SemanticError};
use crate::model::{
    BaseFrequencies, FreeRate, InvariableSites, Model, RateHeterogeneity, RateType,
};
use crate::params::param_values;
use crate::substitution_models::{StandardDnaModel, SubstitutionModel};

#[rstest]
#[case("JC")]
#[case("GTR")]
#[case("GTR{4.39,5.30,4.39,1.0,12.1}")]
#[case("HKY+F")]
#[case("TN+FO+I")]
#[case("SYM+FQ+G")]
#[case("GTR+F{0.1,0.2,0.3,0.4}+I{0.2}+G3{0.7}")]
#[case("GTR+R5")]
#[case("GTR+I{0.2}+R2{0.5,1.0,0.5,2.0}")]
#[case("WS6.6+G")]
#[case("RY12.12")]
#[case("2.2b{0.5}")]
#[case("LG+G")]
#[case("Q.pfam+I+G8{0.5}")]
#[case("UNREST+FO")]
fn canonical_round_trip(#[case] text: &str) {
    let model = Model::parse(text).unwrap();
    assert_eq!(model.to_string(), text);
    let reparsed = Model::parse(&model.to_string()).unwrap();
    assert_eq!(reparsed.to_string(), model.to_string());
}

#[rstest]
#[case(
    "GTR+G3{0.7}+F{0.1,0.2,0.3,0.4}+I{0.2}",
    "GTR+F{0.1,0.2,0.3,0.4}+I{0.2}+G3{0.7}"
)]
#[case("HKY+G4+I+F", "HKY+F+I+G")]
#[case("TN+R+FO", "TN+FO+R")]
fn components_emitted_in_fixed_order(#[case] text: &str, #[case] canonical: &str) {
    let model = Model::parse(text).unwrap();
    assert_eq!(model.to_string(), canonical);
}

#[test]
fn gtr_worked_example() {
    let text = "GTR{4.39,5.30,4.39,1.0,12.1}+F{0.1,0.2,0.3,0.4}+I{0.2}+G3{0.7}";
    let model = Model::parse(text).unwrap();
    assert_eq!(model.to_string(), text);

    assert_matches!(
        model.submodel(),
        SubstitutionModel::StandardDna(StandardDnaModel::GTR, Some(params)) => {
            assert_float_slice_eq(&param_values(params), &[4.39, 5.30, 4.39, 1.0, 12.1]);
        }
    );
    assert_eq!(
        model.frequencies(),
        Some(&BaseFrequencies::custom(vec![0.1, 0.2, 0.3, 0.4]).unwrap())
    );
    let rate_type = model.rate_type().unwrap();
    assert_matches!(rate_type.invariable_sites(), InvariableSites::Proportion(p) => {
        assert_eq!(p.value(), 0.2);
    });
    assert_matches!(rate_type.heterogeneity(), Some(RateHeterogeneity::Gamma(gamma)) => {
        assert_eq!(gamma.categories(), 3);
        assert_eq!(gamma.alpha(), Some(0.7));
    });
}

#[test]
fn component_markers_present_iff_supplied() {
    let with_all = Model::parse("HKY+F+I+G").unwrap().to_string();
    assert!(with_all.contains("+F"));
    assert!(with_all.contains("+I"));
    assert!(with_all.contains("+G"));

    // A Lie token must not be mistaken for a rate component.
    let bare = Model::parse("RY12.12").unwrap().to_string();
    assert_eq!(bare, "RY12.12");
    assert!(!bare.contains("+F"));
    assert!(!bare.contains("+I"));
    assert!(!bare.contains("+G"));
    assert!(!bare.contains("+R"));
}

#[test]
fn typed_construction_round_trips() {
    let model = Model::new(
        SubstitutionModel::identify("TN").unwrap(),
        Some(BaseFrequencies::custom(vec![0.25, 0.25, 0.25, 0.25]).unwrap()),
        Some(RateType::new(
            InvariableSites::proportion(0.1).unwrap(),
            Some(RateHeterogeneity::FreeRate(
                FreeRate::with_parameters(Some(2), vec![0.5, 0.5], vec![1.0, 2.0]).unwrap(),
            )),
        )),
    );
    let text = model.to_string();
    assert_eq!(text, "TN+F{0.25,0.25,0.25,0.25}+I{0.1}+R2{0.5,1,0.5,2}");
    let reparsed = Model::parse(&text).unwrap();
    assert_eq!(reparsed.to_string(), text);
}

#[test]
fn empty_rate_type_is_dropped() {
    let model = Model::new(
        SubstitutionModel::identify("JC").unwrap(),
        None,
        Some(RateType::default()),
    );
    assert!(model.rate_type().is_none());
    assert_eq!(model.to_string(), "JC");
}

#[test]
fn lexemes_survive_round_trips() {
    // The written form of a parameter is preserved, so trailing zeros and
    // explicit fractional parts do not change across a parse.
    let model = Model::parse("GTR{5.30,1.0,1,2.50,3.000}+I{0.20}").unwrap();
    assert_eq!(model.to_string(), "GTR{5.30,1.0,1,2.50,3.000}+I{0.20}");
}

#[rstest]
#[case::unexpected_component("GTR+Z", "unexpected component")]
#[case::duplicate_invariable("GTR+I+I", "multiple specifications for invariable sites")]
#[case::duplicate_frequency("GTR+F+FO", "multiple base frequency specifications")]
#[case::duplicate_heterogeneity("GTR+G+R", "multiple rate heterogeneity specifications")]
#[case::unknown_model("NOTAMODEL+F", "Unknown substitution model")]
#[case::proportion_out_of_range("GTR+I{1.5}", "must be in the range [0,1)")]
fn semantic_errors(#[case] text: &str, #[case] message: &str) {
    let error = Model::parse(text).unwrap_err();
    assert_matches!(error.downcast_ref::<SemanticError>(), Some(_));
    assert!(
        error.to_string().contains(message),
        "'{}' does not contain '{}'",
        error,
        message
    );
}

#[rstest]
#[case::frequency_arity(
    "JC+F{0.1,0.2,0.3}",
    "Expected either 4 frequencies for DNA model or 20 for AA model but got 3"
)]
#[case::free_rate_arity("GTR+R2{0.5,1,0.5}", "Expected 4 parameters but got 3")]
#[case::unknown_frequency("GTR+Fx", "Unknown state frequency type")]
#[case::invariable_shape("GTR+I0.2", "Invalid specification for proportion of invariable sites")]
#[case::missing_bracket("GTR{1.0", "Missing closing bracket")]
#[case::non_numeric_params("GTR{one,two}", "Expected a numeric parameter value")]
#[case::non_numeric_alpha("GTR+G{abc}", "is not a number")]
#[case::bad_categories("GTR+Gx{0.5}", "Invalid specification for rate categories")]
#[case::aa_with_params("LG{0.5}+F", "does not take a parameter block")]
fn grammar_errors(#[case] text: &str, #[case] message: &str) {
    let error = Model::parse(text).unwrap_err();
    assert_matches!(error.downcast_ref::<GrammarError>(), Some(_));
    assert!(
        error.to_string().contains(message),
        "'{}' does not contain '{}'",
        error,
        message
    );
}

#[test]
fn from_str_matches_parse() {
    let model: Model = "HKY+G".parse().unwrap();
    assert_eq!(model.to_string(), "HKY+G");
}
