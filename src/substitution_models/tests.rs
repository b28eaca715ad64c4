use assert_matches::assert_matches;
use rstest::rstest;

use crate::assert_float_slice_eq;
use crate::errors::{GrammarError, SemanticError};
use crate::params::param_values;
use crate::substitution_models::{
    AaModel, LieModel, LiePairing, ModelType, StandardDnaModel, SubstitutionModel,
};

#[test]
fn registries_round_trip_names() {
    for model in StandardDnaModel::ALL {
        assert_eq!(StandardDnaModel::from_name(model.name()), Some(model));
    }
    for model in LieModel::ALL {
        assert_eq!(LieModel::from_name(model.name()), Some(model));
    }
    for model in AaModel::ALL {
        assert_eq!(AaModel::from_name(model.name()), Some(model));
    }
    for pairing in LiePairing::ALL {
        assert_eq!(LiePairing::from_name(pairing.name()), Some(pairing));
    }
}

#[test]
fn identify_standard_dna() {
    let model = SubstitutionModel::identify("GTR").unwrap();
    assert_matches!(
        &model,
        SubstitutionModel::StandardDna(StandardDnaModel::GTR, None)
    );
    assert_eq!(model.model_type(), ModelType::Nucleotide);
    assert_eq!(model.base_name(), "GTR");
}

#[test]
fn identify_parametrised_dna() {
    let model = SubstitutionModel::identify("HKY{2.0}").unwrap();
    assert_matches!(
        &model,
        SubstitutionModel::StandardDna(StandardDnaModel::HKY, Some(params)) => {
            assert_float_slice_eq(&param_values(params), &[2.0]);
        }
    );
    assert_eq!(model.to_string(), "HKY{2.0}");
}

#[rstest]
#[case::bare("6.6", None)]
#[case::ry("RY6.6", Some(LiePairing::RY))]
#[case::ws("WS6.6", Some(LiePairing::WS))]
#[case::mk("MK6.6", Some(LiePairing::MK))]
fn identify_lie_markov_pairings(#[case] name: &str, #[case] expected: Option<LiePairing>) {
    let model = SubstitutionModel::identify(name).unwrap();
    assert_matches!(
        &model,
        SubstitutionModel::LieMarkov(LieModel::Lie6_6, pairing, None) => {
            assert_eq!(*pairing, expected);
        }
    );
    assert_eq!(model.base_name(), "6.6");
    assert_eq!(model.to_string(), name);
}

#[test]
fn identify_lie_markov_with_params() {
    let model = SubstitutionModel::identify("WS6.6{0.5,-0.2}").unwrap();
    assert_matches!(
        &model,
        SubstitutionModel::LieMarkov(LieModel::Lie6_6, Some(LiePairing::WS), Some(params)) => {
            assert_float_slice_eq(&param_values(params), &[0.5, -0.2]);
        }
    );
    assert_eq!(model.to_string(), "WS6.6{0.5,-0.2}");
}

#[test]
fn identify_amino_acid() {
    let model = SubstitutionModel::identify("LG").unwrap();
    assert_matches!(&model, SubstitutionModel::AminoAcid(AaModel::Lg));
    assert_eq!(model.model_type(), ModelType::Protein);

    // Names are matched exactly, including case.
    assert_matches!(
        SubstitutionModel::identify("cpREV").unwrap(),
        SubstitutionModel::AminoAcid(AaModel::CpRev)
    );
    assert!(SubstitutionModel::identify("CPREV").is_err());
}

#[test]
fn amino_acid_rejects_params() {
    let error = SubstitutionModel::identify("WAG{0.5}").unwrap_err();
    assert_matches!(error.downcast_ref::<GrammarError>(), Some(_));
    assert!(error.to_string().contains("does not take a parameter block"));
}

#[rstest]
#[case("NOTAMODEL")]
#[case("RY")]
#[case("6.99")]
#[case("gtr")]
fn identify_unknown_models(#[case] name: &str) {
    let error = SubstitutionModel::identify(name).unwrap_err();
    assert_matches!(error.downcast_ref::<SemanticError>(), Some(_));
    assert!(error.to_string().contains("Unknown substitution model"));
}

#[rstest]
#[case::missing_close("GTR{1.0,2.0", "Missing closing bracket")]
#[case::stray_close("GTR}", "Unbalanced brackets")]
fn identify_bracket_errors(#[case] name: &str, #[case] message: &str) {
    let error = SubstitutionModel::identify(name).unwrap_err();
    assert_matches!(error.downcast_ref::<GrammarError>(), Some(_));
    assert!(error.to_string().contains(message));
}

#[test]
fn descriptions_mention_pairing() {
    let model = SubstitutionModel::identify("WS6.6").unwrap();
    assert!(model.description().contains("Pairing"));
    let model = SubstitutionModel::identify("6.6").unwrap();
    assert!(!model.description().contains("Pairing"));
}
