use std::collections::HashMap;
use std::fmt::Display;

use lazy_static::lazy_static;

/// Symmetry pairing prefix for Lie-Markov models.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LiePairing {
    RY,
    WS,
    MK,
}

impl LiePairing {
    pub const ALL: [LiePairing; 3] = [LiePairing::RY, LiePairing::WS, LiePairing::MK];

    pub fn name(&self) -> &'static str {
        match self {
            LiePairing::RY => "RY",
            LiePairing::WS => "WS",
            LiePairing::MK => "MK",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        LiePairing::ALL
            .into_iter()
            .find(|pairing| pairing.name() == name)
    }

    pub fn description(&self) -> &'static str {
        match self {
            LiePairing::RY => "purine-pyrimidine pairing (default).",
            LiePairing::WS => "weak-strong pairing.",
            LiePairing::MK => "aMino-Keto pairing",
        }
    }
}

impl Display for LiePairing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Lie-Markov DNA substitution models (Woodhams et al., 2015).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LieModel {
    Lie1_1,
    Lie2_2b,
    Lie3_3a,
    Lie3_3b,
    Lie3_3c,
    Lie3_4,
    Lie4_4a,
    Lie4_4b,
    Lie4_5a,
    Lie4_5b,
    Lie5_6a,
    Lie5_6b,
    Lie5_7a,
    Lie5_7b,
    Lie5_7c,
    Lie5_11a,
    Lie5_11b,
    Lie5_11c,
    Lie5_16,
    Lie6_6,
    Lie6_7a,
    Lie6_7b,
    Lie6_8a,
    Lie6_8b,
    Lie6_17a,
    Lie6_17b,
    Lie8_8,
    Lie8_10a,
    Lie8_10b,
    Lie8_16,
    Lie8_17,
    Lie8_18,
    Lie9_20a,
    Lie9_20b,
    Lie10_12,
    Lie10_34,
    Lie12_12,
}

lazy_static! {
    static ref LIE_MODEL_NAMES: HashMap<&'static str, LieModel> = {
        let mut map = HashMap::new();
        for model in LieModel::ALL {
            map.insert(model.name(), model);
        }
        map
    };
}

impl LieModel {
    pub const ALL: [LieModel; 37] = [
        LieModel::Lie1_1,
        LieModel::Lie2_2b,
        LieModel::Lie3_3a,
        LieModel::Lie3_3b,
        LieModel::Lie3_3c,
        LieModel::Lie3_4,
        LieModel::Lie4_4a,
        LieModel::Lie4_4b,
        LieModel::Lie4_5a,
        LieModel::Lie4_5b,
        LieModel::Lie5_6a,
        LieModel::Lie5_6b,
        LieModel::Lie5_7a,
        LieModel::Lie5_7b,
        LieModel::Lie5_7c,
        LieModel::Lie5_11a,
        LieModel::Lie5_11b,
        LieModel::Lie5_11c,
        LieModel::Lie5_16,
        LieModel::Lie6_6,
        LieModel::Lie6_7a,
        LieModel::Lie6_7b,
        LieModel::Lie6_8a,
        LieModel::Lie6_8b,
        LieModel::Lie6_17a,
        LieModel::Lie6_17b,
        LieModel::Lie8_8,
        LieModel::Lie8_10a,
        LieModel::Lie8_10b,
        LieModel::Lie8_16,
        LieModel::Lie8_17,
        LieModel::Lie8_18,
        LieModel::Lie9_20a,
        LieModel::Lie9_20b,
        LieModel::Lie10_12,
        LieModel::Lie10_34,
        LieModel::Lie12_12,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            LieModel::Lie1_1 => "1.1",
            LieModel::Lie2_2b => "2.2b",
            LieModel::Lie3_3a => "3.3a",
            LieModel::Lie3_3b => "3.3b",
            LieModel::Lie3_3c => "3.3c",
            LieModel::Lie3_4 => "3.4",
            LieModel::Lie4_4a => "4.4a",
            LieModel::Lie4_4b => "4.4b",
            LieModel::Lie4_5a => "4.5a",
            LieModel::Lie4_5b => "4.5b",
            LieModel::Lie5_6a => "5.6a",
            LieModel::Lie5_6b => "5.6b",
            LieModel::Lie5_7a => "5.7a",
            LieModel::Lie5_7b => "5.7b",
            LieModel::Lie5_7c => "5.7c",
            LieModel::Lie5_11a => "5.11a",
            LieModel::Lie5_11b => "5.11b",
            LieModel::Lie5_11c => "5.11c",
            LieModel::Lie5_16 => "5.16",
            LieModel::Lie6_6 => "6.6",
            LieModel::Lie6_7a => "6.7a",
            LieModel::Lie6_7b => "6.7b",
            LieModel::Lie6_8a => "6.8a",
            LieModel::Lie6_8b => "6.8b",
            LieModel::Lie6_17a => "6.17a",
            LieModel::Lie6_17b => "6.17b",
            LieModel::Lie8_8 => "8.8",
            LieModel::Lie8_10a => "8.10a",
            LieModel::Lie8_10b => "8.10b",
            LieModel::Lie8_16 => "8.16",
            LieModel::Lie8_17 => "8.17",
            LieModel::Lie8_18 => "8.18",
            LieModel::Lie9_20a => "9.20a",
            LieModel::Lie9_20b => "9.20b",
            LieModel::Lie10_12 => "10.12",
            LieModel::Lie10_34 => "10.34",
            LieModel::Lie12_12 => "12.12",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        LIE_MODEL_NAMES.get(name).copied()
    }

    pub fn description(&self) -> &'static str {
        match self {
            LieModel::Lie1_1 => "Reversible model. Equal base frequencies. equiv. to JC",
            LieModel::Lie2_2b => "Reversible model. Equal base frequencies. equiv. to K2P",
            LieModel::Lie3_3a => "Reversible model. Equal base frequencies. equiv. to K3P",
            LieModel::Lie3_3b => "Non-reversible model. Equal base frequencies.",
            LieModel::Lie3_3c => "Reversible model. Equal base frequencies. equiv. to TNe",
            LieModel::Lie3_4 => "Reversible model. f(A)=f(G) and f(C)=f(T).",
            LieModel::Lie4_4a => "Reversible model. Unconstrained base frequencies. equiv. to F81",
            LieModel::Lie4_4b => "Reversible model. f(A)=f(G) and f(C)=f(T).",
            LieModel::Lie4_5a => "Non-reversible model. f(A)=f(G) and f(C)=f(T).",
            LieModel::Lie4_5b => "Non-reversible model. f(A)=f(G) and f(C)=f(T).",
            LieModel::Lie5_6a => "Non-reversible model. Equal base frequencies.",
            LieModel::Lie5_6b => "Non-reversible model. Unconstrained base frequencies.",
            LieModel::Lie5_7a => "Non-reversible model. f(A)+f(G)=0.5=f(C)+f(T).",
            LieModel::Lie5_7b => "Non-reversible model. Equal base frequencies.",
            LieModel::Lie5_7c => "Non-reversible model. Equal base frequencies.",
            LieModel::Lie5_11a => "Non-reversible model. f(A)+f(G)=0.5=f(C)+f(T).",
            LieModel::Lie5_11b => "Non-reversible model. Equal base frequencies.",
            LieModel::Lie5_11c => "Non-reversible model. Equal base frequencies.",
            LieModel::Lie5_16 => "Non-reversible model. f(A)=f(G) and f(C)=f(T).",
            LieModel::Lie6_6 => {
                "Non-reversible model. f(A)=f(G) and f(C)=f(T). equiv. to STRSYM for strand-symmetric model (Bielawski and Gold, 2002)"
            }
            LieModel::Lie6_7a => "Non-reversible model. Unconstrained base frequencies. F81+K3P",
            LieModel::Lie6_7b => "Non-reversible model. Unconstrained base frequencies.",
            LieModel::Lie6_8a => "Non-reversible model. Unconstrained base frequencies.",
            LieModel::Lie6_8b => "Non-reversible model. f(A)=f(G) and f(C)=f(T).",
            LieModel::Lie6_17a => "Non-reversible model. f(A)=f(G) and f(C)=f(T).",
            LieModel::Lie6_17b => "Non-reversible model. f(A)=f(G) and f(C)=f(T).",
            LieModel::Lie8_8 => "Non-reversible model. Unconstrained base frequencies.",
            LieModel::Lie8_10a => "Non-reversible model. Unconstrained base frequencies.",
            LieModel::Lie8_10b => "Non-reversible model. f(A)=f(G) and f(C)=f(T).",
            LieModel::Lie8_16 => "Non-reversible model. Unconstrained base frequencies.",
            LieModel::Lie8_17 => "Non-reversible model. Unconstrained base frequencies.",
            LieModel::Lie8_18 => "Non-reversible model. Unconstrained base frequencies.",
            LieModel::Lie9_20a => "Non-reversible model. f(A)+f(G)=0.5=f(C)+f(T).",
            LieModel::Lie9_20b => "Non-reversible model. Equal base frequencies. Doubly stochastic",
            LieModel::Lie10_12 => "Non-reversible model. Unconstrained base frequencies.",
            LieModel::Lie10_34 => "Non-reversible model. Unconstrained base frequencies.",
            LieModel::Lie12_12 => {
                "Non-reversible model. Unconstrained base frequencies. equiv. to UNREST (unrestricted model)"
            }
        }
    }
}

impl Display for LieModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
