use std::fmt::Display;

/// Standard (time-reversible and unrestricted) DNA substitution models.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[allow(clippy::upper_case_acronyms)]
pub enum StandardDnaModel {
    JC,
    JC69,
    F81,
    K80,
    K2P,
    HKY,
    HKY85,
    TN,
    TN93,
    TNe,
    K81,
    K3P,
    K81u,
    TPM2,
    TPM2u,
    TPM3,
    TPM3u,
    TIM,
    TIMe,
    TIM2,
    TIM2e,
    TIM3,
    TIM3e,
    TVM,
    TVMe,
    SYM,
    GTR,
    STRSYM,
    UNREST,
}

/// How engine rate estimates are named when attached to tree edges.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum RateNaming {
    /// Rates are constant by model definition, only motif probabilities kept.
    Constant,
    /// A single transition/transversion ratio named "kappa".
    Kappa,
    /// Separate purine and pyrimidine ratios, "kappa_r" and "kappa_y".
    KappaRy,
    /// Five independent rates, the sixth (G/T) being the reference.
    Gtr,
    /// The full raw rate set keyed by nucleotide pair.
    Full,
}

impl StandardDnaModel {
    pub const ALL: [StandardDnaModel; 29] = [
        StandardDnaModel::JC,
        StandardDnaModel::JC69,
        StandardDnaModel::F81,
        StandardDnaModel::K80,
        StandardDnaModel::K2P,
        StandardDnaModel::HKY,
        StandardDnaModel::HKY85,
        StandardDnaModel::TN,
        StandardDnaModel::TN93,
        StandardDnaModel::TNe,
        StandardDnaModel::K81,
        StandardDnaModel::K3P,
        StandardDnaModel::K81u,
        StandardDnaModel::TPM2,
        StandardDnaModel::TPM2u,
        StandardDnaModel::TPM3,
        StandardDnaModel::TPM3u,
        StandardDnaModel::TIM,
        StandardDnaModel::TIMe,
        StandardDnaModel::TIM2,
        StandardDnaModel::TIM2e,
        StandardDnaModel::TIM3,
        StandardDnaModel::TIM3e,
        StandardDnaModel::TVM,
        StandardDnaModel::TVMe,
        StandardDnaModel::SYM,
        StandardDnaModel::GTR,
        StandardDnaModel::STRSYM,
        StandardDnaModel::UNREST,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            StandardDnaModel::JC => "JC",
            StandardDnaModel::JC69 => "JC69",
            StandardDnaModel::F81 => "F81",
            StandardDnaModel::K80 => "K80",
            StandardDnaModel::K2P => "K2P",
            StandardDnaModel::HKY => "HKY",
            StandardDnaModel::HKY85 => "HKY85",
            StandardDnaModel::TN => "TN",
            StandardDnaModel::TN93 => "TN93",
            StandardDnaModel::TNe => "TNe",
            StandardDnaModel::K81 => "K81",
            StandardDnaModel::K3P => "K3P",
            StandardDnaModel::K81u => "K81u",
            StandardDnaModel::TPM2 => "TPM2",
            StandardDnaModel::TPM2u => "TPM2u",
            StandardDnaModel::TPM3 => "TPM3",
            StandardDnaModel::TPM3u => "TPM3u",
            StandardDnaModel::TIM => "TIM",
            StandardDnaModel::TIMe => "TIMe",
            StandardDnaModel::TIM2 => "TIM2",
            StandardDnaModel::TIM2e => "TIM2e",
            StandardDnaModel::TIM3 => "TIM3",
            StandardDnaModel::TIM3e => "TIM3e",
            StandardDnaModel::TVM => "TVM",
            StandardDnaModel::TVMe => "TVMe",
            StandardDnaModel::SYM => "SYM",
            StandardDnaModel::GTR => "GTR",
            StandardDnaModel::STRSYM => "STRSYM",
            StandardDnaModel::UNREST => "UNREST",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        StandardDnaModel::ALL
            .into_iter()
            .find(|model| model.name() == name)
    }

    pub fn description(&self) -> &'static str {
        match self {
            StandardDnaModel::JC | StandardDnaModel::JC69 => {
                "Equal substitution rates and equal base frequencies (Jukes and Cantor, 1969)."
            }
            StandardDnaModel::F81 => "Equal rates but unequal base freq. (Felsenstein, 1981).",
            StandardDnaModel::K80 | StandardDnaModel::K2P => {
                "Unequal transition/transversion rates and equal base freq. (Kimura, 1980)."
            }
            StandardDnaModel::HKY | StandardDnaModel::HKY85 => {
                "Unequal transition/transversion rates and unequal base freq. (Hasegawa, Kishino and Yano, 1985)."
            }
            StandardDnaModel::TN | StandardDnaModel::TN93 => {
                "Like HKY but unequal purine/pyrimidine rates (Tamura and Nei, 1993)."
            }
            StandardDnaModel::TNe => "Like TN but equal base freq.",
            StandardDnaModel::K81 | StandardDnaModel::K3P => {
                "Three substitution types model and equal base freq. (Kimura, 1981)."
            }
            StandardDnaModel::K81u => "Like K81 but unequal base freq.",
            StandardDnaModel::TPM2 => "AC=AT, AG=CT, CG=GT and equal base freq.",
            StandardDnaModel::TPM2u => "Like TPM2 but unequal base freq.",
            StandardDnaModel::TPM3 => "AC=CG, AG=CT, AT=GT and equal base freq.",
            StandardDnaModel::TPM3u => "Like TPM3 but unequal base freq.",
            StandardDnaModel::TIM => "Transition model, AC=GT, AT=CG and unequal base freq.",
            StandardDnaModel::TIMe => "Like TIM but equal base freq.",
            StandardDnaModel::TIM2 => "AC=AT, CG=GT and unequal base freq.",
            StandardDnaModel::TIM2e => "Like TIM2 but equal base freq.",
            StandardDnaModel::TIM3 => "AC=CG, AT=GT and unequal base freq.",
            StandardDnaModel::TIM3e => "Like TIM3 but equal base freq.",
            StandardDnaModel::TVM => "Transversion model, AG=CT and unequal base freq.",
            StandardDnaModel::TVMe => "Like TVM but equal base freq.",
            StandardDnaModel::SYM => {
                "Symmetric model with unequal rates but equal base freq. (Zharkikh, 1994)."
            }
            StandardDnaModel::GTR => {
                "General time reversible model with unequal rates and unequal base freq. (Tavare, 1986)."
            }
            StandardDnaModel::STRSYM => "Strand-symmetric model (Bielawski and Gold, 2002).",
            StandardDnaModel::UNREST => "Unrestricted model.",
        }
    }

    /// Engine rate estimates are renamed per naming class when attached to
    /// tree edges. Spelling aliases (e.g. K2P for K80) map to the same class.
    pub(crate) fn rate_naming(&self) -> RateNaming {
        match self {
            StandardDnaModel::JC | StandardDnaModel::JC69 | StandardDnaModel::F81 => {
                RateNaming::Constant
            }
            StandardDnaModel::K80
            | StandardDnaModel::K2P
            | StandardDnaModel::HKY
            | StandardDnaModel::HKY85 => RateNaming::Kappa,
            StandardDnaModel::TN | StandardDnaModel::TN93 | StandardDnaModel::TNe => {
                RateNaming::KappaRy
            }
            StandardDnaModel::GTR => RateNaming::Gtr,
            _ => RateNaming::Full,
        }
    }
}

impl Display for StandardDnaModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
