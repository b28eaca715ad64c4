use std::fmt::Display;

/// Named empirical amino-acid substitution matrices. These take no
/// user-supplied parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AaModel {
    Blosum62,
    CpRev,
    Dayhoff,
    DcMut,
    Eal,
    Elm,
    Flavi,
    Flu,
    Gtr20,
    HivB,
    HivW,
    Jtt,
    JttDcMut,
    Lg,
    MtArt,
    MtMam,
    MtRev,
    MtZoa,
    MtMet,
    MtVer,
    MtInv,
    NqBird,
    NqInsect,
    NqMammal,
    NqPfam,
    NqPlant,
    NqYeast,
    Poisson,
    Pmb,
    QBird,
    QInsect,
    QMammal,
    QPfam,
    QPlant,
    QYeast,
    RtRev,
    Vt,
    Wag,
}

impl AaModel {
    pub const ALL: [AaModel; 38] = [
        AaModel::Blosum62,
        AaModel::CpRev,
        AaModel::Dayhoff,
        AaModel::DcMut,
        AaModel::Eal,
        AaModel::Elm,
        AaModel::Flavi,
        AaModel::Flu,
        AaModel::Gtr20,
        AaModel::HivB,
        AaModel::HivW,
        AaModel::Jtt,
        AaModel::JttDcMut,
        AaModel::Lg,
        AaModel::MtArt,
        AaModel::MtMam,
        AaModel::MtRev,
        AaModel::MtZoa,
        AaModel::MtMet,
        AaModel::MtVer,
        AaModel::MtInv,
        AaModel::NqBird,
        AaModel::NqInsect,
        AaModel::NqMammal,
        AaModel::NqPfam,
        AaModel::NqPlant,
        AaModel::NqYeast,
        AaModel::Poisson,
        AaModel::Pmb,
        AaModel::QBird,
        AaModel::QInsect,
        AaModel::QMammal,
        AaModel::QPfam,
        AaModel::QPlant,
        AaModel::QYeast,
        AaModel::RtRev,
        AaModel::Vt,
        AaModel::Wag,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            AaModel::Blosum62 => "Blosum62",
            AaModel::CpRev => "cpREV",
            AaModel::Dayhoff => "Dayhoff",
            AaModel::DcMut => "DCMut",
            AaModel::Eal => "EAL",
            AaModel::Elm => "ELM",
            AaModel::Flavi => "FLAVI",
            AaModel::Flu => "FLU",
            AaModel::Gtr20 => "GTR20",
            AaModel::HivB => "HIVb",
            AaModel::HivW => "HIVw",
            AaModel::Jtt => "JTT",
            AaModel::JttDcMut => "JTTDCMut",
            AaModel::Lg => "LG",
            AaModel::MtArt => "mtART",
            AaModel::MtMam => "mtMAM",
            AaModel::MtRev => "mtREV",
            AaModel::MtZoa => "mtZOA",
            AaModel::MtMet => "mtMet",
            AaModel::MtVer => "mtVer",
            AaModel::MtInv => "mtInv",
            AaModel::NqBird => "NQ.bird",
            AaModel::NqInsect => "NQ.insect",
            AaModel::NqMammal => "NQ.mammal",
            AaModel::NqPfam => "NQ.pfam",
            AaModel::NqPlant => "NQ.plant",
            AaModel::NqYeast => "NQ.yeast",
            AaModel::Poisson => "Poisson",
            AaModel::Pmb => "PMB",
            AaModel::QBird => "Q.bird",
            AaModel::QInsect => "Q.insect",
            AaModel::QMammal => "Q.mammal",
            AaModel::QPfam => "Q.pfam",
            AaModel::QPlant => "Q.plant",
            AaModel::QYeast => "Q.yeast",
            AaModel::RtRev => "rtREV",
            AaModel::Vt => "VT",
            AaModel::Wag => "WAG",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        AaModel::ALL.into_iter().find(|model| model.name() == name)
    }

    pub fn description(&self) -> &'static str {
        match self {
            AaModel::Blosum62 => {
                "BLOcks SUbstitution Matrix (Henikoff and Henikoff, 1992). Note that BLOSUM62 is not recommended for phylogenetic analysis as it was designed mainly for sequence alignments."
            }
            AaModel::CpRev => "chloroplast matrix (Adachi et al., 2000).",
            AaModel::Dayhoff => "General matrix (Dayhoff et al., 1978).",
            AaModel::DcMut => "Revised Dayhoff matrix (Kosiol and Goldman, 2005).",
            AaModel::Eal => {
                "General matrix. To be used with profile mixture models (for eg. EAL+C60) for reconstructing relationships between eukaryotes and Archaea (Banos et al., 2024)."
            }
            AaModel::Elm => {
                "General matrix. To be used with profile mixture models (for eg. ELM+C60) for phylogenetic analysis of proteins encoded by nuclear genomes of eukaryotes (Banos et al., 2024)."
            }
            AaModel::Flavi => "Flavivirus (Le and Vinh, 2020).",
            AaModel::Flu => "Influenza virus (Dang et al., 2010).",
            AaModel::Gtr20 => "General time reversible models with 190 rate parameters.",
            AaModel::HivB => "HIV between-patient matrix HIV-Bm (Nickle et al., 2007).",
            AaModel::HivW => "HIV within-patient matrix HIV-Wm (Nickle et al., 2007).",
            AaModel::Jtt => "General matrix (Jones et al., 1992).",
            AaModel::JttDcMut => "Revised JTT matrix (Kosiol and Goldman, 2005).",
            AaModel::Lg => "General matrix (Le and Gascuel, 2008).",
            AaModel::MtArt => "Mitochondrial Arthropoda (Abascal et al., 2007).",
            AaModel::MtMam => "Mitochondrial Mammalia (Yang et al., 1998).",
            AaModel::MtRev => "Mitochondrial Vertebrate (Adachi and Hasegawa, 1996).",
            AaModel::MtZoa => "Mitochondrial Metazoa (Animals) (Rota-Stabelli et al., 2009).",
            AaModel::MtMet => "Mitochondrial Metazoa (Vinh et al., 2017).",
            AaModel::MtVer => "Mitochondrial Vertebrate (Vinh et al., 2017).",
            AaModel::MtInv => "Mitochondrial Inverterbrate (Vinh et al., 2017).",
            AaModel::NqBird => {
                "Non-reversible Q matrix (Dang et al., 2022) estimated for birds (Jarvis et al., 2015)."
            }
            AaModel::NqInsect => {
                "Non-reversible Q matrix (Dang et al., 2022) estimated for insects (Misof et al., 2014)."
            }
            AaModel::NqMammal => {
                "Non-reversible Q matrix (Dang et al., 2022) estimated for mammals (Wu et al., 2018)."
            }
            AaModel::NqPfam => {
                "General non-reversible Q matrix (Dang et al., 2022) estimated from Pfam version 31 database (El-Gebali et al., 2018)."
            }
            AaModel::NqPlant => {
                "Non-reversible Q matrix (Dang et al., 2022) estimated for plants (Ran et al., 2018)."
            }
            AaModel::NqYeast => {
                "Non-reversible Q matrix (Dang et al., 2022) estimated for yeasts (Shen et al., 2018)."
            }
            AaModel::Poisson => "Equal amino-acid exchange rates and frequencies.",
            AaModel::Pmb => {
                "Probability Matrix from Blocks, revised BLOSUM matrix (Veerassamy et al., 2004)."
            }
            AaModel::QBird => {
                "Q matrix (Minh et al., 2021) estimated for birds (Jarvis et al., 2015)."
            }
            AaModel::QInsect => {
                "Q matrix (Minh et al., 2021) estimated for insects (Misof et al., 2014)."
            }
            AaModel::QMammal => {
                "Q matrix (Minh et al., 2021) estimated for mammals (Wu et al., 2018)."
            }
            AaModel::QPfam => {
                "General Q matrix (Minh et al., 2021) estimated from Pfam version 31 database (El-Gebali et al., 2018)."
            }
            AaModel::QPlant => {
                "Q matrix (Minh et al., 2021) estimated for plants (Ran et al., 2018)."
            }
            AaModel::QYeast => {
                "Q matrix (Minh et al., 2021) estimated for yeasts (Shen et al., 2018)."
            }
            AaModel::RtRev => "Retrovirus (Dimmic et al., 2002).",
            AaModel::Vt => "General 'Variable Time' matrix (Mueller and Vingron, 2000).",
            AaModel::Wag => "General matrix (Whelan and Goldman, 2001).",
        }
    }
}

impl Display for AaModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
