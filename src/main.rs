use std::result::Result::Ok;

use anyhow::{bail, Error};
use clap::Parser;
use ftail::Ftail;
use log::{info, LevelFilter};

use riqtree::io::{names_and_seqs, read_alignment};
use riqtree::model::{
    BaseFrequencies, DiscreteGamma, FreeRate, InvariableSites, Model, RateHeterogeneity,
    RateType,
};
use riqtree::substitution_models::{AaModel, LieModel, LiePairing, StandardDnaModel};

mod cli;
use crate::cli::{Cli, Commands};

type Result<T> = std::result::Result<T, Error>;

fn main() -> Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(error) => {
            bail!("Unable to parse command line arguments: \n {}", error)
        }
    };
    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    Ftail::new().console(level).init()?;

    match cli.command {
        Commands::Canonicalize { model } => {
            let model = Model::parse(&model)?;
            println!("{model}");
        }
        Commands::Describe { model } => {
            let model = Model::parse(&model)?;
            println!("{model}");
            println!("  submodel:    {}", model.submodel().description());
            if let Some(frequencies) = model.frequencies() {
                println!("  frequencies: {}", frequencies.description());
            }
            if let Some(rate_type) = model.rate_type() {
                println!("  rates:       {}", rate_type.description());
            }
        }
        Commands::List { family } => list_models(&family)?,
        Commands::CheckAlignment { seq_file } => {
            let records = read_alignment(&seq_file)?;
            let (names, seqs) = names_and_seqs(&records);
            info!(
                "Alignment of {} sequences with {} columns.",
                names.len(),
                seqs[0].len()
            );
            for name in names {
                println!("{name}");
            }
        }
    }
    Ok(())
}

fn list_models(family: &str) -> Result<()> {
    match family {
        "dna" => {
            for model in StandardDnaModel::ALL {
                println!("{:8} {}", model.name(), model.description());
            }
        }
        "lie" => {
            for model in LieModel::ALL {
                println!("{:8} {}", model.name(), model.description());
            }
            println!("Symmetry pairing prefixes:");
            for pairing in LiePairing::ALL {
                println!("{:8} {}", pairing.name(), pairing.description());
            }
        }
        "aa" => {
            for model in AaModel::ALL {
                println!("{:8} {}", model.name(), model.description());
            }
        }
        "freq" => {
            for freq in [
                BaseFrequencies::Empirical,
                BaseFrequencies::Optimised,
                BaseFrequencies::Equal,
            ] {
                println!("{:8} {}", freq.to_string(), freq.description());
            }
            println!("{:8} Fixed base frequencies, 4 values for DNA or 20 for AA.", "F{...}");
        }
        "rate" => {
            let gamma = || Some(RateHeterogeneity::Gamma(DiscreteGamma::default()));
            let free_rate = || Some(RateHeterogeneity::FreeRate(FreeRate::default()));
            for rate_type in [
                RateType::new(InvariableSites::On, None),
                RateType::new(InvariableSites::Off, gamma()),
                RateType::new(InvariableSites::On, gamma()),
                RateType::new(InvariableSites::Off, free_rate()),
                RateType::new(InvariableSites::On, free_rate()),
            ] {
                println!("{:8} {}", rate_type.to_string(), rate_type.description());
            }
        }
        _ => bail!(
            "Unknown component: '{}', expected dna, lie, aa, freq or rate.",
            family
        ),
    }
    Ok(())
}
