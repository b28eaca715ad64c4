use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub(super) struct Cli {
    /// Enable debug logging
    #[arg(short, long)]
    pub(super) verbose: bool,

    #[command(subcommand)]
    pub(super) command: Commands,
}

#[derive(Subcommand)]
pub(super) enum Commands {
    /// Parses a model string and prints its canonical form
    Canonicalize {
        /// Model string, e.g. GTR{4.39,5.30,4.39,1.0,12.1}+F+I{0.2}+G3
        #[arg(value_name = "MODEL")]
        model: String,
    },
    /// Explains each component of a model string
    Describe {
        /// Model string
        #[arg(value_name = "MODEL")]
        model: String,
    },
    /// Lists the known options of a model component
    List {
        /// Component: dna, lie, aa, freq or rate
        #[arg(value_name = "FAMILY")]
        family: String,
    },
    /// Validates a fasta alignment and prints its sequence names
    CheckAlignment {
        /// Sequence file in fasta format
        #[arg(value_name = "SEQ_FILE")]
        seq_file: PathBuf,
    },
}
