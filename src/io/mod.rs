//! Alignment file handling for the engine call boundary.

use std::error::Error;
use std::fmt;
use std::path::Path;

use anyhow::bail;
use bio::io::fasta::{Reader, Record};
use log::info;

use crate::Result;

pub(crate) struct DataError {
    pub(crate) message: String,
}
impl fmt::Debug for DataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}
impl fmt::Display for DataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}
impl Error for DataError {}

/// Reads aligned sequences from a fasta file.
///
/// Sequences are converted to uppercase and must all have the same length
/// since the engine expects an alignment.
pub fn read_alignment(path: &Path) -> Result<Vec<Record>> {
    info!("Reading alignment from file {}", path.display());
    let reader = Reader::from_file(path)?;
    let mut records = Vec::new();

    for result in reader.records() {
        let rec = result?;
        if let Err(e) = rec.check() {
            bail!(DataError {
                message: e.to_string()
            });
        }
        let seq = rec.seq().to_ascii_uppercase();
        records.push(Record::with_attrs(rec.id(), rec.desc(), &seq));
    }
    if records.is_empty() {
        bail!(DataError {
            message: String::from("No sequences found in file")
        });
    }
    let length = records[0].seq().len();
    if let Some(rec) = records.iter().find(|rec| rec.seq().len() != length) {
        bail!(DataError {
            message: format!(
                "Sequences are not aligned, '{}' has length {} instead of {}",
                rec.id(),
                rec.seq().len(),
                length
            )
        });
    }

    info!("Read {} aligned sequences", records.len());
    Ok(records)
}

/// Splits fasta records into the parallel name and sequence lists the
/// engine request takes.
pub fn names_and_seqs(records: &[Record]) -> (Vec<String>, Vec<String>) {
    let names = records.iter().map(|rec| rec.id().to_string()).collect();
    let seqs = records
        .iter()
        .map(|rec| String::from_utf8_lossy(rec.seq()).into_owned())
        .collect();
    (names, seqs)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::{names_and_seqs, read_alignment};

    fn fasta_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn read_valid_alignment() {
        let file = fasta_file(">a\nacgt\n>b\nACGA\n");
        let records = read_alignment(file.path()).unwrap();
        let (names, seqs) = names_and_seqs(&records);
        assert_eq!(names, ["a", "b"]);
        assert_eq!(seqs, ["ACGT", "ACGA"]);
    }

    #[test]
    fn reject_unaligned_sequences() {
        let file = fasta_file(">a\nACGT\n>b\nACG\n");
        let error = read_alignment(file.path()).unwrap_err();
        assert!(error.to_string().contains("not aligned"));
    }

    #[test]
    fn reject_empty_file() {
        let file = fasta_file("");
        let error = read_alignment(file.path()).unwrap_err();
        assert!(error.to_string().contains("No sequences found"));
    }
}
