// File: crates/laureates/src/loader.rs
// Summary: CSV loading of laureate records with an explicit error type.

use std::io::Read;
use std::path::{Path, PathBuf};

use log::debug;

use crate::record::Record;

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("cannot open {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("CSV line {line}: {source}")]
    Parse {
        line: u64,
        #[source]
        source: csv::Error,
    },
}

/// Load every record of the CSV at `path`. Headers are required; unknown columns are ignored.
pub fn load_csv(path: impl AsRef<Path>) -> Result<Vec<Record>, LoadError> {
    let path = path.as_ref();
    let file = std::fs::File::open(path)
        .map_err(|source| LoadError::Io { path: path.to_path_buf(), source })?;
    let records = from_reader(file)?;
    debug!("loaded {} records from {}", records.len(), path.display());
    Ok(records)
}

/// Parse records from any reader holding CSV text.
pub fn from_reader<R: Read>(reader: R) -> Result<Vec<Record>, LoadError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::Headers)
        .from_reader(reader);

    let mut out = Vec::new();
    for rec in rdr.deserialize::<Record>() {
        let rec = rec.map_err(|source| LoadError::Parse { line: error_line(&source), source })?;
        out.push(rec);
    }
    Ok(out)
}

fn error_line(err: &csv::Error) -> u64 {
    err.position().map(|p| p.line()).unwrap_or(0)
}
