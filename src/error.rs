//! Error taxonomy for the load-and-report pipeline.
//!
//! Three categories: a source file that cannot be resolved, a value inside a
//! source file that cannot be parsed, and statistics requested over zero
//! rows. Missing *optional* columns are never errors; they surface as
//! capability flags on the loaded table.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// The city's backing data file could not be opened. The city itself is
    /// a closed enum, so the filesystem mapping is the only way the fixed
    /// city-to-source lookup can fail.
    #[error("cannot read the {city} dataset at {path:?}")]
    Configuration {
        city: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A required field failed to parse. Loading is strict: the first
    /// malformed row aborts the whole load, there is no partial-skip
    /// recovery.
    #[error("row {row}: {detail}")]
    DataFormat { row: usize, detail: String },

    /// Statistics were requested over a table with no rows; a mode over
    /// nothing is undefined.
    #[error("no trips matched the current filter")]
    EmptyResult,
}

impl Error {
    /// Maps a csv-level failure onto [`Error::DataFormat`], keeping the
    /// 1-based record number when the reader knows it.
    pub(crate) fn from_csv(err: csv::Error) -> Self {
        let row = err
            .position()
            .map(|pos| pos.record() as usize)
            .unwrap_or_default();
        Error::DataFormat {
            row,
            detail: err.to_string(),
        }
    }
}
