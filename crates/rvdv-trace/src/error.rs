use rvdv_isa::RegisterFile;
use thiserror::Error;

/// Trace tooling errors.
///
/// A divergence between traces is not an error; it is reported through
/// [`crate::CompareEnd::Diverged`].
#[derive(Error, Debug)]
pub enum Error {
    #[error("unknown {file} index {index:#x} in register update '{field}'")]
    UnknownRegisterIndex {
        file: RegisterFile,
        index: u64,
        field: String,
    },
    #[error("malformed register update '{0}': expected HEX_INDEX:VALUE")]
    MalformedRegisterField(String),
    #[error("malformed instruction binary '{0}': expected hex")]
    MalformedBinary(String),
    #[error("source log has no '{0}' column")]
    MissingColumn(String),
    #[error("row {row}: {source}")]
    AtRow {
        row: usize,
        #[source]
        source: Box<Error>,
    },
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Attach the 0-based data row index to an error.
    #[must_use]
    pub fn at_row(self, row: usize) -> Self {
        Self::AtRow {
            row,
            source: Box::new(self),
        }
    }

    /// The underlying error, with any row context stripped.
    #[must_use]
    pub fn root(&self) -> &Self {
        match self {
            Self::AtRow { source, .. } => source.root(),
            other => other,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
