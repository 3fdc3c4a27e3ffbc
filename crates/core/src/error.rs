use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum CareError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("failed to read {path}: {source}", path = path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write {path}: {source}", path = path.display())]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(
        "malformed row at {path}:{line}: expected {expected} fields, found {found}",
        path = path.display()
    )]
    MalformedRow {
        path: PathBuf,
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("identifier allocation failed: {0}")]
    Id(#[from] carebook_ids::IdError),
}

pub type CareResult<T> = std::result::Result<T, CareError>;
