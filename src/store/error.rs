use std::path::PathBuf;

/// Errors raised while opening, loading, or writing a ledger backend.
#[derive(Debug)]
pub enum StoreError {
    /// The backing file could not be opened or created.
    Open(PathBuf, std::io::Error),
    /// The medium holds content that does not decode as a league.
    /// Fatal: a store is never handed out half-loaded.
    Init(String),
    /// Rewriting the medium after a mutation failed.
    Write(std::io::Error),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Open(path, e) => write!(f, "could not open {}: {}", path.display(), e),
            Self::Init(s) => write!(f, "could not load player store: {}", s),
            Self::Write(e) => write!(f, "could not write player store: {}", e),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Open(_, e) => Some(e),
            Self::Init(_) => None,
            Self::Write(e) => Some(e),
        }
    }
}
