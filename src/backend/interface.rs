use thiserror::Error;

use crate::core::{Contribution, Ledger, Member};

/// Failures crossing the storage boundary. Expected data problems
/// (missing files, malformed rows) never surface here; only low-level
/// I/O and encoding failures do, and those propagate to the caller
/// unretried.
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("tabular encoding failed: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, BackendError>;

/// Snapshot persistence for a whole ledger: load builds a fresh
/// ledger from storage, the save operations overwrite their resource
/// in full. There is no incremental diffing and no temp-file swap; a
/// failure mid-write can truncate the resource.
pub trait LedgerStore {
    fn load(&self) -> Result<Ledger>;
    fn save_members(&self, members: &[Member]) -> Result<()>;
    fn save_contributions(&self, contributions: &[Contribution]) -> Result<()>;

    /// Persists both resources, members first.
    fn save(&self, ledger: &Ledger) -> Result<()> {
        self.save_members(ledger.list_members())?;
        self.save_contributions(ledger.contributions())
    }
}
