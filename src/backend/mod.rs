pub mod csv_store;
mod interface;

pub use interface::{LedgerStore, Result, BackendError};
pub use csv_store::CsvStore;
