pub mod archive;
pub mod config;
pub mod error;

pub use archive::{ExportSummary, export_all, load_export, write_document};
pub use config::{Config, ExportOnExit};
pub use error::{Result, StoreError};
