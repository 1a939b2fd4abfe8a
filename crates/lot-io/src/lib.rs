//! # Lot Sizing I/O
//!
//! 表格資料載入、文字報表與結果匯出

pub mod error;
pub mod export;
pub mod loader;
pub mod report;

// Re-export 主要類型
pub use error::{ExportError, LoadError};
pub use export::{ExportedFiles, ResultExporter};
pub use loader::LotSizingLoader;
pub use report::ReportRenderer;
