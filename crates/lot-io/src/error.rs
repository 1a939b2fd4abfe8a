//! 匯入 / 匯出錯誤類型

use lot_core::LotSizingError;
use thiserror::Error;

/// 表格資料載入錯誤
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("檔案不存在: {0}")]
    FileNotFound(String),

    #[error("CSV 缺少必要欄位: {0:?}")]
    MissingColumns(Vec<String>),

    #[error("欄位 '{column}' 第 {row} 列數值無效: '{value}'（必須為數字）")]
    InvalidValue {
        column: String,
        row: usize,
        value: String,
    },

    #[error("第 {row} 列期別無效: '{value}'（必須為非負整數）")]
    InvalidPeriod { row: usize, value: String },

    #[error("CSV 沒有任何資料列")]
    EmptyData,

    #[error("CSV 解析失敗: {0}")]
    Csv(#[from] csv::Error),

    #[error("檔案讀取失敗: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Invalid(#[from] LotSizingError),
}

/// 結果匯出錯誤
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("檔案寫入失敗: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV 寫入失敗: {0}")]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Plan(#[from] LotSizingError),
}
