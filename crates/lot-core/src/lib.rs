//! # Lot Sizing Core
//!
//! 批量規劃核心資料模型與類型定義

pub mod config;
pub mod demand;
pub mod plan;

// Re-export 主要類型
pub use config::{CostModel, LotSizingRule, PlanningProblem, ProductionBounds};
pub use demand::DemandSeries;
pub use plan::PlanOutcome;

use rust_decimal::Decimal;

/// 輸入數值允許的最大小數位數
///
/// 動態規劃的累計成本與庫存軌跡都以 28 位有效數字精確計算，輸入位數受限才不會捨入。
pub const MAX_DECIMAL_PLACES: u32 = 6;

/// 批量規劃錯誤類型
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LotSizingError {
    #[error("第 {period} 期需求為負值: {value}")]
    NegativeDemand { period: usize, value: Decimal },

    #[error("成本參數 {name} 為負值: {value}")]
    NegativeCost { name: &'static str, value: Decimal },

    #[error("期初庫存為負值: {0}")]
    NegativeInitialInventory(Decimal),

    #[error("序列長度不一致: 預期 {expected}，實際 {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("{name} 的小數位數超過 {max} 位: {value}", max = MAX_DECIMAL_PLACES)]
    ExcessivePrecision { name: &'static str, value: Decimal },

    #[error("無效的生產量上下限: 最小 {min}，最大 {max}")]
    InvalidBounds { min: Decimal, max: Decimal },

    #[error("第 {period} 期生產量為負值: {value}")]
    NegativeProduction { period: usize, value: Decimal },

    #[error("第 {period} 期庫存不足（缺 {shortfall}），不允許欠交")]
    Backorder { period: usize, shortfall: Decimal },

    #[error("計算錯誤: {0}")]
    Calculation(String),
}

pub type Result<T> = std::result::Result<T, LotSizingError>;

/// 檢查小數位數（忽略尾端的 0）
pub(crate) fn check_precision(name: &'static str, value: Decimal) -> Result<()> {
    if value.normalize().scale() > MAX_DECIMAL_PLACES {
        return Err(LotSizingError::ExcessivePrecision { name, value });
    }
    Ok(())
}
