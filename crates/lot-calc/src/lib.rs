//! # Lot Sizing Calculation Engine
//!
//! 批量規劃計算引擎：Wagner-Whitin 最佳解與即時生產基準

pub mod audit;
pub mod calculator;
pub mod cumulative;
pub mod evaluator;
pub mod just_in_time;
pub mod lot_sizing;
pub mod netting;
pub mod wagner_whitin;

// Re-export 主要類型
pub use calculator::PlanningCalculator;
pub use cumulative::CumulativeDemand;
pub use evaluator::{PlanEvaluation, PlanEvaluator};
pub use just_in_time::JustInTimePlanner;
pub use lot_sizing::LotSizingCalculator;
pub use wagner_whitin::WagnerWhitinPlanner;

use lot_core::{LotSizingRule, PlanOutcome};
use rust_decimal::Decimal;
use serde::Serialize;

/// 比較結果：最佳解 vs. 即時生產
#[derive(Debug, Clone, Serialize)]
pub struct ComparisonResult {
    /// Wagner-Whitin 計劃
    pub exact: PlanOutcome,

    /// 即時生產計劃
    pub heuristic: PlanOutcome,

    /// 警告信息
    pub warnings: Vec<PlanWarning>,

    /// 計算耗時（毫秒）
    pub calculation_time_ms: Option<u128>,
}

impl ComparisonResult {
    /// 創建比較結果
    pub fn new(exact: PlanOutcome, heuristic: PlanOutcome) -> Self {
        Self {
            exact,
            heuristic,
            warnings: Vec::new(),
            calculation_time_ms: None,
        }
    }

    /// 添加警告
    pub fn add_warning(&mut self, warning: PlanWarning) {
        self.warnings.push(warning);
    }

    /// 最佳解相對即時生產節省的成本
    pub fn savings(&self) -> Decimal {
        self.heuristic.total_cost - self.exact.total_cost
    }

    /// 節省百分比，即時生產成本為 0 時無法計算
    pub fn savings_percent(&self) -> Option<Decimal> {
        if self.heuristic.total_cost.is_zero() {
            return None;
        }
        Some(self.savings() / self.heuristic.total_cost * Decimal::ONE_HUNDRED)
    }

    /// 取得指定規則的計劃
    pub fn outcome(&self, rule: LotSizingRule) -> &PlanOutcome {
        match rule {
            LotSizingRule::WagnerWhitin => &self.exact,
            LotSizingRule::JustInTime => &self.heuristic,
        }
    }
}

/// 計劃警告
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlanWarning {
    pub rule: LotSizingRule,
    pub period: Option<usize>,
    pub message: String,
    pub severity: WarningSeverity,
}

impl PlanWarning {
    pub fn new(
        rule: LotSizingRule,
        period: Option<usize>,
        message: String,
        severity: WarningSeverity,
    ) -> Self {
        Self {
            rule,
            period,
            message,
            severity,
        }
    }

    pub fn info(rule: LotSizingRule, period: Option<usize>, message: String) -> Self {
        Self::new(rule, period, message, WarningSeverity::Info)
    }

    pub fn warning(rule: LotSizingRule, period: Option<usize>, message: String) -> Self {
        Self::new(rule, period, message, WarningSeverity::Warning)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum WarningSeverity {
    Info,
    Warning,
}
