//! 批量規則分派

use lot_core::{LotSizingRule, PlanOutcome, PlanningProblem};

use crate::just_in_time::JustInTimePlanner;
use crate::wagner_whitin::WagnerWhitinPlanner;

/// 批量規則計算器
pub struct LotSizingCalculator;

impl LotSizingCalculator {
    /// 應用批量規則
    pub fn apply(problem: &PlanningProblem, rule: LotSizingRule) -> lot_core::Result<PlanOutcome> {
        match rule {
            LotSizingRule::WagnerWhitin => WagnerWhitinPlanner::plan(problem),
            LotSizingRule::JustInTime => JustInTimePlanner::plan(problem),
        }
    }
}
