//! 批量規劃主計算器

use lot_core::{LotSizingRule, PlanningProblem};
use rayon::prelude::*;

use crate::audit::BoundsAudit;
use crate::lot_sizing::LotSizingCalculator;
use crate::{ComparisonResult, PlanWarning};

/// 批量規劃計算器
pub struct PlanningCalculator {
    problem: PlanningProblem,
}

impl PlanningCalculator {
    /// 創建新的計算器
    pub fn new(problem: PlanningProblem) -> Self {
        Self { problem }
    }

    /// 主計算入口：同時求最佳解與即時生產基準
    pub fn calculate(&self) -> lot_core::Result<ComparisonResult> {
        let problem = &self.problem;
        tracing::info!(
            "開始批量規劃：{} 期，總需求 {}，換線成本 {}，持有成本 {}",
            problem.horizon(),
            problem.demand.total(),
            problem.cost.setup_cost,
            problem.cost.holding_cost_per_unit
        );

        let start_time = std::time::Instant::now();

        // 輸入檢查失敗時不產生任何計劃
        problem.validate()?;

        tracing::debug!("Step 1: Wagner-Whitin");
        let exact = LotSizingCalculator::apply(problem, LotSizingRule::WagnerWhitin)?;

        tracing::debug!("Step 2: Just-in-Time");
        let heuristic = LotSizingCalculator::apply(problem, LotSizingRule::JustInTime)?;

        let mut result = ComparisonResult::new(exact, heuristic);

        tracing::debug!("Step 3: 上下限稽核");
        if let Some(bounds) = &problem.bounds {
            for rule in [LotSizingRule::WagnerWhitin, LotSizingRule::JustInTime] {
                let warnings =
                    BoundsAudit::inspect(result.outcome(rule), bounds, &problem.period_labels);
                for warning in warnings {
                    tracing::warn!("{}: {}", rule.label(), warning.message);
                    result.add_warning(warning);
                }
            }
        }

        if result.exact.production == result.heuristic.production {
            result.add_warning(PlanWarning::info(
                LotSizingRule::WagnerWhitin,
                None,
                "最佳解與即時生產計劃相同".to_string(),
            ));
        }

        result.calculation_time_ms = Some(start_time.elapsed().as_millis());

        tracing::info!("批量規劃完成，耗時 {:?}", start_time.elapsed());
        tracing::info!(
            "最佳成本 {}，即時生產成本 {}，節省 {}",
            result.exact.total_cost,
            result.heuristic.total_cost,
            result.savings()
        );

        Ok(result)
    }

    /// 平行計算多個彼此獨立的規劃問題，結果順序與輸入相同
    pub fn calculate_batch(
        problems: &[PlanningProblem],
    ) -> Vec<lot_core::Result<ComparisonResult>> {
        tracing::info!("批次規劃：{} 個問題", problems.len());

        problems
            .par_iter()
            .map(|problem| PlanningCalculator::new(problem.clone()).calculate())
            .collect()
    }
}
