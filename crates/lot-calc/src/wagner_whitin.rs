//! Wagner-Whitin 動態規劃（最佳批量）
//!
//! `F[i]` 為滿足第 0..i-1 期需求的最小成本，`F[0] = 0`。
//! 對每個 `i`，列舉最後一批在第 `j-1` 期生產、涵蓋第 `j-1..i-1` 期：
//!
//! ```text
//! F[i] = min_j { F[j-1] + setup(j, i) + holding(j, i) }
//! holding(j, i) = Σ_{k=j}^{i-1} range_sum(k, i-1) × h
//! ```
//!
//! 期初庫存先沖銷需求，動態規劃只處理淨需求。

use lot_core::{LotSizingError, LotSizingRule, PlanOutcome, PlanningProblem, Result};
use rust_decimal::Decimal;

use crate::cumulative::CumulativeDemand;
use crate::evaluator::PlanEvaluator;
use crate::netting::NettingCalculator;

/// 動態規劃求解結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WagnerWhitinSolution {
    /// `F[0..=n]`
    pub costs: Vec<Decimal>,
    /// `prev[i]`：涵蓋第 i-1 期的那一批的生產期別
    pub predecessors: Vec<usize>,
    /// 回溯出的各期生產量
    pub production: Vec<Decimal>,
}

impl WagnerWhitinSolution {
    /// `F[n]`
    pub fn optimal_cost(&self) -> Decimal {
        self.costs[self.costs.len() - 1]
    }
}

/// Wagner-Whitin 規劃器
pub struct WagnerWhitinPlanner;

impl WagnerWhitinPlanner {
    /// 計算最小成本生產計劃
    pub fn plan(problem: &PlanningProblem) -> Result<PlanOutcome> {
        problem.validate()?;

        let demand = problem.demand.values();
        let cost = &problem.cost;

        let net = NettingCalculator::calculate(demand, problem.initial_inventory);
        let net_demand: Vec<Decimal> = net.iter().map(|r| r.net_requirement).collect();

        if net_demand.iter().all(Decimal::is_zero) {
            tracing::debug!("無淨需求（{} 期），不安排生產", demand.len());
            let production = vec![Decimal::ZERO; demand.len()];
            let evaluation =
                PlanEvaluator::evaluate(&production, demand, cost, problem.initial_inventory)?;
            return Ok(PlanOutcome::new(
                LotSizingRule::WagnerWhitin,
                production,
                evaluation.inventory,
                evaluation.total_cost,
            ));
        }

        let solution = Self::solve(&net_demand, cost.setup_cost, cost.holding_cost_per_unit);
        let evaluation = PlanEvaluator::evaluate(
            &solution.production,
            demand,
            cost,
            problem.initial_inventory,
        )?;

        // 期初庫存剩餘部分的持有成本不受計劃影響，須另外加回
        let opening_stock_holding = cost.holding_cost_per_unit
            * net.iter().map(|r| r.projected_on_hand).sum::<Decimal>();
        let expected = solution.optimal_cost() + opening_stock_holding;
        if expected != evaluation.total_cost {
            return Err(LotSizingError::Calculation(format!(
                "動態規劃成本 {} 與庫存軌跡成本 {} 不一致",
                expected, evaluation.total_cost
            )));
        }

        tracing::debug!(
            "Wagner-Whitin 完成：{} 期，{} 次換線，成本 {}",
            demand.len(),
            evaluation.setups,
            evaluation.total_cost
        );

        Ok(PlanOutcome::new(
            LotSizingRule::WagnerWhitin,
            solution.production,
            evaluation.inventory,
            evaluation.total_cost,
        ))
    }

    /// 對（淨）需求序列執行動態規劃並回溯
    ///
    /// 同成本時取最小的 `j`（最早的生產期別），結果與迭代順序無關。
    /// 只涵蓋零需求期別的批次不生產，因此不收換線成本。
    pub fn solve(
        demand: &[Decimal],
        setup_cost: Decimal,
        holding_cost_per_unit: Decimal,
    ) -> WagnerWhitinSolution {
        let n = demand.len();
        let cumulative = CumulativeDemand::new(demand);

        let mut costs = Vec::with_capacity(n + 1);
        costs.push(Decimal::ZERO);
        let mut predecessors = vec![0usize; n + 1];

        for i in 1..=n {
            let mut holding = Decimal::ZERO;
            let mut best: Option<(Decimal, usize)> = None;

            // j 由大到小，持有成本逐步累加：holding(j) = holding(j+1) + range_sum(j, i-1) × h
            for j in (1..=i).rev() {
                if j < i {
                    holding += cumulative.range_sum(j, i - 1) * holding_cost_per_unit;
                }

                let setup = if cumulative.range_sum(j - 1, i - 1) > Decimal::ZERO {
                    setup_cost
                } else {
                    Decimal::ZERO
                };
                let candidate = costs[j - 1] + setup + holding;

                // `<=`：反向迭代下同成本時保留較小的 j
                match best {
                    Some((best_cost, _)) if candidate > best_cost => {}
                    _ => best = Some((candidate, j - 1)),
                }
            }

            let (best_cost, producing_period) = best.unwrap_or((Decimal::ZERO, 0));
            costs.push(best_cost);
            predecessors[i] = producing_period;
        }

        let production = Self::reconstruct(&cumulative, &predecessors);

        WagnerWhitinSolution {
            costs,
            predecessors,
            production,
        }
    }

    /// 由 `prev` 回溯生產計劃
    fn reconstruct(cumulative: &CumulativeDemand, predecessors: &[usize]) -> Vec<Decimal> {
        let n = cumulative.horizon();
        let mut production = vec![Decimal::ZERO; n];

        let mut i = n;
        while i > 0 {
            let period = predecessors[i];
            production[period] = cumulative.range_sum(period, i - 1);
            i = period;
        }

        production
    }
}
