//! 即時生產（Just-in-Time）啟發式
//!
//! 逐期向前掃描一次，只生產當期需求與現有庫存的差額，從不提前備貨。

use lot_core::{CostModel, LotSizingError, LotSizingRule, PlanOutcome, PlanningProblem, Result};
use rust_decimal::Decimal;

use crate::evaluator::PlanEvaluator;

/// 掃描過程中的累計狀態
#[derive(Debug, Clone, PartialEq, Eq)]
struct JitState {
    on_hand: Decimal,
    setup_cost: Decimal,
    holding_cost: Decimal,
    production: Vec<Decimal>,
    inventory: Vec<Decimal>,
}

impl JitState {
    fn opening(initial_inventory: Decimal, horizon: usize) -> Self {
        Self {
            on_hand: initial_inventory,
            setup_cost: Decimal::ZERO,
            holding_cost: Decimal::ZERO,
            production: Vec::with_capacity(horizon),
            inventory: Vec::with_capacity(horizon),
        }
    }

    /// 推進一期
    fn advance(mut self, demand: Decimal, cost: &CostModel) -> Self {
        let quantity = if demand.is_zero() {
            Decimal::ZERO
        } else {
            (demand - self.on_hand).max(Decimal::ZERO)
        };

        self.on_hand = self.on_hand + quantity - demand;
        if quantity > Decimal::ZERO {
            self.setup_cost += cost.setup_cost;
        }
        if self.on_hand > Decimal::ZERO {
            self.holding_cost += self.on_hand * cost.holding_cost_per_unit;
        }

        self.production.push(quantity);
        self.inventory.push(self.on_hand);
        self
    }

    fn total_cost(&self) -> Decimal {
        self.setup_cost + self.holding_cost
    }
}

/// 即時生產規劃器
pub struct JustInTimePlanner;

impl JustInTimePlanner {
    /// 計算即時生產計劃
    pub fn plan(problem: &PlanningProblem) -> Result<PlanOutcome> {
        problem.validate()?;

        let demand = problem.demand.values();
        let cost = &problem.cost;

        let state = demand.iter().fold(
            JitState::opening(problem.initial_inventory, demand.len()),
            |state, &required| state.advance(required, cost),
        );

        let evaluation =
            PlanEvaluator::evaluate(&state.production, demand, cost, problem.initial_inventory)?;
        if evaluation.total_cost != state.total_cost() || evaluation.inventory != state.inventory {
            return Err(LotSizingError::Calculation(format!(
                "即時生產累計成本 {} 與庫存軌跡成本 {} 不一致",
                state.total_cost(),
                evaluation.total_cost
            )));
        }

        tracing::debug!(
            "Just-in-Time 完成：{} 期，{} 次換線，成本 {}",
            demand.len(),
            evaluation.setups,
            evaluation.total_cost
        );

        Ok(PlanOutcome::new(
            LotSizingRule::JustInTime,
            state.production,
            state.inventory,
            evaluation.total_cost,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lot_core::DemandSeries;

    fn units(values: &[i64]) -> Vec<Decimal> {
        values.iter().copied().map(Decimal::from).collect()
    }

    fn problem(demand: &[i64], setup: i64, holding: i64) -> PlanningProblem {
        PlanningProblem::new(
            DemandSeries::from_units(demand.iter().copied()),
            CostModel::new(Decimal::from(setup), Decimal::from(holding)),
        )
    }

    #[test]
    fn test_produces_every_demand_period() {
        let outcome = JustInTimePlanner::plan(&problem(&[10, 10, 10], 100, 1)).unwrap();

        assert_eq!(outcome.production, units(&[10, 10, 10]));
        assert_eq!(outcome.inventory, units(&[0, 0, 0]));
        assert_eq!(outcome.total_cost, Decimal::from(300));
        assert_eq!(outcome.rule, LotSizingRule::JustInTime);
    }

    #[test]
    fn test_zero_demand_periods_skip_production() {
        let outcome = JustInTimePlanner::plan(&problem(&[10, 0, 20, 0, 30], 50, 1)).unwrap();

        assert_eq!(outcome.production, units(&[10, 0, 20, 0, 30]));
        assert_eq!(outcome.total_cost, Decimal::from(150));
    }

    #[test]
    fn test_initial_inventory_consumed_first() {
        let outcome = JustInTimePlanner::plan(
            &problem(&[10, 20, 30], 50, 1).with_initial_inventory(Decimal::from(15)),
        )
        .unwrap();

        assert_eq!(outcome.production, units(&[0, 15, 30]));
        assert_eq!(outcome.inventory, units(&[5, 0, 0]));
        assert_eq!(outcome.total_cost, Decimal::from(105));
    }

    #[test]
    fn test_holding_charged_in_zero_demand_periods() {
        let outcome = JustInTimePlanner::plan(
            &problem(&[20, 0, 0, 40], 10, 1).with_initial_inventory(Decimal::from(30)),
        )
        .unwrap();

        assert_eq!(outcome.production, units(&[0, 0, 0, 30]));
        assert_eq!(outcome.inventory, units(&[10, 10, 10, 0]));
        assert_eq!(outcome.total_cost, Decimal::from(40));
    }

    #[test]
    fn test_degenerate_inputs() {
        let empty = JustInTimePlanner::plan(&problem(&[], 10, 1)).unwrap();
        assert!(empty.production.is_empty());
        assert_eq!(empty.total_cost, Decimal::ZERO);

        let zeros = JustInTimePlanner::plan(&problem(&[0, 0, 0], 10, 1)).unwrap();
        assert_eq!(zeros.production, units(&[0, 0, 0]));
        assert_eq!(zeros.total_cost, Decimal::ZERO);
    }

    #[test]
    fn test_advance_threads_state() {
        let cost = CostModel::new(Decimal::from(5), Decimal::ONE);
        let state = JitState::opening(Decimal::from(3), 2)
            .advance(Decimal::from(2), &cost)
            .advance(Decimal::from(4), &cost);

        assert_eq!(state.production, units(&[0, 3]));
        assert_eq!(state.inventory, units(&[1, 0]));
        assert_eq!(state.setup_cost, Decimal::from(5));
        assert_eq!(state.holding_cost, Decimal::ONE);
    }
}
