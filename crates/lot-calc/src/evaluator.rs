//! 計劃評估：由生產計劃推導庫存軌跡與成本
//!
//! 兩種規劃器都只決定「生產多少」，成本一律在此計算。

use lot_core::{CostModel, LotSizingError, Result};
use rust_decimal::Decimal;

/// 計劃評估結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanEvaluation {
    /// 各期期末庫存
    pub inventory: Vec<Decimal>,
    /// 換線次數
    pub setups: usize,
    /// 換線成本合計
    pub setup_cost: Decimal,
    /// 持有成本合計
    pub holding_cost: Decimal,
    /// 總成本
    pub total_cost: Decimal,
}

/// 計劃評估器
pub struct PlanEvaluator;

impl PlanEvaluator {
    /// 評估生產計劃
    ///
    /// `inventory[t] = inventory[t-1] + production[t] - demand[t]`，
    /// `inventory[-1] = initial_inventory`。任何一期期末庫存為負即視為欠交，回傳錯誤。
    pub fn evaluate(
        production: &[Decimal],
        demand: &[Decimal],
        cost: &CostModel,
        initial_inventory: Decimal,
    ) -> Result<PlanEvaluation> {
        if production.len() != demand.len() {
            return Err(LotSizingError::LengthMismatch {
                expected: demand.len(),
                actual: production.len(),
            });
        }

        let mut inventory = Vec::with_capacity(demand.len());
        let mut on_hand = initial_inventory;
        let mut setups = 0usize;

        for (period, (&quantity, &required)) in production.iter().zip(demand).enumerate() {
            if quantity < Decimal::ZERO {
                return Err(LotSizingError::NegativeProduction {
                    period,
                    value: quantity,
                });
            }
            if quantity > Decimal::ZERO {
                setups += 1;
            }

            on_hand = on_hand + quantity - required;
            if on_hand < Decimal::ZERO {
                return Err(LotSizingError::Backorder {
                    period,
                    shortfall: -on_hand,
                });
            }
            inventory.push(on_hand);
        }

        let setup_cost = cost.setup_cost * Decimal::from(setups);
        let holding_cost =
            cost.holding_cost_per_unit * inventory.iter().copied().sum::<Decimal>();

        Ok(PlanEvaluation {
            inventory,
            setups,
            setup_cost,
            holding_cost,
            total_cost: setup_cost + holding_cost,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn units(values: &[i64]) -> Vec<Decimal> {
        values.iter().copied().map(Decimal::from).collect()
    }

    fn cost(setup: i64, holding: i64) -> CostModel {
        CostModel::new(Decimal::from(setup), Decimal::from(holding))
    }

    #[test]
    fn test_evaluate_batched_plan() {
        let result = PlanEvaluator::evaluate(
            &units(&[30, 0, 0, 0, 30]),
            &units(&[10, 0, 20, 0, 30]),
            &cost(50, 1),
            Decimal::ZERO,
        )
        .unwrap();

        assert_eq!(result.inventory, units(&[20, 20, 0, 0, 0]));
        assert_eq!(result.setups, 2);
        assert_eq!(result.setup_cost, Decimal::from(100));
        assert_eq!(result.holding_cost, Decimal::from(40));
        assert_eq!(result.total_cost, Decimal::from(140));
    }

    #[test]
    fn test_setup_charged_once_regardless_of_quantity() {
        let small = PlanEvaluator::evaluate(&units(&[1]), &units(&[1]), &cost(70, 1), Decimal::ZERO)
            .unwrap();
        let large =
            PlanEvaluator::evaluate(&units(&[500]), &units(&[500]), &cost(70, 1), Decimal::ZERO)
                .unwrap();

        assert_eq!(small.setup_cost, Decimal::from(70));
        assert_eq!(large.setup_cost, Decimal::from(70));
    }

    #[test]
    fn test_initial_inventory_carried() {
        let result = PlanEvaluator::evaluate(
            &units(&[0, 0, 0, 30]),
            &units(&[20, 0, 0, 40]),
            &cost(10, 1),
            Decimal::from(30),
        )
        .unwrap();

        assert_eq!(result.inventory, units(&[10, 10, 10, 0]));
        assert_eq!(result.total_cost, Decimal::from(40));
    }

    #[test]
    fn test_fractional_holding_cost() {
        let model = CostModel::new(Decimal::from(100), Decimal::new(5, 1));
        let result =
            PlanEvaluator::evaluate(&units(&[30, 0]), &units(&[10, 20]), &model, Decimal::ZERO)
                .unwrap();

        assert_eq!(result.holding_cost, Decimal::from(10));
        assert_eq!(result.total_cost, Decimal::from(110));
    }

    #[test]
    fn test_backorder_rejected() {
        let result = PlanEvaluator::evaluate(
            &units(&[10, 0, 5]),
            &units(&[10, 5, 5]),
            &cost(1, 1),
            Decimal::ZERO,
        );

        assert_eq!(
            result,
            Err(LotSizingError::Backorder {
                period: 1,
                shortfall: Decimal::from(5),
            })
        );
    }

    #[test]
    fn test_negative_production_rejected() {
        let result =
            PlanEvaluator::evaluate(&units(&[-1]), &units(&[0]), &cost(1, 1), Decimal::ZERO);

        assert!(matches!(
            result,
            Err(LotSizingError::NegativeProduction { period: 0, .. })
        ));
    }

    #[test]
    fn test_length_mismatch_rejected() {
        let result =
            PlanEvaluator::evaluate(&units(&[1, 2]), &units(&[1]), &cost(1, 1), Decimal::ZERO);

        assert_eq!(
            result,
            Err(LotSizingError::LengthMismatch {
                expected: 1,
                actual: 2,
            })
        );
    }

    #[test]
    fn test_empty_plan() {
        let result = PlanEvaluator::evaluate(&[], &[], &cost(1, 1), Decimal::ZERO).unwrap();

        assert!(result.inventory.is_empty());
        assert_eq!(result.total_cost, Decimal::ZERO);
    }
}
