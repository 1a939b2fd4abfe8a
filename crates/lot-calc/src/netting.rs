//! 淨需求計算（以期初庫存沖銷需求）

use rust_decimal::Decimal;

/// 淨需求計算結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetRequirement {
    /// 期別
    pub period: usize,
    /// 總需求
    pub gross_requirement: Decimal,
    /// 期末剩餘的期初庫存
    pub projected_on_hand: Decimal,
    /// 淨需求
    pub net_requirement: Decimal,
}

/// 淨需求計算器
pub struct NettingCalculator;

impl NettingCalculator {
    /// 依期別順序以期初庫存沖銷需求
    ///
    /// 期初庫存先用先扣，沖銷完後剩下的需求即為淨需求；
    /// `projected_on_hand` 只計算期初庫存的剩餘量，不含任何新生產。
    pub fn calculate(demand: &[Decimal], initial_inventory: Decimal) -> Vec<NetRequirement> {
        let mut on_hand = initial_inventory;

        demand
            .iter()
            .enumerate()
            .map(|(period, &gross_requirement)| {
                let consumed = gross_requirement.min(on_hand);
                on_hand -= consumed;

                NetRequirement {
                    period,
                    gross_requirement,
                    projected_on_hand: on_hand,
                    net_requirement: gross_requirement - consumed,
                }
            })
            .collect()
    }
}
