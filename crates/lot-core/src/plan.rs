//! 生產計劃結果模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::LotSizingRule;

/// 規劃結果（規劃器輸出）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanOutcome {
    /// 產生此計劃的規則
    pub rule: LotSizingRule,

    /// 各期生產量
    pub production: Vec<Decimal>,

    /// 各期期末庫存
    pub inventory: Vec<Decimal>,

    /// 總成本（換線 + 持有）
    pub total_cost: Decimal,
}

impl PlanOutcome {
    /// 創建規劃結果
    pub fn new(
        rule: LotSizingRule,
        production: Vec<Decimal>,
        inventory: Vec<Decimal>,
        total_cost: Decimal,
    ) -> Self {
        Self {
            rule,
            production,
            inventory,
            total_cost,
        }
    }

    /// 期數
    pub fn horizon(&self) -> usize {
        self.production.len()
    }

    /// 換線次數（有生產的期數）
    pub fn setups(&self) -> usize {
        self.production.iter().filter(|q| **q > Decimal::ZERO).count()
    }

    /// 總生產量
    pub fn total_production(&self) -> Decimal {
        self.production.iter().copied().sum()
    }

    /// 平均期末庫存，空計劃回傳 None
    pub fn average_inventory(&self) -> Option<Decimal> {
        if self.inventory.is_empty() {
            return None;
        }
        let total: Decimal = self.inventory.iter().copied().sum();
        Some(total / Decimal::from(self.inventory.len()))
    }
}
