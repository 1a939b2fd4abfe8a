//! 批量規劃問題配置

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{check_precision, DemandSeries, LotSizingError, Result};

/// 成本模型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostModel {
    /// 換線（準備）成本：有生產的期別各收一次，與數量無關
    pub setup_cost: Decimal,

    /// 單位持有成本：期末庫存每單位收取
    pub holding_cost_per_unit: Decimal,
}

impl CostModel {
    /// 創建成本模型
    pub fn new(setup_cost: Decimal, holding_cost_per_unit: Decimal) -> Self {
        Self {
            setup_cost,
            holding_cost_per_unit,
        }
    }

    /// 檢查成本參數皆非負
    pub fn validate(&self) -> Result<()> {
        if self.setup_cost < Decimal::ZERO {
            return Err(LotSizingError::NegativeCost {
                name: "setup_cost",
                value: self.setup_cost,
            });
        }
        if self.holding_cost_per_unit < Decimal::ZERO {
            return Err(LotSizingError::NegativeCost {
                name: "holding_cost_per_unit",
                value: self.holding_cost_per_unit,
            });
        }
        check_precision("setup_cost", self.setup_cost)?;
        check_precision("holding_cost_per_unit", self.holding_cost_per_unit)?;
        Ok(())
    }
}

/// 每期生產量上下限
///
/// 兩種規劃器都不會強制套用，只用於計劃稽核（超出範圍時產生警告）。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductionBounds {
    pub min_production: Decimal,
    pub max_production: Decimal,
}

impl ProductionBounds {
    pub fn new(min_production: Decimal, max_production: Decimal) -> Self {
        Self {
            min_production,
            max_production,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.min_production < Decimal::ZERO || self.min_production > self.max_production {
            return Err(LotSizingError::InvalidBounds {
                min: self.min_production,
                max: self.max_production,
            });
        }
        Ok(())
    }

    /// 生產量是否落在 [min, max] 內
    pub fn contains(&self, quantity: Decimal) -> bool {
        quantity >= self.min_production && quantity <= self.max_production
    }
}

/// 批量規則
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LotSizingRule {
    /// Wagner-Whitin 動態規劃（最佳解）
    WagnerWhitin,

    /// 即時生產（Just-in-Time）- 只補足當期缺口
    JustInTime,
}

impl LotSizingRule {
    /// 顯示名稱
    pub fn label(&self) -> &'static str {
        match self {
            LotSizingRule::WagnerWhitin => "WAGNER-WHITIN (Optimal)",
            LotSizingRule::JustInTime => "JUST-IN-TIME (JIT)",
        }
    }
}

/// 單一物料的批量規劃問題
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanningProblem {
    /// 各期顯示標籤（預設 1..=n）
    pub period_labels: Vec<u32>,

    /// 逐期需求
    pub demand: DemandSeries,

    /// 成本模型
    pub cost: CostModel,

    /// 期初庫存
    pub initial_inventory: Decimal,

    /// 生產量上下限（僅稽核）
    pub bounds: Option<ProductionBounds>,
}

impl PlanningProblem {
    /// 創建規劃問題，期初庫存為 0
    pub fn new(demand: DemandSeries, cost: CostModel) -> Self {
        let period_labels = (1..=demand.len() as u32).collect();
        Self {
            period_labels,
            demand,
            cost,
            initial_inventory: Decimal::ZERO,
            bounds: None,
        }
    }

    /// 建構器模式：設置期初庫存
    pub fn with_initial_inventory(mut self, initial_inventory: Decimal) -> Self {
        self.initial_inventory = initial_inventory;
        self
    }

    /// 建構器模式：設置生產量上下限
    pub fn with_bounds(mut self, bounds: ProductionBounds) -> Self {
        self.bounds = Some(bounds);
        self
    }

    /// 建構器模式：設置期別標籤
    pub fn with_period_labels(mut self, period_labels: Vec<u32>) -> Self {
        self.period_labels = period_labels;
        self
    }

    /// 期數
    pub fn horizon(&self) -> usize {
        self.demand.len()
    }

    /// 規劃前的輸入檢查，任何錯誤都直接回報，不做修正
    pub fn validate(&self) -> Result<()> {
        self.demand.validate()?;
        self.cost.validate()?;

        if self.initial_inventory < Decimal::ZERO {
            return Err(LotSizingError::NegativeInitialInventory(
                self.initial_inventory,
            ));
        }
        check_precision("initial_inventory", self.initial_inventory)?;

        if self.period_labels.len() != self.demand.len() {
            return Err(LotSizingError::LengthMismatch {
                expected: self.demand.len(),
                actual: self.period_labels.len(),
            });
        }

        if let Some(bounds) = &self.bounds {
            bounds.validate()?;
        }

        Ok(())
    }

    /// 內建範例資料（12 期）
    pub fn sample() -> Self {
        let demand = DemandSeries::from_units([
            120, 95, 110, 130, 115, 125, 140, 100, 135, 120, 150, 125,
        ]);
        let cost = CostModel::new(Decimal::from(1000), Decimal::new(5, 1));

        Self::new(demand, cost).with_bounds(ProductionBounds::new(
            Decimal::from(50),
            Decimal::from(1000),
        ))
    }
}
