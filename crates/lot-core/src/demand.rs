//! 需求序列模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{check_precision, LotSizingError, Result};

/// 逐期需求序列（第 0 期到第 n-1 期）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DemandSeries {
    values: Vec<Decimal>,
}

impl DemandSeries {
    /// 創建需求序列（不做檢查，檢查請用 [`DemandSeries::validate`]）
    pub fn new(values: Vec<Decimal>) -> Self {
        Self { values }
    }

    /// 從整數需求建立
    pub fn from_units<I>(units: I) -> Self
    where
        I: IntoIterator<Item = i64>,
    {
        Self::new(units.into_iter().map(Decimal::from).collect())
    }

    /// 檢查所有需求皆非負，且小數位數不超過上限
    pub fn validate(&self) -> Result<()> {
        for (period, &value) in self.values.iter().enumerate() {
            if value < Decimal::ZERO {
                return Err(LotSizingError::NegativeDemand { period, value });
            }
            check_precision("demand", value)?;
        }
        Ok(())
    }

    pub fn values(&self) -> &[Decimal] {
        &self.values
    }

    /// 期數
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// 總需求
    pub fn total(&self) -> Decimal {
        self.values.iter().copied().sum()
    }
}

impl From<Vec<Decimal>> for DemandSeries {
    fn from(values: Vec<Decimal>) -> Self {
        Self::new(values)
    }
}
