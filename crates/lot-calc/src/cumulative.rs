//! 累計需求（前綴和）

use rust_decimal::Decimal;

/// 需求前綴和，`prefix[k]` 為前 k 期需求總和（`prefix[0] = 0`）
#[derive(Debug, Clone)]
pub struct CumulativeDemand {
    prefix: Vec<Decimal>,
}

impl CumulativeDemand {
    /// 預先計算前綴和
    pub fn new(demand: &[Decimal]) -> Self {
        let mut prefix = Vec::with_capacity(demand.len() + 1);
        prefix.push(Decimal::ZERO);

        let mut running = Decimal::ZERO;
        for &quantity in demand {
            running += quantity;
            prefix.push(running);
        }

        Self { prefix }
    }

    /// 第 `start` 期到第 `end` 期（含）的需求總和
    ///
    /// `end + 1 == start` 表示空區間，回傳 0。
    ///
    /// # Panics
    /// 索引超出 `0..n` 時 panic（與切片索引相同）。
    pub fn range_sum(&self, start: usize, end: usize) -> Decimal {
        self.prefix[end + 1] - self.prefix[start]
    }

    /// 前綴和序列（長度 n+1）
    pub fn prefix(&self) -> &[Decimal] {
        &self.prefix
    }

    /// 期數
    pub fn horizon(&self) -> usize {
        self.prefix.len() - 1
    }

    pub fn total(&self) -> Decimal {
        self.prefix[self.prefix.len() - 1]
    }
}
