//! 批量規劃表格資料載入（CSV）

use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

use csv::ReaderBuilder;
use lot_core::{CostModel, DemandSeries, PlanningProblem, ProductionBounds};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::error::LoadError;

/// 必要欄位
pub const REQUIRED_COLUMNS: [&str; 6] = [
    "Period",
    "Demand",
    "Setup_Cost",
    "Holding_Cost",
    "Min_Production",
    "Max_Production",
];

/// 預設資料檔名
pub const DEFAULT_DATA_FILE: &str = "lot_sizing_data.csv";

/// 單列資料（已轉成數值）
#[derive(Debug, Clone)]
struct LotSizingRow {
    period: u32,
    demand: Decimal,
    setup_cost: Decimal,
    holding_cost: Decimal,
    min_production: Decimal,
    max_production: Decimal,
}

/// 批量規劃資料載入器
pub struct LotSizingLoader;

impl LotSizingLoader {
    /// 從 CSV 檔案載入規劃問題
    pub fn from_path(path: &Path) -> Result<PlanningProblem, LoadError> {
        if !path.exists() {
            return Err(LoadError::FileNotFound(path.display().to_string()));
        }

        tracing::info!("載入批量規劃資料: {}", path.display());
        let file = File::open(path)?;
        Self::from_reader(file)
    }

    /// 從任意來源讀取 CSV
    ///
    /// 成本與上下限取第一筆資料列；期初庫存為 0。
    pub fn from_reader<R: Read>(reader: R) -> Result<PlanningProblem, LoadError> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let headers: Vec<String> = reader
            .headers()?
            .iter()
            .map(|h| h.trim().to_string())
            .collect();

        let column_index: HashMap<&str, usize> = headers
            .iter()
            .enumerate()
            .map(|(idx, name)| (name.as_str(), idx))
            .collect();

        let missing: Vec<String> = REQUIRED_COLUMNS
            .iter()
            .filter(|column| !column_index.contains_key(*column))
            .map(|column| column.to_string())
            .collect();
        if !missing.is_empty() {
            return Err(LoadError::MissingColumns(missing));
        }

        let mut rows = Vec::new();
        for (row_idx, record) in reader.records().enumerate() {
            let record = record?;
            // 表頭為第 1 列
            let row = row_idx + 2;

            if record.iter().all(|value| value.trim().is_empty()) {
                continue;
            }

            let cell = |column: &str| -> Result<Decimal, LoadError> {
                let raw = column_index
                    .get(column)
                    .and_then(|&idx| record.get(idx))
                    .unwrap_or("");
                parse_number(raw).ok_or_else(|| LoadError::InvalidValue {
                    column: column.to_string(),
                    row,
                    value: raw.to_string(),
                })
            };

            let period_value = cell("Period")?;
            let period = period_value
                .fract()
                .is_zero()
                .then(|| period_value.to_u32())
                .flatten()
                .ok_or_else(|| LoadError::InvalidPeriod {
                    row,
                    value: period_value.to_string(),
                })?;

            rows.push(LotSizingRow {
                period,
                demand: cell("Demand")?,
                setup_cost: cell("Setup_Cost")?,
                holding_cost: cell("Holding_Cost")?,
                min_production: cell("Min_Production")?,
                max_production: cell("Max_Production")?,
            });
        }

        let first = rows.first().cloned().ok_or(LoadError::EmptyData)?;
        Self::warn_on_inconsistent_parameters(&first, &rows);

        let problem = PlanningProblem::new(
            DemandSeries::new(rows.iter().map(|r| r.demand).collect()),
            CostModel::new(first.setup_cost, first.holding_cost),
        )
        .with_period_labels(rows.iter().map(|r| r.period).collect())
        .with_bounds(ProductionBounds::new(
            first.min_production,
            first.max_production,
        ));

        problem.validate()?;

        tracing::info!("載入完成：{} 期，總需求 {}", problem.horizon(), problem.demand.total());
        Ok(problem)
    }

    /// 後續列的成本參數與第一列不同時只記錄警告
    fn warn_on_inconsistent_parameters(first: &LotSizingRow, rows: &[LotSizingRow]) {
        for row in rows.iter().skip(1) {
            if row.setup_cost != first.setup_cost
                || row.holding_cost != first.holding_cost
                || row.min_production != first.min_production
                || row.max_production != first.max_production
            {
                tracing::warn!(
                    "第 {} 期的成本參數與第一列不同，將沿用第一列的設定",
                    row.period
                );
            }
        }
    }
}

/// 解析數值欄位（允許前後空白與科學記號）
fn parse_number(raw: &str) -> Option<Decimal> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .ok()
        .map(|value| value.normalize())
}
