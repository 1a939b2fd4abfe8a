//! 結果匯出（CSV 明細 + 文字摘要）

use std::fs;
use std::io::Write;
use std::path::PathBuf;

use chrono::NaiveDateTime;
use csv::Writer;
use lot_calc::ComparisonResult;
use lot_core::{LotSizingError, PlanningProblem};
use rust_decimal::Decimal;

use crate::error::ExportError;
use crate::loader::REQUIRED_COLUMNS;
use crate::report::ReportRenderer;

/// 匯出的檔案路徑
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedFiles {
    pub results_csv: PathBuf,
    pub summary_txt: PathBuf,
}

/// 結果匯出器
pub struct ResultExporter {
    results_dir: PathBuf,
}

impl ResultExporter {
    /// 創建匯出器（目錄在寫入時才建立）
    pub fn new(results_dir: impl Into<PathBuf>) -> Self {
        Self {
            results_dir: results_dir.into(),
        }
    }

    /// 以目前本地時間為檔名時間戳記匯出
    pub fn save_now(
        &self,
        problem: &PlanningProblem,
        result: &ComparisonResult,
    ) -> Result<ExportedFiles, ExportError> {
        self.save(problem, result, chrono::Local::now().naive_local())
    }

    /// 匯出明細 CSV 與摘要
    pub fn save(
        &self,
        problem: &PlanningProblem,
        result: &ComparisonResult,
        generated_at: NaiveDateTime,
    ) -> Result<ExportedFiles, ExportError> {
        let horizon = problem.horizon();
        for outcome in [&result.exact, &result.heuristic] {
            if outcome.production.len() != horizon || outcome.inventory.len() != horizon {
                return Err(LotSizingError::LengthMismatch {
                    expected: horizon,
                    actual: outcome.production.len().min(outcome.inventory.len()),
                }
                .into());
            }
        }

        fs::create_dir_all(&self.results_dir)?;

        let timestamp = generated_at.format("%Y%m%d_%H%M%S");
        let files = ExportedFiles {
            results_csv: self
                .results_dir
                .join(format!("lot_sizing_results_{}.csv", timestamp)),
            summary_txt: self
                .results_dir
                .join(format!("summary_lot_sizing_results_{}.txt", timestamp)),
        };

        let mut writer = Writer::from_path(&files.results_csv)?;
        Self::write_results(&mut writer, problem, result)?;
        writer.flush()?;
        tracing::info!("結果已寫入 {}", files.results_csv.display());

        let summary = ReportRenderer::render_summary(problem, result, generated_at);
        fs::write(&files.summary_txt, summary)?;
        tracing::info!("摘要已寫入 {}", files.summary_txt.display());

        Ok(files)
    }

    /// 寫入逐期明細
    pub fn write_results<W: Write>(
        writer: &mut Writer<W>,
        problem: &PlanningProblem,
        result: &ComparisonResult,
    ) -> Result<(), ExportError> {
        writer.write_record([
            "Period",
            "Demand",
            "WW_Production",
            "WW_Inventory",
            "JIT_Production",
            "JIT_Inventory",
        ])?;

        for (period, demand) in problem.demand.values().iter().enumerate() {
            let label = problem
                .period_labels
                .get(period)
                .copied()
                .unwrap_or(period as u32 + 1);
            writer.write_record([
                label.to_string(),
                demand.to_string(),
                result.exact.production[period].to_string(),
                result.exact.inventory[period].to_string(),
                result.heuristic.production[period].to_string(),
                result.heuristic.inventory[period].to_string(),
            ])?;
        }

        Ok(())
    }

    /// 以載入器可讀的格式輸出規劃問題（範例檔用）
    ///
    /// 未設置上下限時寫入 [0, 總需求]。
    pub fn write_problem<W: Write>(
        writer: W,
        problem: &PlanningProblem,
    ) -> Result<(), ExportError> {
        let mut writer = Writer::from_writer(writer);
        writer.write_record(REQUIRED_COLUMNS)?;

        let (min_production, max_production) = problem
            .bounds
            .map(|b| (b.min_production, b.max_production))
            .unwrap_or((Decimal::ZERO, problem.demand.total()));

        for (period, demand) in problem.demand.values().iter().enumerate() {
            let label = problem
                .period_labels
                .get(period)
                .copied()
                .unwrap_or(period as u32 + 1);
            writer.write_record([
                label.to_string(),
                demand.to_string(),
                problem.cost.setup_cost.to_string(),
                problem.cost.holding_cost_per_unit.to_string(),
                min_production.to_string(),
                max_production.to_string(),
            ])?;
        }

        writer.flush()?;
        Ok(())
    }

    /// 內建範例資料的 CSV 文字
    pub fn sample_csv() -> Result<String, ExportError> {
        let mut buffer = Vec::new();
        Self::write_problem(&mut buffer, &PlanningProblem::sample())?;
        Ok(String::from_utf8_lossy(&buffer).into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::LotSizingLoader;
    use chrono::NaiveDate;
    use lot_calc::PlanningCalculator;
    use lot_core::{CostModel, DemandSeries};

    fn generated_at() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 11, 1)
            .unwrap()
            .and_hms_opt(14, 5, 9)
            .unwrap()
    }

    #[test]
    fn test_save_writes_timestamped_files() {
        let dir = tempfile::tempdir().unwrap();
        let results_dir = dir.path().join("Results");
        let problem = PlanningProblem::new(
            DemandSeries::from_units([10, 0, 20, 0, 30]),
            CostModel::new(Decimal::from(50), Decimal::ONE),
        );
        let result = PlanningCalculator::new(problem.clone()).calculate().unwrap();

        let files = ResultExporter::new(&results_dir)
            .save(&problem, &result, generated_at())
            .unwrap();

        assert_eq!(
            files.results_csv,
            results_dir.join("lot_sizing_results_20251101_140509.csv")
        );
        assert_eq!(
            files.summary_txt,
            results_dir.join("summary_lot_sizing_results_20251101_140509.txt")
        );

        let csv = fs::read_to_string(&files.results_csv).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(
            lines[0],
            "Period,Demand,WW_Production,WW_Inventory,JIT_Production,JIT_Inventory"
        );
        assert_eq!(lines[1], "1,10,30,20,10,0");
        assert_eq!(lines.len(), 6);

        let summary = fs::read_to_string(&files.summary_txt).unwrap();
        assert!(summary.contains("Generated: 2025-11-01 14:05:09"));
    }

    #[test]
    fn test_save_rejects_mismatched_result() {
        let dir = tempfile::tempdir().unwrap();
        let problem = PlanningProblem::new(
            DemandSeries::from_units([10, 10]),
            CostModel::new(Decimal::from(50), Decimal::ONE),
        );
        let mut result = PlanningCalculator::new(problem.clone()).calculate().unwrap();
        result.heuristic.inventory.pop();

        let outcome = ResultExporter::new(dir.path()).save(&problem, &result, generated_at());

        assert!(matches!(
            outcome,
            Err(ExportError::Plan(LotSizingError::LengthMismatch { .. }))
        ));
    }

    #[test]
    fn test_sample_csv_loads_back() {
        let csv = ResultExporter::sample_csv().unwrap();

        assert!(csv.starts_with(
            "Period,Demand,Setup_Cost,Holding_Cost,Min_Production,Max_Production\n1,120,1000,0.5,50,1000\n"
        ));

        let problem = LotSizingLoader::from_reader(csv.as_bytes()).unwrap();
        assert_eq!(problem, PlanningProblem::sample());
    }
}
