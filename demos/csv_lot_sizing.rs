//! 從 CSV 載入資料並匯出結果
//!
//! 用法：`cargo run --example csv_lot_sizing -- [資料檔] [輸出目錄]`
//! 未指定資料檔時使用 `lot_sizing_data.csv`，輸出目錄預設為 `Results`。

use std::path::PathBuf;

use lot_io::loader::DEFAULT_DATA_FILE;
use lot_sizing::{
    logging, LotSizingLoader, PlanningCalculator, ReportRenderer, ResultExporter,
};

fn main() -> anyhow::Result<()> {
    logging::init();

    let mut args = std::env::args().skip(1);
    let data_file = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_FILE));
    let results_dir = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("Results"));

    if !data_file.exists() {
        println!("{} not found, sample CSV format:\n", data_file.display());
        print!("{}", ResultExporter::sample_csv()?);
        return Ok(());
    }

    let problem = LotSizingLoader::from_path(&data_file)?;
    let result = PlanningCalculator::new(problem.clone()).calculate()?;
    println!("{}", ReportRenderer::render_comparison(&problem, &result));

    let files = ResultExporter::new(results_dir).save_now(&problem, &result)?;
    tracing::info!(
        "exported {} and {}",
        files.results_csv.display(),
        files.summary_txt.display()
    );

    Ok(())
}
