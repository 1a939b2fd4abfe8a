//! 範例資料批量規劃
//!
//! 以內建 12 期範例資料比較 Wagner-Whitin 與即時生產

use lot_sizing::{logging, PlanningCalculator, PlanningProblem, ReportRenderer};

fn main() -> anyhow::Result<()> {
    logging::init();

    let problem = PlanningProblem::sample();
    println!("=== Lot Sizing (sample data) ===\n");
    println!("Periods: {}", problem.horizon());
    println!("Setup cost: {}", problem.cost.setup_cost);
    println!("Holding cost: {}\n", problem.cost.holding_cost_per_unit);

    let result = PlanningCalculator::new(problem.clone()).calculate()?;
    println!("{}", ReportRenderer::render_comparison(&problem, &result));

    for warning in &result.warnings {
        println!("[{:?}] {}", warning.severity, warning.message);
    }

    Ok(())
}
