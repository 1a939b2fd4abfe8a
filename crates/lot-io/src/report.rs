//! 比較報表（文字格式）

use chrono::NaiveDateTime;
use lot_calc::ComparisonResult;
use lot_core::{LotSizingRule, PlanOutcome, PlanningProblem};
use rust_decimal::Decimal;

const RULE_WIDTH: usize = 80;

/// 比較報表產生器
pub struct ReportRenderer;

impl ReportRenderer {
    /// 兩種計劃的成本比較與逐期明細
    pub fn render_comparison(problem: &PlanningProblem, result: &ComparisonResult) -> String {
        let mut lines = vec![
            "=".repeat(RULE_WIDTH),
            format!("{:^width$}", "LOT SIZING RESULTS", width = RULE_WIDTH),
            "=".repeat(RULE_WIDTH),
        ];

        for rule in [LotSizingRule::WagnerWhitin, LotSizingRule::JustInTime] {
            let outcome = result.outcome(rule);
            lines.push(String::new());
            lines.push("-".repeat(RULE_WIDTH));
            lines.push(rule.label().to_string());
            lines.push("-".repeat(RULE_WIDTH));
            lines.push(format!("Total Cost: €{:.2}", outcome.total_cost));
            lines.push(format!("Production setups: {}", outcome.setups()));
            lines.push(format!(
                "Average inventory: {} units",
                format_average(outcome)
            ));
        }

        lines.push(String::new());
        lines.push("-".repeat(RULE_WIDTH));
        lines.push(format!("{:^width$}", "COMPARISON", width = RULE_WIDTH));
        lines.push("-".repeat(RULE_WIDTH));
        match result.savings_percent() {
            Some(percent) => lines.push(format!(
                "Wagner-Whitin saves €{:.2} ({:.1}%) compared to JIT",
                result.savings(),
                percent.round_dp(1)
            )),
            None => lines.push("No cost savings to calculate".to_string()),
        }

        lines.push(String::new());
        lines.extend(Self::render_table(problem, result));

        lines.join("\n")
    }

    /// 逐期明細表
    pub fn render_table(problem: &PlanningProblem, result: &ComparisonResult) -> Vec<String> {
        let mut lines = vec![
            "=".repeat(RULE_WIDTH),
            format!("{:^width$}", "DETAILED PRODUCTION PLAN", width = RULE_WIDTH),
            "=".repeat(RULE_WIDTH),
            format!(
                "{:<8} {:<8} {:<12} {:<14} {:<12} {:<12}",
                "Period", "Demand", "WW Produce", "WW Inventory", "JIT Produce", "JIT Inventory"
            ),
            "-".repeat(RULE_WIDTH),
        ];

        let exact = &result.exact;
        let heuristic = &result.heuristic;
        for (period, demand) in problem.demand.values().iter().enumerate() {
            let label = problem
                .period_labels
                .get(period)
                .map(|l| l.to_string())
                .unwrap_or_default();
            lines.push(format!(
                "{:<8} {:<8} {:<12} {:<14} {:<12} {:<12}",
                label,
                demand.to_string(),
                cell(&exact.production, period),
                cell(&exact.inventory, period),
                cell(&heuristic.production, period),
                cell(&heuristic.inventory, period),
            ));
        }

        lines.push("-".repeat(RULE_WIDTH));
        lines.push(format!(
            "{:<8} {:<8} {:<12} {:<14} {:<12} {:<12}",
            "Total",
            problem.demand.total().to_string(),
            exact.total_production().to_string(),
            "",
            heuristic.total_production().to_string(),
            "",
        ));

        lines
    }

    /// 文字摘要（寫入摘要檔）
    pub fn render_summary(
        problem: &PlanningProblem,
        result: &ComparisonResult,
        generated_at: NaiveDateTime,
    ) -> String {
        let mut lines = vec![
            "Lot Sizing Analysis Summary".to_string(),
            format!("Generated: {}", generated_at.format("%Y-%m-%d %H:%M:%S")),
            format!("Setup Cost: €{}", problem.cost.setup_cost),
            format!("Holding Cost: €{}", problem.cost.holding_cost_per_unit),
            format!("Initial Inventory: {} units", problem.initial_inventory),
            format!("Total Periods: {}", problem.horizon()),
            format!("Total Demand: {} units", problem.demand.total()),
        ];

        for (title, outcome) in [
            ("Wagner-Whitin Results:", &result.exact),
            ("JIT Results:", &result.heuristic),
        ] {
            lines.push(String::new());
            lines.push(title.to_string());
            lines.push(format!("- Total Cost: €{:.2}", outcome.total_cost));
            lines.push(format!("- Production Setups: {}", outcome.setups()));
            lines.push(format!(
                "- Total Production: {} units",
                outcome.total_production()
            ));
            lines.push(format!(
                "- Average Inventory: {} units",
                format_average(outcome)
            ));
        }

        if !result.warnings.is_empty() {
            lines.push(String::new());
            lines.push("Warnings:".to_string());
            for warning in &result.warnings {
                lines.push(format!("- [{:?}] {}", warning.severity, warning.message));
            }
        }

        lines.push(String::new());
        lines.join("\n")
    }
}

fn cell(values: &[Decimal], period: usize) -> String {
    values
        .get(period)
        .map(|v| v.to_string())
        .unwrap_or_default()
}

fn format_average(outcome: &PlanOutcome) -> String {
    outcome
        .average_inventory()
        .map(|avg| format!("{:.1}", avg.round_dp(1)))
        .unwrap_or_else(|| "n/a".to_string())
}
