//! # Lot Sizing
//!
//! 多期批量規劃：Wagner-Whitin 最佳解與即時生產（JIT）基準比較。
//!
//! ```
//! use lot_sizing::{CostModel, DemandSeries, PlanningCalculator, PlanningProblem};
//! use rust_decimal::Decimal;
//!
//! let problem = PlanningProblem::new(
//!     DemandSeries::from_units([10, 0, 20, 0, 30]),
//!     CostModel::new(Decimal::from(50), Decimal::ONE),
//! );
//! let result = PlanningCalculator::new(problem).calculate().unwrap();
//! assert_eq!(result.exact.total_cost, Decimal::from(140));
//! ```

pub mod logging;

pub use lot_calc::{
    ComparisonResult, CumulativeDemand, JustInTimePlanner, LotSizingCalculator, PlanEvaluation,
    PlanEvaluator, PlanWarning, PlanningCalculator, WagnerWhitinPlanner, WarningSeverity,
};
pub use lot_core::{
    CostModel, DemandSeries, LotSizingError, LotSizingRule, PlanOutcome, PlanningProblem,
    ProductionBounds,
};
pub use lot_io::{
    ExportError, ExportedFiles, LoadError, LotSizingLoader, ReportRenderer, ResultExporter,
};
