//! 生產量上下限稽核
//!
//! 規劃器不強制上下限；這裡只檢查結果並產生警告。

use lot_core::{PlanOutcome, ProductionBounds};

use crate::PlanWarning;

/// 上下限稽核器
pub struct BoundsAudit;

impl BoundsAudit {
    /// 檢查每個有生產的期別是否落在 [min, max] 內
    pub fn inspect(
        outcome: &PlanOutcome,
        bounds: &ProductionBounds,
        period_labels: &[u32],
    ) -> Vec<PlanWarning> {
        outcome
            .production
            .iter()
            .enumerate()
            .filter(|(_, quantity)| !quantity.is_zero() && !bounds.contains(**quantity))
            .map(|(period, quantity)| {
                let label = period_labels
                    .get(period)
                    .copied()
                    .unwrap_or(period as u32 + 1);
                PlanWarning::warning(
                    outcome.rule,
                    Some(period),
                    format!(
                        "第 {} 期生產量 {} 超出上下限 [{}, {}]",
                        label, quantity, bounds.min_production, bounds.max_production
                    ),
                )
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::WarningSeverity;
    use lot_core::LotSizingRule;
    use rust_decimal::Decimal;

    fn units(values: &[i64]) -> Vec<Decimal> {
        values.iter().copied().map(Decimal::from).collect()
    }

    #[test]
    fn test_flags_out_of_range_periods() {
        let outcome = PlanOutcome::new(
            LotSizingRule::WagnerWhitin,
            units(&[30, 0, 5, 200]),
            units(&[0, 0, 0, 0]),
            Decimal::ZERO,
        );
        let bounds = ProductionBounds::new(Decimal::from(10), Decimal::from(100));

        let warnings = BoundsAudit::inspect(&outcome, &bounds, &[1, 2, 3, 4]);

        assert_eq!(warnings.len(), 2);
        assert_eq!(warnings[0].period, Some(2));
        assert_eq!(warnings[1].period, Some(3));
        assert!(warnings.iter().all(|w| w.severity == WarningSeverity::Warning));
        assert!(warnings[1].message.contains("第 4 期"));
    }

    #[test]
    fn test_idle_periods_are_not_flagged() {
        let outcome = PlanOutcome::new(
            LotSizingRule::JustInTime,
            units(&[0, 0, 50]),
            units(&[0, 0, 0]),
            Decimal::ZERO,
        );
        let bounds = ProductionBounds::new(Decimal::from(10), Decimal::from(100));

        assert!(BoundsAudit::inspect(&outcome, &bounds, &[1, 2, 3]).is_empty());
    }
}
