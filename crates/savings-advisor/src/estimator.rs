//! Savings Estimator
//!
//! Computes the monthly savings estimate behind the website's ROI section.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::model::{AutomationAssumptions, RoiEstimate, RoiInputs};

/// Stateless estimator over a validated set of assumptions
#[derive(Clone, Debug, Default)]
pub struct SavingsEstimator {
    assumptions: AutomationAssumptions,
}

impl SavingsEstimator {
    pub fn new(assumptions: AutomationAssumptions) -> Self {
        Self { assumptions }
    }

    pub fn assumptions(&self) -> &AutomationAssumptions {
        &self.assumptions
    }

    /// Derive the full estimate from one set of inputs
    ///
    /// Pure and total: every combination of non-negative inputs produces
    /// finite, non-negative outputs, including the all-zero case. Values
    /// at the extreme of the parseable range cap at `Decimal::MAX`.
    pub fn estimate(&self, inputs: &RoiInputs) -> RoiEstimate {
        let monthly_emails =
            Decimal::from(inputs.emails_per_day) * Decimal::from(inputs.work_days_per_month);
        let monthly_minutes = monthly_emails * Decimal::from(inputs.minutes_per_email);
        let monthly_hours = monthly_minutes / dec!(60);
        // The rate is bounded only by what parses - cost products saturate
        let monthly_cost = monthly_hours.saturating_mul(inputs.hourly_rate);

        let hours_saved = monthly_hours * self.assumptions.reduction_rate;
        let cost_saved = monthly_cost.saturating_mul(self.assumptions.reduction_rate);

        // Nothing saved means nothing to earn back - never divide by zero.
        // A saving too small for the quotient to fit reads as "never".
        let payback_months = if cost_saved > Decimal::ZERO {
            self.assumptions
                .product_price
                .checked_div(cost_saved)
                .unwrap_or(Decimal::MAX)
        } else {
            Decimal::ZERO
        };

        let remaining_work_percent = if monthly_hours > Decimal::ZERO {
            let remaining = (monthly_hours - hours_saved) / monthly_hours * dec!(100);
            remaining.clamp(Decimal::ZERO, dec!(100))
        } else {
            Decimal::ZERO
        };

        RoiEstimate {
            monthly_hours,
            monthly_cost,
            hours_saved_per_month: hours_saved,
            cost_saved_per_month: cost_saved,
            payback_months,
            remaining_work_percent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::parse_amount;

    fn standard() -> SavingsEstimator {
        SavingsEstimator::new(AutomationAssumptions::standard())
    }

    #[test]
    fn test_reference_scenario() {
        let estimate = standard().estimate(&RoiInputs::new(20, 5, dec!(500), 22));

        assert_eq!(estimate.monthly_hours.round_dp(2), dec!(36.67));
        assert_eq!(estimate.monthly_cost.round_dp(2), dec!(18333.33));
        assert_eq!(estimate.hours_saved_per_month.round_dp(2), dec!(29.33));
        assert_eq!(estimate.cost_saved_per_month.round_dp(2), dec!(14666.67));
        assert_eq!(estimate.payback_months.round_dp(3), dec!(1.016));
        assert_eq!(estimate.remaining_work_percent.round_dp(6), dec!(20));
    }

    #[test]
    fn test_all_zero_inputs() {
        let estimate = standard().estimate(&RoiInputs::new(0, 0, Decimal::ZERO, 22));

        assert_eq!(estimate.monthly_hours, Decimal::ZERO);
        assert_eq!(estimate.monthly_cost, Decimal::ZERO);
        assert_eq!(estimate.hours_saved_per_month, Decimal::ZERO);
        assert_eq!(estimate.cost_saved_per_month, Decimal::ZERO);
        assert_eq!(estimate.payback_months, Decimal::ZERO);
        assert_eq!(estimate.remaining_work_percent, Decimal::ZERO);
    }

    #[test]
    fn test_free_labor_has_no_payback() {
        // Hours are still saved, but saved money is zero
        let estimate = standard().estimate(&RoiInputs::new(20, 5, Decimal::ZERO, 22));

        assert!(estimate.hours_saved_per_month > Decimal::ZERO);
        assert_eq!(estimate.cost_saved_per_month, Decimal::ZERO);
        assert_eq!(estimate.payback_months, Decimal::ZERO);
    }

    #[test]
    fn test_absurd_rate_saturates_cost() {
        // A 28-digit hourly rate survives the parse boundary, so the
        // estimate must absorb it without overflowing
        let rate = parse_amount("1000000000000000000000000000");
        let estimate = standard().estimate(&RoiInputs::new(10, 60, rate, 22));

        assert_eq!(estimate.monthly_cost, Decimal::MAX);
        assert_eq!(estimate.hours_saved_per_month, dec!(176));
        assert!(estimate.payback_months > Decimal::ZERO);
        assert_eq!(estimate.remaining_work_percent.round_dp(6), dec!(20));
    }

    #[test]
    fn test_microscopic_rate_caps_payback() {
        // Savings this small would need more months than Decimal can hold
        let rate = parse_amount("0.000000000000000000000000001");
        let estimate = standard().estimate(&RoiInputs::new(20, 5, rate, 22));

        assert!(estimate.cost_saved_per_month > Decimal::ZERO);
        assert_eq!(estimate.payback_months, Decimal::MAX);
        assert_eq!(estimate.remaining_work_percent.round_dp(6), dec!(20));
    }

    #[test]
    fn test_remaining_share_tracks_reduction_rate() {
        let estimator = SavingsEstimator::new(AutomationAssumptions::cautious());
        let estimate = estimator.estimate(&RoiInputs::new(10, 6, dec!(400), 20));

        // 60% automated leaves 40% manual
        assert_eq!(estimate.remaining_work_percent.round_dp(6), dec!(40));
    }

    #[test]
    fn test_remaining_share_bounds() {
        let full = SavingsEstimator::new(
            AutomationAssumptions::new(dec!(14900), Decimal::ONE).unwrap(),
        );
        let none = SavingsEstimator::new(
            AutomationAssumptions::new(dec!(14900), Decimal::ZERO).unwrap(),
        );
        let inputs = RoiInputs::new(50, 10, dec!(650), 22);

        assert_eq!(full.estimate(&inputs).remaining_work_percent, Decimal::ZERO);
        assert_eq!(none.estimate(&inputs).remaining_work_percent, dec!(100));
    }

    #[test]
    fn test_idempotent() {
        let inputs = RoiInputs::new(35, 4, dec!(520), 21);
        let estimator = standard();
        assert_eq!(estimator.estimate(&inputs), estimator.estimate(&inputs));
    }

    #[test]
    fn test_more_volume_saves_more() {
        let estimator = standard();
        let base = estimator.estimate(&RoiInputs::new(20, 5, dec!(500), 22));

        let more_emails = estimator.estimate(&RoiInputs::new(21, 5, dec!(500), 22));
        let more_minutes = estimator.estimate(&RoiInputs::new(20, 6, dec!(500), 22));
        let higher_rate = estimator.estimate(&RoiInputs::new(20, 5, dec!(550), 22));

        assert!(more_emails.cost_saved_per_month > base.cost_saved_per_month);
        assert!(more_minutes.cost_saved_per_month > base.cost_saved_per_month);
        assert!(higher_rate.cost_saved_per_month > base.cost_saved_per_month);
    }
}
