//! Domain Models
//!
//! Core data types for the e-mail automation savings estimate.
//! Uses `rust_decimal` for all monetary values - never use f64 for money!

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::{AdvisorError, Result};
use crate::pricing::PACKAGE_PRICE;

/// Work days per month when the visitor leaves the field untouched
pub const DEFAULT_WORK_DAYS: u32 = 22;

/// Business parameters entered by a site visitor
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoiInputs {
    /// Customer e-mails handled per day
    pub emails_per_day: u32,

    /// Minutes spent answering a single e-mail
    pub minutes_per_email: u32,

    /// Hourly cost of the person answering (kr)
    pub hourly_rate: Decimal,

    /// Work days per month the inbox is staffed
    pub work_days_per_month: u32,
}

impl RoiInputs {
    pub fn new(
        emails_per_day: u32,
        minutes_per_email: u32,
        hourly_rate: Decimal,
        work_days_per_month: u32,
    ) -> Self {
        Self {
            emails_per_day,
            minutes_per_email,
            hourly_rate,
            work_days_per_month,
        }
    }
}

impl Default for RoiInputs {
    fn default() -> Self {
        Self {
            emails_per_day: 0,
            minutes_per_email: 0,
            hourly_rate: Decimal::ZERO,
            work_days_per_month: DEFAULT_WORK_DAYS,
        }
    }
}

/// What the automation is assumed to cost and to take over
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutomationAssumptions {
    /// One-time setup price for the chatbot package (kr)
    pub product_price: Decimal,

    /// Share of manual e-mail work the chatbot takes over (0..=1)
    pub reduction_rate: Decimal,
}

impl AutomationAssumptions {
    /// Create validated assumptions
    pub fn new(product_price: Decimal, reduction_rate: Decimal) -> Result<Self> {
        if reduction_rate < Decimal::ZERO || reduction_rate > Decimal::ONE {
            return Err(AdvisorError::InvalidAssumptions(format!(
                "reduction rate {} must be between 0 and 1",
                reduction_rate
            )));
        }
        if product_price < Decimal::ZERO {
            return Err(AdvisorError::InvalidAssumptions(format!(
                "product price {} must not be negative",
                product_price
            )));
        }

        Ok(Self {
            product_price,
            reduction_rate,
        })
    }

    /// Standard pitch: the package price with 80% of manual work removed
    pub fn standard() -> Self {
        Self {
            product_price: PACKAGE_PRICE,
            reduction_rate: dec!(0.8),
        }
    }

    /// Cautious pitch for skeptical visitors - only 60% removed
    pub fn cautious() -> Self {
        Self {
            product_price: PACKAGE_PRICE,
            reduction_rate: dec!(0.6),
        }
    }
}

impl Default for AutomationAssumptions {
    fn default() -> Self {
        Self::standard()
    }
}

/// Monthly savings derived from one set of inputs
///
/// Computed fresh on every recalculation; never mutated in place.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoiEstimate {
    /// Hours currently spent on e-mail per month
    pub monthly_hours: Decimal,

    /// Cost of that time per month (kr)
    pub monthly_cost: Decimal,

    /// Hours handed over to the chatbot per month
    pub hours_saved_per_month: Decimal,

    /// Cost handed over to the chatbot per month (kr)
    pub cost_saved_per_month: Decimal,

    /// Months until the one-time price is earned back
    pub payback_months: Decimal,

    /// Share of the workload that stays manual (0-100)
    pub remaining_work_percent: Decimal,
}
