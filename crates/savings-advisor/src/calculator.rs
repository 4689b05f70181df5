//! ROI Calculator Controller
//!
//! Holds the state the original widget kept implicitly in the DOM: the
//! current inputs plus the assumptions, with the presentation decoupled
//! behind a sink trait. Every field change reparses, recomputes and pushes
//! a fresh estimate to all attached sinks; the latest change always wins.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::estimator::SavingsEstimator;
use crate::model::{RoiEstimate, RoiInputs};
use crate::parse::{parse_amount, parse_count};

/// The four editable calculator fields
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputField {
    EmailsPerDay,
    MinutesPerEmail,
    HourlyRate,
    WorkDaysPerMonth,
}

impl InputField {
    pub fn as_str(&self) -> &str {
        match self {
            InputField::EmailsPerDay => "emails_per_day",
            InputField::MinutesPerEmail => "minutes_per_email",
            InputField::HourlyRate => "hourly_rate",
            InputField::WorkDaysPerMonth => "work_days_per_month",
        }
    }
}

impl std::fmt::Display for InputField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Receives every freshly computed estimate
pub trait EstimateSink: Send + Sync {
    fn publish(&self, estimate: &RoiEstimate);
}

/// Calculator state machine driving the sinks
pub struct RoiCalculator {
    estimator: SavingsEstimator,
    inputs: RoiInputs,
    sinks: Vec<Arc<dyn EstimateSink>>,
}

impl RoiCalculator {
    pub fn new(estimator: SavingsEstimator) -> Self {
        Self {
            estimator,
            inputs: RoiInputs::default(),
            sinks: Vec::new(),
        }
    }

    pub fn with_inputs(estimator: SavingsEstimator, inputs: RoiInputs) -> Self {
        Self {
            estimator,
            inputs,
            sinks: Vec::new(),
        }
    }

    /// Attach a presentation sink
    pub fn attach(&mut self, sink: Arc<dyn EstimateSink>) {
        self.sinks.push(sink);
    }

    pub fn inputs(&self) -> &RoiInputs {
        &self.inputs
    }

    /// Apply one raw field edit, recompute and publish
    pub fn set_field(&mut self, field: InputField, raw: &str) -> RoiEstimate {
        match field {
            InputField::EmailsPerDay => self.inputs.emails_per_day = parse_count(raw),
            InputField::MinutesPerEmail => self.inputs.minutes_per_email = parse_count(raw),
            InputField::HourlyRate => self.inputs.hourly_rate = parse_amount(raw),
            InputField::WorkDaysPerMonth => self.inputs.work_days_per_month = parse_count(raw),
        }

        tracing::debug!(field = %field, "Recomputing estimate");
        self.recalculate()
    }

    /// Recompute from the current inputs and publish
    ///
    /// Also used once on page load so the slots never show stale markup.
    pub fn recalculate(&mut self) -> RoiEstimate {
        let estimate = self.estimator.estimate(&self.inputs);
        for sink in &self.sinks {
            sink.publish(&estimate);
        }
        estimate
    }
}

/// In-memory sink (for development/testing)
pub struct RecordingSink {
    estimates: std::sync::RwLock<Vec<RoiEstimate>>,
}

impl Default for RecordingSink {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordingSink {
    pub fn new() -> Self {
        Self {
            estimates: std::sync::RwLock::new(Vec::new()),
        }
    }

    /// Most recently published estimate
    pub fn latest(&self) -> Option<RoiEstimate> {
        self.estimates.read().unwrap().last().cloned()
    }

    /// Number of estimates published so far
    pub fn published_count(&self) -> usize {
        self.estimates.read().unwrap().len()
    }
}

impl EstimateSink for RecordingSink {
    fn publish(&self, estimate: &RoiEstimate) {
        self.estimates.write().unwrap().push(estimate.clone());
    }
}
