//! # savings-advisor
//!
//! Calculators behind the svarbot marketing site: what a small business
//! spends on answering customer e-mail, what an automated chatbot saves,
//! what a configured package costs, and whether a contact inquiry is
//! complete enough to send.
//!
//! ## Example: 20 e-mails a day at 500 kr/hour
//!
//! ```text
//! ┌────────────────────────────────────────────────────┐
//! │  Today:    36.7 h/month     18 333 kr/month        │
//! │  With bot:  7.3 h/month      3 667 kr/month        │
//! ├────────────────────────────────────────────────────┤
//! │  Saved:    29.3 h/month     14 667 kr/month        │
//! │  Payback:  ~1 month on the 14 900 kr setup price   │
//! └────────────────────────────────────────────────────┘
//! ```
//!
//! All arithmetic runs on `rust_decimal`; whatever the visitor types is
//! coerced to a safe number before it reaches the estimator.

pub mod calculator;
pub mod error;
pub mod estimator;
pub mod format;
pub mod inquiry;
pub mod model;
pub mod parse;
pub mod pricing;

pub use calculator::{EstimateSink, InputField, RecordingSink, RoiCalculator};
pub use error::{AdvisorError, Result};
pub use estimator::SavingsEstimator;
pub use inquiry::{Inquiry, InquiryError, ServiceInterest};
pub use model::{AutomationAssumptions, RoiEstimate, RoiInputs};
pub use pricing::{AddOn, Quote, PACKAGE_PRICE};
