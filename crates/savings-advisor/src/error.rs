//! Error Types for the Savings Advisor

use thiserror::Error;

pub type Result<T> = std::result::Result<T, AdvisorError>;

#[derive(Error, Debug)]
pub enum AdvisorError {
    #[error("Invalid assumptions: {0}")]
    InvalidAssumptions(String),

    #[error(transparent)]
    Inquiry(#[from] crate::inquiry::InquiryError),
}
