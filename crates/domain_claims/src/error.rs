//! Claim domain errors

use core_kernel::MoneyError;
use thiserror::Error;

/// Errors raised while constructing or validating claims
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ClaimError {
    #[error("Validation error: required field '{0}' is empty")]
    MissingField(&'static str),

    #[error("Validation error: {0}")]
    Money(#[from] MoneyError),
}
