//! Form model: the in-progress assessment and its validation rules.

mod draft;
mod validation;

pub use draft::*;
pub use validation::*;

use thiserror::Error;

use crate::models::InvalidToothId;

/// Form errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    /// Programming-level misuse; the fixed layout never produces it.
    #[error(transparent)]
    InvalidToothId(#[from] InvalidToothId),

    #[error("{}", describe_violations(.0))]
    Validation(Vec<Violation>),
}

pub type FormResult<T> = Result<T, FormError>;
