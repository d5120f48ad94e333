//! The module contains the errors the engine can throw.
//!
//! The errors are:
//!
//! - [`InvalidAmount`] thrown when an amount is not a positive number.
//! - [`InvalidCategory`] thrown when a category label is empty.
//! - [`EmptyTranscript`] thrown when a voice transcript has no text.
//! - [`AmountNotDetected`] thrown when no amount can be read from a transcript.
//!
//!  [`InvalidAmount`]: EngineError::InvalidAmount
//!  [`InvalidCategory`]: EngineError::InvalidCategory
//!  [`EmptyTranscript`]: EngineError::EmptyTranscript
//!  [`AmountNotDetected`]: EngineError::AmountNotDetected
use thiserror::Error;

/// Engine custom errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
    #[error("Invalid category: {0}")]
    InvalidCategory(String),
    #[error("Transcript must not be empty")]
    EmptyTranscript,
    #[error("Unable to detect an amount from the voice transcript.")]
    AmountNotDetected,
}

impl EngineError {
    /// Name of the input field the error refers to.
    pub fn field(&self) -> &'static str {
        match self {
            Self::InvalidAmount(_) | Self::AmountNotDetected => "amount",
            Self::InvalidCategory(_) => "category",
            Self::EmptyTranscript => "transcript",
        }
    }
}
