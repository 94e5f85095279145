use thiserror::Error;

/// Input-validation errors for the create/update DTOs.
///
/// These map to the repository's bad-request (400) path; they never carry
/// store-level failure detail.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("required field '{0}' is missing or empty")]
    MissingField(&'static str),
}

impl InputError {
    /// Creates a new `MissingField` error.
    #[must_use]
    pub fn missing_field(field: &'static str) -> Self {
        Self::MissingField(field)
    }
}
