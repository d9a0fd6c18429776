use std::fmt;

/// Validation failure for a calculator input.
///
/// Every operation either fully succeeds or fails with one of these; there
/// are no partial results. The offending field name is carried so a caller
/// can attach the message to the right input control.
#[derive(Debug, Clone, PartialEq)]
pub enum InputError {
    /// Value is NaN or infinite
    NotFinite { field: &'static str, value: f64 },
    /// Value must be strictly greater than zero
    NotPositive { field: &'static str, value: f64 },
    /// Rate must be zero or greater
    NegativeRate { field: &'static str, value: f64 },
    /// Raw form text that does not parse as a number
    NotANumber { field: &'static str, raw: String },
}

impl InputError {
    /// Name of the input field that failed validation
    pub fn field(&self) -> &'static str {
        match self {
            InputError::NotFinite { field, .. }
            | InputError::NotPositive { field, .. }
            | InputError::NegativeRate { field, .. }
            | InputError::NotANumber { field, .. } => field,
        }
    }
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::NotFinite { field, value } => {
                write!(f, "{field} must be a finite number, got {value}")
            }
            InputError::NotPositive { field, value } => {
                write!(f, "{field} must be greater than zero, got {value}")
            }
            InputError::NegativeRate { field, value } => {
                write!(f, "{field} cannot be negative, got {value}")
            }
            InputError::NotANumber { field, raw } => {
                if raw.is_empty() {
                    write!(f, "{field} is required")
                } else {
                    write!(f, "{field} is not a number: {raw:?}")
                }
            }
        }
    }
}

impl std::error::Error for InputError {}

pub type Result<T> = std::result::Result<T, InputError>;
