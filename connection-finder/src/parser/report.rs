//! Input errors reported back by the upstream form.

use std::fmt;

/// The search form field an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputField {
    Start,
    Destination,
    Date,
    Time,
}

impl fmt::Display for InputField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputField::Start => write!(f, "start station"),
            InputField::Destination => write!(f, "destination station"),
            InputField::Date => write!(f, "date"),
            InputField::Time => write!(f, "time"),
        }
    }
}

/// One rejected input field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: InputField,
    /// The server's message, possibly empty
    pub message: String,
    /// Station names the server suggests instead (station fields only)
    pub candidates: Vec<String>,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.message.is_empty() {
            write!(f, "invalid {}", self.field)?;
        } else {
            write!(f, "invalid {}: {}", self.field, self.message)?;
        }
        if !self.candidates.is_empty() {
            write!(f, "\n  did you mean:")?;
            for candidate in &self.candidates {
                write!(f, "\n    - {candidate}")?;
            }
        }
        Ok(())
    }
}

/// Everything the server rejected about a search. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorReport {
    errors: Vec<FieldError>,
}

impl ErrorReport {
    /// Returns `None` when there is nothing to report.
    pub fn new(errors: Vec<FieldError>) -> Option<Self> {
        (!errors.is_empty()).then_some(Self { errors })
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// The error for `field`, if it was rejected.
    pub fn field(&self, field: InputField) -> Option<&FieldError> {
        self.errors.iter().find(|e| e.field == field)
    }
}

impl fmt::Display for ErrorReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.errors.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{error}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ErrorReport {}
