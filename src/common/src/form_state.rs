/// One reported form error: the field it is attached to and the message shown
/// to the submitter.
#[derive(Debug, Clone, PartialEq)]
pub struct FormError {
    pub field: String,
    pub message: String,
}

/// Error side channel handed to validation hooks by the hosting framework.
///
/// A hook reports failures here instead of returning them; any recorded error
/// blocks completion of the current submission attempt.
#[derive(Debug, Default)]
pub struct FormState {
    errors: Vec<FormError>,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_error(&mut self, field: &str, message: &str) {
        self.errors.push(FormError {
            field: field.to_string(),
            message: message.to_string(),
        });
    }

    pub fn errors(&self) -> &[FormError] {
        &self.errors
    }

    /// First message reported against the given field, if any.
    pub fn error_for(&self, field: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|error| error.field == field)
            .map(|error| error.message.as_str())
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn clear(&mut self) {
        self.errors.clear();
    }
}
