/// Editable text widget with a user-visible validation error.
pub trait TextField {
    /// Current text.
    fn text(&self) -> String;
    /// Replaces the text.
    fn set_text(&mut self, text: &str);
    /// Current validation error, if any.
    fn error(&self) -> Option<&str>;
    /// Shows or clears (`None`) a validation error.
    fn set_error(&mut self, error: Option<&str>);
}

/// In-memory text field.
///
/// Like a platform edit text, changing the text dismisses the validation error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditText {
    text: String,
    error: Option<String>,
}

impl EditText {
    /// Creates a field holding the given text.
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            error: None,
        }
    }
}

impl TextField for EditText {
    fn text(&self) -> String {
        self.text.clone()
    }

    fn set_text(&mut self, text: &str) {
        text.clone_into(&mut self.text);
        self.error = None;
    }

    fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    fn set_error(&mut self, error: Option<&str>) {
        self.error = error.map(str::to_owned);
    }
}
