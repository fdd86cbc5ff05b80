use serde::Serialize;
use tracing::{debug, info, instrument};

use crate::ui::error::UiError;

/// Field values captured when the form is submitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginSubmission {
    pub username: String,
    pub password: String,
}

/// Login form with labeled username/password fields and a submit control.
///
/// `on_submit` receives the typed values each time submit is pressed.
pub struct LoginForm<F: FnMut(LoginSubmission)> {
    username: String,
    password: String,
    on_submit: F,
}

impl<F: FnMut(LoginSubmission)> LoginForm<F> {
    pub fn new(on_submit: F) -> Self {
        Self {
            username: String::new(),
            password: String::new(),
            on_submit,
        }
    }

    /// Appends `text` to the field with the given label, keystroke style.
    pub fn type_into(&mut self, field_label: &str, text: &str) -> Result<(), UiError> {
        let field = if field_label.eq_ignore_ascii_case("username") {
            &mut self.username
        } else if field_label.eq_ignore_ascii_case("password") {
            &mut self.password
        } else {
            return Err(UiError::UnknownField(field_label.to_string()));
        };
        field.push_str(text);
        debug!("Typed {} characters into {}", text.len(), field_label);
        Ok(())
    }

    /// Presses the control with the given label. Submit is the only control.
    pub fn press(&mut self, label: &str) -> Result<(), UiError> {
        if !label.eq_ignore_ascii_case("submit") {
            return Err(UiError::UnknownControl(label.to_string()));
        }
        self.submit();
        Ok(())
    }

    #[instrument(name = "submit_login", level = "debug", skip(self))]
    pub fn submit(&mut self) {
        info!("Submitting login form for user: {}", self.username);
        let submission = LoginSubmission {
            username: self.username.clone(),
            password: self.password.clone(),
        };
        (self.on_submit)(submission);
    }
}
