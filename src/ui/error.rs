use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum UiError {
    #[error("no control labeled `{0}`")]
    UnknownControl(String),
    #[error("no input field labeled `{0}`")]
    UnknownField(String),
}
