pub mod error;
pub mod login;
pub mod screen;

pub use error::UiError;
pub use login::{LoginForm, LoginSubmission};
pub use screen::CounterScreen;
