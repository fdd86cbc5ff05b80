use tracing::{debug, instrument};

use crate::core::{Command, CounterControls};
use crate::ui::error::UiError;

struct Control {
    label: &'static str,
    command: Command,
}

/// Text rendition of the counter: a readout plus two labeled controls.
///
/// Generic over [`CounterControls`] so any counter implementation can sit
/// behind the same surface.
pub struct CounterScreen<C: CounterControls> {
    counter: C,
    controls: Vec<Control>,
}

impl<C: CounterControls> CounterScreen<C> {
    pub fn new(counter: C) -> Self {
        let controls = vec![
            Control { label: "Increment", command: Command::Increment },
            Control { label: "Decrement", command: Command::Decrement },
        ];
        Self { counter, controls }
    }

    /// Readout text shown to the user.
    pub fn readout(&self) -> String {
        format!("Current count: {}", self.counter.count())
    }

    /// Presses the control with the given label (case-insensitive).
    ///
    /// The command is applied before this returns, so the updated count is
    /// observable by the time the next press is dispatched.
    #[instrument(name = "press_control", level = "debug", skip(self))]
    pub fn press(&mut self, label: &str) -> Result<(), UiError> {
        let command = self.control(label)?;
        self.apply(command);
        Ok(())
    }

    fn control(&self, label: &str) -> Result<Command, UiError> {
        self.controls
            .iter()
            .find(|control| control.label.eq_ignore_ascii_case(label))
            .map(|control| control.command)
            .ok_or_else(|| UiError::UnknownControl(label.to_string()))
    }

    fn apply(&mut self, command: Command) {
        match command {
            Command::Increment => self.counter.increment(),
            Command::Decrement => self.counter.decrement(),
        }
        debug!("Applied {:?}, count is now {}", command, self.counter.count());
    }
}
