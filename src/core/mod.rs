pub mod command;
pub mod counter;

pub use command::Command;
pub use counter::{Counter, CounterControls};
