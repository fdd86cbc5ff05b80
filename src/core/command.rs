use serde::{Deserialize, Serialize};
use tracing::debug;

/// Action a control surface requests of the counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    Increment,
    Decrement,
}

impl Command {
    pub fn to_bytes(&self) -> Vec<u8> {
        let bytes = serde_json::to_vec(self).unwrap();
        debug!("Serialized command: {:?}", self);
        bytes
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        let command = serde_json::from_slice(bytes)?;
        debug!("Deserialized command: {:?}", command);
        Ok(command)
    }
}
