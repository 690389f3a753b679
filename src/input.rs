use crate::board::Direction;
use crate::error::Result;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum InputEvent {
    Quit,
    Turn(Direction),
}

pub trait InputSource {
    /// Drains every event queued since the last call without blocking.
    fn poll_events(&mut self) -> Result<Vec<InputEvent>>;
}
