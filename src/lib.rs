//! Single-player snake on a wrapping pixel grid. The snake grows on apples,
//! shrinks on poison and starts over when it bites itself or hits a rock.

pub mod board;
pub mod clock;
pub mod config;
pub mod entity;
pub mod error;
pub mod game;
pub mod input;
pub mod render;
pub mod snake;
pub mod spawner;
pub mod term;

pub use error::{Error, Result};
