use std::io;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("terminal I/O failed: {0}")]
    Terminal(#[from] io::Error),

    #[error("terminal is {actual:?} (columns, rows), the board needs at least {needed:?}")]
    TerminalTooSmall { needed: (u16, u16), actual: (u16, u16) },

    #[error("board {width}x{height} is not a positive multiple of cell size {cell_size}")]
    MisalignedBoard { width: i32, height: i32, cell_size: i32 },
}
