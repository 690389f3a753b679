use crate::error::{Error, Result};
use Direction::*;

/// Top-left pixel of a grid cell. Always a multiple of the board's cell size.
pub type Cell = (i32, i32);

pub const SCREEN_WIDTH: i32 = 640;
pub const SCREEN_HEIGHT: i32 = 480;
pub const GRID_SIZE: i32 = 20;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right
}

impl Direction {
    pub const ALL: [Direction; 4] = [Up, Down, Left, Right];

    /// Unit step in screen space, y growing downwards.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Up => (0, -1),
            Down => (0, 1),
            Left => (-1, 0),
            Right => (1, 0),
        }
    }

    pub fn opposite(self) -> Direction {
        match self {
            Up => Down,
            Down => Up,
            Left => Right,
            Right => Left,
        }
    }
}

/// Moves `pos` one cell along `dir`, re-entering from the opposite edge
/// when it leaves the `width` x `height` area.
pub fn wrap_move(pos: Cell, dir: Direction, cell_size: i32, width: i32, height: i32) -> Cell {
    let (dx, dy) = dir.delta();
    (
        (pos.0 + dx * cell_size).rem_euclid(width),
        (pos.1 + dy * cell_size).rem_euclid(height),
    )
}

/// Fixed-size toroidal playing field measured in pixels.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Board {
    width: i32,
    height: i32,
    cell_size: i32,
}

impl Board {
    pub fn new(width: i32, height: i32, cell_size: i32) -> Result<Self> {
        let aligned = cell_size > 0 && width > 0 && height > 0
            && width % cell_size == 0 && height % cell_size == 0;

        if !aligned {
            return Err(Error::MisalignedBoard { width, height, cell_size });
        }

        Ok(Board { width, height, cell_size })
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn cell_size(&self) -> i32 {
        self.cell_size
    }

    pub fn columns(&self) -> i32 {
        self.width / self.cell_size
    }

    pub fn rows(&self) -> i32 {
        self.height / self.cell_size
    }

    /// Where the snake starts and respawns, snapped to the lattice.
    pub fn center(&self) -> Cell {
        self.cell_at(self.columns() / 2, self.rows() / 2)
    }

    pub fn wrap_move(&self, pos: Cell, dir: Direction) -> Cell {
        wrap_move(pos, dir, self.cell_size, self.width, self.height)
    }

    /// Pixel origin of the cell at grid `column`, `row`.
    pub fn cell_at(&self, column: i32, row: i32) -> Cell {
        (column * self.cell_size, row * self.cell_size)
    }

    /// Grid column and row of a pixel cell.
    pub fn grid_coords(&self, cell: Cell) -> (i32, i32) {
        (cell.0 / self.cell_size, cell.1 / self.cell_size)
    }

    pub fn contains(&self, cell: Cell) -> bool {
        (0..self.width).contains(&cell.0) && (0..self.height).contains(&cell.1)
            && cell.0 % self.cell_size == 0 && cell.1 % self.cell_size == 0
    }

    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.rows()).flat_map(move |row| (0..self.columns()).map(move |col| self.cell_at(col, row)))
    }
}

impl Default for Board {
    fn default() -> Self {
        Board { width: SCREEN_WIDTH, height: SCREEN_HEIGHT, cell_size: GRID_SIZE }
    }
}
