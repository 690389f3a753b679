use crate::board::{Board, Cell};
use crate::error::Result;
use crate::render::{draw_cell, Surface};
use crate::spawner::random_free_cell;

use rand::Rng;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// Anything that sits on the board and knows how to paint itself.
pub trait Drawable {
    /// The cell the object is anchored at. For the snake this is the head.
    fn position(&self) -> Cell;

    fn color(&self) -> Rgb;

    fn draw(&self, surface: &mut dyn Surface, board: &Board) -> Result<()>;
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ItemKind {
    Apple,
    Poison,
    Rock,
}

impl ItemKind {
    pub fn color(self) -> Rgb {
        match self {
            ItemKind::Apple => Rgb(255, 0, 0),
            ItemKind::Poison => Rgb(0, 0, 255),
            ItemKind::Rock => Rgb(125, 125, 125),
        }
    }
}

/// A single-cell object the snake can run into.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Item {
    kind: ItemKind,
    position: Cell,
}

impl Item {
    /// Places a new item on a random cell outside `occupied`.
    pub fn spawn<R: Rng + ?Sized>(kind: ItemKind, board: &Board, occupied: &[Cell], rng: &mut R) -> Self {
        Item { kind, position: random_free_cell(board, occupied, rng) }
    }

    pub fn kind(&self) -> ItemKind {
        self.kind
    }

    pub fn respawn<R: Rng + ?Sized>(&mut self, board: &Board, occupied: &[Cell], rng: &mut R) {
        self.position = random_free_cell(board, occupied, rng);
    }

    pub fn set_position(&mut self, position: Cell) {
        self.position = position;
    }
}

impl Drawable for Item {
    fn position(&self) -> Cell {
        self.position
    }

    fn color(&self) -> Rgb {
        self.kind.color()
    }

    fn draw(&self, surface: &mut dyn Surface, board: &Board) -> Result<()> {
        draw_cell(surface, self.position, board.cell_size(), self.color())
    }
}
