use std::collections::VecDeque;

use crate::board::{Board, Cell, Direction::{*, self}};
use crate::entity::{Drawable, Rgb};
use crate::error::Result;
use crate::render::{draw_cell, erase_cell, Surface};
use MoveResult::*;

pub const SNAKE_COLOR: Rgb = Rgb(0, 255, 0);

/// Segments right behind the head that can never count as a self-bite.
pub const SELF_COLLISION_HEADROOM: usize = 4;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MoveResult {
    /// Same length as before: the tail cell was given up.
    Slid { new_head: Cell, old_tail: Cell },
    /// One segment longer, nothing vacated.
    Grew { new_head: Cell },
    /// One segment shorter: the two rearmost cells were given up, rearmost first.
    Shrank { new_head: Cell, old_tail: [Cell; 2] },
}

/// The player. `length` is the target size; `move_step` closes the gap to
/// the actual segment count by at most one segment per tick.
#[derive(Clone, Debug)]
pub struct Snake {
    body: VecDeque<Cell>,
    direction: Direction,
    next_direction: Option<Direction>,
    length: usize,
    vacated: Vec<Cell>,
}

impl Snake {
    pub fn new(board: &Board) -> Self {
        let mut body = VecDeque::new();
        body.push_back(board.center());
        Snake { body, direction: Right, next_direction: None, length: 1, vacated: vec![] }
    }

    /// Segments, head first.
    pub fn body(&self) -> &VecDeque<Cell> {
        &self.body
    }

    pub fn head(&self) -> Cell {
        // The body is never empty: new() and reset() seed it, and
        // move_step() pushes a head before popping anything.
        self.body[0]
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn get_direction(&self) -> Direction {
        self.direction
    }

    pub fn pending_direction(&self) -> Option<Direction> {
        self.next_direction
    }

    /// Cells given up by the last move, still to be painted over.
    pub fn vacated(&self) -> &[Cell] {
        &self.vacated
    }

    pub fn occupies(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }

    /// Buffers a turn unless it would send the snake straight back into its
    /// neck. Returns whether the turn was accepted.
    pub fn queue_direction(&mut self, new_direction: Direction) -> bool {
        if new_direction == self.direction.opposite() {
            return false;
        }

        self.next_direction = Some(new_direction);
        true
    }

    /// Commits the buffered turn, if any.
    pub fn update_direction(&mut self) {
        if let Some(dir) = self.next_direction.take() {
            self.direction = dir;
        }
    }

    pub fn grow(&mut self) {
        self.length += 1;
    }

    pub fn shrink(&mut self) {
        self.length = self.length.saturating_sub(1).max(1);
    }

    pub fn move_step(&mut self, board: &Board) -> MoveResult {
        let new_head = board.wrap_move(self.head(), self.direction);
        let prior_count = self.body.len();

        self.body.push_front(new_head);
        self.vacated.clear();

        if self.length > prior_count {
            return Grew { new_head };
        }

        let rearmost = self.pop_tail();
        if self.length == prior_count {
            return Slid { new_head, old_tail: rearmost };
        }

        let next = self.pop_tail();
        Shrank { new_head, old_tail: [rearmost, next] }
    }

    /// True when the head sits on a segment past the headroom.
    pub fn bit_itself(&self) -> bool {
        let head = self.head();
        self.body.iter().skip(SELF_COLLISION_HEADROOM).any(|pos| *pos == head)
    }

    pub fn reset(&mut self, board: &Board) {
        self.body.clear();
        self.body.push_back(board.center());
        self.length = 1;
        self.direction = Right;
        self.next_direction = None;
        self.vacated.clear();
    }

    ///////////////////////////////////////////////////////////////////////////

    fn pop_tail(&mut self) -> Cell {
        let tail = self.body.pop_back().unwrap_or_else(|| self.head());
        self.vacated.push(tail);
        tail
    }

    #[cfg(test)]
    pub(crate) fn from_body(body: Vec<Cell>, direction: Direction) -> Self {
        let length = body.len();
        Snake { body: body.into(), direction, next_direction: None, length, vacated: vec![] }
    }
}

impl Drawable for Snake {
    fn position(&self) -> Cell {
        self.head()
    }

    fn color(&self) -> Rgb {
        SNAKE_COLOR
    }

    fn draw(&self, surface: &mut dyn Surface, board: &Board) -> Result<()> {
        let size = board.cell_size();

        for pos in self.body.iter().skip(1) {
            draw_cell(surface, *pos, size, SNAKE_COLOR)?;
        }
        draw_cell(surface, self.head(), size, SNAKE_COLOR)?;

        for pos in &self.vacated {
            erase_cell(surface, *pos, size)?;
        }

        Ok(())
    }
}
