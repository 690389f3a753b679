use crate::board::{Board, Cell};

use rand::Rng;

/// Samples grid-aligned cells uniformly until one is not in `occupied`.
///
/// The board must keep at least one free cell: a fully covered board makes
/// this loop forever. Boards here are far larger than anything that can
/// occupy them.
pub fn random_free_cell<R: Rng + ?Sized>(board: &Board, occupied: &[Cell], rng: &mut R) -> Cell {
    loop {
        let cell = board.cell_at(rng.gen_range(0..board.columns()), rng.gen_range(0..board.rows()));
        if !occupied.contains(&cell) {
            return cell;
        }
    }
}
