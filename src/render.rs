//! Drawing contract between the game and whatever presents it.

use crate::board::Cell;
use crate::entity::Rgb;
use crate::error::Result;

/// A pixel surface the game paints on, one grid cell at a time.
pub trait Surface {
    /// Fills the `size` x `size` square at `origin`. With `fill` set to
    /// `None` only the border is drawn; with `border` set to `None` the
    /// square is filled edge to edge.
    fn fill_rect(&mut self, origin: Cell, size: i32, fill: Option<Rgb>, border: Option<Rgb>) -> Result<()>;

    /// Paints the whole surface with `color`.
    fn clear(&mut self, color: Rgb) -> Result<()>;

    fn set_caption(&mut self, text: &str) -> Result<()>;

    /// Makes everything drawn since the last call visible.
    fn present(&mut self) -> Result<()>;
}

/// Draws one occupied cell the way every entity on the board looks.
pub fn draw_cell(surface: &mut dyn Surface, origin: Cell, size: i32, color: Rgb) -> Result<()> {
    surface.fill_rect(origin, size, Some(color), Some(BORDER_COLOR))
}

/// Paints a cell back to the background.
pub fn erase_cell(surface: &mut dyn Surface, origin: Cell, size: i32) -> Result<()> {
    surface.fill_rect(origin, size, Some(BACKGROUND_COLOR), None)
}

pub const BACKGROUND_COLOR: Rgb = Rgb(0, 0, 0);
pub const BORDER_COLOR: Rgb = Rgb(93, 216, 228);
