use crate::board::{Board, Cell, Direction::*};
use crate::clock::{Clock, FrameClock};
use crate::entity::Rgb;
use crate::error::{Error, Result};
use crate::input::{InputEvent, InputSource};
use crate::render::{Surface, BACKGROUND_COLOR};

use std::{io::{Stdout, Write, stdout}, time::Duration};

use crossterm::{cursor, execute, queue, style, terminal};
use crossterm::style::{Color, SetBackgroundColor, SetForegroundColor, ResetColor};
use crossterm::terminal::{ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, read, poll};

/// Terminal columns used to show one grid cell, so cells look square.
const COLUMNS_PER_CELL: u16 = 2;

/// Presents a pixel board on a terminal. Each grid cell becomes two
/// character columns on one row, inside a drawn frame, with a status line
/// underneath.
pub struct TermManager {
    board: Board,
    stdout: Stdout,
    top_left: (u16, u16),
    clock: FrameClock,
}

impl TermManager {
    pub fn new(board: Board) -> Result<Self> {
        let needed = Self::needed_size(&board);
        let actual = terminal::size()?;

        if actual.0 < needed.0 || actual.1 < needed.1 {
            return Err(Error::TerminalTooSmall { needed, actual });
        }

        let top_left = ((actual.0 - needed.0) / 2, (actual.1 - needed.1) / 2);
        Ok(TermManager { board, stdout: stdout(), top_left, clock: FrameClock::new() })
    }

    /// Frame, board and status line.
    pub fn needed_size(board: &Board) -> (u16, u16) {
        let width = board.columns() as u16 * COLUMNS_PER_CELL + 2;
        let height = board.rows() as u16 + 3;
        (width, height)
    }

    pub fn setup(&mut self) -> Result<()> {
        execute!(self.stdout, EnterAlternateScreen)?;
        terminal::enable_raw_mode()?;
        execute!(self.stdout, cursor::Hide, cursor::DisableBlinking, terminal::Clear(ClearType::All))?;

        self.draw_borders()?;
        self.clear(BACKGROUND_COLOR)?;
        self.present()
    }

    pub fn restore(&mut self) -> Result<()> {
        terminal::disable_raw_mode()?;
        execute!(self.stdout, ResetColor, cursor::Show, cursor::EnableBlinking, LeaveAlternateScreen)?;
        Ok(())
    }

    /// Terminal position of the character pair showing `cell`.
    pub fn cell_to_term(&self, cell: Cell) -> (u16, u16) {
        let (col, row) = self.board.grid_coords(cell);
        (
            self.top_left.0 + 1 + col as u16 * COLUMNS_PER_CELL,
            self.top_left.1 + 1 + row as u16,
        )
    }

    ///////////////////////////////////////////////////////////////////////////

    fn draw_borders(&mut self) -> Result<()> {
        let (width, height) = Self::needed_size(&self.board);
        let (left, top) = self.top_left;
        let (right, bottom) = (left + width - 1, top + height - 2);

        for x in left..=right {
            let ch = if x == left || x == right {'+'} else {'-'};
            self.print_at((x, top), ch)?;
            self.print_at((x, bottom), ch)?;
        }

        for y in top + 1..bottom {
            self.print_at((left, y), '|')?;
            self.print_at((right, y), '|')?;
        }

        Ok(())
    }

    fn print_at(&mut self, pos: (u16, u16), ch: char) -> Result<()> {
        queue!(self.stdout, cursor::MoveTo(pos.0, pos.1), style::Print(ch))?;
        Ok(())
    }

    fn paint_cell(&mut self, cell: Cell, fill: Rgb, border: Option<Rgb>) -> Result<()> {
        let (x, y) = self.cell_to_term(cell);

        let glyphs = if border.is_some() {"[]"} else {"  "};
        let fg = to_color(border.unwrap_or(fill));

        queue!(
            self.stdout,
            cursor::MoveTo(x, y),
            SetBackgroundColor(to_color(fill)),
            SetForegroundColor(fg),
            style::Print(glyphs),
            ResetColor
        )?;
        Ok(())
    }
}

impl Surface for TermManager {
    fn fill_rect(&mut self, origin: Cell, size: i32, fill: Option<Rgb>, border: Option<Rgb>) -> Result<()> {
        let step = self.board.cell_size();
        let fill = fill.unwrap_or(BACKGROUND_COLOR);

        for y in (origin.1..origin.1 + size.max(step)).step_by(step as usize) {
            for x in (origin.0..origin.0 + size.max(step)).step_by(step as usize) {
                if self.board.contains((x, y)) {
                    self.paint_cell((x, y), fill, border)?;
                }
            }
        }

        Ok(())
    }

    fn clear(&mut self, color: Rgb) -> Result<()> {
        let blank = " ".repeat(self.board.columns() as usize * COLUMNS_PER_CELL as usize);

        for row in 0..self.board.rows() {
            let (x, y) = self.cell_to_term(self.board.cell_at(0, row));
            queue!(
                self.stdout,
                cursor::MoveTo(x, y),
                SetBackgroundColor(to_color(color)),
                style::Print(&blank),
                ResetColor
            )?;
        }

        Ok(())
    }

    fn set_caption(&mut self, text: &str) -> Result<()> {
        let (_, height) = Self::needed_size(&self.board);
        let status_row = self.top_left.1 + height - 1;

        queue!(
            self.stdout,
            terminal::SetTitle(text),
            cursor::MoveTo(self.top_left.0, status_row),
            terminal::Clear(ClearType::UntilNewLine),
            style::Print(text)
        )?;
        Ok(())
    }

    fn present(&mut self) -> Result<()> {
        self.stdout.flush()?;
        Ok(())
    }
}

impl InputSource for TermManager {
    fn poll_events(&mut self) -> Result<Vec<InputEvent>> {
        let mut events = vec![];

        while poll(Duration::from_millis(0))? {
            if let Event::Key(ev) = read()? {
                if let Some(input) = map_key(&ev) {
                    events.push(input);
                }
            }
        }

        Ok(events)
    }
}

impl Clock for TermManager {
    fn tick(&mut self, fps: u32) -> Duration {
        self.clock.tick(fps)
    }
}

/// Arrow keys or WASD turn; Esc, q or Ctrl+C quit.
pub fn map_key(ev: &KeyEvent) -> Option<InputEvent> {
    if ev.kind != KeyEventKind::Press {
        return None;
    }

    if is_ctrl_c(ev) {
        return Some(InputEvent::Quit);
    }

    match ev.code {
        KeyCode::Char('w') | KeyCode::Up => Some(InputEvent::Turn(Up)),
        KeyCode::Char('a') | KeyCode::Left => Some(InputEvent::Turn(Left)),
        KeyCode::Char('s') | KeyCode::Down => Some(InputEvent::Turn(Down)),
        KeyCode::Char('d') | KeyCode::Right => Some(InputEvent::Turn(Right)),
        KeyCode::Esc | KeyCode::Char('q') => Some(InputEvent::Quit),
        _ => None,
    }
}

fn is_ctrl_c(ev: &KeyEvent) -> bool {
    ev.code == KeyCode::Char('c') && ev.modifiers.contains(KeyModifiers::CONTROL)
}

fn to_color(rgb: Rgb) -> Color {
    Color::Rgb { r: rgb.0, g: rgb.1, b: rgb.2 }
}
