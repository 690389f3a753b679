#![allow(dead_code)]

use std::{collections::VecDeque, time::Duration};

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use snake::board::{Board, Cell};
use snake::clock::Clock;
use snake::entity::{ItemKind, Rgb};
use snake::game::SnakeGame;
use snake::input::{InputEvent, InputSource};
use snake::render::Surface;

#[derive(Clone, Debug, PartialEq)]
pub enum Call {
    FillRect { origin: Cell, fill: Option<Rgb>, border: Option<Rgb> },
    Clear(Rgb),
    Caption(String),
    Present,
    Tick(u32),
}

/// Records every call the game makes and replays scripted input, one batch
/// per poll.
#[derive(Default)]
pub struct Recorder {
    pub calls: Vec<Call>,
    pub script: VecDeque<Vec<InputEvent>>,
}

impl Recorder {
    pub fn with_script(batches: Vec<Vec<InputEvent>>) -> Self {
        Recorder { calls: vec![], script: batches.into() }
    }

    pub fn filled_cells(&self) -> Vec<Cell> {
        self.calls.iter().filter_map(|call| match call {
            Call::FillRect { origin, .. } => Some(*origin),
            _ => None,
        }).collect()
    }

    pub fn last_caption(&self) -> Option<&str> {
        self.calls.iter().rev().find_map(|call| match call {
            Call::Caption(text) => Some(text.as_str()),
            _ => None,
        })
    }
}

impl Surface for Recorder {
    fn fill_rect(&mut self, origin: Cell, _size: i32, fill: Option<Rgb>, border: Option<Rgb>) -> snake::Result<()> {
        self.calls.push(Call::FillRect { origin, fill, border });
        Ok(())
    }

    fn clear(&mut self, color: Rgb) -> snake::Result<()> {
        self.calls.push(Call::Clear(color));
        Ok(())
    }

    fn set_caption(&mut self, text: &str) -> snake::Result<()> {
        self.calls.push(Call::Caption(text.to_string()));
        Ok(())
    }

    fn present(&mut self) -> snake::Result<()> {
        self.calls.push(Call::Present);
        Ok(())
    }
}

impl InputSource for Recorder {
    fn poll_events(&mut self) -> snake::Result<Vec<InputEvent>> {
        Ok(self.script.pop_front().unwrap_or_default())
    }
}

impl Clock for Recorder {
    fn tick(&mut self, fps: u32) -> Duration {
        self.calls.push(Call::Tick(fps));
        Duration::from_millis(0)
    }
}

pub const FAR_CORNERS: [Cell; 3] = [(0, 0), (620, 0), (0, 460)];

/// A seeded game with every item parked in a corner, away from the
/// snake's starting row.
pub fn quiet_game(seed: u64) -> SnakeGame<ChaCha8Rng> {
    let mut game = SnakeGame::new(Board::default(), ChaCha8Rng::seed_from_u64(seed));
    for (kind, cell) in [ItemKind::Apple, ItemKind::Poison, ItemKind::Rock].iter().zip(FAR_CORNERS.iter()) {
        game.item_mut(*kind).set_position(*cell);
    }
    game
}
