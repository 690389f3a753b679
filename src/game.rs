use crate::board::{Board, Cell};
use crate::clock::Clock;
use crate::entity::{Drawable, Item, ItemKind::{*, self}};
use crate::error::Result;
use crate::input::{InputEvent, InputSource};
use crate::render::{Surface, BACKGROUND_COLOR};
use crate::snake::Snake;

use log::{debug, info, trace};
use rand::Rng;

/// Ticks per second.
pub const SPEED: u32 = 20;

/// Which rules fired during one tick.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct TickReport {
    pub ate_apple: bool,
    pub bit_itself: bool,
    pub ate_poison: bool,
    pub hit_rock: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue(TickReport),
    Quit,
}

/// Rule engine: owns the snake and the three items and advances them one
/// tick at a time.
pub struct SnakeGame<R> {
    board: Board,
    snake: Snake,
    apple: Item,
    poison: Item,
    rock: Item,
    rng: R,
}

impl<R: Rng> SnakeGame<R> {
    pub fn new(board: Board, mut rng: R) -> Self {
        let snake = Snake::new(&board);
        let mut occupied: Vec<Cell> = snake.body().iter().copied().collect();

        let apple = Item::spawn(Apple, &board, &occupied, &mut rng);
        occupied.push(apple.position());
        let poison = Item::spawn(Poison, &board, &occupied, &mut rng);
        occupied.push(poison.position());
        let rock = Item::spawn(Rock, &board, &occupied, &mut rng);

        debug!("apple at {:?}, poison at {:?}, rock at {:?}", apple.position(), poison.position(), rock.position());

        SnakeGame { board, snake, apple, poison, rock, rng }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn snake_mut(&mut self) -> &mut Snake {
        &mut self.snake
    }

    pub fn item(&self, kind: ItemKind) -> &Item {
        match kind {
            Apple => &self.apple,
            Poison => &self.poison,
            Rock => &self.rock,
        }
    }

    pub fn item_mut(&mut self, kind: ItemKind) -> &mut Item {
        match kind {
            Apple => &mut self.apple,
            Poison => &mut self.poison,
            Rock => &mut self.rock,
        }
    }

    /// The starting segment is worth nothing.
    pub fn score(&self) -> usize {
        self.snake.length() - 1
    }

    pub fn caption(&self) -> String {
        format!("Snake | Score: {}", self.score())
    }

    /// Buffers every turn in `events`, then commits the last accepted one.
    pub fn handle_events(&mut self, events: &[InputEvent]) -> Flow {
        for ev in events {
            match ev {
                InputEvent::Quit => {
                    info!("Quit requested with score {}", self.score());
                    return Flow::Quit;
                },
                InputEvent::Turn(dir) => {
                    if !self.snake.queue_direction(*dir) {
                        trace!("Ignored reversal to {:?}", dir);
                    }
                },
            }
        }

        self.snake.update_direction();
        Flow::Continue(TickReport::default())
    }

    /// Paints apple, snake, rock and poison, in that order.
    pub fn draw(&self, surface: &mut dyn Surface) -> Result<()> {
        let objects: [&dyn Drawable; 4] = [&self.apple, &self.snake, &self.rock, &self.poison];

        for obj in objects.iter() {
            obj.draw(surface, &self.board)?;
        }

        Ok(())
    }

    /// Moves the snake and applies the collision rules.
    pub fn update(&mut self, surface: &mut dyn Surface) -> Result<TickReport> {
        let mut report = TickReport::default();

        let move_res = self.snake.move_step(&self.board);
        trace!("{:?}", move_res);

        if self.apple.position() == self.snake.head() {
            self.snake.grow();
            self.respawn(Apple);
            report.ate_apple = true;
            debug!("Apple eaten, length now {}", self.snake.length());
        }

        if self.snake.bit_itself() {
            info!("Snake bit itself at {:?}, score was {}", self.snake.head(), self.score());
            self.snake.reset(&self.board);
            surface.clear(BACKGROUND_COLOR)?;
            report.bit_itself = true;
        }

        if self.poison.position() == self.snake.head() {
            self.snake.shrink();
            self.respawn(Poison);
            report.ate_poison = true;
            debug!("Poison eaten, length now {}", self.snake.length());
        }

        if self.rock.position() == self.snake.head() {
            info!("Snake hit a rock at {:?}, score was {}", self.snake.head(), self.score());
            self.snake.reset(&self.board);
            self.respawn(Rock);
            surface.clear(BACKGROUND_COLOR)?;
            report.hit_rock = true;
        }

        surface.set_caption(&self.caption())?;
        Ok(report)
    }

    /// One full frame: input, pacing, drawing, simulation.
    pub fn run_frame<F>(&mut self, frontend: &mut F, fps: u32) -> Result<Flow>
        where F: Surface + InputSource + Clock
    {
        let events = frontend.poll_events()?;
        if let Flow::Quit = self.handle_events(&events) {
            return Ok(Flow::Quit);
        }

        frontend.tick(fps);
        self.draw(frontend)?;
        let report = self.update(frontend)?;
        frontend.present()?;

        Ok(Flow::Continue(report))
    }

    ///////////////////////////////////////////////////////////////////////////

    /// Moves `kind` to a random cell clear of the snake and the other items.
    fn respawn(&mut self, kind: ItemKind) {
        let mut occupied: Vec<Cell> = self.snake.body().iter().copied().collect();
        occupied.extend([Apple, Poison, Rock].iter()
            .filter(|other| **other != kind)
            .map(|other| self.item(*other).position()));

        let board = self.board;
        let item = match kind {
            Apple => &mut self.apple,
            Poison => &mut self.poison,
            Rock => &mut self.rock,
        };
        item.respawn(&board, &occupied, &mut self.rng);
    }
}
