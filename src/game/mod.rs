mod direction;
mod grid;
mod placer;
mod snake;
pub(crate) use self::direction::Direction;
pub(crate) use self::grid::{Grid, Position};
pub(crate) use self::placer::GridFull;
use self::placer::RandomPlacer;
use self::snake::Snake;
use crate::consts;
use rand::Rng;
use std::collections::HashSet;
use std::fmt;

/// The snake simulation: snake, food, and run state on a fixed grid.
///
/// Nothing happens on its own; the owner calls [`Simulation::tick()`] at a
/// fixed cadence and feeds in commands between ticks.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Simulation<R = rand::rngs::StdRng> {
    grid: Grid,
    placer: RandomPlacer<R>,
    snake: Snake,
    /// Turn requested since the last tick
    turn: Option<Direction>,
    food: Position,
    score: u32,
    state: GameState,
    active: bool,
}

impl<R: Rng> Simulation<R> {
    /// Create a simulation on `grid` and start the first game
    ///
    /// # Errors
    ///
    /// Returns `Err` if there is nowhere to place the first food.
    pub(crate) fn new(grid: Grid, rng: R) -> Result<Simulation<R>, GridFull> {
        let mut sim = Simulation {
            grid,
            placer: RandomPlacer::new(grid, rng),
            snake: Snake::new(consts::INITIAL_SNAKE, consts::INITIAL_HEADING),
            turn: None,
            food: Position::default(),
            score: 0,
            state: GameState::Running,
            active: true,
        };
        sim.reset()?;
        log::info!("Game started on a {}x{} grid", grid.width, grid.height);
        Ok(sim)
    }

    /// Put the snake back at its starting cells, place new food, and resume
    /// running.
    ///
    /// # Errors
    ///
    /// Returns `Err` if there is nowhere to place the food.
    pub(crate) fn reset(&mut self) -> Result<(), GridFull> {
        self.snake = Snake::new(consts::INITIAL_SNAKE, consts::INITIAL_HEADING);
        self.turn = None;
        self.score = 0;
        self.place_food()?;
        self.state = GameState::Running;
        Ok(())
    }

    /// Start a new game after the last one ended.  Does nothing while a game
    /// is still running or after quitting.
    ///
    /// # Errors
    ///
    /// Returns `Err` if there is nowhere to place the food.
    pub(crate) fn restart(&mut self) -> Result<(), GridFull> {
        if self.active && self.state == GameState::GameOver {
            self.reset()?;
            log::info!("Game restarted");
        }
        Ok(())
    }

    /// Advance the snake by one cell
    pub(crate) fn tick(&mut self) -> Tick {
        if !self.running() {
            return Tick::Idle;
        }
        if let Some(d) = self.turn.take() {
            self.snake.heading = d;
        }
        let head = self.snake.extend();
        let mut outcome = Tick::Moved;
        if head == self.food {
            self.score += 1;
            outcome = Tick::Ate;
            if self.place_food().is_err() {
                // Food stays where it was eaten; there is no cell left for it.
                outcome = Tick::Filled;
            }
        } else {
            self.snake.retract();
        }
        let collision = if !self.grid.contains(head) {
            Some(Collision::Wall)
        } else if self.snake.bites_itself() {
            Some(Collision::Body)
        } else {
            None
        };
        if let Some(c) = collision {
            log::info!("Game over: snake hit {c} at {head}; score {}", self.score);
            self.state = GameState::GameOver;
            Tick::Collided(c)
        } else if outcome == Tick::Filled {
            log::info!("Game over: snake filled the grid; score {}", self.score);
            self.state = GameState::GameOver;
            outcome
        } else {
            outcome
        }
    }

    fn place_food(&mut self) -> Result<(), GridFull> {
        let occupied = HashSet::from_iter(self.snake.segments());
        self.food = self.placer.place(&occupied)?;
        log::info!("Food spawned at {}", self.food);
        Ok(())
    }
}

impl<R> Simulation<R> {
    /// Request that the snake turn to `direction` on the next tick.
    ///
    /// Requests along the axis the snake is already moving on are ignored, as
    /// are all requests while the game is not running.  A later request
    /// before the next tick replaces an earlier one.
    pub(crate) fn set_direction(&mut self, direction: Direction) {
        if !self.running() {
            return;
        }
        let heading = self.snake.heading;
        if direction.axis() == heading.axis() {
            if direction == heading.reverse() {
                log::debug!("Ignoring reversal from {heading:?} to {direction:?}");
            }
            return;
        }
        self.turn = Some(direction);
    }

    /// End the session.  Every later tick and command is a no-op.
    pub(crate) fn quit(&mut self) {
        if self.active {
            log::info!("Session ended; final score {}", self.score);
        }
        self.active = false;
    }

    pub(crate) fn snapshot(&self) -> Snapshot {
        Snapshot {
            segments: self.snake.segments().collect(),
            food: self.food,
            state: self.state,
            score: self.score,
        }
    }

    pub(crate) fn state(&self) -> GameState {
        self.state
    }

    pub(crate) fn is_active(&self) -> bool {
        self.active
    }

    pub(crate) fn grid(&self) -> Grid {
        self.grid
    }

    fn running(&self) -> bool {
        self.active && self.state == GameState::Running
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum GameState {
    Running,
    GameOver,
}

/// What happened during a call to [`Simulation::tick()`]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Tick {
    /// The game was not running, so nothing moved
    Idle,

    /// The snake moved one cell
    Moved,

    /// The snake moved onto the food and grew by one cell
    Ate,

    /// The snake ate the last food it could fit; the game is over.
    Filled,

    /// The snake ran into something; the game is over.
    Collided(Collision),
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Collision {
    Wall,
    Body,
}

impl fmt::Display for Collision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Collision::Wall => write!(f, "the wall"),
            Collision::Body => write!(f, "itself"),
        }
    }
}

/// A read-only copy of the simulation state for drawing
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Snapshot {
    /// The snake's cells, head first
    pub(crate) segments: Vec<Position>,
    pub(crate) food: Position,
    pub(crate) state: GameState,
    pub(crate) score: u32,
}

impl Snapshot {
    pub(crate) fn head(&self) -> Option<Position> {
        self.segments.first().copied()
    }
}
