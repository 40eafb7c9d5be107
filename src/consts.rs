//! Assorted constants & hard-coded configuration
use crate::game::{Direction, Position};
use ratatui::style::{Color, Modifier, Style};
use std::time::Duration;

/// Default time between movements of the snake
pub(crate) const TICK_PERIOD: Duration = Duration::from_millis(100);

/// The cells occupied by the snake at the start of a game, head first
pub(crate) const INITIAL_SNAKE: [Position; 3] = [
    Position::new(5, 5),
    Position::new(4, 5),
    Position::new(3, 5),
];

/// The direction in which the snake moves at the start of a game
pub(crate) const INITIAL_HEADING: Direction = Direction::Right;

/// Smallest grid width & height that can hold [`INITIAL_SNAKE`]
pub(crate) const MIN_GRID_SIDE: u16 = 6;

/// Terminal character cells are about twice as tall as they are wide, so a
/// grid cell `cell_size` columns wide is drawn `cell_size / CELL_ASPECT` rows
/// tall.
pub(crate) const CELL_ASPECT: u16 = 2;

/// Glyph for the snake's head and body
pub(crate) const SNAKE_SYMBOL: char = '█';

/// Glyph for the food
pub(crate) const FOOD_SYMBOL: char = '█';

/// Glyph for the snake's head when it's collided with a wall or itself
pub(crate) const COLLISION_SYMBOL: char = '×';

/// Style for the snake's head and body
pub(crate) const SNAKE_STYLE: Style = Style::new().fg(Color::Green);

/// Style for the food
pub(crate) const FOOD_STYLE: Style = Style::new().fg(Color::Red);

/// Style for [`COLLISION_SYMBOL`]
pub(crate) const COLLISION_STYLE: Style = Style::new()
    .fg(Color::LightRed)
    .add_modifier(Modifier::REVERSED);

/// Style for key codes shown in the interface
pub(crate) const KEY_STYLE: Style = Style::new().fg(Color::Yellow);

/// Style for the score bar at the top of the game screen
pub(crate) const SCORE_BAR_STYLE: Style = Style::new().add_modifier(Modifier::REVERSED);
