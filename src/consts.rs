//! Assorted constants & hard-coded configuration
use ratatui::{
    layout::{Position, Size},
    style::{Color, Modifier, Style},
};
use std::time::Duration;

/// Draw everything inside a rectangle of this size in the center of the
/// terminal window.
///
/// Cf. [`crate::util::get_display_area()`]
pub(crate) const DISPLAY_SIZE: Size = Size {
    width: 80,
    height: 31,
};

/// Size of the playing field in cells
pub(crate) const BOARD_SIZE: Size = Size {
    width: 24,
    height: 24,
};

/// The cell the snake's head starts each game on
pub(crate) const START_CELL: Position = Position { x: 5, y: 5 };

/// Number of obstacle cells scattered on the board when obstacles are enabled
pub(crate) const OBSTACLE_COUNT: usize = 5;

/// Number of food items to collect to win a limited-time game
pub(crate) const FOOD_TARGET: u32 = 4;

/// Length of the countdown in a limited-time game
pub(crate) const TIME_LIMIT_SECONDS: u32 = 30;

/// Under Professional difficulty, shorten the tick period after every this
/// many food items eaten.
pub(crate) const SPEEDUP_EVERY: u32 = 2;

/// Under Professional difficulty, how much to shorten the tick period by at a
/// time
pub(crate) const SPEEDUP_STEP: Duration = Duration::from_millis(50);

/// The tick period is never shortened below this.
pub(crate) const MIN_TICK_PERIOD: Duration = Duration::from_millis(50);

/// Glyph for the snake's head before the first move of a game
pub(crate) const SNAKE_HEAD_IDLE_SYMBOL: char = '■';

/// Glyph for the snake's head when it is moving north/up
pub(crate) const SNAKE_HEAD_NORTH_SYMBOL: char = 'v';

/// Glyph for the snake's head when it is moving south/down
pub(crate) const SNAKE_HEAD_SOUTH_SYMBOL: char = '^';

/// Glyph for the snake's head when it is moving east/right
pub(crate) const SNAKE_HEAD_EAST_SYMBOL: char = '<';

/// Glyph for the snake's head when it is moving west/left
pub(crate) const SNAKE_HEAD_WEST_SYMBOL: char = '>';

/// Glyph for the parts of the snake's body
pub(crate) const SNAKE_BODY_SYMBOL: char = '⚬';

/// Glyph for the food
pub(crate) const FOOD_SYMBOL: char = '●';

/// Glyph for obstacles
pub(crate) const OBSTACLE_SYMBOL: char = '█';

/// Glyph for the snake's head when it's collided with an obstacle or itself
pub(crate) const COLLISION_SYMBOL: char = '×';

/// Style for the snake's head and body
pub(crate) const SNAKE_STYLE: Style = Style::new().fg(Color::Yellow).add_modifier(Modifier::BOLD);

/// Style for the food
pub(crate) const FOOD_STYLE: Style = Style::new().fg(Color::LightMagenta);

/// Style for obstacles
pub(crate) const OBSTACLE_STYLE: Style = Style::new().fg(Color::Gray);

/// Style for [`COLLISION_SYMBOL`]
pub(crate) const COLLISION_STYLE: Style = Style::new()
    .fg(Color::LightRed)
    .add_modifier(Modifier::REVERSED);

/// Style for key codes shown in the interface
pub(crate) const KEY_STYLE: Style = Style::new().fg(Color::Cyan);

/// Style for the score bar at the top of the game screen
pub(crate) const SCORE_BAR_STYLE: Style = Style::new().add_modifier(Modifier::REVERSED);

/// Style for the currently-selected menu item
pub(crate) const MENU_SELECTION_STYLE: Style = Style::new().add_modifier(Modifier::UNDERLINED);

/// Style for the "You win!" message
pub(crate) const WIN_STYLE: Style = Style::new()
    .fg(Color::LightGreen)
    .add_modifier(Modifier::BOLD);

/// Style for the "Game over" message
pub(crate) const GAME_OVER_STYLE: Style = Style::new().fg(Color::LightRed);
