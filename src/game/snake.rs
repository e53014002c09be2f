use super::direction::Direction;
use crate::consts;
use ratatui::layout::{Position, Size};

/// Snake state.
///
/// All positions are in board cells relative to the top-left corner.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(super) struct Snake {
    /// The position of the snake's head
    pub(super) head: Position,

    /// The positions of the cells in the snake's body, ordered from the
    /// segment nearest the head to the tail
    pub(super) body: Vec<Position>,

    /// The direction the snake is travelling in, or `None` before the first
    /// directional key press of a game
    pub(super) heading: Option<Direction>,
}

impl Snake {
    /// Create a new snake with its head at `head`, an empty body, and no
    /// heading
    pub(super) fn new(head: Position) -> Snake {
        Snake {
            head,
            body: Vec::new(),
            heading: None,
        }
    }

    /// Return the position of the snake's head
    pub(super) fn head(&self) -> Position {
        self.head
    }

    /// Return the positions of the cells in the snake's body
    pub(super) fn body(&self) -> &[Position] {
        &self.body
    }

    pub(super) fn heading(&self) -> Option<Direction> {
        self.heading
    }

    /// Return the glyph to use for drawing the snake's head
    pub(super) fn head_symbol(&self) -> char {
        match self.heading {
            None => consts::SNAKE_HEAD_IDLE_SYMBOL,
            Some(Direction::North) => consts::SNAKE_HEAD_NORTH_SYMBOL,
            Some(Direction::South) => consts::SNAKE_HEAD_SOUTH_SYMBOL,
            Some(Direction::East) => consts::SNAKE_HEAD_EAST_SYMBOL,
            Some(Direction::West) => consts::SNAKE_HEAD_WEST_SYMBOL,
        }
    }

    /// Change the snake's heading to `direction`.  A press that exactly
    /// reverses the current heading is ignored; perpendicular presses are
    /// always honored.
    pub(super) fn steer(&mut self, direction: Direction) {
        if self.heading != Some(direction.reverse()) {
            self.heading = Some(direction);
        }
    }

    /// Append one body segment at the head's current cell (the food cell just
    /// eaten)
    pub(super) fn grow(&mut self) {
        self.body.push(self.head);
    }

    /// Move the snake forwards one cell in the current heading within
    /// `bounds`: each body segment inherits its predecessor's position, the
    /// first segment inherits the head, and the head advances.  Returns
    /// `false` if the head would leave the board, in which case nothing
    /// moves.  A snake with no heading stays put.
    pub(super) fn advance(&mut self, bounds: Size) -> bool {
        let Some(direction) = self.heading else {
            return true;
        };
        let Some(next) = direction.advance(self.head, bounds) else {
            return false;
        };
        for i in (1..self.body.len()).rev() {
            self.body[i] = self.body[i - 1];
        }
        if let Some(first) = self.body.first_mut() {
            *first = self.head;
        }
        self.head = next;
        true
    }
}
