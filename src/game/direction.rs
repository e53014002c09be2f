use ratatui::layout::{Position, Size};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// Return the cell one step from `pos` in this direction, or `None` if
    /// that step leaves the board.  The check is symmetric on all four edges.
    pub(super) fn advance(self, pos: Position, bounds: Size) -> Option<Position> {
        let Position { mut x, mut y } = pos;
        match self {
            Direction::North => {
                y = decrement_in_bounds(y)?;
            }
            Direction::East => {
                x = increment_in_bounds(x, bounds.width)?;
            }
            Direction::South => {
                y = increment_in_bounds(y, bounds.height)?;
            }
            Direction::West => {
                x = decrement_in_bounds(x)?;
            }
        }
        Some(Position { x, y })
    }

    pub(super) fn reverse(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
        }
    }
}

fn decrement_in_bounds(x: u16) -> Option<u16> {
    x.checked_sub(1)
}

fn increment_in_bounds(x: u16, max: u16) -> Option<u16> {
    x.checked_add(1).filter(|&xx| xx < max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const BOUNDS: Size = Size {
        width: 24,
        height: 24,
    };

    #[rstest]
    #[case(Direction::North, Position::new(5, 7), Some(Position::new(5, 6)))]
    #[case(Direction::South, Position::new(5, 7), Some(Position::new(5, 8)))]
    #[case(Direction::East, Position::new(5, 7), Some(Position::new(6, 7)))]
    #[case(Direction::West, Position::new(5, 7), Some(Position::new(4, 7)))]
    #[case(Direction::North, Position::new(5, 0), None)]
    #[case(Direction::West, Position::new(0, 7), None)]
    #[case(Direction::South, Position::new(5, 23), None)]
    #[case(Direction::East, Position::new(23, 7), None)]
    #[case(Direction::South, Position::new(5, 22), Some(Position::new(5, 23)))]
    #[case(Direction::East, Position::new(22, 7), Some(Position::new(23, 7)))]
    fn test_direction_advance(
        #[case] d: Direction,
        #[case] pos: Position,
        #[case] r: Option<Position>,
    ) {
        assert_eq!(d.advance(pos, BOUNDS), r);
    }

    #[rstest]
    #[case(Direction::North, Direction::South)]
    #[case(Direction::South, Direction::North)]
    #[case(Direction::East, Direction::West)]
    #[case(Direction::West, Direction::East)]
    fn test_reverse(#[case] d: Direction, #[case] r: Direction) {
        assert_eq!(d.reverse(), r);
    }
}
