use crate::consts;
use rand::Rng;
use ratatui::layout::{Position, Size};
use std::collections::HashSet;

/// The playing field: fixed cell bounds plus the obstacle layout for one game
#[derive(Clone, Debug, Eq, PartialEq)]
pub(super) struct Board {
    pub(super) size: Size,
    pub(super) obstacles: HashSet<Position>,
}

impl Board {
    pub(super) fn new(size: Size) -> Board {
        Board {
            size,
            obstacles: HashSet::new(),
        }
    }

    /// Scatter [`consts::OBSTACLE_COUNT`] obstacles across uniformly random
    /// cells.  No cell is reserved for the snake, and coinciding picks
    /// collapse into one obstacle.
    pub(super) fn scatter_obstacles<R: Rng>(&mut self, rng: &mut R) {
        let cells = (0..consts::OBSTACLE_COUNT)
            .map(|_| random_cell(rng, self.size))
            .collect();
        self.obstacles = cells;
    }

    /// Pick a uniformly random in-bounds cell, regardless of what occupies it
    pub(super) fn random_cell<R: Rng>(&self, rng: &mut R) -> Position {
        random_cell(rng, self.size)
    }

    pub(super) fn size(&self) -> Size {
        self.size
    }

    pub(super) fn obstacles(&self) -> &HashSet<Position> {
        &self.obstacles
    }
}

fn random_cell<R: Rng>(rng: &mut R, size: Size) -> Position {
    Position {
        x: rng.random_range(0..size.width),
        y: rng.random_range(0..size.height),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha12Rng;

    #[test]
    fn scatter_in_bounds() {
        let mut rng = ChaCha12Rng::seed_from_u64(0x0123_4567_89AB_CDEF);
        let mut board = Board::new(consts::BOARD_SIZE);
        board.scatter_obstacles(&mut rng);
        assert!(!board.obstacles().is_empty());
        assert!(board.obstacles().len() <= consts::OBSTACLE_COUNT);
        for pos in board.obstacles() {
            assert!(pos.x < consts::BOARD_SIZE.width);
            assert!(pos.y < consts::BOARD_SIZE.height);
        }
    }

    #[test]
    fn random_cells_in_bounds() {
        let mut rng = ChaCha12Rng::seed_from_u64(42);
        let board = Board::new(consts::BOARD_SIZE);
        for _ in 0..100 {
            let pos = board.random_cell(&mut rng);
            assert!(pos.x < consts::BOARD_SIZE.width);
            assert!(pos.y < consts::BOARD_SIZE.height);
        }
    }

    #[test]
    fn rescatter_replaces_layout() {
        let mut rng = ChaCha12Rng::seed_from_u64(7);
        let mut board = Board::new(consts::BOARD_SIZE);
        board.scatter_obstacles(&mut rng);
        let first = board.obstacles().clone();
        board.scatter_obstacles(&mut rng);
        // Astronomically unlikely to collide for this seed
        assert_ne!(board.obstacles(), &first);
    }
}
