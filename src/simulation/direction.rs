//! Four-way compass directions and the injectable randomness behind them

use rand::Rng;

/// A compass direction on the grid
///
/// North is toward smaller `y`, east toward larger `x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North = 0,
    East = 1,
    South = 2,
    West = 3,
}

impl Direction {
    /// All directions in clockwise order starting at north
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// Position of this direction in [`Direction::ALL`]
    pub fn index(self) -> usize {
        self as usize
    }

    /// The direction 90 degrees counter-clockwise
    pub fn left(self) -> Self {
        Self::ALL[(self.index() + 3) % 4]
    }

    /// The direction 90 degrees clockwise
    pub fn right(self) -> Self {
        Self::ALL[(self.index() + 1) % 4]
    }

    pub fn reverse(self) -> Self {
        Self::ALL[(self.index() + 2) % 4]
    }

    /// Column offset of one step in this direction
    pub fn dx(self) -> i32 {
        match self {
            Direction::East => 1,
            Direction::West => -1,
            Direction::North | Direction::South => 0,
        }
    }

    /// Row offset of one step in this direction
    pub fn dy(self) -> i32 {
        match self {
            Direction::South => 1,
            Direction::North => -1,
            Direction::East | Direction::West => 0,
        }
    }

    /// Draw a uniformly random direction from the thread-local generator
    pub fn random() -> Self {
        rand::rng().random_direction()
    }
}

/// Source of uniformly random directions
///
/// Vehicle policies draw through this trait so a caller can pin the draws.
/// Every [`rand::Rng`] is a source.
pub trait DirectionSource {
    fn random_direction(&mut self) -> Direction;
}

impl<R: Rng> DirectionSource for R {
    fn random_direction(&mut self) -> Direction {
        Direction::ALL[self.random_range(0..Direction::ALL.len())]
    }
}
