use rand::distributions::{Distribution, Standard};
use rand::Rng;

/// The state of a single cell in the grid.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum Cell {
    #[default]
    Dead,
    Alive,
}

impl Cell {
    /// Returns the cell as a binary value, `1` when alive and `0` when dead.
    pub fn value(self) -> u8 {
        match self {
            Cell::Dead => 0,
            Cell::Alive => 1,
        }
    }

    pub fn is_alive(self) -> bool {
        self == Cell::Alive
    }

    /// Applies Conway's rules to compute the state of the cell in the next generation.
    ///
    /// # Arguments
    /// * `neighbors` - The number of live cells around this one.
    pub fn next(self, neighbors: u8) -> Cell {
        match (self, neighbors) {
            // Survives
            (Cell::Alive, 2..=3) => Cell::Alive,
            // Born
            (Cell::Dead, 3) => Cell::Alive,
            // Under or overpopulation, or stays dead
            _ => Cell::Dead,
        }
    }

    pub fn from_char(value: char) -> Option<Cell> {
        match value {
            '.' | '0' => Some(Cell::Dead),
            '*' | '1' => Some(Cell::Alive),
            _ => None,
        }
    }
}

impl Distribution<Cell> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Cell {
        match rng.gen_range(0..2) {
            0 => Cell::Dead,
            _ => Cell::Alive,
        }
    }
}
