use rand::Rng;

use super::{grid::Grid, state::Position};

/// A single food item
///
/// Placement does not avoid the snake, so food can land on the body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Food {
    grid: Grid,
    position: Position,
}

impl Food {
    pub fn new(grid: Grid, position: Position) -> Self {
        Self { grid, position }
    }

    /// Food at a random cell
    pub fn random<R: Rng + ?Sized>(grid: Grid, rng: &mut R) -> Self {
        let mut food = Self::new(grid, Position::new(0, 0));
        food.randomize(rng);
        food
    }

    /// Move to a uniformly random cell of the grid
    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.position = self.grid.random_cell(rng);
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn set_position(&mut self, position: Position) {
        self.position = position;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn test_randomize_stays_in_bounds() {
        let grid = Grid::new(4, 3, 20);
        let mut rng = StdRng::seed_from_u64(11);
        let mut food = Food::random(grid, &mut rng);

        for _ in 0..200 {
            food.randomize(&mut rng);
            assert!(grid.contains(food.position()));
        }
    }

    #[test]
    fn test_randomize_reaches_every_cell() {
        let grid = Grid::new(3, 3, 20);
        let mut rng = StdRng::seed_from_u64(5);
        let mut food = Food::new(grid, Position::new(0, 0));
        let mut seen = std::collections::HashSet::new();

        for _ in 0..500 {
            food.randomize(&mut rng);
            seen.insert(food.position());
        }
        assert_eq!(seen.len(), 9);
    }

    #[test]
    fn test_same_seed_same_cell() {
        let grid = Grid::new(32, 24, 20);
        let a = Food::random(grid, &mut StdRng::seed_from_u64(42));
        let b = Food::random(grid, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }
}
