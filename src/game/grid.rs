use rand::Rng;

use super::state::Position;

/// Largest number of cells along either side. A row is drawn two terminal
/// columns per cell and terminal coordinates are `u16`.
pub const MAX_SIDE: usize = (u16::MAX / 2) as usize;

/// Playfield dimensions, in cells, plus the pixel size of one cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    pub width: usize,
    pub height: usize,
    pub cell_size: u32,
}

impl Grid {
    pub fn new(width: usize, height: usize, cell_size: u32) -> Self {
        Self {
            width,
            height,
            cell_size,
        }
    }

    /// Size of the world in pixels, `None` if it does not fit in `u32`
    pub fn pixel_size(&self) -> Option<(u32, u32)> {
        let width = u32::try_from(self.width).ok()?.checked_mul(self.cell_size)?;
        let height = u32::try_from(self.height).ok()?.checked_mul(self.cell_size)?;
        Some((width, height))
    }

    /// Cell the snake starts from
    pub fn center(&self) -> Position {
        Position::new((self.width / 2) as i32, (self.height / 2) as i32)
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.x < self.width as i32 && pos.y >= 0 && pos.y < self.height as i32
    }

    /// Fold a position back onto the torus
    pub fn wrap(&self, pos: Position) -> Position {
        Position::new(
            pos.x.rem_euclid(self.width as i32),
            pos.y.rem_euclid(self.height as i32),
        )
    }

    /// Top-left pixel of a cell
    pub fn to_pixel(&self, pos: Position) -> (u32, u32) {
        (
            pos.x as u32 * self.cell_size,
            pos.y as u32 * self.cell_size,
        )
    }

    /// Uniformly random cell within bounds
    pub fn random_cell<R: Rng + ?Sized>(&self, rng: &mut R) -> Position {
        let x = rng.gen_range(0..self.width) as i32;
        let y = rng.gen_range(0..self.height) as i32;
        Position::new(x, y)
    }
}
