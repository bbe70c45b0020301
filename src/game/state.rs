use rand::Rng;

use super::{direction::Direction, grid::Grid};

/// A position on the game grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move position by delta
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Move position in a direction, without wrapping
    pub fn moved_in_direction(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        self.moved_by(dx, dy)
    }
}

/// What a single move did
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The snake advanced and may keep going
    Clear,
    /// The new head landed on the body
    SelfCollision,
}

impl MoveOutcome {
    pub fn is_collision(&self) -> bool {
        matches!(self, MoveOutcome::SelfCollision)
    }
}

/// The snake in the game
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    grid: Grid,
    /// Body segments, with head at index 0
    body: Vec<Position>,
    /// Number of segments the body is trimmed back to
    length: usize,
    direction: Direction,
    /// Heading to apply on the next move, last write wins
    pending: Option<Direction>,
}

impl Snake {
    /// Create a length-1 snake at `head`
    pub fn new(grid: Grid, head: Position, direction: Direction) -> Self {
        Self {
            grid,
            body: vec![head],
            length: 1,
            direction,
            pending: None,
        }
    }

    /// Build a snake from explicit segments, head first.
    ///
    /// The target length is the number of segments given.
    pub fn from_segments(grid: Grid, body: Vec<Position>, direction: Direction) -> Self {
        let length = body.len();
        Self {
            grid,
            body,
            length,
            direction,
            pending: None,
        }
    }

    /// Back to a single segment at the grid centre with a random heading
    pub fn reset<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.body.clear();
        self.body.push(self.grid.center());
        self.length = 1;
        self.direction = Direction::random(rng);
        self.pending = None;
    }

    /// Queue a heading for the next move. Reversals are ignored.
    pub fn set_pending_direction(&mut self, direction: Direction) {
        if !self.direction.is_opposite(direction) {
            self.pending = Some(direction);
        }
    }

    /// Advance one cell, wrapping around the grid edges.
    ///
    /// Collision is checked against the body before the tail is trimmed, so
    /// stepping into the cell the tail is about to leave counts as a hit.
    pub fn move_snake(&mut self) -> MoveOutcome {
        if let Some(direction) = self.pending.take() {
            self.direction = direction;
        }

        let new_head = self
            .grid
            .wrap(self.head().moved_in_direction(self.direction));
        self.body.insert(0, new_head);

        if self.collides_with_body(new_head) {
            return MoveOutcome::SelfCollision;
        }

        if self.body.len() > self.length {
            self.body.pop();
        }

        MoveOutcome::Clear
    }

    /// Lengthen by one; the next move keeps its tail
    pub fn grow(&mut self) {
        self.length += 1;
    }

    /// Get the head position
    pub fn head(&self) -> Position {
        self.body[0]
    }

    pub fn positions(&self) -> &[Position] {
        &self.body
    }

    /// Current heading
    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn pending_direction(&self) -> Option<Direction> {
        self.pending
    }

    /// Length the body is trimmed to
    pub fn target_length(&self) -> usize {
        self.length
    }

    /// Check if position collides with snake body (excluding head)
    pub fn collides_with_body(&self, pos: Position) -> bool {
        self.body[1..].contains(&pos)
    }

    /// Number of segments currently on the grid
    pub fn len(&self) -> usize {
        self.body.len()
    }
}
