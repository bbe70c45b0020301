use super::{
    config::GameConfig,
    direction::Direction,
    food::Food,
    grid::Grid,
    state::{MoveOutcome, Snake},
};
use log::{debug, info};
use rand::{SeedableRng, rngs::StdRng};

/// Where the round stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Running,
    GameOver,
}

/// Result of a game step
#[derive(Debug, Clone, PartialEq)]
pub struct StepResult {
    /// Whether the round has ended
    pub terminated: bool,
    /// Whether the snake ate food this step
    pub ate_food: bool,
}

/// The game engine that handles all game logic
pub struct GameEngine {
    grid: Grid,
    snake: Snake,
    food: Food,
    phase: Phase,
    steps: u32,
    rng: StdRng,
}

impl GameEngine {
    /// Create a new game engine and start the first round
    pub fn new(config: &GameConfig) -> Self {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let grid = config.grid();

        let mut snake = Snake::new(grid, grid.center(), Direction::Right);
        snake.reset(&mut rng);
        let food = Food::random(grid, &mut rng);

        Self {
            grid,
            snake,
            food,
            phase: Phase::Running,
            steps: 0,
            rng,
        }
    }

    /// Start a fresh round
    pub fn restart(&mut self) {
        self.snake.reset(&mut self.rng);
        self.food.randomize(&mut self.rng);
        self.phase = Phase::Running;
        self.steps = 0;
        info!(
            "round started at {:?} heading {:?}",
            self.snake.head(),
            self.snake.direction()
        );
    }

    /// Queue a heading change for the next tick
    pub fn turn(&mut self, direction: Direction) {
        if self.phase == Phase::Running {
            debug!("turn {:?}", direction);
            self.snake.set_pending_direction(direction);
        }
    }

    /// Execute one tick of the game
    pub fn step(&mut self) -> StepResult {
        if self.phase == Phase::GameOver {
            return StepResult {
                terminated: true,
                ate_food: false,
            };
        }

        self.steps += 1;

        if let MoveOutcome::SelfCollision = self.snake.move_snake() {
            self.phase = Phase::GameOver;
            info!(
                "game over after {} steps, score {}",
                self.steps,
                self.score()
            );
            return StepResult {
                terminated: true,
                ate_food: false,
            };
        }

        let ate_food = self.snake.head() == self.food.position();
        if ate_food {
            self.snake.grow();
            self.food.randomize(&mut self.rng);
            debug!(
                "food eaten, length {}, next food at {:?}",
                self.snake.target_length(),
                self.food.position()
            );
        }

        StepResult {
            terminated: false,
            ate_food,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    pub fn grid(&self) -> Grid {
        self.grid
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> &Food {
        &self.food
    }

    /// Ticks taken in the current round
    pub fn steps(&self) -> u32 {
        self.steps
    }

    /// Put the food on a chosen cell
    #[cfg(test)]
    pub(crate) fn place_food(&mut self, position: super::state::Position) {
        self.food.set_position(position);
    }

    /// Food eaten in the current round
    pub fn score(&self) -> u32 {
        (self.snake.target_length() - 1) as u32
    }
}
