use log::info;
use std::time::{Duration, Instant};

/// Stats that outlive a single round
pub struct SessionMetrics {
    pub round_started: Instant,
    pub elapsed_time: Duration,
    pub high_score: u32,
    pub games_played: u32,
    /// Food eaten across every round
    pub food_eaten: u32,
}

impl SessionMetrics {
    pub fn new() -> Self {
        Self {
            round_started: Instant::now(),
            elapsed_time: Duration::ZERO,
            high_score: 0,
            games_played: 0,
            food_eaten: 0,
        }
    }

    /// Refresh the round clock; frozen once the round is over
    pub fn update(&mut self, running: bool) {
        if running {
            self.elapsed_time = self.round_started.elapsed();
        }
    }

    pub fn on_round_start(&mut self) {
        self.round_started = Instant::now();
        self.elapsed_time = Duration::ZERO;
    }

    pub fn on_food_eaten(&mut self) {
        self.food_eaten += 1;
    }

    pub fn on_game_over(&mut self, final_score: u32) {
        self.games_played += 1;
        if final_score > self.high_score {
            info!("new high score {}", final_score);
            self.high_score = final_score;
        }
    }

    pub fn format_time(&self) -> String {
        let total_secs = self.elapsed_time.as_secs();
        format!("{:02}:{:02}", total_secs / 60, total_secs % 60)
    }
}

impl Default for SessionMetrics {
    fn default() -> Self {
        Self::new()
    }
}
