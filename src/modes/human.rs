use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use log::info;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stderr, stderr};
use tokio::time::{MissedTickBehavior, interval};

use crate::game::{GameConfig, GameEngine};
use crate::input::{InputHandler, KeyAction};
use crate::metrics::SessionMetrics;
use crate::render::Renderer;

/// Keyboard-driven play in the terminal
pub struct HumanMode {
    config: GameConfig,
    engine: GameEngine,
    metrics: SessionMetrics,
    renderer: Renderer,
    input_handler: InputHandler,
    should_quit: bool,
}

impl HumanMode {
    pub fn new(config: GameConfig) -> Self {
        let engine = GameEngine::new(&config);

        Self {
            config,
            engine,
            metrics: SessionMetrics::new(),
            renderer: Renderer::new(),
            input_handler: InputHandler::new(),
            should_quit: false,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        info!(
            "playing on a {}x{} grid at {} ticks/s",
            self.config.grid_width, self.config.grid_height, self.config.ticks_per_second
        );

        // Run game loop with cleanup
        let result = self.run_game_loop(&mut terminal).await;

        // Cleanup terminal
        self.cleanup_terminal(&mut terminal)?;

        result
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();

        let mut tick_timer = interval(self.config.tick_interval());
        // Time spent on the game-over screen must not turn into a burst of ticks
        tick_timer.set_missed_tick_behavior(MissedTickBehavior::Delay);

        self.draw(terminal)?;

        loop {
            if self.engine.is_running() {
                tokio::select! {
                    maybe_event = event_stream.next() => {
                        self.handle_terminal_event(maybe_event)?;
                    }

                    _ = tick_timer.tick() => {
                        self.tick();
                        self.draw(terminal)?;
                    }

                    _ = tokio::signal::ctrl_c() => {
                        self.should_quit = true;
                    }
                }
            } else {
                // Nothing moves until the player restarts or quits
                let maybe_event = event_stream.next().await;
                self.handle_terminal_event(maybe_event)?;

                if self.engine.is_running() {
                    tick_timer.reset();
                }
                if !self.should_quit {
                    self.draw(terminal)?;
                }
            }

            if self.should_quit {
                break;
            }
        }

        info!(
            "quitting after {} rounds, best score {}",
            self.metrics.games_played, self.metrics.high_score
        );
        Ok(())
    }

    fn handle_terminal_event(&mut self, maybe_event: Option<io::Result<Event>>) -> Result<()> {
        match maybe_event {
            Some(event) => {
                let event = event.context("Failed to read terminal event")?;
                let action = self.input_handler.handle_event(&event);
                self.handle_action(action);
            }
            // The terminal went away
            None => self.should_quit = true,
        }
        Ok(())
    }

    fn handle_action(&mut self, action: KeyAction) {
        match action {
            KeyAction::Turn(direction) => self.engine.turn(direction),
            KeyAction::Restart => {
                if !self.engine.is_running() {
                    self.reset_game();
                }
            }
            KeyAction::Quit => self.should_quit = true,
            KeyAction::None => {}
        }
    }

    fn tick(&mut self) {
        let result = self.engine.step();

        if result.ate_food {
            self.metrics.on_food_eaten();
        }
        if result.terminated {
            self.metrics.on_game_over(self.engine.score());
        }
    }

    fn reset_game(&mut self) {
        self.engine.restart();
        self.metrics.on_round_start();
    }

    fn draw(&mut self, terminal: &mut Terminal<CrosstermBackend<Stderr>>) -> Result<()> {
        self.metrics.update(self.engine.is_running());
        terminal
            .draw(|frame| {
                self.renderer.render(frame, &self.engine, &self.metrics);
            })
            .context("Failed to draw frame")?;
        Ok(())
    }

    fn cleanup_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}
