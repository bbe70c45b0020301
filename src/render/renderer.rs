use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

use super::scene::{BORDER_COLOR, Scene};
use crate::game::GameEngine;
use crate::metrics::SessionMetrics;

pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, engine: &GameEngine, metrics: &SessionMetrics) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Header
                Constraint::Min(0),    // Playfield
                Constraint::Length(1), // Footer
            ])
            .split(frame.area());

        frame.render_widget(self.render_stats(engine, metrics), chunks[0]);

        let scene = Scene::for_round(engine.grid(), engine.snake(), engine.food());
        let (width, height) = scene.terminal_size();
        let board = Self::centered(chunks[1], width.saturating_add(2), height.saturating_add(2));

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(BORDER_COLOR))
            .title(" Snake ");
        let inner = block.inner(board);
        frame.render_widget(block, board);

        if engine.is_running() {
            frame.render_widget(&scene, inner);
        } else {
            frame.render_widget(Clear, inner);
            frame.render_widget(self.render_game_over(engine, metrics), inner);
        }

        frame.render_widget(self.render_controls(engine.is_running()), chunks[2]);
    }

    /// A `width` x `height` rect in the middle of `area`, shrunk to fit
    fn centered(area: Rect, width: u16, height: u16) -> Rect {
        let [row] = Layout::vertical([Constraint::Length(height.min(area.height))])
            .flex(Flex::Center)
            .areas(area);
        let [rect] = Layout::horizontal([Constraint::Length(width.min(area.width))])
            .flex(Flex::Center)
            .areas(row);
        rect
    }

    fn render_stats(&self, engine: &GameEngine, metrics: &SessionMetrics) -> Paragraph<'_> {
        let label = Style::default().fg(Color::Yellow);
        let value = Style::default().fg(Color::White);

        let text = Line::from(vec![
            Span::styled("Score: ", label),
            Span::styled(
                engine.score().to_string(),
                value.add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled("Best: ", label),
            Span::styled(metrics.high_score.to_string(), value),
            Span::raw("    "),
            Span::styled("Length: ", label),
            Span::styled(engine.snake().len().to_string(), value),
            Span::raw("    "),
            Span::styled("Time: ", label),
            Span::styled(metrics.format_time(), value),
        ]);

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_game_over(&self, engine: &GameEngine, metrics: &SessionMetrics) -> Paragraph<'_> {
        let key = |k: &'static str, color: Color| {
            Span::styled(k, Style::default().fg(color).add_modifier(Modifier::BOLD))
        };
        let gray = Style::default().fg(Color::Gray);

        let text = vec![
            Line::from(""),
            Line::from(key("GAME OVER", Color::Red)),
            Line::from(""),
            Line::from(vec![
                Span::styled("Final Score: ", Style::default().fg(Color::Yellow)),
                bold_number(engine.score()),
            ]),
            Line::from(vec![
                Span::styled("Rounds played: ", Style::default().fg(Color::Yellow)),
                bold_number(metrics.games_played),
                Span::raw("    "),
                Span::styled("Food eaten: ", Style::default().fg(Color::Yellow)),
                bold_number(metrics.food_eaten),
            ]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Press ", gray),
                key("SPACE", Color::Green),
                Span::styled(" to restart or ", gray),
                key("Q", Color::Red),
                Span::styled(" to quit", gray),
            ]),
        ];

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_controls(&self, running: bool) -> Paragraph<'_> {
        let text = if running {
            Line::from(vec![
                Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
                Span::raw(" or "),
                Span::styled("WASD", Style::default().fg(Color::Cyan)),
                Span::raw(" to move | "),
                Span::styled("Q", Style::default().fg(Color::Red)),
                Span::raw(" to quit"),
            ])
        } else {
            Line::from(vec![
                Span::styled("SPACE", Style::default().fg(Color::Green)),
                Span::raw("/"),
                Span::styled("R", Style::default().fg(Color::Green)),
                Span::raw(" restart | "),
                Span::styled("Q", Style::default().fg(Color::Red)),
                Span::raw(" to quit"),
            ])
        };

        Paragraph::new(text).alignment(Alignment::Center)
    }
}

fn bold_number(value: u32) -> Span<'static> {
    Span::styled(
        value.to_string(),
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    )
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}
