//! Pixel-space description of one frame, and the widget that paints it.
//!
//! A frame is a background fill followed by filled squares, one per occupied
//! cell, in draw order. The terminal widget folds each square back onto a
//! two-column character cell.

use ratatui::{buffer::Buffer, layout::Rect, style::Color, widgets::Widget};

use crate::game::{Food, Grid, Position, Snake};

pub const BACKGROUND_COLOR: Color = Color::Black;
pub const FOOD_COLOR: Color = Color::Rgb(255, 0, 0);
pub const SNAKE_COLOR: Color = Color::Rgb(0, 255, 0);
pub const BORDER_COLOR: Color = Color::Rgb(93, 216, 228);

/// Terminal columns used for one grid cell, so cells look square
const COLUMNS_PER_CELL: u16 = 2;

/// Anything that can be drawn as a set of same-coloured cells
pub trait Renderable {
    fn cells(&self) -> Vec<Position>;
    fn color(&self) -> Color;
}

impl Renderable for Snake {
    fn cells(&self) -> Vec<Position> {
        self.positions().to_vec()
    }

    fn color(&self) -> Color {
        SNAKE_COLOR
    }
}

impl Renderable for Food {
    fn cells(&self) -> Vec<Position> {
        vec![self.position()]
    }

    fn color(&self) -> Color {
        FOOD_COLOR
    }
}

/// A filled square in world pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Square {
    pub x: u32,
    pub y: u32,
    pub size: u32,
    pub color: Color,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub grid: Grid,
    pub background: Color,
    pub squares: Vec<Square>,
}

impl Scene {
    /// Clear to `background`, then lay down every layer in order
    pub fn compose(grid: Grid, background: Color, layers: &[&dyn Renderable]) -> Self {
        let squares = layers
            .iter()
            .flat_map(|layer| {
                let color = layer.color();
                layer.cells().into_iter().map(move |cell| {
                    let (x, y) = grid.to_pixel(cell);
                    Square {
                        x,
                        y,
                        size: grid.cell_size,
                        color,
                    }
                })
            })
            .collect();

        Self {
            grid,
            background,
            squares,
        }
    }

    /// Food first, snake on top
    pub fn for_round(grid: Grid, snake: &Snake, food: &Food) -> Self {
        let layers: [&dyn Renderable; 2] = [food, snake];
        Self::compose(grid, BACKGROUND_COLOR, &layers)
    }

    /// Terminal size needed to show the whole grid
    pub fn terminal_size(&self) -> (u16, u16) {
        (
            (self.grid.width as u16).saturating_mul(COLUMNS_PER_CELL),
            self.grid.height as u16,
        )
    }
}

impl Widget for &Scene {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (width, height) = self.terminal_size();
        let width = width.min(area.width);
        let height = height.min(area.height);

        for y in area.y..area.y + height {
            for x in area.x..area.x + width {
                if let Some(cell) = buf.cell_mut((x, y)) {
                    cell.set_symbol(" ").set_bg(self.background);
                }
            }
        }

        let cell_size = self.grid.cell_size.max(1);
        for square in &self.squares {
            let column = (square.x / cell_size) as u16 * COLUMNS_PER_CELL;
            let row = (square.y / cell_size) as u16;
            if row >= height {
                continue;
            }

            for offset in 0..COLUMNS_PER_CELL {
                let x = column + offset;
                if x >= width {
                    break;
                }
                if let Some(cell) = buf.cell_mut((area.x + x, area.y + row)) {
                    cell.set_symbol(" ").set_bg(square.color);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Direction;

    fn grid() -> Grid {
        Grid::new(32, 24, 20)
    }

    #[test]
    fn test_squares_are_in_pixels() {
        let food = Food::new(grid(), Position::new(2, 3));
        let scene = Scene::compose(grid(), BACKGROUND_COLOR, &[&food]);

        assert_eq!(
            scene.squares,
            vec![Square {
                x: 40,
                y: 60,
                size: 20,
                color: FOOD_COLOR,
            }]
        );
    }

    #[test]
    fn test_snake_drawn_over_food() {
        let body = vec![Position::new(5, 5), Position::new(4, 5)];
        let snake = Snake::from_segments(grid(), body, Direction::Right);
        let food = Food::new(grid(), Position::new(5, 5));

        let scene = Scene::for_round(grid(), &snake, &food);

        assert_eq!(scene.background, BACKGROUND_COLOR);
        assert_eq!(scene.squares.len(), 3);
        assert_eq!(scene.squares[0].color, FOOD_COLOR);
        assert!(scene.squares[1..].iter().all(|s| s.color == SNAKE_COLOR));
    }

    #[test]
    fn test_widget_paints_cells() {
        let small = Grid::new(4, 3, 10);
        let snake = Snake::new(small, Position::new(1, 1), Direction::Right);
        let food = Food::new(small, Position::new(3, 2));
        let scene = Scene::for_round(small, &snake, &food);

        let area = Rect::new(0, 0, 8, 3);
        let mut buf = Buffer::empty(area);
        (&scene).render(area, &mut buf);

        let bg = |x: u16, y: u16| buf.cell((x, y)).map(|c| c.bg);
        assert_eq!(bg(0, 0), Some(BACKGROUND_COLOR));
        assert_eq!(bg(2, 1), Some(SNAKE_COLOR));
        assert_eq!(bg(3, 1), Some(SNAKE_COLOR));
        assert_eq!(bg(6, 2), Some(FOOD_COLOR));
        assert_eq!(bg(7, 2), Some(FOOD_COLOR));
    }

    #[test]
    fn test_widget_clips_to_area() {
        let small = Grid::new(4, 3, 10);
        let snake = Snake::new(small, Position::new(3, 2), Direction::Right);
        let food = Food::new(small, Position::new(0, 0));
        let scene = Scene::for_round(small, &snake, &food);

        // Too small for the snake at (3, 2); must not panic
        let area = Rect::new(0, 0, 4, 2);
        let mut buf = Buffer::empty(area);
        (&scene).render(area, &mut buf);

        assert_eq!(buf.cell((0, 0)).map(|c| c.bg), Some(FOOD_COLOR));
        assert_eq!(buf.cell((3, 1)).map(|c| c.bg), Some(BACKGROUND_COLOR));
    }
}
