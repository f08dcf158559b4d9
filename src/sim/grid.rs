//! Projection of world state onto the visible character grid.

use super::config::WorldConfig;
use super::flight::Flyer;
use super::pipes::PipeField;

/// Contents of one grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Wall,
    Flyer,
}

impl Cell {
    pub fn glyph(self) -> char {
        match self {
            Cell::Empty => ' ',
            Cell::Wall => '#',
            Cell::Flyer => 'O',
        }
    }
}

/// The bottom `view_height` rows of the world, top row first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Viewport {
    rows: Vec<Vec<Cell>>,
}

impl Viewport {
    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    /// Cell at viewport-relative `(row, col)`.
    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        self.rows.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Each row as a plain string of glyphs.
    pub fn lines(&self) -> Vec<String> {
        self.rows
            .iter()
            .map(|row| row.iter().map(|c| c.glyph()).collect())
            .collect()
    }
}

/// Draw pipes then the flyer on top, and keep only the visible rows.
pub fn render(config: &WorldConfig, flyer: &Flyer, pipes: &PipeField) -> Viewport {
    let height = config.height as usize;
    let width = config.width as usize;
    let mut grid = vec![vec![Cell::Empty; width]; height];

    for pipe in pipes.iter() {
        if pipe.x < 0 || pipe.x >= config.width {
            continue;
        }
        let col = pipe.x as usize;
        for (ry, row) in grid.iter_mut().enumerate() {
            if !pipe.gap_contains(ry as i32) {
                row[col] = Cell::Wall;
            }
        }
    }

    let iy = flyer.row();
    if (0..config.height).contains(&iy) && (0..config.width).contains(&config.player_x) {
        grid[iy as usize][config.player_x as usize] = Cell::Flyer;
    }

    let view_top = config.view_top() as usize;
    Viewport {
        rows: grid.split_off(view_top),
    }
}
