//! In-run view: the viewport grid, score line and end-of-run message.

use super::game_common::{centered, render_status_bar};
use crate::sim::{Cell, Viewport};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// What the status area under the grid should say.
pub struct PlayStatus<'a> {
    pub score: u32,
    pub best: u32,
    pub message: Option<&'a str>,
    pub message_color: Color,
    pub controls: &'a [(&'a str, &'a str)],
}

fn cell_span(cell: Cell) -> Span<'static> {
    let style = match cell {
        Cell::Empty => Style::default(),
        Cell::Wall => Style::default().fg(Color::Green),
        Cell::Flyer => Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    };
    Span::styled(cell.glyph().to_string(), style)
}

/// Styled rows of the viewport, one `Line` per grid row.
pub fn viewport_lines(view: &Viewport) -> Vec<Line<'static>> {
    view.rows()
        .iter()
        .map(|row| Line::from(row.iter().map(|c| cell_span(*c)).collect::<Vec<_>>()))
        .collect()
}

pub fn render_play(frame: &mut Frame, area: Rect, view: &Viewport, status: &PlayStatus) {
    frame.render_widget(Clear, area);

    let grid_w = u16::try_from(view.width())
        .unwrap_or(u16::MAX)
        .saturating_add(2);
    let grid_h = u16::try_from(view.height())
        .unwrap_or(u16::MAX)
        .saturating_add(2);
    let status_h: u16 = if status.message.is_some() { 4 } else { 3 };
    let outer = centered(area, grid_w.max(44), grid_h.saturating_add(status_h));

    let grid_area = Rect {
        x: outer.x + (outer.width.saturating_sub(grid_w)) / 2,
        width: grid_w.min(outer.width),
        height: grid_h.min(outer.height),
        ..outer
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(Paragraph::new(viewport_lines(view)).block(block), grid_area);

    let mut y = grid_area.y + grid_area.height;
    let bottom = outer.y + outer.height;
    if y < bottom {
        let score_line = Line::from(vec![
            Span::styled("Score: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                status.score.to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("   Best: ", Style::default().fg(Color::DarkGray)),
            Span::styled(status.best.to_string(), Style::default().fg(Color::Yellow)),
        ]);
        frame.render_widget(
            Paragraph::new(score_line).alignment(ratatui::layout::Alignment::Center),
            Rect::new(outer.x, y, outer.width, 1),
        );
        y += 1;
    }

    if y < bottom {
        let text = status.message.unwrap_or("");
        render_status_bar(
            frame,
            Rect::new(outer.x, y, outer.width, bottom - y),
            text,
            status.message_color,
            status.controls,
        );
    }
}
