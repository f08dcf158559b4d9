//! Title and help screen.

use super::game_common::{centered, render_banner, render_status_bar};
use crate::sim::WorldConfig;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::{Clear, Paragraph},
    Frame,
};

pub fn render_title(frame: &mut Frame, area: Rect, config: &WorldConfig, best: u32) {
    frame.render_widget(Clear, area);
    let area = centered(area, 48, 13);

    let used = render_banner(frame, area, Color::Cyan);
    let body = Rect {
        y: area.y + used,
        height: area.height.saturating_sub(used),
        ..area
    };

    let mut lines = vec![
        Line::from(""),
        Line::from(format!(
            "Visible area: bottom {} rows (of {} total).",
            config.view_height, config.height
        )),
        Line::from(format!("Goal: survive and reach {} points.", config.win_score)),
        Line::from("Controls: 1 = flap, 2 = fall, 9 = quit."),
    ];
    if best > 0 {
        lines.push(Line::from(""));
        lines.push(Line::from(format!("Best this session: {}", best)));
    }
    frame.render_widget(
        Paragraph::new(lines).style(Style::default().fg(Color::White)),
        body,
    );

    let footer = Rect {
        y: area.y + area.height.saturating_sub(2),
        height: area.height.min(2),
        ..area
    };
    render_status_bar(
        frame,
        footer,
        "Press any key to start...",
        Color::Yellow,
        &[("[9/Esc]", "Quit")],
    );
}
