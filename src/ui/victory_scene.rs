//! Full-screen win banner shown after a completed run.

use super::game_common::{centered, render_banner, render_status_bar};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph},
    Frame,
};

pub fn render_victory(frame: &mut Frame, area: Rect, win_score: u32, best: u32) {
    frame.render_widget(Clear, area);
    let area = centered(area, 44, 10);

    let used = render_banner(frame, area, Color::Green);
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("You reached {}! Run complete.", win_score),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(format!("Final Best: {}", best)),
    ];
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        Rect {
            y: area.y + used,
            height: area.height.saturating_sub(used),
            ..area
        },
    );

    let footer = Rect {
        y: area.y + area.height.saturating_sub(2),
        height: area.height.min(2),
        ..area
    };
    render_status_bar(
        frame,
        footer,
        "Press any key to exit...",
        Color::DarkGray,
        &[],
    );
}
