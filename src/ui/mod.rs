//! Terminal rendering, one scene per session screen.

pub mod game_common;
pub mod play_scene;
pub mod title_scene;
pub mod victory_scene;

use crate::session::{Screen, Session};
use play_scene::{render_play, PlayStatus};
use rand::Rng;
use ratatui::{style::Color, Frame};

const PLAY_CONTROLS: &[(&str, &str)] = &[("[1]", "Flap"), ("[2]", "Fall"), ("[9]", "Quit")];
const CRASH_CONTROLS: &[(&str, &str)] = &[("Play again?", "(y/n)")];
const WON_CONTROLS: &[(&str, &str)] = &[("[Any key]", "Continue")];

/// Draw whichever screen the session is on.
pub fn draw<R: Rng>(frame: &mut Frame, session: &Session<R>) {
    let area = frame.size();
    let best = session.scoreboard.best();

    match session.screen {
        Screen::Title => title_scene::render_title(frame, area, &session.config, best),
        Screen::Playing | Screen::Crashed | Screen::Won => {
            let (controls, message_color) = match session.screen {
                Screen::Crashed => (CRASH_CONTROLS, Color::Red),
                Screen::Won => (WON_CONTROLS, Color::Green),
                _ => (PLAY_CONTROLS, Color::White),
            };
            let status = PlayStatus {
                score: session.sim.score(),
                best,
                message: session.message.as_deref(),
                message_color,
                controls,
            };
            render_play(frame, area, &session.sim.viewport(), &status);
        }
        Screen::Victory => {
            victory_scene::render_victory(frame, area, session.config.win_score, best)
        }
        Screen::Exit => {}
    }
}
