//! Key handling: maps terminal key events to session actions per screen.

use crate::session::{Command, Screen, Session};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use rand::Rng;

/// Map a key to a tick command. Anything that is not a flap or a quit
/// key is a fall, never an error.
pub fn command_for_key(key: &KeyEvent) -> Command {
    if is_interrupt(key) {
        return Command::Quit;
    }
    match key.code {
        KeyCode::Char('1') | KeyCode::Char(' ') | KeyCode::Up => Command::Flap,
        KeyCode::Char('9') | KeyCode::Esc => Command::Quit,
        _ => Command::Fall,
    }
}

fn is_interrupt(key: &KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c')
}

fn is_yes(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('y') | KeyCode::Char('Y'))
}

/// Dispatch a key press according to the current screen.
pub fn handle_key<R: Rng>(session: &mut Session<R>, key: KeyEvent) {
    if is_interrupt(&key) {
        session.quit();
        return;
    }

    match session.screen {
        Screen::Title => {
            if command_for_key(&key) == Command::Quit {
                session.quit();
            } else {
                session.advance_screen();
            }
        }
        Screen::Playing => session.play(command_for_key(&key)),
        Screen::Crashed => session.play_again(is_yes(&key)),
        Screen::Won | Screen::Victory => session.advance_screen(),
        Screen::Exit => {}
    }
}
