//! Replay loop state: title, runs, end-of-run screens and the best score.
//!
//! The simulation only reports a finished run's score; this is the one
//! place the best score is compared and updated.

use crate::sim::{RunStatus, Simulation, WorldConfig};
use rand::Rng;

/// Which screen the player is looking at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Title,
    Playing,
    /// Run ended in a crash; waiting for the play-again answer.
    Crashed,
    /// Run reached the win score; grid still shown with the win message.
    Won,
    /// Full win screen after the final grid; the next key ends the program.
    Victory,
    Exit,
}

/// One discrete player command per tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Flap,
    Fall,
    Quit,
}

impl Command {
    pub fn flapped(self) -> bool {
        self == Command::Flap
    }
}

/// Best score for the lifetime of the process.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Scoreboard {
    best: u32,
}

impl Scoreboard {
    pub fn best(&self) -> u32 {
        self.best
    }

    /// Offer a finished run's score. Returns true on a new best.
    pub fn record(&mut self, score: u32) -> bool {
        if score > self.best {
            self.best = score;
            true
        } else {
            false
        }
    }
}

pub struct Session<R: Rng> {
    pub config: WorldConfig,
    pub sim: Simulation,
    pub scoreboard: Scoreboard,
    pub screen: Screen,
    /// Status line shown under the grid at the end of a run.
    pub message: Option<String>,
    rng: R,
}

impl<R: Rng> Session<R> {
    pub fn new(config: WorldConfig, rng: R) -> Self {
        Self {
            sim: Simulation::new(config.clone()),
            config,
            scoreboard: Scoreboard::default(),
            screen: Screen::Title,
            message: None,
            rng,
        }
    }

    /// Throw away the previous run and start a fresh one.
    pub fn start_run(&mut self) {
        self.sim = Simulation::new(self.config.clone());
        self.message = None;
        self.screen = Screen::Playing;
        log::info!("run started (best so far {})", self.scoreboard.best());
    }

    /// Apply one command to the current run.
    pub fn play(&mut self, command: Command) {
        if self.screen != Screen::Playing {
            return;
        }
        if command == Command::Quit {
            log::info!("player quit mid-run at score {}", self.sim.score());
            self.screen = Screen::Exit;
            return;
        }

        match self.sim.step(command.flapped(), &mut self.rng) {
            RunStatus::Running => {}
            RunStatus::Won => {
                self.scoreboard.record(self.sim.score());
                self.message = Some(format!(
                    "Reached {}! Nice flying.",
                    self.config.win_score
                ));
                self.screen = Screen::Won;
            }
            RunStatus::Crashed => {
                self.scoreboard.record(self.sim.score());
                self.message = Some(format!(
                    "Crash!  Final score: {}   (Best: {})",
                    self.sim.score(),
                    self.scoreboard.best()
                ));
                self.screen = Screen::Crashed;
            }
        }
    }

    /// Answer the play-again prompt after a crash.
    pub fn play_again(&mut self, again: bool) {
        if self.screen == Screen::Crashed {
            self.screen = if again { Screen::Title } else { Screen::Exit };
        }
    }

    /// Move past the title or the win screens.
    pub fn advance_screen(&mut self) {
        let current = self.screen;
        self.screen = match current {
            Screen::Title => {
                self.start_run();
                Screen::Playing
            }
            Screen::Won => Screen::Victory,
            Screen::Victory => Screen::Exit,
            other => other,
        };
    }

    pub fn quit(&mut self) {
        self.screen = Screen::Exit;
    }

    pub fn is_finished(&self) -> bool {
        self.screen == Screen::Exit
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{Flyer, Pipe};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn session() -> Session<ChaCha8Rng> {
        Session::new(WorldConfig::default(), ChaCha8Rng::seed_from_u64(11))
    }

    #[test]
    fn test_scoreboard_keeps_maximum() {
        let mut board = Scoreboard::default();
        assert!(board.record(3));
        assert!(!board.record(2));
        assert!(!board.record(3));
        assert!(board.record(7));
        assert_eq!(board.best(), 7);
    }

    #[test]
    fn test_title_starts_run() {
        let mut session = session();
        assert_eq!(session.screen, Screen::Title);
        session.advance_screen();
        assert_eq!(session.screen, Screen::Playing);
        assert_eq!(session.sim.run.tick, 0);
    }

    #[test]
    fn test_crash_records_best_and_prompts() {
        let mut session = session();
        session.advance_screen();
        session.sim.run.score = 4;
        session.sim.flyer = Flyer { y: 10.4, vy: 1.8 };

        session.play(Command::Fall);
        assert_eq!(session.screen, Screen::Crashed);
        assert_eq!(session.scoreboard.best(), 4);
        assert_eq!(
            session.message.as_deref(),
            Some("Crash!  Final score: 4   (Best: 4)")
        );

        session.play_again(true);
        assert_eq!(session.screen, Screen::Title);
    }

    #[test]
    fn test_new_run_resets_score_but_not_best() {
        let mut session = session();
        session.advance_screen();
        session.sim.run.score = 9;
        session.sim.flyer = Flyer { y: 10.4, vy: 1.8 };
        session.play(Command::Fall);
        session.play_again(true);
        session.advance_screen();

        assert_eq!(session.sim.score(), 0);
        assert_eq!(session.scoreboard.best(), 9);
        assert!(session.message.is_none());
    }

    #[test]
    fn test_declining_play_again_exits() {
        let mut session = session();
        session.advance_screen();
        session.sim.flyer = Flyer { y: 10.4, vy: 1.8 };
        session.play(Command::Fall);
        session.play_again(false);
        assert!(session.is_finished());
    }

    #[test]
    fn test_win_flows_through_victory_to_exit() {
        let config = WorldConfig {
            win_score: 1,
            ..WorldConfig::default()
        };
        let mut session = Session::new(config, ChaCha8Rng::seed_from_u64(2));
        session.advance_screen();
        session.sim.run.tick = 1;
        session.sim.flyer = Flyer { y: 5.0, vy: -0.35 };
        session.sim.pipes.push(Pipe {
            x: 7,
            gap_top: 4,
            gap_h: 3,
        });

        session.play(Command::Fall);
        assert_eq!(session.screen, Screen::Won);
        assert_eq!(session.scoreboard.best(), 1);
        assert_eq!(session.message.as_deref(), Some("Reached 1! Nice flying."));

        session.advance_screen();
        assert_eq!(session.screen, Screen::Victory);
        session.advance_screen();
        assert!(session.is_finished());
        assert_eq!(session.scoreboard.best(), 1);
    }

    #[test]
    fn test_quit_mid_run_exits() {
        let mut session = session();
        session.advance_screen();
        session.play(Command::Quit);
        assert!(session.is_finished());
        assert_eq!(session.sim.run.tick, 0);
    }

    #[test]
    fn test_commands_ignored_outside_play() {
        let mut session = session();
        session.play(Command::Flap);
        assert_eq!(session.screen, Screen::Title);
        assert_eq!(session.sim.run.tick, 0);
    }
}
