//! One run of the game, advanced one command at a time.

use super::collision::{self, TickEvent};
use super::config::WorldConfig;
use super::difficulty;
use super::flight::Flyer;
use super::grid::{self, Viewport};
use super::pipes::PipeField;
use rand::Rng;

/// Where a run stands after a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    Running,
    Crashed,
    Won,
}

impl RunStatus {
    /// Resolve the status at the end of a tick. A win outranks a crash.
    pub fn after_tick(score: u32, crashed: bool, win_score: u32) -> Self {
        if score >= win_score {
            RunStatus::Won
        } else if crashed {
            RunStatus::Crashed
        } else {
            RunStatus::Running
        }
    }

    pub fn is_terminal(self) -> bool {
        self != RunStatus::Running
    }
}

/// Per-run counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunState {
    /// Ticks elapsed this run.
    pub tick: u64,
    /// Gaps passed this run.
    pub score: u32,
}

/// Flyer, pipes and counters for a single run.
#[derive(Debug, Clone)]
pub struct Simulation {
    pub config: WorldConfig,
    pub flyer: Flyer,
    pub pipes: PipeField,
    pub run: RunState,
    pub status: RunStatus,
}

impl Simulation {
    /// Start a fresh run. `config` must already be validated.
    pub fn new(config: WorldConfig) -> Self {
        let flyer = Flyer::new(&config);
        Self {
            config,
            flyer,
            pipes: PipeField::new(),
            run: RunState::default(),
            status: RunStatus::Running,
        }
    }

    pub fn score(&self) -> u32 {
        self.run.score
    }

    /// Advance one tick with the given command. Terminal runs are left as-is.
    pub fn step<R: Rng>(&mut self, flapped: bool, rng: &mut R) -> RunStatus {
        if self.status.is_terminal() {
            return self.status;
        }

        self.flyer.integrate(&self.config, flapped);

        let score = self.run.score;
        if self.run.tick % difficulty::spawn_every(&self.config, score) == 0 {
            let pipe = self.pipes.spawn(&self.config, score, rng);
            log::debug!(
                "tick {}: spawned pipe gap {}..{}",
                self.run.tick,
                pipe.gap_top,
                pipe.gap_top + pipe.gap_h
            );
        }
        self.pipes.advance();

        let event = collision::evaluate(&self.config, &self.flyer, &self.pipes);
        if event == TickEvent::Scored {
            self.run.score += 1;
            log::debug!("tick {}: scored, now {}", self.run.tick, self.run.score);
        }

        self.run.tick += 1;

        self.status = RunStatus::after_tick(
            self.run.score,
            event == TickEvent::Crashed,
            self.config.win_score,
        );
        match self.status {
            RunStatus::Won => log::info!(
                "run won with {} points after {} ticks",
                self.run.score,
                self.run.tick
            ),
            RunStatus::Crashed => log::info!(
                "run crashed with {} points after {} ticks",
                self.run.score,
                self.run.tick
            ),
            RunStatus::Running => {}
        }
        self.status
    }

    /// The visible grid for the current state.
    pub fn viewport(&self) -> Viewport {
        grid::render(&self.config, &self.flyer, &self.pipes)
    }
}
