//! Pipe generation, scrolling and pruning.

use super::config::WorldConfig;
use super::difficulty;
use rand::Rng;
use std::collections::VecDeque;

/// A single column-wide wall with a passable gap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pipe {
    /// Column; goes negative just before the pipe is pruned.
    pub x: i32,
    /// First row of the gap.
    pub gap_top: i32,
    /// Gap height in rows.
    pub gap_h: i32,
}

impl Pipe {
    /// Whether `row` lies inside the gap `[gap_top, gap_top + gap_h)`.
    pub fn gap_contains(&self, row: i32) -> bool {
        row >= self.gap_top && row < self.gap_top + self.gap_h
    }
}

/// Active pipes, oldest (leftmost) first.
///
/// Every pipe enters at the same column and all move together, so
/// insertion order is also descending `x`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PipeField {
    pipes: VecDeque<Pipe>,
}

impl PipeField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Pipe> {
        self.pipes.iter()
    }

    pub fn len(&self) -> usize {
        self.pipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pipes.is_empty()
    }

    /// The pipe currently in column `x`, if any.
    pub fn at_column(&self, x: i32) -> Option<&Pipe> {
        self.pipes.iter().find(|p| p.x == x)
    }

    /// Append a pipe as-is. Callers must keep the field ordered.
    pub fn push(&mut self, pipe: Pipe) {
        self.pipes.push_back(pipe);
    }

    /// Spawn a new pipe at the right edge with a gap sized for `score`.
    pub fn spawn<R: Rng>(&mut self, config: &WorldConfig, score: u32, rng: &mut R) -> Pipe {
        let gap = difficulty::gap(config, score);
        let top_min = config.view_top().max(1);
        let top_max = config.height - gap - 1;

        let gap_top = if top_min > top_max {
            // Gap too tall to fit with a border row on each side
            (config.view_top() + 1).max(1)
        } else {
            rng.gen_range(top_min..=top_max)
        };

        let pipe = Pipe {
            x: config.width - 1,
            gap_top,
            gap_h: gap,
        };
        self.pipes.push_back(pipe);
        pipe
    }

    /// Scroll every pipe one column left and drop those past the left edge.
    pub fn advance(&mut self) {
        for pipe in &mut self.pipes {
            pipe.x -= 1;
        }
        while self.pipes.front().is_some_and(|p| p.x < -1) {
            self.pipes.pop_front();
        }
    }
}
