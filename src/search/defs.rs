/* =======================================================================
Woodpusher is a chess playing engine.

Woodpusher is free software: you can redistribute it and/or modify it
under the terms of the GNU General Public License version 3 as published
by the Free Software Foundation.

Woodpusher is distributed in the hope that it will be useful, but WITHOUT
ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or
FITNESS FOR A PARTICULAR PURPOSE. See the GNU General Public License for
more details.
======================================================================= */

use crate::board::defs::GameStatus;
use crate::movegen::defs::Move;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};
use thiserror::Error;

pub const DEFAULT_SEARCH_DEPTH: u8 = 3;
pub const DEFAULT_MAX_THREADS: usize = 5;

// Sentinel beyond any reachable material value or mate distance.
pub const BORDER_VALUE: i32 = 1000;

#[derive(Debug, Clone, Copy)]
pub struct SearchParams {
    pub depth: u8,
    pub max_threads: usize,
    pub time_budget: Option<Duration>,
}

impl SearchParams {
    pub fn new() -> Self {
        Self {
            depth: DEFAULT_SEARCH_DEPTH,
            max_threads: DEFAULT_MAX_THREADS,
            time_budget: None,
        }
    }
}

impl Default for SearchParams {
    fn default() -> Self {
        Self::new()
    }
}

// What a node is worth once its subtree has been folded: the material
// balance (white minus black) and the signed mate distance. A positive
// mate distance means White forces mate in that many plies, a negative
// one means Black does; zero means no forced mate within the horizon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Eval {
    pub value: i32,
    pub moves_to_mate: i32,
}

// A root move with its finished (or cancelled-partway) evaluation.
#[derive(Debug, Clone, Copy)]
pub struct RootEval {
    pub m: Move,
    pub eval: Eval,
}

// The extremes over a set of sibling evaluations. Material extremes are
// tracked over mate-free children only; the mate extremes over the rest.
#[derive(Debug, Clone, Copy)]
pub struct BorderValues {
    pub smallest_value: i32,
    pub biggest_value: i32,
    pub smallest_mate_value: i32,
    pub biggest_mate_value: i32,
    pub smallest_positive_mate_value: i32,
    pub biggest_negative_mate_value: i32,
    pub zero_mate_value_exists: bool,
}

impl BorderValues {
    pub fn new() -> Self {
        Self {
            smallest_value: BORDER_VALUE,
            biggest_value: -BORDER_VALUE,
            smallest_mate_value: BORDER_VALUE,
            biggest_mate_value: -BORDER_VALUE,
            smallest_positive_mate_value: BORDER_VALUE,
            biggest_negative_mate_value: -BORDER_VALUE,
            zero_mate_value_exists: false,
        }
    }

    pub fn add(&mut self, eval: Eval) {
        if eval.moves_to_mate == 0 {
            self.zero_mate_value_exists = true;
            self.biggest_value = self.biggest_value.max(eval.value);
            self.smallest_value = self.smallest_value.min(eval.value);
            return;
        }
        self.smallest_mate_value = self.smallest_mate_value.min(eval.moves_to_mate);
        self.biggest_mate_value = self.biggest_mate_value.max(eval.moves_to_mate);
        if eval.moves_to_mate > 0 {
            self.smallest_positive_mate_value =
                self.smallest_positive_mate_value.min(eval.moves_to_mate);
        } else {
            self.biggest_negative_mate_value =
                self.biggest_negative_mate_value.max(eval.moves_to_mate);
        }
    }
}

impl Default for BorderValues {
    fn default() -> Self {
        Self::new()
    }
}

// The cancellation flag. Workers poll it between child expansions; once
// the deadline has passed the flag latches, so setting it is idempotent
// and checking it after that is free.
pub struct Expiry {
    deadline: Option<Instant>,
    expired: AtomicBool,
}

impl Expiry {
    pub fn new(budget: Option<Duration>) -> Self {
        Self {
            deadline: budget.map(|b| Instant::now() + b),
            expired: AtomicBool::new(false),
        }
    }

    pub fn is_expired(&self) -> bool {
        if self.expired.load(Ordering::Relaxed) {
            return true;
        }
        match self.deadline {
            Some(deadline) if Instant::now() >= deadline => {
                self.expired.store(true, Ordering::Relaxed);
                true
            }
            _ => false,
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error("cannot search a finished game ({0})")]
    BadBoardStatus(GameStatus),
    #[error("no legal moves to search")]
    NoLegalMoves,
}
