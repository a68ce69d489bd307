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

// worker.rs holds the per-root-move worker and the counting condition
// that bounds how many of them run at once. The dispatcher blocks in
// acquire() while the cap is reached; every worker decrements the count
// and notifies on completion; the final barrier waits for zero.

use super::defs::{Expiry, RootEval};
use super::tree;
use crate::board::Board;
use crate::movegen::defs::Move;
use parking_lot::{Condvar, Mutex};

pub(super) struct WorkerCount {
    active: Mutex<usize>,
    changed: Condvar,
}

impl WorkerCount {
    pub fn new() -> Self {
        Self {
            active: Mutex::new(0),
            changed: Condvar::new(),
        }
    }

    // Blocks until a slot is free, takes it, and reports how many
    // workers are active with the new one included.
    pub fn acquire(&self, max_workers: usize) -> usize {
        let mut active = self.active.lock();
        while *active >= max_workers {
            self.changed.wait(&mut active);
        }
        *active += 1;
        *active
    }

    pub fn release(&self) {
        let mut active = self.active.lock();
        *active -= 1;
        drop(active);
        self.changed.notify_one();
    }

    pub fn wait_all_idle(&self) {
        let mut active = self.active.lock();
        while *active > 0 {
            self.changed.wait(&mut active);
        }
    }
}

// One worker: fold the subtree under the root move on its own clone of
// the board, then publish the result. A worker that only wakes up after
// the deadline publishes nothing, so the dispatcher can tell "no result
// in time" from "partial result".
pub(super) fn evaluate_root_move(
    mut board: Board,
    m: Move,
    depth: u8,
    expiry: &Expiry,
    results: &Mutex<Vec<RootEval>>,
) {
    if expiry.is_expired() {
        return;
    }
    let eval = tree::evaluate_subtree(&mut board, &m, depth - 1, expiry);
    results.lock().push(RootEval { m, eval });
}
