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

// search.rs contains the engine's search routine: a fixed-depth minimax
// over the full game tree, one worker per root move, with mate-distance
// accounting. A player prefers to mate in the fewest plies; failing
// that, material; and when being mated, delays it as long as possible.

pub mod defs;
mod tree;
mod worker;

use crate::board::defs::{Color, GameStatus};
use crate::board::Board;
use crate::misc::log::DebugLog;
use crate::movegen;
use crate::movegen::defs::Move;
use defs::{BorderValues, Expiry, RootEval, SearchError, SearchParams, BORDER_VALUE};
use parking_lot::Mutex;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::thread;
use worker::WorkerCount;

pub struct Search {
    pub params: SearchParams,
    rng: SmallRng,
}

impl Search {
    pub fn new(params: SearchParams) -> Self {
        Self {
            params,
            rng: SmallRng::from_entropy(),
        }
    }

    // The deterministic twin for tests: same search, fixed tie-breaks.
    pub fn with_seed(params: SearchParams, seed: u64) -> Self {
        Self {
            params,
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    // Picks a legal move for the side to move. Every root move gets its
    // own worker; a counting condition keeps at most max_threads of them
    // running; the main thread joins them all and reduces the published
    // evaluations.
    pub fn best_move(&mut self, board: &Board, log: &mut DebugLog) -> Result<Move, SearchError> {
        let status = board.game_status();
        if status != GameStatus::Ongoing {
            return Err(SearchError::BadBoardStatus(status));
        }

        let side = board.side_to_move();
        let root_moves = movegen::legal_moves_basic(board, side);
        if root_moves.is_empty() {
            return Err(SearchError::NoLegalMoves);
        }

        let depth = self.params.depth.max(1);
        let max_workers = self.params.max_threads.max(1);
        let expiry = Expiry::new(self.params.time_budget);
        let results = Mutex::new(Vec::with_capacity(root_moves.len()));
        let count = WorkerCount::new();

        log.line(&format!(
            "searching {} root moves to depth {} on up to {} threads",
            root_moves.len(),
            depth,
            max_workers
        ));

        thread::scope(|s| {
            for &m in root_moves.iter() {
                let active = count.acquire(max_workers);
                log.line(&format!("number of working threads: {active}"));

                let clone = board.clone();
                let results = &results;
                let count = &count;
                let expiry = &expiry;
                s.spawn(move || {
                    worker::evaluate_root_move(clone, m, depth, expiry, results);
                    count.release();
                });
            }
            count.wait_all_idle();
        });

        let evaluated = results.into_inner();
        if evaluated.is_empty() {
            // The deadline fired before a single root move finished; any
            // legal move is as good as another now.
            let pick = self.rng.gen_range(0..root_moves.len());
            return Ok(root_moves[pick]);
        }

        Ok(self.select_root_move(board, side, &evaluated, log))
    }

    // Root selection: fastest own mate, else best material among the
    // mate-free moves, else the maximally delayed loss. The surviving
    // candidates are tie-broken by a one-ply re-evaluation, then by a
    // uniform random pick.
    fn select_root_move(
        &mut self,
        board: &Board,
        side: Color,
        evaluated: &[RootEval],
        log: &mut DebugLog,
    ) -> Move {
        let mut borders = BorderValues::new();
        for r in evaluated {
            borders.add(r.eval);
        }

        let mut mate_target = 0;
        match side {
            Color::White => {
                if borders.smallest_positive_mate_value < BORDER_VALUE {
                    mate_target = borders.smallest_positive_mate_value;
                    log.line(&format!("found mate in {}", mate_target / 2 + 1));
                } else if !borders.zero_mate_value_exists {
                    mate_target = borders.smallest_mate_value;
                    log.line(&format!("found opponent's mate in {}", -(mate_target / 2 - 1)));
                }
            }
            Color::Black => {
                if borders.biggest_negative_mate_value > -BORDER_VALUE {
                    mate_target = borders.biggest_negative_mate_value;
                    log.line(&format!("found mate in {}", -mate_target / 2 + 1));
                } else if !borders.zero_mate_value_exists {
                    mate_target = borders.biggest_mate_value;
                    log.line(&format!("found opponent's mate in {}", mate_target / 2 + 1));
                }
            }
        }

        let best_value = match side {
            Color::White => borders.biggest_value,
            Color::Black => borders.smallest_value,
        };
        let mut candidates: Vec<Move> = evaluated
            .iter()
            .filter(|r| {
                if mate_target != 0 {
                    r.eval.moves_to_mate == mate_target
                } else {
                    r.eval.moves_to_mate == 0 && r.eval.value == best_value
                }
            })
            .map(|r| r.m)
            .collect();

        // The survivors go through a one-ply re-evaluation: apply each
        // candidate, let the opponent make their best material reply,
        // and keep the candidates that come out best.
        if candidates.len() > 1 {
            let mut scratch = board.clone();
            let mut best_direct = -BORDER_VALUE;
            let mut keep = Vec::new();
            for m in candidates {
                let score = direct_score(&mut scratch, &m, side);
                if score > best_direct {
                    keep.clear();
                    best_direct = score;
                }
                if score >= best_direct {
                    keep.push(m);
                }
            }
            candidates = keep;
        }

        candidates[self.rng.gen_range(0..candidates.len())]
    }
}

// Material after the opponent's best immediate reply to the move, seen
// from the moving side.
fn direct_score(board: &mut Board, m: &Move, side: Color) -> i32 {
    let mut undo = board.speculate(m);
    let node = undo.board_mut();
    let opponent = !side;

    let mut best: Option<i32> = None;
    for reply in movegen::legal_moves_basic(node, opponent) {
        let after = node.speculate(&reply);
        let value = after.board().material_balance();
        drop(after);
        best = Some(match (best, opponent) {
            (None, _) => value,
            (Some(b), Color::White) => b.max(value),
            (Some(b), Color::Black) => b.min(value),
        });
    }

    let value = best.unwrap_or_else(|| node.material_balance());
    match side {
        Color::White => value,
        Color::Black => -value,
    }
}

#[cfg(test)]
mod tests {
    use super::defs::{SearchError, SearchParams};
    use super::*;
    use std::time::Duration;

    fn board_from(fen: &str) -> Board {
        let mut board = Board::new();
        board.fen_read(fen).unwrap();
        board
    }

    fn search(depth: u8, threads: usize) -> Search {
        let mut params = SearchParams::new();
        params.depth = depth;
        params.max_threads = threads;
        Search::with_seed(params, 7)
    }

    #[test]
    fn refuses_to_search_a_finished_game() {
        // Stalemate: Black to move has nothing.
        let board = board_from("k7/8/1Q6/8/8/8/8/6K1 b - - 0 1");
        let mut s = search(1, 1);
        let err = s.best_move(&board, &mut DebugLog::quiet()).unwrap_err();
        assert!(matches!(err, SearchError::BadBoardStatus(_)));
    }

    #[test]
    fn captures_a_free_queen_at_depth_one() {
        let board = board_from("k7/8/8/8/8/8/3K4/3q4 w - - 0 1");
        let mut s = search(1, 2);
        let m = s.best_move(&board, &mut DebugLog::quiet()).unwrap();
        assert_eq!(m.as_string(), "d2d1");
    }

    #[test]
    fn plays_the_mate_in_one_at_depth_three() {
        // White Kc7, Rf6 vs Black Ka8: Ra6 is mate.
        let board = board_from("k7/2K5/5R2/8/8/8/8/8 w - - 0 1");
        let mut s = search(3, 4);
        let m = s.best_move(&board, &mut DebugLog::quiet()).unwrap();
        assert_eq!(m.as_string(), "f6a6");
    }

    #[test]
    fn a_zero_budget_still_returns_a_legal_move() {
        let board = board_from(crate::defs::FEN_START_POSITION);
        let mut params = SearchParams::new();
        params.depth = 3;
        params.max_threads = 2;
        params.time_budget = Some(Duration::from_millis(0));
        let mut s = Search::with_seed(params, 7);
        let m = s.best_move(&board, &mut DebugLog::quiet()).unwrap();
        assert!(board.is_move_valid(m.from, m.to));
    }
}
