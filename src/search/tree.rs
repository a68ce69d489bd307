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

// tree.rs grows and folds one subtree. A node stands for the position
// after its move; expansion enumerates the legal moves of the side then
// to move, down to the depth horizon or a terminal position, and
// back-propagation folds the children into the node as they complete.

use super::defs::{BorderValues, Eval, Expiry, BORDER_VALUE};
use crate::board::defs::{Color, GameStatus};
use crate::board::Board;
use crate::movegen;
use crate::movegen::defs::Move;

// Applies the move reversibly and folds the subtree under it.
// depth_left counts the plies still allowed below the node.
pub(super) fn evaluate_subtree(
    board: &mut Board,
    m: &Move,
    depth_left: u8,
    expiry: &Expiry,
) -> Eval {
    let mut undo = board.speculate(m);
    let node = undo.board_mut();

    if depth_left == 0 || node.game_status() != GameStatus::Ongoing {
        return evaluate_leaf(node);
    }

    let side = node.side_to_move();
    let mut borders = BorderValues::new();
    let mut expanded = 0;

    for child in movegen::legal_moves_basic(node, side) {
        if expiry.is_expired() {
            break;
        }
        let eval = evaluate_subtree(node, &child, depth_left - 1, expiry);
        borders.add(eval);
        expanded += 1;
    }

    if expanded == 0 {
        // Cancelled before the first child finished; the position's own
        // material is the best information there is.
        return evaluate_leaf(node);
    }

    back_propagate(side, &borders)
}

// Leaf evaluation: material count plus immediate-mate detection. Only
// the side to move can be mated here, but checking both colors keeps
// the routine honest on hand-built positions.
fn evaluate_leaf(board: &Board) -> Eval {
    let mut moves_to_mate = 0;
    if board.is_checkmated(Color::White) {
        moves_to_mate = -1;
    }
    if board.is_checkmated(Color::Black) {
        moves_to_mate = 1;
    }
    Eval {
        value: board.material_balance(),
        moves_to_mate,
    }
}

// Folds evaluated children into their parent. The side to move prefers,
// in order: its fastest forced mate; no mate, best material; the most
// delayed mate against it.
pub(super) fn back_propagate(side: Color, borders: &BorderValues) -> Eval {
    let (value, moves_to_mate) = match side {
        Color::White => {
            let moves_to_mate = if borders.smallest_positive_mate_value < BORDER_VALUE {
                borders.smallest_positive_mate_value + 1
            } else if borders.zero_mate_value_exists {
                0
            } else {
                borders.smallest_mate_value - 1
            };
            let value = if borders.zero_mate_value_exists {
                borders.biggest_value
            } else {
                0
            };
            (value, moves_to_mate)
        }
        Color::Black => {
            let moves_to_mate = if borders.biggest_negative_mate_value > -BORDER_VALUE {
                borders.biggest_negative_mate_value - 1
            } else if borders.zero_mate_value_exists {
                0
            } else {
                borders.biggest_mate_value + 1
            };
            let value = if borders.zero_mate_value_exists {
                borders.smallest_value
            } else {
                0
            };
            (value, moves_to_mate)
        }
    };
    Eval {
        value,
        moves_to_mate,
    }
}
