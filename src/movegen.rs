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

// movegen.rs produces legal moves in two phases. Phase A asks the figure
// on a field for its pseudo-moves (geometry only). Phase B applies each
// pseudo-move through the reversible mechanism and keeps it only when the
// moving side's king is not attacked afterwards.

pub mod defs;
mod pieces;

use crate::board::defs::Color;
use crate::board::field::Field;
use crate::board::Board;
use defs::MoveList;

pub(crate) use pieces::pseudo_moves;

// "Attacked" means: the target field appears among the destinations of
// some pseudo-move of the given color. This is the same routine that
// answers "is the king in check"; castling is excluded since it can
// never capture.
pub fn is_field_attacked(board: &Board, target: Field, by: Color) -> bool {
    board.figures().any(|(field, figure)| {
        figure.color == by
            && pseudo_moves(board, field, false)
                .iter()
                .any(|m| m.to == target)
    })
}

pub fn is_king_attacked(board: &Board, color: Color) -> bool {
    match board.king_field(color) {
        Some(king) => is_field_attacked(board, king, !color),
        None => false,
    }
}

// Phase B without annotations: the flags on the returned moves are left
// unset. The search and the status computation call this on every node,
// so it must not pay for the is_mate reply enumeration.
pub(crate) fn legal_moves_basic(board: &Board, color: Color) -> MoveList {
    let mut scratch = board.clone();
    let mut legal = MoveList::new();

    for (field, figure) in board.figures() {
        if figure.color != color {
            continue;
        }
        for m in pseudo_moves(board, field, true) {
            let undo = scratch.speculate(&m);
            if !is_king_attacked(undo.board(), color) {
                legal.push(m);
            }
        }
    }

    legal
}

// Phase B with annotations: every surviving move gets is_check, and, if
// checking, is_mate (the opponent has no legal reply to the check).
pub(crate) fn legal_moves_annotated(board: &Board, color: Color) -> MoveList {
    let mut scratch = board.clone();
    let mut legal = MoveList::new();

    for (field, figure) in board.figures() {
        if figure.color != color {
            continue;
        }
        for m in pseudo_moves(board, field, true) {
            let undo = scratch.speculate(&m);
            if is_king_attacked(undo.board(), color) {
                continue;
            }
            let mut m = m;
            m.is_check = is_king_attacked(undo.board(), !color);
            if m.is_check {
                m.is_mate = legal_moves_basic(undo.board(), !color).is_empty();
            }
            legal.push(m);
        }
    }

    legal
}

#[cfg(test)]
mod tests {
    use super::defs::{CastlingSide, Move};
    use super::*;
    use crate::board::defs::PieceKind;

    fn board_from(fen: &str) -> Board {
        let mut board = Board::new();
        board.fen_read(fen).unwrap();
        board
    }

    fn field(s: &str) -> Field {
        s.parse().unwrap()
    }

    fn targets(board: &Board, from: &str) -> Vec<String> {
        let mut t: Vec<String> = pseudo_moves(board, field(from), true)
            .iter()
            .map(|m| m.to.to_string())
            .collect();
        t.sort();
        t.dedup();
        t
    }

    #[test]
    fn knight_moves_from_corner_and_center() {
        let board = board_from("N7/8/8/4N3/8/8/8/8 w - - 0 1");
        assert_eq!(targets(&board, "a8"), ["b6", "c7"]);
        assert_eq!(
            targets(&board, "e5"),
            ["c4", "c6", "d3", "d7", "f3", "f7", "g4", "g6"]
        );
    }

    #[test]
    fn sliders_stop_at_blockers_and_take_enemies() {
        let board = board_from("8/8/3p4/8/1P1R2p1/8/8/8 w - - 0 1");
        // Rook d4: up to d6 taking the pawn, right to g4 taking the pawn,
        // left stops before the own pawn on b4, down to d1.
        assert_eq!(
            targets(&board, "d4"),
            ["c4", "d1", "d2", "d3", "d5", "d6", "e4", "f4", "g4"]
        );
    }

    #[test]
    fn pawn_double_step_needs_both_squares_empty() {
        let board = board_from("8/8/8/8/4n3/8/P3P3/8 w - - 0 1");
        assert_eq!(targets(&board, "a2"), ["a3", "a4"]);
        assert_eq!(targets(&board, "e2"), ["e3"]);
    }

    #[test]
    fn pawn_promotions_fan_out() {
        let board = board_from("3n4/4P3/8/8/8/8/8/8 w - - 0 1");
        let moves = pseudo_moves(&board, field("e7"), true);
        // Four promotion kinds straight ahead, four more capturing d8.
        assert_eq!(moves.len(), 8);
        assert!(moves.iter().all(|m| m.promotion.is_some()));
        assert!(moves
            .iter()
            .any(|m| m.to == field("d8") && m.figure_beaten));
        assert!(!moves
            .iter()
            .any(|m| m.promotion == Some(PieceKind::King) || m.promotion == Some(PieceKind::Pawn)));
    }

    #[test]
    fn en_passant_capture_is_generated_next_to_the_file() {
        let board = board_from("8/8/8/3pP3/8/8/8/8 w - d6 0 1");
        let moves = pseudo_moves(&board, field("e5"), true);
        let ep = moves.iter().find(|m| m.to == field("d6")).unwrap();
        assert!(ep.figure_beaten);
        // A pawn on the wrong rank may not capture en-passant.
        let board = board_from("8/8/8/8/3pP3/8/8/8 b - e3 0 1");
        assert!(pseudo_moves(&board, field("d4"), true)
            .iter()
            .any(|m| m.to == field("e3") && m.figure_beaten));
        let board = board_from("8/8/8/8/8/3p4/4P3/8 b - e3 0 1");
        assert!(!pseudo_moves(&board, field("d3"), true)
            .iter()
            .any(|m| m.to == field("e3")));
    }

    #[test]
    fn castling_both_sides_when_path_is_free() {
        let board = board_from("8/8/8/8/8/8/8/R3K2R w KQ - 0 1");
        let moves = pseudo_moves(&board, field("e1"), true);
        assert!(moves.contains(&Move::with_castling(
            field("e1"),
            field("g1"),
            CastlingSide::Kingside
        )));
        assert!(moves.contains(&Move::with_castling(
            field("e1"),
            field("c1"),
            CastlingSide::Queenside
        )));
    }

    #[test]
    fn castling_blocked_by_attack_on_crossing_square() {
        // Black rook on f8 covers f1: kingside is out, queenside stays.
        let board = board_from("5r2/8/8/8/8/8/8/R3K2R w KQ - 0 1");
        let moves = pseudo_moves(&board, field("e1"), true);
        assert!(!moves.iter().any(|m| m.to == field("g1")));
        assert!(moves.iter().any(|m| m.to == field("c1")));
    }

    #[test]
    fn castling_needs_the_right_and_the_rook() {
        let no_right = board_from("8/8/8/8/8/8/8/R3K2R w - - 0 1");
        assert!(pseudo_moves(&no_right, field("e1"), true)
            .iter()
            .all(|m| m.castling.is_none()));

        let no_rook = board_from("8/8/8/8/8/8/8/4K2R w KQ - 0 1");
        assert!(!pseudo_moves(&no_rook, field("e1"), true)
            .iter()
            .any(|m| m.to == field("c1")));
    }

    #[test]
    fn queenside_b_file_square_only_needs_to_be_empty() {
        // b1 attacked but empty: queenside castling is still allowed.
        let board = board_from("1r6/8/8/8/8/8/8/R3K3 w Q - 0 1");
        assert!(pseudo_moves(&board, field("e1"), true)
            .iter()
            .any(|m| m.to == field("c1")));
    }

    #[test]
    fn legal_filter_removes_self_check_moves() {
        // The white rook on e2 is pinned against the king by the black
        // rook on e8; it may only move along the e-file.
        let board = board_from("4r3/8/8/8/8/8/4R3/4K3 w - - 0 1");
        let legal = legal_moves_basic(&board, Color::White);
        assert!(legal
            .iter()
            .filter(|m| m.from == field("e2"))
            .all(|m| m.to.file() == 4));
        // And all legal moves are a subset of the pseudo-moves.
        for m in legal.iter() {
            assert!(pseudo_moves(&board, m.from, true).contains(m));
        }
    }

    #[test]
    fn annotations_mark_check_and_mate() {
        // Rf8 is the back-rank mate; a quiet rook move is neither check
        // nor mate, and a rook check the king can step away from is not
        // a mate.
        let board = board_from("k7/8/K7/8/8/8/5R2/8 w - - 0 1");
        let legal = legal_moves_annotated(&board, Color::White);
        let mate = legal.iter().find(|m| m.to == field("f8")).unwrap();
        assert!(mate.is_check && mate.is_mate);
        let quiet = legal.iter().find(|m| m.to == field("e2")).unwrap();
        assert!(!quiet.is_check && !quiet.is_mate);

        let board = board_from("3k4/8/8/8/8/8/5R2/4K3 w - - 0 1");
        let legal = legal_moves_annotated(&board, Color::White);
        let check = legal.iter().find(|m| m.to == field("d2")).unwrap();
        assert!(check.is_check && !check.is_mate);
    }

    #[test]
    fn attack_detection_sees_all_piece_kinds() {
        let board = board_from("8/8/8/8/2p5/1P6/8/N6q b - - 0 1");
        assert!(is_field_attacked(&board, field("b3"), Color::Black)); // pawn takes
        assert!(is_field_attacked(&board, field("h8"), Color::Black)); // queen ray
        assert!(!is_field_attacked(&board, field("g7"), Color::Black));
        assert!(is_field_attacked(&board, field("c2"), Color::White)); // knight
    }
}
