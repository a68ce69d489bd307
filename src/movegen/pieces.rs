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

// pieces.rs enumerates pseudo-moves: moves following piece geometry while
// ignoring whether the own king ends up attacked. The sliding pieces
// share one ray-walking routine parameterized by direction set.

use super::defs::{CastlingSide, Move, MoveList};
use super::is_field_attacked;
use crate::board::defs::{Color, Figure, PieceKind};
use crate::board::field::Field;
use crate::board::Board;
use crate::defs::Castling;

const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, 1), (1, -1)];
const ROOK_DIRECTIONS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, 1), (0, -1)];
const KNIGHT_JUMPS: [(i8, i8); 8] = [
    (2, -1),
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, -1),
    (-2, 1),
    (1, -2),
    (-1, -2),
];
const KING_STEPS: [(i8, i8); 8] = [
    (-1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, -1),
];

// Promotion fan-out order.
const PROMOTION_KINDS: [PieceKind; 4] = [
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
    PieceKind::Queen,
];

// All pseudo-moves for the figure standing on "from"; empty if the field
// is empty. Castling generation is switched off while answering "is this
// field attacked", because castling can never capture.
pub fn pseudo_moves(board: &Board, from: Field, with_castling: bool) -> MoveList {
    let mut moves = MoveList::new();
    let figure = match board.get_figure(from) {
        Some(f) => f,
        None => return moves,
    };

    match figure.kind {
        PieceKind::Pawn => pawn_moves(board, from, figure.color, &mut moves),
        PieceKind::Knight => leaper_moves(board, from, figure.color, &KNIGHT_JUMPS, &mut moves),
        PieceKind::Bishop => slider_moves(board, from, figure.color, &BISHOP_DIRECTIONS, &mut moves),
        PieceKind::Rook => slider_moves(board, from, figure.color, &ROOK_DIRECTIONS, &mut moves),
        PieceKind::Queen => {
            slider_moves(board, from, figure.color, &BISHOP_DIRECTIONS, &mut moves);
            slider_moves(board, from, figure.color, &ROOK_DIRECTIONS, &mut moves);
        }
        PieceKind::King => {
            leaper_moves(board, from, figure.color, &KING_STEPS, &mut moves);
            if with_castling {
                castling_moves(board, from, figure.color, &mut moves);
            }
        }
    }

    moves
}

// Single-step and jumping pieces: knight and king.
fn leaper_moves(
    board: &Board,
    from: Field,
    color: Color,
    offsets: &[(i8, i8)],
    moves: &mut MoveList,
) {
    for &(df, dr) in offsets {
        if let Some(to) = from.offset(df, dr) {
            match board.get_figure(to) {
                None => moves.push(Move::new(from, to)),
                Some(f) if f.color != color => {
                    let mut m = Move::new(from, to);
                    m.figure_beaten = true;
                    moves.push(m);
                }
                Some(_) => (),
            }
        }
    }
}

// Ray walkers: bishop, rook, and the queen via both direction sets.
// Slide until blocked; the blocker's square is included iff it holds an
// opponent piece.
fn slider_moves(
    board: &Board,
    from: Field,
    color: Color,
    directions: &[(i8, i8)],
    moves: &mut MoveList,
) {
    for &(df, dr) in directions {
        let mut current = from;
        while let Some(to) = current.offset(df, dr) {
            match board.get_figure(to) {
                None => {
                    moves.push(Move::new(from, to));
                    current = to;
                }
                Some(f) => {
                    if f.color != color {
                        let mut m = Move::new(from, to);
                        m.figure_beaten = true;
                        moves.push(m);
                    }
                    break;
                }
            }
        }
    }
}

// A pawn landing on the last rank produces one distinct move per
// promotion piece.
fn push_pawn_move(moves: &mut MoveList, from: Field, to: Field, capture: bool, promo_rank: u8) {
    if to.rank() == promo_rank {
        for kind in PROMOTION_KINDS {
            let mut m = Move::with_promotion(from, to, kind);
            m.figure_beaten = capture;
            moves.push(m);
        }
    } else {
        let mut m = Move::new(from, to);
        m.figure_beaten = capture;
        moves.push(m);
    }
}

fn pawn_moves(board: &Board, from: Field, color: Color, moves: &mut MoveList) {
    let (dir, start_rank, promo_rank) = match color {
        Color::White => (1i8, 1u8, 7u8),
        Color::Black => (-1i8, 6u8, 0u8),
    };

    // Forward one if empty; forward two from the starting rank if both
    // squares are empty.
    if let Some(one) = from.offset(0, dir) {
        if board.get_figure(one).is_none() {
            push_pawn_move(moves, from, one, false, promo_rank);
            if from.rank() == start_rank {
                if let Some(two) = from.offset(0, 2 * dir) {
                    if board.get_figure(two).is_none() {
                        moves.push(Move::new(from, two));
                    }
                }
            }
        }
    }

    // Diagonal captures.
    for df in [-1i8, 1] {
        if let Some(to) = from.offset(df, dir) {
            if let Some(victim) = board.get_figure(to) {
                if victim.color != color {
                    push_pawn_move(moves, from, to, true, promo_rank);
                }
            }
        }
    }

    // En-passant: only from rank 5 (White) or rank 4 (Black), onto the
    // file of the pawn that just advanced two squares.
    if let Some(ep_file) = board.game_state.en_passant {
        let ep_rank = match color {
            Color::White => 4,
            Color::Black => 3,
        };
        if from.rank() == ep_rank {
            for df in [-1i8, 1] {
                if from.file() as i8 + df == ep_file as i8 {
                    if let Some(to) = from.offset(df, dir) {
                        let mut m = Move::new(from, to);
                        m.figure_beaten = true;
                        moves.push(m);
                    }
                }
            }
        }
    }
}

// Castling eligibility. Any failed condition silently excludes the move;
// the legality filter never sees it.
fn castling_moves(board: &Board, from: Field, color: Color, moves: &mut MoveList) {
    let (home_rank, kingside_right, queenside_right) = match color {
        Color::White => (0u8, Castling::WK, Castling::WQ),
        Color::Black => (7u8, Castling::BK, Castling::BQ),
    };
    let home = |file: u8| Field::from_index(home_rank as usize * 8 + file as usize);

    // The right may still be held while the king was placed elsewhere by
    // hand or by a permissive FEN; the home-square check covers that.
    if from != home(4) {
        return;
    }

    let enemy = !color;
    let own_rook = Figure::new(PieceKind::Rook, color);

    if board.game_state.castling & kingside_right != 0 {
        let f = home(5);
        let g = home(6);
        if board.get_figure(home(7)) == Some(own_rook)
            && board.get_figure(f).is_none()
            && board.get_figure(g).is_none()
            && !is_field_attacked(board, from, enemy)
            && !is_field_attacked(board, f, enemy)
            && !is_field_attacked(board, g, enemy)
        {
            moves.push(Move::with_castling(from, g, CastlingSide::Kingside));
        }
    }

    if board.game_state.castling & queenside_right != 0 {
        let d = home(3);
        let c = home(2);
        let b = home(1);
        if board.get_figure(home(0)) == Some(own_rook)
            && board.get_figure(d).is_none()
            && board.get_figure(c).is_none()
            && board.get_figure(b).is_none()
            && !is_field_attacked(board, from, enemy)
            && !is_field_attacked(board, d, enemy)
            && !is_field_attacked(board, c, enemy)
        {
            moves.push(Move::with_castling(from, c, CastlingSide::Queenside));
        }
    }
}
