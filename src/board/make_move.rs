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

// make_move.rs contains move execution. make_move() is the authoritative
// path: it validates against the legal-move list, notifies observers and
// reports the game status. make_reversible_move() performs the same state
// change silently and hands back a token that restores the exact
// pre-move state when it goes out of scope; the search runs entirely on
// that mechanism.

use super::defs::{BoardError, Color, Figure, GameStatus, PieceKind};
use super::field::Field;
use super::gamestate::GameState;
use super::Board;
use crate::defs::{Castling, NrOf};
use crate::movegen;
use crate::movegen::defs::Move;

impl Board {
    pub fn make_move(
        &mut self,
        from: Field,
        to: Field,
        promotion: Option<PieceKind>,
    ) -> Result<GameStatus, BoardError> {
        let figure = self.get_figure(from).ok_or(BoardError::NoFigure(from))?;
        if figure.color != self.game_state.active_color {
            return Err(BoardError::IllegalMove { figure, from, to });
        }
        let status = self.game_status();
        if status != GameStatus::Ongoing {
            return Err(BoardError::BadStatus(status));
        }

        // The move must appear among the legal moves of the figure. Move
        // equality is (from, to, promotion), so a missing or nonsensical
        // promotion piece simply fails to match anything.
        let mut wanted = Move::new(from, to);
        wanted.promotion = promotion;
        let m = movegen::legal_moves_annotated(self, figure.color)
            .iter()
            .find(|legal| **legal == wanted)
            .copied()
            .ok_or(BoardError::IllegalMove { figure, from, to })?;

        let captured = self.apply_move(&m, figure);
        if let Some(victim_field) = captured {
            self.notify_figure_removed(victim_field);
        }
        self.notify_figure_moved(&m);

        let status = self.game_status();
        if status != GameStatus::Ongoing {
            self.notify_game_finished(status);
        }
        Ok(status)
    }

    // The reversible variant validates occupancy only: the legality
    // filter itself uses it to try out pseudo-moves.
    pub fn make_reversible_move(&mut self, m: &Move) -> Result<ReversibleMove<'_>, BoardError> {
        if self.get_figure(m.from).is_none() {
            return Err(BoardError::NoFigure(m.from));
        }
        Ok(self.speculate(m))
    }

    pub(crate) fn speculate(&mut self, m: &Move) -> ReversibleMove<'_> {
        debug_assert!(self.get_figure(m.from).is_some());
        let squares = self.squares;
        let state = self.game_state;
        if let Some(figure) = self.get_figure(m.from) {
            self.apply_move(m, figure);
        }
        ReversibleMove {
            board: self,
            squares,
            state,
        }
    }

    // The silent core shared by both paths. Returns the field a captured
    // figure was removed from, if any.
    fn apply_move(&mut self, m: &Move, figure: Figure) -> Option<Field> {
        let us = figure.color;

        // A capture removes the figure on the target square or, for a
        // pawn moving diagonally onto an empty square, the en-passant
        // victim on the adjacent file of the pawn's own rank.
        let mut captured = None;
        if self.squares[m.to.index()].is_some() {
            captured = Some(m.to);
        } else if figure.kind == PieceKind::Pawn && m.from.file() != m.to.file() {
            captured = Some(Field::from_index(
                m.from.rank() as usize * 8 + m.to.file() as usize,
            ));
        }
        if let Some(victim_field) = captured {
            self.squares[victim_field.index()] = None;
        }

        // The displacement; a promoting pawn changes kind as it lands.
        self.squares[m.from.index()] = None;
        let landed = match m.promotion {
            Some(kind) if figure.kind == PieceKind::Pawn => Figure::new(kind, us),
            _ => figure,
        };
        self.squares[m.to.index()] = Some(landed);

        // Castling is recognized from the king's two-file jump, so a
        // hand-built move record behaves exactly like a generated one.
        // The rook follows the king; the king move then clears both of
        // its color's rights.
        if figure.kind == PieceKind::King {
            if m.from.file() == 4 && (m.to.file() == 6 || m.to.file() == 2) {
                let rank_base = m.from.rank() as usize * 8;
                let (rook_from, rook_to) = if m.to.file() == 6 {
                    (rank_base + 7, rank_base + 5)
                } else {
                    (rank_base, rank_base + 3)
                };
                if let Some(rook) = self.squares[rook_from].take() {
                    self.squares[rook_to] = Some(rook);
                }
            }
            let mask = match us {
                Color::White => Castling::WK | Castling::WQ,
                Color::Black => Castling::BK | Castling::BQ,
            };
            self.game_state.castling &= !mask;
        }

        // A rook leaving its home square clears the matching right.
        if figure.kind == PieceKind::Rook {
            let cleared = match (m.from.index(), us) {
                (0, Color::White) => Castling::WQ,
                (7, Color::White) => Castling::WK,
                (56, Color::Black) => Castling::BQ,
                (63, Color::Black) => Castling::BK,
                _ => Castling::NONE,
            };
            self.game_state.castling &= !cleared;
        }

        // Only a two-square pawn advance leaves an en-passant file.
        let two_square = figure.kind == PieceKind::Pawn
            && (m.from.rank() as i8 - m.to.rank() as i8).abs() == 2;
        self.game_state.en_passant = if two_square { Some(m.from.file()) } else { None };

        // Clock update: pawn moves and captures reset it; otherwise it
        // ticks when Black completes the move pair.
        if figure.kind == PieceKind::Pawn || captured.is_some() {
            self.game_state.halfmove_clock = 0;
        } else if us == Color::Black {
            self.game_state.halfmove_clock = self.game_state.halfmove_clock.saturating_add(1);
        }
        if us == Color::Black {
            self.game_state.fullmove_number += 1;
        }

        self.game_state.active_color = !us;
        captured
    }
}

// The scoped token returned by make_reversible_move(). Dropping it, on
// any exit path, restores the snapshot taken before the move: figures,
// en-passant file, castling rights, side to move and both clocks.
pub struct ReversibleMove<'a> {
    board: &'a mut Board,
    squares: [Option<Figure>; NrOf::SQUARES],
    state: GameState,
}

impl ReversibleMove<'_> {
    pub(crate) fn board(&self) -> &Board {
        self.board
    }

    pub(crate) fn board_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for ReversibleMove<'_> {
    fn drop(&mut self) {
        self.board.squares = self.squares;
        self.board.game_state = self.state;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defs::FEN_START_POSITION;
    use pretty_assertions::assert_eq;

    fn board_from(fen: &str) -> Board {
        let mut board = Board::new();
        board.fen_read(fen).unwrap();
        board
    }

    fn field(s: &str) -> Field {
        s.parse().unwrap()
    }

    #[test]
    fn reversible_move_restores_the_exact_pre_state() {
        let mut board = board_from("r3k2r/1P6/8/3pP3/8/8/8/R3K2R w KQkq d6 0 12");
        let reference = board.clone();

        for m in movegen::legal_moves_basic(&board, Color::White) {
            let undo = board.make_reversible_move(&m).unwrap();
            drop(undo);
            assert_eq!(board, reference, "move {} did not restore", m);
        }
    }

    #[test]
    fn moving_into_empty_field_fails_with_no_figure() {
        let mut board = Board::new();
        let err = board.make_move(field("c2"), field("d3"), None).unwrap_err();
        assert_eq!(err, BoardError::NoFigure(field("c2")));
    }

    #[test]
    fn illegal_move_reports_the_figure() {
        let mut board = Board::new();
        board
            .add_figure(PieceKind::Bishop, Color::White, field("d2"))
            .unwrap();
        board
            .add_figure(PieceKind::King, Color::White, field("a1"))
            .unwrap();
        board
            .add_figure(PieceKind::King, Color::Black, field("d8"))
            .unwrap();
        board
            .add_figure(PieceKind::Rook, Color::Black, field("e8"))
            .unwrap();
        let err = board.make_move(field("d2"), field("c2"), None).unwrap_err();
        assert!(matches!(err, BoardError::IllegalMove { figure, .. }
            if figure.kind == PieceKind::Bishop));
        // The failed attempt must not have changed anything.
        assert!(board.get_figure(field("d2")).is_some());
    }

    #[test]
    fn castling_moves_both_king_and_rook_and_clears_rights() {
        let mut board = board_from("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
        board.make_move(field("e1"), field("g1"), None).unwrap();
        assert_eq!(
            board.get_figure(field("g1")).map(|f| f.kind),
            Some(PieceKind::King)
        );
        assert_eq!(
            board.get_figure(field("f1")).map(|f| f.kind),
            Some(PieceKind::Rook)
        );
        assert!(board.get_figure(field("h1")).is_none());
        assert_eq!(
            board.game_state.castling,
            Castling::BK | Castling::BQ
        );

        board.make_move(field("e8"), field("c8"), None).unwrap();
        assert_eq!(
            board.get_figure(field("c8")).map(|f| f.kind),
            Some(PieceKind::King)
        );
        assert_eq!(
            board.get_figure(field("d8")).map(|f| f.kind),
            Some(PieceKind::Rook)
        );
        assert_eq!(board.game_state.castling, Castling::NONE);
    }

    #[test]
    fn rook_moves_clear_only_their_side() {
        let mut board = board_from("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
        board.make_move(field("h1"), field("h2"), None).unwrap();
        assert_eq!(
            board.game_state.castling,
            Castling::WQ | Castling::BK | Castling::BQ
        );
        board.make_move(field("a8"), field("a7"), None).unwrap();
        assert_eq!(board.game_state.castling, Castling::WQ | Castling::BK);
    }

    #[test]
    fn en_passant_capture_removes_the_passed_pawn() {
        let mut board = board_from("4k3/8/8/8/4p3/8/3P4/4K3 w - - 0 1");
        board.make_move(field("d2"), field("d4"), None).unwrap();
        assert_eq!(board.en_passant_file(), Some(3));

        board.make_move(field("e4"), field("d3"), None).unwrap();
        assert!(board.get_figure(field("d4")).is_none());
        assert_eq!(
            board.get_figure(field("d3")).map(|f| f.kind),
            Some(PieceKind::Pawn)
        );
        // The capture consumed the en-passant file.
        assert_eq!(board.en_passant_file(), None);
    }

    #[test]
    fn promotion_requires_a_sensible_piece() {
        let fen = "4k3/P7/8/8/8/8/8/4K3 w - - 0 1";
        let mut board = board_from(fen);
        assert!(board.make_move(field("a7"), field("a8"), None).is_err());
        let mut board = board_from(fen);
        assert!(board
            .make_move(field("a7"), field("a8"), Some(PieceKind::Pawn))
            .is_err());
        let mut board = board_from(fen);
        assert!(board
            .make_move(field("a7"), field("a8"), Some(PieceKind::King))
            .is_err());
        let mut board = board_from(fen);
        board
            .make_move(field("a7"), field("a8"), Some(PieceKind::Queen))
            .unwrap();
        assert_eq!(
            board.get_figure(field("a8")).map(|f| f.kind),
            Some(PieceKind::Queen)
        );
    }

    #[test]
    fn full_move_number_grows_after_black_moves() {
        let mut board = board_from(FEN_START_POSITION);
        assert_eq!(board.game_state.fullmove_number, 1);
        board.make_move(field("g1"), field("f3"), None).unwrap();
        assert_eq!(board.game_state.fullmove_number, 1);
        board.make_move(field("g8"), field("f6"), None).unwrap();
        assert_eq!(board.game_state.fullmove_number, 2);
    }

    #[test]
    fn speculation_does_not_notify_observers() {
        use crate::board::BoardObserver;
        use crate::board::defs::GameStatus;
        use std::sync::atomic::{AtomicUsize, Ordering};
        use std::sync::Arc;

        struct Counter(Arc<AtomicUsize>);
        impl BoardObserver for Counter {
            fn figure_added(&mut self, _: PieceKind, _: Color, _: Field) {
                self.0.fetch_add(1, Ordering::Relaxed);
            }
            fn figure_removed(&mut self, _: Field) {
                self.0.fetch_add(1, Ordering::Relaxed);
            }
            fn figure_moved(&mut self, _: &Move) {
                self.0.fetch_add(1, Ordering::Relaxed);
            }
            fn game_finished(&mut self, _: GameStatus) {
                self.0.fetch_add(1, Ordering::Relaxed);
            }
        }

        let mut board = board_from(FEN_START_POSITION);
        let count = Arc::new(AtomicUsize::new(0));
        board.add_observer(Box::new(Counter(Arc::clone(&count))));

        let m = Move::new(field("e2"), field("e4"));
        let undo = board.make_reversible_move(&m).unwrap();
        drop(undo);
        assert_eq!(count.load(Ordering::Relaxed), 0);

        board.make_move(field("e2"), field("e4"), None).unwrap();
        assert_eq!(count.load(Ordering::Relaxed), 1);
    }
}
