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

// status.rs decides whether the game is over for the side now to move:
// checkmate, stalemate, the 50-move rule, or insufficient material.

use super::defs::{Color, GameStatus, PieceKind};
use super::Board;
use crate::defs::MAX_MOVE_RULE;
use crate::movegen;

impl Board {
    // Status for the side to move.
    pub fn game_status(&self) -> GameStatus {
        let side = self.game_state.active_color;

        if movegen::legal_moves_basic(self, side).is_empty() {
            if movegen::is_king_attacked(self, side) {
                return match side {
                    Color::White => GameStatus::BlackWon,
                    Color::Black => GameStatus::WhiteWon,
                };
            }
            return GameStatus::Draw; // stalemate
        }

        if self.game_state.halfmove_clock >= MAX_MOVE_RULE {
            return GameStatus::Draw;
        }

        if self.is_insufficient_material() {
            return GameStatus::Draw;
        }

        GameStatus::Ongoing
    }

    pub fn is_checkmated(&self, color: Color) -> bool {
        movegen::is_king_attacked(self, color)
            && movegen::legal_moves_basic(self, color).is_empty()
    }

    // Bare kings, king and bishop vs king, or king and knight vs king.
    fn is_insufficient_material(&self) -> bool {
        let mut minor_pieces = 0;
        for (_, figure) in self.figures() {
            match figure.kind {
                PieceKind::King => (),
                PieceKind::Bishop | PieceKind::Knight => minor_pieces += 1,
                _ => return false,
            }
        }
        minor_pieces <= 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_from(fen: &str) -> Board {
        let mut board = Board::new();
        board.fen_read(fen).unwrap();
        board
    }

    #[test]
    fn checkmate_is_a_win_for_the_other_side() {
        // Back-rank mate, Black to move.
        let board = board_from("6rk/5Npp/8/8/8/8/8/6K1 b - - 0 1");
        assert_eq!(board.game_status(), GameStatus::Ongoing);

        let board = board_from("6k1/5ppp/8/8/8/8/8/R5K1 b - - 0 1");
        assert_eq!(board.game_status(), GameStatus::Ongoing);

        let board = board_from("R5k1/5ppp/8/8/8/8/8/6K1 b - - 0 1");
        assert_eq!(board.game_status(), GameStatus::WhiteWon);
        assert!(board.is_checkmated(Color::Black));
    }

    #[test]
    fn stalemate_is_a_draw() {
        // Black king a8 has no moves and is not in check.
        let board = board_from("k7/8/1Q6/8/8/8/8/6K1 b - - 0 1");
        assert_eq!(board.game_status(), GameStatus::Draw);
        assert!(!board.is_checkmated(Color::Black));
    }

    #[test]
    fn fifty_move_rule_draws_the_game() {
        let board = board_from("4k3/8/8/8/8/8/8/R3K3 w - - 50 80");
        assert_eq!(board.game_status(), GameStatus::Draw);
        let board = board_from("4k3/8/8/8/8/8/8/R3K3 w - - 49 80");
        assert_eq!(board.game_status(), GameStatus::Ongoing);
    }

    #[test]
    fn insufficient_material_draws() {
        for fen in [
            "4k3/8/8/8/8/8/8/4K3 w - - 0 1",
            "4k3/8/8/8/8/8/8/2B1K3 w - - 0 1",
            "4k3/8/8/8/8/3n4/8/4K3 w - - 0 1",
        ] {
            assert_eq!(board_from(fen).game_status(), GameStatus::Draw, "{fen}");
        }
        for fen in [
            "4k3/8/8/8/8/8/8/R3K3 w - - 0 1",
            "4k3/8/8/8/8/8/7P/4K3 w - - 0 1",
            "4k3/8/8/8/8/2n5/8/2B1K3 w - - 0 1",
        ] {
            assert_eq!(board_from(fen).game_status(), GameStatus::Ongoing, "{fen}");
        }
    }
}
