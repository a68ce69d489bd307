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

// fen.rs reads a FEN string into the board and writes the board back out
// as FEN. Parsing is strict: all six fields must be present and well
// formed, and a failing parse leaves the board untouched. Position
// legality is not this module's business; a position with both kings in
// check can be set up just fine.

use super::defs::{Color, Figure, PieceKind};
use super::field::{Field, FILE_NAMES};
use super::Board;
use crate::defs::{Castling, MAX_MOVE_RULE};
use if_chain::if_chain;
use thiserror::Error;

const CASTLING_ORDER: [(char, u8); 4] = [
    ('K', Castling::WK),
    ('Q', Castling::WQ),
    ('k', Castling::BK),
    ('q', Castling::BQ),
];

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FenError {
    #[error("FEN must have six fields, got {0}")]
    WrongPartCount(usize),
    #[error("bad piece placement: {0:?}")]
    BadPlacement(String),
    #[error("bad side to move: {0:?}")]
    BadSideToMove(String),
    #[error("bad castling rights: {0:?}")]
    BadCastling(String),
    #[error("bad en-passant square: {0:?}")]
    BadEnPassant(String),
    #[error("bad half-move clock: {0:?}")]
    BadHalfmoveClock(String),
    #[error("bad full-move number: {0:?}")]
    BadFullmoveNumber(String),
}

type PartParser = fn(&mut Board, &str) -> Result<(), FenError>;

impl Board {
    // Parses the FEN into a scratch board first; the real board is only
    // replaced when every field parsed, so a failure changes nothing.
    pub fn fen_read(&mut self, fen: &str) -> Result<(), FenError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();
        if parts.len() != 6 {
            return Err(FenError::WrongPartCount(parts.len()));
        }

        let parsers: [PartParser; 6] = [placement, side_to_move, castling, en_passant, hmc, fmn];
        let mut scratch = Board::new();
        for (parser, part) in parsers.iter().zip(parts.iter().copied()) {
            parser(&mut scratch, part)?;
        }

        self.squares = scratch.squares;
        self.game_state = scratch.game_state;
        let added: Vec<(Field, Figure)> = self.figures().collect();
        for (field, figure) in added {
            self.notify_figure_added(figure.kind, figure.color, field);
        }
        Ok(())
    }

    pub fn set_start_position(&mut self) {
        self.fen_read(crate::defs::FEN_START_POSITION)
            .expect("the starting position FEN is valid");
    }

    // Emits the six-field FEN for the current position.
    pub fn fen_string(&self) -> String {
        let mut fen = String::new();

        for rank in (0..8).rev() {
            let mut empty_run = 0;
            for file in 0..8 {
                match self.squares[rank * 8 + file] {
                    Some(figure) => {
                        if empty_run > 0 {
                            fen.push(char::from(b'0' + empty_run));
                            empty_run = 0;
                        }
                        fen.push(figure.kind.fen_char(figure.color));
                    }
                    None => empty_run += 1,
                }
            }
            if empty_run > 0 {
                fen.push(char::from(b'0' + empty_run));
            }
            if rank > 0 {
                fen.push('/');
            }
        }

        fen.push(' ');
        fen.push(match self.game_state.active_color {
            Color::White => 'w',
            Color::Black => 'b',
        });

        fen.push(' ');
        if self.game_state.castling == Castling::NONE {
            fen.push('-');
        } else {
            for (letter, bit) in CASTLING_ORDER {
                if self.game_state.castling & bit != 0 {
                    fen.push(letter);
                }
            }
        }

        fen.push(' ');
        match self.game_state.en_passant {
            // The target square sits behind the pawn that just advanced,
            // seen from the side now to move.
            Some(file) => {
                fen.push(FILE_NAMES[file as usize]);
                fen.push(match self.game_state.active_color {
                    Color::White => '6',
                    Color::Black => '3',
                });
            }
            None => fen.push('-'),
        }

        fen.push_str(&format!(
            " {} {}",
            self.game_state.halfmove_clock, self.game_state.fullmove_number
        ));
        fen
    }
}

// Field 1: piece placement, eight ranks top to bottom, each covering
// exactly eight files.
fn placement(board: &mut Board, part: &str) -> Result<(), FenError> {
    let bad = || FenError::BadPlacement(part.to_string());
    let ranks: Vec<&str> = part.split('/').collect();
    if ranks.len() != 8 {
        return Err(bad());
    }

    for (i, rank_text) in ranks.iter().enumerate() {
        let rank = 7 - i;
        let mut file = 0usize;
        for c in rank_text.chars() {
            match c.to_digit(10) {
                Some(n @ 1..=8) => file += n as usize,
                Some(_) => return Err(bad()),
                None => {
                    let (kind, color) = PieceKind::from_fen_char(c).ok_or_else(bad)?;
                    if file > 7 {
                        return Err(bad());
                    }
                    board.squares[rank * 8 + file] = Some(Figure::new(kind, color));
                    file += 1;
                }
            }
        }
        if file != 8 {
            return Err(bad());
        }
    }
    Ok(())
}

// Field 2: 'w' or 'b'.
fn side_to_move(board: &mut Board, part: &str) -> Result<(), FenError> {
    match part {
        "w" => board.game_state.active_color = Color::White,
        "b" => board.game_state.active_color = Color::Black,
        _ => return Err(FenError::BadSideToMove(part.to_string())),
    }
    Ok(())
}

// Field 3: a duplicate-free subset of "KQkq", or '-' alone.
fn castling(board: &mut Board, part: &str) -> Result<(), FenError> {
    if part == "-" {
        return Ok(());
    }
    let bad = || FenError::BadCastling(part.to_string());
    if part.is_empty() || part.len() > 4 {
        return Err(bad());
    }
    for c in part.chars() {
        let (_, bit) = *CASTLING_ORDER
            .iter()
            .find(|(letter, _)| *letter == c)
            .ok_or_else(bad)?;
        if board.game_state.castling & bit != 0 {
            return Err(bad()); // duplicate
        }
        board.game_state.castling |= bit;
    }
    Ok(())
}

// Field 4: '-' or the square behind the pawn that just advanced two:
// rank 6 when White is to move, rank 3 when Black is. Whether a matching
// pawn actually exists is not verified.
fn en_passant(board: &mut Board, part: &str) -> Result<(), FenError> {
    if part == "-" {
        return Ok(());
    }
    let bad = || FenError::BadEnPassant(part.to_string());
    let field: Field = part.parse().map_err(|_| bad())?;
    let expected_rank = match board.game_state.active_color {
        Color::White => 5,
        Color::Black => 2,
    };
    if field.rank() != expected_rank {
        return Err(bad());
    }
    board.game_state.en_passant = Some(field.file());
    Ok(())
}

// Field 5: half-move clock, 0..=50.
fn hmc(board: &mut Board, part: &str) -> Result<(), FenError> {
    let mut result = Err(FenError::BadHalfmoveClock(part.to_string()));
    if_chain! {
        if let Ok(value) = part.parse::<u8>();
        if value <= MAX_MOVE_RULE;
        then {
            board.game_state.halfmove_clock = value;
            result = Ok(());
        }
    }
    result
}

// Field 6: full-move number. The original's fixtures use 0, so any
// non-negative integer is accepted.
fn fmn(board: &mut Board, part: &str) -> Result<(), FenError> {
    let mut result = Err(FenError::BadFullmoveNumber(part.to_string()));
    if_chain! {
        if let Ok(value) = part.parse::<u16>();
        then {
            board.game_state.fullmove_number = value;
            result = Ok(());
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defs::FEN_START_POSITION;
    use pretty_assertions::assert_eq;

    #[test]
    fn start_position_round_trips() {
        let mut board = Board::new();
        board.set_start_position();
        assert_eq!(board.fen_string(), FEN_START_POSITION);
    }

    #[test]
    fn parse_emit_round_trip() {
        let fens = [
            "4k2r/Br5p/2q5/6P1/3n4/8/5R2/R3K3 b KQkq - 0 1",
            "b7/3rr2P/1K6/6qk/2Q1R3/pN6/1p3PP1/7N b Q d3 0 24",
            "8/4k3/5q2/8/8/P7/4K3/8 w - - 0 0",
            "r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 13 37",
        ];
        for fen in fens {
            let mut board = Board::new();
            board.fen_read(fen).unwrap();
            assert_eq!(board.fen_string(), fen);
        }
    }

    #[test]
    fn failure_leaves_the_board_unchanged() {
        let mut board = Board::new();
        board.set_start_position();
        let reference = board.clone();
        assert!(board.fen_read("8/8/8/8/8/8/8/9 w - - 0 1").is_err());
        assert_eq!(board, reference);
    }

    #[test]
    fn missing_or_extra_parts_are_rejected() {
        let mut board = Board::new();
        assert_eq!(board.fen_read(""), Err(FenError::WrongPartCount(0)));
        assert!(matches!(
            board.fen_read("8/8/8/8/8/8/8/8 w - -"),
            Err(FenError::WrongPartCount(4))
        ));
        assert!(matches!(
            board.fen_read("8/8/8/8/8/8/8/8 w - - 0 1 extra"),
            Err(FenError::WrongPartCount(7))
        ));
    }

    #[test]
    fn bad_placements_are_rejected() {
        let mut board = Board::new();
        for fen in [
            "8/8/8/8/8/8/8 w - - 0 1",          // seven ranks
            "8/8/8/8/8/8/8/7 w - - 0 1",        // short rank
            "8/8/8/8/8/8/8/44x w - - 0 1",      // unknown piece
            "9/8/8/8/8/8/8/8 w - - 0 1",        // bad digit
            "ppppppppp/8/8/8/8/8/8/8 w - - 0 1" // long rank
        ] {
            assert!(board.fen_read(fen).is_err(), "accepted {fen}");
        }
    }

    #[test]
    fn side_castling_and_ep_fields_are_strict() {
        let mut board = Board::new();
        for fen in [
            "8/8/8/8/8/8/8/8 x - - 0 1",     // side
            "8/8/8/8/8/8/8/8 w KK - 0 1",    // duplicate right
            "8/8/8/8/8/8/8/8 w kQxq - 0 1",  // bad letter
            "8/8/8/8/8/8/8/8 w K- - 0 1",    // dash mixed in
            "8/8/8/8/8/8/8/8 w KQKQ - 0 1",  // duplicates again
            "8/8/8/8/8/8/8/8 w - e4 0 1",    // ep rank
            "8/8/8/8/8/8/8/8 w - e3 0 1",    // ep rank for wrong side
            "8/8/8/8/8/8/8/8 b - e6 0 1",    // ep rank for wrong side
            "8/8/8/8/8/8/8/8 w - E6 0 1",    // ep case
            "8/8/8/8/8/8/8/8 w - - -1 1",    // negative clock
            "8/8/8/8/8/8/8/8 w - - 51 1",    // clock beyond the rule
            "8/8/8/8/8/8/8/8 w - - x 1",     // clock not a number
            "8/8/8/8/8/8/8/8 w - - 0 -4",    // negative move number
        ] {
            assert!(board.fen_read(fen).is_err(), "accepted {fen}");
        }

        // An ep square on the correct rank is accepted without checking
        // that a matching pawn exists.
        assert!(board.fen_read("8/8/8/8/8/8/8/8 w - e6 0 1").is_ok());
        assert_eq!(board.en_passant_file(), Some(4));
        assert!(board.fen_read("8/8/8/8/8/8/8/8 b - e3 0 1").is_ok());
        // Mixed-order castling letters are tolerated as long as there is
        // no duplicate.
        assert!(board.fen_read("r3k2r/8/8/8/8/8/8/R3K2R w qkQK - 0 1").is_ok());
        assert_eq!(board.game_state.castling, Castling::ALL);
    }
}
