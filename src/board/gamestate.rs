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

use super::defs::Color;
use crate::defs::Castling;

// This struct collects the variables holding the game state next to the
// figure placement. Keeping them in one Copy record makes it trivial to
// snapshot the state when a reversible move is made, and to restore it
// all at once when the move is taken back.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameState {
    pub active_color: Color,
    pub castling: u8,
    // File of the pawn that just made a two-square advance, if any.
    pub en_passant: Option<u8>,
    pub halfmove_clock: u8,
    pub fullmove_number: u16,
}

impl GameState {
    pub fn new() -> Self {
        Self {
            active_color: Color::White,
            castling: Castling::NONE,
            en_passant: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
