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

// console.rs renders the game as it happens: an observer on the
// authoritative board that writes one line per move ("e2-e4", "e4xd5",
// promotions, check and mate marks) and the result when the game ends.

use crate::board::defs::{Color, GameStatus, PieceKind};
use crate::board::field::Field;
use crate::board::BoardObserver;
use crate::movegen::defs::Move;
use std::io::{self, Write};

pub struct ConsoleDrawer {
    out: Box<dyn Write + Send>,
}

impl ConsoleDrawer {
    pub fn new() -> Self {
        Self {
            out: Box::new(io::stdout()),
        }
    }

    pub fn to_sink(out: Box<dyn Write + Send>) -> Self {
        Self { out }
    }
}

impl Default for ConsoleDrawer {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardObserver for ConsoleDrawer {
    fn figure_added(&mut self, _kind: PieceKind, _color: Color, _field: Field) {}

    fn figure_removed(&mut self, _field: Field) {}

    fn figure_moved(&mut self, m: &Move) {
        let separator = if m.figure_beaten { "x" } else { "-" };
        let promotion = m
            .promotion
            .and_then(PieceKind::promotion_char)
            .map(|c| c.to_ascii_uppercase().to_string())
            .unwrap_or_default();
        let mark = if m.is_mate {
            "#"
        } else if m.is_check {
            "+"
        } else {
            ""
        };
        let _ = writeln!(self.out, "{}{}{}{}{}", m.from, separator, m.to, promotion, mark);
    }

    fn game_finished(&mut self, status: GameStatus) {
        let _ = writeln!(self.out, "{status}");
        let _ = self.out.flush();
    }
}
