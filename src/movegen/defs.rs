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

use crate::board::defs::PieceKind;
use crate::board::field::Field;
use smallvec::SmallVec;
use std::fmt;

// Most positions have well under 64 legal moves, so the list normally
// lives on the stack.
pub type MoveList = SmallVec<[Move; 64]>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CastlingSide {
    Kingside,
    Queenside,
}

// A structured move record. The annotation flags (is_check, is_mate,
// figure_beaten) and the castling tag describe what the move does on the
// board it was generated for; the identity of a move is only its from-
// and to-field plus the promotion piece.
#[derive(Debug, Clone, Copy)]
pub struct Move {
    pub from: Field,
    pub to: Field,
    pub is_check: bool,
    pub is_mate: bool,
    pub castling: Option<CastlingSide>,
    pub figure_beaten: bool,
    pub promotion: Option<PieceKind>,
}

impl Move {
    pub fn new(from: Field, to: Field) -> Self {
        Self {
            from,
            to,
            is_check: false,
            is_mate: false,
            castling: None,
            figure_beaten: false,
            promotion: None,
        }
    }

    pub fn with_promotion(from: Field, to: Field, kind: PieceKind) -> Self {
        Self {
            promotion: Some(kind),
            ..Self::new(from, to)
        }
    }

    pub fn with_castling(from: Field, to: Field, side: CastlingSide) -> Self {
        Self {
            castling: Some(side),
            ..Self::new(from, to)
        }
    }

    // The move in coordinate notation: "e2e4", or "e7e8q" on promotion.
    pub fn as_string(&self) -> String {
        let mut s = format!("{}{}", self.from, self.to);
        if let Some(c) = self.promotion.and_then(PieceKind::promotion_char) {
            s.push(c);
        }
        s
    }
}

impl PartialEq for Move {
    // Equality deliberately ignores the annotation flags and the castling
    // tag, so a move parsed from user input matches its generated twin.
    fn eq(&self, other: &Self) -> bool {
        self.from == other.from && self.to == other.to && self.promotion == other.promotion
    }
}

impl Eq for Move {}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_string())
    }
}
