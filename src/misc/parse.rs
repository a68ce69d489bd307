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
use if_chain::if_chain;

pub type PotentialMove = (Field, Field, Option<PieceKind>);
pub type ParseMoveResult = Result<PotentialMove, ()>;

// Parses a coordinate move string: four characters, or five with a
// promotion letter ("e2e4", "e7e8q"). Lowercase only; uppercase fields
// or promotion letters are rejected.
pub fn algebraic_move(text: &str) -> ParseMoveResult {
    let mut result: ParseMoveResult = Err(());

    if text.is_ascii() && (text.len() == 4 || text.len() == 5) {
        if_chain! {
            if let Ok(from) = text[0..2].parse::<Field>();
            if let Ok(to) = text[2..4].parse::<Field>();
            then {
                result = Ok((from, to, None));
            }
        }
    }

    // The fifth character must name a promotion piece.
    if result.is_ok() && text.len() == 5 {
        result = Err(());
        if_chain! {
            if let Some(c) = text.chars().nth(4);
            if let Some(kind) = PieceKind::from_promotion_char(c);
            if let Ok(from) = text[0..2].parse::<Field>();
            if let Ok(to) = text[2..4].parse::<Field>();
            then {
                result = Ok((from, to, Some(kind)));
            }
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_and_promotion_moves_parse() {
        let (from, to, promotion) = algebraic_move("e2e4").unwrap();
        assert_eq!(from.to_string(), "e2");
        assert_eq!(to.to_string(), "e4");
        assert_eq!(promotion, None);

        let (_, _, promotion) = algebraic_move("e7e8q").unwrap();
        assert_eq!(promotion, Some(PieceKind::Queen));
    }

    #[test]
    fn malformed_moves_are_rejected() {
        for text in ["", "e2", "e2e", "e2e4x", "e2e4qq", "E2E4", "e7e8Q", "e7e8k", "i1a1"] {
            assert!(algebraic_move(text).is_err(), "accepted {text:?}");
        }
    }
}
