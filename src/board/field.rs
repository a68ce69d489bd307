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

// field.rs implements the board coordinate. A field is a (file, rank)
// pair with both components in 0..8; file 0 is the a-file and rank 0 is
// rank 1. A field that exists can never be out of range.

use super::defs::BoardError;
use std::fmt;
use std::str::FromStr;

pub const FILE_NAMES: [char; 8] = ['a', 'b', 'c', 'd', 'e', 'f', 'g', 'h'];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Field {
    file: u8,
    rank: u8,
}

impl Field {
    pub fn new(file: u8, rank: u8) -> Result<Self, BoardError> {
        if file > 7 || rank > 7 {
            return Err(BoardError::WrongField {
                file: file as i8,
                rank: rank as i8,
            });
        }
        Ok(Self { file, rank })
    }

    // Index into the 64-square array; a1 is 0, b1 is 1, a2 is 8, h8 is 63.
    pub fn index(self) -> usize {
        (self.rank as usize * 8) + self.file as usize
    }

    pub fn from_index(index: usize) -> Self {
        debug_assert!(index < 64);
        Self {
            file: (index % 8) as u8,
            rank: (index / 8) as u8,
        }
    }

    pub fn file(self) -> u8 {
        self.file
    }

    pub fn rank(self) -> u8 {
        self.rank
    }

    // Walk from this field by the given deltas. None if the target falls
    // off the board.
    pub fn offset(self, df: i8, dr: i8) -> Option<Self> {
        let file = self.file as i8 + df;
        let rank = self.rank as i8 + dr;
        if (0..8).contains(&file) && (0..8).contains(&rank) {
            Some(Self {
                file: file as u8,
                rank: rank as u8,
            })
        } else {
            None
        }
    }
}

impl FromStr for Field {
    type Err = BoardError;

    // Parses "a1" through "h8". Case-sensitive: uppercase is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return Err(BoardError::WrongField { file: -1, rank: -1 });
        }
        let file = bytes[0].wrapping_sub(b'a') as i8;
        let rank = bytes[1].wrapping_sub(b'1') as i8;
        if !(0..8).contains(&file) || !(0..8).contains(&rank) {
            return Err(BoardError::WrongField { file, rank });
        }
        Ok(Self {
            file: file as u8,
            rank: rank as u8,
        })
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", FILE_NAMES[self.file as usize], self.rank + 1)
    }
}
