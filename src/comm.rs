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

// comm.rs defines what can come in over the line-oriented front-end. A
// reader thread turns stdin lines into CommInput values and sends them
// to the engine's main loop; one command per line, the first
// whitespace-delimited token names the command.

pub mod console;
pub mod uci;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommInput {
    // Set up a position, then play the listed moves on it.
    Position { fen: String, moves: Vec<String> },
    // Play a single move on the authoritative board.
    PlayMove(String),
    // Ask the engine for a move, with optional per-call overrides.
    Go(GoOverrides),
    // Print the current position as FEN.
    Fen,
    Help,
    Quit,
    // Anything unrecognized, carrying the raw line.
    Unknown(String),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GoOverrides {
    pub depth: Option<u8>,
    pub threads: Option<usize>,
    pub movetime: Option<u64>,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CommError {
    #[error("unknown command: {0:?}")]
    UnknownCommand(String),
}
