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

use crate::board::fen::FenError;
use thiserror::Error;

// Messages reported on fatal engine conditions. These should never
// happen; if they do, the engine is in an unknown state and panics
// without attempting recovery.
pub struct ErrFatal;
impl ErrFatal {
    pub const CHANNEL: &'static str = "Broken channel.";
    pub const THREAD: &'static str = "Thread has failed.";
}

// Settings taken from the command line at start-up; "go" may override
// the search parameters per call.
pub struct Settings {
    pub depth: u8,
    pub threads: usize,
    pub movetime: Option<u64>,
    pub quiet: bool,
}

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("cannot set up the initial position: {0}")]
    InvalidStartFen(#[from] FenError),
}

pub type EngineRunResult = Result<(), EngineError>;
