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

// This struct holds the chess engine and its functions, so they are not
// all separate entities in the global space. The engine owns the one
// authoritative board; the search only ever works on clones of it.

mod about;
mod comm_handler;
pub mod defs;
mod main_loop;

use crate::board::Board;
use crate::comm::console::ConsoleDrawer;
use crate::comm::CommInput;
use crate::misc::cmdline::CmdLine;
use crate::misc::log::DebugLog;
use crate::search::defs::SearchParams;
use crate::search::Search;
use crossbeam_channel::Receiver;
use defs::{EngineRunResult, Settings};

pub struct Engine {
    quit: bool,                           // Flag that ends the main loop.
    settings: Settings,                   // Settings from the command line.
    cmdline: CmdLine,                     // Command line interpreter.
    board: Board,                         // This is the main engine board.
    search: Search,                       // Search object.
    log: DebugLog,                        // Best-effort debug sink.
    input_rx: Option<Receiver<CommInput>>, // Receiver for incoming commands.
}

impl Engine {
    // Create a new engine.
    pub fn new() -> Self {
        let cmdline = CmdLine::new();

        let settings = Settings {
            depth: cmdline.depth(),
            threads: cmdline.threads(),
            movetime: cmdline.movetime(),
            quiet: cmdline.has_quiet(),
        };

        let mut params = SearchParams::new();
        params.depth = settings.depth;
        params.max_threads = settings.threads;

        let log = if settings.quiet {
            DebugLog::quiet()
        } else {
            DebugLog::stderr()
        };

        Self {
            quit: false,
            settings,
            cmdline,
            board: Board::new(),
            search: Search::new(params),
            log,
            input_rx: None,
        }
    }

    // Run the engine: set up the position, install the observers, and
    // enter the command loop until EOF or quit.
    pub fn run(&mut self) -> EngineRunResult {
        self.print_about();

        // Setup the initial position and abort if this fails.
        self.board.fen_read(&self.cmdline.fen())?;

        if !self.settings.quiet {
            self.board.add_observer(Box::new(ConsoleDrawer::new()));
        }

        self.main_loop();
        Ok(())
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}
