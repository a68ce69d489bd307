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

use crate::defs::{About, FEN_START_POSITION};
use crate::search::defs::{DEFAULT_MAX_THREADS, DEFAULT_SEARCH_DEPTH};
use clap::{Arg, ArgAction, ArgMatches, Command};

// Consts for command line options, flags and arguments.

struct CmdLineArgs;
impl CmdLineArgs {
    // FEN
    const FEN_LONG: &'static str = "fen";
    const FEN_SHORT: char = 'f';
    const FEN_HELP: &'static str = "Set up the given position";

    // Search depth
    const DEPTH_LONG: &'static str = "depth";
    const DEPTH_SHORT: char = 'd';
    const DEPTH_HELP: &'static str = "Default search depth in plies";

    // Threads
    const THREADS_LONG: &'static str = "threads";
    const THREADS_SHORT: char = 't';
    const THREADS_HELP: &'static str = "Number of CPU-threads to use";

    // Time budget
    const MOVETIME_LONG: &'static str = "movetime";
    const MOVETIME_SHORT: char = 'm';
    const MOVETIME_HELP: &'static str = "Default wall-clock budget per move in milliseconds";

    // Quiet (no debug log, no move rendering)
    const QUIET_LONG: &'static str = "quiet";
    const QUIET_SHORT: char = 'q';
    const QUIET_HELP: &'static str = "No debug output or move rendering";
}

pub struct CmdLine {
    arguments: ArgMatches,
}

impl CmdLine {
    pub fn new() -> Self {
        Self {
            arguments: Self::get(),
        }
    }

    pub fn fen(&self) -> String {
        self.arguments
            .get_one::<String>(CmdLineArgs::FEN_LONG)
            .cloned()
            .unwrap_or_else(|| FEN_START_POSITION.to_string())
    }

    pub fn depth(&self) -> u8 {
        self.arguments
            .get_one::<String>(CmdLineArgs::DEPTH_LONG)
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_SEARCH_DEPTH)
    }

    pub fn threads(&self) -> usize {
        self.arguments
            .get_one::<String>(CmdLineArgs::THREADS_LONG)
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_MAX_THREADS)
    }

    pub fn movetime(&self) -> Option<u64> {
        self.arguments
            .get_one::<String>(CmdLineArgs::MOVETIME_LONG)
            .and_then(|s| s.parse().ok())
    }

    pub fn has_quiet(&self) -> bool {
        self.arguments.get_flag(CmdLineArgs::QUIET_LONG)
    }

    fn get() -> ArgMatches {
        Command::new(About::ENGINE)
            .version(About::VERSION)
            .arg(
                Arg::new(CmdLineArgs::FEN_LONG)
                    .short(CmdLineArgs::FEN_SHORT)
                    .long(CmdLineArgs::FEN_LONG)
                    .help(CmdLineArgs::FEN_HELP)
                    .default_value(FEN_START_POSITION),
            )
            .arg(
                Arg::new(CmdLineArgs::DEPTH_LONG)
                    .short(CmdLineArgs::DEPTH_SHORT)
                    .long(CmdLineArgs::DEPTH_LONG)
                    .help(CmdLineArgs::DEPTH_HELP),
            )
            .arg(
                Arg::new(CmdLineArgs::THREADS_LONG)
                    .short(CmdLineArgs::THREADS_SHORT)
                    .long(CmdLineArgs::THREADS_LONG)
                    .help(CmdLineArgs::THREADS_HELP),
            )
            .arg(
                Arg::new(CmdLineArgs::MOVETIME_LONG)
                    .short(CmdLineArgs::MOVETIME_SHORT)
                    .long(CmdLineArgs::MOVETIME_LONG)
                    .help(CmdLineArgs::MOVETIME_HELP),
            )
            .arg(
                Arg::new(CmdLineArgs::QUIET_LONG)
                    .short(CmdLineArgs::QUIET_SHORT)
                    .long(CmdLineArgs::QUIET_LONG)
                    .help(CmdLineArgs::QUIET_HELP)
                    .action(ArgAction::SetTrue),
            )
            .get_matches()
    }
}

impl Default for CmdLine {
    fn default() -> Self {
        Self::new()
    }
}
