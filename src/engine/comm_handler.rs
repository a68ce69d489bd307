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

// comm_handler.rs reacts to the parsed commands. Rule and input errors
// are reported as info strings; they never take the engine down.

use super::Engine;
use crate::comm::{CommError, CommInput, GoOverrides};
use crate::misc::parse;
use std::time::Duration;

impl Engine {
    pub(super) fn handle_input(&mut self, input: CommInput) {
        match input {
            CommInput::Position { fen, moves } => self.on_position(&fen, &moves),
            CommInput::PlayMove(text) => {
                let _ = self.try_move(&text);
            }
            CommInput::Go(overrides) => self.on_go(overrides),
            CommInput::Fen => println!("{}", self.board.fen_string()),
            CommInput::Help => Self::print_help(),
            CommInput::Quit => self.quit = true,
            CommInput::Unknown(raw) => {
                let error = CommError::UnknownCommand(raw);
                self.log.line(&error.to_string());
                println!("info string {error}");
            }
        }
    }

    fn on_position(&mut self, fen: &str, moves: &[String]) {
        if let Err(error) = self.board.fen_read(fen) {
            println!("info string {error}");
            return;
        }
        for m in moves {
            if !self.try_move(m) {
                break;
            }
        }
    }

    // Plays one move on the authoritative board. Reports and returns
    // false when the string does not parse or the move is not legal.
    fn try_move(&mut self, text: &str) -> bool {
        let (from, to, promotion) = match parse::algebraic_move(text) {
            Ok(potential) => potential,
            Err(()) => {
                println!("info string cannot parse move {text:?}");
                return false;
            }
        };
        match self.board.make_move(from, to, promotion) {
            Ok(_) => true,
            Err(error) => {
                println!("info string {error}");
                false
            }
        }
    }

    fn on_go(&mut self, overrides: GoOverrides) {
        self.search.params.depth = overrides.depth.unwrap_or(self.settings.depth).max(1);
        self.search.params.max_threads =
            overrides.threads.unwrap_or(self.settings.threads).max(1);
        self.search.params.time_budget = overrides
            .movetime
            .or(self.settings.movetime)
            .map(Duration::from_millis);

        match self.search.best_move(&self.board, &mut self.log) {
            Ok(m) => {
                // The chosen move is applied back to the authoritative
                // board, which notifies the observers.
                if let Err(error) = self.board.make_move(m.from, m.to, m.promotion) {
                    println!("info string {error}");
                    return;
                }
                println!("bestmove {m}");
            }
            Err(error) => println!("info string {error}"),
        }
    }

    fn print_help() {
        println!("Supported commands");
        println!("================================================================");
        println!("position startpos [moves ...]      set up the starting position");
        println!("position fen <fen> [moves ...]     set up the given position");
        println!("move <from><to>[promotion]         play a move, e.g. e2e4, e7e8q");
        println!("go [depth D] [threads T] [movetime MS]   let the engine move");
        println!("fen                                print the current position");
        println!("help                               this help information");
        println!("quit / exit                        leave the engine");
    }
}
