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

// uci.rs parses the UCI-style command set and runs the stdin reader
// thread feeding the engine. The loop ends only on EOF or "quit".

use super::{CommInput, GoOverrides};
use crate::defs::FEN_START_POSITION;
use crate::engine::defs::ErrFatal;
use crossbeam_channel::Sender;
use std::io;
use std::thread::{self, JoinHandle};

pub struct Input {
    handle: Option<JoinHandle<()>>,
}

impl Input {
    // Starts the reader thread. Empty lines are not commands and are
    // skipped; everything else is parsed and forwarded.
    pub fn start(tx: Sender<CommInput>) -> Self {
        let handle = thread::spawn(move || {
            let mut line = String::new();
            loop {
                line.clear();
                match io::stdin().read_line(&mut line) {
                    // EOF behaves like quit.
                    Ok(0) | Err(_) => {
                        let _ = tx.send(CommInput::Quit);
                        break;
                    }
                    Ok(_) => {
                        if line.trim().is_empty() {
                            continue;
                        }
                        let input = create_input(&line);
                        let is_quit = input == CommInput::Quit;
                        if tx.send(input).is_err() || is_quit {
                            break;
                        }
                    }
                }
            }
        });
        Self {
            handle: Some(handle),
        }
    }

    pub fn wait_for_shutdown(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.join().expect(ErrFatal::THREAD);
        }
    }
}

// Turns one input line into a CommInput. Leading whitespace is trimmed;
// the first token selects the command.
pub fn create_input(line: &str) -> CommInput {
    let text = line.trim_start().trim_end_matches(['\r', '\n']);
    let command = text.split_whitespace().next().unwrap_or("");

    match command {
        "position" => parse_position(text),
        "move" => parse_move(text),
        "go" => parse_go(text),
        "fen" => CommInput::Fen,
        "help" => CommInput::Help,
        "quit" | "exit" => CommInput::Quit,
        _ => CommInput::Unknown(text.to_string()),
    }
}

fn parse_position(text: &str) -> CommInput {
    enum Token {
        Nothing,
        Fen,
        Moves,
    }

    let mut fen = String::new();
    let mut moves: Vec<String> = Vec::new();
    let mut skip_fen = false;
    let mut token = Token::Nothing;

    for part in text.split_whitespace() {
        match part {
            "position" => (),
            "startpos" => skip_fen = true, // "fen" is now invalidated
            "fen" if !skip_fen => token = Token::Fen,
            "moves" => token = Token::Moves,
            _ => match token {
                Token::Nothing => (),
                Token::Fen => {
                    fen.push_str(part);
                    fen.push(' ');
                }
                Token::Moves => moves.push(part.to_string()),
            },
        }
    }

    // No FEN in the command: use the starting position.
    if fen.is_empty() {
        fen = FEN_START_POSITION.to_string();
    }
    CommInput::Position {
        fen: fen.trim().to_string(),
        moves,
    }
}

fn parse_move(text: &str) -> CommInput {
    let mut tokens = text.split_whitespace();
    tokens.next(); // "move"
    match tokens.next() {
        Some(m) => CommInput::PlayMove(m.to_string()),
        None => CommInput::Unknown(text.to_string()),
    }
}

fn parse_go(text: &str) -> CommInput {
    enum Token {
        Nothing,
        Depth,
        Threads,
        MoveTime,
    }

    let mut overrides = GoOverrides::default();
    let mut token = Token::Nothing;

    for part in text.split_whitespace() {
        match part {
            "go" => (),
            "depth" => token = Token::Depth,
            "threads" => token = Token::Threads,
            "movetime" => token = Token::MoveTime,
            _ => {
                match token {
                    Token::Nothing => (),
                    Token::Depth => overrides.depth = part.parse().ok(),
                    Token::Threads => overrides.threads = part.parse().ok(),
                    Token::MoveTime => overrides.movetime = part.parse().ok(),
                }
                token = Token::Nothing;
            }
        }
    }

    CommInput::Go(overrides)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leading_whitespace_is_trimmed() {
        assert_eq!(create_input("   quit\n"), CommInput::Quit);
        assert_eq!(create_input("\t fen\n"), CommInput::Fen);
    }

    #[test]
    fn unknown_commands_carry_the_raw_text() {
        assert_eq!(
            create_input("ucinewgame now\n"),
            CommInput::Unknown("ucinewgame now".to_string())
        );
    }

    #[test]
    fn position_startpos_with_moves() {
        let input = create_input("position startpos moves e2e4 e7e5\n");
        assert_eq!(
            input,
            CommInput::Position {
                fen: FEN_START_POSITION.to_string(),
                moves: vec!["e2e4".to_string(), "e7e5".to_string()],
            }
        );
    }

    #[test]
    fn position_fen_collects_all_six_fields() {
        let fen = "4k3/8/8/8/8/8/8/4K3 w - - 0 1";
        let input = create_input(&format!("position fen {fen} moves e1e2\n"));
        assert_eq!(
            input,
            CommInput::Position {
                fen: fen.to_string(),
                moves: vec!["e1e2".to_string()],
            }
        );
    }

    #[test]
    fn go_parses_any_combination_of_parameters() {
        assert_eq!(create_input("go\n"), CommInput::Go(GoOverrides::default()));
        assert_eq!(
            create_input("go depth 4 threads 2 movetime 1500\n"),
            CommInput::Go(GoOverrides {
                depth: Some(4),
                threads: Some(2),
                movetime: Some(1500),
            })
        );
    }

    #[test]
    fn move_command_needs_an_argument() {
        assert_eq!(
            create_input("move e2e4\n"),
            CommInput::PlayMove("e2e4".to_string())
        );
        assert!(matches!(create_input("move\n"), CommInput::Unknown(_)));
    }
}
