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

// observer.rs lets interested parties (a console renderer, a game
// recorder) watch the authoritative board. Callbacks fire synchronously,
// in registration order, on the thread mutating the board. Speculative
// (reversible) moves never notify.

use super::defs::{Color, GameStatus, PieceKind};
use super::field::Field;
use super::Board;
use crate::movegen::defs::Move;

pub trait BoardObserver {
    fn figure_added(&mut self, kind: PieceKind, color: Color, field: Field);
    fn figure_removed(&mut self, field: Field);
    fn figure_moved(&mut self, m: &Move);
    fn game_finished(&mut self, status: GameStatus);
}

// Handed out on registration; identifies the observer for removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObserverId(usize);

impl Board {
    pub fn add_observer(&mut self, observer: Box<dyn BoardObserver + Send>) -> ObserverId {
        let id = ObserverId(self.next_observer_id);
        self.next_observer_id += 1;
        self.observers.push((id, observer));
        id
    }

    pub fn remove_observer(&mut self, id: ObserverId) -> Option<Box<dyn BoardObserver + Send>> {
        let position = self.observers.iter().position(|(i, _)| *i == id)?;
        Some(self.observers.remove(position).1)
    }

    pub(super) fn notify_figure_added(&mut self, kind: PieceKind, color: Color, field: Field) {
        for (_, observer) in &mut self.observers {
            observer.figure_added(kind, color, field);
        }
    }

    pub(super) fn notify_figure_removed(&mut self, field: Field) {
        for (_, observer) in &mut self.observers {
            observer.figure_removed(field);
        }
    }

    pub(super) fn notify_figure_moved(&mut self, m: &Move) {
        for (_, observer) in &mut self.observers {
            observer.figure_moved(m);
        }
    }

    pub(super) fn notify_game_finished(&mut self, status: GameStatus) {
        for (_, observer) in &mut self.observers {
            observer.game_finished(status);
        }
    }
}
