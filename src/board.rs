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

// board.rs implements the position itself: an 8x8 mapping from square to
// optional figure, plus the game state (side to move, castling rights,
// en-passant file and the move clocks). A figure's field is the index of
// the square it stands on, so the two can never disagree.

pub mod defs;
pub mod fen;
pub mod field;
mod gamestate;
mod make_move;
mod observer;
mod status;

pub use gamestate::GameState;
pub use make_move::ReversibleMove;
pub use observer::{BoardObserver, ObserverId};

use crate::defs::NrOf;
use crate::movegen;
use crate::movegen::defs::MoveList;
use defs::{BoardError, Color, Figure, PieceKind};
use field::Field;
use std::fmt;

pub struct Board {
    squares: [Option<Figure>; NrOf::SQUARES],
    pub game_state: GameState,
    observers: Vec<(ObserverId, Box<dyn BoardObserver + Send>)>,
    next_observer_id: usize,
}

impl Board {
    // Creates an empty board: no figures, White to move, no castling
    // rights. Use fen_read() or set_start_position() for a playable one.
    pub fn new() -> Self {
        Self {
            squares: [None; NrOf::SQUARES],
            game_state: GameState::new(),
            observers: Vec::new(),
            next_observer_id: 0,
        }
    }

    pub fn get_figure(&self, field: Field) -> Option<Figure> {
        self.squares[field.index()]
    }

    // Puts a new figure onto an empty field and notifies the observers.
    pub fn add_figure(
        &mut self,
        kind: PieceKind,
        color: Color,
        field: Field,
    ) -> Result<(), BoardError> {
        if let Some(figure) = self.squares[field.index()] {
            return Err(BoardError::FieldNotEmpty { field, figure });
        }
        self.squares[field.index()] = Some(Figure::new(kind, color));
        self.notify_figure_added(kind, color, field);
        Ok(())
    }

    // Takes the figure off the given field and notifies the observers.
    pub fn remove_figure(&mut self, field: Field) -> Result<Figure, BoardError> {
        match self.squares[field.index()].take() {
            Some(figure) => {
                self.notify_figure_removed(field);
                Ok(figure)
            }
            None => Err(BoardError::NoFigure(field)),
        }
    }

    // All figures on the board, with the fields they stand on.
    pub fn figures(&self) -> impl Iterator<Item = (Field, Figure)> + '_ {
        self.squares
            .iter()
            .enumerate()
            .filter_map(|(i, f)| f.map(|figure| (Field::from_index(i), figure)))
    }

    pub fn figures_of(&self, color: Color) -> impl Iterator<Item = (Field, Figure)> + '_ {
        self.figures().filter(move |(_, f)| f.color == color)
    }

    pub fn king_field(&self, color: Color) -> Option<Field> {
        self.figures_of(color)
            .find(|(_, f)| f.kind == PieceKind::King)
            .map(|(field, _)| field)
    }

    // White material minus black material. The king counts for nothing.
    pub fn material_balance(&self) -> i32 {
        self.figures()
            .map(|(_, f)| match f.color {
                Color::White => f.kind.value(),
                Color::Black => -f.kind.value(),
            })
            .sum()
    }

    pub fn side_to_move(&self) -> Color {
        self.game_state.active_color
    }

    pub fn set_side_to_move(&mut self, color: Color) {
        self.game_state.active_color = color;
    }

    pub fn en_passant_file(&self) -> Option<u8> {
        self.game_state.en_passant
    }

    // All legal moves for the given color, annotated with is_check and
    // is_mate.
    pub fn legal_moves(&self, color: Color) -> MoveList {
        movegen::legal_moves_annotated(self, color)
    }

    // The annotated legal moves of the figure standing on the field.
    pub fn legal_moves_from(&self, field: Field) -> Result<MoveList, BoardError> {
        let figure = self
            .get_figure(field)
            .ok_or(BoardError::NoFigure(field))?;
        let mut moves = movegen::legal_moves_annotated(self, figure.color);
        moves.retain(|m| m.from == field);
        Ok(moves)
    }

    // True if the figure on "from" has a legal move to "to", promotions
    // included.
    pub fn is_move_valid(&self, from: Field, to: Field) -> bool {
        match self.get_figure(from) {
            Some(figure) => movegen::legal_moves_basic(self, figure.color)
                .iter()
                .any(|m| m.from == from && m.to == to),
            None => false,
        }
    }

    pub fn is_king_attacked(&self, color: Color) -> bool {
        movegen::is_king_attacked(self, color)
    }
}

// Search clones boards freely; a clone carries the position but not the
// observers, so speculative exploration stays silent.
impl Clone for Board {
    fn clone(&self) -> Self {
        Self {
            squares: self.squares,
            game_state: self.game_state,
            observers: Vec::new(),
            next_observer_id: 0,
        }
    }
}

// Equality is over the position and game state; the observer list does
// not belong to the position.
impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.squares == other.squares && self.game_state == other.game_state
    }
}

impl Eq for Board {}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board({})", self.fen_string())
    }
}

#[cfg(test)]
mod tests {
    use super::defs::{Color, PieceKind};
    use super::field::Field;
    use super::Board;

    fn field(s: &str) -> Field {
        s.parse().unwrap()
    }

    #[test]
    fn add_get_remove_figure() {
        let mut board = Board::new();
        assert_eq!(board.figures().count(), 0);
        assert!(board.get_figure(field("c1")).is_none());

        board
            .add_figure(PieceKind::Queen, Color::Black, field("c1"))
            .unwrap();
        let queen = board.get_figure(field("c1")).unwrap();
        assert_eq!(queen.kind, PieceKind::Queen);
        assert_eq!(queen.color, Color::Black);
        assert_eq!(board.figures().count(), 1);

        board
            .add_figure(PieceKind::Knight, Color::White, field("f4"))
            .unwrap();
        assert_eq!(board.figures_of(Color::White).count(), 1);
        assert_eq!(board.figures_of(Color::Black).count(), 1);

        let removed = board.remove_figure(field("c1")).unwrap();
        assert_eq!(removed.kind, PieceKind::Queen);
        assert!(board.get_figure(field("c1")).is_none());
        assert_eq!(board.figures().count(), 1);
    }

    #[test]
    fn add_to_occupied_field_fails() {
        let mut board = Board::new();
        board
            .add_figure(PieceKind::Bishop, Color::Black, field("b5"))
            .unwrap();
        let err = board
            .add_figure(PieceKind::King, Color::White, field("b5"))
            .unwrap_err();
        assert!(matches!(
            err,
            super::defs::BoardError::FieldNotEmpty { .. }
        ));
    }

    #[test]
    fn remove_from_empty_field_fails() {
        let mut board = Board::new();
        assert!(board.remove_figure(field("h8")).is_err());
    }

    #[test]
    fn material_balance_counts_both_sides() {
        let mut board = Board::new();
        board
            .add_figure(PieceKind::Queen, Color::White, field("d1"))
            .unwrap();
        board
            .add_figure(PieceKind::Knight, Color::Black, field("g8"))
            .unwrap();
        board
            .add_figure(PieceKind::King, Color::Black, field("e8"))
            .unwrap();
        assert_eq!(board.material_balance(), 8 - 3);
    }

    #[test]
    fn clones_are_equal_but_independent() {
        let mut board = Board::new();
        board.fen_read(crate::defs::FEN_START_POSITION).unwrap();
        let mut clone = board.clone();
        assert_eq!(board, clone);

        clone
            .make_move(field("e2"), field("e4"), None)
            .unwrap();
        assert_ne!(board, clone);
        assert_eq!(board.figures().count(), 32);
    }
}
