//! # TicTacToe
//!
//! Game state for a two player tic tac toe round.

use serde::Serialize;
use strum_macros::Display;

/// Number of cells on the playmat
pub const CELLS: usize = 9;

/// Rows, then columns, then both diagonals.
const TRIPLES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Represents symbols on game playmat
#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize)]
pub enum Cell {
    Empty,
    O,
    X,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::O => 'O',
            Cell::X => 'X',
            Cell::Empty => ' ',
        }
    }
}

/// Represents 3x3 playmat in row-major order
pub type Board = [Cell; CELLS];

/// Returns board as rows of chars
pub fn rows(board: &Board) -> [[char; 3]; 3] {
    [0, 1, 2].map(|row| [0, 1, 2].map(|col| board[row * 3 + col].to_char()))
}

#[derive(Copy, Clone, PartialEq, Eq, Debug, Display, Serialize)]
pub enum Player {
    O,
    X,
}

impl Player {
    /// Returns player cell
    pub fn cell(self) -> Cell {
        match self {
            Player::O => Cell::O,
            Player::X => Cell::X,
        }
    }

    fn from_cell(cell: Cell) -> Option<Player> {
        match cell {
            Cell::O => Some(Player::O),
            Cell::X => Some(Player::X),
            Cell::Empty => None,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    InProgress,
    Win(Player),
    Draw,
}

impl Outcome {
    /// Win and Draw accept no further marks until reset
    pub fn is_terminal(self) -> bool {
        self != Outcome::InProgress
    }
}

/// Main structure handling game logic
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    turn_count: usize,
    outcome: Outcome,
}

impl Default for GameState {
    fn default() -> Self {
        GameState::new()
    }
}

impl GameState {
    /// Creates new game
    pub fn new() -> GameState {
        GameState {
            board: [Cell::Empty; CELLS],
            turn_count: 0,
            outcome: Outcome::InProgress,
        }
    }

    /// Writes the current player's mark into `cell_index` and returns the
    /// resulting outcome.
    ///
    /// Placing on an occupied cell, or after the game is over, changes
    /// nothing and returns the current outcome.
    ///
    /// # Panics
    ///
    /// Panics when `cell_index` is not in `0..9`.
    pub fn place_mark(&mut self, cell_index: usize) -> Outcome {
        assert!(
            cell_index < CELLS,
            "cell index {} is outside of the board",
            cell_index
        );

        if self.outcome.is_terminal() || self.board[cell_index] != Cell::Empty {
            log::debug!(
                "ignoring mark at {} (outcome {:?}, cell {:?})",
                cell_index,
                self.outcome,
                self.board[cell_index]
            );
            return self.outcome;
        }

        let player = self.current_player();
        self.board[cell_index] = player.cell();
        self.turn_count += 1;
        log::debug!("{} marked cell {} on turn {}", player, cell_index, self.turn_count);

        self.outcome = match self.check_winner() {
            Some(winner) => Outcome::Win(winner),
            None if self.turn_count == CELLS => Outcome::Draw,
            None => Outcome::InProgress,
        };
        self.outcome
    }

    /// Returns the owner of the first completed triple, if any
    pub fn check_winner(&self) -> Option<Player> {
        TRIPLES.iter().find_map(|&[a, b, c]| {
            let cell = self.board[a];
            if cell == self.board[b] && cell == self.board[c] {
                Player::from_cell(cell)
            } else {
                None
            }
        })
    }

    /// Allows starting new game, always succeeds
    pub fn reset(&mut self) {
        *self = GameState::new();
    }

    /// Snapshot of the playmat for rendering
    pub fn board(&self) -> Board {
        self.board
    }

    /// O moves on even turn counts, X on odd ones
    pub fn current_player(&self) -> Player {
        if self.turn_count % 2 == 0 {
            Player::O
        } else {
            Player::X
        }
    }

    pub fn turn_count(&self) -> usize {
        self.turn_count
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }
}

#[cfg(test)]
mod tests {
    use quickcheck::{quickcheck, Arbitrary};

    use super::*;

    fn filled(board: &Board) -> usize {
        board.iter().filter(|&&cell| cell != Cell::Empty).count()
    }

    fn play(indices: &[usize]) -> (GameState, Outcome) {
        let mut game = GameState::new();
        let mut outcome = game.outcome();
        for &index in indices {
            outcome = game.place_mark(index);
        }
        (game, outcome)
    }

    #[derive(Debug, Clone, Copy)]
    struct Index(usize);

    impl Arbitrary for Index {
        fn arbitrary(g: &mut quickcheck::Gen) -> Self {
            Index(*g.choose(&[0, 1, 2, 3, 4, 5, 6, 7, 8]).unwrap())
        }
    }

    quickcheck! {
        fn turn_count_matches_marks(moves: Vec<Index>) -> bool {
            let mut game = GameState::new();
            moves.iter().all(|&Index(i)| {
                game.place_mark(i);
                game.turn_count() == filled(&game.board())
            })
        }

        fn occupied_cell_is_immutable(moves: Vec<Index>, target: Index) -> bool {
            let mut game = GameState::new();
            for &Index(i) in &moves {
                game.place_mark(i);
            }
            if game.board()[target.0] == Cell::Empty {
                return true;
            }
            let before = game.clone();
            game.place_mark(target.0);
            game == before
        }

        fn terminal_outcome_freezes_board(moves: Vec<Index>, extra: Vec<Index>) -> bool {
            let mut game = GameState::new();
            for &Index(i) in &moves {
                game.place_mark(i);
            }
            if !game.outcome().is_terminal() {
                return true;
            }
            let before = game.clone();
            extra.iter().all(|&Index(i)| {
                game.place_mark(i);
                game == before
            })
        }

        fn reset_restores_empty_game(moves: Vec<Index>) -> bool {
            let mut game = GameState::new();
            for &Index(i) in &moves {
                game.place_mark(i);
            }
            game.reset();
            game == GameState::new()
                && game.board() == [Cell::Empty; CELLS]
                && game.turn_count() == 0
                && game.outcome() == Outcome::InProgress
        }

        fn winner_reported_by_outcome(moves: Vec<Index>) -> bool {
            let mut game = GameState::new();
            for &Index(i) in &moves {
                game.place_mark(i);
            }
            match game.outcome() {
                Outcome::Win(player) => game.check_winner() == Some(player),
                Outcome::Draw => game.check_winner().is_none() && game.turn_count() == CELLS,
                Outcome::InProgress => game.check_winner().is_none(),
            }
        }
    }

    #[test]
    fn top_row_wins_for_o() {
        let mut game = GameState::new();
        game.board = [
            Cell::O,
            Cell::O,
            Cell::O,
            Cell::Empty,
            Cell::Empty,
            Cell::Empty,
            Cell::Empty,
            Cell::Empty,
            Cell::Empty,
        ];
        assert_eq!(game.check_winner(), Some(Player::O));
    }

    #[test]
    fn every_triple_is_detected() {
        for triple in TRIPLES.iter() {
            let mut game = GameState::new();
            for &index in triple {
                game.board[index] = Cell::X;
            }
            assert_eq!(game.check_winner(), Some(Player::X), "triple {:?}", triple);
        }
    }

    #[test]
    fn empty_board_has_no_winner() {
        assert_eq!(GameState::new().check_winner(), None);
    }

    #[test]
    fn full_board_without_line_is_draw() {
        // O X O
        // O X O
        // X O X
        let (game, outcome) = play(&[0, 1, 2, 4, 3, 6, 5, 8, 7]);
        assert_eq!(
            game.board(),
            [
                Cell::O,
                Cell::X,
                Cell::O,
                Cell::O,
                Cell::X,
                Cell::O,
                Cell::X,
                Cell::O,
                Cell::X,
            ]
        );
        assert_eq!(outcome, Outcome::Draw);
        assert_eq!(game.turn_count(), 9);
    }

    #[test]
    fn win_on_ninth_mark_beats_draw() {
        // O X O
        // X X O
        // X O O
        let (game, outcome) = play(&[0, 1, 2, 3, 5, 4, 7, 6, 8]);
        assert_eq!(game.turn_count(), 9);
        assert_eq!(outcome, Outcome::Win(Player::O));
    }

    #[test]
    fn o_completes_top_row_on_fifth_mark() {
        let mut game = GameState::new();
        for &index in &[0, 3, 1, 4] {
            assert_eq!(game.place_mark(index), Outcome::InProgress);
        }
        assert_eq!(game.place_mark(2), Outcome::Win(Player::O));
        assert_eq!(rows(&game.board())[0], ['O', 'O', 'O']);
        assert_eq!(rows(&game.board())[1], ['X', 'X', ' ']);
    }

    #[test]
    fn players_alternate_starting_with_o() {
        let mut game = GameState::new();
        let expected = [Player::O, Player::X, Player::O, Player::X];
        for (index, &player) in expected.iter().enumerate() {
            assert_eq!(game.current_player(), player);
            game.place_mark(index * 2);
            assert_eq!(game.board()[index * 2], player.cell());
        }
    }

    #[test]
    fn occupied_cell_keeps_mark_and_turn() {
        let mut game = GameState::new();
        game.place_mark(4);
        assert_eq!(game.place_mark(4), Outcome::InProgress);
        assert_eq!(game.board()[4], Cell::O);
        assert_eq!(game.turn_count(), 1);
        assert_eq!(game.current_player(), Player::X);
    }

    #[test]
    fn reset_is_idempotent() {
        let (mut game, _) = play(&[0, 3, 1, 4, 2]);
        game.reset();
        game.reset();
        assert_eq!(game, GameState::default());
    }

    #[test]
    #[should_panic(expected = "outside of the board")]
    fn out_of_range_index_panics() {
        GameState::new().place_mark(CELLS);
    }
}
