pub mod input;
pub mod output;

use std::fmt;

use serde::Serialize;

use crate::tictactoe::{Board, Cell, GameState, Outcome, Player};

/// (row, col), both in 0..3
pub type Coordinates = (usize, usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CommandError {
    UnknownCommand,
    InvalidFormat,
    InvalidValue,
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::UnknownCommand => write!(f, "Unknown command, type 'help' for the list"),
            CommandError::InvalidFormat => write!(f, "Invalid format, use format 'turn <A|B|C> <1|2|3>'"),
            CommandError::InvalidValue => write!(f, "Invalid range, use 'turn <A|B|C> <1|2|3>' or a cell number 1-9"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    Select(usize, usize),
    Reset,
    Help,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IgnoreReason {
    Occupied,
    CellsDisabled,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum OutputEvents {
    Welcome { board: Board },
    Board { board: Board, next: Player },
    GameOver { outcome: Outcome, board: Board },
    Ignored { reason: IgnoreReason },
    Invalid { error: CommandError },
    Reset { board: Board },
    Help,
    Farewell,
}

/// Owns the game and decides whether cell selections reach it.
pub struct GameSession {
    game: GameState,
    cells_enabled: bool,
}

impl GameSession {
    pub fn new() -> GameSession {
        GameSession {
            game: GameState::new(),
            cells_enabled: true,
        }
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }

    pub fn cells_enabled(&self) -> bool {
        self.cells_enabled
    }

    fn select(&mut self, row: usize, col: usize) -> OutputEvents {
        if !self.cells_enabled {
            log::debug!("cells disabled, dropping selection ({}, {})", row, col);
            return OutputEvents::Ignored {
                reason: IgnoreReason::CellsDisabled,
            };
        }

        let index = cell_index(row, col);
        if self.game.board()[index] != Cell::Empty {
            log::debug!("cell {} already occupied", index);
            return OutputEvents::Ignored {
                reason: IgnoreReason::Occupied,
            };
        }

        match self.game.place_mark(index) {
            Outcome::InProgress => OutputEvents::Board {
                board: self.game.board(),
                next: self.game.current_player(),
            },
            outcome => {
                log::info!("game over after {} turns: {:?}", self.game.turn_count(), outcome);
                self.cells_enabled = false;
                OutputEvents::GameOver {
                    outcome,
                    board: self.game.board(),
                }
            }
        }
    }

    fn reset(&mut self) -> OutputEvents {
        log::info!("resetting game");
        self.game.reset();
        self.cells_enabled = true;
        OutputEvents::Reset {
            board: self.game.board(),
        }
    }
}

/// Maps a grid position to its row-major board index.
///
/// # Panics
///
/// Panics when `row` or `col` is not in `0..3`.
pub fn cell_index(row: usize, col: usize) -> usize {
    assert!(row < 3 && col < 3, "cell ({}, {}) is outside of the board", row, col);
    row * 3 + col
}

/// Runs the game until the user quits or input ends.
pub async fn start<UserInt: input::Input<Input, OutputEvents>>(
    user_interface: &mut UserInt,
    show_help: bool,
) -> GameSession {
    let mut session = GameSession::new();

    user_interface.print_to_output(OutputEvents::Welcome {
        board: session.game.board(),
    });
    if show_help {
        user_interface.print_to_output(OutputEvents::Help);
    }

    loop {
        match user_interface.get_input().await {
            Some(Input::Quit) => {
                user_interface.print_to_output(OutputEvents::Farewell);
                break;
            }
            Some(input) => {
                let event = process_input(input, &mut session);
                user_interface.print_to_output(event);
            }
            None => {}
        }
    }

    session
}

fn process_input(input: Input, session: &mut GameSession) -> OutputEvents {
    match input {
        Input::Select(row, col) => session.select(row, col),
        Input::Reset => session.reset(),
        Input::Help => OutputEvents::Help,
        Input::Quit => OutputEvents::Farewell,
    }
}
