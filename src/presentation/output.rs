use itertools::Itertools;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumString};

use super::input::Commands;
use super::{IgnoreReason, OutputEvents};
use crate::tictactoe::{rows, Board, Outcome};

const TITLE: &str = "Tic Tac Toe";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Format {
    Text,
    Json,
}

impl Default for Format {
    fn default() -> Self {
        Format::Text
    }
}

pub fn render(format: Format, event: &OutputEvents) -> String {
    match format {
        Format::Text => render_text(event),
        Format::Json => render_json(event),
    }
}

fn render_json(event: &OutputEvents) -> String {
    serde_json::to_string(event).unwrap_or_else(|err| {
        log::error!("cannot jsonify {:?}: {}", event, err);
        String::new()
    })
}

fn render_text(event: &OutputEvents) -> String {
    match event {
        OutputEvents::Welcome { board } => {
            format!("{}\n\n{}\n\nO moves first.", TITLE, render_table(board))
        }
        OutputEvents::Board { board, next } => {
            format!("{}\n\n{} to move.", render_table(board), next)
        }
        OutputEvents::GameOver { outcome, board } => format!(
            "{}\n\nGame Over: {}\nType 'reset' to play again.",
            render_table(board),
            game_over_message(*outcome)
        ),
        OutputEvents::Ignored {
            reason: IgnoreReason::Occupied,
        } => "Field is already occupied, choose different one!".to_string(),
        OutputEvents::Ignored {
            reason: IgnoreReason::CellsDisabled,
        } => "Game is over, type 'reset' to start a new one.".to_string(),
        OutputEvents::Invalid { error } => error.to_string(),
        OutputEvents::Reset { board } => format!("New game.\n\n{}", render_table(board)),
        OutputEvents::Help => render_help(),
        OutputEvents::Farewell => "Bye!".to_string(),
    }
}

pub fn game_over_message(outcome: Outcome) -> String {
    match outcome {
        Outcome::Win(player) => format!("{} won!", player),
        Outcome::Draw => "It's a draw!".to_string(),
        Outcome::InProgress => String::new(),
    }
}

fn render_table(board: &Board) -> String {
    let body = rows(board)
        .iter()
        .zip(['A', 'B', 'C'].iter())
        .map(|(row, letter)| format!("{} {}", letter, row.iter().join(" | ")))
        .join("\n  ---------\n");
    format!("  1   2   3\n{}", body)
}

fn render_help() -> String {
    let lines = Commands::iter()
        .map(|command| command.description())
        .map(|(name, desc)| format!("{:20} - {}", name, desc))
        .join("\n");
    format!("Available commands: \n{}", lines)
}
