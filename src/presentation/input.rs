use std::str::FromStr;

use async_trait::async_trait;
use strum_macros::{EnumIter, EnumString, IntoStaticStr};
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

use super::{output, CommandError, Coordinates, OutputEvents};

#[async_trait]
pub trait Input<InputType, OutputType> {
    async fn get_input(&mut self) -> Option<InputType>;
    fn print_to_output(&mut self, output_type: OutputType);
}

/// Line based terminal front-end
pub struct Stdio {
    lines: Lines<BufReader<Stdin>>,
    format: output::Format,
}

#[async_trait]
impl Input<super::Input, OutputEvents> for Stdio {
    async fn get_input(&mut self) -> Option<super::Input> {
        match self.lines.next_line().await {
            Ok(Some(line)) if line.trim().is_empty() => None,
            Ok(Some(line)) => match parse_line(&line) {
                Ok(input) => Some(input),
                Err(error) => {
                    log::warn!("rejected command {:?}: {:?}", line, error);
                    self.print_to_output(OutputEvents::Invalid { error });
                    None
                }
            },
            Ok(None) => {
                log::info!("stdin closed");
                Some(super::Input::Quit)
            }
            Err(err) => {
                log::error!("can't read line from stdin: {}", err);
                Some(super::Input::Quit)
            }
        }
    }

    fn print_to_output(&mut self, output_type: OutputEvents) {
        println!("{}", output::render(self.format, &output_type));
    }
}

impl Stdio {
    pub fn new(format: output::Format) -> Self {
        Stdio {
            lines: BufReader::new(tokio::io::stdin()).lines(),
            format,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, EnumString, IntoStaticStr)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Commands {
    Help,
    Turn,
    Reset,
    Quit,
}

impl Commands {
    pub fn description(self) -> (&'static str, &'static str) {
        match self {
            Commands::Help => ("help", "prints help."),
            Commands::Turn => ("turn <row> <col>", "marks cell, e.g. 'turn B 2' or just '5'."),
            Commands::Reset => ("reset", "clears the board and starts a new game."),
            Commands::Quit => ("quit", "leaves the game."),
        }
    }
}

/// Parses one line typed by the user
pub fn parse_line(line: &str) -> Result<super::Input, CommandError> {
    let mut words = line.split_whitespace();
    let first = words.next().ok_or(CommandError::UnknownCommand)?;

    if let Ok(number) = first.parse::<usize>() {
        if words.next().is_some() {
            return Err(CommandError::InvalidFormat);
        }
        return convert_cell_number(number).map(|(row, col)| super::Input::Select(row, col));
    }

    match Commands::from_str(first).map_err(|_| CommandError::UnknownCommand)? {
        Commands::Help => Ok(super::Input::Help),
        Commands::Reset => Ok(super::Input::Reset),
        Commands::Quit => Ok(super::Input::Quit),
        Commands::Turn => {
            let args: Vec<&str> = words.collect();
            parse_coords(&args).map(|(row, col)| super::Input::Select(row, col))
        }
    }
}

fn parse_coords(args: &[&str]) -> Result<Coordinates, CommandError> {
    if args.len() != 2 {
        return Err(CommandError::InvalidFormat);
    }

    let x = args[0].parse::<char>();
    let y = args[1].parse::<usize>();

    match (x, y) {
        (Ok(x), Ok(y)) => convert_coords(x, y).ok_or(CommandError::InvalidValue),
        (_, _) => Err(CommandError::InvalidFormat),
    }
}

fn convert_coords(x: char, y: usize) -> Option<Coordinates> {
    let row = match x.to_ascii_uppercase() {
        'A' => 0,
        'B' => 1,
        'C' => 2,
        _ => return None,
    };

    if (1..=3).contains(&y) {
        Some((row, y - 1))
    } else {
        None
    }
}

// 1 2 3 / 4 5 6 / 7 8 9
fn convert_cell_number(number: usize) -> Result<Coordinates, CommandError> {
    if (1..=9).contains(&number) {
        Ok(((number - 1) / 3, (number - 1) % 3))
    } else {
        Err(CommandError::InvalidValue)
    }
}
