pub mod add;
pub mod executable;
pub mod list;
pub mod modify;
pub mod open;
pub mod quit;
pub mod write;

use std::str::FromStr;
use std::vec;

use strum_macros::{Display, EnumString};
use thiserror::Error as ThisError;

use crate::commands::executable::Executable;
use crate::reply::Reply;
use crate::store::RecordStore;
use crate::Error;

use add::Add;
use list::List;
use modify::Modify;
use open::Open;
use quit::Quit;
use write::Write;

/// The single-character identifier that starts every command line.
#[derive(Clone, Copy, Debug, Display, EnumString, PartialEq, Eq)]
pub enum CommandKind {
    #[strum(serialize = "A")]
    Add,
    #[strum(serialize = "M")]
    Modify,
    #[strum(serialize = "L")]
    List,
    #[strum(serialize = "W")]
    Write,
    #[strum(serialize = "O")]
    Open,
    #[strum(serialize = "Q")]
    Quit,
}

impl CommandKind {
    pub fn usage(self) -> &'static str {
        match self {
            CommandKind::Add => "A <name>",
            CommandKind::Modify => "M <name> <gold> <silver> <bronze>",
            CommandKind::List => "L",
            CommandKind::Write => "W <path>",
            CommandKind::Open => "O <path>",
            CommandKind::Quit => "Q",
        }
    }
}

#[derive(Debug, PartialEq)]
pub enum Command {
    Add(Add),
    Modify(Modify),
    List(List),
    Write(Write),
    Open(Open),
    Quit(Quit),
}

impl Command {
    pub fn kind(&self) -> CommandKind {
        match self {
            Command::Add(_) => CommandKind::Add,
            Command::Modify(_) => CommandKind::Modify,
            Command::List(_) => CommandKind::List,
            Command::Write(_) => CommandKind::Write,
            Command::Open(_) => CommandKind::Open,
            Command::Quit(_) => CommandKind::Quit,
        }
    }
}

impl Executable for Command {
    fn exec(self, store: &mut RecordStore) -> Result<Reply, Error> {
        match self {
            Command::Add(cmd) => cmd.exec(store),
            Command::Modify(cmd) => cmd.exec(store),
            Command::List(cmd) => cmd.exec(store),
            Command::Write(cmd) => cmd.exec(store),
            Command::Open(cmd) => cmd.exec(store),
            Command::Quit(cmd) => cmd.exec(store),
        }
    }
}

impl TryFrom<&str> for Command {
    type Error = Error;

    fn try_from(line: &str) -> Result<Self, Self::Error> {
        // The identifier is the first character of the line; the arguments are whatever
        // whitespace separated tokens follow it.
        let line = line.trim_end_matches(&['\r', '\n'][..]);
        let mut chars = line.chars();
        let identifier = chars.next().ok_or(CommandParserError::EmptyLine)?;

        let kind = CommandKind::from_str(identifier.encode_utf8(&mut [0; 4]))
            .map_err(|_| CommandParserError::UnknownCommand { identifier })?;

        let parser = &mut CommandParser {
            kind,
            parts: chars
                .as_str()
                .split_whitespace()
                .map(String::from)
                .collect::<Vec<_>>()
                .into_iter(),
        };

        // Anything left in the parser after a command has taken its arguments is ignored.
        match kind {
            CommandKind::Add => Add::try_from(parser).map(Command::Add),
            CommandKind::Modify => Modify::try_from(parser).map(Command::Modify),
            CommandKind::List => List::try_from(parser).map(Command::List),
            CommandKind::Write => Write::try_from(parser).map(Command::Write),
            CommandKind::Open => Open::try_from(parser).map(Command::Open),
            CommandKind::Quit => Quit::try_from(parser).map(Command::Quit),
        }
    }
}

pub struct CommandParser {
    kind: CommandKind,
    parts: vec::IntoIter<String>,
}

impl CommandParser {
    fn next_string(&mut self) -> Result<String, CommandParserError> {
        self.parts.next().ok_or(CommandParserError::MalformedCommand {
            command: self.kind,
        })
    }

    fn next_integer(&mut self) -> Result<i64, CommandParserError> {
        let part = self.next_string()?;

        part.parse::<i64>()
            .map_err(|_| CommandParserError::MalformedCommand { command: self.kind })
    }
}

#[derive(Clone, Debug, ThisError, PartialEq)]
pub enum CommandParserError {
    #[error("Invalid command {identifier}")]
    UnknownCommand { identifier: char },
    #[error("Invalid format, expected: {}", .command.usage())]
    MalformedCommand { command: CommandKind },
    #[error("empty command line")]
    EmptyLine,
    #[error("Invalid format, lines are limited to {limit} characters")]
    LineTooLong { limit: usize },
}
