// This file is part of swiss-tournament.
//
// swiss-tournament is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// swiss-tournament is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

use std::{borrow::Cow, str::FromStr};

use anyhow::Context;

use crate::{Id, game_result::GameResult};

pub const COMMANDS: [&str; 17] = [
    "advance",
    "is_complete",
    "known_command",
    "list_commands",
    "name",
    "phase",
    "players",
    "quit",
    "register",
    "register_list",
    "remove",
    "reset",
    "result",
    "round",
    "standings",
    "start",
    "version",
];

/// One line of the tournament text protocol.
///
/// Replies start with `=` on success and `?` on failure. A `#` starts a
/// comment anywhere on the line, so it can't be part of a name.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Message {
    /// `advance`: resolve the open round and pair the next one.
    Advance,
    /// A blank line or a comment.
    Empty,
    /// `is_complete [round]`, the open round when no number is given.
    IsComplete(Option<u32>),
    KnownCommand(String),
    ListCommands,
    Name,
    Phase,
    Players,
    Quit,
    /// `register <name>`, the name may contain spaces but not `#`:
    /// `register Team #1` registers "Team".
    Register(String),
    /// `register_list <name>, <name>, ...`
    RegisterList(String),
    Remove(Id),
    /// `reset confirm` throws the tournament away, a bare `reset` only asks
    /// for the confirmation.
    Reset { confirmed: bool },
    /// `result <round> <match id> <1-0|0-1|1/2-1/2|pending>`
    Result(u32, String, GameResult),
    Round(Option<u32>),
    Standings,
    Start(u32),
    Version,
}

fn number<T: FromStr>(word: Option<&str>, what: &str) -> anyhow::Result<T>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let word = word.ok_or_else(|| anyhow::Error::msg(format!("expected: {what}")))?;
    word.parse()
        .with_context(|| format!("expected {what}, found '{word}'"))
}

fn optional_number(word: Option<&str>, what: &str) -> anyhow::Result<Option<u32>> {
    match word {
        Some(_) => Ok(Some(number(word, what)?)),
        None => Ok(None),
    }
}

impl Message {
    /// Parses a line with its comment, if any, removed.
    ///
    /// # Errors
    ///
    /// If the command is unknown or its arguments are invalid.
    pub fn from_line(line: &str) -> anyhow::Result<Self> {
        let mut line = Cow::from(line);
        if let Some(comment_offset) = line.find('#') {
            line.to_mut().replace_range(comment_offset.., "");
        }

        Self::from_str(line.as_ref())
    }
}

impl FromStr for Message {
    type Err = anyhow::Error;

    fn from_str(message: &str) -> anyhow::Result<Self> {
        let message = message.trim();
        let (command, rest) = message
            .split_once(char::is_whitespace)
            .map_or((message, ""), |(command, rest)| (command, rest.trim()));
        let mut args = rest.split_ascii_whitespace();

        match command {
            "" => Ok(Self::Empty),
            "advance" => Ok(Self::Advance),
            "is_complete" => Ok(Self::IsComplete(optional_number(args.next(), "round")?)),
            "known_command" => Ok(Self::KnownCommand(rest.to_string())),
            "list_commands" => Ok(Self::ListCommands),
            "name" => Ok(Self::Name),
            "phase" => Ok(Self::Phase),
            "players" => Ok(Self::Players),
            "quit" => Ok(Self::Quit),
            "register" => {
                if rest.is_empty() {
                    return Err(anyhow::Error::msg("expected: register NAME"));
                }
                Ok(Self::Register(rest.to_string()))
            }
            "register_list" => Ok(Self::RegisterList(rest.to_string())),
            "remove" => Ok(Self::Remove(number(args.next(), "player id")?)),
            "reset" => match args.next() {
                None => Ok(Self::Reset { confirmed: false }),
                Some("confirm") => Ok(Self::Reset { confirmed: true }),
                Some(word) => Err(anyhow::Error::msg(format!(
                    "expected: reset confirm, found '{word}'"
                ))),
            },
            "result" => {
                let error_str = "expected: result ROUND MATCH_ID RESULT";
                let round = number(args.next(), "round")?;
                let id = args.next().context(error_str)?;
                let result = GameResult::from_str(args.next().context(error_str)?)?;

                Ok(Self::Result(round, id.to_string(), result))
            }
            "round" => Ok(Self::Round(optional_number(args.next(), "round")?)),
            "standings" => Ok(Self::Standings),
            "start" => Ok(Self::Start(number(args.next(), "number of rounds")?)),
            "version" => Ok(Self::Version),
            command => Err(anyhow::Error::msg(format!("unrecognized command: {command}"))),
        }
    }
}
