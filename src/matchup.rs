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

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{Id, color::Color, game_result::GameResult};

/// One game of a round.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Match {
    pub id: String,
    pub first: Id,
    pub second: Id,
    #[serde(default)]
    pub result: GameResult,
}

impl Match {
    #[must_use]
    pub fn new(round: u32, first: Id, second: Id) -> Self {
        Self {
            id: format!("{round}-{first}-{second}"),
            first,
            second,
            result: GameResult::Pending,
        }
    }

    /// Both players with the color each one holds.
    #[must_use]
    pub fn sides(&self) -> [(Id, Color); 2] {
        [(self.first, Color::First), (self.second, Color::Second)]
    }
}

/// A player sitting out a round with a full point.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Bye {
    pub id: String,
    pub player: Id,
}

impl Bye {
    #[must_use]
    pub fn new(round: u32, player: Id) -> Self {
        Self {
            id: format!("{round}-bye-{player}"),
            player,
        }
    }
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum Matchup {
    Match(Match),
    Bye(Bye),
}

impl Matchup {
    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::Match(game) => &game.id,
            Self::Bye(bye) => &bye.id,
        }
    }

    #[must_use]
    pub fn player_ids(&self) -> Vec<Id> {
        match self {
            Self::Match(game) => vec![game.first, game.second],
            Self::Bye(bye) => vec![bye.player],
        }
    }

    /// Byes never wait on a result.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        match self {
            Self::Match(game) => !game.result.is_pending(),
            Self::Bye(_) => true,
        }
    }
}

impl fmt::Display for Matchup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Match(game) => write!(
                f,
                "{} {} {} {}",
                game.id, game.first, game.second, game.result
            ),
            Self::Bye(bye) => write!(f, "{} {} bye", bye.id, bye.player),
        }
    }
}
