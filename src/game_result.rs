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

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::color::Color;

pub const WIN: f64 = 1.0;
pub const DRAW: f64 = 0.5;
pub const BYE: f64 = 1.0;

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum GameResult {
    FirstWins,
    Draw,
    #[default]
    Pending,
    SecondWins,
}

impl GameResult {
    #[must_use]
    pub fn is_pending(self) -> bool {
        self == Self::Pending
    }

    /// Points earned by the player holding `color`.
    #[must_use]
    pub fn points(self, color: Color) -> f64 {
        match (self, color) {
            (Self::FirstWins, Color::First) | (Self::SecondWins, Color::Second) => WIN,
            (Self::Draw, _) => DRAW,
            _ => 0.0,
        }
    }
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FirstWins => write!(f, "1-0"),
            Self::Draw => write!(f, "1/2-1/2"),
            Self::Pending => write!(f, "pending"),
            Self::SecondWins => write!(f, "0-1"),
        }
    }
}

impl FromStr for GameResult {
    type Err = anyhow::Error;

    fn from_str(value: &str) -> anyhow::Result<Self> {
        match value.to_lowercase().as_str() {
            "1-0" | "white" | "first" => Ok(Self::FirstWins),
            "1/2-1/2" | "½-½" | "draw" => Ok(Self::Draw),
            "pending" => Ok(Self::Pending),
            "0-1" | "black" | "second" => Ok(Self::SecondWins),
            _ => Err(anyhow::Error::msg(format!("invalid result: {value}"))),
        }
    }
}
