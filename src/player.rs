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

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::{Id, error::TournamentError};

/// A registered player and everything the engine knows about their event.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Player {
    pub id: Id,
    pub name: String,
    #[serde(default)]
    pub score: f64,
    /// Cached tie-break, refreshed every time a round is resolved.
    #[serde(default)]
    pub buchholz: f64,
    #[serde(default)]
    pub opponent_ids: Vec<Id>,
    #[serde(default)]
    pub had_bye: bool,
    /// +1 for every game with the first color, -1 for every game with the second.
    #[serde(default)]
    pub color_balance: i32,
}

impl Player {
    #[must_use]
    pub fn new(id: Id, name: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn has_played(&self, opponent: Id) -> bool {
        self.opponent_ids.contains(&opponent)
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {:.1} {:.1} {}",
            self.id, self.score, self.buchholz, self.name
        )
    }
}

/// The player registry. Ids are handed out in registration order starting at 1.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Players {
    players: Vec<Player>,
    #[serde(default)]
    next_id: Id,
}

impl Players {
    /// # Errors
    ///
    /// If the name is blank or already taken, ignoring case.
    pub fn register(&mut self, name: &str) -> Result<Id, TournamentError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(TournamentError::EmptyName);
        }

        if self.contains_name(name) {
            return Err(TournamentError::DuplicateName(name.to_string()));
        }

        // Snapshots without a counter still never reuse an id.
        let highest = self.players.iter().map(|player| player.id).max();
        let id = self.next_id.max(highest.unwrap_or(0)) + 1;
        self.next_id = id;
        self.players.push(Player::new(id, name));
        debug!("registered {name} as player {id}");

        Ok(id)
    }

    /// Registers every name in a comma or newline separated list, skipping
    /// blanks and names that are already taken.
    pub fn register_list(&mut self, list: &str) -> Vec<Id> {
        let mut ids = Vec::new();

        for name in list.split([',', '\n']).map(str::trim) {
            if name.is_empty() {
                continue;
            }

            match self.register(name) {
                Ok(id) => ids.push(id),
                Err(error) => warn!("register_list: {error}"),
            }
        }

        ids
    }

    /// # Errors
    ///
    /// If there is no player with the id.
    pub fn remove(&mut self, id: Id) -> Result<Player, TournamentError> {
        let Some(index) = self.players.iter().position(|player| player.id == id) else {
            return Err(TournamentError::NotFound(format!("player {id}")));
        };

        let player = self.players.remove(index);
        debug!("removed player {id} {}", player.name);

        Ok(player)
    }

    #[must_use]
    pub fn contains_name(&self, name: &str) -> bool {
        let name = name.to_lowercase();
        self.players
            .iter()
            .any(|player| player.name.to_lowercase() == name)
    }

    #[must_use]
    pub fn get(&self, id: Id) -> Option<&Player> {
        self.players.iter().find(|player| player.id == id)
    }

    #[must_use]
    pub fn snapshot(&self) -> &[Player] {
        &self.players
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.players.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub(crate) fn replace(&mut self, players: Vec<Player>) {
        self.players = players;
    }
}

impl fmt::Display for Players {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let players: Vec<_> = self.players.iter().map(ToString::to_string).collect();
        write!(f, "{}", players.join("\n"))
    }
}
