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

use log::trace;
use serde::{Deserialize, Serialize};

use crate::{error::TournamentError, game_result::GameResult, matchup::Matchup};

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Round {
    pub number: u32,
    pub matchups: Vec<Matchup>,
}

impl Round {
    #[must_use]
    pub fn new(number: u32, matchups: Vec<Matchup>) -> Self {
        Self { number, matchups }
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.matchups.iter().all(Matchup::is_complete)
    }

    #[must_use]
    pub fn pending(&self) -> usize {
        self.matchups
            .iter()
            .filter(|matchup| !matchup.is_complete())
            .count()
    }
}

impl fmt::Display for Round {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "round {}", self.number)?;
        for matchup in &self.matchups {
            write!(f, "\n{matchup}")?;
        }

        Ok(())
    }
}

/// The round ledger: rounds 1, 2, 3, ... in order, never removed.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct Rounds(Vec<Round>);

impl Rounds {
    /// # Errors
    ///
    /// If the round number does not directly follow the last round.
    pub fn append(&mut self, round: Round) -> Result<(), TournamentError> {
        let expected = self.last_number() + 1;
        if round.number != expected {
            return Err(TournamentError::SequenceError {
                expected,
                found: round.number,
            });
        }

        trace!("append: {round}");
        self.0.push(round);

        Ok(())
    }

    /// # Errors
    ///
    /// If the round does not exist.
    pub fn round(&self, number: u32) -> Result<&Round, TournamentError> {
        self.0
            .iter()
            .find(|round| round.number == number)
            .ok_or_else(|| TournamentError::NotFound(format!("round {number}")))
    }

    /// Sets the result of one match. A result can be overwritten any number of
    /// times, including back to pending.
    ///
    /// # Errors
    ///
    /// If the round or the match does not exist or the matchup is a bye.
    pub fn record_result(
        &mut self,
        number: u32,
        match_id: &str,
        result: GameResult,
    ) -> Result<(), TournamentError> {
        let round = self
            .0
            .iter_mut()
            .find(|round| round.number == number)
            .ok_or_else(|| TournamentError::NotFound(format!("round {number}")))?;

        let matchup = round
            .matchups
            .iter_mut()
            .find(|matchup| matchup.id() == match_id)
            .ok_or_else(|| TournamentError::NotFound(format!("match {match_id}")))?;

        match matchup {
            Matchup::Match(game) => {
                game.result = result;
                Ok(())
            }
            Matchup::Bye(bye) => Err(TournamentError::InvalidTarget(bye.id.clone())),
        }
    }

    /// # Errors
    ///
    /// If the round does not exist.
    pub fn is_complete(&self, number: u32) -> Result<bool, TournamentError> {
        Ok(self.round(number)?.is_complete())
    }

    #[must_use]
    pub fn last_number(&self) -> u32 {
        self.0.last().map_or(0, |round| round.number)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Round> {
        self.0.iter()
    }
}
