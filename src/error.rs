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

use thiserror::Error;

use crate::tournament::Phase;

/// Every way an engine operation can be rejected.
///
/// A call that returns one of these has left the tournament unchanged.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum TournamentError {
    #[error("register: the name '{0}' is already taken")]
    DuplicateName(String),
    #[error("register: the name is empty")]
    EmptyName,
    #[error("not found: {0}")]
    NotFound(String),
    #[error("append: expected round {expected}, found round {found}")]
    SequenceError { expected: u32, found: u32 },
    #[error("result: the matchup '{0}' is a bye")]
    InvalidTarget(String),
    #[error("advance: round {0} still has pending results")]
    RoundIncomplete(u32),
    #[error("result: round {0} is not the open round")]
    RoundClosed(u32),
    #[error("start: {0}")]
    InvalidConfiguration(String),
    #[error("the tournament has to be in the {expected} phase, it is in the {actual} phase")]
    WrongPhase { expected: Phase, actual: Phase },
}
