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

use log::{info, trace};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::{
    Id,
    error::TournamentError,
    game_result::{BYE, GameResult},
    matchup::Matchup,
    message::{COMMANDS, Message},
    pairing::pair,
    player::{Player, Players},
    round::{Round, Rounds},
    standings::Standings,
    tie_break,
};

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub enum Phase {
    #[default]
    Setup,
    InProgress,
    Finished,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Setup => write!(f, "setup"),
            Self::InProgress => write!(f, "in_progress"),
            Self::Finished => write!(f, "finished"),
        }
    }
}

/// What `advance` did after resolving the open round.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Advance {
    /// The next round was paired.
    Round(u32),
    Finished,
}

/// The single live tournament: registry, round ledger and lifecycle.
///
/// Every mutating call either succeeds completely or leaves the state as it
/// was. The whole value serializes to a plain snapshot.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Tournament {
    players: Players,
    rounds: Rounds,
    #[serde(default)]
    total_rounds: u32,
    #[serde(default)]
    current_round: u32,
    #[serde(default)]
    phase: Phase,
}

impl fmt::Display for Tournament {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "phase: {}", self.phase)?;

        if self.phase == Phase::Setup {
            writeln!(f, "players: {}", self.players.len())?;
        } else {
            writeln!(f, "round: {} of {}", self.current_round, self.total_rounds)?;
        }

        write!(f, "{}", self.standings())
    }
}

impl Tournament {
    fn require_phase(&self, expected: Phase) -> Result<(), TournamentError> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(TournamentError::WrongPhase {
                expected,
                actual: self.phase,
            })
        }
    }

    /// # Errors
    ///
    /// If the tournament has started or the name is blank or taken.
    pub fn register(&mut self, name: &str) -> Result<Id, TournamentError> {
        self.require_phase(Phase::Setup)?;
        self.players.register(name)
    }

    /// # Errors
    ///
    /// If the tournament has started.
    pub fn register_list(&mut self, list: &str) -> Result<Vec<Id>, TournamentError> {
        self.require_phase(Phase::Setup)?;
        Ok(self.players.register_list(list))
    }

    /// # Errors
    ///
    /// If the tournament has started or there is no such player.
    pub fn remove(&mut self, id: Id) -> Result<Player, TournamentError> {
        self.require_phase(Phase::Setup)?;
        self.players.remove(id)
    }

    /// Pairs round 1 and opens the tournament.
    ///
    /// # Errors
    ///
    /// If the tournament is not in setup, fewer than two players are
    /// registered or `rounds` is zero.
    pub fn start(&mut self, rounds: u32) -> Result<&Round, TournamentError> {
        if self.phase != Phase::Setup {
            return Err(TournamentError::InvalidConfiguration(format!(
                "the tournament is already {}",
                self.phase
            )));
        }

        if self.players.len() < 2 {
            return Err(TournamentError::InvalidConfiguration(format!(
                "at least 2 players are needed, {} registered",
                self.players.len()
            )));
        }

        if rounds == 0 {
            return Err(TournamentError::InvalidConfiguration(
                "the number of rounds has to be at least 1".to_string(),
            ));
        }

        let mut ledger = Rounds::default();
        ledger.append(Round::new(1, pair(self.players.snapshot(), 1)))?;

        self.rounds = ledger;
        self.total_rounds = rounds;
        self.current_round = 1;
        self.phase = Phase::InProgress;
        info!(
            "started a tournament of {rounds} rounds with {} players",
            self.players.len()
        );

        self.rounds.round(1)
    }

    /// Records the result of a match in the open round.
    ///
    /// # Errors
    ///
    /// If the tournament is not in progress, the round is already resolved,
    /// the round or match does not exist or the matchup is a bye.
    pub fn record_result(
        &mut self,
        round: u32,
        match_id: &str,
        result: GameResult,
    ) -> Result<(), TournamentError> {
        self.require_phase(Phase::InProgress)?;

        if (1..self.current_round).contains(&round) {
            return Err(TournamentError::RoundClosed(round));
        }

        self.rounds.record_result(round, match_id, result)?;
        trace!("round {round}: {match_id} {result}");

        Ok(())
    }

    /// Resolves the open round into the player states, then either pairs the
    /// next round or finishes the tournament.
    ///
    /// # Errors
    ///
    /// If the tournament is not in progress or the open round has pending
    /// results.
    pub fn advance(&mut self) -> Result<Advance, TournamentError> {
        self.require_phase(Phase::InProgress)?;

        let round = self.rounds.round(self.current_round)?;
        let players = resolve_round(self.players.snapshot(), round)?;

        if self.current_round >= self.total_rounds {
            self.players.replace(players);
            self.phase = Phase::Finished;
            info!("round {} resolved, the tournament is finished", self.current_round);

            return Ok(Advance::Finished);
        }

        let next = self.current_round + 1;
        self.rounds.append(Round::new(next, pair(&players, next)))?;
        self.players.replace(players);
        self.current_round = next;
        info!("round {} resolved, round {next} paired", next - 1);

        Ok(Advance::Round(next))
    }

    /// Throws everything away and goes back to setup.
    pub fn reset(&mut self) {
        *self = Self::default();
        info!("the tournament was reset");
    }

    #[must_use]
    pub fn players(&self) -> &[Player] {
        self.players.snapshot()
    }

    #[must_use]
    pub fn player(&self, id: Id) -> Option<&Player> {
        self.players.get(id)
    }

    /// # Errors
    ///
    /// If the round does not exist.
    pub fn round(&self, number: u32) -> Result<&Round, TournamentError> {
        self.rounds.round(number)
    }

    #[must_use]
    pub fn rounds(&self) -> &Rounds {
        &self.rounds
    }

    /// # Errors
    ///
    /// If the round does not exist.
    pub fn is_complete(&self, number: u32) -> Result<bool, TournamentError> {
        self.rounds.is_complete(number)
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Zero before the tournament starts.
    #[must_use]
    pub fn current_round(&self) -> u32 {
        self.current_round
    }

    #[must_use]
    pub fn total_rounds(&self) -> u32 {
        self.total_rounds
    }

    #[must_use]
    pub fn standings(&self) -> Standings {
        Standings::new(self.players.snapshot())
    }

    /// # Errors
    ///
    /// If the command is illegal or invalid.
    pub fn read_line(&mut self, buffer: &str) -> anyhow::Result<Option<String>> {
        self.update(Message::from_line(buffer)?)
    }

    /// `Quit` is left to the caller and answers nothing here.
    ///
    /// # Errors
    ///
    /// If the command is illegal or invalid.
    pub fn update(&mut self, message: Message) -> anyhow::Result<Option<String>> {
        match message {
            Message::Advance => match self.advance()? {
                Advance::Round(number) => Ok(Some(self.round(number)?.to_string())),
                Advance::Finished => Ok(Some(format!("finished\n{}", self.standings()))),
            },
            Message::Empty | Message::Quit => Ok(None),
            Message::IsComplete(number) => {
                let number = number.unwrap_or(self.current_round);
                Ok(Some(self.is_complete(number)?.to_string()))
            }
            Message::KnownCommand(command) => {
                Ok(Some(COMMANDS.contains(&command.as_str()).to_string()))
            }
            Message::ListCommands => {
                let mut commands = "\n".to_string();
                commands.push_str(&COMMANDS.join("\n"));
                Ok(Some(commands))
            }
            Message::Name => Ok(Some(env!("CARGO_PKG_NAME").to_string())),
            Message::Phase => Ok(Some(self.phase.to_string())),
            Message::Players => Ok(Some(format!("\n{}", self.players))),
            Message::Register(name) => Ok(Some(self.register(&name)?.to_string())),
            Message::RegisterList(list) => {
                let ids: Vec<_> = self
                    .register_list(&list)?
                    .iter()
                    .map(ToString::to_string)
                    .collect();
                Ok(Some(ids.join(" ")))
            }
            Message::Remove(id) => Ok(Some(self.remove(id)?.name)),
            Message::Reset { confirmed } => {
                if !confirmed {
                    return Err(anyhow::Error::msg(
                        "reset: this throws the whole tournament away, enter 'reset confirm'",
                    ));
                }

                self.reset();
                Ok(Some(String::new()))
            }
            Message::Result(round, id, result) => {
                self.record_result(round, &id, result)?;
                Ok(Some(String::new()))
            }
            Message::Round(number) => {
                let number = number.unwrap_or(self.current_round);
                Ok(Some(self.round(number)?.to_string()))
            }
            Message::Standings => Ok(Some(format!("\n{}", self.standings()))),
            Message::Start(rounds) => Ok(Some(self.start(rounds)?.to_string())),
            Message::Version => Ok(Some(env!("CARGO_PKG_VERSION").to_string())),
        }
    }
}

/// Folds a completed round into a new set of player states: opponents,
/// color balance and score for every match, the full point and bye flag for
/// the bye, then every player's Buchholz against the new scores.
///
/// # Errors
///
/// If the round has pending results or names a player that is not in
/// `players`.
pub fn resolve_round(players: &[Player], round: &Round) -> Result<Vec<Player>, TournamentError> {
    if !round.is_complete() {
        return Err(TournamentError::RoundIncomplete(round.number));
    }

    let mut players = players.to_vec();
    let index: FxHashMap<Id, usize> = players
        .iter()
        .enumerate()
        .map(|(i, player)| (player.id, i))
        .collect();

    for matchup in &round.matchups {
        match matchup {
            Matchup::Match(game) => {
                let [first, second] = game.sides();
                for ((id, color), (opponent, _)) in [(first, second), (second, first)] {
                    let player = player_mut(&mut players, &index, id)?;
                    player.opponent_ids.push(opponent);
                    player.color_balance += color.balance_delta();
                    player.score += game.result.points(color);
                }
            }
            Matchup::Bye(bye) => {
                let player = player_mut(&mut players, &index, bye.player)?;
                player.score += BYE;
                player.had_bye = true;
            }
        }
    }

    tie_break::update_all(&mut players);

    Ok(players)
}

fn player_mut<'a>(
    players: &'a mut [Player],
    index: &FxHashMap<Id, usize>,
    id: Id,
) -> Result<&'a mut Player, TournamentError> {
    index
        .get(&id)
        .and_then(|&i| players.get_mut(i))
        .ok_or_else(|| TournamentError::NotFound(format!("player {id}")))
}
