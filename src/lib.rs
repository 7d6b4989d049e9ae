//! A pairing and scoring engine for Swiss-system chess tournaments.
//!
//! Players register, the engine pairs round after round by score while
//! avoiding rematches and balancing colors, folds each round's results into
//! the standings and ranks the field by score and Buchholz.
//!
//! ## Text Protocol
//!
//! The `swiss-tournament` binary drives a [`tournament::Tournament`] with one
//! [`message::Message`] per line and answers `= <reply>` or `? <error>`.

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

#![deny(clippy::panic)]

pub mod color;
pub mod error;
pub mod game_result;
pub mod matchup;
pub mod message;
pub mod pairing;
pub mod player;
pub mod round;
pub mod standings;
pub mod tie_break;
pub mod tournament;
pub mod utils;

pub type Id = u64;
pub const HOME: &str = "swiss-tournament";
pub const DATA_FILE: &str = "tournament.ron";

pub const COPYRIGHT: &str = r".SH COPYRIGHT
Copyright (C) 2026 Developers of the swiss-tournament project

This program is free software: you can redistribute it and/or modify
it under the terms of the GNU Affero General Public License as published by
the Free Software Foundation, either version 3 of the License, or
(at your option) any later version.

This program is distributed in the hope that it will be useful,
but WITHOUT ANY WARRANTY; without even the implied warranty of
MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
GNU Affero General Public License for more details.

You should have received a copy of the GNU Affero General Public License
along with this program.  If not, see <https://www.gnu.org/licenses/>.
";

pub const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    "
Copyright (c) 2026 Developers of the swiss-tournament project
Licensed under the AGPLv3"
);

#[cfg(test)]
mod tests {
    use std::fmt;

    use proptest::prelude::*;

    use super::*;
    use game_result::GameResult;
    use matchup::Matchup;
    use tournament::{Advance, Phase, Tournament};

    fn assert_error_str<T: fmt::Debug>(result: anyhow::Result<T>, string: &str) {
        assert!(result.is_err(), "expected the error: {string}");
        if let Err(error) = result {
            assert_eq!(error.to_string(), string);
        }
    }

    fn open_matches(tournament: &Tournament) -> Vec<String> {
        tournament
            .round(tournament.current_round())
            .map(|round| {
                round
                    .matchups
                    .iter()
                    .filter_map(|matchup| match matchup {
                        Matchup::Match(game) => Some(game.id.clone()),
                        Matchup::Bye(_) => None,
                    })
                    .collect()
            })
            .unwrap_or_default()
    }

    #[test]
    fn protocol_round_trip() -> anyhow::Result<()> {
        let mut tournament = Tournament::default();

        assert_eq!(
            tournament.read_line("register_list A, B, C\n")?,
            Some("1 2 3".to_string())
        );
        assert_eq!(
            tournament.read_line("register D # late entry")?,
            Some("4".to_string())
        );
        assert_eq!(tournament.read_line("# nothing")?, None);
        assert_eq!(tournament.read_line("phase")?, Some("setup".to_string()));

        assert_eq!(
            tournament.read_line("start 2")?,
            Some("round 1\n1-1-2 1 2 pending\n1-3-4 3 4 pending".to_string())
        );
        assert_eq!(tournament.read_line("is_complete")?, Some("false".to_string()));
        tournament.read_line("result 1 1-1-2 1-0")?;
        tournament.read_line("result 1 1-3-4 1/2-1/2")?;
        assert_eq!(tournament.read_line("is_complete 1")?, Some("true".to_string()));

        assert_eq!(
            tournament.read_line("advance")?,
            Some("round 2\n2-1-3 1 3 pending\n2-4-2 4 2 pending".to_string())
        );
        assert_eq!(tournament.read_line("phase")?, Some("in_progress".to_string()));

        Ok(())
    }

    #[test]
    fn protocol_errors() {
        let mut tournament = Tournament::default();

        assert_error_str(
            tournament.read_line("start 3"),
            "start: at least 2 players are needed, 0 registered",
        );
        assert_error_str(
            tournament.read_line("advance"),
            "the tournament has to be in the in_progress phase, it is in the setup phase",
        );
        assert_error_str(tournament.read_line("round 1"), "not found: round 1");
        assert_error_str(tournament.read_line("castle"), "unrecognized command: castle");

        tournament.read_line("register Hou Yifan").ok();
        assert_error_str(
            tournament.read_line("register hou yifan"),
            "register: the name 'hou yifan' is already taken",
        );
    }

    #[test]
    fn termination_after_the_last_round() -> anyhow::Result<()> {
        for total in 1..=4 {
            let mut tournament = Tournament::default();
            tournament.register_list("A, B, C, D, E, F, G")?;
            tournament.start(total)?;

            for advanced in 1..=total {
                assert_eq!(tournament.phase(), Phase::InProgress);
                for id in open_matches(&tournament) {
                    tournament.record_result(advanced, &id, GameResult::FirstWins)?;
                }

                let advance = tournament.advance()?;
                if advanced == total {
                    assert_eq!(advance, Advance::Finished);
                } else {
                    assert_eq!(advance, Advance::Round(advanced + 1));
                }
            }

            assert_eq!(tournament.phase(), Phase::Finished);
            assert_eq!(tournament.rounds().len(), usize::try_from(total)?);
        }

        Ok(())
    }

    #[test]
    fn byes_rotate_before_repeating() -> anyhow::Result<()> {
        let mut tournament = Tournament::default();
        tournament.register_list("A, B, C")?;
        tournament.start(4)?;

        let mut byes = Vec::new();
        loop {
            let round = tournament.round(tournament.current_round())?;
            for matchup in &round.matchups {
                if let Matchup::Bye(bye) = matchup {
                    byes.push(bye.player);
                }
            }

            for id in open_matches(&tournament) {
                tournament.record_result(tournament.current_round(), &id, GameResult::Draw)?;
            }

            if tournament.advance()? == Advance::Finished {
                break;
            }
        }

        let mut first_three = byes[..3].to_vec();
        first_three.sort_unstable();
        assert_eq!(first_three, vec![1, 2, 3]);
        assert_eq!(byes.len(), 4);

        Ok(())
    }

    #[test]
    fn snapshot_round_trip() -> anyhow::Result<()> {
        let mut tournament = Tournament::default();
        tournament.register_list("A, B, C")?;
        tournament.start(2)?;
        tournament.record_result(1, "1-1-2", GameResult::SecondWins)?;

        let snapshot = ron::ser::to_string(&tournament)?;
        let restored: Tournament = ron::from_str(&snapshot)?;
        assert_eq!(restored, tournament);

        Ok(())
    }

    fn results() -> impl Strategy<Value = Vec<GameResult>> {
        proptest::collection::vec(
            prop_oneof![
                Just(GameResult::FirstWins),
                Just(GameResult::SecondWins),
                Just(GameResult::Draw),
            ],
            64,
        )
    }

    proptest! {
        #[test]
        fn scores_and_buchholz_stay_consistent(
            players in 2_usize..12,
            total in 1_u32..6,
            results in results(),
        ) {
            let mut tournament = Tournament::default();
            for i in 0..players {
                let name = format!("player {i}");
                prop_assert!(tournament.register(&name).is_ok());
            }
            prop_assert!(tournament.start(total).is_ok());

            let mut results = results.into_iter().cycle();
            let mut advances = 0;

            while tournament.phase() == Phase::InProgress {
                let before: Vec<f64> = tournament.players().iter().map(|p| p.score).collect();
                for id in open_matches(&tournament) {
                    let result = results.next().unwrap_or(GameResult::Draw);
                    prop_assert!(tournament.record_result(tournament.current_round(), &id, result).is_ok());
                }

                prop_assert!(tournament.advance().is_ok());
                advances += 1;

                let after = tournament.players();
                for (old, new) in before.iter().zip(after) {
                    prop_assert!(new.score >= *old);
                }

                for player in after {
                    prop_assert!((player.buchholz - tie_break::buchholz(player, after)).abs() < 1e-9);
                    let expected: f64 = player
                        .opponent_ids
                        .iter()
                        .filter_map(|id| tournament.player(*id))
                        .map(|opponent| opponent.score)
                        .sum();
                    prop_assert!((player.buchholz - expected).abs() < 1e-9);
                }
            }

            prop_assert_eq!(advances, total);

            let points: f64 = tournament.players().iter().map(|p| p.score).sum();
            let games = f64::from(total) * f64::from(u32::try_from(players / 2).unwrap_or(0));
            let byes = if players % 2 == 1 { f64::from(total) } else { 0.0 };
            prop_assert!((points - games - byes).abs() < 1e-9);
        }
    }
}
