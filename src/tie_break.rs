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

use rustc_hash::FxHashMap;

use crate::{Id, player::Player};

/// Sum of the current scores of everyone `player` has played. Byes add nothing
/// and opponents that are no longer registered count as zero.
#[must_use]
pub fn buchholz(player: &Player, players: &[Player]) -> f64 {
    let scores = scores(players);
    buchholz_with(player, &scores)
}

/// Recomputes the cached Buchholz of every player from scratch.
pub fn update_all(players: &mut [Player]) {
    let scores = scores(players);
    for player in players.iter_mut() {
        player.buchholz = buchholz_with(player, &scores);
    }
}

fn scores(players: &[Player]) -> FxHashMap<Id, f64> {
    players
        .iter()
        .map(|player| (player.id, player.score))
        .collect()
}

fn buchholz_with(player: &Player, scores: &FxHashMap<Id, f64>) -> f64 {
    player
        .opponent_ids
        .iter()
        .filter_map(|id| scores.get(id))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sums_opponent_scores() {
        let mut players = vec![
            Player {
                score: 2.0,
                opponent_ids: vec![2, 3],
                ..Player::new(1, "a")
            },
            Player {
                score: 1.5,
                opponent_ids: vec![1],
                ..Player::new(2, "b")
            },
            Player {
                score: 0.5,
                opponent_ids: vec![1],
                ..Player::new(3, "c")
            },
            Player {
                score: 1.0,
                had_bye: true,
                ..Player::new(4, "d")
            },
        ];

        assert!((buchholz(&players[0], &players) - 2.0).abs() < f64::EPSILON);

        update_all(&mut players);
        let buchholz: Vec<_> = players.iter().map(|player| player.buchholz).collect();
        assert_eq!(buchholz, vec![2.0, 2.0, 2.0, 0.0]);
    }
}
