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

//! Swiss pairing of one round.
//!
//! Players are ranked by score, highest first, and then by registration
//! order. An odd player out gets a bye, starting from the bottom of the
//! ranking with players who have not had one yet. The rest are paired
//! greedily from the top: everyone takes the first player below them they
//! have not already met, or the first player below them at all when every
//! remaining candidate is a past opponent. There is no backtracking.

use std::cmp::Ordering;

use log::debug;

use crate::{
    matchup::{Bye, Match, Matchup},
    player::Player,
};

/// Score descending, then registration order.
#[must_use]
pub fn ranking_order(a: &Player, b: &Player) -> Ordering {
    b.score.total_cmp(&a.score).then(a.id.cmp(&b.id))
}

/// Produces the matchups of round number `round`. The bye, if any, comes first.
///
/// Every player appears in exactly one matchup as long as there are at least
/// two players.
#[must_use]
pub fn pair(players: &[Player], round: u32) -> Vec<Matchup> {
    let mut ranked: Vec<&Player> = players.iter().collect();
    ranked.sort_by(|a, b| ranking_order(a, b));

    let mut matchups = Vec::with_capacity(ranked.len() / 2 + 1);

    if ranked.len() % 2 == 1 {
        let index = ranked
            .iter()
            .rposition(|player| !player.had_bye)
            .unwrap_or(ranked.len() - 1);

        let player = ranked.remove(index);
        debug!("round {round}: bye for {} {}", player.id, player.name);
        matchups.push(Matchup::Bye(Bye::new(round, player.id)));
    }

    let mut paired = vec![false; ranked.len()];

    for a in 0..ranked.len() {
        if paired[a] {
            continue;
        }

        let player_a = ranked[a];
        let open: Vec<usize> = (a + 1..ranked.len()).filter(|&b| !paired[b]).collect();
        let Some(&first_open) = open.first() else {
            continue;
        };

        let b = match open
            .iter()
            .copied()
            .find(|&b| !player_a.has_played(ranked[b].id))
        {
            Some(b) => b,
            None => {
                debug!(
                    "round {round}: {} has met everyone left, forcing a rematch",
                    player_a.id
                );
                first_open
            }
        };

        paired[a] = true;
        paired[b] = true;

        let player_b = ranked[b];
        let (first, second) = if player_a.color_balance <= player_b.color_balance {
            (player_a, player_b)
        } else {
            (player_b, player_a)
        };

        debug!("round {round}: {} vs {}", first.id, second.id);
        matchups.push(Matchup::Match(Match::new(round, first.id, second.id)));
    }

    matchups
}
