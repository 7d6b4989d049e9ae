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

use std::{fmt, io};

use serde::Serialize;

use crate::{Id, player::Player};

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Standing {
    pub rank: usize,
    pub id: Id,
    pub name: String,
    pub score: f64,
    pub buchholz: f64,
}

/// Everyone ranked by score, then Buchholz, then registration order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Standings(pub Vec<Standing>);

impl Standings {
    #[must_use]
    pub fn new(players: &[Player]) -> Self {
        let mut players: Vec<&Player> = players.iter().collect();
        players.sort_by(|a, b| {
            b.score
                .total_cmp(&a.score)
                .then(b.buchholz.total_cmp(&a.buchholz))
                .then(a.id.cmp(&b.id))
        });

        Self(
            players
                .into_iter()
                .zip(1..)
                .map(|(player, rank)| Standing {
                    rank,
                    id: player.id,
                    name: player.name.clone(),
                    score: player.score,
                    buchholz: player.buchholz,
                })
                .collect(),
        )
    }

    /// # Errors
    ///
    /// If writing fails.
    pub fn write_csv<W: io::Write>(&self, writer: W) -> anyhow::Result<()> {
        let mut writer = csv::Writer::from_writer(writer);
        for standing in &self.0 {
            writer.serialize(standing)?;
        }
        writer.flush()?;

        Ok(())
    }
}

impl fmt::Display for Standings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:>4}  {:<24} {:>6} {:>9}",
            "Rank", "Name", "Score", "Buchholz"
        )?;

        for standing in &self.0 {
            write!(
                f,
                "\n{:>4}  {:<24} {:>6.1} {:>9.1}",
                standing.rank, standing.name, standing.score, standing.buchholz
            )?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranked_by_score_then_buchholz() -> anyhow::Result<()> {
        let players = vec![
            Player {
                score: 1.0,
                buchholz: 1.0,
                ..Player::new(1, "Anand")
            },
            Player {
                score: 2.0,
                buchholz: 0.5,
                ..Player::new(2, "Carlsen")
            },
            Player {
                score: 1.0,
                buchholz: 2.0,
                ..Player::new(3, "Ding")
            },
            Player {
                score: 1.0,
                buchholz: 1.0,
                ..Player::new(4, "Gukesh")
            },
        ];

        let standings = Standings::new(&players);
        let order: Vec<_> = standings.0.iter().map(|row| (row.rank, row.id)).collect();
        assert_eq!(order, vec![(1, 2), (2, 3), (3, 1), (4, 4)]);

        let mut csv = Vec::new();
        standings.write_csv(&mut csv)?;
        let csv = String::from_utf8(csv)?;
        assert_eq!(csv.lines().next(), Some("rank,id,name,score,buchholz"));
        assert_eq!(csv.lines().nth(1), Some("1,2,Carlsen,2.0,0.5"));

        Ok(())
    }
}
