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

#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::unwrap_used)]

mod command_line;

use std::{
    fs::{self, File},
    io,
    path::Path,
};

use anyhow::Context;
use clap::Parser;
use log::{debug, error, info};
use rand::seq::IndexedRandom;
use ron::ser::PrettyConfig;
use swiss_tournament::{
    DATA_FILE,
    game_result::GameResult,
    matchup::Matchup,
    message::Message,
    tournament::{Advance, Phase, Tournament},
    utils,
};

use crate::command_line::Args;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if args.man {
        return Args::generate_man_page();
    }

    utils::init_logger(args.debug, args.systemd);

    if let Some(rounds) = args.simulate {
        let players = args.players.as_deref().unwrap_or_default();
        return simulate(players, rounds, args.export.as_deref());
    }

    let data_file = if args.skip_the_data_file {
        None
    } else if let Some(data_file) = args.data_file {
        Some(data_file)
    } else {
        utils::create_data_folder()?;
        Some(utils::data_file(DATA_FILE))
    };

    let mut tournament = match &data_file {
        Some(path) => load(path)?,
        None => Tournament::default(),
    };

    play(
        &mut tournament,
        data_file.as_deref(),
        args.display,
        args.export.as_deref(),
    )
}

fn load(path: &Path) -> anyhow::Result<Tournament> {
    if !path.exists() {
        info!("no tournament at {}, starting a new one", path.display());
        return Ok(Tournament::default());
    }

    let snapshot = fs::read_to_string(path)
        .with_context(|| format!("reading the tournament from {}", path.display()))?;
    let tournament: Tournament = ron::from_str(&snapshot)
        .with_context(|| format!("parsing the tournament in {}", path.display()))?;
    info!(
        "loaded the tournament from {}, it is in the {} phase",
        path.display(),
        tournament.phase()
    );

    Ok(tournament)
}

fn save(path: &Path, tournament: &Tournament) -> anyhow::Result<()> {
    let snapshot = ron::ser::to_string_pretty(tournament, PrettyConfig::default())?;
    fs::write(path, snapshot)
        .with_context(|| format!("saving the tournament to {}", path.display()))?;
    debug!("saved the tournament to {}", path.display());

    Ok(())
}

fn export(path: &Path, tournament: &Tournament) -> anyhow::Result<()> {
    let file = File::create(path)?;
    tournament.standings().write_csv(file)?;
    info!("wrote the standings to {}", path.display());

    Ok(())
}

fn changes_state(message: &Message) -> bool {
    matches!(
        message,
        Message::Advance
            | Message::Register(_)
            | Message::RegisterList(_)
            | Message::Remove(_)
            | Message::Reset { confirmed: true }
            | Message::Result(..)
            | Message::Start(_)
    )
}

enum Step {
    Reply(Option<String>),
    Quit,
}

/// Runs one line of the protocol and saves the tournament if the line
/// changed it. A reply is only given once the change is on disk.
fn step(
    tournament: &mut Tournament,
    line: &str,
    data_file: Option<&Path>,
) -> anyhow::Result<Step> {
    let message = Message::from_line(line)?;
    if message == Message::Quit {
        return Ok(Step::Quit);
    }

    let save_after = changes_state(&message);
    let reply = tournament.update(message)?;

    if save_after
        && let Some(path) = data_file
        && let Err(error) = save(path, tournament)
    {
        error!("{error:#}");
        return Err(error);
    }

    Ok(Step::Reply(reply))
}

fn play(
    tournament: &mut Tournament,
    data_file: Option<&Path>,
    display: bool,
    export_file: Option<&Path>,
) -> anyhow::Result<()> {
    let mut buffer = String::new();
    let stdin = io::stdin();

    if display {
        println!("{tournament}\n");
        println!("Enter 'list_commands' for a list of commands.");
    }

    loop {
        buffer.clear();
        match stdin.read_line(&mut buffer) {
            Ok(0) => break,
            Ok(_) => {}
            Err(error) => {
                println!("? {error}\n");
                break;
            }
        }

        match step(tournament, &buffer, data_file) {
            Ok(Step::Quit) => break,
            Ok(Step::Reply(Some(reply))) => println!("= {reply}\n"),
            Ok(Step::Reply(None)) => {}
            Err(error) => println!("? {error:#}\n"),
        }

        if display {
            println!("{tournament}\n");
        }
    }

    if let Some(path) = export_file
        && tournament.phase() == Phase::Finished
    {
        export(path, tournament)?;
    }

    Ok(())
}

/// Plays out a whole tournament with random results.
fn simulate(players: &str, rounds: u32, export_file: Option<&Path>) -> anyhow::Result<()> {
    const RESULTS: [GameResult; 3] = [
        GameResult::FirstWins,
        GameResult::Draw,
        GameResult::SecondWins,
    ];

    let mut rng = rand::rng();
    let mut tournament = Tournament::default();
    tournament.register_list(players)?;
    println!("{}", tournament.start(rounds)?);

    loop {
        let number = tournament.current_round();
        let ids: Vec<String> = tournament
            .round(number)?
            .matchups
            .iter()
            .filter_map(|matchup| match matchup {
                Matchup::Match(game) => Some(game.id.clone()),
                Matchup::Bye(_) => None,
            })
            .collect();

        for id in ids {
            let result = *RESULTS.choose(&mut rng).context("no results")?;
            tournament.record_result(number, &id, result)?;
        }

        match tournament.advance()? {
            Advance::Round(next) => println!("\n{}", tournament.round(next)?),
            Advance::Finished => break,
        }
    }

    println!("\n{}", tournament.standings());

    if let Some(path) = export_file {
        export(path, &tournament)?;
    }

    Ok(())
}
