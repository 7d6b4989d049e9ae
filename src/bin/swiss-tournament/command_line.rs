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

use std::{io::Write as _, path::PathBuf};

use clap::{CommandFactory, Parser};
use swiss_tournament::{COPYRIGHT, LONG_VERSION};

/// Swiss Tournament
///
/// Runs a Swiss-system chess tournament one text command per line. Enter
/// 'list_commands' for a list of commands.
#[allow(clippy::struct_excessive_bools)]
#[derive(Parser, Debug)]
#[command(long_version = LONG_VERSION, about = "Swiss Tournament")]
pub(crate) struct Args {
    /// Whether to log on the debug level
    #[arg(long)]
    pub debug: bool,

    /// Print the standings after every command
    #[arg(long)]
    pub display: bool,

    /// Where to keep the tournament between runs
    #[arg(long, value_name = "path")]
    pub data_file: Option<PathBuf>,

    /// Write the final standings as CSV once the tournament is finished
    #[arg(long, value_name = "path")]
    pub export: Option<PathBuf>,

    /// Whether to skip the data file
    #[arg(long)]
    pub skip_the_data_file: bool,

    /// Play a whole tournament of this many rounds with random results
    #[arg(long, value_name = "rounds", requires = "players")]
    pub simulate: Option<u32>,

    /// Comma separated players for --simulate
    #[arg(long, value_name = "list")]
    pub players: Option<String>,

    /// Whether the application is being run by systemd
    #[arg(long)]
    pub systemd: bool,

    /// Build the manpage
    #[arg(long)]
    pub man: bool,
}

impl Args {
    pub(crate) fn generate_man_page() -> anyhow::Result<()> {
        let mut buffer: Vec<u8> = Vec::default();
        let cmd = Self::command().name("swiss-tournament").long_version(None);
        let man = clap_mangen::Man::new(cmd).date("2026-10-16");

        man.render(&mut buffer)?;
        write!(buffer, "{COPYRIGHT}")?;

        std::fs::write("swiss-tournament.1", buffer)?;
        Ok(())
    }
}
