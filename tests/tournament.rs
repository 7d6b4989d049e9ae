use swiss_tournament::{
    game_result::GameResult,
    tournament::{Phase, Tournament},
};

fn reply(tournament: &mut Tournament, line: &str) -> anyhow::Result<String> {
    Ok(tournament.read_line(line)?.unwrap_or_default())
}

#[test]
fn five_players_two_rounds() -> anyhow::Result<()> {
    let mut tournament = Tournament::default();

    assert_eq!(
        reply(&mut tournament, "register_list Alice, Bob, Carol, Dave, Eve")?,
        "1 2 3 4 5"
    );
    assert_eq!(
        reply(&mut tournament, "start 2")?,
        "round 1\n1-bye-5 5 bye\n1-1-2 1 2 pending\n1-3-4 3 4 pending"
    );

    // Results can be corrected until the round is resolved.
    reply(&mut tournament, "result 1 1-1-2 0-1")?;
    reply(&mut tournament, "result 1 1-1-2 1-0")?;
    reply(&mut tournament, "result 1 1-3-4 0-1")?;
    assert!(tournament.read_line("result 1 1-bye-5 1-0").is_err());

    assert_eq!(
        reply(&mut tournament, "advance")?,
        "round 2\n2-bye-3 3 bye\n2-4-1 4 1 pending\n2-2-5 2 5 pending"
    );

    reply(&mut tournament, "result 2 2-4-1 1/2-1/2")?;
    reply(&mut tournament, "result 2 2-2-5 0-1")?;
    assert!(reply(&mut tournament, "advance")?.starts_with("finished\n"));
    assert_eq!(tournament.phase(), Phase::Finished);

    let rows: Vec<_> = tournament
        .standings()
        .0
        .iter()
        .map(|row| (row.id, row.score, row.buchholz))
        .collect();
    assert_eq!(
        rows,
        vec![
            (5, 2.0, 0.0),
            (4, 1.5, 2.5),
            (1, 1.5, 1.5),
            (3, 1.0, 1.5),
            (2, 0.0, 3.5),
        ]
    );

    let mut csv = Vec::new();
    tournament.standings().write_csv(&mut csv)?;
    let csv = String::from_utf8(csv)?;
    let mut lines = csv.lines();
    assert_eq!(lines.next(), Some("rank,id,name,score,buchholz"));
    assert_eq!(lines.next(), Some("1,5,Eve,2.0,0.0"));
    assert_eq!(lines.last(), Some("5,2,Bob,0.0,3.5"));

    Ok(())
}

#[test]
fn rejected_commands_change_nothing() -> anyhow::Result<()> {
    let mut tournament = Tournament::default();
    reply(&mut tournament, "register_list Alice, Bob, Carol, Dave")?;
    reply(&mut tournament, "start 3")?;
    reply(&mut tournament, "result 1 1-1-2 1-0")?;

    let before = tournament.clone();
    for line in [
        "advance",
        "register Frank",
        "remove 2",
        "start 5",
        "result 2 2-1-3 1-0",
        "result 1 1-9-9 1-0",
        "result 1 1-3-4 2-0",
    ] {
        assert!(tournament.read_line(line).is_err(), "{line}");
        assert_eq!(tournament, before, "{line}");
    }

    Ok(())
}

#[test]
fn nobody_meets_twice_when_avoidable() -> anyhow::Result<()> {
    let mut tournament = Tournament::default();
    tournament.register_list("A, B, C, D, E, F, G, H")?;
    tournament.start(3)?;

    for number in 1..=3 {
        let ids: Vec<String> = tournament
            .round(number)?
            .matchups
            .iter()
            .map(|matchup| matchup.id().to_string())
            .collect();
        for id in ids {
            tournament.record_result(number, &id, GameResult::FirstWins)?;
        }
        tournament.advance()?;
    }

    for player in tournament.players() {
        let mut opponents = player.opponent_ids.clone();
        opponents.sort_unstable();
        opponents.dedup();
        assert_eq!(opponents.len(), 3, "{player}");
    }

    Ok(())
}
