//! Storage tests through the public API, against on-disk databases

use cricbuzz_stats::{storage::*, MatchId, PlayerId, TeamId, VenueId};

fn team(id: i64, name: &str) -> Team {
    Team {
        team_id: TeamId::new(id),
        team_name: name.to_string(),
        country: Some(name.to_string()),
    }
}

fn seed(db: &mut CricketDatabase) {
    db.upsert_teams(&[team(2, "India"), team(9, "England")])
        .unwrap();
    db.upsert_venues(&[Venue {
        venue_id: VenueId::new(31),
        venue_name: "Eden Gardens".to_string(),
        city: Some("Kolkata".to_string()),
        country: Some("India".to_string()),
        capacity: 68000,
    }])
    .unwrap();
    db.upsert_matches(&[Match {
        match_id: MatchId::new(100),
        series_id: None,
        match_description: Some("1st T20I".to_string()),
        team_a_id: TeamId::new(2),
        team_b_id: TeamId::new(9),
        match_date: Some("2025-01-22".to_string()),
        venue_id: VenueId::new(31),
        winning_team_id: Some(TeamId::new(2)),
        victory_margin_type: Some("wickets".to_string()),
        victory_margin: Some(7),
        toss_winner_team_id: Some(TeamId::new(2)),
        toss_decision: Some("bowl".to_string()),
    }])
    .unwrap();
}

#[test]
fn test_data_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cricket.db");

    {
        let mut db = CricketDatabase::open(&path).unwrap();
        seed(&mut db);
    }

    let db = CricketDatabase::open(&path).unwrap();
    assert_eq!(db.count(Table::Teams).unwrap(), 2);
    let m = db.get_match(MatchId::new(100)).unwrap().unwrap();
    assert_eq!(m.victory_margin, Some(7));
    assert_eq!(m.toss_decision.as_deref(), Some("bowl"));
}

#[test]
fn test_foreign_keys_enforced_after_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cricket.db");
    {
        let mut db = CricketDatabase::open(&path).unwrap();
        seed(&mut db);
    }

    let mut db = CricketDatabase::open(&path).unwrap();
    let orphan = Player {
        player_id: Some(PlayerId::new(1)),
        player_name: "Orphan".to_string(),
        team_id: Some(TeamId::new(404)),
        role: None,
        batting_style: None,
        bowling_style: None,
    };
    assert!(db.add_player(&orphan).is_err());
    assert_eq!(db.count(Table::Players).unwrap(), 0);
}

#[test]
fn test_player_crud_round() {
    let mut db = CricketDatabase::new_in_memory().unwrap();
    seed(&mut db);

    let id = db
        .add_player(&Player {
            player_id: None,
            player_name: "Varun Chakaravarthy".to_string(),
            team_id: Some(TeamId::new(2)),
            role: Some("Bowler".to_string()),
            batting_style: None,
            bowling_style: Some("Legbreak".to_string()),
        })
        .unwrap();

    let moved = PlayerUpdate {
        team_id: Some(TeamId::new(9)),
        ..Default::default()
    };
    assert!(db.update_player(id, &moved).unwrap());

    let listing = db.list_players(None).unwrap();
    assert_eq!(listing.len(), 1);
    assert_eq!(listing[0].team_name.as_deref(), Some("England"));

    // Moving to a team that does not exist is refused
    let bad = PlayerUpdate {
        team_id: Some(TeamId::new(404)),
        ..Default::default()
    };
    assert!(db.update_player(id, &bad).is_err());

    assert!(db.delete_player(id).unwrap());
    assert!(db.list_players(None).unwrap().is_empty());
}

#[test]
fn test_clear_all_data_then_reseed() {
    let mut db = CricketDatabase::new_in_memory().unwrap();
    seed(&mut db);
    db.clear_all_data().unwrap();
    assert!(db.match_ids().unwrap().is_empty());

    seed(&mut db);
    assert_eq!(db.match_ids().unwrap(), vec![MatchId::new(100)]);
}
