use super::*;
use crate::cli::types::{MatchId, PlayerId, SeriesId, TeamId, VenueId};
use crate::storage::{BattingStat, BowlingStat, Match, Player, ScorecardRows, Series, Team, Venue};
use serde_json::json;

fn team(id: i64, name: &str) -> Team {
    Team {
        team_id: TeamId::new(id),
        team_name: name.to_string(),
        country: Some(name.to_string()),
    }
}

fn player(id: i64, name: &str, team_id: i64, role: &str) -> Player {
    Player {
        player_id: Some(PlayerId::new(id)),
        player_name: name.to_string(),
        team_id: Some(TeamId::new(team_id)),
        role: Some(role.to_string()),
        batting_style: None,
        bowling_style: None,
    }
}

fn batting(match_id: i64, player_id: i64, position: i64, runs: i64) -> BattingStat {
    BattingStat {
        match_id: MatchId::new(match_id),
        player_id: PlayerId::new(player_id),
        team_id: TeamId::new(2),
        innings_number: 1,
        runs_scored: runs,
        balls_faced: runs + 10,
        batting_position: position,
        is_out: true,
    }
}

/// Two sides, one home venue, five ODI matches with a Kohli/Gill opening stand
/// of 60 + 45 in each. India and Australia win two apiece.
fn seeded_db() -> CricketDatabase {
    let mut db = CricketDatabase::new_in_memory().unwrap();

    db.upsert_series(&[Series {
        series_id: SeriesId::new(7607),
        series_name: "Australia tour of India".to_string(),
        host_country: Some("India".to_string()),
        match_type: Some("ODI".to_string()),
        start_date: Some("2024-01-20".to_string()),
        total_matches: Some(5),
    }])
    .unwrap();
    db.upsert_teams(&[team(2, "India"), team(4, "Australia")])
        .unwrap();
    db.upsert_venues(&[
        Venue {
            venue_id: VenueId::new(31),
            venue_name: "Wankhede Stadium".to_string(),
            city: Some("Mumbai".to_string()),
            country: Some("India".to_string()),
            capacity: 33000,
        },
        Venue {
            venue_id: VenueId::new(40),
            venue_name: "Small Ground".to_string(),
            city: None,
            country: Some("India".to_string()),
            capacity: 12000,
        },
    ])
    .unwrap();

    let winners = [Some(2), Some(2), Some(4), Some(4), None];
    let matches: Vec<Match> = (0..5)
        .map(|i| Match {
            match_id: MatchId::new(100 + i),
            series_id: Some(SeriesId::new(7607)),
            match_description: Some(format!("{} ODI", i + 1)),
            team_a_id: TeamId::new(2),
            team_b_id: TeamId::new(4),
            match_date: Some(format!("2024-01-2{}", i + 1)),
            venue_id: VenueId::new(31),
            winning_team_id: winners[i as usize].map(TeamId::new),
            victory_margin_type: Some("runs".to_string()),
            victory_margin: Some(20),
            toss_winner_team_id: Some(TeamId::new(2)),
            toss_decision: Some("bat".to_string()),
        })
        .collect();
    db.upsert_matches(&matches).unwrap();

    for m in 100..105 {
        db.record_scorecard(&ScorecardRows {
            players: vec![
                player(10, "Virat Kohli", 2, "Batsman"),
                player(11, "Shubman Gill", 2, "Batsman"),
                player(20, "Pat Cummins", 4, "Bowler"),
            ],
            batting: vec![batting(m, 10, 1, 60), batting(m, 11, 2, 45)],
            bowling: vec![BowlingStat {
                match_id: MatchId::new(m),
                player_id: PlayerId::new(20),
                team_id: TeamId::new(4),
                overs_bowled: 10.0,
                runs_conceded: 50,
                wickets_taken: 1,
                maidens: 0,
            }],
        })
        .unwrap();
    }

    db
}

#[test]
fn test_catalog_ids_are_sequential() {
    for (idx, query) in QUERIES.iter().enumerate() {
        assert_eq!(query.id as usize, idx + 1);
        assert!(!query.label.is_empty());
        assert!(!query.columns.is_empty());
    }
}

#[test]
fn test_every_query_runs_on_empty_store() {
    let db = CricketDatabase::new_in_memory().unwrap();
    for query in QUERIES.iter() {
        let table = run_query(&db, query)
            .unwrap_or_else(|e| panic!("{} failed: {}", query.title(), e));
        assert_eq!(table.columns, query.columns, "{}", query.title());
        assert!(table.is_empty(), "{}", query.title());
    }
}

#[test]
fn test_every_query_runs_on_seeded_store() {
    let db = seeded_db();
    for query in QUERIES.iter() {
        let table = run_query(&db, query)
            .unwrap_or_else(|e| panic!("{} failed: {}", query.title(), e));
        assert_eq!(table.columns, query.columns, "{}", query.title());
    }
}

#[test]
fn test_find_query_accepts_prefixes() {
    assert_eq!(find_query("5").unwrap().id, 5);
    assert_eq!(find_query("Q5").unwrap().id, 5);
    assert_eq!(find_query(" q25 ").unwrap().id, 25);
    assert_eq!(
        find_query("Q5").unwrap().title(),
        "Q5: Calculate how many matches each team has won"
    );
}

#[test]
fn test_find_query_rejects_unknown() {
    for bad in ["0", "26", "Q", "top scorers", ""] {
        assert!(matches!(
            find_query(bad),
            Err(CricError::UnknownQuery { .. })
        ));
    }
}

#[test]
fn test_players_representing_india() {
    let db = seeded_db();
    let table = run_query(&db, find_query("1").unwrap()).unwrap();

    let names = table.column("player_name");
    assert_eq!(names, vec![&json!("Shubman Gill"), &json!("Virat Kohli")]);
}

#[test]
fn test_team_wins_tie_broken_by_name() {
    let db = seeded_db();
    let table = run_query(&db, find_query("5").unwrap()).unwrap();

    assert_eq!(
        table.rows,
        vec![
            vec![json!("Australia"), json!(2)],
            vec![json!("India"), json!(2)],
        ]
    );
}

#[test]
fn test_venue_capacity_filter() {
    let db = seeded_db();
    let table = run_query(&db, find_query("4").unwrap()).unwrap();
    assert_eq!(table.column("venue_name"), vec![&json!("Wankhede Stadium")]);
}

#[test]
fn test_top_odi_scorers() {
    let db = seeded_db();
    let table = run_query(&db, find_query("3").unwrap()).unwrap();

    assert_eq!(table.rows.len(), 2);
    assert_eq!(table.rows[0][0], json!("Virat Kohli"));
    assert_eq!(table.rows[0][1], json!(300));
    assert_eq!(table.rows[0][2].as_f64(), Some(60.0));
    assert_eq!(table.rows[0][3], json!(0));
}

#[test]
fn test_partnerships_over_hundred() {
    let db = seeded_db();
    let table = run_query(&db, find_query("13").unwrap()).unwrap();

    assert_eq!(table.rows.len(), 5);
    for row in &table.rows {
        assert_eq!(row[0], json!("Virat Kohli"));
        assert_eq!(row[1], json!("Shubman Gill"));
        assert_eq!(row[2], json!(105));
        assert_eq!(row[3], json!(1));
    }
}

#[test]
fn test_partnership_below_hundred_is_excluded() {
    let mut db = seeded_db();
    db.record_scorecard(&ScorecardRows {
        players: vec![],
        batting: vec![batting(100, 10, 1, 30)],
        bowling: vec![],
    })
    .unwrap();

    let table = run_query(&db, find_query("13").unwrap()).unwrap();
    assert_eq!(table.rows.len(), 4);
}

#[test]
fn test_best_partnerships_over_five_matches() {
    let db = seeded_db();
    let table = run_query(&db, find_query("24").unwrap()).unwrap();

    assert_eq!(table.rows.len(), 1);
    let row = &table.rows[0];
    assert_eq!(row[0], json!("Virat Kohli"));
    assert_eq!(row[2].as_f64(), Some(105.0));
    assert_eq!(row[3], json!(5));
    assert_eq!(row[4], json!(105));
    assert_eq!(row[5].as_f64(), Some(100.0));
}

/// One match with a single opening stand between players 1 and 2.
fn single_stand_db(first: i64, second: i64) -> CricketDatabase {
    let mut db = CricketDatabase::new_in_memory().unwrap();
    db.upsert_teams(&[team(2, "India"), team(4, "Australia")])
        .unwrap();
    db.upsert_venues(&[Venue {
        venue_id: VenueId::new(31),
        venue_name: "Wankhede Stadium".to_string(),
        city: None,
        country: Some("India".to_string()),
        capacity: 33000,
    }])
    .unwrap();
    db.upsert_matches(&[Match {
        match_id: MatchId::new(1),
        series_id: None,
        match_description: None,
        team_a_id: TeamId::new(2),
        team_b_id: TeamId::new(4),
        match_date: Some("2024-03-01".to_string()),
        venue_id: VenueId::new(31),
        winning_team_id: None,
        victory_margin_type: None,
        victory_margin: None,
        toss_winner_team_id: None,
        toss_decision: None,
    }])
    .unwrap();
    db.record_scorecard(&ScorecardRows {
        players: vec![
            player(1, "Rohit Sharma", 2, "Batsman"),
            player(2, "Shubman Gill", 2, "Batsman"),
        ],
        batting: vec![batting(1, 1, 1, first), batting(1, 2, 2, second)],
        bowling: vec![],
    })
    .unwrap();
    db
}

#[test]
fn test_single_stand_of_105_qualifies_for_both_partnership_reports() {
    let db = single_stand_db(60, 45);

    let stands = run_query(&db, find_query("13").unwrap()).unwrap();
    assert_eq!(
        stands.rows,
        vec![vec![
            json!("Rohit Sharma"),
            json!("Shubman Gill"),
            json!(105),
            json!(1)
        ]]
    );

    let best = run_query(&db, find_query("24").unwrap()).unwrap();
    assert_eq!(best.rows.len(), 1);
    let row = &best.rows[0];
    assert_eq!(row[0], json!("Rohit Sharma"));
    assert_eq!(row[1], json!("Shubman Gill"));
    assert_eq!(row[2].as_f64(), Some(105.0));
    assert_eq!(row[3], json!(1));
    assert_eq!(row[4], json!(105));
    assert_eq!(row[5].as_f64(), Some(100.0));
}

#[test]
fn test_stand_below_fifty_left_out_of_best_partnerships() {
    let db = single_stand_db(30, 15);

    assert!(run_query(&db, find_query("13").unwrap()).unwrap().is_empty());
    assert!(run_query(&db, find_query("24").unwrap()).unwrap().is_empty());
}

#[test]
fn test_home_and_away_wins() {
    let db = seeded_db();
    let table = run_query(&db, find_query("12").unwrap()).unwrap();

    assert_eq!(
        table.rows,
        vec![
            vec![json!("Australia"), json!(0), json!(2)],
            vec![json!("India"), json!(2), json!(0)],
        ]
    );
}

#[test]
fn test_toss_advantage_ignores_unfinished_matches() {
    let db = seeded_db();
    let table = run_query(&db, find_query("17").unwrap()).unwrap();

    assert_eq!(table.rows.len(), 1);
    assert_eq!(table.rows[0][0], json!("bat"));
    assert_eq!(table.rows[0][1].as_f64(), Some(50.0));
}

#[test]
fn test_series_started_in_2024() {
    let db = seeded_db();
    let table = run_query(&db, find_query("8").unwrap()).unwrap();
    assert_eq!(table.column("series_name"), vec![&json!("Australia tour of India")]);
}

#[test]
fn test_consistent_batsmen_have_zero_deviation() {
    let db = seeded_db();
    let table = run_query(&db, find_query("19").unwrap()).unwrap();

    assert_eq!(table.rows.len(), 2);
    for row in &table.rows {
        assert_eq!(row[2].as_f64(), Some(0.0));
    }
}

#[test]
fn test_ranking_joins_bowling_within_match() {
    let mut db = seeded_db();
    // Cummins bats once; his bowling from the other four matches must not be counted.
    db.record_scorecard(&ScorecardRows {
        players: vec![],
        batting: vec![BattingStat {
            team_id: TeamId::new(4),
            innings_number: 2,
            ..batting(100, 20, 8, 10)
        }],
        bowling: vec![],
    })
    .unwrap();

    let table = run_query(&db, find_query("21").unwrap()).unwrap();
    let idx = table.column_index("bowling_points").unwrap();
    let cummins = table
        .rows
        .iter()
        .find(|row| row[0] == json!("Pat Cummins"))
        .unwrap();

    // 1 wicket * 2 + (6 - 5.0 economy) * 2 for a single match
    assert_eq!(cummins[idx].as_f64(), Some(4.0));
}

#[test]
fn test_result_table_serializes() {
    let table = ResultTable {
        columns: vec!["team_name".to_string()],
        rows: vec![vec![json!("India")]],
    };
    let value = serde_json::to_value(&table).unwrap();
    assert_eq!(value, json!({"columns": ["team_name"], "rows": [["India"]]}));
}

#[test]
fn test_run_query_refuses_statements_that_write() {
    let db = seeded_db();
    let wipe = QueryDef {
        id: 99,
        label: "Drop every team",
        sql: "DELETE FROM teams",
        columns: &[],
    };

    let result = run_query(&db, &wipe);
    assert!(matches!(
        result,
        Err(CricError::WriteQuery { ref query }) if query == "Q99: Drop every team"
    ));
    assert_eq!(db.count(crate::storage::Table::Teams).unwrap(), 2);
}

#[test]
fn test_catalog_queries_are_read_only() {
    let db = CricketDatabase::new_in_memory().unwrap();
    for query in QUERIES.iter() {
        let stmt = db.conn.prepare(query.sql).unwrap();
        assert!(stmt.readonly(), "{}", query.title());
    }
}
