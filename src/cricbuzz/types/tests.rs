//! Unit tests for Cricbuzz payload types

use super::*;
use serde_json::json;

#[test]
fn test_parse_api_date_epoch_millis() {
    // 2024-01-25T04:00:00Z
    assert_eq!(
        parse_api_date(&json!("1706155200000")).unwrap(),
        Some("2024-01-25".to_string())
    );
    assert_eq!(
        parse_api_date(&json!(1706155200000_i64)).unwrap(),
        Some("2024-01-25".to_string())
    );
}

#[test]
fn test_parse_api_date_iso() {
    assert_eq!(
        parse_api_date(&json!("2023-11-19")).unwrap(),
        Some("2023-11-19".to_string())
    );
    assert_eq!(
        parse_api_date(&json!("2023-11-19T08:30:00Z")).unwrap(),
        Some("2023-11-19".to_string())
    );
}

#[test]
fn test_parse_api_date_empty_and_invalid() {
    assert_eq!(parse_api_date(&json!(null)).unwrap(), None);
    assert_eq!(parse_api_date(&json!("")).unwrap(), None);
    assert!(parse_api_date(&json!("next tuesday")).is_err());
    assert!(parse_api_date(&json!(true)).is_err());
}

#[test]
fn test_series_entry_optional_fields() {
    let payload = json!({
        "seriesList": [
            {
                "seriesId": 7607,
                "seriesName": "England tour of India, 2024",
                "hostCountry": "India",
                "matchType": "Test",
                "startDate": "1706155200000",
                "matchCount": "5"
            },
            { "seriesId": 7700, "seriesName": "Asia Cup" }
        ]
    });

    let parsed: SeriesListResponse = serde_json::from_value(payload).unwrap();
    assert_eq!(parsed.series_list.len(), 2);

    let first = &parsed.series_list[0];
    assert_eq!(first.series_id, SeriesId::new(7607));
    assert_eq!(first.start_date.as_deref(), Some("2024-01-25"));
    assert_eq!(first.match_count, Some(5));

    let second = &parsed.series_list[1];
    assert!(second.host_country.is_none());
    assert!(second.start_date.is_none());
    assert!(second.match_count.is_none());
}

#[test]
fn test_series_entry_missing_id_fails() {
    let payload = json!({ "seriesList": [ { "seriesName": "No id" } ] });
    let result = serde_json::from_value::<SeriesListResponse>(payload);
    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("seriesId"));
}

#[test]
fn test_missing_list_key_is_empty() {
    let parsed: TeamsResponse = serde_json::from_value(json!({})).unwrap();
    assert!(parsed.teams.is_empty());
}

#[test]
fn test_venue_capacity_with_commas() {
    let payload = json!({
        "venues": [ { "venueId": 31, "venueName": "Eden Gardens", "capacity": "68,000" } ]
    });
    let parsed: VenuesResponse = serde_json::from_value(payload).unwrap();
    assert_eq!(parsed.venues[0].capacity, Some(68_000));
}

#[test]
fn test_match_list_flat_and_nested() {
    let info = |id: i64| {
        json!({
            "matchInfo": {
                "matchId": id,
                "team1": { "teamId": 2 },
                "team2": { "teamId": 9 },
                "venueInfo": { "id": 31 }
            }
        })
    };
    let payload = json!({
        "matchList": [ info(1) ],
        "typeMatches": [
            { "seriesMatches": [
                { "seriesAdWrapper": { "matches": [ info(2), info(3) ] } },
                { "adDetail": {} }
            ] }
        ]
    });

    let parsed: MatchListResponse = serde_json::from_value(payload).unwrap();
    let ids: Vec<i64> = parsed
        .entries()
        .iter()
        .map(|m| m.match_info.match_id.as_i64())
        .collect();
    assert_eq!(ids, vec![1, 2, 3]);
    assert_eq!(parsed.entries()[0].match_info.venue(), Some(VenueId::new(31)));
}

#[test]
fn test_match_info_missing_team_fails() {
    let payload = json!({
        "matchList": [ { "matchInfo": { "matchId": 1, "team1": { "teamId": 2 } } } ]
    });
    assert!(serde_json::from_value::<MatchListResponse>(payload).is_err());
}

#[test]
fn test_scorecard_defaults() {
    let payload = json!({
        "innings": [
            {
                "inningsNumber": 1,
                "team": { "teamId": 2 },
                "batting": [ { "playerId": 10, "playerName": "A" } ],
                "bowling": [ { "playerId": 20, "playerName": "B", "overs": 4.3 } ]
            }
        ]
    });

    let parsed: ScorecardResponse = serde_json::from_value(payload).unwrap();
    let innings = &parsed.innings[0];

    let bat = &innings.batting[0];
    assert_eq!(bat.runs, 0);
    assert_eq!(bat.balls_faced, 0);
    assert_eq!(bat.batting_position, 0);
    assert!(bat.is_out);

    let bowl = &innings.bowling[0];
    assert_eq!(bowl.overs, 4.3);
    assert_eq!(bowl.wickets, 0);
}
