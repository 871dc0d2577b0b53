//! The analytics query catalog

use super::QueryDef;

pub static QUERIES: [QueryDef; 25] = [
    QueryDef {
        id: 1,
        label: "Find all players who represent India",
        sql: "
            SELECT p.player_name, p.role, p.batting_style, p.bowling_style
              FROM players p
              JOIN teams t ON p.team_id = t.team_id
             WHERE t.team_name = 'India'
             ORDER BY p.player_name",
        columns: &["player_name", "role", "batting_style", "bowling_style"],
    },
    QueryDef {
        id: 2,
        label: "Show matches in the last 30 days",
        sql: "
            SELECT m.match_description,
                   ta.team_name AS team_a,
                   tb.team_name AS team_b,
                   v.venue_name, v.city,
                   m.match_date
              FROM matches m
              JOIN teams ta ON m.team_a_id = ta.team_id
              JOIN teams tb ON m.team_b_id = tb.team_id
              JOIN venues v ON m.venue_id = v.venue_id
             WHERE m.match_date >= date('now', '-30 days')
             ORDER BY m.match_date DESC",
        columns: &["match_description", "team_a", "team_b", "venue_name", "city", "match_date"],
    },
    QueryDef {
        id: 3,
        label: "Top 10 ODI run scorers",
        sql: "
            SELECT p.player_name,
                   SUM(bs.runs_scored) AS total_runs,
                   ROUND(SUM(bs.runs_scored) * 1.0 / COUNT(DISTINCT bs.match_id), 2) AS batting_average,
                   COUNT(DISTINCT CASE WHEN bs.runs_scored >= 100 THEN bs.match_id END) AS centuries
              FROM batting_stats bs
              JOIN players p ON bs.player_id = p.player_id
              JOIN matches m ON bs.match_id = m.match_id
              JOIN series s ON m.series_id = s.series_id
             WHERE s.match_type = 'ODI'
             GROUP BY p.player_id, p.player_name
             ORDER BY total_runs DESC, p.player_name
             LIMIT 10",
        columns: &["player_name", "total_runs", "batting_average", "centuries"],
    },
    QueryDef {
        id: 4,
        label: "Display venues with capacity > 30,000",
        sql: "
            SELECT venue_name, city, country, capacity
              FROM venues
             WHERE capacity > 30000
             ORDER BY capacity DESC",
        columns: &["venue_name", "city", "country", "capacity"],
    },
    QueryDef {
        id: 5,
        label: "Calculate how many matches each team has won",
        sql: "
            SELECT t.team_name, COUNT(*) AS total_wins
              FROM matches m
              JOIN teams t ON m.winning_team_id = t.team_id
             GROUP BY t.team_id, t.team_name
             ORDER BY total_wins DESC, t.team_name ASC",
        columns: &["team_name", "total_wins"],
    },
    QueryDef {
        id: 6,
        label: "Count players by role",
        sql: "
            SELECT role, COUNT(*) AS player_count
              FROM players
             GROUP BY role
             ORDER BY player_count DESC, role",
        columns: &["role", "player_count"],
    },
    QueryDef {
        id: 7,
        label: "Highest individual batting score by format",
        sql: "
            SELECT s.match_type,
                   MAX(bs.runs_scored) AS highest_score
              FROM batting_stats bs
              JOIN matches m ON bs.match_id = m.match_id
              JOIN series s ON m.series_id = s.series_id
             GROUP BY s.match_type
             ORDER BY s.match_type",
        columns: &["match_type", "highest_score"],
    },
    QueryDef {
        id: 8,
        label: "Series started in 2024",
        sql: "
            SELECT series_name, host_country, match_type, start_date, total_matches
              FROM series
             WHERE strftime('%Y', start_date) = '2024'
             ORDER BY start_date",
        columns: &["series_name", "host_country", "match_type", "start_date", "total_matches"],
    },
    QueryDef {
        id: 9,
        label: "All-rounders with >1000 runs & >50 wickets",
        sql: "
            WITH batting AS (
                SELECT player_id, SUM(runs_scored) AS total_runs
                  FROM batting_stats
                 GROUP BY player_id
            ),
            bowling AS (
                SELECT player_id, SUM(wickets_taken) AS total_wickets
                  FROM bowling_stats
                 GROUP BY player_id
            )
            SELECT p.player_name, bt.total_runs, bw.total_wickets, p.role
              FROM players p
              JOIN batting bt ON bt.player_id = p.player_id
              JOIN bowling bw ON bw.player_id = p.player_id
             WHERE p.role = 'All-rounder'
               AND bt.total_runs > 1000
               AND bw.total_wickets > 50
             ORDER BY bt.total_runs DESC",
        columns: &["player_name", "total_runs", "total_wickets", "role"],
    },
    QueryDef {
        id: 10,
        label: "Details of last 20 completed matches",
        sql: "
            SELECT m.match_description,
                   ta.team_name AS team_a,
                   tb.team_name AS team_b,
                   tw.team_name AS winning_team,
                   m.victory_margin,
                   m.victory_margin_type,
                   v.venue_name
              FROM matches m
              JOIN teams ta ON m.team_a_id = ta.team_id
              JOIN teams tb ON m.team_b_id = tb.team_id
              JOIN teams tw ON m.winning_team_id = tw.team_id
              JOIN venues v ON m.venue_id = v.venue_id
             ORDER BY m.match_date DESC, m.match_id DESC
             LIMIT 20",
        columns: &[
            "match_description",
            "team_a",
            "team_b",
            "winning_team",
            "victory_margin",
            "victory_margin_type",
            "venue_name",
        ],
    },
    QueryDef {
        id: 11,
        label: "Compare players' performance across formats",
        sql: "
            SELECT p.player_name,
                   SUM(CASE WHEN s.match_type = 'Test' THEN bs.runs_scored ELSE 0 END) AS test_runs,
                   SUM(CASE WHEN s.match_type = 'ODI' THEN bs.runs_scored ELSE 0 END) AS odi_runs,
                   SUM(CASE WHEN s.match_type = 'T20I' THEN bs.runs_scored ELSE 0 END) AS t20i_runs,
                   ROUND(AVG(bs.runs_scored), 2) AS overall_avg
              FROM players p
              JOIN batting_stats bs ON p.player_id = bs.player_id
              JOIN matches m ON bs.match_id = m.match_id
              JOIN series s ON m.series_id = s.series_id
             GROUP BY p.player_id, p.player_name
            HAVING COUNT(DISTINCT s.match_type) >= 2
             ORDER BY p.player_name",
        columns: &["player_name", "test_runs", "odi_runs", "t20i_runs", "overall_avg"],
    },
    QueryDef {
        id: 12,
        label: "Home vs Away performance",
        sql: "
            SELECT t.team_name,
                   SUM(CASE WHEN t.country = v.country THEN 1 ELSE 0 END) AS home_wins,
                   SUM(CASE WHEN t.country <> v.country THEN 1 ELSE 0 END) AS away_wins
              FROM matches m
              JOIN teams t ON m.winning_team_id = t.team_id
              JOIN venues v ON m.venue_id = v.venue_id
             GROUP BY t.team_id, t.team_name
             ORDER BY t.team_name",
        columns: &["team_name", "home_wins", "away_wins"],
    },
    QueryDef {
        id: 13,
        label: "Batting partnerships >= 100 runs",
        sql: "
            SELECT p1.player_name AS batsman_1,
                   p2.player_name AS batsman_2,
                   bs1.runs_scored + bs2.runs_scored AS partnership_runs,
                   bs1.innings_number
              FROM batting_stats bs1
              JOIN batting_stats bs2
                ON bs1.match_id = bs2.match_id
               AND bs1.innings_number = bs2.innings_number
               AND bs1.batting_position = bs2.batting_position - 1
              JOIN players p1 ON bs1.player_id = p1.player_id
              JOIN players p2 ON bs2.player_id = p2.player_id
             WHERE bs1.runs_scored + bs2.runs_scored >= 100
             ORDER BY partnership_runs DESC",
        columns: &["batsman_1", "batsman_2", "partnership_runs", "innings_number"],
    },
    QueryDef {
        id: 14,
        label: "Bowling performance by venue",
        sql: "
            SELECT p.player_name,
                   v.venue_name,
                   ROUND(AVG(bs.runs_conceded * 6.0
                             / NULLIF(balls_from_overs(bs.overs_bowled), 0)), 2) AS avg_economy_rate,
                   SUM(bs.wickets_taken) AS total_wickets,
                   COUNT(DISTINCT bs.match_id) AS matches_played
              FROM bowling_stats bs
              JOIN players p ON bs.player_id = p.player_id
              JOIN matches m ON bs.match_id = m.match_id
              JOIN venues v ON m.venue_id = v.venue_id
             WHERE bs.overs_bowled >= 4
             GROUP BY p.player_id, p.player_name, v.venue_id, v.venue_name
            HAVING COUNT(DISTINCT bs.match_id) >= 3
             ORDER BY avg_economy_rate",
        columns: &["player_name", "venue_name", "avg_economy_rate", "total_wickets", "matches_played"],
    },
    QueryDef {
        id: 15,
        label: "Performance in close matches",
        sql: "
            SELECT p.player_name,
                   ROUND(AVG(bs.runs_scored), 2) AS avg_runs,
                   COUNT(DISTINCT m.match_id) AS close_matches_played,
                   COUNT(DISTINCT CASE WHEN m.winning_team_id = bs.team_id THEN m.match_id END) AS team_won_count
              FROM batting_stats bs
              JOIN matches m ON bs.match_id = m.match_id
              JOIN players p ON bs.player_id = p.player_id
             WHERE (m.victory_margin_type = 'runs' AND m.victory_margin < 50)
                OR (m.victory_margin_type = 'wickets' AND m.victory_margin < 5)
             GROUP BY p.player_id, p.player_name
             ORDER BY avg_runs DESC",
        columns: &["player_name", "avg_runs", "close_matches_played", "team_won_count"],
    },
    QueryDef {
        id: 16,
        label: "Track batting performance by year",
        sql: "
            SELECT p.player_name,
                   CAST(strftime('%Y', m.match_date) AS INTEGER) AS year,
                   ROUND(AVG(bs.runs_scored), 2) AS avg_runs_per_match,
                   ROUND(AVG(bs.runs_scored * 100.0 / NULLIF(bs.balls_faced, 0)), 2) AS avg_strike_rate
              FROM batting_stats bs
              JOIN matches m ON bs.match_id = m.match_id
              JOIN players p ON bs.player_id = p.player_id
             WHERE CAST(strftime('%Y', m.match_date) AS INTEGER) >= 2020
             GROUP BY p.player_id, p.player_name, year
            HAVING COUNT(bs.match_id) >= 5
             ORDER BY p.player_name, year",
        columns: &["player_name", "year", "avg_runs_per_match", "avg_strike_rate"],
    },
    QueryDef {
        id: 17,
        label: "Advantage from winning the toss",
        sql: "
            SELECT toss_decision,
                   ROUND(SUM(CASE WHEN toss_winner_team_id = winning_team_id THEN 1 ELSE 0 END) * 100.0
                         / COUNT(*), 2) AS win_percentage
              FROM matches
             WHERE toss_decision IS NOT NULL
               AND winning_team_id IS NOT NULL
             GROUP BY toss_decision
             ORDER BY toss_decision",
        columns: &["toss_decision", "win_percentage"],
    },
    QueryDef {
        id: 18,
        label: "Most economical bowlers in limited-overs",
        sql: "
            SELECT p.player_name,
                   ROUND(SUM(bs.runs_conceded) * 6.0
                         / NULLIF(SUM(balls_from_overs(bs.overs_bowled)), 0), 2) AS economy_rate,
                   SUM(bs.wickets_taken) AS total_wickets
              FROM bowling_stats bs
              JOIN players p ON bs.player_id = p.player_id
              JOIN matches m ON bs.match_id = m.match_id
              JOIN series s ON m.series_id = s.series_id
             WHERE s.match_type IN ('ODI', 'T20I')
             GROUP BY p.player_id, p.player_name
            HAVING COUNT(DISTINCT bs.match_id) >= 10
               AND AVG(bs.overs_bowled) >= 2
             ORDER BY economy_rate ASC",
        columns: &["player_name", "economy_rate", "total_wickets"],
    },
    QueryDef {
        id: 19,
        label: "Most consistent batsmen",
        sql: "
            SELECT p.player_name,
                   ROUND(AVG(bs.runs_scored), 2) AS avg_runs,
                   ROUND(stddev(bs.runs_scored), 2) AS stdev_runs
              FROM batting_stats bs
              JOIN players p ON bs.player_id = p.player_id
              JOIN matches m ON bs.match_id = m.match_id
             WHERE CAST(strftime('%Y', m.match_date) AS INTEGER) >= 2022
               AND bs.balls_faced >= 10
             GROUP BY p.player_id, p.player_name
             ORDER BY stdev_runs ASC",
        columns: &["player_name", "avg_runs", "stdev_runs"],
    },
    QueryDef {
        id: 20,
        label: "Matches & average by format",
        sql: "
            SELECT p.player_name,
                   COUNT(DISTINCT CASE WHEN s.match_type = 'Test' THEN bs.match_id END) AS test_matches,
                   ROUND(AVG(CASE WHEN s.match_type = 'Test' THEN bs.runs_scored END), 2) AS test_avg,
                   COUNT(DISTINCT CASE WHEN s.match_type = 'ODI' THEN bs.match_id END) AS odi_matches,
                   ROUND(AVG(CASE WHEN s.match_type = 'ODI' THEN bs.runs_scored END), 2) AS odi_avg,
                   COUNT(DISTINCT CASE WHEN s.match_type = 'T20I' THEN bs.match_id END) AS t20_matches,
                   ROUND(AVG(CASE WHEN s.match_type = 'T20I' THEN bs.runs_scored END), 2) AS t20_avg
              FROM players p
              JOIN batting_stats bs ON p.player_id = bs.player_id
              JOIN matches m ON bs.match_id = m.match_id
              JOIN series s ON m.series_id = s.series_id
             GROUP BY p.player_id, p.player_name
            HAVING COUNT(DISTINCT bs.match_id) >= 20
             ORDER BY p.player_name",
        columns: &[
            "player_name",
            "test_matches",
            "test_avg",
            "odi_matches",
            "odi_avg",
            "t20_matches",
            "t20_avg",
        ],
    },
    QueryDef {
        id: 21,
        label: "Comprehensive player ranking",
        sql: "
            WITH batting AS (
                SELECT match_id, player_id,
                       SUM(runs_scored * 0.01
                           + COALESCE(runs_scored * 100.0 / NULLIF(balls_faced, 0), 0) * 0.3) AS points
                  FROM batting_stats
                 GROUP BY match_id, player_id
            ),
            per_match AS (
                SELECT b.player_id,
                       s.match_type,
                       b.points AS batting_points,
                       COALESCE(bw.wickets_taken * 2
                                + (6 - bw.runs_conceded * 6.0
                                       / NULLIF(balls_from_overs(bw.overs_bowled), 0)) * 2, 0) AS bowling_points
                  FROM batting b
                  LEFT JOIN bowling_stats bw
                    ON bw.player_id = b.player_id
                   AND bw.match_id = b.match_id
                  JOIN matches m ON b.match_id = m.match_id
                  JOIN series s ON m.series_id = s.series_id
            )
            SELECT p.player_name,
                   pm.match_type,
                   ROUND(SUM(pm.batting_points), 2) AS batting_points,
                   ROUND(SUM(pm.bowling_points), 2) AS bowling_points,
                   ROUND(SUM(pm.batting_points) + SUM(pm.bowling_points), 2) AS total_score
              FROM per_match pm
              JOIN players p ON pm.player_id = p.player_id
             GROUP BY p.player_id, p.player_name, pm.match_type
             ORDER BY total_score DESC",
        columns: &["player_name", "match_type", "batting_points", "bowling_points", "total_score"],
    },
    QueryDef {
        id: 22,
        label: "Head-to-head match analysis",
        sql: "
            SELECT ta.team_name AS team_a,
                   tb.team_name AS team_b,
                   COUNT(m.match_id) AS total_matches,
                   SUM(CASE WHEN m.winning_team_id = ta.team_id THEN 1 ELSE 0 END) AS team_a_wins,
                   SUM(CASE WHEN m.winning_team_id = tb.team_id THEN 1 ELSE 0 END) AS team_b_wins
              FROM matches m
              JOIN teams ta ON m.team_a_id = ta.team_id
              JOIN teams tb ON m.team_b_id = tb.team_id
             WHERE m.match_date >= date('now', '-3 years')
             GROUP BY ta.team_id, tb.team_id
            HAVING COUNT(m.match_id) >= 5
             ORDER BY total_matches DESC",
        columns: &["team_a", "team_b", "total_matches", "team_a_wins", "team_b_wins"],
    },
    QueryDef {
        id: 23,
        label: "Recent form & momentum",
        sql: "
            WITH player_last_10 AS (
                SELECT bs.*,
                       ROW_NUMBER() OVER (
                           PARTITION BY bs.player_id
                           ORDER BY m.match_date DESC, bs.match_id DESC, bs.innings_number DESC
                       ) AS rn
                  FROM batting_stats bs
                  JOIN matches m ON bs.match_id = m.match_id
            )
            SELECT p.player_name,
                   ROUND(AVG(CASE WHEN bs.rn <= 5 THEN bs.runs_scored END), 2) AS avg_last_5,
                   ROUND(AVG(bs.runs_scored), 2) AS avg_last_10,
                   SUM(CASE WHEN bs.runs_scored >= 50 THEN 1 ELSE 0 END) AS scores_50_plus,
                   ROUND(stddev(bs.runs_scored), 2) AS consistency_score
              FROM player_last_10 bs
              JOIN players p ON bs.player_id = p.player_id
             WHERE bs.rn <= 10
             GROUP BY p.player_id, p.player_name
             ORDER BY avg_last_5 DESC",
        columns: &["player_name", "avg_last_5", "avg_last_10", "scores_50_plus", "consistency_score"],
    },
    QueryDef {
        id: 24,
        label: "Best batting partnerships",
        sql: "
            WITH partnerships AS (
                SELECT bs1.player_id AS player_1,
                       bs2.player_id AS player_2,
                       bs1.runs_scored + bs2.runs_scored AS runs,
                       bs1.match_id
                  FROM batting_stats bs1
                  JOIN batting_stats bs2
                    ON bs1.match_id = bs2.match_id
                   AND bs1.innings_number = bs2.innings_number
                   AND bs1.batting_position = bs2.batting_position - 1
            )
            SELECT p1.player_name AS player_1,
                   p2.player_name AS player_2,
                   ROUND(AVG(pa.runs), 2) AS avg_runs,
                   SUM(CASE WHEN pa.runs > 50 THEN 1 ELSE 0 END) AS over_50_count,
                   MAX(pa.runs) AS best_partnership,
                   ROUND(SUM(CASE WHEN pa.runs > 50 THEN 1 ELSE 0 END) * 100.0 / COUNT(*), 2) AS success_rate
              FROM partnerships pa
              JOIN players p1 ON pa.player_1 = p1.player_id
              JOIN players p2 ON pa.player_2 = p2.player_id
             GROUP BY p1.player_id, p1.player_name, p2.player_id, p2.player_name
            HAVING MAX(pa.runs) >= 50
             ORDER BY avg_runs DESC",
        columns: &[
            "player_1",
            "player_2",
            "avg_runs",
            "over_50_count",
            "best_partnership",
            "success_rate",
        ],
    },
    QueryDef {
        id: 25,
        label: "Time-series analysis of performance",
        sql: "
            WITH quarterly AS (
                SELECT bs.player_id,
                       CAST(strftime('%Y', m.match_date) AS INTEGER) AS year,
                       (CAST(strftime('%m', m.match_date) AS INTEGER) + 2) / 3 AS quarter,
                       AVG(bs.runs_scored) AS avg_runs,
                       AVG(bs.runs_scored * 100.0 / NULLIF(bs.balls_faced, 0)) AS avg_sr
                  FROM batting_stats bs
                  JOIN matches m ON bs.match_id = m.match_id
                 WHERE m.match_date IS NOT NULL
                 GROUP BY bs.player_id, year, quarter
                HAVING COUNT(bs.match_id) >= 3
            ),
            ranked AS (
                SELECT *,
                       LAG(avg_runs) OVER (PARTITION BY player_id ORDER BY year, quarter) AS prev_runs
                  FROM quarterly
            )
            SELECT p.player_name,
                   rq.year,
                   rq.quarter,
                   ROUND(rq.avg_runs, 2) AS avg_runs,
                   ROUND(rq.avg_sr, 2) AS avg_strike_rate,
                   CASE
                       WHEN rq.avg_runs > rq.prev_runs THEN 'Improving'
                       WHEN rq.avg_runs < rq.prev_runs THEN 'Declining'
                       ELSE 'Stable'
                   END AS runs_trajectory
              FROM ranked rq
              JOIN players p ON rq.player_id = p.player_id
             ORDER BY p.player_name, rq.year, rq.quarter",
        columns: &[
            "player_name",
            "year",
            "quarter",
            "avg_runs",
            "avg_strike_rate",
            "runs_trajectory",
        ],
    },
];
