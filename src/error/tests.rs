//! Unit tests for error handling

use super::*;
use std::io;

#[cfg(test)]
mod cric_error_tests {
    use super::*;

    #[test]
    fn test_json_error_conversion() {
        let json_error = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let err = CricError::from(json_error);

        match err {
            CricError::Json(_) => (),
            _ => panic!("Expected Json error variant"),
        }
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let err = CricError::from(io_error);

        match err {
            CricError::Io(_) => (),
            _ => panic!("Expected Io error variant"),
        }
    }

    #[test]
    fn test_database_error_conversion() {
        let conn = rusqlite::Connection::open_in_memory().unwrap();
        let db_error = conn.execute("SELECT * FROM no_such_table", []).unwrap_err();
        let err = CricError::from(db_error);

        match err {
            CricError::Database(_) => (),
            _ => panic!("Expected Database error variant"),
        }
    }

    #[test]
    fn test_invalid_header_error_conversion() {
        let header_error = reqwest::header::HeaderValue::from_str("invalid\nheader").unwrap_err();
        let err = CricError::from(header_error);

        match err {
            CricError::InvalidHeader(_) => (),
            _ => panic!("Expected InvalidHeader error variant"),
        }
    }

    #[test]
    fn test_parse_int_error_conversion() {
        let parse_error = "not_a_number".parse::<i64>().unwrap_err();
        let err = CricError::from(parse_error);

        match err {
            CricError::InvalidId(_) => (),
            _ => panic!("Expected InvalidId error variant"),
        }
    }

    #[test]
    fn test_missing_api_key_message() {
        let err = CricError::MissingApiKey {
            env_var: "RAPIDAPI_KEY".to_string(),
        };

        let message = err.to_string();
        assert!(message.contains("API key not provided"));
        assert!(message.contains("RAPIDAPI_KEY"));
    }

    #[test]
    fn test_fetch_error_message() {
        let err = CricError::Fetch {
            label: "series list".to_string(),
            reason: "HTTP 503".to_string(),
        };

        assert_eq!(err.to_string(), "Failed to fetch series list: HTTP 503");
    }

    #[test]
    fn test_payload_helper() {
        let err = CricError::payload("teams list", "missing field `teamId`");

        match &err {
            CricError::Payload { context, message } => {
                assert_eq!(context, "teams list");
                assert!(message.contains("teamId"));
            }
            _ => panic!("Expected Payload error variant"),
        }
        assert!(err.to_string().starts_with("Malformed teams list payload"));
    }

    #[test]
    fn test_stage_out_of_order_message() {
        let err = CricError::StageOutOfOrder {
            stage: "matches".to_string(),
            missing: "teams".to_string(),
        };

        assert_eq!(
            err.to_string(),
            "Cannot run matches stage: no teams in the database yet"
        );
    }

    #[test]
    fn test_unknown_query_message() {
        let err = CricError::UnknownQuery {
            query: "99".to_string(),
        };
        assert!(err.to_string().contains("99"));
    }

    #[test]
    fn test_error_debug_format() {
        let err = CricError::InvalidRole {
            role: "Umpire".to_string(),
        };

        let debug_string = format!("{:?}", err);
        assert!(debug_string.contains("InvalidRole"));
        assert!(debug_string.contains("Umpire"));
    }

    #[test]
    fn test_dangling_reference_message() {
        let err = CricError::DanglingReference {
            entity: "venue".to_string(),
            id: 31,
            referenced_by: "match 41881".to_string(),
        };
        assert_eq!(err.to_string(), "match 41881 references unknown venue 31");
    }

    #[test]
    fn test_invalid_endpoint_message() {
        let err = CricError::InvalidEndpoint {
            endpoint: "scorecard".to_string(),
            reason: "needs an id".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid endpoint scorecard: needs an id");
    }

    #[test]
    fn test_write_query_message() {
        let err = CricError::WriteQuery {
            query: "Q99: Drop every team".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Analytics query Q99: Drop every team is not read-only"
        );
    }
}
