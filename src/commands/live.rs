//! `live`: current matches straight from the API.
//!
//! Nothing here touches the store. A failed fetch is shown as an empty feed.

use crate::{
    cli::types::MatchId,
    cricbuzz::{types::MatchListResponse, ApiClient, Endpoint},
    output::render_objects,
    Result,
};
use log::warn;
use serde_json::Value;
use std::io::Write;

pub async fn handle_live(
    client: &ApiClient,
    match_id: Option<MatchId>,
    out: &mut impl Write,
) -> Result<()> {
    match match_id {
        Some(id) => show_match(client, id, out).await,
        None => list_live(client, out).await,
    }
}

async fn list_live(client: &ApiClient, out: &mut impl Write) -> Result<()> {
    let body = client.fetch(&Endpoint::LiveMatches).await.or_empty();
    let feed: MatchListResponse = serde_json::from_value(body).unwrap_or_else(|e| {
        warn!("Ignoring malformed live feed: {}", e);
        MatchListResponse::default()
    });

    let entries = feed.entries();
    if entries.is_empty() {
        writeln!(out, "No live matches.")?;
        return Ok(());
    }

    for entry in entries {
        let info = &entry.match_info;
        write!(
            out,
            "{}  {}: {}",
            info.match_id,
            info.series_name.as_deref().unwrap_or("Unknown series"),
            info.match_desc.as_deref().unwrap_or("")
        )?;
        if let Some(status) = &info.status {
            write!(out, "  ({})", status)?;
        }
        writeln!(out)?;
    }
    Ok(())
}

async fn show_match(client: &ApiClient, match_id: MatchId, out: &mut impl Write) -> Result<()> {
    let details = client.fetch(&Endpoint::MatchDetails(match_id)).await.or_empty();

    let header = details
        .pointer("/header/matchHeader/matchDesc")
        .and_then(Value::as_str)
        .unwrap_or("");
    let scores = details
        .pointer("/scoreCard/teamScores")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[]);

    if header.is_empty() && scores.is_empty() {
        writeln!(out, "No details for match {}.", match_id)?;
        return Ok(());
    }

    writeln!(out, "{}", header)?;
    for score in scores {
        writeln!(out)?;
        writeln!(
            out,
            "{}",
            score.get("inningsName").and_then(Value::as_str).unwrap_or("")
        )?;
        for side in ["batting", "bowling"] {
            if let Some(rows) = score.get(side).and_then(Value::as_array) {
                write!(out, "{}", render_objects(rows))?;
            }
        }
    }
    Ok(())
}
