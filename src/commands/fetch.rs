//! `fetch`: one raw API response, pretty-printed.

use crate::{
    cricbuzz::{ApiClient, Endpoint},
    Result,
};
use log::debug;
use std::io::Write;

/// Print the JSON body of `endpoint`. A failed fetch is an error.
pub async fn handle_fetch(client: &ApiClient, endpoint: &Endpoint, out: &mut impl Write) -> Result<()> {
    debug!("GET {}", endpoint.path());
    let body = client.fetch(endpoint).await.into_result()?;
    writeln!(out, "{}", serde_json::to_string_pretty(&body)?)?;
    Ok(())
}
