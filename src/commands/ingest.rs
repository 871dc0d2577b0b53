//! `ingest`: pull API data into the store.

use super::common::CommandContext;
use crate::{
    cricbuzz::ApiClient,
    ingest::{Pipeline, Stage, StageReport},
    Result,
};
use std::io::Write;

/// Run the requested stages (all of them when `stages` is empty) and print a
/// line per completed stage.
pub async fn handle_ingest(
    ctx: &mut CommandContext,
    stages: &[Stage],
    out: &mut impl Write,
) -> Result<Vec<StageReport>> {
    let client = ctx.client()?;
    run_ingest(&client, ctx, stages, out).await
}

pub async fn run_ingest(
    client: &ApiClient,
    ctx: &mut CommandContext,
    stages: &[Stage],
    out: &mut impl Write,
) -> Result<Vec<StageReport>> {
    let mut pipeline = Pipeline::new(client, &mut ctx.db);
    let reports = if stages.is_empty() {
        pipeline.run_all().await?
    } else {
        pipeline.run(stages).await?
    };

    for report in &reports {
        writeln!(out, "✓ {}: {} rows", report.stage, report.rows)?;
    }
    writeln!(out, "Data ingestion complete.")?;
    Ok(reports)
}
