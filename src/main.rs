//! Entry point: parse CLI and dispatch to command handlers.

use anyhow::Context;
use clap::Parser;
use cricbuzz_stats::{
    cli::{AnalyticsCmd, Cli, Commands, PlayersCmd},
    commands::{
        analytics::{handle_analytics_list, handle_analytics_run},
        common::CommandContext,
        fetch::handle_fetch,
        home::handle_home,
        ingest::handle_ingest,
        live::handle_live,
        players::{handle_players_add, handle_players_delete, handle_players_list, handle_players_update},
    },
    config::Config,
    cricbuzz::{ApiClient, Endpoint},
    storage::{Player, PlayerUpdate},
};

/// Run the CLI.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "info");
    }
    pretty_env_logger::init_custom_env("RUST_LOG");

    let app = Cli::parse();
    let config = Config::from_env()
        .context("Failed to read configuration")?
        .with_db_path(app.db);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match app.command {
        Commands::Ingest { stages } => {
            let mut ctx = open_context(config)?;
            handle_ingest(&mut ctx, &stages, &mut out)
                .await
                .context("Ingestion failed")?;
        }

        Commands::Analytics { cmd } => match cmd {
            AnalyticsCmd::List => handle_analytics_list(&mut out)?,
            AnalyticsCmd::Run { query, json } => {
                let ctx = open_context(config)?;
                handle_analytics_run(&ctx.db, &query, json, &mut out)?
            }
        },

        Commands::Players { cmd } => {
            let mut ctx = open_context(config)?;
            match cmd {
                PlayersCmd::List => handle_players_list(&ctx.db, &mut out)?,

                PlayersCmd::Add {
                    name,
                    team_id,
                    role,
                    batting_style,
                    bowling_style,
                    id,
                } => {
                    let player = Player {
                        player_id: id,
                        player_name: name,
                        team_id: Some(team_id),
                        role: Some(role.to_string()),
                        batting_style,
                        bowling_style,
                    };
                    handle_players_add(&mut ctx.db, &player, &mut out)?;
                }

                PlayersCmd::Update {
                    id,
                    name,
                    team_id,
                    role,
                    batting_style,
                    bowling_style,
                } => {
                    let update = PlayerUpdate {
                        player_name: name,
                        team_id,
                        role: role.map(|r| r.to_string()),
                        batting_style,
                        bowling_style,
                    };
                    handle_players_update(&mut ctx.db, id, &update, &mut out)?;
                }

                PlayersCmd::Delete { id } => {
                    handle_players_delete(&mut ctx.db, id, &mut out)?;
                }
            }
        }

        Commands::Live { match_id } => {
            let client = ApiClient::from_config(&config).context("Failed to build API client")?;
            handle_live(&client, match_id, &mut out).await?;
        }

        Commands::Home => {
            let ctx = open_context(config)?;
            handle_home(&ctx.db, &mut out)?;
        }

        Commands::Fetch {
            endpoint,
            id,
            search,
        } => {
            let endpoint = Endpoint::from_name(&endpoint, id, search.as_deref())?;
            let client = ApiClient::from_config(&config).context("Failed to build API client")?;
            handle_fetch(&client, &endpoint, &mut out).await?;
        }
    }

    Ok(())
}

fn open_context(config: Config) -> anyhow::Result<CommandContext> {
    let db_path = config.db_path.clone();
    CommandContext::open(config)
        .with_context(|| format!("Failed to open database at {}", db_path.display()))
}
