use anyhow::Result;
use clap::{Args, Subcommand};
use futures::TryStreamExt;
use jules_api::{types::ListActivitiesResponse, JulesClient};

use crate::output::formatter;

#[derive(Subcommand)]
pub enum ActivitiesCommand {
    /// List all activities for a session
    List(ListActivitiesArgs),
}

#[derive(Args)]
pub struct ListActivitiesArgs {
    /// The ID of the session to list activities for
    #[arg(required = true)]
    pub session_id: String,
    #[arg(short = 's', long)]
    page_size: Option<u32>,
    #[arg(short = 'p', long)]
    page_token: Option<String>,
    /// Follow continuation tokens and print every page
    #[arg(long, conflicts_with = "page_token")]
    all: bool,
}

pub async fn handle_activities_command(
    command: &ActivitiesCommand,
    client: &JulesClient,
    format: &str,
) -> Result<()> {
    match command {
        ActivitiesCommand::List(args) => {
            let response = if args.all {
                let activities = client
                    .list_activities_stream(&args.session_id, args.page_size)
                    .try_collect()
                    .await?;
                ListActivitiesResponse {
                    activities,
                    next_page_token: None,
                }
            } else {
                client
                    .list_activities(&args.session_id, args.page_size, args.page_token.as_deref())
                    .await?
            };
            formatter::print_activities_response(&response, format)?;
        }
    }
    Ok(())
}
