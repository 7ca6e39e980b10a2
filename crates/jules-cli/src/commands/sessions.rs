use anyhow::Result;
use clap::{Args, Subcommand};
use jules_api::{
    types::{CreateSessionRequest, SendMessageRequest, SourceContext},
    JulesClient,
};

use crate::output::formatter;

#[derive(Subcommand)]
pub enum SessionsCommand {
    /// Create a new session
    Create(CreateSessionArgs),
    /// List all sessions
    List(ListSessionsArgs),
    /// Get a specific session by ID
    Get(GetSessionArgs),
    /// Approve the latest plan for a session
    ApprovePlan(ApprovePlanArgs),
    /// Send a follow-up message to the agent
    SendMessage(SendMessageArgs),
}

#[derive(Args)]
pub struct CreateSessionArgs {
    /// Resource name of the source to work against
    #[arg(long)]
    pub source: String,
    /// What the agent should do
    #[arg(long)]
    pub prompt: String,
    /// Human-readable session title
    #[arg(long)]
    pub title: String,
    /// Branch to start from
    #[arg(long)]
    pub starting_branch: Option<String>,
    /// Require an explicit plan approval before the agent acts
    #[arg(long)]
    pub require_plan_approval: bool,
}

#[derive(Args)]
pub struct ListSessionsArgs {
    #[arg(short = 's', long)]
    page_size: Option<u32>,
    #[arg(short = 'p', long)]
    page_token: Option<String>,
}

#[derive(Args)]
pub struct GetSessionArgs {
    /// The ID of the session to retrieve
    #[arg(required = true)]
    pub session_id: String,
}

#[derive(Args)]
pub struct ApprovePlanArgs {
    /// The ID of the session whose plan to approve
    #[arg(required = true)]
    pub session_id: String,
}

#[derive(Args)]
pub struct SendMessageArgs {
    /// The ID of the session to message
    #[arg(required = true)]
    pub session_id: String,
    /// Message for the agent
    #[arg(long)]
    pub prompt: String,
}

pub async fn handle_sessions_command(
    command: &SessionsCommand,
    client: &JulesClient,
    format: &str,
) -> Result<()> {
    match command {
        SessionsCommand::Create(args) => {
            let mut source_context = SourceContext::new(args.source.clone());
            if let Some(branch) = &args.starting_branch {
                source_context = source_context.with_starting_branch(branch.clone());
            }
            let mut request =
                CreateSessionRequest::new(args.prompt.clone(), source_context, args.title.clone());
            if args.require_plan_approval {
                request = request.with_plan_approval();
            }
            let session = client.create_session(&request).await?;
            formatter::print_session(&session, format)?;
        }
        SessionsCommand::List(args) => {
            let response = client
                .list_sessions(args.page_size, args.page_token.as_deref())
                .await?;
            formatter::print_sessions_response(&response, format)?;
        }
        SessionsCommand::Get(args) => {
            let session = client.get_session(&args.session_id).await?;
            formatter::print_session(&session, format)?;
        }
        SessionsCommand::ApprovePlan(args) => {
            client.approve_plan(&args.session_id).await?;
            println!("Plan approved for session {}.", args.session_id);
        }
        SessionsCommand::SendMessage(args) => {
            let request = SendMessageRequest::new(args.prompt.clone());
            client.send_message(&args.session_id, &request).await?;
            println!("Message sent to session {}.", args.session_id);
        }
    }
    Ok(())
}
