use anyhow::Result;
use jules_api::types::{
    Activity, ListActivitiesResponse, ListSessionsResponse, ListSourcesResponse, Session, Source,
};
use serde::Serialize;

use crate::output::table::print_table;

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{}", json);
    Ok(())
}

fn repo_column(source: &Source) -> String {
    source
        .github_repo
        .as_ref()
        .map(|repo| format!("{}/{}", repo.owner, repo.repo))
        .unwrap_or_default()
}

fn session_row(session: &Session) -> Vec<String> {
    vec![
        session.id.clone(),
        session.title.clone(),
        session
            .source_context
            .as_ref()
            .map(|context| context.source.clone())
            .unwrap_or_default(),
    ]
}

fn activity_row(activity: &Activity) -> Vec<String> {
    vec![
        activity.id.clone(),
        activity.r#type.clone(),
        activity
            .timestamp
            .map(|ts| ts.to_rfc3339())
            .unwrap_or_default(),
        activity.content.clone().unwrap_or_default(),
    ]
}

// --- Source Formatters ---

pub fn print_sources_response(response: &ListSourcesResponse, format: &str) -> Result<()> {
    match format {
        "json" => print_json(response)?,
        _ => {
            let headers = vec!["ID", "Name", "Repository"];
            let rows: Vec<Vec<String>> = response
                .sources
                .iter()
                .map(|s| vec![s.id.clone(), s.name.clone(), repo_column(s)])
                .collect();
            print_table(headers, rows);
            if let Some(token) = &response.next_page_token {
                println!("\nNext page token: {}", token);
            }
        }
    }
    Ok(())
}

pub fn print_source(source: &Source, format: &str) -> Result<()> {
    match format {
        "json" => print_json(source)?,
        _ => {
            let headers = vec!["ID", "Name", "Repository"];
            let rows = vec![vec![
                source.id.clone(),
                source.name.clone(),
                repo_column(source),
            ]];
            print_table(headers, rows);
        }
    }
    Ok(())
}

// --- Session Formatters ---

pub fn print_sessions_response(response: &ListSessionsResponse, format: &str) -> Result<()> {
    match format {
        "json" => print_json(response)?,
        _ => {
            let headers = vec!["ID", "Title", "Source"];
            let rows: Vec<Vec<String>> = response.sessions.iter().map(session_row).collect();
            print_table(headers, rows);
            if let Some(token) = &response.next_page_token {
                println!("\nNext page token: {}", token);
            }
        }
    }
    Ok(())
}

pub fn print_session(session: &Session, format: &str) -> Result<()> {
    match format {
        "json" => print_json(session)?,
        _ => {
            let headers = vec!["ID", "Title", "Source"];
            print_table(headers, vec![session_row(session)]);
            if let Some(prompt) = &session.prompt {
                println!("\nPrompt: {}", prompt);
            }
        }
    }
    Ok(())
}

// --- Activity Formatters ---

pub fn print_activities_response(response: &ListActivitiesResponse, format: &str) -> Result<()> {
    match format {
        "json" => print_json(response)?,
        _ => {
            let headers = vec!["ID", "Type", "Timestamp", "Content"];
            let rows: Vec<Vec<String>> = response.activities.iter().map(activity_row).collect();
            print_table(headers, rows);
            if let Some(token) = &response.next_page_token {
                println!("\nNext page token: {}", token);
            }
        }
    }
    Ok(())
}
