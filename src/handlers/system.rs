//! `GET /system?cmd=`: Command execution.

use axum::extract::Query;

use crate::handlers::{blocking, required, HandlerResult, QueryPairs};
use crate::shell;

pub async fn execute_command(Query(query): Query<QueryPairs>) -> HandlerResult<String> {
    let command = required(&query, "cmd")?;
    tracing::debug!(command = %command, "Running shell command");

    let status = blocking(move || Ok(shell::system(&command)?)).await?;
    Ok(format!("Command executed with status: {}", status))
}
