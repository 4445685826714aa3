//! `GET /users?id=`: Record lookup.
//!
//! The identifier is spliced into the SQL text, so query syntax in the
//! value changes what the statement selects.

use std::path::PathBuf;

use axum::extract::{Query, State};

use crate::handlers::{blocking, first, HandlerResult, QueryPairs};
use crate::http::server::AppState;
use crate::store::users;

pub async fn get_user(
    State(state): State<AppState>,
    Query(query): Query<QueryPairs>,
) -> HandlerResult<String> {
    let user_id = first(&query, "id").unwrap_or_else(|| "None".to_string());
    let sql = users::lookup_query(&user_id);
    tracing::debug!(sql = %sql, "Executing user lookup");

    let db_path = PathBuf::from(&state.config.storage.database_path);
    blocking(move || Ok(users::fetch_all(&db_path, &sql)?)).await
}
