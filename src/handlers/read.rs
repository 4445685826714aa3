//! `GET /read?file=`: File read relative to the files directory.

use axum::extract::{Query, State};

use crate::handlers::{blocking, required, HandlerResult, QueryPairs};
use crate::http::server::AppState;
use crate::store::files;

pub async fn read_file(
    State(state): State<AppState>,
    Query(query): Query<QueryPairs>,
) -> HandlerResult<String> {
    let filename = required(&query, "file")?;
    let path = files::resolve(&state.config.storage.files_dir, &filename);
    tracing::debug!(path = %path, "Reading file");

    blocking(move || Ok(files::read(&path)?)).await
}
