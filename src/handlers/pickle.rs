//! `GET /pickle?data=`: Object graph decoding of caller-supplied bytes.

use axum::extract::Query;
use base64::{engine::general_purpose::STANDARD, Engine as _};

use crate::handlers::{blocking, required, HandlerResult, QueryPairs};
use crate::marshal;

pub async fn load_data(Query(query): Query<QueryPairs>) -> HandlerResult<String> {
    let data = required(&query, "data")?;
    let decoded = STANDARD.decode(data.as_bytes())?;
    tracing::debug!(bytes = decoded.len(), "Decoding object payload");

    blocking(move || Ok(marshal::loads(&decoded)?.to_string())).await
}
