//! `GET /page?name=`: Greeting page with the name echoed into the markup.

use axum::extract::Query;
use axum::response::Html;

use crate::handlers::{first, QueryPairs};

/// Interpolate `name` into the welcome document without escaping.
pub fn render(name: &str) -> String {
    format!(
        r#"
    <!DOCTYPE html>
    <html>
    <head>
        <title>Welcome</title>
    </head>
    <body>
        <h1>Hello, {name}!</h1>
        <p>Welcome to our website.</p>
    </body>
    </html>
    "#
    )
}

pub async fn render_page(Query(query): Query<QueryPairs>) -> Html<String> {
    Html(render(&first(&query, "name").unwrap_or_default()))
}
