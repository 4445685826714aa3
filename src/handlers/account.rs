//! `GET /account/{id}`: Account lookup by caller-supplied identifier.
//!
//! There is no session or ownership concept: every caller sees every record.

use axum::extract::Path;

use crate::store::accounts;

pub async fn get_account(Path(account_id): Path<String>) -> String {
    match accounts::find(&account_id) {
        Some(account) => account.to_string(),
        None => "Account not found".to_string(),
    }
}
