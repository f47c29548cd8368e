// GET /chat/{session_id} handler

use crate::models::{Message, HISTORY_LIMIT, MESSAGE_COLLECTION};
use crate::store::{Persistence, StoreResult};
use percent_encoding::percent_decode_str;
use serde_json::json;
use std::convert::Infallible;

pub async fn history_handler(
    raw_session_id: String,
    persistence: Persistence,
) -> Result<impl warp::Reply, Infallible> {
    let session_id = decode_session_id(&raw_session_id);
    tracing::debug!("GET /chat/{}", session_id);

    let messages = load_history(&persistence, &session_id)
        .await
        .unwrap_or_else(|err| {
            tracing::warn!("Returning empty history for session '{}': {}", session_id, err);
            Vec::new()
        });

    Ok(warp::reply::json(&messages))
}

/// Up to [`HISTORY_LIMIT`] messages of a session, oldest first
pub async fn load_history(
    persistence: &Persistence,
    session_id: &str,
) -> StoreResult<Vec<Message>> {
    let documents = persistence
        .get_documents(
            MESSAGE_COLLECTION,
            json!({ "session_id": session_id }),
            HISTORY_LIMIT,
        )
        .await?;

    Ok(documents.iter().map(Message::from_document).collect())
}

/// Percent-decode a path segment; segments that do not decode to UTF-8 are kept as sent
pub fn decode_session_id(raw: &str) -> String {
    match percent_decode_str(raw).decode_utf8() {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => raw.to_string(),
    }
}
