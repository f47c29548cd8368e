// POST /chat handler

use crate::models::{
    ChatRequest, ChatResponse, ErrorResponse, Message, ASSISTANT_REPLY, MESSAGE_COLLECTION,
};
use crate::store::Persistence;
use std::convert::Infallible;
use warp::http::StatusCode;
use warp::reply::{Reply, Response};

pub async fn chat_handler(
    request: ChatRequest,
    persistence: Persistence,
) -> Result<Response, Infallible> {
    let prompt = match request.validated_prompt() {
        Ok(prompt) => prompt,
        Err(err) => {
            tracing::debug!(
                "Rejected chat request for session '{}': {}",
                request.session_id,
                err
            );
            return Ok(warp::reply::with_status(
                warp::reply::json(&ErrorResponse::new(err.to_string())),
                StatusCode::BAD_REQUEST,
            )
            .into_response());
        }
    };

    tracing::debug!("POST /chat session='{}'", request.session_id);

    let user_message = Message::user(&request.session_id, prompt);
    persist_best_effort(&persistence, &user_message).await;

    let assistant_message = Message::assistant(&request.session_id, ASSISTANT_REPLY);
    persist_best_effort(&persistence, &assistant_message).await;

    Ok(warp::reply::json(&ChatResponse {
        content: assistant_message.content,
    })
    .into_response())
}

/// Write a message, logging and dropping any failure.
///
/// A failed write never changes the reply sent to the caller.
async fn persist_best_effort(persistence: &Persistence, message: &Message) {
    if let Err(err) = persistence
        .create_document(MESSAGE_COLLECTION, message.to_document())
        .await
    {
        tracing::warn!(
            "Skipping persistence of {} message for session '{}': {}",
            message.role,
            message.session_id,
            err
        );
    }
}
