// Route definitions and rejection handling

use crate::config::AppConfig;
use crate::handlers;
use crate::models::ErrorResponse;
use crate::store::Persistence;
use std::convert::Infallible;
use std::sync::Arc;
use warp::http::StatusCode;
use warp::{Filter, Rejection, Reply};

/// Largest accepted JSON body on POST /chat
pub const MAX_BODY_BYTES: u64 = 64 * 1024;

pub fn configure_routes(
    persistence: Persistence,
    config: Arc<AppConfig>,
) -> impl Filter<Extract = impl warp::Reply, Error = Infallible> + Clone {
    // GET /
    let root = warp::path::end()
        .and(warp::get())
        .and_then(handlers::root_handler);

    // GET /api/hello
    let hello = warp::path!("api" / "hello")
        .and(warp::get())
        .and_then(handlers::hello_handler);

    // GET /test
    let diagnostics = warp::path!("test")
        .and(warp::get())
        .and(with_persistence(persistence.clone()))
        .and(with_config(config))
        .and_then(handlers::diagnostics_handler);

    // POST /chat
    let chat = warp::path!("chat")
        .and(warp::post())
        .and(warp::body::content_length_limit(MAX_BODY_BYTES))
        .and(warp::body::json())
        .and(with_persistence(persistence.clone()))
        .and_then(handlers::chat_handler);

    // GET /chat/{session_id}
    let history = warp::path("chat")
        .and(warp::path::param::<String>())
        .and(warp::path::end())
        .and(warp::get())
        .and(with_persistence(persistence))
        .and_then(handlers::history_handler);

    // Combine routes
    root.or(hello)
        .or(diagnostics)
        .or(chat)
        .or(history)
        .recover(handle_rejection)
        .with(warp::log("chat_backend::http"))
}

fn with_persistence(
    persistence: Persistence,
) -> impl Filter<Extract = (Persistence,), Error = Infallible> + Clone {
    warp::any().map(move || persistence.clone())
}

fn with_config(
    config: Arc<AppConfig>,
) -> impl Filter<Extract = (Arc<AppConfig>,), Error = Infallible> + Clone {
    warp::any().map(move || config.clone())
}

/// Turn rejections into JSON `{"detail": ...}` bodies
pub async fn handle_rejection(err: Rejection) -> Result<impl Reply, Infallible> {
    let (status, detail) = if err.is_not_found() {
        (StatusCode::NOT_FOUND, "Not Found".to_string())
    } else if let Some(e) = err.find::<warp::filters::body::BodyDeserializeError>() {
        (StatusCode::UNPROCESSABLE_ENTITY, e.to_string())
    } else if err.find::<warp::reject::PayloadTooLarge>().is_some() {
        (StatusCode::PAYLOAD_TOO_LARGE, "Request body too large".to_string())
    } else if err.find::<warp::reject::LengthRequired>().is_some() {
        (StatusCode::LENGTH_REQUIRED, "Length Required".to_string())
    } else if err.find::<warp::reject::UnsupportedMediaType>().is_some() {
        (
            StatusCode::UNSUPPORTED_MEDIA_TYPE,
            "Unsupported Media Type".to_string(),
        )
    } else if err.find::<warp::reject::MethodNotAllowed>().is_some() {
        (StatusCode::METHOD_NOT_ALLOWED, "Method Not Allowed".to_string())
    } else {
        tracing::error!("Unhandled rejection: {:?}", err);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Internal Server Error".to_string(),
        )
    };

    Ok(warp::reply::with_status(
        warp::reply::json(&ErrorResponse::new(detail)),
        status,
    ))
}
