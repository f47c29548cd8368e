// GET / and GET /api/hello handlers

use crate::models::GreetingResponse;
use std::convert::Infallible;

pub const ROOT_GREETING: &str = "Hello from the chat backend!";
pub const API_GREETING: &str = "Hello from the backend API!";

pub async fn root_handler() -> Result<impl warp::Reply, Infallible> {
    Ok(greeting(ROOT_GREETING))
}

pub async fn hello_handler() -> Result<impl warp::Reply, Infallible> {
    Ok(greeting(API_GREETING))
}

fn greeting(message: &str) -> warp::reply::Json {
    warp::reply::json(&GreetingResponse {
        message: message.to_string(),
    })
}
