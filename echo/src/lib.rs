//! Request/response types and HTTP API for the Unimart hello-world function.
//!
//! The function is stateless: it greets the `name` in the request body, or
//! "World" when there is none. Every response, including errors and CORS
//! preflights, carries permissive CORS headers so browsers on any origin
//! can call it.

use axum::{
    body::Bytes,
    http::{header, HeaderName, Method, StatusCode},
    response::{IntoResponse, Json, Response},
    routing::any,
    Router,
};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Path the function is mounted at.
pub const HELLO_WORLD_PATH: &str = "/hello-world";

/// Headers added to every response.
pub const CORS_HEADERS: [(HeaderName, &str); 2] = [
    (header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"),
    (
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        "authorization, x-client-info, apikey, content-type",
    ),
];

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct HelloRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct HelloResponse {
    pub message: String,
    pub timestamp: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ErrorResponse {
    pub error: String,
}

/// Typed payloads for the backend's serverless functions.
///
/// Callers build one of these instead of an untyped JSON blob; the variant
/// decides which function is invoked.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "function", content = "payload", rename_all = "kebab-case")]
pub enum FunctionCall {
    HelloWorld(HelloRequest),
}

impl FunctionCall {
    /// Route of the function on the functions host.
    pub fn path(&self) -> &'static str {
        match self {
            Self::HelloWorld(_) => HELLO_WORLD_PATH,
        }
    }

    /// Request body to send.
    pub fn body(&self) -> Result<Vec<u8>, serde_json::Error> {
        match self {
            Self::HelloWorld(request) => serde_json::to_vec(request),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum EchoError {
    #[error("malformed payload: {0}")]
    MalformedPayload(String),
}

impl IntoResponse for EchoError {
    fn into_response(self) -> Response {
        let status = match self {
            EchoError::MalformedPayload(_) => StatusCode::BAD_REQUEST,
        };
        let body = ErrorResponse {
            error: self.to_string(),
        };
        (status, CORS_HEADERS, Json(body)).into_response()
    }
}

/// Parses the optional JSON body. An empty body means no name was given.
pub fn parse_request(body: &[u8]) -> Result<HelloRequest, EchoError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(HelloRequest::default());
    }
    serde_json::from_slice(body).map_err(|e| EchoError::MalformedPayload(e.to_string()))
}

/// Builds the greeting. An absent or empty name greets "World".
pub fn greet(request: &HelloRequest, now: DateTime<Utc>) -> HelloResponse {
    let name = request
        .name
        .as_deref()
        .filter(|n| !n.is_empty())
        .unwrap_or("World");
    HelloResponse {
        message: format!("Hello {name}!"),
        timestamp: now.to_rfc3339_opts(SecondsFormat::Millis, true),
    }
}

async fn hello_world_handler(method: Method, body: Bytes) -> Result<Response, EchoError> {
    if method == Method::OPTIONS {
        return Ok((CORS_HEADERS, "ok").into_response());
    }

    let request = parse_request(&body).inspect_err(|e| warn!(%method, "Rejected request: {}", e))?;
    debug!(%method, name = ?request.name, "Greeting");
    Ok((CORS_HEADERS, Json(greet(&request, Utc::now()))).into_response())
}

async fn not_found_handler() -> Response {
    let body = ErrorResponse {
        error: "not found".to_string(),
    };
    (StatusCode::NOT_FOUND, CORS_HEADERS, Json(body)).into_response()
}

/// Build the HTTP API router.
pub fn build_router() -> Router {
    Router::new()
        .route(HELLO_WORLD_PATH, any(hello_world_handler))
        .fallback(not_found_handler)
}
