// ============================================================================
// REQUEST HELPERS - stateless HTTP plumbing
// ============================================================================
// Thin wrappers over gloo-net. JSON in, JSON out; error bodies are still
// inspected for a server-provided {message}.
// ============================================================================

use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use serde::Serialize;
use web_sys::RequestCredentials;

use crate::services::error::error_message_from_body;
use crate::services::{Method, RequestError};
use crate::utils::constants::api_url;

const GET_FALLBACK: &str = "Failed to fetch data";
const MUTATION_FALLBACK: &str = "Something went wrong";

/// GET `path` and parse the JSON body as `Res`.
pub async fn get_json<Res>(path: &str, headers: &[(String, String)]) -> Result<Res, RequestError>
where
    Res: DeserializeOwned,
{
    let mut builder = Request::get(&api_url(path)).header("Content-Type", "application/json");
    for (name, value) in headers {
        builder = builder.header(name, value);
    }

    let response = builder
        .send()
        .await
        .map_err(|e| RequestError::Network(e.to_string()))?;

    parse_response(response, GET_FALLBACK).await
}

/// Send a JSON mutation to `path` and parse the JSON body as `Res`.
pub async fn send_json<Req, Res>(
    method: Method,
    path: &str,
    body: &Req,
    headers: &[(String, String)],
    credentials: Option<RequestCredentials>,
) -> Result<Res, RequestError>
where
    Req: Serialize,
    Res: DeserializeOwned,
{
    let url = api_url(path);
    let mut builder = match method {
        Method::Post => Request::post(&url),
        Method::Put => Request::put(&url),
        Method::Patch => Request::patch(&url),
        Method::Delete => Request::delete(&url),
    };
    for (name, value) in headers {
        builder = builder.header(name, value);
    }
    if let Some(credentials) = credentials {
        builder = builder.credentials(credentials);
    }

    let response = builder
        .json(body)
        .map_err(|e| RequestError::Network(format!("Request build error: {}", e)))?
        .send()
        .await
        .map_err(|e| RequestError::Network(e.to_string()))?;

    parse_response(response, MUTATION_FALLBACK).await
}

async fn parse_response<Res>(
    response: gloo_net::http::Response,
    fallback: &str,
) -> Result<Res, RequestError>
where
    Res: DeserializeOwned,
{
    let status = response.status();
    let text = response.text().await.unwrap_or_default();

    if !response.ok() {
        return Err(RequestError::Server {
            status,
            message: error_message_from_body(&text, fallback),
        });
    }

    serde_json::from_str(&text).map_err(|e| RequestError::Parse(e.to_string()))
}
