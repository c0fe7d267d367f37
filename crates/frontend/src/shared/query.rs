//! Thin HTTP layer over the `{ respuesta, mensaje, datos }` envelope.

use crate::shared::api_utils::api_url;
use contracts::shared::api_response::ApiResponse;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use web_sys::FormData;

async fn read_envelope<T: DeserializeOwned>(response: Response) -> Result<ApiResponse<T>, String> {
    let status = response.status();
    let text = response
        .text()
        .await
        .map_err(|e| format!("Failed to read response: {}", e))?;

    if !(200..300).contains(&status) {
        // error replies usually still carry a `mensaje`
        return match serde_json::from_str::<ApiResponse<serde_json::Value>>(&text) {
            Ok(envelope) => Err(envelope.message_or(&format!("HTTP {}", status))),
            Err(_) => Err(format!("HTTP {}", status)),
        };
    }

    serde_json::from_str(&text).map_err(|e| format!("Failed to parse response: {}", e))
}

pub async fn get<T: DeserializeOwned>(route: &str) -> Result<ApiResponse<T>, String> {
    let response = Request::get(&api_url(route))
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;
    read_envelope(response).await
}

pub async fn post<B, T>(route: &str, body: &B) -> Result<ApiResponse<T>, String>
where
    B: Serialize,
    T: DeserializeOwned,
{
    let response = Request::post(&api_url(route))
        .header("Accept", "application/json")
        .json(body)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;
    read_envelope(response).await
}

/// Multipart POST; the browser sets the boundary header.
pub async fn post_form<T: DeserializeOwned>(
    route: &str,
    form: FormData,
) -> Result<ApiResponse<T>, String> {
    let response = Request::post(&api_url(route))
        .header("Accept", "application/json")
        .body(form)
        .map_err(|e| format!("Failed to build request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;
    read_envelope(response).await
}
