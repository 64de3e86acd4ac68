//! HTTP API Wrappers
//!
//! Thin typed bindings to the backend REST endpoints, organized by domain.
//! All requests go through the helpers here, which normalize failures into
//! the `ApiError` taxonomy and attach the bearer token when one is set.

mod favorites;
mod investments;
mod movies;
mod notes;
mod passwords;
mod series;
mod websites;
mod worklog;

pub use favorites::*;
pub use investments::*;
pub use movies::*;
pub use notes::*;
pub use passwords::*;
pub use series::*;
pub use websites::*;
pub use worklog::*;

use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::cell::RefCell;
use wasm_bindgen::JsCast;

use crate::error::ApiError;

thread_local! {
    static AUTH_TOKEN: RefCell<Option<String>> = RefCell::new(None);
}

/// Set or clear the bearer token attached to subsequent requests.
/// Absence of a token is not fatal; some resources are public.
pub fn set_auth_token(token: Option<String>) {
    AUTH_TOKEN.with(|cell| *cell.borrow_mut() = token);
}

fn auth_token() -> Option<String> {
    AUTH_TOKEN.with(|cell| cell.borrow().clone())
}

/// API base URL: `<origin>/api`, overridable via a `data-api-base`
/// attribute on the document body.
pub fn base_url() -> String {
    let window = web_sys::window().expect("must have window");
    if let Some(body) = window.document().and_then(|d| d.body()) {
        if let Some(base) = body.get_attribute("data-api-base") {
            return base.trim_end_matches('/').to_string();
        }
    }
    let origin = window.location().origin().expect("must have location");
    format!("{}/api", origin)
}

fn build(method: Method, path: &str) -> RequestBuilder {
    let url = format!("{}/{}", base_url(), path);
    let mut builder = reqwest::Client::new().request(method, url);
    if let Some(token) = auth_token() {
        builder = builder.bearer_auth(token);
    }
    builder
}

/// Pull a human-readable message out of an error response body.
fn error_message(body: &str, status: u16) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| {
            value
                .get("error")
                .or_else(|| value.get("message"))
                .and_then(|m| m.as_str())
                .map(str::to_string)
        })
        .unwrap_or_else(|| format!("Request failed ({})", status))
}

async fn send_json<T: DeserializeOwned>(builder: RequestBuilder) -> Result<T, ApiError> {
    let response = builder.send().await.map_err(|_| ApiError::Network)?;
    let status = response.status().as_u16();
    if !(200..300).contains(&status) {
        let body = response.text().await.unwrap_or_default();
        return Err(ApiError::RequestFailed {
            status,
            message: error_message(&body, status),
        });
    }
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

async fn send_empty(builder: RequestBuilder) -> Result<(), ApiError> {
    let response = builder.send().await.map_err(|_| ApiError::Network)?;
    let status = response.status().as_u16();
    if !(200..300).contains(&status) {
        let body = response.text().await.unwrap_or_default();
        return Err(ApiError::RequestFailed {
            status,
            message: error_message(&body, status),
        });
    }
    Ok(())
}

pub(crate) async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    web_sys::console::log_1(&format!("[API] GET {}", path).into());
    send_json(build(Method::GET, path)).await
}

pub(crate) async fn post_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, ApiError> {
    web_sys::console::log_1(&format!("[API] POST {}", path).into());
    send_json(build(Method::POST, path).json(body)).await
}

pub(crate) async fn put_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, ApiError> {
    web_sys::console::log_1(&format!("[API] PUT {}", path).into());
    send_json(build(Method::PUT, path).json(body)).await
}

pub(crate) async fn delete_empty(path: &str) -> Result<(), ApiError> {
    web_sys::console::log_1(&format!("[API] DELETE {}", path).into());
    send_empty(build(Method::DELETE, path)).await
}

/// Fetch an opaque export (PDF) and hand it to the browser as a download.
/// No client-side parsing; the body is passed through untouched.
pub(crate) async fn download_blob(path: &str, filename: &str) -> Result<(), ApiError> {
    let response = build(Method::GET, path)
        .send()
        .await
        .map_err(|_| ApiError::Network)?;
    let status = response.status().as_u16();
    if !(200..300).contains(&status) {
        return Err(ApiError::RequestFailed {
            status,
            message: format!("Request failed ({})", status),
        });
    }
    let bytes = response.bytes().await.map_err(|_| ApiError::Network)?;
    trigger_save(&bytes, filename).map_err(|e| ApiError::Decode(e))
}

fn trigger_save(bytes: &[u8], filename: &str) -> Result<(), String> {
    let array = js_sys::Uint8Array::from(bytes);
    let parts = js_sys::Array::of1(&array);
    let blob = web_sys::Blob::new_with_u8_array_sequence(&parts)
        .map_err(|_| "blob creation failed".to_string())?;
    let url = web_sys::Url::create_object_url_with_blob(&blob)
        .map_err(|_| "object url failed".to_string())?;

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or("no document")?;
    let anchor = document
        .create_element("a")
        .map_err(|_| "anchor failed".to_string())?
        .dyn_into::<web_sys::HtmlAnchorElement>()
        .map_err(|_| "anchor cast failed".to_string())?;
    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor.click();
    let _ = web_sys::Url::revoke_object_url(&url);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_message_prefers_error_field() {
        assert_eq!(
            error_message(r#"{"error":"title taken"}"#, 409),
            "title taken"
        );
        assert_eq!(
            error_message(r#"{"message":"not found"}"#, 404),
            "not found"
        );
    }

    #[test]
    fn error_message_falls_back_to_status() {
        assert_eq!(error_message("<html>oops</html>", 500), "Request failed (500)");
        assert_eq!(error_message("", 503), "Request failed (503)");
    }
}
