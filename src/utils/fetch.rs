//! Network fetching with a timeout.

use js_sys::{Array, Promise};
use serde::de::DeserializeOwned;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use crate::config::FETCH_TIMEOUT_MS;
use crate::core::error::FetchError;
use crate::utils::dom;

/// Await `promise`, giving up after `timeout_ms`.
///
/// The timer side of the race resolves to `undefined`, which neither a
/// `fetch` response nor a body read ever does.
async fn with_timeout(promise: Promise, timeout_ms: i32) -> Result<JsValue, FetchError> {
    let window = dom::window().ok_or(FetchError::NoWindow)?;

    let timer = Promise::new(&mut |resolve, _| {
        let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, timeout_ms);
    });
    let race = Promise::race(&Array::of2(&promise, &timer));

    match JsFuture::from(race).await {
        Ok(value) if value.is_undefined() => Err(FetchError::Timeout { after_ms: timeout_ms }),
        Ok(value) => Ok(value),
        Err(err) => Err(network_error(err)),
    }
}

/// GET a same-origin URL and return its body as text.
///
/// With `timeout_ms`, the limit covers both the response headers and the
/// body. Without it the request may wait indefinitely.
pub async fn fetch_text(url: &str, timeout_ms: Option<i32>) -> Result<String, FetchError> {
    let window = dom::window().ok_or(FetchError::NoWindow)?;

    let init = RequestInit::new();
    init.set_method("GET");
    init.set_mode(RequestMode::SameOrigin);
    let request = Request::new_with_str_and_init(url, &init)
        .map_err(|_| FetchError::BadRequest)?;

    let response: Response = settle(window.fetch_with_request(&request), timeout_ms)
        .await?
        .dyn_into()
        .map_err(|_| FetchError::NotText)?;
    if !response.ok() {
        return Err(FetchError::Status(response.status()));
    }

    let body = response.text().map_err(|_| FetchError::BodyUnreadable)?;
    settle(body, timeout_ms)
        .await?
        .as_string()
        .ok_or(FetchError::NotText)
}

/// GET a same-origin URL and parse the body as JSON, within [`FETCH_TIMEOUT_MS`].
pub async fn fetch_json<T: DeserializeOwned>(url: &str) -> Result<T, FetchError> {
    let text = fetch_text(url, Some(FETCH_TIMEOUT_MS)).await?;
    serde_json::from_str(&text).map_err(|e| FetchError::Decode(e.to_string()))
}

async fn settle(promise: Promise, timeout_ms: Option<i32>) -> Result<JsValue, FetchError> {
    match timeout_ms {
        Some(ms) => with_timeout(promise, ms).await,
        None => JsFuture::from(promise).await.map_err(network_error),
    }
}

fn network_error(err: JsValue) -> FetchError {
    FetchError::Network(err.as_string().unwrap_or_else(|| format!("{:?}", err)))
}
