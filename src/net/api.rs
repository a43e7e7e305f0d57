//! HTTP API client for the analytics backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning defaults/errors since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Each endpoint carries one of two explicit failure policies:
//!
//! - propagate ([`analyze`], [`export_analysis`]): transport failures,
//!   non-2xx responses, and malformed bodies are logged and returned to the
//!   caller, which must surface them to the user.
//! - soft-fail ([`fetch_localities`], [`fetch_sample_queries`]): failures
//!   are logged at warn level and callers are expected to degrade to empty
//!   lists; nothing beyond the startup banner ever surfaces them.
//!
//! Cross-cutting concerns (base path, failure logging) live here once
//! rather than at every call site.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{AnalysisResult, Record, SampleQuery};
#[cfg(feature = "hydrate")]
use serde::Deserialize;

/// Base path of the analytics backend, shared by all four endpoints.
pub const API_BASE: &str = "/api";

#[cfg(any(test, feature = "hydrate"))]
fn analyze_endpoint(query: &str, filters: &Record) -> String {
    let mut url = format!("{API_BASE}/analyze/?query={}", urlencoding::encode(query));
    for (key, value) in filters {
        let value = filter_value_str(value);
        url.push('&');
        url.push_str(&urlencoding::encode(key));
        url.push('=');
        url.push_str(&urlencoding::encode(&value));
    }
    url
}

/// Render a filter value for use as a query parameter. Strings go through
/// bare; everything else uses its JSON form.
#[cfg(any(test, feature = "hydrate"))]
fn filter_value_str(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn analyze_failed_message(status: u16) -> String {
    format!("analyze request failed: {status}")
}

#[cfg(any(test, feature = "hydrate"))]
fn export_failed_message(status: u16) -> String {
    format!("export request failed: {status}")
}

/// Parse the filename out of a `Content-Disposition` header. Accepts both
/// the quoted (`filename="report.csv"`) and bare (`filename=report.csv`)
/// forms.
#[cfg(any(test, feature = "hydrate"))]
fn filename_from_disposition(disposition: &str) -> Option<String> {
    let lower = disposition.to_ascii_lowercase();
    let start = lower.find("filename=")? + "filename=".len();
    let rest = disposition[start..].trim_start();
    let name = if let Some(quoted) = rest.strip_prefix('"') {
        quoted.split('"').next().unwrap_or_default()
    } else {
        rest.split(';').next().unwrap_or_default().trim()
    };
    if name.is_empty() {
        None
    } else {
        Some(name.to_owned())
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn fallback_filename(format: &str) -> &'static str {
    if format == "excel" {
        "real_estate_export.xlsx"
    } else {
        "real_estate_export.csv"
    }
}

#[cfg(feature = "hydrate")]
fn log_propagated_error(context: &str, message: &str) {
    log::error!("API error during {context}: {message}");
}

#[cfg(feature = "hydrate")]
fn log_soft_failure(context: &str, message: &str) {
    log::warn!("API soft failure during {context}: {message}");
}

/// Run a natural-language query through `GET /api/analyze/`.
///
/// Propagating endpoint: the caller must surface failures to the user.
///
/// # Errors
///
/// Returns an error string on transport failure, a non-2xx response, or an
/// unparseable body.
pub async fn analyze(query: &str, filters: &Record) -> Result<AnalysisResult, String> {
    #[cfg(feature = "hydrate")]
    {
        let url = analyze_endpoint(query, filters);
        let resp = gloo_net::http::Request::get(&url)
            .send()
            .await
            .map_err(|e| {
                let msg = e.to_string();
                log_propagated_error("analyze", &msg);
                msg
            })?;
        if !resp.ok() {
            let msg = analyze_failed_message(resp.status());
            log_propagated_error("analyze", &msg);
            return Err(msg);
        }
        resp.json::<AnalysisResult>().await.map_err(|e| {
            let msg = e.to_string();
            log_propagated_error("analyze", &msg);
            msg
        })
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (query, filters);
        Err("not available on server".to_owned())
    }
}

#[cfg(feature = "hydrate")]
#[derive(Debug, Deserialize)]
struct LocalitiesResponse {
    #[serde(default)]
    localities: Vec<String>,
}

/// Fetch the known locality names from `GET /api/localities/`.
///
/// Soft-fail endpoint: callers default to an empty list on error.
///
/// # Errors
///
/// Returns an error string on transport failure or a non-2xx response.
pub async fn fetch_localities() -> Result<Vec<String>, String> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("{API_BASE}/localities/");
        let resp = gloo_net::http::Request::get(&url)
            .send()
            .await
            .map_err(|e| {
                let msg = e.to_string();
                log_soft_failure("localities", &msg);
                msg
            })?;
        if !resp.ok() {
            let msg = format!("localities request failed: {}", resp.status());
            log_soft_failure("localities", &msg);
            return Err(msg);
        }
        let body: LocalitiesResponse = resp.json().await.map_err(|e| {
            let msg = e.to_string();
            log_soft_failure("localities", &msg);
            msg
        })?;
        Ok(body.localities)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

#[cfg(feature = "hydrate")]
#[derive(Debug, Deserialize)]
struct SampleQueriesResponse {
    #[serde(default)]
    sample_queries: Vec<SampleQuery>,
}

/// Fetch the canned example queries from `GET /api/sample-queries/`.
///
/// Soft-fail endpoint: callers default to an empty list on error.
///
/// # Errors
///
/// Returns an error string on transport failure or a non-2xx response.
pub async fn fetch_sample_queries() -> Result<Vec<SampleQuery>, String> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("{API_BASE}/sample-queries/");
        let resp = gloo_net::http::Request::get(&url)
            .send()
            .await
            .map_err(|e| {
                let msg = e.to_string();
                log_soft_failure("sample queries", &msg);
                msg
            })?;
        if !resp.ok() {
            let msg = format!("sample queries request failed: {}", resp.status());
            log_soft_failure("sample queries", &msg);
            return Err(msg);
        }
        let body: SampleQueriesResponse = resp.json().await.map_err(|e| {
            let msg = e.to_string();
            log_soft_failure("sample queries", &msg);
            msg
        })?;
        Ok(body.sample_queries)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Generate and download an export of the current analysis via
/// `POST /api/export/`.
///
/// The request body is `{format, ...filters}`. The response is binary; its
/// filename comes from the `Content-Disposition` header when present, with
/// a format-dependent fallback, and the file is saved through a Blob object
/// URL.
///
/// Propagating endpoint: the caller must surface failures to the user.
///
/// # Errors
///
/// Returns an error string on transport failure, a non-2xx response, or a
/// failed client-side save.
pub async fn export_analysis(format: &str, filters: &Record) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let mut body = filters.clone();
        body.insert(
            "format".to_owned(),
            serde_json::Value::String(format.to_owned()),
        );

        let url = format!("{API_BASE}/export/");
        let resp = gloo_net::http::Request::post(&url)
            .json(&body)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| {
                let msg = e.to_string();
                log_propagated_error("export", &msg);
                msg
            })?;
        if !resp.ok() {
            let msg = export_failed_message(resp.status());
            log_propagated_error("export", &msg);
            return Err(msg);
        }

        let filename = resp
            .headers()
            .get("content-disposition")
            .and_then(|d| filename_from_disposition(&d))
            .unwrap_or_else(|| fallback_filename(format).to_owned());
        let content_type = resp
            .headers()
            .get("content-type")
            .unwrap_or_else(|| "application/octet-stream".to_owned());
        let bytes = resp.binary().await.map_err(|e| {
            let msg = e.to_string();
            log_propagated_error("export", &msg);
            msg
        })?;

        save_file(&bytes, &filename, &content_type)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (format, filters);
        Err("not available on server".to_owned())
    }
}

/// Trigger a browser download by wrapping the bytes in a Blob and clicking
/// a synthetic anchor pointing at its object URL.
#[cfg(feature = "hydrate")]
fn save_file(bytes: &[u8], filename: &str, content_type: &str) -> Result<(), String> {
    use wasm_bindgen::JsCast;

    let parts = js_sys::Array::new();
    parts.push(&js_sys::Uint8Array::from(bytes));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type(content_type);
    let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options)
        .map_err(|e| format!("{e:?}"))?;
    let url = web_sys::Url::create_object_url_with_blob(&blob).map_err(|e| format!("{e:?}"))?;

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| "no document available".to_owned())?;
    let anchor = document
        .create_element("a")
        .map_err(|e| format!("{e:?}"))?
        .dyn_into::<web_sys::HtmlAnchorElement>()
        .map_err(|_| "anchor element cast failed".to_owned())?;
    anchor.set_href(&url);
    anchor.set_download(filename);

    let body = document.body().ok_or_else(|| "no body available".to_owned())?;
    body.append_child(&anchor).map_err(|e| format!("{e:?}"))?;
    anchor.click();
    anchor.remove();
    let _ = web_sys::Url::revoke_object_url(&url);
    Ok(())
}
