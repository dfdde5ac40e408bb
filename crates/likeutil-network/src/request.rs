//! HTTP requests via [`ureq`], re-exported as is. The helpers cover the common JSON round trip.
//!
//! ```no_run
//! use likeutil_network::request;
//!
//! let status: serde_json::Value = request::get_json("https://example.com/status.json").unwrap();
//! let response = request::ureq::get("https://example.com/").call().unwrap();
//! ```

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, error};

pub use ureq;
pub use ureq::{Agent, delete, get, head, patch, post, put};

use crate::error::{Error, Result};

/// GET `url` and decode the response body as JSON.
pub fn get_json<T: DeserializeOwned>(url: &str) -> Result<T> {
    debug!("GET {url}");

    let mut response = ureq::get(url).call().map_err(|e| failed(url, e))?;
    response
        .body_mut()
        .read_json::<T>()
        .map_err(|e| failed(url, e))
}

/// POST `body` as JSON to `url` and decode the JSON response.
pub fn post_json<B: Serialize, T: DeserializeOwned>(url: &str, body: &B) -> Result<T> {
    debug!("POST {url}");

    let mut response = ureq::post(url)
        .content_type("application/json")
        .send_json(body)
        .map_err(|e| failed(url, e))?;
    response
        .body_mut()
        .read_json::<T>()
        .map_err(|e| failed(url, e))
}

fn failed(url: &str, e: ureq::Error) -> Error {
    error!("request to {url} failed: {e}");
    Error::RequestFailed(e.to_string())
}
