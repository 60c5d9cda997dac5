//! Boundaries to the external collaborators: player lookup, deck analysis,
//! and global rankings.
//!
//! ## Overview
//!
//! None of these perform I/O. Each service builds an `ApiRequest` for the
//! caller to send with whatever HTTP client it uses, then turns the
//! `(status, body)` it gets back into typed data or an `Error`.
//!
//! ```
//! use lonorix::config::AppConfig;
//! use lonorix::services::player::{PlayerLookup, PlayerService};
//!
//! let config = AppConfig::default().with_clash_api_key("secret");
//! let service = PlayerService::from_config(&config);
//!
//! match service.lookup("2PP").unwrap() {
//!     PlayerLookup::Fetch(request) => {
//!         assert!(request.url.ends_with("/players/%232PP"));
//!     }
//!     PlayerLookup::Sample(_) => unreachable!(),
//! }
//! ```

pub mod coach;
pub mod player;
pub mod rankings;

use serde::{Deserialize, Serialize};

/// HTTP method of an outgoing request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Method {
    Get,
    Post,
}

/// A fully described outgoing HTTP request.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<serde_json::Value>,
}

impl ApiRequest {
    /// A GET request authorized with a bearer token.
    #[must_use]
    pub fn get(url: impl Into<String>, api_key: &str) -> Self {
        Self {
            method: Method::Get,
            url: url.into(),
            headers: bearer_headers(api_key),
            body: None,
        }
    }

    /// A POST request with a JSON body, authorized with a bearer token.
    #[must_use]
    pub fn post_json(url: impl Into<String>, api_key: &str, body: serde_json::Value) -> Self {
        Self {
            method: Method::Post,
            url: url.into(),
            headers: bearer_headers(api_key),
            body: Some(body),
        }
    }

    /// Look up a header value (case-insensitive name).
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

fn bearer_headers(api_key: &str) -> Vec<(String, String)> {
    vec![
        ("Authorization".to_string(), format!("Bearer {api_key}")),
        ("Content-Type".to_string(), "application/json".to_string()),
        ("Accept".to_string(), "application/json".to_string()),
    ]
}

/// 2xx check.
#[must_use]
pub fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Percent-encode a URL path component.
///
/// Leaves the same characters unescaped as JavaScript's
/// `encodeURIComponent`.
#[must_use]
pub fn encode_component(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for byte in input.bytes() {
        match byte {
            b'A'..=b'Z'
            | b'a'..=b'z'
            | b'0'..=b'9'
            | b'-'
            | b'_'
            | b'.'
            | b'!'
            | b'~'
            | b'*'
            | b'\''
            | b'('
            | b')' => out.push(byte as char),
            _ => out.push_str(&format!("%{byte:02X}")),
        }
    }
    out
}
