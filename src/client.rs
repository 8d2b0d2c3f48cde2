//! HTTP client for the Krystal Cloud API
//!
//! Every API operation is a single GET against `base_url + path` with an
//! optional query string. Two client variants exist: a public one for
//! endpoints that need no credential, and an authenticated one that
//! snapshots the stored API key at construction and sends it in the
//! `KC-APIKey` header. No retries, no redirect policy beyond reqwest's
//! defaults.

use crate::config::ConfigStore;
use crate::error::{Error, Result};
use secrecy::{ExposeSecret, SecretString};
use serde_json::Value;
use std::time::Duration;
use url::form_urlencoded;

const API_KEY_HEADER: &str = "KC-APIKey";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Query parameters with the CLI's omission rules baked in.
///
/// Absent optionals and `false` flags are never serialized; a `true` flag
/// serializes as `key=true`. Each pushed key appears exactly once in the
/// resulting query string.
#[derive(Debug, Clone, Default)]
pub struct Params {
    pairs: Vec<(&'static str, String)>,
}

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a parameter when the value is present.
    pub fn opt(mut self, key: &'static str, value: Option<impl ToString>) -> Self {
        if let Some(value) = value {
            self.pairs.push((key, value.to_string()));
        }
        self
    }

    /// Add a presence flag: serialized as `key=true` when set, omitted
    /// entirely when not.
    pub fn flag(mut self, key: &'static str, present: bool) -> Self {
        if present {
            self.pairs.push((key, "true".to_string()));
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Percent-encoded query string, without the leading `?`.
    pub fn to_query_string(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.pairs.iter().map(|(k, v)| (*k, v.as_str())))
            .finish()
    }
}

enum Credential {
    /// Endpoint requires no authentication.
    Public,
    /// Key snapshotted from the config store at construction.
    ApiKey(SecretString),
    /// Authenticated client built with no stored key. Construction still
    /// succeeds; the missing key surfaces on the first call.
    Missing,
}

/// Client for issuing GET requests against the configured base URL.
pub struct RequestClient {
    http: reqwest::Client,
    base_url: String,
    credential: Credential,
}

impl RequestClient {
    /// Client for public endpoints; attaches no credential.
    pub fn public(store: &ConfigStore) -> Result<Self> {
        Self::build(store, Credential::Public)
    }

    /// Client for authenticated endpoints. Reads the stored API key once,
    /// here; configuration access does not happen again per call.
    pub fn authenticated(store: &ConfigStore) -> Result<Self> {
        let credential = match store.api_key()? {
            Some(key) => Credential::ApiKey(key),
            None => Credential::Missing,
        };
        Self::build(store, credential)
    }

    fn build(store: &ConfigStore, credential: Credential) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            http,
            base_url: store.base_url()?,
            credential,
        })
    }

    /// Issue a single GET request and return the parsed response body.
    ///
    /// Non-2xx statuses become [`Error::Http`] carrying the status code and
    /// the body's `message`/`error` field when one is parseable; transport
    /// failures become [`Error::Transport`] with no status code.
    pub async fn get(&self, path: &str, params: Option<&Params>) -> Result<Value> {
        let url = build_url(&self.base_url, path, params);

        let mut request = self.http.get(&url);
        match &self.credential {
            Credential::Public => {}
            Credential::ApiKey(key) => {
                request = request.header(API_KEY_HEADER, key.expose_secret());
            }
            Credential::Missing => {
                return Err(Error::Auth(
                    "no API key configured, run `krystal login <api-key>` first".to_string(),
                ));
            }
        }

        tracing::debug!(url = %url, "GET");
        let response = request.send().await?;
        let status = response.status();
        tracing::debug!(status = status.as_u16(), "response received");

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Http {
                status: status.as_u16(),
                message: error_message(status.as_u16(), &body),
            });
        }

        Ok(response.json().await?)
    }
}

fn build_url(base_url: &str, path: &str, params: Option<&Params>) -> String {
    let mut url = format!("{}{}", base_url, path);
    if let Some(params) = params {
        if !params.is_empty() {
            url.push('?');
            url.push_str(&params.to_query_string());
        }
    }
    url
}

/// Best-effort extraction of an error message from a response body. Falls
/// back to a generic `HTTP <status>` when the body carries nothing usable.
fn error_message(status: u16, body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|value| {
            value
                .get("message")
                .or_else(|| value.get("error"))
                .and_then(Value::as_str)
                .map(str::to_string)
        })
        .unwrap_or_else(|| format!("HTTP {}", status))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn params_omit_absent_values() {
        let params = Params::new()
            .opt("chainId", Some("1"))
            .opt("limit", None::<String>)
            .flag("withIncentives", true);
        let query = params.to_query_string();
        assert!(query.contains("chainId=1"));
        assert!(query.contains("withIncentives=true"));
        assert!(!query.contains("limit"));
    }

    #[test]
    fn params_omit_unset_flags() {
        let params = Params::new().flag("includeDustToken", false);
        assert!(params.is_empty());
        assert_eq!(params.to_query_string(), "");
    }

    #[test]
    fn params_serialize_each_key_once() {
        let params = Params::new()
            .opt("wallet", Some("0xabc"))
            .opt("limit", Some(10u32));
        assert_eq!(params.to_query_string().matches("wallet=").count(), 1);
        assert_eq!(params.to_query_string(), "wallet=0xabc&limit=10");
    }

    #[test]
    fn params_percent_encode_values() {
        let params = Params::new().opt("sortBy", Some("tvl desc"));
        assert_eq!(params.to_query_string(), "sortBy=tvl+desc");
    }

    #[test]
    fn url_without_params_has_no_query() {
        let url = build_url("https://api.example.com", "/v1/chains", None);
        assert_eq!(url, "https://api.example.com/v1/chains");
        assert!(!url.contains('?'));
    }

    #[test]
    fn url_with_empty_params_has_no_query() {
        let params = Params::new().opt("limit", None::<String>).flag("desc", false);
        let url = build_url("https://api.example.com", "/v1/pools", Some(&params));
        assert_eq!(url, "https://api.example.com/v1/pools");
    }

    #[test]
    fn url_appends_query_string() {
        let params = Params::new()
            .opt("chainId", Some("1"))
            .flag("withIncentives", true);
        let url = build_url("https://api.example.com", "/v1/pools", Some(&params));
        assert_eq!(
            url,
            "https://api.example.com/v1/pools?chainId=1&withIncentives=true"
        );
    }

    #[test]
    fn error_message_prefers_body_message() {
        assert_eq!(
            error_message(500, r#"{"message":"internal error"}"#),
            "internal error"
        );
        assert_eq!(
            error_message(401, r#"{"error":"invalid api key"}"#),
            "invalid api key"
        );
    }

    #[test]
    fn error_message_falls_back_to_status() {
        assert_eq!(error_message(502, "<html>bad gateway</html>"), "HTTP 502");
        assert_eq!(error_message(404, ""), "HTTP 404");
        assert_eq!(error_message(500, r#"{"detail":"nope"}"#), "HTTP 500");
    }
}
