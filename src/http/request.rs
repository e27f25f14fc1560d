use std::collections::BTreeMap;

use reqwest::{Client, RequestBuilder};
use tracing::warn;

use crate::args::{HttpMethod, ProbeArgs};
use crate::error::{AppError, AppResult, ConfigError};

/// Immutable description of the HTTP call repeated across a run.
#[derive(Debug, Clone)]
pub struct RequestSpec {
    pub url: String,
    pub method: HttpMethod,
    pub headers: BTreeMap<String, String>,
    pub payload: Option<serde_json::Value>,
}

impl RequestSpec {
    /// Builds the request description from CLI arguments, parsing the
    /// headers and payload JSON up front so malformed input is rejected
    /// before any traffic is sent.
    ///
    /// # Errors
    ///
    /// Returns a configuration error when `--headers` is not a JSON object
    /// with string values or `--payload` is not valid JSON.
    pub fn from_args(args: &ProbeArgs) -> AppResult<Self> {
        let headers = match args.headers.as_deref() {
            Some(raw) => serde_json::from_str::<BTreeMap<String, String>>(raw)
                .map_err(|err| AppError::config(ConfigError::InvalidHeadersJson { source: err }))?,
            None => BTreeMap::new(),
        };

        let payload = args
            .payload
            .as_deref()
            .map(serde_json::from_str::<serde_json::Value>)
            .transpose()
            .map_err(|err| AppError::config(ConfigError::InvalidPayloadJson { source: err }))?;

        if payload.is_some() && args.methods == HttpMethod::Get {
            warn!("--payload is ignored for GET requests.");
        }

        Ok(Self {
            url: args.url.clone(),
            method: args.methods,
            headers,
            payload,
        })
    }

    /// Builds one attempt's request. Construction happens outside the
    /// sampler's measured interval; invalid URLs or header names surface
    /// when the request is sent and become per-attempt failures.
    #[must_use]
    pub fn to_request(&self, client: &Client) -> RequestBuilder {
        let mut builder = match self.method {
            HttpMethod::Get => client.get(&self.url),
            HttpMethod::Post => client.post(&self.url),
        };
        for (name, value) in &self.headers {
            builder = builder.header(name, value);
        }
        if self.method == HttpMethod::Post
            && let Some(payload) = self.payload.as_ref()
        {
            builder = builder.json(payload);
        }
        builder
    }
}
