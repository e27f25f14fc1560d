use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid JSON for headers: {source}")]
    InvalidHeadersJson {
        #[source]
        source: serde_json::Error,
    },
    #[error("Invalid JSON for payload: {source}")]
    InvalidPayloadJson {
        #[source]
        source: serde_json::Error,
    },
    #[error("HTTP method '{method}' not supported. Use GET or POST.")]
    UnsupportedMethod { method: String },
    #[cfg(test)]
    #[error("Test expectation failed: {message}")]
    TestExpectation { message: &'static str },
    #[cfg(test)]
    #[error("Test expectation failed: {message}: {value}")]
    TestExpectationValue {
        message: &'static str,
        value: String,
    },
}
