use futures_util::StreamExt;
use reqwest::Client;
use tokio::time::Instant;

use crate::metrics::Sample;

use super::request::RequestSpec;

/// Status codes at or above this are failures even though the transport
/// delivered a response (4xx and 5xx). Redirects count as success.
const CLIENT_ERROR_STATUS: u16 = 400;

/// Issues one request and measures its round trip. The timer starts right
/// before dispatch and stops once the response body has been drained, so
/// connection setup, TLS, and body transfer are inside the measured
/// interval while request construction and result handling stay outside
/// it. Must not log or print while the timer is running.
pub(crate) async fn sample_request(client: &Client, spec: &RequestSpec, index: u64) -> Sample {
    let request = spec.to_request(client);

    let start = Instant::now();
    match request.send().await {
        Ok(response) => {
            let status = response.status().as_u16();
            let drained = drain_response_body(response).await;
            let elapsed = start.elapsed();
            match drained {
                Ok(()) if status < CLIENT_ERROR_STATUS => Sample::success(index, elapsed, status),
                Ok(()) => Sample::failure(index, elapsed, format!("HTTP status {status}")),
                Err(err) => Sample::failure(index, elapsed, describe_error(&err)),
            }
        }
        Err(err) => Sample::failure(index, start.elapsed(), describe_error(&err)),
    }
}

async fn drain_response_body(response: reqwest::Response) -> Result<(), reqwest::Error> {
    let mut stream = response.bytes_stream();
    while let Some(chunk) = stream.next().await {
        chunk?;
    }
    Ok(())
}

fn describe_error(err: &reqwest::Error) -> String {
    if err.is_timeout() {
        return "request timed out".to_owned();
    }
    let mut message = err.to_string();
    let mut source = std::error::Error::source(err);
    while let Some(cause) = source {
        message = format!("{message}: {cause}");
        source = cause.source();
    }
    message
}
