//! HTTP client construction, request sampling, and dispatch.
mod client;
mod dispatcher;
mod request;
mod sampler;


pub use client::build_client;
pub use dispatcher::dispatch_requests;
pub use request::RequestSpec;
