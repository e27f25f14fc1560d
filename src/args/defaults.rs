pub(crate) const DEFAULT_USER_AGENT: &str = concat!("apiperf/", env!("CARGO_PKG_VERSION"));
