use std::sync::Arc;

use crate::args::ProbeArgs;
use crate::error::AppResult;
use crate::http::{RequestSpec, build_client, dispatch_requests};
use crate::metrics::analyze;
use crate::shutdown_handlers::{setup_signal_shutdown_handler, shutdown_channel};

use super::summary::print_run_output;

pub(crate) async fn run_probe(args: &ProbeArgs) -> AppResult<()> {
    let spec = match RequestSpec::from_args(args) {
        Ok(spec) => Arc::new(spec),
        Err(err) => {
            tracing::error!("{}", err);
            return Err(err);
        }
    };
    let client = build_client(args)?;

    crate::banner::print_cli_banner(args.no_color);
    println!("Starting {} requests to {}\n", args.requests, spec.url);

    let (shutdown_tx, _shutdown_rx) = shutdown_channel();
    let signal_handle = setup_signal_shutdown_handler(&shutdown_tx);

    let samples =
        dispatch_requests(&client, &spec, args.requests, args.concurrency, &shutdown_tx).await?;

    let attempted = usize::try_from(args.requests).unwrap_or(usize::MAX);
    if samples.len() < attempted {
        tracing::warn!(
            "Run interrupted; reporting {} of {} attempts.",
            samples.len(),
            args.requests
        );
    }

    let stats = analyze(&samples);
    print_run_output(&samples, stats.as_ref(), args.no_color);

    drop(shutdown_tx.send(()));
    drop(signal_handle.await);
    Ok(())
}
