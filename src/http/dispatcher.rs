use std::sync::{
    Arc,
    atomic::{AtomicU64, Ordering},
};

use reqwest::Client;
use tokio::sync::mpsc;

use crate::args::PositiveUsize;
use crate::error::AppResult;
use crate::metrics::{Sample, SampleSet};
use crate::shutdown::ShutdownSender;

use super::request::RequestSpec;
use super::sampler::sample_request;

/// Completed samples waiting for the collector loop.
const SAMPLE_CHANNEL_CAPACITY: usize = 1024;

/// Runs `attempts` sampler invocations with up to `concurrency` requests in
/// flight. Workers claim request indices 1..=attempts from a shared counter,
/// so every attempt is sampled exactly once and the sample channel is the
/// only point where results accumulate. On shutdown workers stop claiming
/// indices and abandon their in-flight request; samples collected up to that
/// point are kept. The returned set is sorted by request index.
///
/// # Errors
///
/// Returns an error when a worker task cannot be joined.
pub async fn dispatch_requests(
    client: &Client,
    spec: &Arc<RequestSpec>,
    attempts: u64,
    concurrency: PositiveUsize,
    shutdown_tx: &ShutdownSender,
) -> AppResult<SampleSet> {
    let (sample_tx, mut sample_rx) = mpsc::channel::<Sample>(SAMPLE_CHANNEL_CAPACITY);
    let next_index = Arc::new(AtomicU64::new(1));
    let workers = worker_count(attempts, concurrency);

    let mut worker_handles = Vec::with_capacity(workers);
    for _ in 0..workers {
        let client = client.clone();
        let spec = Arc::clone(spec);
        let sample_tx = sample_tx.clone();
        let next_index = Arc::clone(&next_index);
        let mut shutdown_rx = shutdown_tx.subscribe();

        worker_handles.push(tokio::spawn(async move {
            loop {
                let index = next_index.fetch_add(1, Ordering::Relaxed);
                if index > attempts {
                    break;
                }
                let sample = tokio::select! {
                    _ = shutdown_rx.recv() => break,
                    sample = sample_request(&client, &spec, index) => sample,
                };
                if sample_tx.send(sample).await.is_err() {
                    break;
                }
            }
        }));
    }
    drop(sample_tx);

    let mut samples = SampleSet::new();
    while let Some(sample) = sample_rx.recv().await {
        samples.push(sample);
    }
    for handle in worker_handles {
        handle.await?;
    }

    samples.sort_by_index();
    Ok(samples)
}

fn worker_count(attempts: u64, concurrency: PositiveUsize) -> usize {
    usize::try_from(attempts)
        .unwrap_or(usize::MAX)
        .min(concurrency.get())
}
