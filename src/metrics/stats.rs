use std::time::Duration;

use super::types::SampleSet;

/// Aggregate latency statistics over the successful samples of a run.
#[derive(Debug, Clone)]
pub struct RunStats {
    pub successful: u64,
    pub attempted: u64,
    pub total: Duration,
    pub mean: Duration,
    pub median: Duration,
    pub min: Duration,
    pub max: Duration,
    pub p90: Duration,
    pub p95: Duration,
    pub p99: Duration,
}

impl RunStats {
    /// Reported percentile ranks with their latencies.
    #[must_use]
    pub const fn percentiles(&self) -> [(u64, Duration); 3] {
        [(90, self.p90), (95, self.p95), (99, self.p99)]
    }
}

/// Reduces a sample set to aggregate statistics over its successful
/// durations. Returns `None` when no request succeeded; callers present
/// that as its own state instead of a numeric report.
#[must_use]
pub fn analyze(samples: &SampleSet) -> Option<RunStats> {
    let mut durations = samples.successful_durations();
    if durations.is_empty() {
        return None;
    }
    durations.sort_unstable();

    let count = durations.len();
    let total = durations
        .iter()
        .fold(Duration::ZERO, |acc, duration| acc.saturating_add(*duration));

    Some(RunStats {
        successful: u64::try_from(count).unwrap_or(u64::MAX),
        attempted: u64::try_from(samples.len()).unwrap_or(u64::MAX),
        total,
        mean: total.div_f64(count as f64),
        median: median_of_sorted(&durations),
        min: durations.first().copied().unwrap_or_default(),
        max: durations.last().copied().unwrap_or_default(),
        p90: percentile_of_sorted(&durations, 90),
        p95: percentile_of_sorted(&durations, 95),
        p99: percentile_of_sorted(&durations, 99),
    })
}

/// Nearest-rank percentile by truncation: the value at index
/// floor(count * rank / 100) of the ascending-sorted durations, clamped to
/// the last index. A single sample therefore answers every rank with that
/// one value.
pub(crate) fn percentile_of_sorted(sorted: &[Duration], rank: u64) -> Duration {
    let count = u64::try_from(sorted.len()).unwrap_or(u64::MAX);
    let index = count.saturating_mul(rank).checked_div(100).unwrap_or(0);
    let clamped = index.min(count.saturating_sub(1));
    let position = usize::try_from(clamped).unwrap_or(usize::MAX);
    sorted.get(position).copied().unwrap_or_default()
}

/// Median over ascending-sorted durations: the middle element for odd
/// counts, the mean of the two central elements for even counts. This is a
/// different estimator than `percentile_of_sorted` at rank 50, and the two
/// diverge for even counts.
pub(crate) fn median_of_sorted(sorted: &[Duration]) -> Duration {
    let count = sorted.len();
    let mid = count / 2;
    let upper = sorted.get(mid).copied().unwrap_or_default();
    if count % 2 == 0 {
        let lower = sorted.get(mid.saturating_sub(1)).copied().unwrap_or_default();
        lower.saturating_add(upper).div_f64(2.0)
    } else {
        upper
    }
}
