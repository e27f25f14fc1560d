use std::time::Duration;

use super::stats::{median_of_sorted, percentile_of_sorted};
use super::{Sample, SampleSet, analyze};
use crate::error::{AppError, AppResult};

fn secs(values: &[u64]) -> Vec<Duration> {
    values
        .iter()
        .map(|value| Duration::from_secs(*value))
        .collect()
}

fn success(index: u64, millis: u64) -> Sample {
    Sample::success(index, Duration::from_millis(millis), 200)
}

fn failure(index: u64) -> Sample {
    Sample::failure(
        index,
        Duration::from_millis(5),
        "connection refused".to_owned(),
    )
}

#[test]
fn nearest_rank_percentile_uses_truncation() -> AppResult<()> {
    let sorted = secs(&[1, 2, 3, 4, 5]);
    if percentile_of_sorted(&sorted, 90) != Duration::from_secs(5) {
        return Err(AppError::validation("p90 of five values must be the last"));
    }
    if percentile_of_sorted(&sorted, 50) != Duration::from_secs(3) {
        return Err(AppError::validation(
            "Rank 50 of five values must land on the third",
        ));
    }
    if percentile_of_sorted(&sorted, 99) != Duration::from_secs(5) {
        return Err(AppError::validation("p99 index must clamp to the last"));
    }
    Ok(())
}

#[test]
fn median_diverges_from_rank_50_for_even_counts() -> AppResult<()> {
    let sorted = secs(&[1, 2, 3, 4]);
    if median_of_sorted(&sorted) != Duration::from_millis(2500) {
        return Err(AppError::validation(
            "Even-count median must average the two central values",
        ));
    }
    if percentile_of_sorted(&sorted, 50) != Duration::from_secs(3) {
        return Err(AppError::validation(
            "Rank 50 must truncate to index two for four values",
        ));
    }
    Ok(())
}

#[test]
fn single_sample_collapses_all_statistics() -> AppResult<()> {
    let samples = SampleSet::from(vec![success(1, 250)]);
    let Some(stats) = analyze(&samples) else {
        return Err(AppError::validation("One success must produce stats"));
    };
    let value = Duration::from_millis(250);
    if stats.successful != 1 || stats.attempted != 1 {
        return Err(AppError::validation("Counts must both be one"));
    }
    for (name, field) in [
        ("total", stats.total),
        ("mean", stats.mean),
        ("median", stats.median),
        ("min", stats.min),
        ("max", stats.max),
        ("p90", stats.p90),
        ("p95", stats.p95),
        ("p99", stats.p99),
    ] {
        if field != value {
            return Err(AppError::validation(format!(
                "{} must equal the single sample, got {:?}",
                name, field
            )));
        }
    }
    Ok(())
}

#[test]
fn analyze_uses_only_successful_durations() -> AppResult<()> {
    let samples = SampleSet::from(vec![
        success(1, 100),
        failure(2),
        success(3, 200),
        failure(4),
        success(5, 300),
    ]);
    let Some(stats) = analyze(&samples) else {
        return Err(AppError::validation("Mixed outcomes must produce stats"));
    };
    if stats.successful != 3 {
        return Err(AppError::validation(format!(
            "Unexpected success count: {}",
            stats.successful
        )));
    }
    if stats.attempted != 5 {
        return Err(AppError::validation(format!(
            "Unexpected attempt count: {}",
            stats.attempted
        )));
    }
    if stats.total != Duration::from_millis(600) {
        return Err(AppError::validation(format!(
            "Unexpected total: {:?}",
            stats.total
        )));
    }
    if stats.mean != Duration::from_millis(200) || stats.median != Duration::from_millis(200) {
        return Err(AppError::validation("Mean and median must both be 200ms"));
    }
    if stats.min != Duration::from_millis(100) || stats.max != Duration::from_millis(300) {
        return Err(AppError::validation("Extremes must ignore failures"));
    }
    if stats.p90 != Duration::from_millis(300) {
        return Err(AppError::validation(
            "p90 of three values must be the largest",
        ));
    }
    Ok(())
}

#[test]
fn analyze_returns_none_without_successes() -> AppResult<()> {
    if analyze(&SampleSet::new()).is_some() {
        return Err(AppError::validation("Empty set must have no stats"));
    }
    let failures = SampleSet::from(vec![failure(1), failure(2), failure(3)]);
    if analyze(&failures).is_some() {
        return Err(AppError::validation("All-failure set must have no stats"));
    }
    if failures.len() != 3 {
        return Err(AppError::validation(
            "Failed attempts must still be counted",
        ));
    }
    Ok(())
}

#[test]
fn sample_set_restores_index_order() -> AppResult<()> {
    let mut samples = SampleSet::new();
    samples.push(success(3, 30));
    samples.push(success(1, 10));
    samples.push(failure(2));
    samples.sort_by_index();

    let indices: Vec<u64> = samples.iter().map(|sample| sample.index).collect();
    if indices != vec![1, 2, 3] {
        return Err(AppError::validation(format!(
            "Unexpected index order: {:?}",
            indices
        )));
    }
    Ok(())
}
