use std::io::IsTerminal;

use crossterm::style::{Color, Stylize};

use crate::metrics::{Outcome, RunStats, Sample, SampleSet};

pub(crate) const EMPTY_RESULT_MESSAGE: &str = "No successful requests to analyze.";

pub(crate) fn print_run_output(samples: &SampleSet, stats: Option<&RunStats>, no_color: bool) {
    let use_color = !no_color && std::io::stdout().is_terminal();

    for sample in samples.iter() {
        let line = request_line(sample);
        if !sample.is_success() && use_color {
            println!("{}", line.with(Color::Red));
        } else {
            println!("{line}");
        }
    }

    println!();
    match stats {
        Some(stats) => {
            for line in report_lines(stats) {
                println!("{line}");
            }
        }
        None => {
            if use_color {
                println!("{}", EMPTY_RESULT_MESSAGE.with(Color::Red));
            } else {
                println!("{EMPTY_RESULT_MESSAGE}");
            }
        }
    }
}

/// One line per attempt, rendered in request order.
fn request_line(sample: &Sample) -> String {
    match &sample.outcome {
        Outcome::Success { .. } => format!(
            "Request {}: {:.4} seconds",
            sample.index,
            sample.elapsed.as_secs_f64()
        ),
        Outcome::Failure { reason } => format!("Request {} failed: {}", sample.index, reason),
    }
}

/// The report block, all times in seconds with four decimal places.
fn report_lines(stats: &RunStats) -> Vec<String> {
    let mut lines = Vec::with_capacity(10);
    lines.push("--- Performance Report ---".to_owned());
    lines.push(format!("Total requests: {}", stats.successful));
    lines.push(format!(
        "Total time: {:.4} seconds",
        stats.total.as_secs_f64()
    ));
    lines.push(format!(
        "Average response time: {:.4} seconds",
        stats.mean.as_secs_f64()
    ));
    lines.push(format!(
        "Median response time: {:.4} seconds",
        stats.median.as_secs_f64()
    ));
    lines.push(format!(
        "Min response time: {:.4} seconds",
        stats.min.as_secs_f64()
    ));
    lines.push(format!(
        "Max response time: {:.4} seconds",
        stats.max.as_secs_f64()
    ));
    for (rank, value) in stats.percentiles() {
        lines.push(format!(
            "{}th percentile: {:.4} seconds",
            rank,
            value.as_secs_f64()
        ));
    }
    lines
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::error::{AppError, AppResult};

    #[test]
    fn success_line_formats_four_decimals() -> AppResult<()> {
        let sample = Sample::success(1, Duration::from_millis(1234), 200);
        let line = request_line(&sample);
        if line != "Request 1: 1.2340 seconds" {
            return Err(AppError::validation(format!("Unexpected line: {}", line)));
        }
        Ok(())
    }

    #[test]
    fn failure_line_names_the_reason() -> AppResult<()> {
        let sample = Sample::failure(
            7,
            Duration::from_millis(20),
            "HTTP status 503".to_owned(),
        );
        let line = request_line(&sample);
        if line != "Request 7 failed: HTTP status 503" {
            return Err(AppError::validation(format!("Unexpected line: {}", line)));
        }
        Ok(())
    }

    #[test]
    fn report_block_lists_fields_in_order() -> AppResult<()> {
        let stats = RunStats {
            successful: 3,
            attempted: 4,
            total: Duration::from_millis(600),
            mean: Duration::from_millis(200),
            median: Duration::from_millis(150),
            min: Duration::from_millis(100),
            max: Duration::from_millis(300),
            p90: Duration::from_millis(300),
            p95: Duration::from_millis(300),
            p99: Duration::from_millis(300),
        };
        let lines = report_lines(&stats);
        let expected = [
            "--- Performance Report ---",
            "Total requests: 3",
            "Total time: 0.6000 seconds",
            "Average response time: 0.2000 seconds",
            "Median response time: 0.1500 seconds",
            "Min response time: 0.1000 seconds",
            "Max response time: 0.3000 seconds",
            "90th percentile: 0.3000 seconds",
            "95th percentile: 0.3000 seconds",
            "99th percentile: 0.3000 seconds",
        ];
        if lines.len() != expected.len() {
            return Err(AppError::validation(format!(
                "Unexpected line count: {}",
                lines.len()
            )));
        }
        for (line, expected_line) in lines.iter().zip(expected.iter()) {
            if line != expected_line {
                return Err(AppError::validation(format!(
                    "Expected '{}', got '{}'",
                    expected_line, line
                )));
            }
        }
        Ok(())
    }
}
