//! Progress and summary logging.

use std::time::Instant;

use log::info;

use crate::error_handling::RuleStats;

/// Logs throughput so far.
///
/// # Arguments
///
/// * `start_time` - When the run started
/// * `rows` - Rows processed so far
pub fn log_progress(start_time: Instant, rows: usize) {
    let elapsed_secs = start_time.elapsed().as_secs_f64();
    let rate = if elapsed_secs > 0.0 {
        rows as f64 / elapsed_secs
    } else {
        0.0
    };
    info!(
        "Processed {} rows in {:.2} seconds (~{:.0} rows/sec)",
        rows, elapsed_secs, rate
    );
}

/// Logs how often each rule changed a value.
pub fn log_rule_statistics(stats: &RuleStats) {
    info!(
        "Rows: {} total, {} null",
        stats.total_rows(),
        stats.null_rows()
    );
    for (rule, count) in stats.rule_counts() {
        if count > 0 {
            info!("   {}: {}", rule, count);
        }
    }
}
