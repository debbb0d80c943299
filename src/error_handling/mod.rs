//! Error handling and run statistics.
//!
//! This module provides:
//! - Error type definitions for logger setup, SQLite access and input parsing
//! - Rule statistics tracking (which extraction rules fired, null rows)

mod stats;
mod types;

// Re-export public API
pub use stats::RuleStats;
pub use types::{DatabaseError, InitializationError, InputError};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{trace_domain, Rule};
    use strum::IntoEnumIterator;

    #[test]
    fn test_rule_stats_initialization() {
        let stats = RuleStats::new();
        for rule in Rule::iter() {
            assert_eq!(stats.get_rule_count(rule), 0);
        }
        assert_eq!(stats.total_rows(), 0);
        assert_eq!(stats.null_rows(), 0);
    }

    #[test]
    fn test_rule_stats_record() {
        let stats = RuleStats::new();
        stats.record(&trace_domain("https://www.dagster.io/blog"));
        stats.record(&trace_domain("dagster.io?ref=foo"));
        stats.record(&trace_domain("dagster.io"));

        assert_eq!(stats.total_rows(), 3);
        assert_eq!(stats.get_rule_count(Rule::Scheme), 1);
        assert_eq!(stats.get_rule_count(Rule::Www), 1);
        assert_eq!(stats.get_rule_count(Rule::Path), 1);
        assert_eq!(stats.get_rule_count(Rule::Query), 1);
    }

    #[test]
    fn test_rule_stats_nulls_count_as_rows() {
        let stats = RuleStats::new();
        stats.record_null();
        stats.record(&trace_domain("https://dagster.io"));

        assert_eq!(stats.total_rows(), 2);
        assert_eq!(stats.null_rows(), 1);
    }

    #[test]
    fn test_rule_counts_in_rule_order() {
        let stats = RuleStats::new();
        stats.record(&trace_domain("http://example.com/x"));
        let counts = stats.rule_counts();
        assert_eq!(
            counts,
            vec![
                (Rule::Scheme, 1),
                (Rule::Www, 0),
                (Rule::Path, 1),
                (Rule::Query, 0)
            ]
        );
    }

    #[test]
    fn test_rule_stats_shared_across_threads() {
        use std::sync::Arc;

        let stats = Arc::new(RuleStats::new());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let stats = Arc::clone(&stats);
                std::thread::spawn(move || {
                    for _ in 0..25 {
                        stats.record(&trace_domain("https://www.example.com"));
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().expect("worker thread panicked");
        }

        assert_eq!(stats.total_rows(), 100);
        assert_eq!(stats.get_rule_count(Rule::Www), 100);
    }
}
