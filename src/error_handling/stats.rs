//! Rule statistics tracking.
//!
//! This module counts how often each extraction rule changed a value during a
//! pipeline run, along with total and null rows.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use strum::IntoEnumIterator;

use crate::domain::{Extraction, Rule};

/// Thread-safe rule statistics tracker.
///
/// Uses atomic counters so a single instance can be shared across tasks via
/// `Arc`. Every [`Rule`] is present in the map from construction.
#[derive(Debug)]
pub struct RuleStats {
    rows: AtomicUsize,
    nulls: AtomicUsize,
    rules: HashMap<Rule, AtomicUsize>,
}

impl RuleStats {
    /// Creates a tracker with all counters at zero.
    pub fn new() -> Self {
        let mut rules = HashMap::new();
        for rule in Rule::iter() {
            rules.insert(rule, AtomicUsize::new(0));
        }

        RuleStats {
            rows: AtomicUsize::new(0),
            nulls: AtomicUsize::new(0),
            rules,
        }
    }

    /// Records one non-null value and the rules that fired for it.
    pub fn record(&self, extraction: &Extraction<'_>) {
        self.rows.fetch_add(1, Ordering::Relaxed);
        for rule in &extraction.applied {
            self.increment_rule(*rule);
        }
    }

    /// Records one null value.
    pub fn record_null(&self) {
        self.rows.fetch_add(1, Ordering::Relaxed);
        self.nulls.fetch_add(1, Ordering::Relaxed);
    }

    fn increment_rule(&self, rule: Rule) {
        if let Some(counter) = self.rules.get(&rule) {
            counter.fetch_add(1, Ordering::Relaxed);
        } else {
            log::error!(
                "Attempted to increment counter for {:?} which is not in the map. \
                 This indicates a bug in RuleStats initialization.",
                rule
            );
        }
    }

    /// Number of times `rule` changed a value.
    pub fn get_rule_count(&self, rule: Rule) -> usize {
        self.rules
            .get(&rule)
            .map(|c| c.load(Ordering::SeqCst))
            .unwrap_or(0)
    }

    /// Total rows seen, null included.
    pub fn total_rows(&self) -> usize {
        self.rows.load(Ordering::SeqCst)
    }

    /// Rows that were null.
    pub fn null_rows(&self) -> usize {
        self.nulls.load(Ordering::SeqCst)
    }

    /// Per-rule counts in application order.
    pub fn rule_counts(&self) -> Vec<(Rule, usize)> {
        Rule::iter().map(|r| (r, self.get_rule_count(r))).collect()
    }
}

impl Default for RuleStats {
    fn default() -> Self {
        Self::new()
    }
}
