//! Before/after KPIs for a finished flight table
//!
//! # Metrics
//!
//! - Mean delay before and after optimization (minutes)
//! - Delayed-before count (baseline trial flag), delayed-after count
//!   (`delay_after_min > 0`), improved count
//! - Improvement percentage: `(avg_before - avg_after) / avg_before * 100`,
//!   or 0 when there was no delay to improve
//! - Cost savings: flights pulled from above 240 minutes to at most 240
//!   minutes, at 24,000 per plane
//! - Feedback category from an ordered rule table

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::Flight;

/// Delay (minutes) above which a flight counts as a costly disruption
pub const SAVINGS_THRESHOLD_MIN: u32 = 240;

/// Estimated cost of one disrupted plane
pub const COST_PER_PLANE: u64 = 24_000;

// ============================================================================
// Feedback
// ============================================================================

/// Categorical verdict on a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Feedback {
    SevereCongestionMitigated,
    ModerateImprovement,
    HighDelaysPersist,
    SystemStabilized,
    SomeReduction,
    LowDelayOptimal,
}

impl Feedback {
    pub fn message(self) -> &'static str {
        match self {
            Feedback::SevereCongestionMitigated => "severe congestion mitigated",
            Feedback::ModerateImprovement => "moderate improvement, challenges remain",
            Feedback::HighDelaysPersist => "high delays persist",
            Feedback::SystemStabilized => "system stabilized",
            Feedback::SomeReduction => "some reduction, monitor",
            Feedback::LowDelayOptimal => "low delay scenario, optimal",
        }
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// One row of the feedback table: `(avg_before, improvement_pct) -> bool`
#[derive(Debug, Clone, Copy)]
pub struct FeedbackRule {
    pub predicate: fn(f64, f64) -> bool,
    pub feedback: Feedback,
}

/// Evaluated top to bottom, first match wins. The last row always matches.
pub const FEEDBACK_RULES: &[FeedbackRule] = &[
    FeedbackRule {
        predicate: |before, pct| before > 15.0 && pct >= 50.0,
        feedback: Feedback::SevereCongestionMitigated,
    },
    FeedbackRule {
        predicate: |before, pct| before > 15.0 && pct > 20.0,
        feedback: Feedback::ModerateImprovement,
    },
    FeedbackRule {
        predicate: |before, _| before > 15.0,
        feedback: Feedback::HighDelaysPersist,
    },
    FeedbackRule {
        predicate: |before, pct| before > 5.0 && pct >= 50.0,
        feedback: Feedback::SystemStabilized,
    },
    FeedbackRule {
        predicate: |before, _| before > 5.0,
        feedback: Feedback::SomeReduction,
    },
    FeedbackRule {
        predicate: |_, _| true,
        feedback: Feedback::LowDelayOptimal,
    },
];

/// Classify a run by its mean pre-optimization delay and improvement
///
/// # Example
/// ```
/// use runway_simulator_core_rs::summary::{classify, Feedback};
///
/// assert_eq!(classify(15.0, 60.0), Feedback::SystemStabilized);
/// assert_eq!(classify(15.1, 60.0), Feedback::SevereCongestionMitigated);
/// ```
pub fn classify(avg_delay_before: f64, improvement_pct: f64) -> Feedback {
    FEEDBACK_RULES
        .iter()
        .find(|rule| (rule.predicate)(avg_delay_before, improvement_pct))
        .map(|rule| rule.feedback)
        .unwrap_or(Feedback::LowDelayOptimal)
}

// ============================================================================
// Summary
// ============================================================================

/// Aggregate KPIs for one run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub avg_delay_before: f64,
    pub avg_delay_after: f64,
    pub delayed_before_count: usize,
    pub delayed_after_count: usize,
    pub improved_count: usize,
    pub improvement_pct: f64,
    /// Flights pulled from above to at most SAVINGS_THRESHOLD_MIN
    pub savings_count: usize,
    pub estimated_savings: u64,
    pub feedback: Feedback,
    /// `feedback.message()`, kept for consumers that only read JSON
    pub feedback_message: String,
}

/// Derives a [`Summary`] from a finished flight table
pub struct SummaryCalculator;

impl SummaryCalculator {
    pub fn summarize(flights: &[Flight]) -> Summary {
        let avg_delay_before = mean(flights.iter().map(|f| f.delay_before_min()));
        let avg_delay_after = mean(flights.iter().map(|f| f.delay_after_min()));

        let improvement_pct = improvement_pct(avg_delay_before, avg_delay_after);

        let savings_count = flights
            .iter()
            .filter(|f| {
                f.delay_before_min() > SAVINGS_THRESHOLD_MIN
                    && f.delay_after_min() <= SAVINGS_THRESHOLD_MIN
            })
            .count();

        let feedback = classify(avg_delay_before, improvement_pct);

        Summary {
            avg_delay_before,
            avg_delay_after,
            delayed_before_count: flights.iter().filter(|f| f.delayed_before()).count(),
            delayed_after_count: flights.iter().filter(|f| f.delayed_after()).count(),
            improved_count: flights.iter().filter(|f| f.improved()).count(),
            improvement_pct,
            savings_count,
            estimated_savings: savings_count as u64 * COST_PER_PLANE,
            feedback,
            feedback_message: feedback.message().to_string(),
        }
    }
}

/// Relative drop in mean delay, in percent; 0 when `avg_before` is 0
pub fn improvement_pct(avg_before: f64, avg_after: f64) -> f64 {
    if avg_before > 0.0 {
        (avg_before - avg_after) / avg_before * 100.0
    } else {
        0.0
    }
}

fn mean(values: impl Iterator<Item = u32>) -> f64 {
    let (sum, count) = values.fold((0u64, 0usize), |(sum, count), v| (sum + v as u64, count + 1));
    if count == 0 {
        0.0
    } else {
        sum as f64 / count as f64
    }
}
