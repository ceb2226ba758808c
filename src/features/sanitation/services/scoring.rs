//! Cleanliness and risk scoring for a group of reports.

use chrono::{DateTime, Duration, Utc};

use crate::features::sanitation::models::{IssueReport, IssueSeverity, Trend};

/// Penalty weight per severity level
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeverityWeights {
    pub low: f64,
    pub medium: f64,
    pub high: f64,
}

impl SeverityWeights {
    pub const DEFAULT: SeverityWeights = SeverityWeights {
        low: 10.0,
        medium: 20.0,
        high: 30.0,
    };

    pub fn weight(&self, severity: IssueSeverity) -> f64 {
        match severity {
            IssueSeverity::Low => self.low,
            IssueSeverity::Medium => self.medium,
            IssueSeverity::High => self.high,
        }
    }
}

/// Constants of the scoring model
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringPolicy {
    pub weights: SeverityWeights,
    /// Reports at most this old count as recent
    pub recent_window_days: i64,
    /// Risk added per recent report
    pub risk_per_recent: f64,
    /// Cleanliness lost per point of average severity
    pub severity_multiplier: f64,
    /// Cleanliness at or above this is improving
    pub improving_threshold: f64,
    /// Cleanliness at or above this (and below improving) is stable
    pub stable_threshold: f64,
}

impl ScoringPolicy {
    pub const DEFAULT: ScoringPolicy = ScoringPolicy {
        weights: SeverityWeights::DEFAULT,
        recent_window_days: 7,
        risk_per_recent: 15.0,
        severity_multiplier: 2.0,
        improving_threshold: 75.0,
        stable_threshold: 60.0,
    };
}

impl Default for ScoringPolicy {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Scores of one area, before rounding
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PartitionScore {
    pub cleanliness: f64,
    pub risk: f64,
    pub trend: Trend,
}

impl PartitionScore {
    /// Cleanliness rounded half away from zero
    pub fn cleanliness_rounded(&self) -> i64 {
        self.cleanliness.round() as i64
    }

    /// Risk rounded half away from zero
    pub fn risk_rounded(&self) -> i64 {
        self.risk.round() as i64
    }
}

/// Score the reports of one area as of `now`.
pub fn score_partition(
    reports: &[&IssueReport],
    now: DateTime<Utc>,
    policy: &ScoringPolicy,
) -> PartitionScore {
    let count = reports.len();

    let avg_severity = if count == 0 {
        0.0
    } else {
        let total: f64 = reports
            .iter()
            .map(|r| policy.weights.weight(r.severity))
            .sum();
        total / count as f64
    };

    let cleanliness = (100.0 - avg_severity * policy.severity_multiplier).clamp(0.0, 100.0);

    let window = Duration::days(policy.recent_window_days);
    let recent = reports
        .iter()
        .filter(|r| now.signed_duration_since(r.timestamp) <= window)
        .count();
    let risk = (recent as f64 * policy.risk_per_recent).clamp(0.0, 100.0);

    PartitionScore {
        cleanliness,
        risk,
        trend: trend_for(cleanliness, policy),
    }
}

fn trend_for(cleanliness: f64, policy: &ScoringPolicy) -> Trend {
    if cleanliness >= policy.improving_threshold {
        Trend::Improving
    } else if cleanliness >= policy.stable_threshold {
        Trend::Stable
    } else {
        Trend::Declining
    }
}
