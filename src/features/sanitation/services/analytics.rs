use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

use super::area::extract_area;
use super::scoring::{score_partition, ScoringPolicy};
use crate::features::sanitation::models::{AreaAnalytics, IssueReport, Trend};

/// Rows served while no report has been submitted yet
pub const SAMPLE_ANALYTICS: &[(&str, i64, i64, usize, Trend)] = &[
    ("Area A", 75, 35, 12, Trend::Improving),
    ("Area B", 60, 55, 28, Trend::Declining),
    ("Area C", 85, 20, 5, Trend::Stable),
    ("Area D", 70, 40, 15, Trend::Improving),
    ("Area E", 55, 65, 35, Trend::Declining),
];

/// Per-area analytics, sorted by area key.
///
/// An empty input yields [`SAMPLE_ANALYTICS`] so the dashboard has
/// something to show on a fresh install.
pub fn aggregate(
    reports: &[IssueReport],
    now: DateTime<Utc>,
    policy: &ScoringPolicy,
) -> Vec<AreaAnalytics> {
    if reports.is_empty() {
        return sample_analytics();
    }

    let mut areas: BTreeMap<String, Vec<&IssueReport>> = BTreeMap::new();
    for report in reports {
        areas
            .entry(extract_area(&report.location))
            .or_default()
            .push(report);
    }

    areas
        .into_iter()
        .map(|(area, partition)| {
            let score = score_partition(&partition, now, policy);
            AreaAnalytics {
                area,
                cleanliness_score: score.cleanliness_rounded(),
                risk_probability: score.risk_rounded(),
                complaint_count: partition.len(),
                trend: score.trend,
            }
        })
        .collect()
}

fn sample_analytics() -> Vec<AreaAnalytics> {
    SAMPLE_ANALYTICS
        .iter()
        .map(|&(area, cleanliness, risk, complaints, trend)| AreaAnalytics {
            area: area.to_string(),
            cleanliness_score: cleanliness,
            risk_probability: risk,
            complaint_count: complaints,
            trend,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::sanitation::models::{IssueSeverity, ReportStatus};
    use chrono::Duration;
    use uuid::Uuid;

    fn report(location: &str, severity: IssueSeverity, timestamp: DateTime<Utc>) -> IssueReport {
        IssueReport {
            id: Uuid::new_v4(),
            location: location.to_string(),
            issue_type: "Litter".to_string(),
            description: "Trash on the sidewalk".to_string(),
            severity,
            status: ReportStatus::Pending,
            timestamp,
            resolved_at: None,
        }
    }

    #[test]
    fn test_empty_input_returns_sample_rows() {
        let rows = aggregate(&[], Utc::now(), &ScoringPolicy::DEFAULT);

        assert_eq!(rows.len(), 5);
        assert_eq!(rows[0].area, "Area A");
        assert_eq!(rows[0].cleanliness_score, 75);
        assert_eq!(rows[1].complaint_count, 28);
        assert_eq!(rows[2].trend, Trend::Stable);
        assert_eq!(rows[4].risk_probability, 65);
    }

    #[test]
    fn test_partitions_by_area_and_sorts() {
        let now = Utc::now();
        let reports = [
            report("near area c, street 4", IssueSeverity::High, now),
            report("Area A, Street 1", IssueSeverity::Low, now),
            report("Main Road", IssueSeverity::Medium, now),
            report("AREA a market", IssueSeverity::Medium, now - Duration::days(10)),
        ];

        let rows = aggregate(&reports, now, &ScoringPolicy::DEFAULT);

        let areas: Vec<&str> = rows.iter().map(|r| r.area.as_str()).collect();
        assert_eq!(areas, ["Area A", "Area C", "Other"]);

        let area_a = &rows[0];
        assert_eq!(area_a.complaint_count, 2);
        // avg 15 -> 70, one recent report
        assert_eq!(area_a.cleanliness_score, 70);
        assert_eq!(area_a.risk_probability, 15);
        assert_eq!(area_a.trend, Trend::Stable);

        let area_c = &rows[1];
        assert_eq!(area_c.cleanliness_score, 40);
        assert_eq!(area_c.trend, Trend::Declining);
    }

    #[test]
    fn test_scores_always_within_bounds() {
        let now = Utc::now();
        let reports: Vec<_> = (0..40)
            .map(|i| {
                let severity = match i % 3 {
                    0 => IssueSeverity::Low,
                    1 => IssueSeverity::Medium,
                    _ => IssueSeverity::High,
                };
                let letter = (b'A' + (i % 4) as u8) as char;
                report(
                    &format!("Area {}, block {}", letter, i),
                    severity,
                    now - Duration::days(i as i64 % 12),
                )
            })
            .collect();

        for row in aggregate(&reports, now, &ScoringPolicy::DEFAULT) {
            assert!((0..=100).contains(&row.cleanliness_score));
            assert!((0..=100).contains(&row.risk_probability));
        }
    }
}
