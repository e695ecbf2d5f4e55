//! Filter predicate evaluator

use super::FilterCriteria;
use crate::models::Issue;

/// Keep the issues that pass every active criterion.
///
/// Stable: survivors keep their relative order. Returns a fresh vector and
/// never touches the input. Filtering the result again with the same
/// criteria returns the same issues.
pub fn filter_issues(issues: &[Issue], criteria: &FilterCriteria) -> Vec<Issue> {
    let needle = criteria.needle();
    let kept: Vec<Issue> = issues
        .iter()
        .filter(|issue| criteria.matches_with(issue, needle.as_deref()))
        .cloned()
        .collect();

    tracing::debug!(
        total = issues.len(),
        kept = kept.len(),
        status = %criteria.status,
        "Filtered issues"
    );
    kept
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::{CategoryFilter, StatusFilter};
    use crate::models::IssueStatus;
    use chrono::NaiveDate;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
    }

    fn sample() -> Vec<Issue> {
        vec![
            Issue::new(1, "Broken Streetlight", IssueStatus::Reported, "Street Lighting", date())
                .with_location("Park Avenue"),
            Issue::new(2, "Overflowing Trash Bin", IssueStatus::Resolved, "Waste Management", date())
                .with_description("Public trash bin is overflowing and attracting pests")
                .with_location("City Center Plaza"),
            Issue::new(3, "Pothole on Main Street", IssueStatus::InProgress, "Road Infrastructure", date())
                .with_description("Large pothole causing damage to vehicles")
                .with_location("Main Street & Oak Avenue"),
        ]
    }

    fn ids(issues: &[Issue]) -> Vec<i64> {
        issues.iter().map(|i| i.id).collect()
    }

    #[test]
    fn test_inactive_criteria_is_identity() {
        let issues = sample();
        assert_eq!(filter_issues(&issues, &FilterCriteria::all()), issues);
        assert_eq!(
            filter_issues(&issues, &FilterCriteria::all().with_search("")),
            issues
        );
    }

    #[test]
    fn test_status_only_resolved() {
        let criteria = FilterCriteria::all().with_status(StatusFilter::Only(IssueStatus::Resolved));
        let result = filter_issues(&sample(), &criteria);
        assert_eq!(ids(&result), vec![2]);
        assert_eq!(result[0].category, "Waste Management");
    }

    #[test]
    fn test_category_uses_normalized_key() {
        let criteria =
            FilterCriteria::all().with_category(CategoryFilter::Key("road-infrastructure".into()));
        assert_eq!(ids(&filter_issues(&sample(), &criteria)), vec![3]);

        // "Street Lighting" normalizes to "street-lighting", not "lighting"
        let criteria = FilterCriteria::all().with_category(CategoryFilter::Key("lighting".into()));
        assert!(filter_issues(&sample(), &criteria).is_empty());
    }

    #[test]
    fn test_search_is_case_insensitive() {
        for term in ["pothole", "POTHOLE", "PotHole"] {
            let result = filter_issues(&sample(), &FilterCriteria::all().with_search(term));
            assert_eq!(ids(&result), vec![3], "term {term}");
        }
    }

    #[test]
    fn test_search_covers_description_and_location() {
        let by_description = filter_issues(&sample(), &FilterCriteria::all().with_search("pests"));
        assert_eq!(ids(&by_description), vec![2]);

        let by_location = filter_issues(&sample(), &FilterCriteria::all().with_search("avenue"));
        assert_eq!(ids(&by_location), vec![1, 3]);
    }

    #[test]
    fn test_criteria_are_anded() {
        let criteria = FilterCriteria::all()
            .with_status(StatusFilter::Only(IssueStatus::Reported))
            .with_search("avenue");
        assert_eq!(ids(&filter_issues(&sample(), &criteria)), vec![1]);

        let criteria = FilterCriteria::all()
            .with_status(StatusFilter::Only(IssueStatus::Resolved))
            .with_search("pothole");
        assert!(filter_issues(&sample(), &criteria).is_empty());
    }

    #[test]
    fn test_result_is_ordered_subsequence() {
        let issues = sample();
        let result = filter_issues(&issues, &FilterCriteria::all().with_search("a"));
        let mut positions = result
            .iter()
            .map(|r| issues.iter().position(|i| i == r).unwrap());
        let mut last = positions.next().unwrap();
        for p in positions {
            assert!(p > last);
            last = p;
        }
    }

    #[test]
    fn test_idempotent() {
        let issues = sample();
        let criteria = FilterCriteria::all()
            .with_status(StatusFilter::Only(IssueStatus::InProgress))
            .with_search("main");
        let once = filter_issues(&issues, &criteria);
        let twice = filter_issues(&once, &criteria);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_empty_input() {
        assert!(filter_issues(&[], &FilterCriteria::all().with_search("x")).is_empty());
    }

    #[test]
    fn test_unknown_status_only_passes_all() {
        let issue = Issue::new(9, "Odd", IssueStatus::Unknown, "Other", date());
        let issues = vec![issue];
        assert_eq!(filter_issues(&issues, &FilterCriteria::all()).len(), 1);
        for status in IssueStatus::KNOWN {
            let criteria = FilterCriteria::all().with_status(StatusFilter::Only(status));
            assert!(filter_issues(&issues, &criteria).is_empty());
        }
    }
}
