use super::{CategoryFilter, FilterCriteria, StatusFilter, filter_issues};
use crate::models::{Issue, IssueStatus, normalize_category};
use chrono::NaiveDate;
use proptest::prelude::*;

const LABELS: [&str; 5] = [
    "Road Infrastructure",
    "Street Lighting",
    "lighting",
    "Waste Management",
    "Parks and Recreation",
];

fn arb_status() -> impl Strategy<Value = IssueStatus> {
    prop_oneof![
        Just(IssueStatus::Reported),
        Just(IssueStatus::InProgress),
        Just(IssueStatus::Resolved),
        Just(IssueStatus::Unknown),
    ]
}

fn arb_label() -> impl Strategy<Value = &'static str> {
    prop::sample::select(LABELS.to_vec())
}

fn arb_text() -> impl Strategy<Value = String> {
    "[a-zA-Z ]{0,12}"
}

fn arb_issues() -> impl Strategy<Value = Vec<Issue>> {
    prop::collection::vec(
        (arb_text(), arb_text(), arb_text(), arb_status(), arb_label()),
        0..12,
    )
    .prop_map(|rows| {
        let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap_or_default();
        rows.into_iter()
            .enumerate()
            .map(|(i, (title, description, location, status, label))| {
                Issue::new(i as i64, title, status, label, date)
                    .with_description(description)
                    .with_location(location)
            })
            .collect()
    })
}

fn arb_status_filter() -> impl Strategy<Value = StatusFilter> {
    prop_oneof![
        Just(StatusFilter::All),
        Just(StatusFilter::Only(IssueStatus::Reported)),
        Just(StatusFilter::Only(IssueStatus::InProgress)),
        Just(StatusFilter::Only(IssueStatus::Resolved)),
    ]
}

fn arb_category_filter() -> impl Strategy<Value = CategoryFilter> {
    prop_oneof![
        Just(CategoryFilter::All),
        arb_label().prop_map(|label| CategoryFilter::Key(normalize_category(label))),
        Just(CategoryFilter::Key("other".to_string())),
    ]
}

fn arb_criteria() -> impl Strategy<Value = FilterCriteria> {
    (
        arb_status_filter(),
        arb_category_filter(),
        prop::option::of("[a-zA-Z]{0,3}"),
    )
        .prop_map(|(status, category, search_term)| FilterCriteria {
            status,
            category,
            search_term,
        })
}

proptest! {
    #[test]
    fn inactive_criteria_is_identity(
        issues in arb_issues(),
        search_term in prop::option::of(Just(String::new())),
    ) {
        let criteria = FilterCriteria { search_term, ..FilterCriteria::all() };
        prop_assert_eq!(filter_issues(&issues, &criteria), issues);
    }

    #[test]
    fn result_is_ordered_subsequence(issues in arb_issues(), criteria in arb_criteria()) {
        let result = filter_issues(&issues, &criteria);

        let mut rest = issues.iter();
        for kept in &result {
            prop_assert!(rest.any(|issue| issue == kept));
        }

        let expected = issues.iter().filter(|issue| criteria.matches(issue)).count();
        prop_assert_eq!(result.len(), expected);
    }

    #[test]
    fn filtering_is_idempotent(issues in arb_issues(), criteria in arb_criteria()) {
        let once = filter_issues(&issues, &criteria);
        let twice = filter_issues(&once, &criteria);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn search_ignores_case(issues in arb_issues(), term in "[a-zA-Z]{1,3}") {
        let lower = FilterCriteria::all().with_search(term.to_lowercase());
        let upper = FilterCriteria::all().with_search(term.to_uppercase());
        prop_assert_eq!(filter_issues(&issues, &lower), filter_issues(&issues, &upper));
    }
}
