//! Demo data the pages start with

use chrono::NaiveDate;
use shared::models::{CommunityStats, Coordinates, Issue, IssueProgress, IssueStatus, Urgency};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

const MAIN_AND_OAK: Coordinates = Coordinates::from_degrees(40.7128, -74.0060);
const PARK_AVENUE: Coordinates = Coordinates::from_degrees(40.7589, -73.9851);
const CITY_CENTER_PLAZA: Coordinates = Coordinates::from_degrees(40.7505, -73.9934);

/// Five community issues; the first three are geolocated
pub fn issues() -> Vec<Issue> {
    vec![
        Issue::new(1, "Pothole on Main Street", IssueStatus::InProgress, "Road Infrastructure", date(2024, 1, 15))
            .with_description("Large pothole causing damage to vehicles near the intersection of Main Street and Oak Avenue.")
            .with_location("Main Street & Oak Avenue")
            .with_reporter("John Doe")
            .with_coordinates(MAIN_AND_OAK)
            .with_urgency(Urgency::High),
        Issue::new(2, "Broken Streetlight", IssueStatus::Reported, "Lighting", date(2024, 1, 14))
            .with_description("Streetlight has been out for over a week, creating safety concerns for pedestrians.")
            .with_location("Park Avenue")
            .with_reporter("Jane Smith")
            .with_coordinates(PARK_AVENUE)
            .with_urgency(Urgency::Medium),
        Issue::new(3, "Overflowing Trash Bin", IssueStatus::Resolved, "Waste Management", date(2024, 1, 10))
            .with_description("Public trash bin is overflowing and attracting pests in the downtown area.")
            .with_location("City Center Plaza")
            .with_reporter("Mike Johnson")
            .with_coordinates(CITY_CENTER_PLAZA)
            .with_urgency(Urgency::Low),
        Issue::new(4, "Damaged Sidewalk", IssueStatus::Reported, "Sidewalks", date(2024, 1, 13))
            .with_description("Cracked and uneven sidewalk poses tripping hazard for pedestrians.")
            .with_location("Elm Street")
            .with_reporter("Sarah Wilson"),
        Issue::new(5, "Graffiti on Public Building", IssueStatus::InProgress, "Vandalism", date(2024, 1, 12))
            .with_description("Vandalism on the community center building needs to be cleaned.")
            .with_location("Community Center")
            .with_reporter("David Brown"),
    ]
}

/// Progress records for the current user's two reports
pub fn my_progress() -> Vec<IssueProgress> {
    let issues = issues();
    let mut records = Vec::new();

    if let Some(pothole) = issues.iter().find(|i| i.id == 1)
        && let Ok(progress) = IssueProgress::new(pothole, 75)
    {
        records.push(
            progress
                .with_estimated_completion(date(2024, 1, 22))
                .with_update(date(2024, 1, 20), "Work crew assigned and materials ordered")
                .with_update(date(2024, 1, 18), "Issue verified by municipal inspector")
                .with_update(date(2024, 1, 15), "Issue reported and logged in system"),
        );
    }

    if let Some(light) = issues.iter().find(|i| i.id == 2)
        && let Ok(progress) = IssueProgress::new(light, 100)
    {
        records.push(
            progress
                .with_status(IssueStatus::Resolved)
                .with_reported_date(date(2024, 1, 10))
                .with_estimated_completion(date(2024, 1, 17))
                .with_update(date(2024, 1, 17), "Streetlight replaced and tested - Issue resolved")
                .with_update(date(2024, 1, 15), "Replacement light ordered")
                .with_update(date(2024, 1, 12), "Electrical inspection completed")
                .with_update(date(2024, 1, 10), "Issue reported and logged in system"),
        );
    }

    records
}

/// City-wide totals shown on the community tab
pub fn community_stats() -> CommunityStats {
    CommunityStats {
        total_issues: 1247,
        resolved_issues: 892,
        in_progress_issues: 245,
        reported_issues: 110,
        average_resolution_days: Some(8.5),
    }
}
