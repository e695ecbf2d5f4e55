//! Page rendering over the demo board

use chrono::NaiveDate;
use civic_client::views::EMPTY_ISSUES_MESSAGE;
use civic_client::{IssueBoard, IssuesView, MapView, ProgressView, seed};
use serde_json::json;
use shared::filter::{CategoryFilter, StatusFilter};
use shared::map::MapViewport;
use shared::models::{ColorClass, IssueCreate, IssueStatus, Urgency};

fn ids<T>(items: &[T], id: impl Fn(&T) -> i64) -> Vec<i64> {
    items.iter().map(id).collect()
}

#[test]
fn test_issues_page_unfiltered_shows_everything() {
    let board = IssueBoard::seeded();
    let page = IssuesView::default().render(board.issues());

    assert_eq!(ids(&page.cards, |c| c.id), vec![1, 2, 3, 4, 5]);
    assert_eq!(page.empty_message, None);
    assert_eq!(page.cards[0].status_label, "In Progress");
    assert_eq!(page.cards[0].badge_classes, "bg-primary text-primary-foreground");
}

#[test]
fn test_issues_page_search_any_case() {
    let board = IssueBoard::seeded();
    for term in ["pothole", "POTHOLE"] {
        let page = IssuesView::default().with_search(term).render(board.issues());
        assert_eq!(ids(&page.cards, |c| c.id), vec![1]);
    }
}

#[test]
fn test_issues_page_status_and_search() {
    let board = IssueBoard::seeded();
    let view = IssuesView::default()
        .with_status(StatusFilter::Only(IssueStatus::Reported))
        .with_search("pedestrians");
    let page = view.render(board.issues());
    assert_eq!(ids(&page.cards, |c| c.id), vec![2, 4]);
}

#[test]
fn test_issues_page_empty_message() {
    let board = IssueBoard::seeded();
    let page = IssuesView::default()
        .with_search("no such thing")
        .render(board.issues());
    assert!(page.is_empty());
    assert_eq!(page.empty_message, Some(EMPTY_ISSUES_MESSAGE));
}

#[test]
fn test_map_page_markers_only_for_geolocated() {
    let board = IssueBoard::seeded();
    let page = MapView::default().render(board.issues(), &MapViewport::default());

    assert_eq!(ids(&page.markers, |m| m.issue_id), vec![1, 2, 3]);
    assert_eq!(ids(&page.issues_in_view, |c| c.id), vec![1, 2, 3]);
    assert_eq!(page.legend.len(), 3);
    assert_eq!(page.categories.len(), 9);
}

#[test]
fn test_map_page_category_filter() {
    let board = IssueBoard::seeded();
    let view = MapView::default().with_category(CategoryFilter::Key("waste-management".into()));
    let page = view.render(board.issues(), &MapViewport::default());

    assert_eq!(page.markers.len(), 1);
    let marker = &page.markers[0];
    assert_eq!(marker.issue_id, 3);
    assert_eq!(marker.color_class, ColorClass::Secondary);
    assert_eq!(marker.popup.urgency.as_deref(), Some("low priority"));

    assert_eq!(page.issues_in_view[0].border_class, "border-l-green-500");
}

#[test]
fn test_map_page_status_filter() {
    let board = IssueBoard::seeded();
    let view = MapView::default().with_status(StatusFilter::Only(IssueStatus::InProgress));
    let page = view.render(board.issues(), &MapViewport::default());

    // issue 5 is in progress but has no coordinates
    assert_eq!(ids(&page.markers, |m| m.issue_id), vec![1]);
    assert_eq!(page.markers[0].popup.status, "in progress");
}

#[test]
fn test_submitted_report_is_listed_but_not_mapped() {
    let mut board = IssueBoard::seeded();
    let form = IssueCreate {
        title: "Broken Swing".into(),
        description: "Chain snapped on the playground swing".into(),
        category: "parks-recreation".into(),
        location: "Riverside Park".into(),
        urgency: Some(Urgency::Critical),
    };
    let date = NaiveDate::from_ymd_opt(2024, 2, 3).unwrap();
    let id = board.submit(form, "Ana Ruiz", date).unwrap().id;

    let list = IssuesView::default().with_search("swing").render(board.issues());
    assert_eq!(ids(&list.cards, |c| c.id), vec![id]);
    assert_eq!(list.cards[0].status_label, "Reported");

    let map = MapView::default()
        .with_category(CategoryFilter::Key("parks-recreation".into()))
        .render(board.issues(), &MapViewport::default());
    assert!(map.markers.is_empty());
}

#[test]
fn test_progress_page() {
    let page = ProgressView.render(&seed::my_progress(), &seed::community_stats());

    assert_eq!(page.my_issues.len(), 2);
    let pothole = &page.my_issues[0];
    assert_eq!(pothole.progress, 75);
    assert_eq!(pothole.reported_date, NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
    assert_eq!(
        pothole.timeline[0].message,
        "Work crew assigned and materials ordered"
    );

    let light = &page.my_issues[1];
    assert_eq!(light.status_label, "Resolved");
    assert_eq!(light.badge_classes, "bg-secondary text-secondary-foreground");
    assert_eq!(light.reported_date, NaiveDate::from_ymd_opt(2024, 1, 10).unwrap());
    assert_eq!(light.timeline.last().map(|u| u.date), Some(light.reported_date));

    assert_eq!(page.community.resolution_rate, 72);
    assert_eq!(page.community.in_progress_share, 20);
    assert_eq!(page.community.reported_share, 9);
    assert_eq!(page.community.average_resolution.as_deref(), Some("8.5 days"));
}

#[test]
fn test_map_page_wire_shape() {
    let board = IssueBoard::seeded();
    let view = MapView::default().with_category(CategoryFilter::Key("lighting".into()));
    let page = view.render(board.issues(), &MapViewport::default());
    let value = serde_json::to_value(&page).unwrap();

    assert_eq!(value["viewport"]["zoom"], json!(12));
    assert_eq!(value["markers"][0]["color_class"], json!("accent"));
    assert_eq!(value["legend"][0], json!({ "color_class": "accent", "label": "Reported Issues" }));
    assert_eq!(value["categories"][1], json!({ "key": "lighting", "label": "Street Lighting" }));
}
