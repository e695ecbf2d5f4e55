//! Issue categories
//!
//! Categories are free text on an issue. Filters compare them through
//! [`normalize_category`], so every comparison site must go through it.

use serde::Serialize;

/// Canonical filter key for a free-text category label.
///
/// Lowercases the label and replaces the first space with a hyphen:
/// `"Road Infrastructure"` becomes `"road-infrastructure"`. Only the first
/// space is replaced, so `"Parks and Recreation"` becomes
/// `"parks-and recreation"`; filter keys are written to match that.
pub fn normalize_category(raw: &str) -> String {
    raw.to_lowercase().replacen(' ', "-", 1)
}

/// A category offered by the report form and the map filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryOption {
    pub key: &'static str,
    pub label: &'static str,
}

/// Report-form categories, in display order
pub const CATEGORIES: &[CategoryOption] = &[
    CategoryOption { key: "road-infrastructure", label: "Road Infrastructure" },
    CategoryOption { key: "lighting", label: "Street Lighting" },
    CategoryOption { key: "waste-management", label: "Waste Management" },
    CategoryOption { key: "sidewalks", label: "Sidewalks & Walkways" },
    CategoryOption { key: "vandalism", label: "Vandalism" },
    CategoryOption { key: "public-safety", label: "Public Safety" },
    CategoryOption { key: "parks-recreation", label: "Parks & Recreation" },
    CategoryOption { key: "water-drainage", label: "Water & Drainage" },
    CategoryOption { key: "other", label: "Other" },
];

/// Display label for a category key
pub fn category_label(key: &str) -> Option<&'static str> {
    CATEGORIES.iter().find(|c| c.key == key).map(|c| c.label)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_category() {
        assert_eq!(normalize_category("Road Infrastructure"), "road-infrastructure");
        assert_eq!(normalize_category("lighting"), "lighting");
        assert_eq!(normalize_category("Waste Management"), "waste-management");
        assert_eq!(normalize_category(""), "");
    }

    #[test]
    fn test_normalize_only_first_space() {
        assert_eq!(normalize_category("Parks and Recreation"), "parks-and recreation");
        assert_eq!(normalize_category("Sidewalks & Walkways"), "sidewalks-& walkways");
    }

    #[test]
    fn test_normalize_is_stable_on_keys() {
        for option in CATEGORIES {
            assert_eq!(normalize_category(option.key), option.key);
        }
    }

    #[test]
    fn test_category_label() {
        assert_eq!(category_label("lighting"), Some("Street Lighting"));
        assert_eq!(category_label("potholes"), None);
    }
}
