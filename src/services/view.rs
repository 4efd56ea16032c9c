//! Filtered and sorted list view
//!
//! The list shown to the user is never stored. It is recomputed from the
//! collection, the current search text and the current sort criterion.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use crate::models::ExpenseItem;

/// Ordering applied to the list view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SortCriterion {
    /// Insertion order
    #[default]
    None,
    NameAscending,
    NameDescending,
    ValueAscending,
    ValueDescending,
}

impl SortCriterion {
    pub fn all() -> &'static [Self] {
        &[
            Self::None,
            Self::NameAscending,
            Self::NameDescending,
            Self::ValueAscending,
            Self::ValueDescending,
        ]
    }

    /// Picker label
    pub fn label(&self) -> &'static str {
        match self {
            Self::None => "None",
            Self::NameAscending => "Name (A-Z)",
            Self::NameDescending => "Name (Z-A)",
            Self::ValueAscending => "Value (Low → High)",
            Self::ValueDescending => "Value (High → Low)",
        }
    }

    /// Short keyword accepted on the command line
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::NameAscending => "name-asc",
            Self::NameDescending => "name-desc",
            Self::ValueAscending => "value-asc",
            Self::ValueDescending => "value-desc",
        }
    }

    fn compare(&self, a: &ExpenseItem, b: &ExpenseItem) -> Ordering {
        match self {
            Self::None => Ordering::Equal,
            Self::NameAscending => compare_names(a, b),
            Self::NameDescending => compare_names(b, a),
            Self::ValueAscending => a.monthly_value.total_cmp(&b.monthly_value),
            Self::ValueDescending => b.monthly_value.total_cmp(&a.monthly_value),
        }
    }
}

fn compare_names(a: &ExpenseItem, b: &ExpenseItem) -> Ordering {
    a.name.to_lowercase().cmp(&b.name.to_lowercase())
}

impl fmt::Display for SortCriterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for SortCriterion {
    type Err = Infallible;

    /// Accepts keywords or picker labels; anything else means no sorting
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Ok(Self::all()
            .iter()
            .copied()
            .find(|c| c.keyword().eq_ignore_ascii_case(wanted) || c.label() == wanted)
            .unwrap_or_default())
    }
}

/// Transient parameters of the list view
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewQuery {
    pub search_text: String,
    pub sort: SortCriterion,
}

impl ViewQuery {
    pub fn new(search_text: impl Into<String>, sort: SortCriterion) -> Self {
        Self {
            search_text: search_text.into(),
            sort,
        }
    }

    pub fn apply(&self, items: &[ExpenseItem]) -> Vec<ExpenseItem> {
        compute_view(items, &self.search_text, self.sort)
    }
}

/// Filter by case-insensitive name substring, then stable-sort
///
/// Blank search text matches every item.
pub fn compute_view(
    items: &[ExpenseItem],
    search_text: &str,
    sort: SortCriterion,
) -> Vec<ExpenseItem> {
    let match_all = search_text.trim().is_empty();
    let needle = search_text.to_lowercase();

    let mut view: Vec<ExpenseItem> = items
        .iter()
        .filter(|item| match_all || item.name.to_lowercase().contains(&needle))
        .cloned()
        .collect();

    if sort != SortCriterion::None {
        view.sort_by(|a, b| sort.compare(a, b));
    }

    view
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CategoryType;

    fn sample_items() -> Vec<ExpenseItem> {
        vec![
            ExpenseItem::new("Rent", 1200.0, CategoryType::HousingAndUtilities),
            ExpenseItem::new("Netflix", 15.0, CategoryType::MediaAndEntertainment),
            ExpenseItem::new("Car rental", 80.0, CategoryType::Transportation),
            ExpenseItem::new("gym", 40.0, CategoryType::FitnessAndHealth),
            ExpenseItem::new("Spotify", 15.0, CategoryType::MediaAndEntertainment),
        ]
    }

    fn names(items: &[ExpenseItem]) -> Vec<&str> {
        items.iter().map(|i| i.name.as_str()).collect()
    }

    #[test]
    fn test_blank_search_keeps_insertion_order() {
        let items = sample_items();
        let view = compute_view(&items, "   ", SortCriterion::None);
        assert_eq!(names(&view), vec!["Rent", "Netflix", "Car rental", "gym", "Spotify"]);
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let items = sample_items();
        let view = compute_view(&items, "RENT", SortCriterion::None);
        assert_eq!(names(&view), vec!["Rent", "Car rental"]);
    }

    #[test]
    fn test_search_keeps_surrounding_whitespace() {
        let items = sample_items();
        let view = compute_view(&items, " rent", SortCriterion::None);
        assert_eq!(names(&view), vec!["Car rental"]);
    }

    #[test]
    fn test_search_with_sort() {
        let items = sample_items();
        let view = compute_view(&items, "rent", SortCriterion::ValueAscending);
        assert_eq!(names(&view), vec!["Car rental", "Rent"]);
    }

    #[test]
    fn test_value_ascending_is_non_decreasing_and_stable() {
        let items = sample_items();
        let view = compute_view(&items, "", SortCriterion::ValueAscending);

        assert!(view.windows(2).all(|w| w[0].monthly_value <= w[1].monthly_value));
        // Netflix was inserted before Spotify and both cost 15
        assert_eq!(names(&view)[..2], ["Netflix", "Spotify"]);
    }

    #[test]
    fn test_value_descending_is_stable() {
        let items = sample_items();
        let view = compute_view(&items, "", SortCriterion::ValueDescending);
        assert_eq!(names(&view), vec!["Rent", "Car rental", "gym", "Netflix", "Spotify"]);
    }

    #[test]
    fn test_name_sorting() {
        let items = sample_items();
        let ascending = compute_view(&items, "", SortCriterion::NameAscending);
        assert_eq!(
            names(&ascending),
            vec!["Car rental", "gym", "Netflix", "Rent", "Spotify"]
        );

        let descending = compute_view(&items, "", SortCriterion::NameDescending);
        assert_eq!(
            names(&descending),
            vec!["Spotify", "Rent", "Netflix", "gym", "Car rental"]
        );
    }

    #[test]
    fn test_no_match_is_empty() {
        let view = compute_view(&sample_items(), "mortgage", SortCriterion::NameAscending);
        assert!(view.is_empty());
    }

    #[test]
    fn test_parse_sort_criterion() {
        assert_eq!(
            "Value (Low → High)".parse::<SortCriterion>().unwrap(),
            SortCriterion::ValueAscending
        );
        assert_eq!(
            "name-desc".parse::<SortCriterion>().unwrap(),
            SortCriterion::NameDescending
        );
        assert_eq!("sideways".parse::<SortCriterion>().unwrap(), SortCriterion::None);
    }

    #[test]
    fn test_view_query() {
        let query = ViewQuery::new("net", SortCriterion::None);
        assert_eq!(names(&query.apply(&sample_items())), vec!["Netflix"]);
    }
}
