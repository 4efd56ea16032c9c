//! Expense categories
//!
//! The set of categories is closed. Each tag has a display label and a base
//! color; both live in a static table rather than on the enum itself.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

use super::color::Hsl;

/// Classification of an expense item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CategoryType {
    MediaAndEntertainment,
    FitnessAndHealth,
    HousingAndUtilities,
    Transportation,
    InsuranceAndHealthcare,
    EducationAndPersonalDevelopment,
    SoftwareAndTools,
    Pets,
    #[default]
    Other,
}

/// Registry entry for one category
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CategoryInfo {
    pub category: CategoryType,
    pub label: &'static str,
    pub base_color: Hsl,
}

const fn info(category: CategoryType, label: &'static str, h: f32, s: f32, l: f32) -> CategoryInfo {
    CategoryInfo {
        category,
        label,
        base_color: Hsl {
            hue: h,
            saturation: s,
            lightness: l,
        },
    }
}

/// Label and base color of every category, in declaration order
pub static CATEGORY_REGISTRY: [CategoryInfo; 9] = [
    info(CategoryType::MediaAndEntertainment, "Media & Entertainment", 0.96, 0.8, 0.7),
    info(CategoryType::FitnessAndHealth, "Fitness & Health", 0.55, 0.85, 0.7),
    info(CategoryType::HousingAndUtilities, "Housing & Utilities", 0.12, 0.8, 0.75),
    info(CategoryType::Transportation, "Transportation", 0.5, 0.8, 0.65),
    info(CategoryType::InsuranceAndHealthcare, "Insurance & Healthcare", 0.78, 0.75, 0.7),
    info(
        CategoryType::EducationAndPersonalDevelopment,
        "Education & Personal Development",
        0.09,
        0.85,
        0.7,
    ),
    info(CategoryType::SoftwareAndTools, "Software & Tools", 0.0, 0.0, 0.75),
    info(CategoryType::Pets, "Pets", 0.35, 0.75, 0.7),
    info(CategoryType::Other, "Other", 0.83, 0.65, 0.75),
];

impl CategoryType {
    /// Get all categories in registry order
    pub fn all() -> impl Iterator<Item = CategoryType> {
        CATEGORY_REGISTRY.iter().map(|entry| entry.category)
    }

    /// Look up this category's registry entry
    pub fn info(&self) -> Option<&'static CategoryInfo> {
        CATEGORY_REGISTRY.iter().find(|entry| entry.category == *self)
    }

    /// Human-readable label, e.g. "Housing & Utilities"
    pub fn label(&self) -> &'static str {
        self.info().map(|entry| entry.label).unwrap_or(self.tag())
    }

    /// Base color from the registry, if registered
    pub fn base_color(&self) -> Option<Hsl> {
        self.info().map(|entry| entry.base_color)
    }

    /// The tag name as it appears in the data file
    pub fn tag(&self) -> &'static str {
        match self {
            Self::MediaAndEntertainment => "MediaAndEntertainment",
            Self::FitnessAndHealth => "FitnessAndHealth",
            Self::HousingAndUtilities => "HousingAndUtilities",
            Self::Transportation => "Transportation",
            Self::InsuranceAndHealthcare => "InsuranceAndHealthcare",
            Self::EducationAndPersonalDevelopment => "EducationAndPersonalDevelopment",
            Self::SoftwareAndTools => "SoftwareAndTools",
            Self::Pets => "Pets",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for CategoryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Read a category written either as its tag or as its registry index
///
/// Older data files store the category as a number, counted in registry order.
pub fn deserialize_tag_or_index<'de, D>(deserializer: D) -> Result<CategoryType, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum TagOrIndex {
        Index(u64),
        Tag(CategoryType),
    }

    match TagOrIndex::deserialize(deserializer)? {
        TagOrIndex::Tag(category) => Ok(category),
        TagOrIndex::Index(index) => usize::try_from(index)
            .ok()
            .and_then(|i| CATEGORY_REGISTRY.get(i))
            .map(|entry| entry.category)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown category index {}", index))),
    }
}

impl FromStr for CategoryType {
    type Err = String;

    /// Accepts the tag name or the label, ignoring case
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        CATEGORY_REGISTRY
            .iter()
            .find(|entry| {
                entry.category.tag().eq_ignore_ascii_case(wanted)
                    || entry.label.eq_ignore_ascii_case(wanted)
            })
            .map(|entry| entry.category)
            .ok_or_else(|| format!("Unknown category: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_category_registered() {
        assert_eq!(CategoryType::all().count(), 9);
        for category in CategoryType::all() {
            assert!(category.info().is_some(), "{:?} missing", category);
        }
    }

    #[test]
    fn test_labels() {
        assert_eq!(CategoryType::HousingAndUtilities.label(), "Housing & Utilities");
        assert_eq!(
            CategoryType::EducationAndPersonalDevelopment.to_string(),
            "Education & Personal Development"
        );
        assert_eq!(CategoryType::Pets.label(), "Pets");
    }

    #[test]
    fn test_parse_tag_and_label() {
        assert_eq!(
            "SoftwareAndTools".parse::<CategoryType>().unwrap(),
            CategoryType::SoftwareAndTools
        );
        assert_eq!(
            "fitness & health".parse::<CategoryType>().unwrap(),
            CategoryType::FitnessAndHealth
        );
        assert!("Groceries".parse::<CategoryType>().is_err());
    }

    #[test]
    fn test_serializes_as_tag_name() {
        let json = serde_json::to_string(&CategoryType::MediaAndEntertainment).unwrap();
        assert_eq!(json, "\"MediaAndEntertainment\"");
    }

    #[test]
    fn test_base_hues_differ() {
        let hues: Vec<f32> = CategoryType::all()
            .filter_map(|c| c.base_color())
            .map(|hsl| hsl.hue)
            .collect();
        for (i, a) in hues.iter().enumerate() {
            for b in &hues[i + 1..] {
                assert!((a - b).abs() > f32::EPSILON);
            }
        }
    }
}
