//! Expense item model
//!
//! An expense item is a named, categorized recurring cost whose value has
//! already been normalized to a monthly basis.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

use super::category::{deserialize_tag_or_index, CategoryType};
use super::color::{color_for, Color};
use super::ids::ExpenseId;
use super::period::{normalize, round_to_cents, InputPeriod};

/// A recorded expense
///
/// Identity is the `id`: two items are equal when their ids match, whatever
/// their other fields hold.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpenseItem {
    /// Unique identifier, fixed at creation
    #[serde(alias = "Id")]
    pub id: ExpenseId,

    /// Unique (case-insensitive) display name
    #[serde(alias = "Name")]
    pub name: String,

    /// Monthly-equivalent value, rounded to cents
    #[serde(rename = "monthlyValue", alias = "Value")]
    pub monthly_value: f64,

    /// Free-form notes
    #[serde(default)]
    pub description: Option<String>,

    #[serde(alias = "Category", default, deserialize_with = "deserialize_tag_or_index")]
    pub category: CategoryType,
}

impl ExpenseItem {
    /// Create a new item with a fresh identifier
    pub fn new(name: impl Into<String>, monthly_value: f64, category: CategoryType) -> Self {
        Self {
            id: ExpenseId::new(),
            name: name.into(),
            monthly_value: round_to_cents(monthly_value),
            description: None,
            category,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// The item that seeds an empty or unreadable data file
    pub fn seed() -> Self {
        Self::new("Example", 100.0, CategoryType::Other)
    }

    /// Display color derived from category and name
    pub fn color(&self) -> Color {
        color_for(self.category, &self.name)
    }

    pub fn yearly_value(&self) -> f64 {
        self.monthly_value * 12.0
    }

    /// Case-insensitive name comparison used for uniqueness checks
    pub fn has_name(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.trim().to_lowercase()
    }

    /// Copy validated fields onto this item, keeping its identifier
    pub fn apply(&mut self, fields: ValidatedExpense) {
        self.name = fields.name;
        self.monthly_value = fields.monthly_value;
        self.category = fields.category;
        self.description = fields.description;
    }
}

impl PartialEq for ExpenseItem {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for ExpenseItem {}

impl Hash for ExpenseItem {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for ExpenseItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Raw fields as collected from the user, before validation
#[derive(Debug, Clone, Default)]
pub struct ExpenseInput {
    pub name: String,
    /// The amount exactly as typed
    pub value: String,
    pub period: InputPeriod,
    pub category: CategoryType,
    pub description: Option<String>,
}

impl ExpenseInput {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            ..Self::default()
        }
    }

    pub fn period(mut self, period: InputPeriod) -> Self {
        self.period = period;
        self
    }

    pub fn category(mut self, category: CategoryType) -> Self {
        self.category = category;
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Check the raw fields and produce storable ones
    ///
    /// Name uniqueness depends on the rest of the collection and is checked
    /// by the service, not here.
    pub fn validate(&self) -> Result<ValidatedExpense, ExpenseValidationError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ExpenseValidationError::EmptyName);
        }

        let raw: f64 = self
            .value
            .trim()
            .parse()
            .map_err(|_| ExpenseValidationError::InvalidValue(self.value.clone()))?;

        if !raw.is_finite() {
            return Err(ExpenseValidationError::InvalidValue(self.value.clone()));
        }
        if raw < 0.0 {
            return Err(ExpenseValidationError::NegativeValue);
        }

        let description = self
            .description
            .as_ref()
            .filter(|d| !d.trim().is_empty())
            .cloned();

        Ok(ValidatedExpense {
            name: name.to_string(),
            monthly_value: round_to_cents(normalize(raw, self.period)),
            category: self.category,
            description,
        })
    }
}

/// Fields that passed validation, value already normalized and rounded
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedExpense {
    pub name: String,
    pub monthly_value: f64,
    pub category: CategoryType,
    pub description: Option<String>,
}

impl ValidatedExpense {
    pub fn into_item(self) -> ExpenseItem {
        ExpenseItem {
            id: ExpenseId::new(),
            name: self.name,
            monthly_value: self.monthly_value,
            description: self.description,
            category: self.category,
        }
    }
}

/// Validation errors for expense input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    EmptyName,
    InvalidValue(String),
    NegativeValue,
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Name is required"),
            Self::InvalidValue(raw) => write!(f, "Invalid value entered: '{}'", raw),
            Self::NegativeValue => write!(f, "Value cannot be negative"),
        }
    }
}

impl std::error::Error for ExpenseValidationError {}
