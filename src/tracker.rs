//! The interface a front end drives
//!
//! `ExpenseTracker` owns the storage and the transient view parameters. A
//! front end hands it raw user input, gets explicit results back, and asks
//! for the derived views whenever it needs to redraw.

use crate::config::{ExpensePaths, Settings};
use crate::error::ExpenseResult;
use crate::models::{CategoryInfo, Color, ExpenseId, ExpenseInput, ExpenseItem, CATEGORY_REGISTRY};
use crate::reports::{CategorySummary, ExpenseTotals};
use crate::services::{ExpenseService, SortCriterion, ViewQuery};
use crate::storage::{LoadOutcome, Storage};

/// Expense store plus list-view state
pub struct ExpenseTracker {
    storage: Storage,
    query: ViewQuery,
    load_outcome: LoadOutcome,
}

impl ExpenseTracker {
    /// Open the data under `paths` and load it
    ///
    /// The tracker is only returned once loading has finished.
    pub fn open(paths: ExpensePaths, settings: &Settings) -> ExpenseResult<Self> {
        let storage = Storage::open(&paths, settings.audit_enabled)?;
        let load_outcome = storage.load_all()?;

        Ok(Self {
            storage,
            query: ViewQuery::new("", settings.default_sort),
            load_outcome,
        })
    }

    pub fn storage(&self) -> &Storage {
        &self.storage
    }

    /// How the store was populated at startup
    pub fn load_outcome(&self) -> &LoadOutcome {
        &self.load_outcome
    }

    fn service(&self) -> ExpenseService<'_> {
        ExpenseService::new(&self.storage)
    }

    pub fn add_item(&self, input: &ExpenseInput) -> ExpenseResult<ExpenseItem> {
        self.service().add(input)
    }

    pub fn update_item(&self, id: ExpenseId, input: &ExpenseInput) -> ExpenseResult<ExpenseItem> {
        self.service().update(id, input)
    }

    pub fn delete_item(&self, id: ExpenseId) -> ExpenseResult<ExpenseItem> {
        self.service().remove(id)
    }

    /// Look up an item by name, UUID or short ID
    pub fn find(&self, identifier: &str) -> ExpenseResult<Option<ExpenseItem>> {
        self.service().find(identifier)
    }

    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.query.search_text = text.into();
    }

    pub fn set_sort_criterion(&mut self, criterion: SortCriterion) {
        self.query.sort = criterion;
    }

    /// Every item, insertion order
    pub fn items(&self) -> ExpenseResult<Vec<ExpenseItem>> {
        self.service().list()
    }

    /// Items matching the search text, in the selected order
    pub fn current_view(&self) -> ExpenseResult<Vec<ExpenseItem>> {
        Ok(self.query.apply(&self.items()?))
    }

    /// Breakdown over all items, regardless of the search text
    pub fn category_summary(&self) -> ExpenseResult<CategorySummary> {
        Ok(CategorySummary::compute(&self.items()?))
    }

    pub fn totals(&self) -> ExpenseResult<ExpenseTotals> {
        Ok(ExpenseTotals::compute(&self.items()?))
    }

    pub fn color_for(&self, item: &ExpenseItem) -> Color {
        item.color()
    }

    /// Registry listing for category pickers
    pub fn categories(&self) -> &'static [CategoryInfo] {
        &CATEGORY_REGISTRY
    }
}
