//! Expense CLI commands
//!
//! Implements the commands that add, edit, remove and list expenses.

use clap::Subcommand;

use crate::config::Settings;
use crate::display::{format_category_list, format_expense_details, format_expense_list};
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{CategoryType, ExpenseInput, ExpenseItem, InputPeriod};
use crate::services::SortCriterion;
use crate::tracker::ExpenseTracker;

/// Expense subcommands
#[derive(Subcommand)]
pub enum ExpenseCommands {
    /// Record a new expense
    Add {
        /// Expense name (must be unique)
        name: String,
        /// Amount for the given period (e.g. "120" or "9.99")
        #[arg(allow_hyphen_values = true)]
        value: String,
        /// Period the amount covers: "1 month", "3 months", "6 months", "1 year"
        #[arg(short, long)]
        period: Option<InputPeriod>,
        /// Category tag or label (see `categories`)
        #[arg(short, long, default_value = "Other")]
        category: CategoryType,
        /// Free-form description
        #[arg(short, long)]
        description: Option<String>,
    },

    /// Edit an expense
    Edit {
        /// Expense name or ID
        expense: String,
        /// New name
        #[arg(short, long)]
        name: Option<String>,
        /// New amount for the given period
        #[arg(short, long, allow_hyphen_values = true)]
        value: Option<String>,
        /// Period the new amount covers
        #[arg(short, long)]
        period: Option<InputPeriod>,
        /// New category
        #[arg(short, long)]
        category: Option<CategoryType>,
        /// New description
        #[arg(short, long)]
        description: Option<String>,
        /// Remove the description
        #[arg(long)]
        clear_description: bool,
    },

    /// Delete an expense
    Delete {
        /// Expense name or ID
        expense: String,
    },

    /// Show expense details
    Show {
        /// Expense name or ID
        expense: String,
    },

    /// List expenses
    List {
        /// Only show expenses whose name contains this text
        #[arg(short, long)]
        search: Option<String>,
        /// none, name-asc, name-desc, value-asc, value-desc
        #[arg(long)]
        sort: Option<SortCriterion>,
    },

    /// Show per-category totals and the monthly/yearly sums
    Summary,

    /// List the available categories
    Categories,
}

/// Handle an expense command
pub fn handle_expense_command(
    tracker: &mut ExpenseTracker,
    settings: &Settings,
    cmd: ExpenseCommands,
) -> ExpenseResult<()> {
    let currency = settings.currency_symbol.as_str();

    match cmd {
        ExpenseCommands::Add {
            name,
            value,
            period,
            category,
            description,
        } => {
            let mut input = ExpenseInput::new(name, value)
                .period(period.unwrap_or(settings.default_period))
                .category(category);
            input.description = description;

            let item = tracker.add_item(&input)?;
            println!("Added expense: {}", item.name);
            println!("  Monthly: {:.2} {}", item.monthly_value, currency);
            println!("  ID: {}", item.id);
        }

        ExpenseCommands::Edit {
            expense,
            name,
            value,
            period,
            category,
            description,
            clear_description,
        } => {
            let item = find_expense(tracker, &expense)?;

            if name.is_none()
                && value.is_none()
                && category.is_none()
                && description.is_none()
                && !clear_description
            {
                println!("No changes specified.");
                println!("Use --name, --value, --category, --description or --clear-description.");
                return Ok(());
            }

            let input = edit_input(
                &item,
                name,
                value,
                period,
                category,
                description,
                clear_description,
            );
            let updated = tracker.update_item(item.id, &input)?;
            println!("Updated expense: {}", updated.name);
            println!("  Monthly: {:.2} {}", updated.monthly_value, currency);
        }

        ExpenseCommands::Delete { expense } => {
            let item = find_expense(tracker, &expense)?;
            let removed = tracker.delete_item(item.id)?;
            println!("Deleted expense: {}", removed.name);
        }

        ExpenseCommands::Show { expense } => {
            let item = find_expense(tracker, &expense)?;
            print!("{}", format_expense_details(&item, currency));
        }

        ExpenseCommands::List { search, sort } => {
            if let Some(text) = search {
                tracker.set_search_text(text);
            }
            if let Some(criterion) = sort {
                tracker.set_sort_criterion(criterion);
            }

            let view = tracker.current_view()?;
            print!("{}", format_expense_list(&view, currency));
        }

        ExpenseCommands::Summary => {
            let summary = tracker.category_summary()?;
            let totals = tracker.totals()?;
            print!("{}", summary.format_terminal(currency));
            println!();
            print!("{}", totals.format_terminal(currency));
        }

        ExpenseCommands::Categories => {
            print!("{}", format_category_list(tracker.categories()));
        }
    }

    Ok(())
}

fn find_expense(tracker: &ExpenseTracker, identifier: &str) -> ExpenseResult<ExpenseItem> {
    tracker
        .find(identifier)?
        .ok_or_else(|| ExpenseError::not_found(identifier))
}

/// Current fields overlaid with whatever the user asked to change
fn edit_input(
    item: &ExpenseItem,
    name: Option<String>,
    value: Option<String>,
    period: Option<InputPeriod>,
    category: Option<CategoryType>,
    description: Option<String>,
    clear_description: bool,
) -> ExpenseInput {
    // An unchanged value is already monthly, so the period only applies to a new one
    let (value, period) = match value {
        Some(raw) => (raw, period.unwrap_or_default()),
        None => (item.monthly_value.to_string(), InputPeriod::OneMonth),
    };

    let description = if clear_description {
        None
    } else {
        description.or_else(|| item.description.clone())
    };

    ExpenseInput {
        name: name.unwrap_or_else(|| item.name.clone()),
        value,
        period,
        category: category.unwrap_or(item.category),
        description,
    }
}
