use anyhow::Result;
use clap::{Parser, Subcommand};

use expenses::cli::{handle_expense_command, handle_history_command, ExpenseCommands};
use expenses::config::{ExpensePaths, Settings};
use expenses::models::InputPeriod;
use expenses::services::SortCriterion;
use expenses::storage::LoadOutcome;
use expenses::ExpenseTracker;

#[derive(Parser)]
#[command(
    name = "expenses",
    version,
    about = "Track recurring expenses as monthly amounts",
    long_about = "Record recurring expenses in whatever period they are billed, \
                  see them normalized to a monthly amount, and break the total \
                  down by category."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Expense(ExpenseCommands),

    /// Show recent changes from the audit log
    History {
        /// Only show changes to this expense (name or ID)
        expense: Option<String>,
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Show current configuration and paths, or change settings
    Config {
        /// Currency symbol printed after amounts
        #[arg(long)]
        currency: Option<String>,
        /// Period `add` assumes when none is given
        #[arg(long)]
        default_period: Option<InputPeriod>,
        /// Order `list` uses when none is given
        #[arg(long)]
        default_sort: Option<SortCriterion>,
        /// Turn the audit log on or off
        #[arg(long)]
        audit: Option<bool>,
    },
}

fn main() -> Result<()> {
    expenses::init_tracing();

    let cli = Cli::parse();

    let paths = ExpensePaths::new()?;
    let mut settings = Settings::load_or_create(&paths)?;

    match cli.command {
        Some(Commands::Expense(cmd)) => {
            let mut tracker = ExpenseTracker::open(paths, &settings)?;
            if let LoadOutcome::Recovered { reason, preserved_as } = tracker.load_outcome() {
                eprintln!("Warning: expense data could not be read ({})", reason);
                if let Some(path) = preserved_as {
                    eprintln!("The unreadable file was moved to {}", path.display());
                }
            }
            handle_expense_command(&mut tracker, &settings, cmd)?;
        }
        Some(Commands::History { expense, limit }) => {
            let tracker = ExpenseTracker::open(paths, &settings)?;
            handle_history_command(tracker.storage(), expense.as_deref(), limit)?;
        }
        Some(Commands::Config {
            currency,
            default_period,
            default_sort,
            audit,
        }) => {
            let changed = currency.is_some()
                || default_period.is_some()
                || default_sort.is_some()
                || audit.is_some();

            if let Some(symbol) = currency {
                settings.currency_symbol = symbol;
            }
            if let Some(period) = default_period {
                settings.default_period = period;
            }
            if let Some(sort) = default_sort {
                settings.default_sort = sort;
            }
            if let Some(enabled) = audit {
                settings.audit_enabled = enabled;
            }
            if changed {
                settings.save(&paths)?;
                println!("Settings saved.");
                println!();
            }

            println!("Monthly Expenses Configuration");
            println!("==============================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Data file:      {}", paths.expenses_file().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Audit log:      {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            println!("  Currency:       {}", settings.currency_symbol);
            println!("  Default period: {}", settings.default_period.label());
            println!("  Default sort:   {}", settings.default_sort.label());
            println!("  Audit enabled:  {}", settings.audit_enabled);
        }
        None => {
            println!("Monthly Expenses - recurring costs at a glance");
            println!();
            println!("Run 'expenses --help' for usage information.");
            println!("Run 'expenses list' to see your expenses.");
        }
    }

    Ok(())
}
