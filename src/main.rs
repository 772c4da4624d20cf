use anyhow::Result;
use clap::{Parser, Subcommand};

use paisa::cli::{
    handle_analysis_command, handle_budget_command, handle_category_command,
    handle_expense_command, AnalysisCommands, BudgetCommands, CategoryCommands, ExpenseCommands,
};
use paisa::config::{PaisaPaths, Settings};
use paisa::store::RecordStore;
use paisa::tui;

#[derive(Parser)]
#[command(
    name = "paisa",
    version,
    about = "Track budgets and expenses from the terminal"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive TUI (default when no command is given)
    Tui,

    /// Manage budgets
    Budget {
        #[command(subcommand)]
        command: BudgetCommands,
    },

    /// Manage expenses
    Expense {
        #[command(subcommand)]
        command: ExpenseCommands,
    },

    /// Manage categories
    Category {
        #[command(subcommand)]
        command: CategoryCommands,
    },

    /// Compare budgets against expenses
    Analysis {
        #[command(subcommand)]
        command: AnalysisCommands,
    },

    /// Show recent changes from the audit log
    Audit {
        /// Number of entries to show
        #[arg(long, default_value_t = 20)]
        limit: usize,
    },

    /// Initialize the data directory and default settings
    Init,

    /// Show the current configuration
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = PaisaPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    let store = RecordStore::new(paths.clone())?;
    store.load_all()?;

    match cli.command.unwrap_or(Commands::Tui) {
        Commands::Tui => tui::run_tui(&store, &settings, &paths)?,
        Commands::Budget { command } => handle_budget_command(&store, &settings, command)?,
        Commands::Expense { command } => handle_expense_command(&store, &settings, command)?,
        Commands::Category { command } => handle_category_command(&store, command)?,
        Commands::Analysis { command } => handle_analysis_command(&store, &settings, command)?,
        Commands::Audit { limit } => print_audit(&store, limit)?,
        Commands::Init => init(&paths, &settings)?,
        Commands::Config => print_config(&paths, &settings),
    }

    Ok(())
}

fn print_audit(store: &RecordStore, limit: usize) -> Result<()> {
    let entries = store.audit().read_recent(limit)?;
    if entries.is_empty() {
        println!("No audit entries yet.");
        return Ok(());
    }

    for entry in entries {
        println!("{}", entry.format_human_readable());
    }
    Ok(())
}

fn init(paths: &PaisaPaths, settings: &Settings) -> Result<()> {
    if paths.is_initialized() {
        println!("Already initialized at {}", paths.base_dir().display());
        return Ok(());
    }

    paths.ensure_directories()?;
    let mut settings = settings.clone();
    settings.setup_completed = true;
    settings.save(paths)?;

    println!("Initialized data directory at {}", paths.base_dir().display());
    Ok(())
}

fn print_config(paths: &PaisaPaths, settings: &Settings) {
    println!("Data directory:  {}", paths.base_dir().display());
    println!("Currency symbol: {}", settings.currency_symbol);
    println!("Date format:     {}", settings.date_format);
    println!("Setup completed: {}", settings.setup_completed);
}
