use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use taskpad::commands::{cmd_add, cmd_list, cmd_remove, cmd_stats, cmd_toggle};
use taskpad::error::TaskError;
use taskpad::repository::TaskRepository;
use taskpad::service::TaskService;
use taskpad::storage::{self, JsonTaskRepository, SqliteTaskRepository};

#[derive(Parser)]
#[command(name = "taskpad")]
#[command(about = "Simple task manager with JSON or SQLite storage", long_about = None)]
struct Cli {
    /// Storage backend
    #[arg(short, long, value_enum, default_value = "json")]
    backend: Backend,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Copy, Clone, ValueEnum)]
enum Backend {
    Json,
    Sqlite,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a new task
    Add {
        /// Task title (quoted if it has spaces)
        title: String,
        /// Priority: 0 = low, 1 = medium, 2 = high
        #[arg(short, long, default_value_t = 1)]
        priority: u8,
        /// Due date in YYYY-MM-DD
        #[arg(short, long)]
        due: Option<String>,
    },
    /// List tasks
    List {
        /// Status filter (all, active, completed)
        #[arg(short, long, default_value = "all")]
        status: String,
        /// Sort key (created_at, priority, due_date)
        #[arg(long, default_value = "created_at")]
        sort: String,
    },
    /// Toggle completion of a task
    Toggle { id: String },
    /// Remove a task
    Remove { id: String },
    /// Show task statistics
    Stats,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    if let Err(e) = run(Cli::parse()) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), TaskError> {
    let repo: Box<dyn TaskRepository> = match cli.backend {
        Backend::Json => Box::new(JsonTaskRepository::new(storage::store_path(
            storage::TASKS_FILE,
        ))),
        Backend::Sqlite => Box::new(SqliteTaskRepository::open(&storage::store_path(
            storage::TASKS_DB_FILE,
        ))?),
    };
    let service = TaskService::new(repo);

    match cli.command {
        Commands::Add { title, priority, due } => {
            cmd_add(&service, &title, priority, due.as_deref())?;
        }
        Commands::List { status, sort } => cmd_list(&service, &status, &sort)?,
        Commands::Toggle { id } => cmd_toggle(&service, &id)?,
        Commands::Remove { id } => cmd_remove(&service, &id)?,
        Commands::Stats => cmd_stats(&service)?,
    }

    service.close()
}
