pub mod config;
pub mod delete;
pub mod info;
pub mod list;
pub mod render;
pub mod submit;

use std::path::PathBuf;

use caliber_core::clock::SystemClock;
use caliber_core::config::CaliberConfig;
use caliber_db::{Origin, SqliteStore};
use caliber_widget::{ReviewRepository, ReviewStorage, ReviewWidget};
use clap::{Args, Subcommand};

#[derive(Args)]
pub struct GlobalArgs {
    /// Origin the review store is scoped to (overrides config)
    #[arg(long, global = true)]
    origin: Option<String>,
    /// Storage database file (overrides config)
    #[arg(long, global = true)]
    db: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Initialize and inspect Caliber configuration
    Config {
        #[command(subcommand)]
        action: config::ConfigAction,
    },
    /// Show the store the reviews live in
    Info,
    /// Submit a new review
    Submit(submit::SubmitArgs),
    /// List stored reviews, newest first
    List,
    /// Print the review list markup
    Render(render::RenderArgs),
    /// Delete a review (admin only)
    Delete(delete::DeleteArgs),
}

pub fn run(global: GlobalArgs, cmd: Command) -> anyhow::Result<()> {
    match cmd {
        Command::Config { action } => config::run(action),
        Command::Info => info::run(&global),
        Command::Submit(args) => submit::run(&global, args),
        Command::List => list::run(&global),
        Command::Render(args) => render::run(&global, args),
        Command::Delete(args) => delete::run(&global, args),
    }
}

/// Open the widget against the configured store, applying command-line overrides.
pub fn open_widget(global: &GlobalArgs) -> anyhow::Result<ReviewWidget<SqliteStore, SystemClock>> {
    let config = CaliberConfig::load()?;
    let origin = Origin::parse(global.origin.as_deref().unwrap_or(&config.origin))?;
    let db_path = match &global.db {
        Some(path) => path.clone(),
        None => config.resolved_db_path()?,
    };

    tracing::debug!(%origin, db = %db_path.display(), "opening review store");
    let store = SqliteStore::open(&db_path, origin)?;
    let repository = ReviewRepository::new(ReviewStorage::new(store, config.storage_key));
    Ok(ReviewWidget::new(repository, SystemClock))
}
