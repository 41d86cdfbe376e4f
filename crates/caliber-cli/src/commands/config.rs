use caliber_core::config::CaliberConfig;
use clap::Subcommand;

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Initialize ~/.caliber/ with default config and storage database
    Init,
    /// Show current configuration
    Show,
}

pub fn run(action: ConfigAction) -> anyhow::Result<()> {
    match action {
        ConfigAction::Init => {
            let home = CaliberConfig::init()?;
            let config = CaliberConfig::load()?;
            let db_path = config.resolved_db_path()?;

            caliber_db::open_db(&db_path)?;

            println!("Initialized caliber at {}", home.display());
            println!("  config: {}", CaliberConfig::config_path()?.display());
            println!("  database: {}", db_path.display());
            Ok(())
        }
        ConfigAction::Show => {
            let config = CaliberConfig::load()?;
            let toml_str = toml::to_string_pretty(&config)?;
            println!("{toml_str}");
            Ok(())
        }
    }
}
