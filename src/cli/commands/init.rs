use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (kept if present, unless --force)
///  - the data directory
pub fn handle(cli: &Cli) -> AppResult<()> {
    let Commands::Init { force } = &cli.command else {
        return Ok(());
    };

    let path = cli.config.clone().unwrap_or_else(Config::config_file);

    println!("⚙️  Initializing rFlightWatch…");
    let written = Config::init_all(&path, cli.data_dir.clone(), *force)?;

    if written {
        success(format!("Config file: {}", path.display()));
    } else {
        info(format!(
            "Config file already exists, left untouched: {}",
            path.display()
        ));
    }

    let mut cfg = Config::load(Some(&path))?;
    if let Some(dir) = &cli.data_dir {
        cfg.data_dir = Some(dir.clone());
    }
    println!("🗄️  Data dir   : {}", cfg.data_dir().display());

    println!("🎉 rFlightWatch initialization completed!");
    Ok(())
}
