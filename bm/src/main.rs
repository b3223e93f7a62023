use std::path::{Path, PathBuf};

use clap::Parser;
use colored::*;
use eyre::{Context, Result, bail};
use log::{LevelFilter, debug};

use dirbookmarks::cli::{Cli, Command};
use dirbookmarks::config::{Config, Platform, StoreConfig};
use dirbookmarks::{BookmarkStore, HOME_MARK, Shell, integration_script, prune_missing, reverse_lookup};

fn setup_logging(cli_log_level: Option<&str>, config_log_level: Option<&str>) -> Result<()> {
    // Priority: --log-level > config file > RUST_LOG > WARN
    let mut builder = env_logger::Builder::new();
    builder.filter_level(LevelFilter::Warn);
    builder.parse_default_env();

    if let Some(s) = cli_log_level.or(config_log_level) {
        let level = match s.to_uppercase().as_str() {
            "TRACE" => LevelFilter::Trace,
            "DEBUG" => LevelFilter::Debug,
            "INFO" => LevelFilter::Info,
            "WARN" | "WARNING" => LevelFilter::Warn,
            "ERROR" => LevelFilter::Error,
            "OFF" => LevelFilter::Off,
            _ => {
                eprintln!("Warning: Unknown log-level '{}', defaulting to WARN", s);
                LevelFilter::Warn
            }
        };
        builder.filter_level(level);
    }

    builder.try_init().context("Logger already initialized")?;
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_log_level = Config::load_log_level(cli.config.as_ref());
    setup_logging(cli.log_level.as_deref(), config_log_level.as_deref()).context("Failed to setup logging")?;

    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;
    let platform = if cli.linux { Platform::Linux } else { config.platform };
    let store_config = StoreConfig::detect(platform)?;
    let store_path: PathBuf = match &cli.store {
        Some(path) => path.clone(),
        None => config.store_path(Path::new(&store_config.home_dir)),
    };
    let store = BookmarkStore::open(&store_path, store_config);

    debug!("main: dispatching {:?}", cli.command);
    match cli.command {
        Command::List { key } => match key.filter(|k| !k.is_empty()) {
            Some(key) => cmd_get(&store, &key),
            None => cmd_list(&store),
        },
        Command::Get { key } => {
            let key = key.filter(|k| !k.is_empty());
            cmd_get(&store, key.as_deref().unwrap_or(HOME_MARK))
        }
        Command::Save {
            directory,
            key,
            comment,
        } => {
            store
                .save(&directory, &key, &comment)
                .context(format!("Failed to save bookmark '{}'", key))?;
            println!("{} Saved bookmark: {}", "✓".green(), key.cyan());
            Ok(())
        }
        Command::Delete { key } => {
            store
                .delete(&key)
                .context(format!("Failed to delete bookmark '{}'", key))?;
            println!("{} Deleted bookmark: {}", "✓".green(), key.cyan());
            Ok(())
        }
        Command::Bookmarks { directory } => {
            let directory = directory.unwrap_or_else(|| store.config().current_dir.clone());
            for key in reverse_lookup(&store, &directory)? {
                println!("{}", key);
            }
            Ok(())
        }
        Command::Fix => {
            for pruned in prune_missing(&store).context("Failed to remove missing directories")? {
                println!("{} {}\t{}", "Removed:".red(), pruned.key, pruned.directory);
            }
            Ok(())
        }
        Command::Install { shell } => {
            let exe = std::env::current_exe().context("Unable to locate the running executable")?;
            let shell = shell.unwrap_or_else(|| Shell::for_platform(store.config().windows));
            print!("{}", integration_script(shell, &exe));
            Ok(())
        }
    }
}

fn cmd_list(store: &BookmarkStore) -> Result<()> {
    for line in store.list_all()? {
        println!("{}", line);
    }
    Ok(())
}

fn cmd_get(store: &BookmarkStore, key: &str) -> Result<()> {
    match store.find(key)? {
        Some(directory) => {
            println!("{}", directory);
            Ok(())
        }
        None => bail!("Bookmark [{}] has no directory.", key),
    }
}
