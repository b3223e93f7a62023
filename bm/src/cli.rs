//! CLI argument parsing for dirbookmarks

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::shell::Shell;

#[derive(Parser, Debug)]
#[command(name = "bm")]
#[command(author, version, about = "Directory bookmarks for fast shell navigation", long_about = None)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level (TRACE, DEBUG, INFO, WARN, ERROR)
    #[arg(short = 'l', long = "log-level", global = true)]
    pub log_level: Option<String>,

    /// Path to the bookmark store (default: ~/.directory-bookmarks.csv)
    #[arg(short, long, global = true)]
    pub store: Option<PathBuf>,

    /// Use Linux paths even on Windows (no slash conversion)
    #[arg(long, global = true)]
    pub linux: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List all bookmarks, or print the directory of one
    #[command(visible_alias = "l")]
    List {
        /// Bookmark key, optionally followed by a sub-path (key/dir)
        key: Option<String>,
    },

    /// Print the directory of a bookmark (default: home)
    #[command(visible_alias = "g")]
    Get {
        /// Bookmark key, optionally followed by a sub-path (key/dir)
        key: Option<String>,
    },

    /// Save a directory under a key ("." is the current directory)
    #[command(visible_alias = "s")]
    Save {
        /// Directory to bookmark
        #[arg(required = true)]
        directory: String,

        /// Bookmark key
        #[arg(required = true)]
        key: String,

        /// Optional comment words
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        comment: Vec<String>,
    },

    /// Delete a bookmark
    #[command(visible_aliases = ["r", "remove"])]
    Delete {
        /// Bookmark key
        #[arg(required = true)]
        key: String,
    },

    /// List the keys pointing at a directory (default: current directory)
    #[command(visible_alias = "b")]
    Bookmarks {
        /// Directory to look up
        directory: Option<String>,
    },

    /// Remove bookmarks whose directory no longer exists
    #[command(visible_alias = "f")]
    Fix,

    /// Print shell functions (cdf, sdf, ldf, cpf) for your shell profile
    #[command(visible_alias = "i")]
    Install {
        /// Target shell (default: by platform)
        #[arg(long, value_enum)]
        shell: Option<Shell>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_save_with_comment() {
        let cli = Cli::try_parse_from(["bm", "save", ".", "proj", "main", "checkout"]).unwrap();
        match cli.command {
            Command::Save {
                directory,
                key,
                comment,
            } => {
                assert_eq!(directory, ".");
                assert_eq!(key, "proj");
                assert_eq!(comment, vec!["main", "checkout"]);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_comment_may_start_with_hyphen() {
        let cli = Cli::try_parse_from(["bm", "save", ".", "proj", "-wip", "--draft"]).unwrap();
        match cli.command {
            Command::Save { comment, .. } => assert_eq!(comment, vec!["-wip", "--draft"]),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_short_aliases() {
        let cli = Cli::try_parse_from(["bm", "g", "proj/src"]).unwrap();
        assert!(matches!(cli.command, Command::Get { key: Some(ref k) } if k == "proj/src"));

        let cli = Cli::try_parse_from(["bm", "r", "proj"]).unwrap();
        assert!(matches!(cli.command, Command::Delete { .. }));

        let cli = Cli::try_parse_from(["bm", "f"]).unwrap();
        assert!(matches!(cli.command, Command::Fix));
    }

    #[test]
    fn test_global_flags() {
        let cli = Cli::try_parse_from(["bm", "list", "--linux", "--store", "/tmp/b.csv"]).unwrap();
        assert!(cli.linux);
        assert_eq!(cli.store, Some(PathBuf::from("/tmp/b.csv")));
    }

    #[test]
    fn test_install_shell() {
        let cli = Cli::try_parse_from(["bm", "install", "--shell", "powershell"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Install {
                shell: Some(Shell::PowerShell)
            }
        ));
    }
}
