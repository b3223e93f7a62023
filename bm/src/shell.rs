//! Shell integration snippets
//!
//! `bm install >> ~/.bashrc` defines short functions around the binary:
//! `cdf key` changes directory, `sdf key [comment]` bookmarks the working
//! directory, `ldf [key]` lists or resolves, `cpf files... key` copies into a
//! bookmarked directory.

use std::path::Path;

use crate::{APP_NAME, APP_VERSION};

/// Target shell for [`integration_script`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Shell {
    Bash,
    #[value(name = "powershell")]
    PowerShell,
}

impl Shell {
    /// PowerShell in Windows mode, Bash otherwise
    pub fn for_platform(windows: bool) -> Self {
        if windows { Shell::PowerShell } else { Shell::Bash }
    }
}

/// Functions wrapping the executable at `exe`, one per line
pub fn integration_script(shell: Shell, exe: &Path) -> String {
    let exe = exe.display();
    let lines = match shell {
        Shell::Bash => vec![
            format!("# Shortcuts for {} {} - for Bash:", APP_NAME, APP_VERSION),
            format!("alias directoryBookmarks='\"{}\"'", exe),
            r#"cdf() { cd "$(directoryBookmarks get "$1")"; }"#.to_string(),
            r#"sdf() { directoryBookmarks save "$PWD" "$@"; }"#.to_string(),
            r#"ldf() { directoryBookmarks list "$1"; }"#.to_string(),
            r#"cpf() { argCount=$#; cp "${@:1:$((argCount-1))}" "$(ldf "${!argCount}")"; }"#.to_string(),
        ],
        Shell::PowerShell => vec![
            format!("# Shortcuts for {} {} - for PowerShell:", APP_NAME, APP_VERSION),
            format!("function directoryBookmarks {{ & \"{}\" $args }}", exe),
            "function cdf { Set-Location -Path $(directoryBookmarks get $args) }".to_string(),
            "function sdf { directoryBookmarks save $($PWD.Path) @args }".to_string(),
            "function ldf { directoryBookmarks list $args }".to_string(),
            "function cpf { cp ($args[0..($args.Length - 2)]) -Destination (ldf $args[-1]) -Force }".to_string(),
        ],
    };
    let mut script = lines.join("\n");
    script.push('\n');
    script
}
