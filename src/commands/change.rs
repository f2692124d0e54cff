//! hide and reveal commands

use std::path::{Path, PathBuf};

use anyhow::anyhow;
use clap::Args;
use log::*;

use hidefile::{parse_path, HideError};

use crate::reporting::{print_change, ResultNote};

use super::{ChangeFlags, Command};

/// Hide files by adding a dot prefix and setting the hidden attribute.
#[derive(Debug, Args)]
#[command(name = "hide")]
pub struct HideCmd {
    #[command(flatten)]
    flags: ChangeFlags,

    /// The paths to hide.
    #[arg(name = "PATH", required = true)]
    paths: Vec<PathBuf>,
}

/// Reveal files by removing the dot prefix and clearing the hidden attribute.
#[derive(Debug, Args)]
#[command(name = "reveal")]
pub struct RevealCmd {
    #[command(flatten)]
    flags: ChangeFlags,

    /// The paths to reveal.
    #[arg(name = "PATH", required = true)]
    paths: Vec<PathBuf>,
}

impl Command for HideCmd {
    fn run(&self) -> anyhow::Result<()> {
        change_all(&self.paths, &self.flags, true)
    }
}

impl Command for RevealCmd {
    fn run(&self) -> anyhow::Result<()> {
        change_all(&self.paths, &self.flags, false)
    }
}

fn change_one(path: &Path, flags: &ChangeFlags, hidden: bool) -> Result<PathBuf, HideError> {
    if flags.dry_run {
        Ok(parse_path(path).to_path(hidden))
    } else if hidden {
        hidefile::hide(path)
    } else {
        hidefile::reveal(path)
    }
}

fn change_all(paths: &[PathBuf], flags: &ChangeFlags, hidden: bool) -> anyhow::Result<()> {
    let action = if hidden { "hiding" } else { "revealing" };
    let mut n_ok = 0;
    let mut n_failed = 0;
    for path in paths {
        debug!("{} {}", action, path.display());
        match change_one(path, flags, hidden).with_path_action(action, path) {
            Ok(target) => {
                print_change(path, &target);
                n_ok += 1;
            }
            Err(e) if flags.keep_going => {
                warn!("{}", e);
                n_failed += 1;
            }
            Err(e) => return Err(e),
        }
    }

    info!("{}: {} succeeded, {} failed", action, n_ok, n_failed);
    if n_failed > 0 {
        Err(anyhow!("{} of {} paths failed", n_failed, paths.len()))
    } else {
        Ok(())
    }
}
