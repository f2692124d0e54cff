//! hidden-state reporting command

use std::path::PathBuf;

use anyhow::anyhow;
use clap::Args;
use log::*;

use hidefile::{HiddenAttribute, PlatformAttribute};

use crate::reporting::{print_status, ResultNote};

use super::Command;

/// Show whether paths are hidden.
#[derive(Debug, Args)]
#[command(name = "status")]
pub struct StatusCmd {
    /// The paths to inspect.
    #[arg(name = "PATH", required = true)]
    paths: Vec<PathBuf>,
}

impl Command for StatusCmd {
    fn run(&self) -> anyhow::Result<()> {
        let mut n_failed = 0;
        for path in &self.paths {
            match hidefile::stat(path).with_path_action("inspecting", path) {
                Ok(state) => print_status(path, &state, PlatformAttribute::APPLIES),
                Err(e) => {
                    error!("{}", e);
                    n_failed += 1;
                }
            }
        }

        if n_failed > 0 {
            Err(anyhow!("could not inspect {} paths", n_failed))
        } else {
            Ok(())
        }
    }
}
