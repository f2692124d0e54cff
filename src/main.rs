use anyhow::Result;
use clap::Parser;
use log::*;

mod commands;
mod reporting;

use commands::{Command, HideCommands};

/// Hide and reveal files.
#[derive(Parser, Debug)]
#[command(name = "hidefile")]
struct HideCLI {
    /// Suppress informational output
    #[arg(short = 'q', long = "quiet")]
    quiet: bool,
    /// Increase logging verbosity (can be repeated)
    #[arg(short='v', long="verbose", action=clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: HideCommands,
}

impl HideCLI {
    fn init_logging(&self) -> Result<()> {
        let mut verbose: usize = 2;
        if self.verbose > 0 {
            verbose += self.verbose as usize;
        } else if self.quiet {
            verbose -= 1;
        }

        stderrlog::new()
            .module(module_path!())
            .verbosity(verbose)
            .init()?;
        Ok(())
    }
}

fn main() -> Result<()> {
    let cli = HideCLI::parse();
    cli.init_logging()?;
    debug!("starting hidefile");
    cli.command.run()?;
    Ok(())
}
