use clap::{Args, Subcommand};
use enum_dispatch::*;

mod change;
mod status;

/// Interface for hidefile commands.
#[enum_dispatch]
pub trait Command {
    fn run(&self) -> anyhow::Result<()>;
}

#[derive(Subcommand, Debug)]
#[enum_dispatch(Command)]
pub enum HideCommands {
    Hide(change::HideCmd),
    Reveal(change::RevealCmd),
    Status(status::StatusCmd),
}

#[derive(Args, Debug)]
struct ChangeFlags {
    /// Print the new paths without renaming anything
    #[arg(short = 'n', long = "dry-run")]
    dry_run: bool,

    /// Continue with the remaining paths after a failure
    #[arg(short = 'k', long = "keep-going")]
    keep_going: bool,
}
