use crate::steps::init::InitArgs;
use clap::Parser;

/// Scaffold a canonical src/ and tests/ layout for a library, CLI, or service project.
#[derive(Parser)]
#[command(name = "project-init", version, about)]
pub struct InitCli {
    #[command(flatten)]
    pub args: InitArgs,
}
