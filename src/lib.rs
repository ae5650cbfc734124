#![doc = include_str!("../README.md")]

pub mod cleanup;
pub mod cli;
pub mod config;
pub mod error;
pub mod fs;
pub mod hooks;
pub mod layout;
pub mod steps;
pub mod tree;
pub mod verify;

pub use error::*;
pub use layout::ProjectType;
pub use steps::{Report, materialize};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn run() -> Result<()> {
    use clap::Parser;

    let cli = cli::InitCli::parse();
    steps::execute(cli.args)
}
