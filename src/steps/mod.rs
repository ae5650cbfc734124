pub mod init;

pub use init::{InitArgs, Report, execute, materialize};
