//! Binary entry point for `project-init`.

use std::process;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();

    if let Err(e) = project_init::run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
