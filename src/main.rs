//! CLI entry point for the concurrent backtracking maze solver

use clap::Parser;
use log::info;
use mazetrace::io::cli::{Cli, MazeRunner};

fn main() -> mazetrace::Result<()> {
    let cli = Cli::parse();
    env_logger::Builder::new()
        .filter_level(cli.log_level())
        .parse_default_env()
        .init();

    let mut runner = MazeRunner::new(cli);
    let report = runner.run()?;
    info!(
        "Solution of {} cells after {} dead ends written to {}",
        report.path_length,
        report.dead_ends,
        report.trace_path.display()
    );
    Ok(())
}
