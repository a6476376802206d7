//! Driftcheck CLI: the `driftcheck` command.

mod cli;
mod commands;

use clap::Parser;
use cli::Cli;

fn main() {
    let cli = Cli::parse();

    // Verdict-to-exit-code mapping happens here and nowhere else.
    let code = commands::drift_check::run(commands::drift_check::Args {
        repo_root: cli.repo_root,
        paths: cli.paths,
        schema_patterns: cli.schema_patterns,
        contract_patterns: cli.contract_patterns,
        json: cli.json,
    });
    std::process::exit(code);
}
