use clap::Parser;
use sift_cli::{Cli, CliResult};

fn main() -> CliResult<()> {
    Cli::parse().run()
}
