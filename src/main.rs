use anyhow::Result;
use clap::Parser;

use sprout::bootstrap;
use sprout::config::Config;
use sprout::forge::GitHubClient;

/// No flags or subcommands: a run is fully determined by the constants in
/// `config` and the token environment variable.
#[derive(Parser)]
#[command(
    name = "sprout",
    version = env!("CARGO_PKG_VERSION"),
    about = "Bootstrap a new GitHub repository: create the remote, scaffold and push the working tree, install commit-convention labels",
    long_about = None
)]
struct Cli {}

fn main() -> Result<()> {
    let _cli = Cli::parse();

    let config = Config::from_env();
    let forge = GitHubClient::new(&config.token)?;
    let root = std::env::current_dir()?;

    bootstrap::run(&config, &forge, &root)
}
