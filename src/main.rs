// Copyright (c) 2025 Siteconf Project. All rights reserved.
// Released under the GPL-3.0 license as described in the file LICENSE.

use clap::Parser;

use siteconf::cli::{init::InitCommand, resolve::ResolveCommand, show::ShowCommand};

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand)]
enum Command {
    /// Create a starter configuration file.
    #[command(visible_alias = "i")]
    Init(InitCommand),

    /// Print the effective configuration as the engine will see it.
    #[command(visible_alias = "s")]
    Show(ShowCommand),

    /// Resolve the article permalink templates for a date and slug.
    #[command(visible_alias = "r")]
    Resolve(ResolveCommand),
}

fn main() -> eyre::Result<()> {
    let cli = Cli::parse();
    match &cli.command {
        Command::Init(command) => siteconf::cli::init::init(command)?,
        Command::Show(command) => siteconf::cli::show::show(command)?,
        Command::Resolve(command) => siteconf::cli::resolve::resolve(command)?,
    };
    Ok(())
}
