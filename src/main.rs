mod cli;
mod commands;
mod resource;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::generate;
use cli::{Cli, Command, ConnectionArgs};
use std::io;

/// Global context for the application
pub struct Context {
    pub verbose: u8,
    pub quiet: bool,
    pub check: bool,
    pub strict: bool,
    pub connection: ConnectionArgs,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    let log_level = match cli.verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };

    env_logger::Builder::new()
        .filter_level(if cli.quiet {
            log::LevelFilter::Error
        } else {
            log_level
        })
        .format_timestamp(None)
        .init();

    let ctx = Context {
        verbose: cli.verbose,
        quiet: cli.quiet,
        check: cli.check,
        strict: cli.strict,
        connection: cli.connection,
    };

    match cli.command {
        Command::Vlan(args) => commands::vlan::run(&ctx, args),
        Command::Switchport(args) => commands::switchport::run(&ctx, args),
        Command::Interface(args) => commands::interface::run(&ctx, args),
        Command::IpInterface(args) => commands::ipinterface::run(&ctx, args),
        Command::Completions { shell } => {
            generate(shell, &mut Cli::command(), "eosctl", &mut io::stdout());
            Ok(())
        }
    }
}
