//! Byte array shell
//!
//! Entry point for `bytearray-shell`. Parses CLI arguments, sets up
//! logging and options, and delegates to the Runtime for execution.

use bytearray_cli::config::resolve_options;
use bytearray_cli::logging::init_logging;
use bytearray_cli::repl::run_repl;
use bytearray_cli::{Cli, CliError, CliResult, Runtime};
use clap::Parser as ClapParser;
use std::io;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.log_level);

    if let Err(err) = run(cli) {
        match &err {
            CliError::ParseError(e) => eprintln!("Syntax Error: {}", e),
            CliError::HostError(e) if e.kind.is_fatal() => eprintln!("Fatal: {}", e),
            e => eprintln!("Error: {}", e),
        }
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> CliResult<()> {
    let options = resolve_options(&cli)?;
    let mut runtime = Runtime::new().with_options(options);
    let stdout = io::stdout();

    if let Some(file) = &cli.file {
        runtime.run_file(file, &mut stdout.lock())
    } else if let Some(commands) = &cli.eval {
        runtime.run_script(commands, &mut stdout.lock())
    } else if cli.repl {
        run_repl(&mut runtime)
    } else {
        // Default: show usage
        println!("bytearray shell v{}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Usage:");
        println!("  bytearray-shell --file <FILE>     Run a script of commands");
        println!("  bytearray-shell --eval <CMDS>     Run ';'-separated commands");
        println!("  bytearray-shell --repl            Start interactive REPL");
        println!();
        println!("Run 'bytearray-shell --help' for more options.");
        Ok(())
    }
}
