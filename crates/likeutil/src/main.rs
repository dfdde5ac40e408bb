//! The likeutil CLI

use clap::Parser;
use likeutil::args::Args;
use likeutil::cli;
use tracing::{debug, error};

fn main() {
    let args = Args::parse();

    enable_logging(&args);
    // Arguments can carry secrets, only the subcommand is logged
    debug!("command: {}", args.command.name());

    match cli::run(&args.command) {
        Ok(output) => println!("{output}"),
        Err(e) => {
            error!("{} failed: {e}", args.command.name());
            std::process::exit(-1);
        }
    }
}

fn enable_logging(args: &Args) {
    let mut builder = tracing_subscriber::fmt().compact().with_writer(std::io::stderr);

    if args.quiet {
        builder = builder.with_max_level(tracing::Level::ERROR);
    } else {
        match args.verbose {
            2.. => builder = builder.with_max_level(tracing::Level::TRACE),
            1 => builder = builder.with_max_level(tracing::Level::DEBUG),
            _ => builder = builder.with_max_level(tracing::Level::INFO),
        }
    }

    builder.init();
}
