//! Entrypoint: logging init, CLI parse, and one interactive garage session.
use anyhow::Result;
use clap::Parser;
use std::io;

mod cli;
mod factory;
mod session;
mod vehicle;

use cli::RootArgs;
use session::SessionOptions;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = RootArgs::parse();
    let options = SessionOptions {
        lenient_numbers: args.lenient_numbers,
        json_listing: args.json,
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut input = stdin.lock();
    let mut output = stdout.lock();
    session::run(&mut input, &mut output, options)?;
    Ok(())
}
