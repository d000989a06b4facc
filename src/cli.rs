//! CLI argument parsing for the garage session.
//!
//! The CLI is intentionally thin: the whole program is one interactive menu
//! session, so the flags only tune how that session parses and prints.
use clap::Parser;

/// Root CLI entrypoint for the interactive garage session.
#[derive(Parser, Debug)]
#[command(
    name = "garage",
    version,
    about = "Interactive vehicle garage built on per-variant factories",
    after_help = "Menu options:\n  1  Create a car (brand, model, fuel type)\n  2  Create a motorcycle (type, engine capacity)\n  3  Create a truck (load capacity, axle count)\n  4  Create a bus (seat count, route)\n  5  List all vehicles created this session\n  6  Exit\n\nExamples:\n  garage\n  garage --lenient-numbers\n  garage --json\n  RUST_LOG=debug garage"
)]
pub struct RootArgs {
    /// Re-prompt on malformed integer input instead of aborting the session
    #[arg(long)]
    pub lenient_numbers: bool,

    /// Emit the vehicle listing as a JSON array instead of prose
    #[arg(long)]
    pub json: bool,
}
