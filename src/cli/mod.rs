//! CLI argument parsing for hedgehog-tui.

mod args;

pub use args::{parse_args, CliConfig, VERSION};
