//! CLI argument parsing and configuration.

use std::io;
use std::path::PathBuf;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Configuration from CLI arguments
#[derive(Debug)]
pub struct CliConfig {
    pub profile_path: Option<PathBuf>,
    /// Animation frame interval override in milliseconds.
    pub frame_ms: Option<u64>,
}

/// Print usage information
pub fn print_usage() {
    eprintln!("Hedgehog TUI - a virtual pet hedgehog for the terminal");
    eprintln!();
    eprintln!("Usage: hedgehog-tui [profile.json] [OPTIONS]");
    eprintln!();
    eprintln!("Arguments:");
    eprintln!("  [profile.json]  Path to a pet profile file");
    eprintln!("                  If omitted, ./hedgehog.json and the user config");
    eprintln!("                  directory are tried before built-in defaults");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --frame-ms <N>  Animation frame interval in milliseconds (default: 250)");
    eprintln!("  -h, --help      Show this help message");
    eprintln!("  -V, --version   Show version");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  hedgehog-tui                     # Default pet");
    eprintln!("  hedgehog-tui pets/sonic.json     # Named pet profile");
    eprintln!("  hedgehog-tui --frame-ms 100      # Faster animations");
}

/// Parse CLI arguments and return configuration
pub fn parse_args() -> io::Result<CliConfig> {
    parse_from(std::env::args().skip(1).collect())
}

fn parse_from(args: Vec<String>) -> io::Result<CliConfig> {
    let mut profile_path: Option<PathBuf> = None;
    let mut frame_ms: Option<u64> = None;

    let mut i = 0;
    while i < args.len() {
        let arg = &args[i];
        if arg == "-h" || arg == "--help" {
            print_usage();
            std::process::exit(0);
        } else if arg == "-V" || arg == "--version" {
            println!("hedgehog-tui {}", VERSION);
            std::process::exit(0);
        } else if arg == "--frame-ms" {
            i += 1;
            if i >= args.len() {
                print_usage();
                return Err(io::Error::new(
                    io::ErrorKind::InvalidInput,
                    "Missing value for --frame-ms",
                ));
            }
            let value: u64 = args[i].parse().map_err(|_| {
                io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!("Invalid frame-ms value: {}", args[i]),
                )
            })?;
            if value == 0 {
                return Err(io::Error::new(
                    io::ErrorKind::InvalidInput,
                    "frame-ms must be at least 1",
                ));
            }
            frame_ms = Some(value);
            i += 1;
        } else if !arg.starts_with('-') {
            profile_path = Some(PathBuf::from(arg));
            i += 1;
        } else {
            print_usage();
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("Unknown argument: {}", arg),
            ));
        }
    }

    Ok(CliConfig {
        profile_path,
        frame_ms,
    })
}
