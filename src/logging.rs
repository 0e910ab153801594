//! Logging setup on the `log` facade with an `env_logger` backend.
//!
//! Level selection, in priority order:
//! 1. `RUST_LOG`, when set
//! 2. CLI flags: `--quiet` (errors only), `-v` (debug), `-vv` (trace)
//! 3. default: info

use std::io::Write;

use env_logger::Builder;
use log::LevelFilter;

/// Initialize the logger. Call once, before any log output.
///
/// `verbose` is the `-v` count (0 = info, 1 = debug, 2+ = trace); `quiet`
/// limits output to errors. `RUST_LOG` overrides both when present.
pub fn init_logging(verbose: u8, quiet: bool) {
    let mut builder = Builder::new();

    if std::env::var("RUST_LOG").is_ok() {
        builder.parse_default_env();
    } else {
        builder.filter_level(determine_level(verbose, quiet));
    }

    if cfg!(debug_assertions) || verbose > 0 {
        builder.format(|buf, record| {
            writeln!(
                buf,
                "[{}] {}: {}",
                record.level(),
                record.module_path().unwrap_or("?"),
                record.args()
            )
        });
    } else {
        builder.format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()));
    }

    builder.init();
}

fn determine_level(verbose: u8, quiet: bool) -> LevelFilter {
    if quiet {
        LevelFilter::Error
    } else {
        match verbose {
            0 => LevelFilter::Info,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}
