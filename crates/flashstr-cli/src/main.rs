mod cli;
mod commands;

use std::io::{self, Write};

use cli::{DumpParams, InfoParams, build_cli};

fn main() {
    init_logging();
    let matches = build_cli().get_matches();

    let mut stdout = io::stdout().lock();
    let result = match matches.subcommand() {
        Some(("info", m)) => {
            let params = InfoParams::from_matches(m);
            commands::info::run(params.into(), &mut stdout)
        }
        Some(("dump", m)) => {
            let params = DumpParams::from_matches(m);
            commands::dump::run(params.into(), &mut stdout)
        }
        _ => unreachable!("clap should have caught this"),
    };

    if let Err(err) = result.and_then(|()| Ok(stdout.flush()?)) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

/// Log to stderr, filtered by `RUST_LOG` (default `warn`).
fn init_logging() {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}
