//! Stores three rooms in a buffer and prints their dimensions.
//!
//! Logging goes to stderr and defaults to `warn`; set `RUST_LOG=debug` to
//! see each room as it is stored. Stdout carries only the room listing.

use std::io::{self, Write};
use std::process::ExitCode;

use roomvec::listing::{default_rooms, store_rooms, write_rooms};
use tracing::error;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> ExitCode {
    init_tracing();

    let rooms = match store_rooms(default_rooms()) {
        Ok(rooms) => rooms,
        Err(err) => {
            error!(%err, "could not store rooms");
            return ExitCode::FAILURE;
        }
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Err(err) = write_rooms(&rooms, &mut out).and_then(|()| out.flush()) {
        error!(%err, "could not print rooms");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
