//! Server binary exposing the summarization API and web UI.
//! Run with: `cargo run --bin condense-server`

use std::process::ExitCode;

use condense::start_condense;

fn main() -> ExitCode {
    start_condense::run()
}
