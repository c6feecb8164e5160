//! protoc plugin generating Temporal Go SDK bindings.
//!
//! protoc runs this binary with a `CodeGeneratorRequest` on stdin and reads
//! a `CodeGeneratorResponse` from stdout:
//!
//! ```text
//! protoc --temporal-go_out=. --temporal-go_opt=paths=source_relative foo.proto
//! ```

use std::io::{Read, Write};

use clap::Parser;
use miette::miette;
use prost::Message;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use temporal_codegen::{build_response, decode_request, EXECUTABLE};

/// Environment variable holding the log filter, e.g. `debug`.
const LOG_ENV: &str = "PROTOC_GEN_TEMPORAL_GO_LOG";

#[derive(Parser)]
#[command(name = EXECUTABLE)]
#[command(version)]
#[command(about = "protoc plugin - generates Temporal workers, clients, workflow and activity helpers for Go")]
#[command(
    long_about = "protoc plugin - generates Temporal workers, clients, workflow and activity helpers for Go.\n\nNot meant to be run directly: protoc invokes it for --temporal-go_out and\nexchanges a CodeGeneratorRequest/CodeGeneratorResponse over stdin/stdout."
)]
struct Cli {}

fn main() -> miette::Result<()> {
    let _cli = Cli::parse();
    init_tracing();

    let mut input = Vec::new();
    std::io::stdin()
        .read_to_end(&mut input)
        .map_err(|e| miette!("Failed to read CodeGeneratorRequest from stdin: {}", e))?;

    let request = decode_request(&input)?;
    let response = build_response(&request);

    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(&response.encode_to_vec())
        .and_then(|()| stdout.flush())
        .map_err(|e| miette!("Failed to write CodeGeneratorResponse to stdout: {}", e))?;

    Ok(())
}

/// Logs go to stderr; stdout carries the response.
fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().with_writer(std::io::stderr))
        .init();
}
