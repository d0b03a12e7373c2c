//! port-type-filter entry point.
//!
//! Prints the telemetry port type filter for the port types given on the
//! command line. Diagnostics go to stderr.

use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, error};

use xdr_utils::logging::init_logging;
use xdr_utils::{build_filter, PortType};

/// Build a telemetry port type filter
#[derive(Parser, Debug)]
#[command(name = "port-type-filter")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Port type names (legacy, plane, aggregated), case-insensitive
    #[arg(value_name = "PORT_TYPES", default_values_t = ["legacy".to_string(), "aggregated".to_string(), "plane".to_string()])]
    port_types: Vec<String>,

    /// Log level (trace, debug, info, warn, error); RUST_LOG overrides it
    #[arg(short = 'l', long, default_value = "warn")]
    log_level: String,

    /// List supported port types and their codes
    #[arg(long)]
    list: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    init_logging(&args.log_level);

    if args.list {
        for port_type in PortType::ALL {
            println!("{}\t{}", port_type, port_type.code());
        }
        return ExitCode::SUCCESS;
    }

    debug!("Building filter for {:?}", args.port_types);

    let filter = build_filter(&args.port_types);
    if filter.is_empty() {
        error!("No filter built from {:?}", args.port_types);
        return ExitCode::FAILURE;
    }

    println!("{}", filter);
    ExitCode::SUCCESS
}
