//! # utilkit-cli
//!
//! Command line access to JSON documents through `utilkit-json-store`.
//!
//! ## Usage
//!
//! ```bash
//! utilkit init config.json
//! utilkit set config.json "server / port" 8080
//! utilkit set config.json "server / name" main      # not valid JSON, stored as a string
//! utilkit get config.json "server / port"
//! utilkit --indent 2 show config.json
//! ```
//!
//! Logging goes through `env_logger`; set `RUST_LOG=debug` to see every load and save.

mod commands;

pub use commands::{parse_value, run, Cli, CliError, Command};
