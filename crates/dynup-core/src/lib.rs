// # dynup-core
//
// Core library for the dynup dynamic DNS update client.
//
// A run is a strictly linear sequence with a single owner at each step:
//
// 1. `Config::load` decodes the five-field JSON record from disk
// 2. `lookup::fetch_ip` asks an HTTP service for the public IPv4 address
// 3. `update::push_ip` submits that address to the provider endpoint
//
// There is no retry, no persisted state between runs, and no concurrency;
// the caller sequences the three steps once and reports the first error.

pub mod config;
pub mod error;
pub mod lookup;
pub mod update;

pub use config::Config;
pub use error::{Error, Result};
