// # dynup - one-shot dynamic DNS update
//
// Thin integration layer over dynup-core. This binary is responsible
// for:
// 1. Parsing the command line
// 2. Initializing tracing and the runtime
// 3. Sequencing one load -> resolve -> submit run
//
// All protocol behavior lives in dynup-core; nothing here retries,
// loops, or schedules. Run it from cron or a systemd timer.
//
// ## Exit status
//
// - 0: the DNS record was updated
// - 1: any failure; one `Error: <stage>: <cause>` line on stderr
//
// ## Configuration
//
// A JSON file selected with `-c`/`--config`, defaulting to
// `./config.json`:
//
// ```json
// {
//   "url_check_ip":  "https://api.ipify.org",
//   "url_update_ip": "https://dyn.example.net/update",
//   "user":          "bob",
//   "pass":          "secret",
//   "hostname":      "home.example.com"
// }
// ```
//
// `DYNUP_LOG` selects the log level (trace, debug, info, warn, error).

use anyhow::Context;
use clap::Parser;
use dynup_core::{Config, lookup, update};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

const DEFAULT_CONFIG_PATH: &str = "./config.json";

#[derive(Parser, Debug)]
#[command(name = "dynup", version, about = "One-shot dynamic DNS update client")]
struct Args {
    /// Path to the JSON configuration file
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    config: Option<PathBuf>,
}

fn log_level() -> Level {
    match std::env::var("DYNUP_LOG").as_deref() {
        Ok("trace") => Level::TRACE,
        Ok("debug") => Level::DEBUG,
        Ok("warn") => Level::WARN,
        Ok("error") => Level::ERROR,
        _ => Level::INFO,
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    // stdout carries only the final confirmation line; all logging
    // goes to stderr.
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level())
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Error: failed to install tracing subscriber: {e}");
        return ExitCode::FAILURE;
    }

    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            eprintln!("Error: failed to create tokio runtime: {e}");
            return ExitCode::FAILURE;
        }
    };

    match runtime.block_on(run(args)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

/// One update run: load configuration, resolve the public address,
/// submit it. The first failing step ends the run.
async fn run(args: Args) -> anyhow::Result<()> {
    let config_path = match args.config {
        Some(path) => path,
        None => {
            info!("no config path given, using default: {DEFAULT_CONFIG_PATH}");
            PathBuf::from(DEFAULT_CONFIG_PATH)
        }
    };

    let config = Config::load(&config_path).context("load configuration")?;

    // One shared client, built without a global timeout: the lookup
    // request is unbounded, only the update request enforces one.
    let client = reqwest::Client::new();

    let ip = lookup::fetch_ip(&client, &config)
        .await
        .context("resolve public ip")?;
    info!(ip = %ip, "public ip resolved");

    update::push_ip(&client, &config, &ip)
        .await
        .context("submit update")?;

    println!("IP for {} updated successfully to {}", config.hostname, ip);
    Ok(())
}
