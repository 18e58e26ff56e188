use anyhow::{bail, Context, Result};
use clap::Parser;
use std::panic;
use tracing_subscriber::EnvFilter;

use devlop::demo::STRING_INCLUDES;
use devlop::{equal, ok, unreachable, AssertionFailure, Config, Message, MODE};

mod cli;
use cli::display;
use cli::{CheckOperator, Cli, Commands};

/// Failures raised by `check` are already printed as a report, so their
/// `devlop::assert` events are muted unless `RUST_LOG` asks for them.
const DEFAULT_FILTER: &str = "devlop=warn,devlop::assert=off";

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Mode { json } => run_mode(json),
        Commands::Check {
            operator,
            values,
            message,
            name,
            json,
        } => run_check(operator, &values, message, name, json),
        Commands::Includes {
            value,
            search,
            position,
            times,
        } => {
            run_includes(&value, &search, position, times);
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

fn run_mode(json: bool) -> Result<()> {
    let config = Config::global();

    if json {
        let out = serde_json::to_string_pretty(config).context("Failed to encode config")?;
        println!("{}", out);
        return Ok(());
    }

    println!("{}", display::key_value("mode", &display::mode_badge(MODE)));
    println!(
        "{}",
        display::key_value("profile", env!("DEVLOP_BUILD_PROFILE"))
    );
    println!(
        "{}",
        display::key_value("sink", &format!("{:?}", config.sink).to_lowercase())
    );
    println!("{}", display::key_value("color", &config.color.to_string()));
    Ok(())
}

fn run_check(
    operator: CheckOperator,
    values: &[String],
    message: Option<String>,
    name: Option<String>,
    json: bool,
) -> Result<()> {
    let message = match (name, message) {
        (Some(name), Some(message)) => Message::named(name, message),
        (None, Some(message)) => Message::from(message),
        _ => Message::Auto,
    };

    let outcome = match operator {
        CheckOperator::Ok => {
            let [condition] = values else {
                bail!("`ok` takes exactly one value, got {}", values.len());
            };
            let condition = truthy(condition);
            silently(move || ok(condition, message))
        }
        CheckOperator::Equal => {
            let [left, right] = values else {
                bail!("`equal` takes exactly two values, got {}", values.len());
            };
            let (left, right) = (left.clone(), right.clone());
            silently(move || equal(left, right, message))
        }
        CheckOperator::Unreachable => {
            if !values.is_empty() {
                bail!("`unreachable` takes no values");
            }
            silently(move || unreachable(message))
        }
    };

    match outcome {
        Ok(()) if MODE.is_production() => {
            println!("{} (production build, checks are compiled out)", display::passed());
        }
        Ok(()) => println!("{}", display::passed()),
        Err(failure) if json => {
            let out = serde_json::to_string_pretty(&failure).context("Failed to encode failure")?;
            println!("{}", out);
        }
        Err(failure) => println!("{}", display::failure_report(&failure)),
    }
    Ok(())
}

fn run_includes(value: &str, search: &str, position: Option<usize>, times: usize) {
    for _ in 0..times {
        println!("{}", STRING_INCLUDES.call((value, search, position)));
    }
}

/// Same falsy set as a shell would expect: empty, `0`, `false`, `no`, `off`.
fn truthy(value: &str) -> bool {
    !matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "" | "0" | "false" | "no" | "off"
    )
}

/// Run a check with the panic hook muted, so only our report is printed.
fn silently(f: impl FnOnce() + panic::UnwindSafe) -> Result<(), AssertionFailure> {
    let hook = panic::take_hook();
    panic::set_hook(Box::new(|_| {}));
    let outcome = AssertionFailure::catch(f);
    panic::set_hook(hook);
    outcome
}
