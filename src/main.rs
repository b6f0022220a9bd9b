// SPDX-License-Identifier: MPL-2.0
//! Headless playground that drives a few toasts and one dialog and prints
//! what happened.

use iced_overlays::config::{self, Config};
use iced_overlays::headless::Harness;
use iced_overlays::{ModalOptions, Settlement, Severity, ToastConfig};
use std::path::PathBuf;
use std::process::ExitCode;
use std::str::FromStr;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
overlay-playground

USAGE:
  overlay-playground [OPTIONS]

OPTIONS:
  --toasts N          Number of toasts to create [default: 3]
  --config PATH       Settings file to load instead of the user config
  --answer ANSWER     How to answer the dialog: confirm, cancel or close [default: confirm]
  -h, --help          Print this help
";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Answer {
    Confirm,
    Cancel,
    Close,
}

impl FromStr for Answer {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "confirm" => Ok(Self::Confirm),
            "cancel" => Ok(Self::Cancel),
            "close" => Ok(Self::Close),
            other => Err(format!("unknown answer '{other}'")),
        }
    }
}

#[derive(Debug)]
struct Args {
    toasts: usize,
    config: Option<PathBuf>,
    answer: Answer,
}

fn parse_args() -> Result<Option<Args>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    Ok(Some(Args {
        toasts: args.opt_value_from_str("--toasts")?.unwrap_or(3),
        config: args.opt_value_from_str("--config")?,
        answer: args
            .opt_value_from_str("--answer")?
            .unwrap_or(Answer::Confirm),
    }))
}

fn init_logging() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("iced_overlays=info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .try_init();
}

fn load_config(path: Option<&PathBuf>) -> Config {
    let loaded = match path {
        Some(path) => config::load_from_path(path),
        None => config::load(),
    };
    loaded.unwrap_or_else(|err| {
        tracing::warn!(error = %err, "falling back to default settings");
        Config::default()
    })
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    init_logging();

    let args = match parse_args() {
        Ok(Some(args)) => args,
        Ok(None) => {
            print!("{HELP}");
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            return ExitCode::FAILURE;
        }
    };

    let harness = Harness::new(load_config(args.config.as_ref()));
    let overlays = &harness.overlays;

    let severities = [Severity::Success, Severity::Info, Severity::Warning, Severity::Error];
    for index in 0..args.toasts {
        let severity = severities[index % severities.len()];
        let config = ToastConfig::new(severity, format!("toast number {}", index + 1));
        if let Err(err) = overlays.create(config) {
            tracing::error!(error = %err, "could not create toast");
            return ExitCode::FAILURE;
        }
    }
    harness.toasts.relayout();

    for id in overlays.toast_ids() {
        println!(
            "{id}: stacked below {:.1}",
            overlays.last_bottom_offset(id)
        );
    }

    overlays.close_all();
    harness.toasts.tick(Duration::ZERO);
    println!("toasts left after close_all: {}", overlays.toast_count());

    let options = ModalOptions::new("Quit", "Discard the playground?")
        .with_confirm_label("Discard")
        .with_cancel_label("Keep");
    let mut pending = match overlays.confirm(options) {
        Ok(pending) => pending,
        Err(err) => {
            tracing::error!(error = %err, "could not open dialog");
            return ExitCode::FAILURE;
        }
    };

    if let Some(dialog) = harness.modals.last() {
        match args.answer {
            Answer::Confirm => dialog.confirm(),
            Answer::Cancel => dialog.cancel(),
            Answer::Close => dialog.close(),
        }
    }

    match pending.settlement() {
        Settlement::Pending => println!("dialog closed without an answer"),
        Settlement::Resolved | Settlement::Rejected => match pending.await {
            Ok(()) => println!("dialog confirmed"),
            Err(rejected) => println!("dialog answered: {rejected}"),
        },
    }

    for event in overlays.diagnostics().kinds() {
        println!("  {event:?}");
    }

    ExitCode::SUCCESS
}
