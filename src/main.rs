//! Printer demo
//!
//! Configures a printer from flags (and an optional JSON config file),
//! prints the sample log sequence, then queries, saves or flushes the
//! tracked history.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use printer_core::{call_site, AppEvent, BuildMode, LogKind, Printer, PrinterConfig};
use tracing::info;

/// Printer - a fancy way to print logs
#[derive(Parser, Debug)]
#[command(name = "printer-demo")]
#[command(about = "Print a sample sequence of fancy logs")]
struct Args {
    /// Increase verbosity of the printer's own diagnostics (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// JSON config file; flags below are applied on top of it
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory for saved log files
    #[arg(long)]
    log_dir: Option<PathBuf>,

    /// Print every log with the plain layout
    #[arg(long)]
    plain: bool,

    #[arg(long)]
    hide_timestamp: bool,

    #[arg(long)]
    hide_emojis: bool,

    #[arg(long)]
    hide_titles: bool,

    #[arg(long)]
    capitalize_titles: bool,

    #[arg(long)]
    capitalize_details: bool,

    /// Do not print call sites under each log
    #[arg(long)]
    no_trace: bool,

    /// Print a separator rule after each log
    #[arg(long)]
    add_line: bool,

    /// Only print these kinds (comma separated: success,error,...)
    #[arg(long, value_delimiter = ',')]
    kinds: Vec<LogKind>,

    /// Skip logs made from this source file (repeatable)
    #[arg(long)]
    skip_file: Vec<String>,

    /// Behave like a release build
    #[arg(long)]
    release: bool,

    /// Block every log
    #[arg(long)]
    disabled: bool,

    /// Print one more log after this many seconds
    #[arg(long)]
    delay_secs: Option<u64>,

    /// Print a summary of every tracked log
    #[arg(long)]
    print_all: bool,

    /// Print every tracked log as a JSON line
    #[arg(long)]
    dump_json: bool,

    /// Save the tracked success logs to a file
    #[arg(long)]
    save: bool,

    /// Clear the history and delete saved log files at the end
    #[arg(long)]
    flush: bool,
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .init();
}

fn build_config(args: &Args) -> Result<PrinterConfig> {
    let mut config = match &args.config {
        Some(path) => PrinterConfig::from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => PrinterConfig::default(),
    };

    config.disabled |= args.disabled;
    config.plain_log |= args.plain;
    config.add_line_after_each_print |= args.add_line;
    if args.no_trace {
        config.auto_tracing = false;
    }
    if args.release {
        config.build_mode = BuildMode::Release;
    }
    if let Some(dir) = &args.log_dir {
        config.log_dir = Some(dir.clone());
    }

    let style = &mut config.style;
    if args.hide_timestamp {
        style.set_hide_timestamp(true);
    }
    if args.hide_emojis {
        style.hide_emojis();
    }
    if args.hide_titles {
        style.hide_titles();
    }
    if args.capitalize_titles {
        style.set_capitalize_titles(true);
    }
    if args.capitalize_details {
        style.set_capitalize_details(true);
    }

    Ok(config)
}

/// The sample sequence: one log per kind, then a few without ids.
fn print_samples(printer: &Printer) {
    printer.app_event(AppEvent::DidBecomeActive);
    printer.trace(call_site!());
    printer.set_keep_tracking(true);

    printer.show("001", "This is a Success message.", LogKind::Success, call_site!());
    printer.show("002", "This is an Error message.", LogKind::Error, call_site!());
    printer.show("003", "This is an Information message.", LogKind::Information, call_site!());
    printer.show("004", "This is a Warning message.", LogKind::Warning, call_site!());
    printer.show("005", "This is an Alert message.", LogKind::Alert, call_site!());

    printer.show("", "This is another Success message without ID", LogKind::Success, call_site!());
    printer.success("001", "This is another Success message.", call_site!());
    printer.success("", "This is a Success message.", call_site!());
    printer.plain("", "This is a plain message.", call_site!());
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    setup_logging(args.verbose);

    let config = build_config(&args)?;
    let printer = Arc::new(Printer::new(config));
    for file in &args.skip_file {
        printer.skip_origin(file.clone());
    }
    if !args.kinds.is_empty() {
        printer.set_kind_filter(args.kinds.iter().copied());
    }

    print_samples(&printer);

    if let Some(secs) = args.delay_secs {
        let delay = Duration::from_secs(secs);
        printer.show_in_future(
            "006",
            "This is a deferred message.",
            LogKind::Information,
            delay,
            call_site!(),
        );
        tokio::time::sleep(delay + Duration::from_millis(100)).await;
    }

    let successes = printer.filtered_logs(&[LogKind::Success]);
    info!(successes = successes.len(), tracked = printer.tracked_count(), "Samples printed");

    if args.print_all {
        printer.print_all(true);
    }

    if args.dump_json {
        for record in printer.all_logs() {
            let line = record.to_json_line().context("Failed to serialize record")?;
            println!("{line}");
        }
    }

    if args.save {
        if let Some(path) = printer.save_logs(&successes) {
            info!(path = %path.display(), "Saved success logs");
        }
    }

    if args.flush {
        printer.flush();
    }

    Ok(())
}
