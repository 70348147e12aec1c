//! oxread entrypoint: prompt for lines until the user cancels.
use anyhow::{Result, bail};
use clap::Parser;
use core_config::{ReadOptions, load_from};
use core_terminal::{CrosstermTerminal, TerminalCapabilities};
use ox_read::{Outcome, Reader};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Once;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;

const LOG_FILE_NAME: &str = "oxread.log";

#[derive(Parser, Debug)]
#[command(name = "oxread", version, about = "Line editor with history, undo and autocomplete")]
struct Args {
    /// Text written before the editable region.
    #[arg(short, long, default_value = "> ")]
    prompt: String,
    /// Initial buffer contents.
    #[arg(long, default_value = "")]
    prefill: String,
    /// Optional configuration file path (defaults to discovery).
    #[arg(long = "config")]
    config: Option<PathBuf>,
    /// Hide typed characters behind this glyph.
    #[arg(long)]
    mask: Option<char>,
    /// Autocomplete candidate; repeat for more.
    #[arg(short = 'c', long = "complete")]
    complete: Vec<String>,
    /// Read a single line and exit.
    #[arg(long)]
    once: bool,
}

impl Args {
    /// Command-line flags override the file.
    fn apply(&self, mut options: ReadOptions) -> ReadOptions {
        if let Some(m) = self.mask {
            options = options.masked(m);
        }
        if !self.complete.is_empty() {
            options.autocomplete.items.extend(self.complete.iter().cloned());
        }
        options
    }
}

fn configure_logging() -> Option<WorkerGuard> {
    let log_dir = Path::new(".");
    let log_path = log_dir.join(LOG_FILE_NAME);
    if log_path.exists() {
        let _ = std::fs::remove_file(&log_path);
    }
    let file_appender = tracing_appender::rolling::never(log_dir, LOG_FILE_NAME);
    let (nb_writer, guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(nb_writer)
        .with_ansi(false)
        .try_init()
        .ok()
        .map(|_| guard)
}

fn install_panic_hook() {
    static HOOK: Once = Once::new();
    HOOK.call_once(|| {
        let default_panic = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            tracing::error!(target: "runtime.panic", ?info, "panic");
            default_panic(info);
        }));
    });
}

fn main() -> Result<()> {
    let args = Args::parse();
    let _log_guard = configure_logging();
    install_panic_hook();
    info!(target: "runtime", "startup");

    let options = args.apply(load_from(args.config.clone())?);
    let caps = TerminalCapabilities::detect();
    if !caps.interactive {
        bail!("oxread needs an interactive terminal");
    }
    ox_read::global_history()
        .lock()
        .unwrap_or_else(std::sync::PoisonError::into_inner)
        .set_max_size(options.history_capacity);

    let mut reader = Reader::new(CrosstermTerminal::with_capabilities(caps), options);
    let mut prefill = args.prefill.clone();
    let mut lines = 0usize;
    loop {
        match reader.read(&prefill, &args.prompt)? {
            Outcome::Accepted(line) => {
                lines += 1;
                let mut out = std::io::stdout().lock();
                writeln!(out, "{line}")?;
                out.flush()?;
            }
            Outcome::Cancelled(_) => break,
        }
        prefill.clear();
        if args.once {
            break;
        }
    }
    info!(target: "runtime", lines, "shutdown");
    Ok(())
}
