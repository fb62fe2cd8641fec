use std::io::{self, IsTerminal};
use std::path::PathBuf;

use clap::Parser;
use color_eyre::Result;
use color_eyre::eyre::eyre;

use envpick::config::{load_config, load_config_from_path};
use envpick::host::{self, format_selection, handle_cancel};
use envpick::input::OptionReader;
use envpick::Picker;

/// Pick one option from a list in the terminal
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Options to choose from; read one per line from stdin when omitted
    options: Vec<String>,

    /// Read options from a file instead of stdin
    #[arg(short, long, conflicts_with = "options")]
    file: Option<PathBuf>,

    /// Index of the option highlighted at start
    #[arg(short, long, default_value_t = 0)]
    default_index: usize,

    /// Title shown above the list
    #[arg(short, long)]
    title: Option<String>,

    /// Marker drawn before the highlighted option
    #[arg(long)]
    indicator: Option<String>,

    /// Config file to use instead of the default location
    #[arg(long)]
    config: Option<PathBuf>,

    /// Make End stop one option short of the last (legacy behavior)
    #[arg(long)]
    legacy_end: bool,

    /// Print the selected index instead of the option
    #[arg(long)]
    index_only: bool,
}

fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;
    host::install_panic_hook();

    #[cfg(debug_assertions)]
    envpick::logging::init();

    let args = Args::parse();

    let config_result = match &args.config {
        Some(path) => load_config_from_path(path),
        None => load_config(),
    };
    if let Some(warning) = &config_result.warning {
        eprintln!("Warning: {}", warning);
    }
    let mut config = config_result.config;
    if let Some(title) = args.title {
        config.picker.title = title;
    }
    if let Some(indicator) = args.indicator {
        config.picker.indicator = indicator;
    }
    if args.legacy_end {
        config.picker.strict_last_index = false;
    }

    let options = if !args.options.is_empty() {
        args.options
    } else if args.file.is_none() && io::stdin().is_terminal() {
        return Err(eyre!("No options given. Pass them as arguments, with --file, or on stdin."));
    } else {
        OptionReader::read_options(args.file.as_deref())?
    };

    // Validate before taking over the terminal
    let picker: Picker<String, String> = Picker::new(options, args.default_index)?
        .with_config(config.picker)
        .with_palette(config.colors);

    let outcome = host::pick_interactive(picker)?;
    let Some(outcome) = handle_cancel(outcome, |code| std::process::exit(code)) else {
        return Ok(());
    };

    if let Some(line) = format_selection(&outcome, args.index_only) {
        println!("{}", line);
    }

    Ok(())
}
