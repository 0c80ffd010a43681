//! The `creole` binary.

use std::env;
use std::fs;
use std::io::{self, BufWriter, Read, Write};
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, ValueHint};
use tracing_subscriber::EnvFilter;

use creole::{render, Options, RenderError, DEFAULT_MAX_NESTING};

const EXIT_SUCCESS: i32 = 0;
const EXIT_RENDER: i32 = 1;
const EXIT_PARSE_CONFIG: i32 = 2;
const EXIT_READ_INPUT: i32 = 3;

#[derive(Debug, Parser)]
#[command(
    version,
    about,
    args_override_self = true,
    after_help = "By default, extra arguments are read from $XDG_CONFIG_HOME/creole/config \
                  and put before those given on the command line.  Pass \
                  `--config-file none` to skip it."
)]
struct Cli {
    /// Creole files to render, one after the other; standard input if none
    /// are given
    #[arg(value_name = "FILE", value_hint = ValueHint::FilePath)]
    files: Vec<PathBuf>,

    /// Path to a config file containing command-line arguments, or "none"
    #[arg(short, long, value_name = "PATH", value_hint = ValueHint::FilePath)]
    config_file: Option<String>,

    /// Write HTML to FILE instead of standard output
    #[arg(short, long, value_name = "FILE", value_hint = ValueHint::FilePath)]
    output: Option<PathBuf>,

    /// Fail on markup nested deeper than this
    #[arg(long, value_name = "DEPTH", default_value_t = DEFAULT_MAX_NESTING)]
    max_nesting: usize,

    /// Log to standard error what the renderer is doing
    #[arg(short, long)]
    verbose: bool,
}

#[cfg(all(not(windows), not(target_arch = "wasm32")))]
fn get_default_config_path() -> Option<PathBuf> {
    xdg::BaseDirectories::with_prefix("creole")
        .ok()
        .and_then(|dirs| dirs.find_config_file("config"))
}

#[cfg(any(windows, target_arch = "wasm32"))]
fn get_default_config_path() -> Option<PathBuf> {
    None
}

/// Re-parse the command line with the config file's arguments in front.
///
/// A missing default config is fine; a missing config named on the command
/// line is not.
fn apply_config_file(cli: Cli) -> Cli {
    let (path, explicit) = match cli.config_file.as_deref() {
        Some("none") => return cli,
        Some(path) => (PathBuf::from(path), true),
        None => match get_default_config_path() {
            Some(path) => (path, false),
            None => return cli,
        },
    };

    let config = match fs::read_to_string(&path) {
        Ok(config) => config,
        Err(err) if explicit => {
            eprintln!("failed to read config file {}: {}", path.display(), err);
            process::exit(EXIT_PARSE_CONFIG);
        }
        Err(_) => return cli,
    };

    let mut args = match shell_words::split(&config) {
        Ok(args) => args,
        Err(err) => {
            eprintln!("failed to parse config file {}: {}", path.display(), err);
            process::exit(EXIT_PARSE_CONFIG);
        }
    };

    args.insert(0, env!("CARGO_PKG_NAME").to_string());
    args.extend(env::args().skip(1));
    Cli::parse_from(args)
}

fn read_input(files: &[PathBuf]) -> io::Result<Vec<u8>> {
    let mut source = Vec::with_capacity(2048);

    if files.is_empty() {
        io::stdin().read_to_end(&mut source)?;
    } else {
        for file in files {
            fs::File::open(file)
                .and_then(|mut f| f.read_to_end(&mut source))
                .map_err(|err| annotate(file, err))?;
        }
    }

    Ok(source)
}

fn annotate(path: &Path, err: io::Error) -> io::Error {
    io::Error::new(err.kind(), format!("{}: {}", path.display(), err))
}

fn write_output(
    output: &mut dyn Write,
    source: &[u8],
    options: &Options,
) -> Result<(), RenderError> {
    render(output, source, options)?;
    output.flush()?;
    Ok(())
}

fn main() {
    let cli = apply_config_file(Cli::parse());

    let filter = if cli.verbose {
        EnvFilter::new("creole=debug")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let source = match read_input(&cli.files) {
        Ok(source) => source,
        Err(err) => {
            eprintln!("failed to read input: {}", err);
            process::exit(EXIT_READ_INPUT);
        }
    };
    tracing::debug!(files = cli.files.len(), bytes = source.len(), "read input");

    let options = Options {
        max_nesting: cli.max_nesting,
    };

    let result = match &cli.output {
        Some(path) => fs::File::create(path)
            .map_err(|err| RenderError::Io(annotate(path, err)))
            .and_then(|file| write_output(&mut BufWriter::new(file), &source, &options)),
        None => {
            let stdout = io::stdout();
            write_output(&mut BufWriter::new(stdout.lock()), &source, &options)
        }
    };

    if let Err(err) = result {
        eprintln!("Error: {}", err);
        process::exit(EXIT_RENDER);
    }

    process::exit(EXIT_SUCCESS);
}
