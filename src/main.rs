use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell};
use spchk::cli::output::{self, OutputFormat};
use spchk::config::Overrides;
use spchk::{walk, Config, Dictionary, FileReport, SpellChecker};
use std::io;
use std::path::PathBuf;
use std::process;

#[derive(Parser, Debug)]
#[command(name = "spchk")]
#[command(version, about = "Report words in text files that are not in a dictionary", long_about = None)]
struct Cli {
    /// Word list, one word per line
    #[arg(value_name = "DICTIONARY", required_unless_present = "completion")]
    dictionary: Option<PathBuf>,

    /// Text files or directories to check
    #[arg(value_name = "PATHS", required_unless_present = "completion")]
    paths: Vec<PathBuf>,

    /// Output format (text, json)
    #[arg(short = 'o', long, default_value = "text")]
    format: OutputFormat,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Check files on all cores; output order is unchanged
    #[arg(short, long)]
    parallel: bool,

    /// File extension picked up inside directories (repeatable, default: txt)
    #[arg(long = "ext", value_name = "EXT")]
    extensions: Vec<String>,

    /// Longest word, in bytes, that is looked up; longer words are reported
    #[arg(long, value_name = "N")]
    max_word_length: Option<usize>,

    /// Increase log verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress log output
    #[arg(short, long)]
    quiet: bool,

    /// Generate shell completion script
    #[arg(long, value_name = "SHELL")]
    completion: Option<Shell>,
}

fn main() -> Result<()> {
    let cli = parse_args();

    if let Some(shell) = cli.completion {
        let mut cmd = Cli::command();
        generate(shell, &mut cmd, "spchk", &mut io::stdout());
        return Ok(());
    }

    init_logging(cli.verbose, cli.quiet);

    let dictionary_path = match (&cli.dictionary, cli.paths.is_empty()) {
        (Some(path), false) => path.clone(),
        _ => usage_error(),
    };

    let config = Config::load(Overrides {
        extensions: cli.extensions.clone(),
        max_word_length: cli.max_word_length,
        parallel: cli.parallel,
        no_color: cli.no_color,
    })?;
    log::debug!("Configuration: {:?}", config);

    let dictionary = Dictionary::load(&dictionary_path).context("Failed to load dictionary.")?;
    let checker = SpellChecker::new(dictionary, &config);

    let collected = walk::collect_paths(&cli.paths, &config);
    for err in &collected.errors {
        eprintln!("{}", err);
    }

    let colored = config.color && console::Term::stdout().is_term();

    let results: Vec<(PathBuf, spchk::Result<FileReport>)> = match cli.format {
        OutputFormat::Text if !config.parallel => {
            // Stream as we go
            let mut results = Vec::with_capacity(collected.files.len());
            for path in collected.files {
                let result = checker.check_file(&path);
                output::print_text_result(&path, &result, colored)
                    .context("Failed to write report")?;
                results.push((path, result));
            }
            results
        }
        format => {
            let checked = checker.check_files(&collected.files, config.parallel);
            let results: Vec<_> = collected.files.into_iter().zip(checked).collect();
            if format == OutputFormat::Text {
                for (path, result) in &results {
                    output::print_text_result(path, result, colored)
                        .context("Failed to write report")?;
                }
            } else {
                println!(
                    "{}",
                    output::render_json(&results).context("Failed to render JSON output")?
                );
            }
            results
        }
    };

    log_summary(&results);

    // Misspellings are findings, not failures
    Ok(())
}

/// Argument errors exit with status 1; help and version exit normally.
fn parse_args() -> Cli {
    match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if err.use_stderr() => {
            let _ = err.print();
            process::exit(1);
        }
        Err(err) => err.exit(),
    }
}

fn usage_error() -> ! {
    let mut cmd = Cli::command();
    eprintln!("{}", cmd.render_usage());
    process::exit(1);
}

fn init_logging(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }

    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();
}

fn log_summary(results: &[(PathBuf, spchk::Result<FileReport>)]) {
    let mut misspellings = 0;
    let mut failed = 0;
    for (_, result) in results {
        match result {
            Ok(report) => misspellings += report.misspellings.len(),
            Err(_) => failed += 1,
        }
    }

    log::info!(
        "Checked {} file(s): {} misspelling(s), {} unreadable",
        results.len(),
        misspellings,
        failed
    );
}
