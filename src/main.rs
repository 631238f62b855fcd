use std::{fs, path::PathBuf, process::ExitCode};

use clap::{Parser, Subcommand, ValueEnum};
use log::{LevelFilter, info};
use tabled::{Table, Tabled};
use tenji::{
    book::{self, ConvertOptions, OutputFormat},
    cell::{dots_to_unicode, unicode_to_dots},
    check_yaml::{TestResult, check_yaml},
    decoder::SourceFormat,
    kana::KanaStyle,
    tables::{TableId, Tables},
    transcoder::{TranscodeOptions, Width},
};

/// Output of the convert command
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum OutputArg {
    /// Katakana (or hiragana) text
    #[default]
    Kana,
    /// Unicode braille with LF line ends
    Braille,
    /// Unicode braille exactly as decoded
    Unconverted,
}

impl From<OutputArg> for OutputFormat {
    fn from(arg: OutputArg) -> Self {
        match arg {
            OutputArg::Kana => OutputFormat::Kana,
            OutputArg::Braille => OutputFormat::Braille,
            OutputArg::Unconverted => OutputFormat::Unconverted,
        }
    }
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Convert the volume <FILES> of one book to text
    #[command(arg_required_else_help = true)]
    Convert {
        /// Volume files in reading order (.BES, .BET, .BMT, .NAB, .BRL or .BSE)
        #[arg(required = true)]
        files: Vec<PathBuf>,
        #[arg(long, value_enum, default_value_t)]
        output: OutputArg,
        /// Write hiragana instead of katakana
        #[arg(long)]
        hiragana: bool,
        /// Write ASCII digits in kana text
        #[arg(long)]
        halfwidth_digits: bool,
        /// Write the text to this file instead of standard output
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Transcode a string of Unicode <BRAILLE> to katakana
    #[command(arg_required_else_help = true)]
    Transcode {
        braille: String,
        /// Read the input as dash separated dot numbers, e.g. 5-16-1
        #[arg(long)]
        dots: bool,
    },
    /// Decode one braille <FILE> to Unicode braille
    #[command(arg_required_else_help = true)]
    Decode {
        file: PathBuf,
        /// Print decoding statistics instead of the braille
        #[arg(long)]
        stats: bool,
    },
    /// List the lookup tables, or the entries of table <NAME>
    Tables { name: Option<String> },
    /// Run the tests defined in the <YAML_TEST_FILE>. Return 0 if all
    /// tests pass or 1 if any of the tests fail.
    CheckYaml {
        /// YAML file listing all the tests
        yaml: PathBuf,
    },
}

#[derive(Debug, Parser)]
#[command(name = "tenji")]
#[command(about = "A command line tool to read Japanese braille books")]
#[command(author, version, long_about = None)]
struct Cli {
    /// More log output, repeat for more detail
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Tabled)]
struct TableRow {
    name: &'static str,
    entries: usize,
}

#[derive(Tabled)]
struct EntryRow {
    braille: String,
    dots: String,
    text: String,
}

#[derive(Tabled)]
struct StatsRow {
    format: String,
    header: usize,
    cells: usize,
    line_breaks: usize,
    skipped: usize,
    dropped: usize,
}

fn log_level(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

fn main() -> ExitCode {
    let args = Cli::parse();

    env_logger::Builder::new()
        .filter_level(log_level(args.verbose))
        .parse_default_env()
        .init();

    match run(args.command) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: Commands) -> Result<ExitCode, Box<dyn std::error::Error>> {
    match command {
        Commands::Convert {
            files,
            output,
            hiragana,
            halfwidth_digits,
            out,
        } => {
            let mut transcode = TranscodeOptions::default();
            if halfwidth_digits {
                transcode = transcode.with_digits(Width::Half);
            }
            let options = ConvertOptions {
                output: output.into(),
                transcode,
                kana: if hiragana {
                    KanaStyle::Hiragana
                } else {
                    KanaStyle::Katakana
                },
            };
            let book = book::convert_volumes(&files, &options)?;
            match out {
                Some(path) => {
                    fs::write(&path, &book.text)?;
                    info!("wrote {:?} to {}", book.title, path.display());
                }
                None => print!("{}", book.text),
            }
        }
        Commands::Transcode { braille, dots } => {
            let braille = if dots {
                dots_to_unicode(&braille)?
            } else {
                braille
            };
            println!("{}", tenji::translate(&braille));
        }
        Commands::Decode { file, stats } => {
            let format = SourceFormat::from_path(&file)
                .ok_or_else(|| book::ConvertError::UnsupportedFormat(file.clone()))?;
            let bytes = fs::read(&file)?;
            let (document, decode_stats) = format.decode(&bytes)?;
            if stats {
                let row = StatsRow {
                    format: format.to_string(),
                    header: decode_stats.header,
                    cells: decode_stats.cells,
                    line_breaks: decode_stats.line_breaks,
                    skipped: decode_stats.skipped,
                    dropped: decode_stats.dropped,
                };
                println!("{}", Table::new([row]));
            } else {
                print!("{document}");
            }
        }
        Commands::Tables { name } => {
            let tables = Tables::standard();
            match name {
                Some(name) => {
                    let id = TableId::from_name(&name)
                        .ok_or_else(|| format!("no table named {name:?}"))?;
                    let rows: Vec<EntryRow> = tables
                        .get(id)
                        .iter()
                        .map(|(braille, text)| EntryRow {
                            dots: unicode_to_dots(&braille),
                            braille,
                            text: text.to_string(),
                        })
                        .collect();
                    println!("{}", Table::new(rows));
                }
                None => {
                    let rows: Vec<TableRow> = TableId::ALL
                        .into_iter()
                        .map(|id| TableRow {
                            name: id.name(),
                            entries: tables.get(id).len(),
                        })
                        .collect();
                    println!("{}", Table::new(rows));
                }
            }
        }
        Commands::CheckYaml { yaml } => {
            println!("Testing with {:?}", yaml);
            let results = check_yaml(&yaml)?;
            for result in &results {
                match result {
                    TestResult::Failure {
                        input,
                        expected,
                        actual,
                    } => println!("FAIL {input:?}: expected {expected:?}, got {actual:?}"),
                    TestResult::UnexpectedSuccess { input } => {
                        println!("XPASS {input:?}")
                    }
                    _ => (),
                }
            }
            let failures = results
                .iter()
                .filter(|r| r.is_failure() || r.is_unexpected_success())
                .count();
            println!(
                "Pass: {}",
                results.iter().filter(|r| r.is_success()).count()
            );
            println!(
                "Expected failures: {}",
                results.iter().filter(|r| r.is_expected_failure()).count()
            );
            println!("Fail: {failures}");
            if failures > 0 {
                return Ok(ExitCode::FAILURE);
            }
        }
    }
    Ok(ExitCode::SUCCESS)
}
