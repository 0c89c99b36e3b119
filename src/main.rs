//! TextLens CLI - Text Statistics Engine
//!
//! Command-line interface for normalizing text and printing its statistics.

use clap::{Args, Parser, Subcommand};
use log::{error, info, warn};
use std::fs;
use std::io::{self, BufRead, Read, Write};
use std::path::PathBuf;
use textlens::{Config, Result, TextAnalyzer, TextLensError};

#[derive(Parser)]
#[command(name = "textlens")]
#[command(author = "TextLens Contributors")]
#[command(version)]
#[command(about = "Text statistics engine", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// JSON configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Args)]
struct InputArgs {
    /// Input file (use "-" for stdin)
    #[arg(short, long, conflicts_with = "text")]
    input: Option<String>,

    /// Text to analyze
    #[arg(short, long)]
    text: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the full report as JSON
    Report {
        #[command(flatten)]
        source: InputArgs,

        /// Single-line JSON output
        #[arg(long)]
        compact: bool,
    },

    /// Print the normalized text
    Normalize {
        #[command(flatten)]
        source: InputArgs,
    },

    /// Print the number of words
    Words {
        #[command(flatten)]
        source: InputArgs,
    },

    /// Print the number of sentences
    Sentences {
        #[command(flatten)]
        source: InputArgs,
    },

    /// Print the count of numbers
    Numbers {
        #[command(flatten)]
        source: InputArgs,
    },

    /// Print the most common word or words
    Common {
        #[command(flatten)]
        source: InputArgs,
    },

    /// Run the interactive menu
    Interactive,
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    let result = load_config(cli.config).and_then(|config| match cli.command {
        Commands::Report { source, compact } => print_report(&config, source, compact),
        Commands::Normalize { source } => {
            let analyzer = load_analyzer(&config, source)?;
            println!("{}", analyzer.get_normalized_text()?);
            Ok(())
        }
        Commands::Words { source } => {
            let analyzer = load_analyzer(&config, source)?;
            println!("Total words: {}", analyzer.get_word_count()?);
            Ok(())
        }
        Commands::Sentences { source } => {
            let analyzer = load_analyzer(&config, source)?;
            println!("Total sentences: {}", analyzer.get_sentence_count()?);
            Ok(())
        }
        Commands::Numbers { source } => {
            let analyzer = load_analyzer(&config, source)?;
            println!("Count of numbers: {}", analyzer.get_numeric_token_count()?);
            Ok(())
        }
        Commands::Common { source } => {
            let analyzer = load_analyzer(&config, source)?;
            println!(
                "Most common word(s): {}",
                analyzer.get_most_common_words_display(&config.output.list_separator)?
            );
            Ok(())
        }
        Commands::Interactive => {
            let stdin = io::stdin();
            interactive_menu(&config, &mut stdin.lock(), &mut io::stdout())
        }
    });

    if let Err(e) = result {
        error!("Error: {}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn load_config(path: Option<PathBuf>) -> Result<Config> {
    match path {
        Some(path) => {
            let config = Config::from_file(&path)?;
            info!("Loaded configuration from {}", path.display());
            Ok(config)
        }
        None => Ok(Config::default()),
    }
}

fn read_source(source: InputArgs) -> Result<String> {
    match (source.input, source.text) {
        (Some(path), _) if path == "-" => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
        (Some(path), _) => Ok(fs::read_to_string(path)?),
        (_, Some(text)) => Ok(text),
        (None, None) => Err(TextLensError::Config(
            "No input provided. Use --input <file>, --input - for stdin, or --text <text>".to_string(),
        )),
    }
}

fn load_analyzer(config: &Config, source: InputArgs) -> Result<TextAnalyzer> {
    let text = read_source(source)?;
    let mut analyzer = TextAnalyzer::with_config(config.analyzer.clone());
    analyzer.set_text(text)?;
    info!("Text accepted ({} bytes)", analyzer.text().map_or(0, str::len));
    Ok(analyzer)
}

fn print_report(config: &Config, source: InputArgs, compact: bool) -> Result<()> {
    let analyzer = load_analyzer(config, source)?;
    let report = analyzer.get_full_report()?;

    let json = if config.output.pretty && !compact {
        serde_json::to_string_pretty(&report)?
    } else {
        serde_json::to_string(&report)?
    };
    info!("Report generated");
    println!("{}", json);

    Ok(())
}

/// Writes `prompt` and reads one line. Returns `None` at end of input.
fn prompt_line(
    prompt: &str,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> Result<Option<String>> {
    write!(out, "{}", prompt)?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

fn render_report(config: &Config, analyzer: &TextAnalyzer) -> Result<String> {
    let report = analyzer.get_full_report()?;
    let json = if config.output.pretty {
        serde_json::to_string_pretty(&report)?
    } else {
        serde_json::to_string(&report)?
    };
    Ok(json)
}

/// Runs the menu loop until `0` is chosen or the input ends.
///
/// Core errors are reported on `out` and the loop continues.
fn interactive_menu(config: &Config, input: &mut impl BufRead, out: &mut impl Write) -> Result<()> {
    let mut analyzer = TextAnalyzer::with_config(config.analyzer.clone());
    info!("Interactive session started");

    loop {
        writeln!(out, "\n===== TextLens =====")?;
        writeln!(out, "1. Enter new text")?;
        writeln!(out, "2. Get report")?;
        writeln!(out, "3. Show number of words")?;
        writeln!(out, "4. Show number of sentences")?;
        writeln!(out, "5. Show count of numbers")?;
        writeln!(out, "6. Show most common word or words")?;
        writeln!(out, "0. Exit")?;

        let Some(choice) = prompt_line("Enter your choice: ", input, out)? else {
            info!("Input closed, leaving interactive session");
            return Ok(());
        };

        let outcome: Result<String> = match choice.trim() {
            "1" => match prompt_line("Enter your text (at least a few sentences): ", input, out)? {
                Some(text) => analyzer.set_text(text).map(|()| {
                    info!("User entered text");
                    "Text entered successfully!".to_string()
                }),
                None => return Ok(()),
            },
            "2" => render_report(config, &analyzer).map(|json| {
                info!("Report generated");
                json
            }),
            "3" => analyzer.get_word_count().map(|count| {
                info!("Word count displayed");
                format!("Total words: {}", count)
            }),
            "4" => analyzer.get_sentence_count().map(|count| {
                info!("Sentence count displayed");
                format!("Total sentences: {}", count)
            }),
            "5" => analyzer.get_numeric_token_count().map(|count| {
                info!("Number count displayed");
                format!("Count of numbers: {}", count)
            }),
            "6" => analyzer
                .get_most_common_words_display(&config.output.list_separator)
                .map(|words| {
                    info!("Most common words displayed");
                    format!("Most common word(s): {}", words)
                }),
            "0" => {
                info!("User exited the interactive session");
                writeln!(out, "See you later!")?;
                return Ok(());
            }
            other => {
                error!("Invalid menu choice: {}", other);
                Ok("Invalid input. Please try again.".to_string())
            }
        };

        match outcome {
            Ok(message) => writeln!(out, "{}", message)?,
            Err(TextLensError::NoText) => {
                warn!("Menu option {} attempted without text", choice.trim());
                writeln!(out, "{}", TextLensError::NoText)?;
            }
            Err(e) => {
                warn!("{}", e);
                writeln!(out, "Error: {}", e)?;
            }
        }
    }
}
