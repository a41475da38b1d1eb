use std::collections::{HashMap, HashSet};
use std::fs;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

use altekh_engine::converter::{
    try_convert, ConversionResult, ConvertError, ConvertOptions, UnmappablePolicy,
};
use altekh_engine::explain;
use altekh_engine::settings;
use altekh_engine::trace_init;

#[derive(Parser)]
#[command(name = "altekhtool", about = "Proto-Altekhsnan transliteration tool")]
struct Cli {
    /// Path to a settings TOML file (defaults are embedded)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Emit debug traces (needs the `trace` feature)
    #[arg(long, global = true)]
    trace: bool,
    /// Write traces to this directory instead of stderr
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert text and print the glyphs and their transcript
    Convert {
        /// Romanized text
        text: String,
        /// Use the Scrivener alternates for lone hh / nn / th
        #[arg(long)]
        scrivener: bool,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
        /// Fail on clusters that have no glyph mapping
        #[arg(long)]
        strict: bool,
    },

    /// Explain how text is segmented, grouped and mapped
    Explain {
        /// Romanized text
        text: String,
        #[arg(long)]
        scrivener: bool,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Read lines from stdin and convert each one
    Repl {
        #[arg(long)]
        scrivener: bool,
    },

    /// Convert every line of a file and record the results to JSONL
    Snapshot {
        /// Path to the input file (one text per line)
        input_file: String,
        /// Path to the output JSONL file
        output_file: String,
    },

    /// Compare current output against a saved snapshot
    DiffSnapshot {
        /// Path to the input file (one text per line)
        input_file: String,
        /// Path to the baseline JSONL snapshot file
        baseline_file: String,
    },
}

/// A single snapshot entry (one per input line).
#[derive(Debug, Serialize, Deserialize)]
struct SnapshotEntry {
    text: String,
    glyphs: String,
    transcript: String,
}

fn load_options(config: Option<&PathBuf>) -> ConvertOptions {
    if let Some(path) = config {
        let content = fs::read_to_string(path).unwrap_or_else(|e| {
            eprintln!("Failed to read config file {}: {}", path.display(), e);
            process::exit(1);
        });
        settings::init_custom(content).unwrap_or_else(|e| {
            eprintln!("Invalid config file {}: {}", path.display(), e);
            process::exit(1);
        });
    }
    ConvertOptions::from(settings::settings())
}

fn read_texts(input_file: &str) -> Vec<String> {
    let file = fs::File::open(input_file).unwrap_or_else(|e| {
        eprintln!("Failed to open input file {}: {}", input_file, e);
        process::exit(1);
    });
    BufReader::new(file)
        .lines()
        .map(|l| {
            l.unwrap_or_else(|e| {
                eprintln!("Failed to read line: {}", e);
                process::exit(1);
            })
        })
        .map(|l| l.trim().to_string())
        .filter(|l| !l.is_empty() && !l.starts_with('#'))
        .collect()
}

/// Convert honoring the configured unmappable policy; exits on failure.
fn convert_or_exit(options: &ConvertOptions, text: &str) -> ConversionResult {
    try_convert(text, options).unwrap_or_else(|e| {
        eprintln!("Conversion of {:?} failed: {}", text, e);
        process::exit(1);
    })
}

fn run_snapshot(options: &ConvertOptions, text: &str) -> Result<SnapshotEntry, ConvertError> {
    let r = try_convert(text, options)?;
    Ok(SnapshotEntry {
        text: text.to_string(),
        glyphs: r.glyphs,
        transcript: r.transcript,
    })
}

fn snapshot_or_exit(options: &ConvertOptions, text: &str) -> SnapshotEntry {
    run_snapshot(options, text).unwrap_or_else(|e| {
        eprintln!("Conversion of {:?} failed: {}", text, e);
        process::exit(1);
    })
}

fn main() {
    let cli = Cli::parse();

    if cli.trace || cli.log_dir.is_some() {
        trace_init::init_tracing(cli.log_dir.as_deref());
    }
    let options = load_options(cli.config.as_ref());

    match cli.command {
        Command::Convert {
            text,
            scrivener,
            json,
            strict,
        } => {
            let mut options = options;
            options.scrivener |= scrivener;
            if strict {
                options.unmappable = UnmappablePolicy::Error;
            }
            let result = convert_or_exit(&options, &text);
            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&result).expect("JSON serialization failed")
                );
            } else {
                println!("{}", result.glyphs);
                println!("{}", result.transcript);
            }
        }

        Command::Explain {
            text,
            scrivener,
            json,
        } => {
            let mut options = options;
            options.scrivener |= scrivener;
            let result = explain::explain(&text, &options);
            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&result).expect("JSON serialization failed")
                );
            } else {
                print!("{}", explain::format_text(&result));
            }
            // The breakdown already shows failing clusters; the policy decides the status.
            if let Err(e) = try_convert(&text, &options) {
                eprintln!("Conversion of {:?} failed: {}", text, e);
                process::exit(1);
            }
        }

        Command::Repl { scrivener } => {
            let mut options = options;
            options.scrivener |= scrivener;
            let stdin = io::stdin();
            let mut stdout = io::stdout().lock();
            for line in stdin.lock().lines() {
                let line = line.unwrap_or_else(|e| {
                    eprintln!("Failed to read line: {}", e);
                    process::exit(1);
                });
                let result = convert_or_exit(&options, line.trim_end());
                writeln!(stdout, "{}\n{}", result.glyphs, result.transcript).unwrap_or_else(
                    |e| {
                        eprintln!("Failed to write output: {}", e);
                        process::exit(1);
                    },
                );
            }
        }

        Command::Snapshot {
            input_file,
            output_file,
        } => {
            let texts = read_texts(&input_file);
            let out = fs::File::create(&output_file).unwrap_or_else(|e| {
                eprintln!("Failed to create output file {}: {}", output_file, e);
                process::exit(1);
            });
            let mut writer = BufWriter::new(out);
            for text in &texts {
                let entry = snapshot_or_exit(&options, text);
                let line = serde_json::to_string(&entry).expect("JSON serialization failed");
                writeln!(writer, "{}", line).unwrap_or_else(|e| {
                    eprintln!("Failed to write snapshot: {}", e);
                    process::exit(1);
                });
            }
            writer.flush().unwrap_or_else(|e| {
                eprintln!("Failed to flush snapshot: {}", e);
                process::exit(1);
            });
            eprintln!("Wrote {} entries to {}", texts.len(), output_file);
        }

        Command::DiffSnapshot {
            input_file,
            baseline_file,
        } => {
            let texts = read_texts(&input_file);

            let baseline_content = fs::read_to_string(&baseline_file).unwrap_or_else(|e| {
                eprintln!("Failed to read baseline file {}: {}", baseline_file, e);
                process::exit(1);
            });
            let mut baseline: HashMap<String, SnapshotEntry> = HashMap::new();
            for line in baseline_content.lines() {
                if line.trim().is_empty() {
                    continue;
                }
                let entry: SnapshotEntry = serde_json::from_str(line).unwrap_or_else(|e| {
                    eprintln!("Failed to parse baseline JSONL: {}", e);
                    process::exit(1);
                });
                baseline.insert(entry.text.clone(), entry);
            }

            let mut changed = 0usize;
            let mut same = 0usize;
            let mut new_count = 0usize;
            let total = texts.len();

            for text in &texts {
                let current = snapshot_or_exit(&options, text);
                match baseline.get(text) {
                    Some(base) => {
                        if base.glyphs != current.glyphs {
                            changed += 1;
                            println!(
                                "  CHANGED: {} -> {} (was: {})",
                                text, current.transcript, base.transcript
                            );
                        } else {
                            same += 1;
                        }
                    }
                    None => {
                        new_count += 1;
                        println!("  NEW:     {} -> {}", text, current.transcript);
                    }
                }
            }

            let input_set: HashSet<&str> = texts.iter().map(|s| s.as_str()).collect();
            let mut removed = 0usize;
            for key in baseline.keys() {
                if !input_set.contains(key.as_str()) {
                    removed += 1;
                    println!("  REMOVED: {}", key);
                }
            }

            println!();
            println!("=== Summary ===");
            println!("  Total:    {total}");
            println!("  Same:     {same}");
            println!("  Changed:  {changed}");
            println!("  New:      {new_count}");
            println!("  Removed:  {removed}");

            if changed > 0 || removed > 0 {
                process::exit(1);
            }
        }
    }
}
