use std::fs;
use std::io::{self, BufRead, BufWriter, Write};
use std::process;

use clap::{Parser, Subcommand};
use serde::Serialize;

use hinglish_engine::{normalize_spelling, transliterate, transliterate_batch};

#[derive(Parser)]
#[command(name = "hinglish", about = "Devanagari → Hinglish transliteration")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Transliterate the given text (or stdin lines when no text is given)
    Convert {
        /// Text to transliterate; joined with spaces when multiple
        text: Vec<String>,
        /// Output as JSONL instead of plain text
        #[arg(long)]
        json: bool,
    },

    /// Transliterate a file line by line and write the results
    Batch {
        /// Path to the input file (one text per line)
        input_file: String,
        /// Path to the output file (one result per line)
        output_file: String,
    },

    /// Fix common misspellings in already-romanized Hinglish text
    Normalize {
        /// Text to normalize (or stdin lines when no text is given)
        text: Vec<String>,
    },
}

/// One JSONL record of the `convert --json` output.
#[derive(Serialize)]
struct ConvertRecord<'a> {
    input: &'a str,
    output: String,
}

fn main() {
    let cli = Cli::parse();
    match cli.command {
        Command::Convert { text, json } => {
            for line in gather_inputs(text) {
                emit(&line, transliterate(&line), json);
            }
        }
        Command::Batch {
            input_file,
            output_file,
        } => run_batch(&input_file, &output_file),
        Command::Normalize { text } => {
            for line in gather_inputs(text) {
                println!("{}", normalize_spelling(&line));
            }
        }
    }
}

/// CLI args as a single line, or stdin lines when no args were given.
fn gather_inputs(args: Vec<String>) -> Vec<String> {
    if !args.is_empty() {
        return vec![args.join(" ")];
    }
    io::stdin()
        .lock()
        .lines()
        .map_while(Result::ok)
        .collect()
}

fn emit(input: &str, output: String, json: bool) {
    if json {
        let record = ConvertRecord { input, output };
        match serde_json::to_string(&record) {
            Ok(line) => println!("{line}"),
            Err(e) => {
                eprintln!("Failed to serialize record: {e}");
                process::exit(1);
            }
        }
    } else {
        println!("{output}");
    }
}

fn run_batch(input_file: &str, output_file: &str) {
    let content = fs::read_to_string(input_file).unwrap_or_else(|e| {
        eprintln!("Failed to read {input_file}: {e}");
        process::exit(1);
    });
    let lines: Vec<&str> = content.lines().collect();
    let results = transliterate_batch(&lines);

    let file = fs::File::create(output_file).unwrap_or_else(|e| {
        eprintln!("Failed to create {output_file}: {e}");
        process::exit(1);
    });
    let mut out = BufWriter::new(file);
    for result in &results {
        if let Err(e) = writeln!(out, "{result}") {
            eprintln!("Failed to write {output_file}: {e}");
            process::exit(1);
        }
    }
    eprintln!("{} lines written to {output_file}", results.len());
}
