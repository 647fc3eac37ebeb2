use crossterm::style::Stylize;
use std::io::{stdin, stdout, Write};
use std::path::PathBuf;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use word_core::config::{default_config_path, load_config};
use word_core::core::types::ClassificationResult;
use word_core::{Workbook, WordEngine};

fn main() {
    // Logs go to stderr; RUST_LOG overrides the default level
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .or_else(|| default_config_path().ok());
    let config = config_path.as_deref().map(load_config).unwrap_or_default();

    let workbook_path = match config.workbook_path() {
        Ok(path) => path,
        Err(e) => {
            error!(error = %e, "no usable workbook location");
            std::process::exit(1);
        }
    };
    let mut workbook = Workbook::from_file_or_new(&workbook_path, WordEngine::new(config.engine.clone()));
    info!(path = ?workbook_path, mode = config.engine.mode.as_str(), "workbook ready");

    println!("{}", "Dutch word trainer. Type a Dutch sentence to analyze it.".bold());
    println!("Commands: :add <word>, :learn <word>, :forget <word>, :suggest, :words, :phrases, exit");
    println!("---------------------------------------------------------------");

    loop {
        print!("\n> ");
        if stdout().flush().is_err() {
            break;
        }
        let mut input = String::new();
        match stdin().read_line(&mut input) {
            Ok(0) => break,
            Ok(_) => {}
            Err(e) => {
                error!(error = %e, "could not read input");
                break;
            }
        }
        let line = input.trim();
        let (command, arg) = match line.split_once(' ') {
            Some((c, a)) => (c, a.trim()),
            None => (line, ""),
        };

        match command {
            "exit" => break,
            "" => {}
            ":add" => match workbook.add_word(arg) {
                Ok(outcome) => println!("{} '{}' ({:?})", "tracked".green(), arg.to_lowercase(), outcome),
                Err(e) => println!("{}", e.to_string().red()),
            },
            ":learn" => report_toggle(workbook.mark_learned(arg), arg, "marked as learned"),
            ":forget" => report_toggle(workbook.mark_unknown(arg), arg, "back to unknown"),
            ":suggest" => {
                let suggestions = workbook.suggest_words();
                if suggestions.is_empty() {
                    println!("No recurring untracked words yet.");
                }
                for (i, s) in suggestions.iter().enumerate() {
                    println!("  :{}: {} (seen {}x)", i + 1, s.word.as_str().yellow(), s.frequency);
                }
            }
            ":words" => {
                for entry in workbook.vocabulary.unknown_entries() {
                    println!(
                        "  {:<20} seen {:>3}  {}",
                        entry.word,
                        entry.times_seen,
                        entry.difficulty.as_str().dark_grey()
                    );
                }
                println!(
                    "{} unknown, {} learned",
                    workbook.vocabulary.unknown_count(),
                    workbook.vocabulary.learned_count()
                );
            }
            ":phrases" => {
                for phrase in workbook.phrases_by_ranking() {
                    println!(
                        "  #{} [{}] {}  {}",
                        phrase.id,
                        phrase.unknown_words_count,
                        phrase.target_text,
                        phrase.unknown_words.as_str().dark_grey()
                    );
                }
            }
            _ => {
                let (_, result) = workbook.record_phrase("", line);
                print_analysis(&result, &workbook);
            }
        }
    }

    println!("\nSaving workbook...");
    if let Err(e) = workbook.save() {
        eprintln!("[ERROR] Could not save workbook: {}", e);
    } else {
        println!("Workbook saved to '{}'", workbook_path.display());
    }
}

fn report_toggle(changed: bool, word: &str, what: &str) {
    if changed {
        println!("'{}' {}", word, what);
    } else {
        println!("{}", format!("'{}' is not tracked", word).red());
    }
}

fn print_analysis(result: &ClassificationResult, workbook: &Workbook) {
    let unknown = result.unknown_words();
    let line: Vec<String> = result
        .matched
        .iter()
        .chain(result.unmatched.iter())
        .map(|w| {
            if unknown.contains(w) {
                w.as_str().red().to_string()
            } else {
                w.as_str().green().to_string()
            }
        })
        .collect();
    println!("{}", line.join(" "));

    for variant in &result.inferred {
        println!("  {} -> {} ({:?})", variant.token, variant.base, variant.rule);
    }
    println!(
        "{} tokens, {} unknown, {:.0}% known, difficulty {}",
        result.total_tokens,
        unknown.len(),
        result.known_percentage(),
        workbook.engine.effort_difficulty(result).as_str().bold()
    );
}
