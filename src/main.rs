//! Terminal preview of a word rotation.
//!
//! Usage: `word-rotator "<word,word,...>" [rotations]`
//!
//! Runs the same rotator the browser uses against an in-memory stage,
//! sleeping through each interval and printing the displayed word. Set
//! `WORD_ROTATOR_CONFIG` to a TOML file to override timing.

#![allow(clippy::print_stdout, clippy::print_stderr)]

use std::path::Path;
use std::process;

use word_rotator::rotator::ManualScheduler;
use word_rotator::view::WordStage;
use word_rotator::{RotatorError, RotatorOptions, WordList, WordRotator};

const DEFAULT_ROTATIONS: usize = 6;

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    let Some(raw_words) = args.get(1) else {
        eprintln!(
            "Usage: {} <word,word,...> [rotations]",
            args.first().map_or("word-rotator", String::as_str)
        );
        process::exit(1);
    };
    let rotations = match args.get(2).map(|n| n.parse::<usize>()) {
        None => DEFAULT_ROTATIONS,
        Some(Ok(n)) => n,
        Some(Err(e)) => {
            eprintln!("invalid rotation count '{}': {e}", args[2]);
            process::exit(1);
        }
    };

    if let Err(e) = run(raw_words, rotations) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run(raw_words: &str, rotations: usize) -> Result<(), RotatorError> {
    let options = match std::env::var("WORD_ROTATOR_CONFIG") {
        Ok(path) => RotatorOptions::load(Path::new(&path))?,
        Err(_) => RotatorOptions::default(),
    };

    let words = WordList::parse(Some(raw_words));
    let stage = WordStage::new(words.first());
    let mut rotator = WordRotator::new(
        words,
        options.timing.clone(),
        ManualScheduler::new(),
        stage,
    );
    let _ = rotator.start()?;

    let Some(first) = rotator.current_word() else {
        println!("(no words to rotate)");
        return Ok(());
    };
    println!("{first}");

    for _ in 0..rotations {
        let Some(wait) = rotator.scheduler_mut().fire_next() else {
            break;
        };
        std::thread::sleep(wait);
        rotator.view_mut().advance(wait);
        rotator.rotate_word()?;
        if let Some(word) = rotator.view().active_word() {
            println!("{word}");
        }
    }
    Ok(())
}
