//! Display functions for session results

use colored::Colorize;

use crate::core::Puzzle;
use crate::session::SessionSummary;

/// Print the end-of-session report: score, level status, missed words
pub fn print_session_summary(summary: &SessionSummary) {
    println!("\n{}", "─".repeat(60).cyan());
    if summary.level_passed {
        println!("{}", "Level passed! You found the six-letter word.".green().bold());
    } else {
        println!("{}", "Time's up — level not passed.".red().bold());
    }
    println!("Final score: {}", summary.score.to_string().bright_yellow().bold());

    if summary.missing_words.is_empty() {
        println!("{}", "You found every word!".green());
    } else {
        println!("\nWords you missed:");
        for word in &summary.missing_words {
            println!("  {}", word.dimmed());
        }
    }
    println!("{}", "─".repeat(60).cyan());
}

/// Print a puzzle's base word and candidate set
pub fn print_puzzle(puzzle: &Puzzle, show_words: bool) {
    println!(
        "Base word: {}",
        puzzle.base_word().to_uppercase().bright_yellow().bold()
    );
    println!("Solutions: {}", puzzle.solution_count());

    if show_words {
        let mut words: Vec<&String> = puzzle.candidates().iter().collect();
        words.sort_unstable();
        for word in words {
            println!("  {word}");
        }
    }
}

/// Feedback line for an accepted word
pub fn print_accepted(word: &str, score: u32) {
    println!(
        "{} {} (score: {})",
        "✓".green().bold(),
        word.to_lowercase(),
        score
    );
}

/// Feedback line for a rejected word
pub fn print_rejected(word: &str) {
    println!("{} {}", "✗".red(), word.to_lowercase().dimmed());
}
