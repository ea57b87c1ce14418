//! Interactive terminal play mode
//!
//! A plain stdin/stdout front end for the session engine. The countdown runs
//! on the clock's own thread; the loop shows remaining time with each prompt
//! and the session-ended callback prints the final report whenever the clock
//! reaches zero, whether naturally or through early completion.

use std::io::{self, Write};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::output::display::{
    print_accepted, print_rejected, print_session_summary,
};
use crate::output::formatters::{format_seconds, letter_rack};
use crate::session::{GameSession, SESSION_ENDED};

/// Run the interactive play loop
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or if a new
/// level cannot be selected from the word bank.
pub fn run_play(session: &GameSession) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                 Twistcore - Interactive Mode                 ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    println!("Spell as many words as you can from the six letters before the");
    println!("clock runs out. Each word scores its length; finding the full");
    println!("six-letter word passes the level.\n");
    println!("Commands: 'quit' to exit, 'new' for a new level\n");

    let ended = Arc::new(AtomicBool::new(false));
    let ended_flag = Arc::clone(&ended);
    session.register_ui_callback(SESSION_ENDED, move |summary| {
        print_session_summary(summary);
        ended_flag.store(true, Ordering::SeqCst);
    });

    start_new_level(session, &ended)?;

    loop {
        if ended.load(Ordering::SeqCst) {
            match get_user_input("Play another level? (yes/no)")?
                .to_lowercase()
                .as_str()
            {
                "yes" | "y" => start_new_level(session, &ended)?,
                _ => {
                    session.reset_game();
                    println!("\nThanks for playing!\n");
                    return Ok(());
                }
            }
            continue;
        }

        let prompt = format!(
            "[{}] {} found of {} | word",
            format_seconds(session.clock().remaining()),
            session.solution_words().len(),
            session.wordlist().len()
        );
        let input = get_user_input(&prompt)?.to_lowercase();

        match input.as_str() {
            "quit" | "q" | "exit" => {
                session.reset_game();
                println!("\nThanks for playing!\n");
                return Ok(());
            }
            "new" | "n" => {
                session.reset_game();
                start_new_level(session, &ended)?;
            }
            "" => {}
            word => {
                // The clock may have expired while we waited on stdin
                if ended.load(Ordering::SeqCst) {
                    continue;
                }
                if session.submit(word) {
                    print_accepted(word, session.score());
                    if session.is_level_passed() {
                        println!("  (six-letter word found — level passed)");
                    }
                } else {
                    print_rejected(word);
                }
            }
        }
    }
}

fn start_new_level(session: &GameSession, ended: &AtomicBool) -> Result<(), String> {
    session
        .start_level()
        .map_err(|e| format!("Could not start a level: {e}"))?;
    ended.store(false, Ordering::SeqCst);

    println!("\n────────────────────────────────────────────────────────────");
    println!("  {}", letter_rack(&session.letters()));
    println!("────────────────────────────────────────────────────────────");
    println!(
        "{} words to find, {} on the clock\n",
        session.wordlist().len(),
        format_seconds(session.clock().remaining())
    );
    Ok(())
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input.trim().to_string())
}
