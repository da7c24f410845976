//! Simple interactive CLI mode
//!
//! Text-based two-player match without TUI. Both players share the
//! terminal and take turns typing full words; the hidden target stays the
//! same until someone hits it.

use crate::commands::pick_target;
use crate::game::{Phase, Session};
use crate::output::{guess_row, tile_row};
use crate::wordlists::Dictionary;
use colored::Colorize;
use std::io::{self, Write};

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or if the
/// dictionary has no candidate words.
pub fn run_simple(dictionary: &Dictionary, forced_length: Option<usize>) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║              Korean Word Duel - Two Player Mode              ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Players alternate guessing the hidden word. Cell colors:");
    println!("  - Green:  right syllable, right position");
    println!("  - Yellow: syllable occurs elsewhere in the word");
    println!("  - Red:    syllable not in the remaining word\n");
    println!("Commands: 'quit' to exit, 'new' for a new word, 'tiles' to reshow tiles\n");

    let mut rng = rand::rng();
    let target =
        pick_target(dictionary, forced_length, &mut rng).ok_or("No words in the dictionary")?;
    let mut session = Session::new(target);

    print_round_intro(&session);

    loop {
        let prompt = format!(
            "Player {} - enter a {}-syllable word",
            session.current_player(),
            session.target().len()
        );
        let input = get_user_input(&prompt)?.to_lowercase();

        match input.as_str() {
            "quit" | "q" | "exit" => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            "new" | "n" => {
                let target = pick_target(dictionary, forced_length, &mut rng)
                    .ok_or("No words in the dictionary")?;
                session.reset(target);
                println!("\n🔄 New round started!\n");
                print_round_intro(&session);
                continue;
            }
            "tiles" | "t" => {
                print_tiles(&session);
                continue;
            }
            _ => {}
        }

        let cells = row_from_input(&input, session.target().len());
        let submitter = session.current_player();

        match session.submit(&cells) {
            Err(error) => {
                println!("❌ {}\n", error.to_string().bright_red());
            }
            Ok(submission) => {
                if let Some(attempt) = session.history(submitter).last() {
                    println!("\n   {}\n", guess_row(&attempt.word, &attempt.hints));
                }

                if submission.won {
                    print_victory(&session);

                    match get_user_input("Play again? (yes/no)")?
                        .to_lowercase()
                        .as_str()
                    {
                        "yes" | "y" => {
                            let target = pick_target(dictionary, forced_length, &mut rng)
                                .ok_or("No words in the dictionary")?;
                            session.reset(target);
                            println!("\n🔄 New round started!\n");
                            print_round_intro(&session);
                        }
                        _ => {
                            println!("\n👋 Thanks for playing!\n");
                            return Ok(());
                        }
                    }
                } else {
                    println!(
                        "Over to {}\n",
                        format!("Player {}", session.current_player()).bright_cyan()
                    );
                }
            }
        }
    }
}

/// Turn typed text into a guess row of the target's length
///
/// Short input pads with blanks (rejected as incomplete by the session),
/// long input truncates.
fn row_from_input(input: &str, len: usize) -> Vec<Option<char>> {
    let mut cells: Vec<Option<char>> = input.chars().take(len).map(Some).collect();
    cells.resize(len, None);
    cells
}

fn print_round_intro(session: &Session) {
    println!(
        "The hidden word has {} syllables.",
        session.target().len().to_string().bright_white().bold()
    );
    print_tiles(session);
}

fn print_tiles(session: &Session) {
    println!(
        "  Consonant tiles: {}",
        tile_row(&session.tiles().consonants).bright_yellow()
    );
    println!(
        "  Vowel tiles:     {}\n",
        tile_row(&session.tiles().vowels).bright_yellow()
    );
}

fn print_victory(session: &Session) {
    let winner = match session.phase() {
        Phase::Won(player) => player,
        Phase::InProgress | Phase::Drawn => return,
    };

    println!("{}", "═".repeat(64).bright_cyan());
    println!(
        "{}",
        format!("    🎉  Player {winner} wins!  🎉    ")
            .bright_green()
            .bold()
    );
    println!(
        "    The word was {}",
        session.target().text().bright_white().bold()
    );
    println!("{}\n", "═".repeat(64).bright_cyan());

    for player in [crate::game::Player::One, crate::game::Player::Two] {
        let history = session.history(player);
        if history.is_empty() {
            continue;
        }
        println!("  Player {player} guesses:");
        for (i, attempt) in history.iter().enumerate() {
            println!(
                "    {}. {} {}",
                (i + 1).to_string().bright_black(),
                attempt.word.text().bright_white(),
                attempt.hints.to_emoji()
            );
        }
        println!();
    }
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_from_input_pads_short_input() {
        let cells = row_from_input("사과", 4);
        assert_eq!(cells, vec![Some('사'), Some('과'), None, None]);
    }

    #[test]
    fn row_from_input_truncates_long_input() {
        let cells = row_from_input("사과나무들", 4);
        assert_eq!(cells, vec![Some('사'), Some('과'), Some('나'), Some('무')]);
    }

    #[test]
    fn row_from_input_exact_length() {
        let cells = row_from_input("바나나", 3);
        assert_eq!(cells, vec![Some('바'), Some('나'), Some('나')]);
    }
}
