//! Simple interactive CLI mode
//!
//! Text-based rack prompt without TUI

use super::solve::solve_rack;
use crate::core::MAX_RACK_LEN;
use crate::output::print_solve_result;
use crate::solver::Solver;
use colored::Colorize;
use std::io::{self, Write};

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple(solver: &Solver) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║             Bookworm Solver - Interactive Mode               ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    let names: Vec<&str> = solver.registry().names().collect();
    println!("Dictionaries: {}", names.join(", "));
    println!("Enter up to {MAX_RACK_LEN} letters to find the strongest words.");
    println!("Spaces, digits and punctuation are ignored.\n");
    println!("Commands: 'quit' to exit\n");

    loop {
        let Some(input) = get_user_input("Letters")? else {
            println!("\n👋 Thanks for playing!\n");
            return Ok(());
        };

        match input.to_lowercase().as_str() {
            "quit" | "q" | "exit" => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            "" => {
                println!("{}\n", "Please enter letters".yellow());
            }
            _ => match solve_rack(&input, solver) {
                Ok(result) => print_solve_result(&result),
                Err(err) => println!("{}\n", format!("❌ {err}").red()),
            },
        }
    }
}

/// Get user input with a prompt
///
/// Returns `None` at end of input.
fn get_user_input(prompt: &str) -> Result<Option<String>, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok((read > 0).then(|| input.trim().to_string()))
}
