//! Display functions for command results

use super::formatters::{format_strength, strength_bar};
use crate::commands::{AnalysisResult, BenchmarkResult, SolveResult};
use crate::wordlists::LoadError;
use colored::Colorize;

/// Print the result of solving a rack
pub fn print_solve_result(result: &SolveResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Rack: {}",
        result.rack.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (name, words) in &result.results {
        println!(
            "\n📖 {} {}",
            name.bright_cyan().bold(),
            format!("({} shown)", words.len()).bright_black()
        );

        if words.is_empty() {
            println!("   {}", "no words found".bright_black());
            continue;
        }

        let strongest = words.first().map_or(0.0, |w| w.strength);
        for (i, word) in words.iter().enumerate() {
            println!(
                "  {:>2}. {:<16} {} {}",
                i + 1,
                word.word,
                strength_bar(word.strength, strongest, 12).green(),
                format_strength(word.strength).bright_yellow()
            );
        }
    }

    println!(
        "\n{}",
        format!(
            "✅ {} words in {:.2}ms",
            result.total_words(),
            result.duration.as_secs_f64() * 1000.0
        )
        .green()
        .bold()
    );
    println!();
}

/// Print the result of word analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "STRENGTH ANALYSIS:".bright_cyan().bold(),
        result.word.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 Scoring units:");
    for (text, weight) in &result.units {
        let label = if text.len() > 1 {
            format!("{text} (digraph)")
        } else {
            text.clone()
        };
        println!("   {label:<14} {weight:>5.2}");
    }
    println!(
        "   {:<14} {}",
        "Total".bold(),
        format!("{:>5.2}", result.strength).bright_yellow().bold()
    );
    println!("   Displayed:     {}", format_strength(result.strength));

    if result.found_in.is_empty() {
        println!("\n📖 Not found in any dictionary");
    } else {
        println!("\n📖 Found in: {}", result.found_in.join(", ").green());
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Racks solved:     {}", result.total_racks);
    println!(
        "   Average matches:  {}",
        format!("{:.2}", result.average_matches)
            .bright_yellow()
            .bold()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Racks/second:     {:.1}", result.racks_per_second);

    if let Some((rack, matches)) = &result.richest_rack {
        println!(
            "   Richest rack:     {} ({} words)",
            rack.to_uppercase().green(),
            matches
        );
    }
}

/// Report dictionaries that failed to load
pub fn print_load_failures(failures: &[LoadError]) {
    for failure in failures {
        eprintln!("{} {failure}", "⚠ skipped".yellow().bold());
    }
}
