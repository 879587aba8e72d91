//! Display functions for command results

use super::formatters::{create_progress_bar, render_row};
use crate::commands::{AuditResult, CheckResult, SplitResult};
use colored::Colorize;

/// Print the result of splitting a word
pub fn print_split_result(result: &SplitResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!("Word:  {}", result.word.bright_yellow().bold());
    if result.normalized != result.word {
        println!("Normalized: {}", result.normalized);
    }
    println!("{}", "─".repeat(60).cyan());

    println!(
        "\n  {} ({} units)",
        result.units.join(" · ").bright_white().bold(),
        result.units.len()
    );

    if !result.fully_tokenized {
        println!(
            "  {}",
            "⚠ some characters are not in the orthography and were dropped".yellow()
        );
    }
    if result.playable {
        println!("  {}", "✓ in the word list".green());
    }
}

/// Print the result of checking a guess
pub fn print_check_result(result: &CheckResult) {
    println!(
        "\nSolution: {}",
        result.solution_units.join(" · ").bright_yellow().bold()
    );
    println!("\n  {}", render_row(&result.guess_units, &result.feedback));
    println!("  {}\n", result.feedback.to_emoji());

    if result.feedback.is_perfect() {
        println!("{}", "✅ Correct!".green().bold());
    } else {
        println!(
            "Correct: {}  Present: {}",
            result.feedback.count_correct(),
            result.feedback.count_present()
        );
    }
}

/// Print the result of a word list audit
pub fn print_audit_result(result: &AuditResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "WORD LIST AUDIT".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Summary:".bright_cyan().bold());
    println!("   Entries:          {}", result.total_words);
    println!(
        "   Playable:         {} ({} units)",
        result.playable.to_string().bright_yellow().bold(),
        result.word_length
    );
    println!("   Not tokenizable:  {}", result.untokenized.len());
    println!("   Time taken:       {:.3}s", result.duration.as_secs_f64());

    println!("\n📈 {}", "Units per word:".bright_cyan().bold());
    let max = result.distribution.values().copied().max().unwrap_or(0);
    for (&units, &count) in &result.distribution {
        let bar = create_progress_bar(count as f64, max as f64, 40);
        let bar = if units == result.word_length {
            bar.green()
        } else {
            bar.bright_black()
        };
        println!("   {units:2}: {bar} {count:4}");
    }

    if !result.untokenized.is_empty() {
        println!("\n⚠ {}", "Entries outside the orthography:".yellow().bold());
        for word in &result.untokenized {
            println!("   • {word}");
        }
    }
}
