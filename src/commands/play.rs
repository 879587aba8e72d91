//! Interactive terminal game
//!
//! Text-based game: type a word per line, get coloured tiles back.

use crate::game::{Game, GameState};
use crate::output::formatters::{render_keyboard, render_row};
use anyhow::Result;
use colored::Colorize;
use std::io::{BufRead, Write};

const KEYS_PER_LINE: usize = 10;

/// Play `game` reading guesses from `input` and writing to `output`
///
/// Returns when the game ends, the player quits, or input runs out.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_play<R: BufRead, W: Write>(game: &mut Game<'_>, game_number: i64, mut input: R, output: &mut W) -> Result<()> {
    let pack = game.pack();
    let config = pack.config();

    writeln!(output, "\n{}", "═".repeat(60).bright_cyan())?;
    writeln!(
        output,
        "  {} {} · {}",
        "KimiKupu".bright_green().bold(),
        game_number,
        pack.display_name().bright_yellow()
    )?;
    writeln!(output, "{}", "═".repeat(60).bright_cyan())?;
    writeln!(
        output,
        "\nGuess the {}-letter word in {} tries.",
        config.word_length, config.tries
    )?;
    writeln!(output, "Commands: 'keys' to show the keyboard, 'quit' to exit\n")?;

    let mut line = String::new();
    while !game.is_over() {
        write!(
            output,
            "Guess {}/{}: ",
            game.rows().len() + 1,
            config.tries
        )?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(output)?;
            return Ok(());
        }

        match line.trim() {
            "" => {}
            "quit" | "q" | "exit" => {
                writeln!(output, "\n👋 The word was {}\n", game.solution().to_uppercase())?;
                return Ok(());
            }
            "keys" | "k" => {
                let keys = render_keyboard(pack.matcher().alphabet(), game.keyboard(), KEYS_PER_LINE);
                writeln!(output, "\n{keys}\n")?;
            }
            word => {
                let outcome = game.submit_word(word).map(|_| ());
                match outcome {
                    Ok(()) => print_board(game, output)?,
                    Err(e) => writeln!(output, "❌ {e}")?,
                }
            }
        }
    }

    match game.state() {
        GameState::Won => {
            let turns = game.rows().len();
            writeln!(
                output,
                "{}",
                format!(
                    "🎉 Solved in {turns} {}!",
                    if turns == 1 { "guess" } else { "guesses" }
                )
                .bright_green()
                .bold()
            )?;
        }
        GameState::Lost => {
            writeln!(
                output,
                "{} {}",
                "The word was".red(),
                game.solution().to_uppercase().bright_white().bold()
            )?;
        }
        GameState::InProgress => {}
    }

    if let Some(definition) = pack.definition(game.solution()) {
        writeln!(
            output,
            "{} {}",
            game.solution().to_uppercase().bright_white().bold(),
            format!("({definition})").italic()
        )?;
    }

    writeln!(output, "\n{}\n", game.share_text("KimiKupu", game_number))?;
    Ok(())
}

fn print_board<W: Write>(game: &Game<'_>, output: &mut W) -> Result<()> {
    writeln!(output)?;
    for row in game.rows() {
        writeln!(output, "  {}", render_row(&row.units, &row.feedback))?;
    }
    let keys = render_keyboard(game.pack().matcher().alphabet(), game.keyboard(), KEYS_PER_LINE);
    writeln!(output, "\n{keys}\n")?;
    Ok(())
}
