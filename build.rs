//! Build script to generate embedded word lists
//!
//! Reads two lists per language from `data/`: `<code>.txt` holds the
//! solution words, `<code>.guesses.txt` extra words accepted as guesses.
//! Lines are `word` or `word<TAB>definition`. Generates Rust source with
//! const arrays.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

const LANGUAGES: &[(&str, &str, &str)] = &[
    ("haw", "HAWAIIAN", "Hawaiian"),
    ("mao", "MAORI", "Māori"),
    ("tah", "TAHITIAN", "Tahitian"),
    ("sam", "SAMOAN", "Samoan"),
];

struct Entry {
    word: String,
    definition: Option<String>,
}

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let output_path = Path::new(&out_dir).join("words.rs");

    let mut output = fs::File::create(&output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated word lists").unwrap();

    for &(code, prefix, name) in LANGUAGES {
        let solutions_path = format!("data/{code}.txt");
        let guesses_path = format!("data/{code}.guesses.txt");
        let solutions = read_entries(&solutions_path);
        let guesses = read_entries(&guesses_path);

        write_words(&mut output, &format!("{prefix}_WORDS"), &format!("{name} solution words"), &solutions);
        write_words(&mut output, &format!("{prefix}_GUESSES"), &format!("{name} extra valid guesses"), &guesses);
        write_definitions(&mut output, &format!("{prefix}_DEFINITIONS"), name, solutions.iter().chain(&guesses));

        println!("cargo:rerun-if-changed={solutions_path}");
        println!("cargo:rerun-if-changed={guesses_path}");
    }
}

fn read_entries(input_path: &str) -> Vec<Entry> {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    content
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| {
            let (word, definition) = match line.split_once('\t') {
                Some((word, definition)) => (word, Some(definition.trim())),
                None => (line, None),
            };
            Entry {
                word: word.trim().to_string(),
                definition: definition.filter(|d| !d.is_empty()).map(str::to_string),
            }
        })
        .collect()
}

fn write_words(output: &mut fs::File, const_name: &str, doc_comment: &str, entries: &[Entry]) {
    writeln!(output).unwrap();
    writeln!(output, "/// {doc_comment} ({} entries)", entries.len()).unwrap();
    writeln!(output, "pub const {const_name}: &[&str] = &[").unwrap();

    for entry in entries {
        writeln!(output, "    {:?},", entry.word).unwrap();
    }

    writeln!(output, "];").unwrap();
}

fn write_definitions<'a>(
    output: &mut fs::File,
    const_name: &str,
    name: &str,
    entries: impl Iterator<Item = &'a Entry>,
) {
    writeln!(output).unwrap();
    writeln!(output, "/// {name} word definitions").unwrap();
    writeln!(output, "pub const {const_name}: &[(&str, &str)] = &[").unwrap();

    for entry in entries {
        if let Some(definition) = &entry.definition {
            writeln!(output, "    ({:?}, {definition:?}),", entry.word).unwrap();
        }
    }

    writeln!(output, "];").unwrap();
}
