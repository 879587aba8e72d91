//! Property tests for tokenizing and guess evaluation

use kimikupu::core::{Matcher, Puzzle, Status, fold};
use proptest::prelude::*;
use std::collections::HashMap;

/// Units whose concatenations never re-tokenize differently
const CLEAN_UNITS: &[&str] = &["a", "ā", "e", "h", "k", "ng", "wh", "r"];

/// Units where "w" + "h" and "n" + "g" collide with the digraphs "wh" and "ng"
const OVERLAPPING_UNITS: &[&str] = &["a", "e", "g", "h", "k", "n", "ng", "w", "wh"];

fn unit_seq(units: &'static [&'static str], len: impl Into<proptest::sample::SizeRange>) -> impl Strategy<Value = Vec<&'static str>> {
    prop::collection::vec(prop::sample::select(units), len)
}

fn maybe_upper(units: Vec<&'static str>, flags: Vec<bool>) -> String {
    units
        .iter()
        .zip(flags.iter().chain(std::iter::repeat(&false)))
        .map(|(u, &up)| if up { u.to_uppercase() } else { (*u).to_string() })
        .collect()
}

proptest! {
    #[test]
    fn split_of_alphabet_text_is_lossless(
        units in unit_seq(OVERLAPPING_UNITS, 0..16),
        flags in prop::collection::vec(any::<bool>(), 0..16),
    ) {
        let matcher = Matcher::build(OVERLAPPING_UNITS.iter().copied()).unwrap();
        let word = maybe_upper(units, flags);

        let split = matcher.split(&word);
        prop_assert_eq!(split.concat(), word.clone());
        prop_assert!(matcher.is_fully_tokenized(&word));
        prop_assert!(split.len() <= word.chars().count());
    }

    #[test]
    fn split_prefers_longest_unit(units in unit_seq(OVERLAPPING_UNITS, 0..16)) {
        let matcher = Matcher::build(OVERLAPPING_UNITS.iter().copied()).unwrap();
        let split = matcher.split(&units.concat());

        for pair in split.windows(2) {
            prop_assert!(!(pair[0] == "w" && pair[1] == "h"));
            prop_assert!(!(pair[0] == "n" && pair[1].starts_with('g')));
        }
    }

    #[test]
    fn split_is_idempotent(text in "[a-zA-Zāē ʻ'-]{0,24}") {
        let matcher = Matcher::build(OVERLAPPING_UNITS.iter().copied()).unwrap();
        prop_assert_eq!(matcher.split(&text), matcher.split(&text));
        prop_assert_eq!(matcher.unit_count(&text), matcher.split(&text).len());
    }

    #[test]
    fn split_clean_units_round_trip(units in unit_seq(CLEAN_UNITS, 0..12)) {
        let matcher = Matcher::build(CLEAN_UNITS.iter().copied()).unwrap();
        prop_assert_eq!(matcher.split(&units.concat()), units);
    }

    #[test]
    fn split_drops_only_foreign_characters(text in "[a-zāA-Z0-9 ]{0,20}") {
        let matcher = Matcher::build(CLEAN_UNITS.iter().copied()).unwrap();
        let split = matcher.split(&text);
        for unit in &split {
            prop_assert!(matcher.contains_unit(unit));
        }
        let kept: usize = split.iter().map(|u| u.chars().count()).sum();
        prop_assert!(kept <= text.chars().count());
    }

    #[test]
    fn correct_exactly_where_units_match(
        solution in unit_seq(CLEAN_UNITS, 5),
        guess in unit_seq(CLEAN_UNITS, 5),
    ) {
        let matcher = Matcher::build(CLEAN_UNITS.iter().copied()).unwrap();
        let puzzle = Puzzle::new(matcher, solution.concat());
        let feedback = puzzle.evaluate(&guess).unwrap();

        prop_assert_eq!(feedback.len(), 5);
        for (i, status) in feedback.statuses().iter().enumerate() {
            prop_assert_eq!(*status == Status::Correct, guess[i] == solution[i]);
        }
    }

    #[test]
    fn marked_units_never_exceed_solution_count(
        solution in unit_seq(CLEAN_UNITS, 5),
        guess in unit_seq(CLEAN_UNITS, 5),
    ) {
        let matcher = Matcher::build(CLEAN_UNITS.iter().copied()).unwrap();
        let puzzle = Puzzle::new(matcher, solution.concat());
        let feedback = puzzle.evaluate(&guess).unwrap();

        let mut in_solution: HashMap<&str, usize> = HashMap::new();
        for unit in &solution {
            *in_solution.entry(*unit).or_default() += 1;
        }
        let mut in_guess: HashMap<&str, usize> = HashMap::new();
        for unit in &guess {
            *in_guess.entry(*unit).or_default() += 1;
        }
        let mut marked: HashMap<&str, usize> = HashMap::new();
        for (unit, status) in guess.iter().zip(&feedback) {
            if *status != Status::Absent {
                *marked.entry(*unit).or_default() += 1;
            }
        }

        for (unit, &count) in &in_guess {
            let expected = count.min(in_solution.get(unit).copied().unwrap_or(0));
            prop_assert_eq!(marked.get(unit).copied().unwrap_or(0), expected);
        }
    }

    #[test]
    fn solution_scores_perfect(solution in unit_seq(CLEAN_UNITS, 1..8)) {
        let matcher = Matcher::build(CLEAN_UNITS.iter().copied()).unwrap();
        let word = solution.concat();
        let puzzle = Puzzle::new(matcher, word);

        let upper: Vec<String> = solution.iter().map(|u| u.to_uppercase()).collect();
        prop_assert!(puzzle.evaluate(&upper).unwrap().is_perfect());
        prop_assert!(puzzle.is_solution(&upper));
    }

    #[test]
    fn wrong_length_guess_is_rejected(
        solution in unit_seq(CLEAN_UNITS, 5),
        guess in unit_seq(CLEAN_UNITS, 0..10),
    ) {
        prop_assume!(guess.len() != 5);
        let matcher = Matcher::build(CLEAN_UNITS.iter().copied()).unwrap();
        let puzzle = Puzzle::new(matcher, solution.concat());
        prop_assert!(puzzle.evaluate(&guess).is_err());
    }

    #[test]
    fn keyboard_takes_best_status_and_never_downgrades(
        solution in unit_seq(CLEAN_UNITS, 5),
        guesses in prop::collection::vec(unit_seq(CLEAN_UNITS, 5), 1..6),
    ) {
        let matcher = Matcher::build(CLEAN_UNITS.iter().copied()).unwrap();
        let puzzle = Puzzle::new(matcher, solution.concat());

        let mut best: HashMap<String, Status> = HashMap::new();
        for guess in &guesses {
            let feedback = puzzle.evaluate(guess).unwrap();
            for (unit, &status) in guess.iter().zip(&feedback) {
                let entry = best.entry(fold(unit)).or_insert(status);
                *entry = (*entry).max(status);
            }
        }

        let keyboard = puzzle.keyboard(&guesses).unwrap();
        prop_assert_eq!(keyboard.len(), best.len());
        for (unit, status) in &best {
            prop_assert_eq!(keyboard.get(unit), Some(*status));
        }

        for n in 1..guesses.len() {
            let earlier = puzzle.keyboard(&guesses[..n]).unwrap();
            for (unit, status) in earlier.iter() {
                prop_assert!(keyboard.get(unit).is_some_and(|now| now >= status));
            }
        }
    }
}
