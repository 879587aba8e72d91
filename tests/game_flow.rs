//! End-to-end games through the public API

use chrono::NaiveDate;
use kimikupu::core::Status;
use kimikupu::game::{Game, GameError, GameState, share_text};
use kimikupu::languages::{Language, LanguageConfig, LanguagePack};

fn pack(language: Language) -> LanguagePack {
    LanguagePack::new(language, LanguageConfig::default()).unwrap()
}

#[test]
fn every_language_has_a_daily_puzzle() {
    let today = NaiveDate::from_ymd_opt(2024, 7, 1).unwrap();

    for language in Language::ALL {
        let pack = pack(language);
        assert!(!pack.words().is_empty(), "{language} has no playable words");

        let daily = pack.word_of_day(today).unwrap();
        assert!(pack.is_word_in_word_list(&daily.solution));
        assert_eq!(pack.split(&daily.solution).len(), 5);
    }
}

#[test]
fn daily_puzzle_is_solvable_with_its_own_word() {
    let pack = pack(Language::Hawaiian);
    let daily = pack
        .word_of_day(NaiveDate::from_ymd_opt(2023, 3, 14).unwrap())
        .unwrap();

    let mut game = Game::new(&pack, &daily.solution).unwrap();
    let row = game.submit_word(&daily.solution).unwrap();
    assert!(row.feedback.is_perfect());
    assert_eq!(game.state(), GameState::Won);

    let share = game.share_text("KimiKupu", daily.index);
    assert_eq!(
        share,
        format!("KimiKupu {} 1/6\n\n🟩🟩🟩🟩🟩", daily.index)
    );
}

#[test]
fn hawaiian_okina_is_a_letter() {
    let pack = pack(Language::Hawaiian);
    let mut game = Game::new(&pack, "ʻāina").unwrap();

    // typed with an ASCII apostrophe
    let row = game.submit_word("'āina").unwrap();
    assert_eq!(row.units, ["ʻ", "ā", "i", "n", "a"]);
    assert!(row.feedback.is_perfect());
}

#[test]
fn maori_digraphs_score_as_one_tile() {
    let config = LanguageConfig {
        word_length: 4,
        ..LanguageConfig::default()
    };
    let pack = LanguagePack::with_words(Language::Maori, config, ["whare", "rangi", "waka"])
        .unwrap();
    let mut game = Game::new(&pack, "whare").unwrap();

    // "waka" has a plain w, which is not the wh of the solution
    let row = game.submit_word("waka").unwrap();
    assert_eq!(
        row.feedback.statuses(),
        &[Status::Absent, Status::Correct, Status::Absent, Status::Absent]
    );
    assert_eq!(game.keyboard().get("w"), Some(Status::Absent));
    assert_eq!(game.keyboard().get("wh"), None);

    game.submit_word("whare").unwrap();
    assert_eq!(game.state(), GameState::Won);
    assert_eq!(game.keyboard().get("wh"), Some(Status::Correct));
}

#[test]
fn keyboard_tracks_best_status_across_guesses() {
    let pack = pack(Language::Maori);
    let mut game = Game::new(&pack, "aroha").unwrap();

    game.submit_word("marae").unwrap();
    assert_eq!(game.keyboard().get("r"), Some(Status::Present));

    game.submit_word("aroha").unwrap();
    assert_eq!(game.keyboard().get("r"), Some(Status::Correct));
    assert_eq!(game.keyboard().get("m"), Some(Status::Absent));
}

#[test]
fn lost_game_refuses_more_guesses() {
    let config = LanguageConfig {
        tries: 2,
        ..LanguageConfig::default()
    };
    let pack = LanguagePack::new(Language::Maori, config).unwrap();
    let mut game = Game::new(&pack, "aroha").unwrap();

    game.submit_word("marae").unwrap();
    game.submit_word("marae").unwrap();
    assert_eq!(game.state(), GameState::Lost);
    assert_eq!(game.submit_word("aroha"), Err(GameError::GameOver));

    let share = game.share_text("KimiKupu", 7);
    assert!(share.starts_with("KimiKupu 7 X/2\n\n"));
    assert_eq!(share.lines().count(), 4);
}

#[test]
fn config_file_changes_the_rules() {
    let config = LanguageConfig::from_toml_str(
        "tries = 3\nword_length = 4\ndisplay_name = \"Te Reo\"\n",
    )
    .unwrap();
    let pack = LanguagePack::new(Language::Maori, config).unwrap();

    assert_eq!(pack.display_name(), "Te Reo");
    assert!(pack.words().iter().all(|w| pack.split(w).len() == 4));
    assert!(pack.is_word_in_word_list("whare"));
}

#[test]
fn hard_mode_mark_comes_from_the_caller() {
    let pack = pack(Language::Maori);
    let mut game = Game::new(&pack, "aroha").unwrap();
    game.submit_word("aroha").unwrap();

    let feedback: Vec<_> = game.rows().iter().map(|r| r.feedback.clone()).collect();
    let text = share_text("KimiKupu", 9, &feedback, false, 6, true);
    assert!(text.starts_with("KimiKupu 9 1/6*\n\n"));
}

#[test]
fn solution_must_have_word_length_units() {
    let pack = pack(Language::Maori);

    // w-h-a-r-e would be five characters but it is four letters
    let err = Game::new(&pack, "whare").err().unwrap();
    assert_eq!(
        err,
        GameError::InvalidSolution {
            solution: "whare".to_string(),
            got: 4,
            needed: 5
        }
    );
    assert!(Game::new(&pack, "aroha").is_ok());
}

#[test]
fn words_outside_the_solution_list_can_be_guessed() {
    let pack = pack(Language::Hawaiian);
    let mut game = Game::new(&pack, "aloha").unwrap();

    assert!(!pack.is_solution_word("heiau"));
    let row = game.submit_word("heiau").unwrap();
    assert_eq!(row.units, ["h", "e", "i", "a", "u"]);
    assert_eq!(game.state(), GameState::InProgress);
}
