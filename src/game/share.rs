//! Shareable result text

use crate::core::Feedback;

/// One row of squares per guess, newline separated
///
/// # Examples
/// ```
/// use kimikupu::core::Feedback;
/// use kimikupu::game::emoji_grid;
///
/// let rows: Vec<Feedback> = vec!["-Y--G".parse().unwrap(), "GGGGG".parse().unwrap()];
/// assert_eq!(emoji_grid(&rows), "⬜🟨⬜⬜🟩\n🟩🟩🟩🟩🟩");
/// ```
#[must_use]
pub fn emoji_grid<'a, I>(feedbacks: I) -> String
where
    I: IntoIterator<Item = &'a Feedback>,
{
    feedbacks
        .into_iter()
        .map(Feedback::to_emoji)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Full share message: title line, blank line, emoji grid
///
/// The score is the number of guesses, or `X` for a lost game. `hard_mode`
/// appends `*`; set it only when the caller enforced hard-mode rules.
#[must_use]
pub fn share_text(
    game_name: &str,
    game_number: i64,
    feedbacks: &[Feedback],
    lost: bool,
    tries: usize,
    hard_mode: bool,
) -> String {
    let score = if lost {
        "X".to_string()
    } else {
        feedbacks.len().to_string()
    };
    let hard = if hard_mode { "*" } else { "" };

    format!(
        "{game_name} {game_number} {score}/{tries}{hard}\n\n{}",
        emoji_grid(feedbacks)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(patterns: &[&str]) -> Vec<Feedback> {
        patterns.iter().map(|p| p.parse().unwrap()).collect()
    }

    #[test]
    fn grid_empty() {
        assert_eq!(emoji_grid(&Vec::<Feedback>::new()), "");
    }

    #[test]
    fn share_won() {
        let text = share_text("KimiKupu", 412, &rows(&["Y---G", "GGGGG"]), false, 6, false);
        assert_eq!(text, "KimiKupu 412 2/6\n\n🟨⬜⬜⬜🟩\n🟩🟩🟩🟩🟩");
    }

    #[test]
    fn share_lost_hard_mode() {
        let text = share_text("KimiKupu", 3, &rows(&["-----"; 6]), true, 6, true);
        assert!(text.starts_with("KimiKupu 3 X/6*\n\n"));
        assert_eq!(text.lines().count(), 8);
    }
}
