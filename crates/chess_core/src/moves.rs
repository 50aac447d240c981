// Moves are the rules library's own type: the search only compares them and
// hands them back to `apply`/`notation`.
pub use shakmaty::Move;

const RESULT_MARKERS: [&str; 4] = ["1-0", "0-1", "1/2-1/2", "*"];

/// Splits game text into move tokens.
///
/// Move numbers (`1.`, `12...`, the `3.` of `3.e4`), result markers and
/// trailing `!`/`?` annotations are dropped.
pub fn parse_game_string(game: &str) -> Vec<&str> {
    game.split_whitespace()
        .map(strip_move_number)
        .map(|token| token.trim_end_matches(&['!', '?'][..]))
        .filter(|token| !token.is_empty() && !RESULT_MARKERS.contains(token))
        .collect()
}

fn strip_move_number(token: &str) -> &str {
    let rest = token.trim_start_matches(|c: char| c.is_ascii_digit());
    if rest.len() < token.len() && rest.starts_with('.') {
        rest.trim_start_matches('.')
    } else {
        token
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_san_list() {
        assert_eq!(parse_game_string("e4 e5  Nf3\nNc6"), vec!["e4", "e5", "Nf3", "Nc6"]);
    }

    #[test]
    fn drops_numbers_and_results() {
        assert_eq!(
            parse_game_string("1. e4 e5 2.Nf3 Nc6 3... a6 1-0"),
            vec!["e4", "e5", "Nf3", "Nc6", "a6"]
        );
        assert_eq!(parse_game_string("1. f3 e5 2. g4 Qh4# 0-1"), vec!["f3", "e5", "g4", "Qh4#"]);
        assert_eq!(parse_game_string("1.d4 1/2-1/2"), vec!["d4"]);
    }

    #[test]
    fn strips_annotations() {
        assert_eq!(parse_game_string("e4!? e5?! Qh5??"), vec!["e4", "e5", "Qh5"]);
    }

    #[test]
    fn empty_game() {
        assert!(parse_game_string("   ").is_empty());
        assert!(parse_game_string("*").is_empty());
    }
}
