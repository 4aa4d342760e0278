//! Text cleanup shared by every parser.

/// Collapse runs of whitespace to single spaces and trim both ends.
///
/// # Examples
///
/// ```
/// use rink_normalization::normalize;
///
/// assert_eq!(normalize("  Husqvarna \n  Garden "), "Husqvarna Garden");
/// assert_eq!(normalize(""), "");
/// ```
pub fn normalize(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// [`normalize`] for optional input; absent text is an empty string.
pub fn normalize_opt(text: Option<&str>) -> String {
    text.map(normalize).unwrap_or_default()
}

/// Remove `(` and `)` and nothing else.
pub fn strip_parens(text: &str) -> String {
    text.chars().filter(|ch| !matches!(ch, '(' | ')')).collect()
}

/// True for the dash the report prints in place of a value (e.g. unplayed periods).
pub fn is_placeholder(token: &str) -> bool {
    let token = token.trim();
    token.is_empty() || token == "-"
}

/// Split on `sep`, trim each token and drop placeholders.
///
/// # Examples
///
/// ```
/// use rink_normalization::split_series;
///
/// assert_eq!(split_series("12:8:-", ':'), vec!["12", "8"]);
/// assert_eq!(split_series(" 1-0 , 0-1 ", ','), vec!["1-0", "0-1"]);
/// ```
pub fn split_series(text: &str, sep: char) -> Vec<String> {
    text.split(sep)
        .map(str::trim)
        .filter(|token| !is_placeholder(token))
        .map(ToString::to_string)
        .collect()
}

/// Keep ASCII digits only ("Spectators: 5 432" -> "5432").
pub fn digits_only(text: &str) -> String {
    text.chars().filter(char::is_ascii_digit).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_parens_keeps_everything_else() {
        assert_eq!(strip_parens("(12:34 - 14:34)"), "12:34 - 14:34");
        assert_eq!(strip_parens("(1-0,0-1)"), "1-0,0-1");
        assert_eq!(strip_parens("no parens"), "no parens");
    }

    #[test]
    fn normalize_opt_handles_absent_input() {
        assert_eq!(normalize_opt(None), "");
        assert_eq!(normalize_opt(Some(" a  b ")), "a b");
    }

    #[test]
    fn placeholder_detection() {
        assert!(is_placeholder("-"));
        assert!(is_placeholder("  "));
        assert!(!is_placeholder("-1"));
        assert!(!is_placeholder("0"));
    }

    #[test]
    fn digits_only_drops_separators() {
        assert_eq!(digits_only("Spectators: 5 432"), "5432");
        assert_eq!(digits_only("-"), "");
    }
}
