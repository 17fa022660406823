//! logos-based tokenizer for translation strings with `%{name}` placeholders.

use logos::Logos;

/// A piece of a translation string.
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
pub enum Piece {
    /// `%{name}`
    #[regex(r"%\{[^}]*\}")]
    Placeholder,

    /// Literal text up to the next `%`.
    #[regex(r"[^%]+")]
    Text,

    /// A `%` that does not open a placeholder.
    #[token("%")]
    Percent,
}

/// Split a translation string into `(piece, slice)` pairs.
pub fn tokenize(input: &str) -> Vec<(Piece, &str)> {
    Piece::lexer(input)
        .spanned()
        .filter_map(|(result, span)| result.ok().map(|piece| (piece, &input[span])))
        .collect()
}

/// The placeholder name inside `%{...}`.
pub fn placeholder_name(slice: &str) -> &str {
    slice
        .strip_prefix("%{")
        .and_then(|s| s.strip_suffix('}'))
        .unwrap_or(slice)
}

/// Replace each placeholder with `lookup(name)`.
///
/// Stops at the first placeholder `lookup` cannot resolve and returns its
/// full `%{name}` text as the error.
pub fn render<'a, F>(input: &'a str, mut lookup: F) -> Result<String, &'a str>
where
    F: FnMut(&str) -> Option<String>,
{
    let mut out = String::with_capacity(input.len());
    for (piece, slice) in tokenize(input) {
        match piece {
            Piece::Placeholder => match lookup(placeholder_name(slice)) {
                Some(value) => out.push_str(&value),
                None => return Err(slice),
            },
            Piece::Text | Piece::Percent => out.push_str(slice),
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_text_and_placeholders() {
        assert_eq!(
            tokenize("You have %{count} characters remaining"),
            vec![
                (Piece::Text, "You have "),
                (Piece::Placeholder, "%{count}"),
                (Piece::Text, " characters remaining"),
            ]
        );
    }

    #[test]
    fn lone_percent() {
        assert_eq!(
            tokenize("100% done"),
            vec![(Piece::Text, "100"), (Piece::Percent, "%"), (Piece::Text, " done")]
        );
    }

    #[test]
    fn placeholder_names() {
        assert_eq!(placeholder_name("%{count}"), "count");
        assert_eq!(placeholder_name("%{}"), "");
    }

    #[test]
    fn render_replaces_all() {
        let out = render("%{a} and %{b}", |name| Some(name.to_uppercase())).unwrap();
        assert_eq!(out, "A and B");
    }

    #[test]
    fn render_reports_missing() {
        let err = render("Hi %{name}", |_| None).unwrap_err();
        assert_eq!(err, "%{name}");
    }

    #[test]
    fn render_without_placeholders_is_identity() {
        assert_eq!(render("plain 50%", |_| None).unwrap(), "plain 50%");
    }
}
