//! Line formatters
//!
//! A formatter turns a token sequence into one line of text without a
//! trailing newline. Tokens are consumed in pairs; a final token with no
//! partner is emitted bare.
//!
//! - [`key_value`]: `key=value` segments, whitespace-bearing keys and values quoted (default)
//! - [`join`]: `key: value` segments, never quoted

use super::token::Token;

/// A stateless line formatter
pub type Formatter = fn(&[Token]) -> String;

/// Default formatter: `k1=v1 k2=v2`
///
/// ```
/// use readable::{formatter, tokens};
///
/// assert_eq!(formatter::key_value(&tokens!["listener", ":3000"]), "listener=:3000");
/// assert_eq!(formatter::key_value(&tokens!["k", "a b"]), r#"k="a b""#);
/// assert_eq!(formatter::key_value(&tokens!["a", "b", "c"]), "a=b c");
/// ```
pub fn key_value(tokens: &[Token]) -> String {
    pair_segments(tokens, |key, value| {
        format!("{}={}", quote_field(&key.render()), quote_field(&value.render()))
    })
}

/// Alternative formatter: `k1: v1 k2: v2`
///
/// ```
/// use readable::{formatter, tokens};
///
/// assert_eq!(formatter::join(&tokens!["a", "b", "c"]), "a: b c");
/// ```
pub fn join(tokens: &[Token]) -> String {
    pair_segments(tokens, |key, value| format!("{}: {}", key, value))
}

fn pair_segments<F>(tokens: &[Token], render_pair: F) -> String
where
    F: Fn(&Token, &Token) -> String,
{
    tokens
        .chunks(2)
        .map(|chunk| match chunk {
            [key, value] => render_pair(key, value),
            [lone] => lone.to_string(),
            _ => String::new(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Quote a key or value when it contains whitespace so it stays one field
fn quote_field(value: &str) -> String {
    if value.chars().any(char::is_whitespace) {
        format!("{:?}", value)
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokens;

    #[test]
    fn test_key_value_pairs() {
        let line = key_value(&tokens!["package", "server", "listener", ":3000"]);
        assert_eq!(line, "package=server listener=:3000");
    }

    #[test]
    fn test_key_value_singleton() {
        assert_eq!(key_value(&tokens!["x"]), "x");
        assert_eq!(join(&tokens!["x"]), "x");
    }

    #[test]
    fn test_empty_sequence() {
        assert_eq!(key_value(&[]), "");
        assert_eq!(join(&[]), "");
    }

    #[test]
    fn test_trailing_token_is_kept() {
        assert_eq!(key_value(&tokens!["a", "b", "c"]), "a=b c");
        assert_eq!(join(&tokens!["a", "b", "c"]), "a: b c");
        assert_eq!(key_value(&tokens!["foo", "bar", 1]), "foo=bar 1");
    }

    #[test]
    fn test_quoting() {
        assert_eq!(key_value(&tokens!["k", "a b"]), r#"k="a b""#);
        assert_eq!(key_value(&tokens!["k", "ab"]), "k=ab");
        assert_eq!(key_value(&tokens!["k", "tab\there"]), r#"k="tab\there""#);
        assert_eq!(
            key_value(&tokens!["k", "say \"hi\" now"]),
            r#"k="say \"hi\" now""#
        );
    }

    #[test]
    fn test_whitespace_keys_are_quoted() {
        assert_eq!(key_value(&tokens!["two words", "v"]), r#""two words"=v"#);
        assert_eq!(key_value(&tokens!["line\nbreak", "v"]), r#""line\nbreak"=v"#);
    }

    #[test]
    fn test_lone_token_is_not_quoted() {
        assert_eq!(key_value(&tokens!["k", "v", "two words"]), "k=v two words");
    }

    #[test]
    fn test_join_never_quotes() {
        assert_eq!(join(&tokens!["k", "a b"]), "k: a b");
    }

    #[test]
    fn test_mixed_value_types() {
        let line = key_value(&tokens!["status", 200, "ok", true, "ratio", 0.5]);
        assert_eq!(line, "status=200 ok=true ratio=0.5");
    }

    #[test]
    fn test_composite_values_render_verbatim() {
        let tags = Token::debug(&["a", "b"]);
        assert_eq!(key_value(&[Token::from("tags"), tags.clone()]), r#"tags="[\"a\", \"b\"]""#);
        assert_eq!(join(&[Token::from("tags"), tags]), r#"tags: ["a", "b"]"#);
    }
}
