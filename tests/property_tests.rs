//! Property-based tests for readable using proptest

use proptest::prelude::*;
use readable::formatter;
use readable::prelude::*;

fn word() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_:./-]{1,12}"
}

fn to_tokens(words: &[String]) -> Vec<Token> {
    words.iter().map(Token::from).collect()
}

// ============================================================================
// Formatter Tests
// ============================================================================

proptest! {
    /// Even-length sequences give exactly len/2 key=value segments, in order
    #[test]
    fn test_key_value_pairing(pairs in prop::collection::vec((word(), word()), 0..16)) {
        let words: Vec<String> = pairs
            .iter()
            .flat_map(|(k, v)| [k.clone(), v.clone()])
            .collect();
        let line = formatter::key_value(&to_tokens(&words));

        let segments: Vec<&str> = if line.is_empty() {
            Vec::new()
        } else {
            line.split(' ').collect()
        };
        prop_assert_eq!(segments.len(), pairs.len());
        for (segment, (k, v)) in segments.iter().zip(&pairs) {
            prop_assert_eq!(*segment, format!("{}={}", k, v));
        }
    }

    /// A trailing unpaired token is kept bare at the end
    #[test]
    fn test_trailing_token_kept(
        pairs in prop::collection::vec((word(), word()), 0..8),
        tail in word()
    ) {
        let mut words: Vec<String> = pairs
            .iter()
            .flat_map(|(k, v)| [k.clone(), v.clone()])
            .collect();
        words.push(tail.clone());
        let tokens = to_tokens(&words);

        let kv = formatter::key_value(&tokens);
        let joined = formatter::join(&tokens);
        prop_assert!(kv.ends_with(&tail));
        prop_assert!(joined.ends_with(&tail));
        prop_assert_eq!(kv.split(' ').count(), pairs.len() + 1);
    }

    /// Values with whitespace stay one quoted field
    #[test]
    fn test_whitespace_values_are_quoted(key in word(), left in word(), right in word()) {
        let value = format!("{} {}", left, right);
        let line = formatter::key_value(&[Token::from(key.as_str()), Token::from(value.as_str())]);
        prop_assert_eq!(line, format!("{}=\"{}\"", key, value));
    }

    /// Pairs never break the line, whatever they contain
    #[test]
    fn test_key_value_single_line(values in prop::collection::vec(".*", 0..8)) {
        let line = formatter::key_value(&to_tokens(&values));

        // Only a lone trailing token is emitted verbatim
        let lone_has_newline = values.len() % 2 == 1
            && values.last().is_some_and(|v| v.contains('\n'));
        if !lone_has_newline {
            prop_assert!(!line.contains('\n'), "line broke: {:?}", line);
        }
    }
}

// ============================================================================
// Logger Tests
// ============================================================================

proptest! {
    /// With no flags the sink receives exactly `[prefix ]body\n`
    #[test]
    fn test_emitted_bytes_match_line(prefix in "[a-z]{0,8}", pairs in prop::collection::vec((word(), word()), 1..6)) {
        let words: Vec<String> = pairs
            .iter()
            .flat_map(|(k, v)| [k.clone(), v.clone()])
            .collect();
        let tokens = to_tokens(&words);

        let buf = BufferSink::new();
        let logger = Logger::new()
            .with_output(buf.clone())
            .with_flags(Flags::empty())
            .with_prefix(prefix.as_str());
        logger.log(&tokens);

        let body = formatter::key_value(&tokens);
        let expected = if prefix.is_empty() {
            format!("{}\n", body)
        } else {
            format!("{} {}\n", prefix, body)
        };
        prop_assert_eq!(buf.to_string_lossy(), expected);
    }

    /// Debug lines appear exactly when the flag is on
    #[test]
    fn test_debug_gate(enabled in any::<bool>(), key in word(), value in word()) {
        let buf = BufferSink::new();
        let logger = Logger::new()
            .with_output(buf.clone())
            .with_flags(Flags::empty())
            .with_debug(enabled);

        logger.debug(&[Token::from(key.as_str()), Token::from(value.as_str())]);
        prop_assert_eq!(buf.is_empty(), !enabled);
    }

    /// Derived loggers never change their source
    #[test]
    fn test_with_leaves_receiver(prefix in word(), debug in any::<bool>(), bits in 0u32..64) {
        let base = Logger::new().with_flags(Flags::empty());
        let derived = base
            .with_prefix(prefix.as_str())
            .with_debug(debug)
            .with_flags(Flags::from_bits_truncate(bits))
            .with_formatter(formatter::join);

        prop_assert!(base.prefix().is_none());
        prop_assert!(!base.is_debug());
        prop_assert_eq!(base.flags(), Flags::empty());
        prop_assert_eq!(base.line(&readable::tokens!["a", "b"]), "a=b");
        prop_assert_eq!(derived.flags(), Flags::from_bits_truncate(bits));
    }
}
