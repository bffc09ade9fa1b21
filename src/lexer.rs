/// Split one input line into whitespace-delimited tokens, honoring single
/// quotes, double quotes, and backslash escapes.
///
/// The rules, in full:
/// - Outside any quote, an unescaped backslash takes the next character
///   literally. A trailing backslash with nothing after it is dropped.
/// - Inside single quotes every character is literal, backslash included.
/// - Inside double quotes backslash is also literal; only the closing double
///   quote is special.
/// - A quote character immediately doubled (`""` or `''`) is consumed
///   without toggling the quote mode and without adding content.
/// - Whitespace outside quotes separates tokens; runs of it collapse, so no
///   empty tokens are produced.
/// - An unterminated quote is not an error: the line simply ends and
///   whatever was accumulated becomes the final token.
///
/// Note the double-quote treatment of backslash is intentionally not the
/// standard shell rule: `"a\"b"` lexes to `a\b`, with the backslash kept
/// literal and the quote closing the mode.
pub fn tokenize(line: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_single = false;
    let mut in_double = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\'' if !in_double => {
                if chars.peek() == Some(&'\'') {
                    chars.next();
                } else {
                    in_single = !in_single;
                }
            }
            '"' if !in_single => {
                if chars.peek() == Some(&'"') {
                    chars.next();
                } else {
                    in_double = !in_double;
                }
            }
            '\\' if !in_single && !in_double => {
                if let Some(escaped) = chars.next() {
                    current.push(escaped);
                }
            }
            c if c.is_whitespace() && !in_single && !in_double => {
                if !current.is_empty() {
                    tokens.push(std::mem::take(&mut current));
                }
            }
            c => current.push(c),
        }
    }

    if !current.is_empty() {
        tokens.push(current);
    }
    tokens
}

#[cfg(test)]
mod tests {
    use super::tokenize;

    #[test]
    fn empty_line_yields_no_tokens() {
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn whitespace_only_line_yields_no_tokens() {
        assert!(tokenize("   \t  ").is_empty());
    }

    #[test]
    fn splits_on_whitespace() {
        assert_eq!(tokenize("echo hello world"), ["echo", "hello", "world"]);
    }

    #[test]
    fn consecutive_whitespace_collapses() {
        assert_eq!(tokenize("a   b\t\tc"), ["a", "b", "c"]);
    }

    #[test]
    fn single_quotes_preserve_whitespace() {
        assert_eq!(tokenize("echo 'a b' c"), ["echo", "a b", "c"]);
    }

    #[test]
    fn single_quotes_take_backslash_literally() {
        assert_eq!(tokenize(r"echo 'a\b'"), ["echo", r"a\b"]);
    }

    #[test]
    fn double_quotes_keep_backslash_literal() {
        // The quote after the backslash still closes the mode; the `b` lands
        // in the same token and the reopened quote runs to end of line.
        assert_eq!(tokenize(r#"echo "a\"b""#), ["echo", r"a\b"]);
    }

    #[test]
    fn backslash_escapes_space_outside_quotes() {
        assert_eq!(tokenize(r"echo a\ b"), ["echo", "a b"]);
    }

    #[test]
    fn backslash_escapes_quote_characters_outside_quotes() {
        assert_eq!(tokenize(r#"echo \' \""#), ["echo", "'", "\""]);
    }

    #[test]
    fn trailing_backslash_is_dropped() {
        assert_eq!(tokenize(r"echo abc\"), ["echo", "abc"]);
    }

    #[test]
    fn doubled_quotes_are_consumed_without_content() {
        assert_eq!(tokenize(r#"echo ""x"#), ["echo", "x"]);
        assert_eq!(tokenize("echo ''"), ["echo"]);
    }

    #[test]
    fn adjacent_quoted_segments_join_into_one_token() {
        assert_eq!(tokenize(r#"echo 'a'b"c""#), ["echo", "abc"]);
    }

    #[test]
    fn opposite_quote_kind_is_literal_inside_quotes() {
        assert_eq!(tokenize(r#"echo 'a"b'"#), ["echo", r#"a"b"#]);
        assert_eq!(tokenize(r#"echo "a'b""#), ["echo", "a'b"]);
    }

    #[test]
    fn unterminated_quote_emits_accumulated_token() {
        assert_eq!(tokenize("echo 'abc"), ["echo", "abc"]);
        assert_eq!(tokenize("echo \"ab cd"), ["echo", "ab cd"]);
    }

    #[test]
    fn token_order_is_preserved() {
        assert_eq!(tokenize("c b a"), ["c", "b", "a"]);
    }
}
