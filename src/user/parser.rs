//! Command line tokenizer.
//!
//! Tokens are separated by runs of spaces or tabs. A token starting with `"`
//! runs to the next unescaped `"`; inside it `\"` stands for a literal quote.
//! Splitting happens in place: separators and closing quotes are overwritten
//! with NUL and escapes are collapsed, and the returned tokens borrow the
//! buffer.
//!
//! Malformed input never fails. An unterminated quote keeps what was read so
//! far as the last token, and more than `ARG_MAX` tokens keeps the first
//! `ARG_MAX` and flags the truncation.

use crate::config::ARG_MAX;

/// Result of splitting a line.
#[derive(Debug)]
pub struct Tokens<'a> {
    argv: heapless::Vec<&'a str, ARG_MAX>,
    truncated: bool,
}

impl<'a> Tokens<'a> {
    pub fn argv(&self) -> &[&'a str] {
        &self.argv
    }

    pub fn argc(&self) -> usize {
        self.argv.len()
    }

    pub fn is_empty(&self) -> bool {
        self.argv.is_empty()
    }

    /// Whether tokens past `ARG_MAX` were dropped.
    pub fn is_truncated(&self) -> bool {
        self.truncated
    }
}

fn is_blank(c: u8) -> bool {
    c == b' ' || c == b'\t'
}

/// Split `line` into at most `ARG_MAX` tokens.
pub fn split(line: &mut [u8]) -> Tokens<'_> {
    let len = line.len();
    let mut spans: heapless::Vec<(usize, usize), ARG_MAX> = heapless::Vec::new();
    let mut truncated = false;
    let mut pos = 0;

    loop {
        while pos < len && is_blank(line[pos]) {
            line[pos] = 0;
            pos += 1;
        }
        if pos >= len {
            break;
        }
        if spans.is_full() {
            truncated = true;
            break;
        }

        if line[pos] == b'"' {
            pos += 1;
            let start = pos;
            let mut end = pos;
            let mut closed = false;
            while pos < len {
                match line[pos] {
                    b'"' => {
                        closed = true;
                        break;
                    }
                    b'\\' if line.get(pos + 1) == Some(&b'"') => {
                        line[end] = b'"';
                        pos += 2;
                    }
                    c => {
                        line[end] = c;
                        pos += 1;
                    }
                }
                end += 1;
            }
            let _ = spans.push((start, end));
            if !closed {
                break;
            }
            line[pos] = 0;
            pos += 1;
        } else {
            let start = pos;
            while pos < len && !is_blank(line[pos]) {
                pos += 1;
            }
            let _ = spans.push((start, pos));
        }
    }

    let line: &[u8] = line;
    let mut argv = heapless::Vec::new();
    for (start, end) in spans {
        let Ok(token) = core::str::from_utf8(&line[start..end]) else {
            break;
        };
        let _ = argv.push(token);
    }

    Tokens { argv, truncated }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens_of(input: &str) -> (Vec<String>, bool) {
        let mut buf = input.as_bytes().to_vec();
        let tokens = split(&mut buf);
        let argv = tokens.argv().iter().map(|s| s.to_string()).collect();
        (argv, tokens.is_truncated())
    }

    #[test]
    fn test_plain_tokens() {
        let (argv, truncated) = tokens_of("ls  -l\t/tmp");
        assert_eq!(argv, ["ls", "-l", "/tmp"]);
        assert!(!truncated);
    }

    #[test]
    fn test_quoted_tokens_with_escape() {
        let (argv, _) = tokens_of(r#"ls -l "a b" "c\"d""#);
        assert_eq!(argv, ["ls", "-l", "a b", "c\"d"]);
    }

    #[test]
    fn test_separators_become_nul() {
        let mut buf = b"a \"b\" c".to_vec();
        split(&mut buf);
        assert_eq!(buf[1], 0);
        assert_eq!(buf[5], 0);
    }

    #[test]
    fn test_too_many_tokens_truncates() {
        let (argv, truncated) = tokens_of("a b c d e f g h i j");
        assert_eq!(argv.len(), ARG_MAX);
        assert_eq!(argv, ["a", "b", "c", "d", "e", "f", "g", "h"]);
        assert!(truncated);
    }

    #[test]
    fn test_exactly_arg_max_with_trailing_blank_not_truncated() {
        let (argv, truncated) = tokens_of("a b c d e f g h   ");
        assert_eq!(argv.len(), ARG_MAX);
        assert!(!truncated);
    }

    #[test]
    fn test_unterminated_quote_keeps_partial_token() {
        let (argv, truncated) = tokens_of(r#"echo "abc def"#);
        assert_eq!(argv, ["echo", "abc def"]);
        assert!(!truncated);
    }

    #[test]
    fn test_unterminated_quote_stops_tokenizing() {
        let (argv, _) = tokens_of("echo \"abc\\\"");
        assert_eq!(argv, ["echo", "abc\""]);
    }

    #[test]
    fn test_empty_quoted_token() {
        let (argv, _) = tokens_of(r#"set "" x"#);
        assert_eq!(argv, ["set", "", "x"]);
    }

    #[test]
    fn test_blank_line() {
        let (argv, truncated) = tokens_of(" \t ");
        assert!(argv.is_empty());
        assert!(!truncated);
    }

    #[test]
    fn test_invalid_utf8_ends_tokens() {
        let mut buf = vec![b'a', b' ', 0xC3, b' ', b'b'];
        let tokens = split(&mut buf);
        assert_eq!(tokens.argv(), ["a"]);
    }
}
