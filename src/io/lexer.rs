//! Tokenizer for the DOT subset understood by [`DotReader`](super::DotReader).

use std::{fmt::Display, iter::Peekable, str::Chars};

use super::*;

/// Keywords of the DOT language; they are case-insensitive and never valid as unquoted IDs
const KEYWORDS: [&str; 6] = ["strict", "graph", "digraph", "node", "edge", "subgraph"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Token {
    /// Identifier, numeral or the unescaped contents of a double-quoted string
    Id { text: String, quoted: bool },
    LBrace,
    RBrace,
    LBracket,
    RBracket,
    Semicolon,
    Comma,
    Colon,
    Equals,
    Plus,
    /// `--`
    UndirectedEdge,
    /// `->`
    DirectedEdge,
}

impl Token {
    /// Returns *true* if the token is the unquoted keyword `keyword`
    pub(crate) fn is_keyword(&self, keyword: &str) -> bool {
        matches!(self, Token::Id { text, quoted: false } if text.eq_ignore_ascii_case(keyword))
    }

    /// Returns *true* if the token is any unquoted keyword
    pub(crate) fn is_any_keyword(&self) -> bool {
        KEYWORDS.iter().any(|kw| self.is_keyword(kw))
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let symbol = match self {
            Token::Id { text, quoted: false } => return write!(f, "`{text}`"),
            Token::Id { text, quoted: true } => return write!(f, "`\"{text}\"`"),
            Token::LBrace => "{",
            Token::RBrace => "}",
            Token::LBracket => "[",
            Token::RBracket => "]",
            Token::Semicolon => ";",
            Token::Comma => ",",
            Token::Colon => ":",
            Token::Equals => "=",
            Token::Plus => "+",
            Token::UndirectedEdge => "--",
            Token::DirectedEdge => "->",
        };
        write!(f, "`{symbol}`")
    }
}

/// Returns *true* if `name` can be written without quotes
pub(crate) fn is_plain_id(name: &str) -> bool {
    let mut chars = name.chars();
    let plain = match chars.next() {
        Some(c) if is_id_start(c) => chars.all(is_id_continue),
        Some(_) => is_numeral(name),
        None => false,
    };
    plain && !KEYWORDS.iter().any(|kw| name.eq_ignore_ascii_case(kw))
}

fn is_id_start(c: char) -> bool {
    c == '_' || c.is_ascii_alphabetic() || !c.is_ascii()
}

fn is_id_continue(c: char) -> bool {
    is_id_start(c) || c.is_ascii_digit()
}

fn is_numeral(text: &str) -> bool {
    let digits = text.strip_prefix('-').unwrap_or(text);
    digits.chars().any(|c| c.is_ascii_digit())
        && digits.chars().all(|c| c == '.' || c.is_ascii_digit())
        && digits.chars().filter(|&c| c == '.').count() <= 1
}

/// Splits `input` into tokens, each tagged with its (1-based) line
pub(crate) fn tokenize(input: &str) -> Result<Vec<(usize, Token)>> {
    let mut lexer = Lexer {
        chars: input.chars().peekable(),
        line: 1,
        at_line_start: true,
    };

    let mut tokens = Vec::new();
    while let Some(token) = lexer.next_token()? {
        tokens.push(token);
    }
    Ok(tokens)
}

struct Lexer<'a> {
    chars: Peekable<Chars<'a>>,
    line: usize,
    /// Only whitespace was seen since the last line break
    at_line_start: bool,
}

impl Lexer<'_> {
    fn peek(&mut self) -> Option<char> {
        self.chars.peek().copied()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.chars.next()?;
        if c == '\n' {
            self.line += 1;
            self.at_line_start = true;
        } else if !c.is_whitespace() {
            self.at_line_start = false;
        }
        Some(c)
    }

    /// Consumes the next character if it equals `expected`
    fn eat(&mut self, expected: char) -> bool {
        let matches = self.peek() == Some(expected);
        if matches {
            self.bump();
        }
        matches
    }

    fn skip_line(&mut self) {
        while let Some(c) = self.bump() {
            if c == '\n' {
                break;
            }
        }
    }

    fn skip_block_comment(&mut self) -> Result<()> {
        let start = self.line;
        // opening `/*`
        self.bump();
        self.bump();
        loop {
            match self.bump() {
                None => return Err(parse_error!(start, "unterminated comment")),
                Some('*') if self.eat('/') => return Ok(()),
                Some(_) => {}
            }
        }
    }

    /// Skips whitespace, comments and preprocessor lines
    fn skip_trivia(&mut self) -> Result<()> {
        loop {
            match self.peek() {
                Some(c) if c.is_whitespace() => {
                    self.bump();
                }
                Some('#') if self.at_line_start => self.skip_line(),
                Some('/') => {
                    let mut ahead = self.chars.clone();
                    ahead.next();
                    match ahead.next() {
                        Some('/') => self.skip_line(),
                        Some('*') => self.skip_block_comment()?,
                        _ => return Ok(()),
                    }
                }
                _ => return Ok(()),
            }
        }
    }

    fn next_token(&mut self) -> Result<Option<(usize, Token)>> {
        self.skip_trivia()?;
        let line = self.line;
        let Some(c) = self.bump() else {
            return Ok(None);
        };

        let token = match c {
            '{' => Token::LBrace,
            '}' => Token::RBrace,
            '[' => Token::LBracket,
            ']' => Token::RBracket,
            ';' => Token::Semicolon,
            ',' => Token::Comma,
            ':' => Token::Colon,
            '=' => Token::Equals,
            '+' => Token::Plus,
            '"' => self.quoted(line)?,
            '-' if self.eat('-') => Token::UndirectedEdge,
            '-' if self.eat('>') => Token::DirectedEdge,
            c if c == '-' || c == '.' || c.is_ascii_digit() => self.numeral(c, line)?,
            c if is_id_start(c) => self.identifier(c),
            c => return Err(parse_error!(line, "unexpected character `{c}`")),
        };
        Ok(Some((line, token)))
    }

    fn identifier(&mut self, first: char) -> Token {
        let mut text = String::from(first);
        while let Some(c) = self.peek().filter(|&c| is_id_continue(c)) {
            text.push(c);
            self.bump();
        }
        Token::Id {
            text,
            quoted: false,
        }
    }

    fn numeral(&mut self, first: char, line: usize) -> Result<Token> {
        let mut text = String::from(first);
        while let Some(c) = self.peek().filter(|&c| c == '.' || c.is_ascii_digit()) {
            text.push(c);
            self.bump();
        }
        raise_parse_error_unless!(is_numeral(&text), line, "invalid numeral `{text}`");
        Ok(Token::Id {
            text,
            quoted: false,
        })
    }

    /// Reads a double-quoted string whose opening quote was already consumed.
    /// `\"` and `\\` yield a quote and a backslash, and a backslash before a line break continues
    /// the line. All other escapes are kept verbatim.
    fn quoted(&mut self, line: usize) -> Result<Token> {
        let mut text = String::new();
        loop {
            match self.bump() {
                None => return Err(parse_error!(line, "unterminated string")),
                Some('"') => break,
                Some('\\') => match self.bump() {
                    None => return Err(parse_error!(line, "unterminated string")),
                    Some(c @ ('"' | '\\')) => text.push(c),
                    Some('\n') => {}
                    Some('\r') if self.eat('\n') => {}
                    Some(c) => {
                        text.push('\\');
                        text.push(c);
                    }
                },
                Some(c) => text.push(c),
            }
        }
        Ok(Token::Id { text, quoted: true })
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn id(text: &str) -> Token {
        Token::Id {
            text: text.to_string(),
            quoted: false,
        }
    }

    fn kinds(input: &str) -> Vec<Token> {
        tokenize(input)
            .unwrap()
            .into_iter()
            .map(|(_, token)| token)
            .collect()
    }

    #[test]
    fn symbols_and_ids() {
        assert_eq!(
            kinds("graph g{a--b->c[x=1.5];}"),
            vec![
                id("graph"),
                id("g"),
                Token::LBrace,
                id("a"),
                Token::UndirectedEdge,
                id("b"),
                Token::DirectedEdge,
                id("c"),
                Token::LBracket,
                id("x"),
                Token::Equals,
                id("1.5"),
                Token::RBracket,
                Token::Semicolon,
                Token::RBrace,
            ]
        );
        assert_eq!(kinds("-3 .5 -.25"), vec![id("-3"), id(".5"), id("-.25")]);
    }

    #[test]
    fn comments_and_lines() {
        let tokens = tokenize("# cpp line\na // rest\n/* multi\nline */ b\n  # indented\nc").unwrap();
        assert_eq!(
            tokens,
            vec![(2, id("a")), (4, id("b")), (6, id("c"))]
        );
        // `#` in the middle of a line is not a comment
        assert!(tokenize("a # b").is_err());
    }

    #[test]
    fn quoted_strings() {
        assert_eq!(
            kinds(r#""hello world" "say \"hi\"" "a\b" "x\
y" "c\\d" "\\""#),
            vec![
                Token::Id {
                    text: "hello world".into(),
                    quoted: true
                },
                Token::Id {
                    text: "say \"hi\"".into(),
                    quoted: true
                },
                Token::Id {
                    text: "a\\b".into(),
                    quoted: true
                },
                Token::Id {
                    text: "xy".into(),
                    quoted: true
                },
                Token::Id {
                    text: "c\\d".into(),
                    quoted: true
                },
                Token::Id {
                    text: "\\".into(),
                    quoted: true
                },
            ]
        );
    }

    #[test]
    fn malformed_input() {
        for (input, line) in [
            ("a\n\"open", 2),
            ("/* never closed\n\n", 1),
            ("a\nb\n@", 3),
            ("-", 1),
            ("-.", 1),
            ("<html>", 1),
        ] {
            match tokenize(input) {
                Err(GraphError::Parse { line: l, .. }) => assert_eq!(l, line, "{input}"),
                other => panic!("{input:?} yielded {other:?}"),
            }
        }
    }

    #[test]
    fn plain_ids() {
        for name in ["a", "_x1", "42", "-1.5", ".5", "ü"] {
            assert!(is_plain_id(name), "{name}");
        }
        for name in ["", "a b", "a-b", "1a", "1.2.3", "node", "Graph", "-"] {
            assert!(!is_plain_id(name), "{name}");
        }
    }
}
