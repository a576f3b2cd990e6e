// vkscript
//
// Copyright 2023 Neil Roberts
//
// Permission is hereby granted, free of charge, to any person obtaining a
// copy of this software and associated documentation files (the "Software"),
// to deal in the Software without restriction, including without limitation
// the rights to use, copy, modify, merge, publish, distribute, sublicense,
// and/or sell copies of the Software, and to permit persons to whom the
// Software is furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice (including the next
// paragraph) shall be included in all copies or substantial portions of the
// Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT.  IN NO EVENT SHALL
// THE AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING
// FROM, OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER
// DEALINGS IN THE SOFTWARE.

//! Splits the body of a script section into tokens.
//!
//! Whitespace and commas separate tokens. A `#` starts a comment that
//! runs to the end of the line. A backslash immediately before a
//! newline joins the two lines so that long lists of values can be
//! split. The end of every other line is reported as
//! [Kind::Eol] so that the command parser can tell where each command
//! finishes.

use std::fmt;

/// The type of a [Token] along with its parsed value.
#[derive(Debug, Clone, PartialEq)]
pub enum Kind {
    /// The end of the data. Reading past the end keeps returning this.
    Eos,
    /// The end of a line.
    Eol,
    /// Any word that isn’t a number.
    String,
    /// A decimal integer.
    Integer(i64),
    /// An integer written with the `0x` prefix.
    Hex(u64),
    /// A number that couldn’t be parsed as an integer.
    Double(f64),
    OpenBracket,
    CloseBracket,
    /// A `%` directly following a number.
    Percent,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: Kind,
    /// The text that the token was parsed from.
    pub text: String,
    /// The line number in the script where the token starts.
    pub line_num: usize,
}

impl Token {
    fn new(kind: Kind, text: &str, line_num: usize) -> Token {
        Token { kind, text: text.to_owned(), line_num }
    }

    pub fn is_eos(&self) -> bool {
        self.kind == Kind::Eos
    }

    pub fn is_eol(&self) -> bool {
        self.kind == Kind::Eol
    }

    /// Returns true if the token marks the end of a command.
    pub fn is_end(&self) -> bool {
        matches!(self.kind, Kind::Eol | Kind::Eos)
    }

    pub fn is_string(&self) -> bool {
        self.kind == Kind::String
    }

    pub fn is_hex(&self) -> bool {
        matches!(self.kind, Kind::Hex(_))
    }

    pub fn is_double(&self) -> bool {
        matches!(self.kind, Kind::Double(_))
    }

    pub fn is_integer(&self) -> bool {
        matches!(self.kind, Kind::Integer(_) | Kind::Hex(_))
    }

    pub fn is_open_bracket(&self) -> bool {
        self.kind == Kind::OpenBracket
    }

    pub fn is_close_bracket(&self) -> bool {
        self.kind == Kind::CloseBracket
    }

    pub fn is_percent(&self) -> bool {
        self.kind == Kind::Percent
    }

    /// Returns the text of the token if it is a plain word.
    pub fn as_string(&self) -> Option<&str> {
        match self.kind {
            Kind::String => Some(&self.text),
            _ => None,
        }
    }

    /// Returns true if the token is the word `word`.
    pub fn is_word(&self, word: &str) -> bool {
        self.as_string() == Some(word)
    }

    /// Returns the value of an integer token if it fits in a `u32`.
    /// Hex tokens are accepted too.
    pub fn as_u32(&self) -> Option<u32> {
        match self.kind {
            Kind::Integer(v) => u32::try_from(v).ok(),
            Kind::Hex(v) => u32::try_from(v).ok(),
            _ => None,
        }
    }

    /// Converts any numeric token to a double.
    pub fn to_f64(&self) -> Option<f64> {
        match self.kind {
            Kind::Integer(v) => Some(v as f64),
            Kind::Hex(v) => Some(v as f64),
            Kind::Double(v) => Some(v),
            _ => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.kind {
            Kind::Eos => write!(f, "end of data"),
            Kind::Eol => write!(f, "end of line"),
            _ => write!(f, "{}", self.text),
        }
    }
}

/// Lazily produces [Token]s from a string slice. Use
/// [next_token](Tokenizer::next_token) to consume a token and
/// [peek_token](Tokenizer::peek_token) to look at the next one
/// without consuming it.
#[derive(Debug, Clone)]
pub struct Tokenizer<'a> {
    data: &'a str,
    pos: usize,
    line_num: usize,
}

fn is_separator(c: char) -> bool {
    c.is_whitespace() || matches!(c, ',' | '(' | ')' | '%' | '#')
}

fn is_continuation(s: &str) -> bool {
    match s.strip_prefix('\\') {
        Some(tail) => tail.strip_prefix('\r').unwrap_or(tail).starts_with('\n'),
        None => false,
    }
}

fn word_length(s: &str) -> usize {
    s.char_indices()
        .find(|&(pos, c)| is_separator(c) || is_continuation(&s[pos..]))
        .map(|(pos, _)| pos)
        .unwrap_or(s.len())
}

fn looks_numeric(word: &str) -> bool {
    let mut chars = word.chars();

    match chars.next() {
        Some(c) if c.is_ascii_digit() => true,
        Some('-' | '+' | '.') => match chars.next() {
            Some(c) if c.is_ascii_digit() => true,
            Some('.') => matches!(chars.next(), Some(c) if c.is_ascii_digit()),
            _ => false,
        },
        _ => false,
    }
}

fn classify_word(word: &str) -> Kind {
    if let Some(digits) = word
        .strip_prefix("0x")
        .or_else(|| word.strip_prefix("0X"))
    {
        return match u64::from_str_radix(digits, 16) {
            Ok(v) if !digits.starts_with('+') => Kind::Hex(v),
            _ => Kind::String,
        };
    }

    if !looks_numeric(word) {
        return Kind::String;
    }

    if let Ok(v) = word.parse::<i64>() {
        Kind::Integer(v)
    } else if let Ok(v) = word.parse::<f64>() {
        Kind::Double(v)
    } else {
        Kind::String
    }
}

impl<'a> Tokenizer<'a> {
    /// Creates a tokenizer for `data`. `first_line` is the line
    /// number of the first line of the data within the whole script
    /// and is only used to fill in [Token::line_num].
    pub fn new(data: &'a str, first_line: usize) -> Tokenizer<'a> {
        Tokenizer { data, pos: 0, line_num: first_line }
    }

    /// The line number at the current read position.
    pub fn line_num(&self) -> usize {
        self.line_num
    }

    fn rest(&self) -> &'a str {
        &self.data[self.pos..]
    }

    fn skip_blanks(&mut self) {
        loop {
            let rest = self.rest();

            if is_continuation(rest) {
                self.pos += rest.find('\n').map_or(rest.len(), |p| p + 1);
                self.line_num += 1;
                continue;
            }

            let c = match rest.chars().next() {
                Some(c) => c,
                None => break,
            };

            if c == '#' {
                let comment_len = rest.find('\n').unwrap_or(rest.len());
                self.pos += comment_len;
            } else if c != '\n' && (c.is_whitespace() || c == ',') {
                self.pos += c.len_utf8();
            } else {
                break;
            }
        }
    }

    /// Consumes and returns the next token.
    pub fn next_token(&mut self) -> Token {
        self.skip_blanks();

        let line_num = self.line_num;
        let rest = self.rest();

        let c = match rest.chars().next() {
            Some(c) => c,
            None => return Token::new(Kind::Eos, "", line_num),
        };

        let simple_kind = match c {
            '\n' => {
                self.line_num += 1;
                Some(Kind::Eol)
            },
            '(' => Some(Kind::OpenBracket),
            ')' => Some(Kind::CloseBracket),
            '%' => Some(Kind::Percent),
            _ => None,
        };

        if let Some(kind) = simple_kind {
            self.pos += 1;
            return Token::new(kind, &rest[0..1], line_num);
        }

        let length = word_length(rest);
        let word = &rest[0..length];
        self.pos += length;

        Token::new(classify_word(word), word, line_num)
    }

    /// Returns the next token without consuming it.
    pub fn peek_token(&self) -> Token {
        self.clone().next_token()
    }

    /// Consumes tokens up to and including the next end of line.
    /// Returns the number of tokens skipped, not counting the end of
    /// line.
    pub fn skip_line(&mut self) -> usize {
        let mut count = 0;

        while !self.next_token().is_end() {
            count += 1;
        }

        count
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn kinds(data: &str) -> Vec<Kind> {
        let mut tokenizer = Tokenizer::new(data, 1);
        let mut result = Vec::new();

        loop {
            let token = tokenizer.next_token();

            if token.is_eos() {
                break result;
            }

            result.push(token.kind);
        }
    }

    #[test]
    fn test_numbers() {
        assert_eq!(
            kinds("1 -2 +3 0.5 -.5 1e3 0x1F 0XfF"),
            vec![
                Kind::Integer(1),
                Kind::Integer(-2),
                Kind::Integer(3),
                Kind::Double(0.5),
                Kind::Double(-0.5),
                Kind::Double(1000.0),
                Kind::Hex(0x1f),
                Kind::Hex(0xff),
            ],
        );

        // Words that only start like numbers stay as strings
        assert_eq!(
            kinds("1INVALID 0xzz 5:6 1.2.3 - inf nan"),
            vec![Kind::String; 7],
        );
    }

    #[test]
    fn test_separators() {
        assert_eq!(
            kinds("1,2, 3 ,4"),
            vec![
                Kind::Integer(1),
                Kind::Integer(2),
                Kind::Integer(3),
                Kind::Integer(4),
            ],
        );
        assert_eq!(
            kinds("(1,2)5%"),
            vec![
                Kind::OpenBracket,
                Kind::Integer(1),
                Kind::Integer(2),
                Kind::CloseBracket,
                Kind::Integer(5),
                Kind::Percent,
            ],
        );
    }

    #[test]
    fn test_comments_and_lines() {
        let mut tokenizer = Tokenizer::new(
            "# first comment\n\
             clear # trailing\n\
             \n\
             draw#no space",
            5,
        );

        assert!(tokenizer.next_token().is_eol());

        let token = tokenizer.next_token();
        assert!(token.is_word("clear"));
        assert_eq!(token.line_num, 6);

        assert!(tokenizer.next_token().is_eol());
        assert!(tokenizer.next_token().is_eol());

        let token = tokenizer.next_token();
        assert!(token.is_word("draw"));
        assert_eq!(token.line_num, 8);

        assert!(tokenizer.next_token().is_eos());
        // Reading past the end keeps returning the end
        assert!(tokenizer.next_token().is_eos());
    }

    #[test]
    fn test_continuation() {
        let mut tokenizer = Tokenizer::new("a \\\nb\\\r\n c\nd", 1);

        assert!(tokenizer.next_token().is_word("a"));
        let token = tokenizer.next_token();
        assert!(token.is_word("b"));
        assert_eq!(token.line_num, 2);
        let token = tokenizer.next_token();
        assert!(token.is_word("c"));
        assert_eq!(token.line_num, 3);
        assert!(tokenizer.next_token().is_eol());
        assert!(tokenizer.next_token().is_word("d"));

        // A backslash that isn’t at the end of the line is part of
        // the word
        let mut tokenizer = Tokenizer::new("a\\b", 1);
        assert!(tokenizer.next_token().is_word("a\\b"));
    }

    #[test]
    fn test_peek() {
        let mut tokenizer = Tokenizer::new("one two\nthree", 1);

        assert!(tokenizer.peek_token().is_word("one"));
        assert!(tokenizer.peek_token().is_word("one"));
        assert!(tokenizer.next_token().is_word("one"));
        assert!(tokenizer.peek_token().is_word("two"));
        assert_eq!(tokenizer.skip_line(), 1);
        assert_eq!(tokenizer.line_num(), 2);
        assert!(tokenizer.next_token().is_word("three"));
    }

    #[test]
    fn test_conversions() {
        let mut tokenizer = Tokenizer::new("12 -1 0x10 2.5 word", 1);

        let token = tokenizer.next_token();
        assert_eq!(token.as_u32(), Some(12));
        assert_eq!(token.to_f64(), Some(12.0));

        let token = tokenizer.next_token();
        assert_eq!(token.as_u32(), None);
        assert_eq!(token.to_f64(), Some(-1.0));

        let token = tokenizer.next_token();
        assert!(token.is_hex());
        assert_eq!(token.as_u32(), Some(16));

        let token = tokenizer.next_token();
        assert_eq!(token.as_u32(), None);
        assert_eq!(token.to_f64(), Some(2.5));

        let token = tokenizer.next_token();
        assert_eq!(token.to_f64(), None);
        assert_eq!(token.to_string(), "word");
    }
}
