//! Tokenizer for the supported Go subset.

use std::fmt;

use unicode_general_category::{GeneralCategory, get_general_category};

use super::FormatError;

const KEYWORDS: [&str; 25] = [
    "break",
    "case",
    "chan",
    "const",
    "continue",
    "default",
    "defer",
    "else",
    "fallthrough",
    "for",
    "func",
    "go",
    "goto",
    "if",
    "import",
    "interface",
    "map",
    "package",
    "range",
    "return",
    "select",
    "struct",
    "switch",
    "type",
    "var",
];

pub(crate) fn keyword(word: &str) -> Option<&'static str> {
    KEYWORDS.iter().copied().find(|kw| *kw == word)
}

/// Unicode letter (Lu, Ll, Lt, Lm, Lo) or underscore.
pub(crate) fn is_letter(c: char) -> bool {
    c == '_'
        || matches!(
            get_general_category(c),
            GeneralCategory::UppercaseLetter
                | GeneralCategory::LowercaseLetter
                | GeneralCategory::TitlecaseLetter
                | GeneralCategory::ModifierLetter
                | GeneralCategory::OtherLetter
        )
}

/// Unicode decimal digit (Nd).
pub(crate) fn is_digit(c: char) -> bool {
    matches!(get_general_category(c), GeneralCategory::DecimalNumber)
}

/// Letters, marks, numbers, punctuation, symbols and the ASCII space.
pub(crate) fn is_print(c: char) -> bool {
    c == ' '
        || !matches!(
            get_general_category(c),
            GeneralCategory::SpaceSeparator
                | GeneralCategory::LineSeparator
                | GeneralCategory::ParagraphSeparator
                | GeneralCategory::Control
                | GeneralCategory::Format
                | GeneralCategory::Surrogate
                | GeneralCategory::PrivateUse
                | GeneralCategory::Unassigned
        )
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Token {
    Ident(String),
    Keyword(&'static str),
    /// String literal, source text including quotes.
    Str(String),
    Int(String),
    Comment(String),
    LParen,
    RParen,
    Assign,
    Semicolon,
    Newline,
    Eof,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ident(name) => write!(f, "{name}"),
            Self::Keyword(kw) => write!(f, "'{kw}'"),
            Self::Str(text) | Self::Int(text) => write!(f, "{text}"),
            Self::Comment(_) => write!(f, "comment"),
            Self::LParen => write!(f, "'('"),
            Self::RParen => write!(f, "')'"),
            Self::Assign => write!(f, "'='"),
            Self::Semicolon => write!(f, "';'"),
            Self::Newline => write!(f, "newline"),
            Self::Eof => write!(f, "EOF"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Spanned {
    pub token: Token,
    pub line: usize,
    pub column: usize,
}

struct Lexer {
    chars: Vec<char>,
    pos: usize,
    line: usize,
    column: usize,
}

/// Splits `source` into tokens. The result always ends with [`Token::Eof`].
///
/// A byte order mark is accepted only as the first character.
pub(crate) fn tokenize(source: &str) -> Result<Vec<Spanned>, FormatError> {
    let source = source.strip_prefix('\u{feff}').unwrap_or(source);
    reject_illegal_chars(source)?;
    let mut lexer = Lexer {
        chars: source.chars().collect(),
        pos: 0,
        line: 1,
        column: 1,
    };
    let mut tokens = Vec::new();
    loop {
        let spanned = lexer.next_token()?;
        let done = spanned.token == Token::Eof;
        tokens.push(spanned);
        if done {
            return Ok(tokens);
        }
    }
}

fn reject_illegal_chars(source: &str) -> Result<(), FormatError> {
    for (line, text) in source.split('\n').enumerate() {
        for (column, c) in text.chars().enumerate() {
            let message = match c {
                '\0' => "invalid NUL character",
                '\u{feff}' => "invalid BOM in the middle of the file",
                _ => continue,
            };
            return Err(FormatError::new(line + 1, column + 1, message));
        }
    }
    Ok(())
}

impl Lexer {
    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn peek_at(&self, offset: usize) -> Option<char> {
        self.chars.get(self.pos + offset).copied()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += 1;
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(c)
    }

    fn error(&self, message: impl Into<String>) -> FormatError {
        FormatError::new(self.line, self.column, message)
    }

    fn next_token(&mut self) -> Result<Spanned, FormatError> {
        while matches!(self.peek(), Some(' ' | '\t' | '\r')) {
            self.bump();
        }
        let (line, column) = (self.line, self.column);
        let token = match self.peek() {
            None => Token::Eof,
            Some('\n') => {
                self.bump();
                Token::Newline
            }
            Some('/') if self.peek_at(1) == Some('/') => self.line_comment(),
            Some('/') if self.peek_at(1) == Some('*') => self.general_comment()?,
            Some('"') => self.interpreted_string()?,
            Some('`') => self.raw_string()?,
            Some(c) if is_letter(c) => self.word(),
            Some(c) if c.is_ascii_digit() => self.int()?,
            Some('(') => self.single(Token::LParen),
            Some(')') => self.single(Token::RParen),
            Some('=') => self.single(Token::Assign),
            Some(';') => self.single(Token::Semicolon),
            Some(c) => {
                return Err(self.error(format!("invalid character U+{:04X} '{c}'", c as u32)));
            }
        };
        Ok(Spanned {
            token,
            line,
            column,
        })
    }

    fn single(&mut self, token: Token) -> Token {
        self.bump();
        token
    }

    fn take_while(&mut self, pred: impl Fn(char) -> bool) -> String {
        let mut text = String::new();
        while let Some(c) = self.peek().filter(|c| pred(*c)) {
            text.push(c);
            self.bump();
        }
        text
    }

    fn line_comment(&mut self) -> Token {
        let text = self.take_while(|c| c != '\n');
        Token::Comment(text.trim_end().to_string())
    }

    fn general_comment(&mut self) -> Result<Token, FormatError> {
        let (line, column) = (self.line, self.column);
        let mut text = String::from("/*");
        self.bump();
        self.bump();
        loop {
            match self.bump() {
                Some('*') if self.peek() == Some('/') => {
                    self.bump();
                    text.push_str("*/");
                    return Ok(Token::Comment(text));
                }
                Some(c) => text.push(c),
                None => return Err(FormatError::new(line, column, "comment not terminated")),
            }
        }
    }

    fn word(&mut self) -> Token {
        let text = self.take_while(|c| is_letter(c) || is_digit(c));
        match keyword(&text) {
            Some(kw) => Token::Keyword(kw),
            None => Token::Ident(text),
        }
    }

    fn int(&mut self) -> Result<Token, FormatError> {
        let (line, column) = (self.line, self.column);
        let text = self.take_while(|c| c.is_ascii_alphanumeric() || c == '_');
        let valid = match text.get(..2) {
            Some("0x" | "0X") => digits_in(&text[2..], |c| c.is_ascii_hexdigit()),
            Some("0b" | "0B") => digits_in(&text[2..], |c| matches!(c, '0' | '1')),
            Some("0o" | "0O") => digits_in(&text[2..], |c| matches!(c, '0'..='7')),
            _ if text.starts_with('0') => digits_in(&text, |c| matches!(c, '0'..='7')),
            _ => digits_in(&text, |c| c.is_ascii_digit()),
        };
        if !valid {
            return Err(FormatError::new(
                line,
                column,
                format!("invalid integer literal {text}"),
            ));
        }
        Ok(Token::Int(text))
    }

    fn interpreted_string(&mut self) -> Result<Token, FormatError> {
        let (line, column) = (self.line, self.column);
        let mut text = String::from('"');
        self.bump();
        loop {
            match self.peek() {
                None | Some('\n') => {
                    return Err(FormatError::new(
                        line,
                        column,
                        "string literal not terminated",
                    ));
                }
                Some('"') => {
                    self.bump();
                    text.push('"');
                    return Ok(Token::Str(text));
                }
                Some('\\') => self.escape(&mut text)?,
                Some(c) => {
                    self.bump();
                    text.push(c);
                }
            }
        }
    }

    fn escape(&mut self, text: &mut String) -> Result<(), FormatError> {
        let (line, column) = (self.line, self.column);
        self.bump();
        text.push('\\');
        let Some(kind) = self.peek().filter(|c| *c != '\n') else {
            return Err(FormatError::new(line, column, "escape sequence not terminated"));
        };
        self.bump();
        text.push(kind);
        let (count, radix, max) = match kind {
            'a' | 'b' | 'f' | 'n' | 'r' | 't' | 'v' | '\\' | '"' => return Ok(()),
            '0'..='7' => (2, 8, 255),
            'x' => (2, 16, 255),
            'u' => (4, 16, 0x10FFFF),
            'U' => (8, 16, 0x10FFFF),
            _ => return Err(FormatError::new(line, column, "unknown escape sequence")),
        };
        let mut value = if radix == 8 {
            kind.to_digit(8).unwrap_or(0)
        } else {
            0
        };
        for _ in 0..count {
            let Some(digit) = self.peek().and_then(|c| c.to_digit(radix).map(|d| (c, d))) else {
                return Err(FormatError::new(
                    line,
                    column,
                    "illegal character in escape sequence",
                ));
            };
            self.bump();
            text.push(digit.0);
            value = value * radix + digit.1;
        }
        let invalid_code_point = matches!(kind, 'u' | 'U') && (0xD800..0xE000).contains(&value);
        if value > max || invalid_code_point {
            return Err(FormatError::new(
                line,
                column,
                "escape sequence is invalid Unicode code point",
            ));
        }
        Ok(())
    }

    fn raw_string(&mut self) -> Result<Token, FormatError> {
        let (line, column) = (self.line, self.column);
        let mut text = String::from('`');
        self.bump();
        loop {
            match self.bump() {
                Some('`') => {
                    text.push('`');
                    return Ok(Token::Str(text));
                }
                Some(c) => text.push(c),
                None => {
                    return Err(FormatError::new(
                        line,
                        column,
                        "raw string literal not terminated",
                    ));
                }
            }
        }
    }
}

fn digits_in(text: &str, pred: impl Fn(char) -> bool) -> bool {
    let digits = text.trim_start_matches('_');
    !digits.is_empty() && !digits.ends_with('_') && digits.chars().all(|c| c == '_' || pred(c))
}
