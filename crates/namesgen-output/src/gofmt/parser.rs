//! Parser producing a layout-preserving syntax tree.

use super::FormatError;
use super::lexer::{Spanned, Token};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SourceFile {
    pub items: Vec<Item>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Item {
    /// Comment on a line of its own.
    Comment(String),
    Blank,
    Package {
        name: String,
        comment: Option<String>,
    },
    Const(ConstDecl),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ConstDecl {
    Single(Spec),
    Group {
        open_comment: Option<String>,
        lines: Vec<GroupLine>,
        close_comment: Option<String>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum GroupLine {
    Spec(Spec),
    Comment(String),
    Blank,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Spec {
    pub name: String,
    /// Literal or identifier, source text.
    pub value: String,
    pub comment: Option<String>,
}

struct Parser<'a> {
    tokens: &'a [Spanned],
    pos: usize,
}

/// Parses a token stream produced by [`super::lexer::tokenize`].
pub(crate) fn parse(tokens: &[Spanned]) -> Result<SourceFile, FormatError> {
    Parser { tokens, pos: 0 }.file()
}

impl<'a> Parser<'a> {
    fn current(&self) -> &'a Spanned {
        // tokenize always terminates the stream with Eof
        &self.tokens[self.pos.min(self.tokens.len() - 1)]
    }

    fn peek(&self) -> &'a Token {
        &self.current().token
    }

    fn advance(&mut self) -> &'a Token {
        let token = self.peek();
        if *token != Token::Eof {
            self.pos += 1;
        }
        token
    }

    fn error_here(&self, message: impl Into<String>) -> FormatError {
        let current = self.current();
        FormatError::new(current.line, current.column, message)
    }

    fn expected(&self, what: &str) -> FormatError {
        self.error_here(format!("expected {what}, found {}", self.peek()))
    }

    /// Consumes newlines and reports whether any were found. Callers have
    /// already consumed the previous line's terminator, so any newline here
    /// is a blank line.
    fn skip_newlines(&mut self) -> bool {
        let mut found = false;
        while *self.peek() == Token::Newline {
            self.advance();
            found = true;
        }
        found
    }

    fn eat_semicolon(&mut self) {
        if *self.peek() == Token::Semicolon {
            self.advance();
        }
    }

    fn trailing_comment(&mut self) -> Option<String> {
        match self.peek() {
            Token::Comment(text) => {
                self.advance();
                Some(text.clone())
            }
            _ => None,
        }
    }

    /// Requires the end of a line (newline or end of file).
    fn end_of_line(&mut self) -> Result<(), FormatError> {
        match self.peek() {
            Token::Newline => {
                self.advance();
                Ok(())
            }
            Token::Eof => Ok(()),
            _ => Err(self.expected("newline")),
        }
    }

    fn file(mut self) -> Result<SourceFile, FormatError> {
        let mut items = Vec::new();
        let mut seen_package = false;

        loop {
            if self.skip_newlines() && !items.is_empty() {
                items.push(Item::Blank);
            }
            match self.peek() {
                Token::Eof => break,
                Token::Comment(text) => {
                    self.advance();
                    items.push(Item::Comment(text.clone()));
                    self.end_of_line()?;
                }
                Token::Keyword("package") if !seen_package => {
                    self.advance();
                    let name = self.package_name()?;
                    self.eat_semicolon();
                    let comment = self.trailing_comment();
                    self.end_of_line()?;
                    items.push(Item::Package { name, comment });
                    seen_package = true;
                }
                _ if !seen_package => return Err(self.expected("'package'")),
                Token::Keyword("const") => {
                    self.advance();
                    let decl = self.const_decl()?;
                    items.push(Item::Const(decl));
                }
                Token::Keyword(kw @ ("import" | "var" | "type" | "func")) => {
                    return Err(self.error_here(format!("unsupported declaration '{kw}'")));
                }
                _ => return Err(self.expected("declaration")),
            }
        }

        if !seen_package {
            return Err(self.expected("'package'"));
        }
        Ok(SourceFile { items })
    }

    fn package_name(&mut self) -> Result<String, FormatError> {
        match self.peek() {
            Token::Ident(name) if name != "_" => {
                self.advance();
                Ok(name.clone())
            }
            Token::Ident(_) => Err(self.error_here("invalid package name _")),
            _ => Err(self.expected("package name")),
        }
    }

    fn const_decl(&mut self) -> Result<ConstDecl, FormatError> {
        match self.peek() {
            Token::LParen => {
                self.advance();
                self.const_group()
            }
            Token::Ident(_) => {
                let spec = self.spec()?;
                self.end_of_line()?;
                Ok(ConstDecl::Single(spec))
            }
            _ => Err(self.expected("identifier or '('")),
        }
    }

    fn const_group(&mut self) -> Result<ConstDecl, FormatError> {
        let open_comment = self.trailing_comment();
        let mut lines = Vec::new();

        loop {
            if self.skip_newlines() && !lines.is_empty() {
                lines.push(GroupLine::Blank);
            }
            match self.peek() {
                Token::RParen => {
                    self.advance();
                    break;
                }
                Token::Comment(text) => {
                    self.advance();
                    lines.push(GroupLine::Comment(text.clone()));
                    if *self.peek() != Token::RParen {
                        self.end_of_line()?;
                    }
                }
                Token::Ident(_) => {
                    let spec = self.spec()?;
                    lines.push(GroupLine::Spec(spec));
                    if *self.peek() != Token::RParen {
                        self.end_of_line()?;
                    }
                }
                Token::Eof => return Err(self.expected("')'")),
                _ => return Err(self.expected("identifier")),
            }
        }

        if lines.last() == Some(&GroupLine::Blank) {
            lines.pop();
        }
        self.eat_semicolon();
        let close_comment = self.trailing_comment();
        self.end_of_line()?;
        Ok(ConstDecl::Group {
            open_comment,
            lines,
            close_comment,
        })
    }

    fn spec(&mut self) -> Result<Spec, FormatError> {
        let name = match self.advance() {
            Token::Ident(name) => name.clone(),
            _ => return Err(self.expected("identifier")),
        };
        if *self.peek() != Token::Assign {
            return Err(self.expected("'='"));
        }
        self.advance();
        let value = match self.peek() {
            Token::Str(text) | Token::Ident(text) => text.clone(),
            Token::Int(text) => normalize_int(text),
            _ => return Err(self.expected("expression")),
        };
        self.advance();
        self.eat_semicolon();
        let comment = self.trailing_comment();
        Ok(Spec {
            name,
            value,
            comment,
        })
    }
}

/// Lower-cases the base prefix of an integer literal (`0X1F` -> `0x1F`).
fn normalize_int(text: &str) -> String {
    match text.get(..2) {
        Some(prefix @ ("0X" | "0B" | "0O")) => {
            format!("{}{}", prefix.to_ascii_lowercase(), &text[2..])
        }
        _ => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::super::lexer::tokenize;
    use super::*;

    fn parse_str(source: &str) -> Result<SourceFile, FormatError> {
        parse(&tokenize(source)?)
    }

    #[test]
    fn test_parse_generated_shape() {
        let file = parse_str(
            "\n// Code generated; DO NOT EDIT.\npackage names\n\nconst (\n\tACM = \"acm\"\n)\n",
        )
        .unwrap();
        assert_eq!(
            file.items,
            vec![
                Item::Comment("// Code generated; DO NOT EDIT.".to_string()),
                Item::Package {
                    name: "names".to_string(),
                    comment: None,
                },
                Item::Blank,
                Item::Const(ConstDecl::Group {
                    open_comment: None,
                    lines: vec![GroupLine::Spec(Spec {
                        name: "ACM".to_string(),
                        value: "\"acm\"".to_string(),
                        comment: None,
                    })],
                    close_comment: None,
                }),
            ]
        );
    }

    #[test]
    fn test_parse_single_const_with_comment() {
        let file = parse_str("package p\nconst X = 0X1F; // hex\n").unwrap();
        assert_eq!(
            file.items[1],
            Item::Const(ConstDecl::Single(Spec {
                name: "X".to_string(),
                value: "0x1F".to_string(),
                comment: Some("// hex".to_string()),
            }))
        );
    }

    #[test]
    fn test_group_drops_edge_blank_lines() {
        let file = parse_str("package p\nconst (\n\n\tA = 1\n\n\tB = 2\n\n)\n").unwrap();
        let Item::Const(ConstDecl::Group { lines, .. }) = &file.items[1] else {
            panic!("expected group");
        };
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], GroupLine::Blank);
    }

    #[test]
    fn test_missing_package() {
        let err = parse_str("const X = 1\n").unwrap_err();
        assert_eq!(err.message, "expected 'package', found 'const'");
        let err = parse_str("// only a comment\n").unwrap_err();
        assert_eq!(err.message, "expected 'package', found EOF");
    }

    #[test]
    fn test_value_followed_by_junk() {
        // "a"b"c" from an unescaped value
        let err = parse_str("package p\nconst (\n\tX = \"a\"b\"c\"\n)\n").unwrap_err();
        assert_eq!(err.message, "expected newline, found b");
        assert_eq!((err.line, err.column), (3, 9));
    }

    #[test]
    fn test_unclosed_group() {
        let err = parse_str("package p\nconst (\n\tX = 1\n").unwrap_err();
        assert_eq!(err.message, "expected ')', found EOF");
    }

    #[test]
    fn test_keyword_as_name() {
        let err = parse_str("package p\nconst (\n\ttype = \"t\"\n)\n").unwrap_err();
        assert_eq!(err.message, "expected identifier, found 'type'");
    }

    #[test]
    fn test_unsupported_declaration() {
        let err = parse_str("package p\nvar x = 1\n").unwrap_err();
        assert_eq!(err.message, "unsupported declaration 'var'");
    }
}
