use super::{Access, FieldPath, Segment};
use crate::{Error, MapKey, PathErrorKind, Result};

pub(super) fn parse(expr: &str) -> Result<FieldPath> {
    let mut parser = Parser { expr, pos: 0 };
    let segments = parser.parse_segments(false)?;

    if segments.is_empty() {
        return Err(parser.malformed("empty path"));
    }

    Ok(FieldPath {
        expr: expr.to_string(),
        segments,
    })
}

struct Parser<'a> {
    expr: &'a str,

    /// Byte offset of the next unread character
    pos: usize,
}

impl Parser<'_> {
    fn peek(&self) -> Option<char> {
        self.expr[self.pos..].chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn expect(&mut self, expected: char, reason: &'static str) -> Result<()> {
        match self.peek() {
            Some(c) if c == expected => {
                self.bump();
                Ok(())
            }
            _ => Err(self.malformed(reason)),
        }
    }

    fn malformed(&self, reason: &'static str) -> Error {
        Error::path(
            self.expr,
            PathErrorKind::Malformed {
                position: self.pos,
                reason,
            },
        )
    }

    /// Parses `segment ('.' segment)*`. Inside braces the list may be empty
    /// and ends before the closing `}`.
    fn parse_segments(&mut self, nested: bool) -> Result<Vec<Segment>> {
        let mut segments = vec![];

        if nested && self.peek() == Some('}') {
            return Ok(segments);
        }

        loop {
            let name = self.parse_ident()?;

            let access = match self.peek() {
                Some('[') => {
                    self.bump();
                    self.parse_subscript()?
                }
                Some('{') => {
                    if nested {
                        return Err(self.malformed("nested multi-occurrence segment"));
                    }

                    self.bump();
                    let start = self.pos;
                    let inner = self.parse_segments(true)?;
                    let end = self.pos;
                    self.expect('}', "expected `}`")?;

                    Access::Each(FieldPath {
                        expr: self.expr[start..end].to_string(),
                        segments: inner,
                    })
                }
                _ => Access::Field,
            };

            let is_multi = matches!(access, Access::Each(_));
            segments.push(Segment { name, access });

            match self.peek() {
                None => break,
                Some('}') if nested => break,
                Some('.') if !is_multi => {
                    self.bump();
                }
                _ if is_multi => {
                    return Err(self.malformed("multi-occurrence segment must be last"));
                }
                _ => return Err(self.malformed("expected `.`")),
            }
        }

        Ok(segments)
    }

    fn parse_ident(&mut self) -> Result<String> {
        let start = self.pos;

        match self.peek() {
            Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {
                self.bump();
            }
            _ => return Err(self.malformed("expected field name")),
        }

        while let Some(c) = self.peek() {
            if c.is_ascii_alphanumeric() || c == '_' || c == '$' || c == '-' {
                self.bump();
            } else {
                break;
            }
        }

        Ok(self.expr[start..self.pos].to_string())
    }

    /// Parses what follows `[`, through the closing `]`.
    fn parse_subscript(&mut self) -> Result<Access> {
        match self.peek() {
            Some(quote @ ('\'' | '"')) => {
                self.bump();
                let start = self.pos;

                loop {
                    match self.bump() {
                        Some(c) if c == quote => break,
                        Some(_) => {}
                        None => return Err(self.malformed("unterminated key")),
                    }
                }

                let key = self.expr[start..self.pos - quote.len_utf8()].to_string();
                self.expect(']', "expected `]`")?;

                Ok(Access::Key(MapKey::String(key)))
            }
            Some(c) if c.is_ascii_digit() || c == '-' => {
                let start = self.pos;
                self.bump();

                while matches!(self.peek(), Some(c) if c.is_ascii_digit()) {
                    self.bump();
                }

                let digits = &self.expr[start..self.pos];
                let Ok(n) = digits.parse::<i64>() else {
                    return Err(self.malformed("invalid integer subscript"));
                };
                self.expect(']', "expected `]`")?;

                // Negative subscripts can only be map keys.
                Ok(match usize::try_from(n) {
                    Ok(index) => Access::Index(index),
                    Err(_) => Access::Key(MapKey::I64(n)),
                })
            }
            _ => Err(self.malformed("expected index or quoted key")),
        }
    }
}
