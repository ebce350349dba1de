//! Restricted literal parser for reading the generated source back.
//!
//! The generated file may use single-quoted Dart string literals, so strict
//! JSON parsing does not apply. This parser accepts exactly the literal
//! grammar the renderer can emit, plus the symmetric conveniences Dart
//! allows (trailing commas, `\u{...}` escapes): maps, lists, single- or
//! double-quoted strings, numbers, booleans and `null`. It never evaluates
//! anything, so a hand-edited file cannot smuggle code through it.

use serde_json::{Map, Number, Value};

use crate::error::Error;

/// Parses a restricted literal into an ordered JSON value.
pub fn parse_literal(input: &str) -> Result<Value, Error> {
    let mut parser = LiteralParser { src: input, pos: 0 };
    parser.skip_whitespace();
    let value = parser.parse_value()?;
    parser.skip_whitespace();
    if parser.peek().is_some() {
        return Err(parser.error("trailing characters after literal"));
    }
    Ok(value)
}

struct LiteralParser<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> LiteralParser<'a> {
    fn peek(&self) -> Option<char> {
        self.src[self.pos..].chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.bump();
        }
    }

    fn error(&self, message: impl Into<String>) -> Error {
        Error::literal_error(self.pos, message)
    }

    fn expect(&mut self, expected: char) -> Result<(), Error> {
        match self.peek() {
            Some(c) if c == expected => {
                self.bump();
                Ok(())
            }
            Some(c) => Err(self.error(format!("expected `{}`, found `{}`", expected, c))),
            None => Err(self.error(format!("expected `{}`, found end of input", expected))),
        }
    }

    fn parse_value(&mut self) -> Result<Value, Error> {
        match self.peek() {
            Some('{') => self.parse_map(),
            Some('[') => self.parse_list(),
            Some('"') | Some('\'') => Ok(Value::String(self.parse_string()?)),
            Some('t') | Some('f') | Some('n') => self.parse_keyword(),
            Some(c) if c == '-' || c.is_ascii_digit() => self.parse_number(),
            Some(c) => Err(self.error(format!("unexpected character `{}`", c))),
            None => Err(self.error("unexpected end of input")),
        }
    }

    fn parse_map(&mut self) -> Result<Value, Error> {
        self.expect('{')?;
        let mut map = Map::new();
        self.skip_whitespace();
        if self.peek() == Some('}') {
            self.bump();
            return Ok(Value::Object(map));
        }
        loop {
            self.skip_whitespace();
            if !matches!(self.peek(), Some('"') | Some('\'')) {
                return Err(self.error("map key must be a string literal"));
            }
            let key = self.parse_string()?;
            self.skip_whitespace();
            self.expect(':')?;
            self.skip_whitespace();
            let value = self.parse_value()?;
            map.insert(key, value);
            self.skip_whitespace();
            match self.peek() {
                Some(',') => {
                    self.bump();
                    self.skip_whitespace();
                    // Trailing comma before the closing brace.
                    if self.peek() == Some('}') {
                        self.bump();
                        return Ok(Value::Object(map));
                    }
                }
                Some('}') => {
                    self.bump();
                    return Ok(Value::Object(map));
                }
                _ => return Err(self.error("expected `,` or `}` in map")),
            }
        }
    }

    fn parse_list(&mut self) -> Result<Value, Error> {
        self.expect('[')?;
        let mut items = Vec::new();
        self.skip_whitespace();
        if self.peek() == Some(']') {
            self.bump();
            return Ok(Value::Array(items));
        }
        loop {
            self.skip_whitespace();
            items.push(self.parse_value()?);
            self.skip_whitespace();
            match self.peek() {
                Some(',') => {
                    self.bump();
                    self.skip_whitespace();
                    if self.peek() == Some(']') {
                        self.bump();
                        return Ok(Value::Array(items));
                    }
                }
                Some(']') => {
                    self.bump();
                    return Ok(Value::Array(items));
                }
                _ => return Err(self.error("expected `,` or `]` in list")),
            }
        }
    }

    fn parse_string(&mut self) -> Result<String, Error> {
        let quote = match self.bump() {
            Some(c @ ('"' | '\'')) => c,
            _ => return Err(self.error("expected string literal")),
        };
        let mut buf = String::new();
        loop {
            match self.bump() {
                None => return Err(self.error("unterminated string literal")),
                Some(c) if c == quote => return Ok(buf),
                Some('\\') => buf.push(self.parse_escape()?),
                Some(c) => buf.push(c),
            }
        }
    }

    fn parse_escape(&mut self) -> Result<char, Error> {
        match self.bump() {
            Some('n') => Ok('\n'),
            Some('r') => Ok('\r'),
            Some('t') => Ok('\t'),
            Some('b') => Ok('\u{8}'),
            Some('f') => Ok('\u{c}'),
            Some(c @ ('\\' | '/' | '\'' | '"' | '$')) => Ok(c),
            Some('u') => self.parse_unicode_escape(),
            Some(c) => Err(self.error(format!("unsupported escape `\\{}`", c))),
            None => Err(self.error("unterminated escape sequence")),
        }
    }

    /// Accepts both `\uXXXX` (four hex digits) and `\u{X...}`.
    fn parse_unicode_escape(&mut self) -> Result<char, Error> {
        let mut hex = String::new();
        if self.peek() == Some('{') {
            self.bump();
            while let Some(c) = self.peek() {
                if c == '}' {
                    break;
                }
                hex.push(c);
                self.bump();
            }
            self.expect('}')?;
        } else {
            for _ in 0..4 {
                match self.bump() {
                    Some(c) => hex.push(c),
                    None => return Err(self.error("unterminated unicode escape")),
                }
            }
        }
        u32::from_str_radix(&hex, 16)
            .ok()
            .and_then(char::from_u32)
            .ok_or_else(|| self.error(format!("invalid unicode escape `\\u{}`", hex)))
    }

    fn parse_keyword(&mut self) -> Result<Value, Error> {
        for (keyword, value) in [
            ("true", Value::Bool(true)),
            ("false", Value::Bool(false)),
            ("null", Value::Null),
        ] {
            if self.src[self.pos..].starts_with(keyword) {
                self.pos += keyword.len();
                return Ok(value);
            }
        }
        Err(self.error("unexpected identifier"))
    }

    fn parse_number(&mut self) -> Result<Value, Error> {
        let start = self.pos;
        while self
            .peek()
            .is_some_and(|c| c.is_ascii_digit() || matches!(c, '-' | '+' | '.' | 'e' | 'E'))
        {
            self.bump();
        }
        let token = &self.src[start..self.pos];
        let number: Number = serde_json::from_str(token)
            .map_err(|_| Error::literal_error(start, format!("invalid number `{}`", token)))?;
        Ok(Value::Number(number))
    }
}
