use std::{collections::HashMap, rc::Rc};

use crate::{Span, MK_TOKEN};

use super::lang::{self, OPERATOR_LOOKUP};
use super::tokens::{Token, TokenKind, RESERVED_LOOKUP};

/// Caller-owned mapping from operator kind to binding strength. The
/// scanner only ever reads it.
pub type PrecedenceLookup = HashMap<TokenKind, u32>;

/// Single-pass, pull-based scanner over one source text.
///
/// Each call to [`Scanner::next_token`] consumes characters from the
/// forward-only cursor and returns exactly one token. The scanner never
/// fails: ill-formed input comes back as `TokenKind::Unrecognised` and
/// exhausted input as `TokenKind::EOF`, which repeats forever once
/// reached.
pub struct Scanner {
    source: Rc<String>,
    file: Rc<String>,
    pos: u32,
    current: Option<Token>,
    precedence: PrecedenceLookup,
}

impl Scanner {
    pub fn new(source: String, file: Option<String>, precedence: PrecedenceLookup) -> Scanner {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        Scanner {
            source: Rc::new(source),
            file: file_name,
            pos: 0,
            current: None,
            precedence,
        }
    }

    /// The most recently produced token, or `None` before the first
    /// `next_token` call.
    pub fn current(&self) -> Option<&Token> {
        self.current.as_ref()
    }

    pub fn file(&self) -> &Rc<String> {
        &self.file
    }

    /// Binding strength of the current token from the caller-supplied
    /// table. `None` when no token has been produced yet or the kind is
    /// absent from the table.
    pub fn precedence_of_current(&self) -> Option<u32> {
        let token = self.current.as_ref()?;
        self.precedence.get(&token.kind).copied()
    }

    pub fn next_token(&mut self) -> Token {
        let token = self.scan();
        self.current = Some(token.clone());
        token
    }

    fn at(&self) -> char {
        self.source.as_bytes()[self.pos as usize] as char
    }

    fn peek(&self) -> Option<char> {
        self.source
            .as_bytes()
            .get(self.pos as usize + 1)
            .map(|b| *b as char)
    }

    fn at_eof(&self) -> bool {
        self.pos as usize >= self.source.len()
    }

    fn advance(&mut self) {
        self.pos += 1;
    }

    fn advance_n(&mut self, n: u32) {
        self.pos += n;
    }

    fn span_from(&self, start: u32) -> Span {
        Span::new(start, self.pos - start, Rc::clone(&self.source))
    }

    /// One skip-insignificant -> classify -> emit round. Comment runs
    /// loop back to the top instead of recursing, so arbitrarily long
    /// comment streaks use constant stack.
    fn scan(&mut self) -> Token {
        loop {
            while !self.at_eof() && lang::is_whitespace(self.at()) {
                self.advance();
            }

            if self.at_eof() {
                return MK_TOKEN!(TokenKind::EOF, self.span_from(self.pos));
            }

            let c = self.at();
            let start = self.pos;

            if lang::is_comment_begin(c, self.peek()) {
                self.skip_comment();
                continue;
            }

            if lang::is_identifier_begin(c) {
                return self.scan_identifier(start);
            }

            if c.is_ascii_digit() {
                return self.scan_number(start);
            }

            if lang::is_attribute_marker(c) {
                self.advance();
                return MK_TOKEN!(TokenKind::At, self.span_from(start));
            }

            if lang::is_preprocessor_marker(c) {
                self.advance();
                return MK_TOKEN!(TokenKind::Hash, self.span_from(start));
            }

            if let Some(entries) = OPERATOR_LOOKUP.get(&c) {
                let next = self.peek();

                for (second, kind) in entries.iter() {
                    match second {
                        Some(second) if next == Some(*second) => {
                            self.advance_n(2);
                            return MK_TOKEN!(*kind, self.span_from(start));
                        }
                        None => {
                            self.advance();
                            return MK_TOKEN!(*kind, self.span_from(start));
                        }
                        _ => {}
                    }
                }
            }

            // Consume exactly one character so every request makes
            // forward progress.
            self.advance();
            return MK_TOKEN!(TokenKind::Unrecognised, self.span_from(start));
        }
    }

    fn scan_identifier(&mut self, start: u32) -> Token {
        while !self.at_eof() && lang::is_identifier_continuation(self.at()) {
            self.advance();
        }

        let span = self.span_from(start);

        if let Some(kind) = RESERVED_LOOKUP.get(span.lexeme().to_ascii_lowercase().as_str()) {
            MK_TOKEN!(*kind, span)
        } else {
            MK_TOKEN!(TokenKind::Identifier, span)
        }
    }

    /// Greedy scan: digits, with at most one `.`. The raw lexeme is
    /// kept as-is; range checks and the lenient trailing-`.` form are
    /// validated downstream.
    fn scan_number(&mut self, start: u32) -> Token {
        let mut seen_decimal = false;

        while !self.at_eof() && lang::is_number_continuation(self.at(), seen_decimal) {
            if self.at() == '.' {
                seen_decimal = true;
            }
            self.advance();
        }

        MK_TOKEN!(TokenKind::Number, self.span_from(start))
    }

    fn skip_comment(&mut self) {
        if lang::is_line_comment(self.at(), self.peek()) {
            while !self.at_eof() && self.at() != '\n' {
                self.advance();
            }
            return;
        }

        // Block comment: consume the opening `/*`, then everything up
        // to and including `*/`. EOF terminates an unclosed comment.
        self.advance_n(2);

        while !self.at_eof() {
            if lang::is_block_comment_end(self.at(), self.peek()) {
                self.advance_n(2);
                return;
            }
            self.advance();
        }
    }
}

impl Iterator for Scanner {
    type Item = Token;

    /// Yields every token up to and including the first EOF token.
    fn next(&mut self) -> Option<Token> {
        if matches!(self.current, Some(ref token) if token.is_eof()) {
            return None;
        }

        Some(self.next_token())
    }
}

/// Drains a scanner over the whole source, ending with the EOF token.
pub fn tokenize(source: String, file: Option<String>, precedence: PrecedenceLookup) -> Vec<Token> {
    let mut scanner = Scanner::new(source, file, precedence);
    let mut tokens = vec![];

    loop {
        let token = scanner.next_token();
        let at_end = token.is_eof();
        tokens.push(token);

        if at_end {
            return tokens;
        }
    }
}
