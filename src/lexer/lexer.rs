use std::{iter::Peekable, str::CharIndices, str::FromStr};

use crate::{
    operator::Operator,
    token::{Token, TokenKind},
};

#[derive(Debug)]
pub(crate) struct Lexer<'a> {
    inner: Peekable<CharIndices<'a>>,
    text: &'a str,
    position: usize,
}

impl<'a> Lexer<'a> {
    pub(crate) fn new(text: &'a str) -> Self {
        Self {
            inner: text.char_indices().peekable(),
            text,
            position: 0,
        }
    }

    #[inline]
    fn skip_whitespace(&mut self) {
        while let Some((index, _)) = self.inner.next_if(|(_, c)| c.is_whitespace()) {
            self.position = index;
        }
    }

    // one whitespace-delimited run
    #[inline]
    fn match_run(&mut self) -> (usize, usize) {
        let start_position = self.position;
        let mut end_position = start_position;
        while let Some((index, c)) = self.inner.next_if(|(_, c)| !c.is_whitespace()) {
            end_position = index + c.len_utf8();
        }
        self.position = end_position;
        (start_position, end_position)
    }

    /// Split on whitespace and classify each run. Never fails: anything that
    /// is not recognised comes back as `TokenKind::Unknown`.
    #[inline]
    pub(crate) fn tokenize(&mut self) -> Vec<Token<'a>> {
        let mut tokens = Vec::new();

        loop {
            self.skip_whitespace();

            match self.inner.peek() {
                Some((index, _)) => {
                    self.position = *index;
                    let (start, end) = self.match_run();
                    let text = &self.text[start..end];
                    tokens.push(Token::new(classify(text), text, start));
                }
                None => break,
            }
        }

        tokens
    }
}

fn classify(text: &str) -> TokenKind {
    match text {
        "(" => TokenKind::LeftParen,
        ")" => TokenKind::RightParen,
        _ => {
            if let Ok(op) = Operator::from_str(text) {
                TokenKind::Operator(op)
            } else if is_identifier(text) || is_integer(text) {
                TokenKind::Operand
            } else {
                TokenKind::Unknown
            }
        }
    }
}

fn is_identifier(text: &str) -> bool {
    let mut chars = text.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' => {
            chars.all(|c| c.is_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

fn is_integer(text: &str) -> bool {
    !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit())
}
