use std::fmt;

use crate::operator::Operator;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Operand,
    Operator(Operator),
    LeftParen,
    RightParen,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
    pub start_position: usize,
    pub end_position: usize,
}

impl<'a> Token<'a> {
    pub(crate) fn new(kind: TokenKind, text: &'a str, start_position: usize) -> Self {
        // end is the first byte of the last char, matching how the lexer reports spans
        let end_position = start_position
            + text
                .char_indices()
                .next_back()
                .map(|(index, _)| index)
                .unwrap_or(0);
        Self {
            kind,
            text,
            start_position,
            end_position,
        }
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text)
    }
}

/// Tokens in postfix (reverse polish) order. Only operands and operators
/// survive conversion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Postfix<'a> {
    tokens: Vec<Token<'a>>,
}

impl<'a> Postfix<'a> {
    pub(crate) fn new(tokens: Vec<Token<'a>>) -> Self {
        Self { tokens }
    }

    pub fn tokens(&self) -> &[Token<'a>] {
        &self.tokens
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token<'a>> {
        self.tokens.iter()
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl fmt::Display for Postfix<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tokens = self.tokens.iter();
        if let Some(first) = tokens.next() {
            write!(f, "{first}")?;
            for token in tokens {
                write!(f, " {token}")?;
            }
        }
        Ok(())
    }
}

impl<'p, 'a> IntoIterator for &'p Postfix<'a> {
    type Item = &'p Token<'a>;
    type IntoIter = std::slice::Iter<'p, Token<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}
