//! Infix to postfix conversion (shunting-yard).

use minivec::MiniVec;

use crate::{
    error::{TacError, TacResult},
    operator::precedence,
    token::{Postfix, Token, TokenKind},
};

#[derive(Debug)]
enum Pending<'a> {
    Paren(Token<'a>),
    Operator(Token<'a>, i8),
}

/// Rewrite an infix token sequence into postfix order.
///
/// Operators of equal rank are popped before the incoming one is pushed, so
/// `a - b - c` associates to the left. Empty input gives an empty sequence.
pub(crate) fn to_postfix<'a>(tokens: &[Token<'a>]) -> TacResult<Postfix<'a>> {
    let mut output = Vec::with_capacity(tokens.len());
    let mut operators: MiniVec<Pending<'a>> = MiniVec::new();

    for token in tokens {
        match token.kind {
            TokenKind::Operand => output.push(*token),
            TokenKind::LeftParen => {
                operators.push(Pending::Paren(*token));
            }
            TokenKind::RightParen => loop {
                match operators.pop() {
                    Some(Pending::Operator(op, _)) => output.push(op),
                    Some(Pending::Paren(_)) => break,
                    None => {
                        return Err(TacError::MismatchedParentheses(
                            token.start_position,
                            token.end_position,
                        ));
                    }
                }
            },
            TokenKind::Operator(_) => {
                let rank = precedence(token.text).ok_or_else(|| unknown(token))?;
                while let Some(Pending::Operator(_, top)) = operators.last() {
                    if *top < rank {
                        break;
                    }
                    if let Some(Pending::Operator(op, _)) = operators.pop() {
                        output.push(op);
                    }
                }
                operators.push(Pending::Operator(*token, rank));
            }
            TokenKind::Unknown => return Err(unknown(token)),
        }
    }

    while let Some(pending) = operators.pop() {
        match pending {
            Pending::Operator(op, _) => output.push(op),
            Pending::Paren(paren) => {
                return Err(TacError::MismatchedParentheses(
                    paren.start_position,
                    paren.end_position,
                ));
            }
        }
    }

    log::trace!("postfix: {} tokens", output.len());
    Ok(Postfix::new(output))
}

fn unknown(token: &Token<'_>) -> TacError {
    TacError::UnknownOperator {
        token: token.text.to_string(),
        start: token.start_position,
        end: token.end_position,
    }
}
