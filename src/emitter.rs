//! Postfix to three-address code.

use std::collections::HashSet;

use minivec::MiniVec;

use crate::{
    error::{TacError, TacResult},
    instruction::{Instruction, Name},
    token::{Postfix, Token, TokenKind},
};

/// One walk over a postfix sequence.
///
/// Works on a copy of the session's counter and its own instruction buffer so
/// that nothing leaks back into the session when the walk fails.
#[derive(Debug)]
pub(crate) struct Emitter {
    temp_count: u32,
    instructions: Vec<Instruction>,
}

impl Emitter {
    pub(crate) fn new(temp_count: u32) -> Self {
        Self {
            temp_count,
            instructions: Vec::new(),
        }
    }

    /// Next temporary whose `t<k>` spelling is not already an operand name.
    fn new_temp(&mut self, taken: &HashSet<&str>) -> Name {
        loop {
            self.temp_count += 1;
            if !taken.contains(format!("t{}", self.temp_count).as_str()) {
                return Name::Temp(self.temp_count);
            }
        }
    }

    /// Emit instructions for `postfix` and return the name holding its value.
    pub(crate) fn emit(&mut self, postfix: &Postfix<'_>) -> TacResult<Name> {
        let mut stack: MiniVec<Name> = MiniVec::new();
        let taken: HashSet<&str> = postfix
            .iter()
            .filter(|token| token.kind == TokenKind::Operand)
            .map(|token| token.text)
            .collect();

        for token in postfix {
            match token.kind {
                TokenKind::Operator(op) => {
                    let (rhs, lhs) = match (stack.pop(), stack.pop()) {
                        (Some(rhs), Some(lhs)) => (rhs, lhs),
                        _ => return Err(insufficient(token)),
                    };
                    let instruction = if op.is_assignment() {
                        stack.push(lhs.clone());
                        Instruction::Assign {
                            target: lhs,
                            value: rhs,
                        }
                    } else {
                        let result = self.new_temp(&taken);
                        stack.push(result.clone());
                        Instruction::Binary {
                            result,
                            lhs,
                            operator: op,
                            rhs,
                        }
                    };
                    log::trace!("{instruction}");
                    self.instructions.push(instruction);
                }
                TokenKind::Operand => {
                    stack.push(Name::Var(token.text.to_string()));
                }
                TokenKind::LeftParen | TokenKind::RightParen | TokenKind::Unknown => {
                    unreachable!("`{}` never survives postfix conversion", token.text)
                }
            }
        }

        match stack.pop() {
            Some(result) if stack.is_empty() => Ok(result),
            Some(_) => Err(TacError::UnresolvedExpression {
                remaining: stack.len() + 1,
            }),
            None => Err(TacError::UnresolvedExpression { remaining: 0 }),
        }
    }

    pub(crate) fn temp_count(&self) -> u32 {
        self.temp_count
    }

    pub(crate) fn into_instructions(self) -> Vec<Instruction> {
        self.instructions
    }
}

fn insufficient(token: &Token<'_>) -> TacError {
    TacError::InsufficientOperands {
        operator: token.text.to_string(),
        start: token.start_position,
        end: token.end_position,
    }
}
