mod converter;
mod emitter;
mod error;
mod generator;
mod instruction;
mod lexer;
mod operator;
mod token;

pub use {
    error::{ErrorKind, TacError, TacResult},
    generator::{TacGenerator, compile, compile_bytes, to_postfix},
    instruction::{Instruction, Name, Program},
    operator::{Operator, precedence},
    token::{Postfix, Token, TokenKind},
};
