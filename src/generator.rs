use simdutf8::basic::from_utf8;

use crate::{
    converter,
    emitter::Emitter,
    error::{TacError, TacResult},
    instruction::{self, Instruction, Name, Program},
    lexer::Lexer,
    token::Postfix,
};

/// A TAC generation session.
///
/// `new` always starts from a clean slate: counter at zero, no instructions.
/// Every successful `generate` appends to the same instruction list and keeps
/// numbering temporaries where the previous call stopped, so use one session
/// per expression unless temporaries are meant to be shared across
/// expressions. A failed call leaves the session untouched.
#[derive(Debug, Default)]
pub struct TacGenerator {
    temp_count: u32,
    instructions: Vec<Instruction>,
}

impl TacGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn generate(&mut self, expression: &str) -> TacResult<Name> {
        let tokens = Lexer::new(expression).tokenize();
        if tokens.is_empty() {
            return Err(TacError::EmptyInput);
        }
        let postfix = converter::to_postfix(&tokens)?;
        log::debug!("`{}` -> postfix `{postfix}`", expression.trim());

        let mut emitter = Emitter::new(self.temp_count);
        let result = emitter.emit(&postfix)?;

        self.temp_count = emitter.temp_count();
        let emitted = emitter.into_instructions();
        log::debug!("emitted {} instructions, result `{result}`", emitted.len());
        self.instructions.extend(emitted);
        Ok(result)
    }

    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    pub fn into_instructions(self) -> Vec<Instruction> {
        self.instructions
    }

    /// Every instruction generated so far, one per line.
    pub fn listing(&self) -> String {
        instruction::listing(&self.instructions)
    }

    /// Number of temporaries handed out so far.
    pub fn temp_count(&self) -> u32 {
        self.temp_count
    }

    pub fn reset(&mut self) {
        self.temp_count = 0;
        self.instructions.clear();
    }
}

/// Compile one expression in a fresh session.
pub fn compile(expression: &str) -> TacResult<Program> {
    let mut generator = TacGenerator::new();
    let result = generator.generate(expression)?;
    Ok(Program::new(generator.into_instructions(), result))
}

/// Same as [`compile`], for input that has not been checked for UTF-8 yet.
pub fn compile_bytes(bytes: &[u8]) -> TacResult<Program> {
    let expression = from_utf8(bytes)?;
    compile(expression)
}

/// Convert an expression to postfix without emitting anything.
pub fn to_postfix(expression: &str) -> TacResult<Postfix<'_>> {
    let tokens = Lexer::new(expression).tokenize();
    if tokens.is_empty() {
        return Err(TacError::EmptyInput);
    }
    converter::to_postfix(&tokens)
}
