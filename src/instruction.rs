use std::fmt;

use crate::operator::Operator;

/// A storage location named by an instruction: something written in the
/// source expression, or a temporary minted by the generator.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Name {
    Var(String),
    Temp(u32),
}

impl Name {
    pub fn is_temp(&self) -> bool {
        matches!(self, Name::Temp(_))
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Name::Var(name) => f.write_str(name),
            Name::Temp(index) => write!(f, "t{index}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Instruction {
    /// `target = value`
    Assign { target: Name, value: Name },
    /// `result = lhs op rhs`
    Binary {
        result: Name,
        lhs: Name,
        operator: Operator,
        rhs: Name,
    },
}

impl Instruction {
    /// The name this instruction writes to.
    pub fn destination(&self) -> &Name {
        match self {
            Instruction::Assign { target, .. } => target,
            Instruction::Binary { result, .. } => result,
        }
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Instruction::Assign { target, value } => write!(f, "{target} = {value}"),
            Instruction::Binary {
                result,
                lhs,
                operator,
                rhs,
            } => write!(f, "{result} = {lhs} {operator} {rhs}"),
        }
    }
}

/// Join instructions one per line, no trailing newline.
pub(crate) fn listing(instructions: &[Instruction]) -> String {
    instructions
        .iter()
        .map(|instruction| instruction.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

/// The outcome of compiling one expression in a fresh session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Program {
    instructions: Vec<Instruction>,
    result: Name,
}

impl Program {
    pub(crate) fn new(instructions: Vec<Instruction>, result: Name) -> Self {
        Self {
            instructions,
            result,
        }
    }

    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    /// Name holding the value of the whole expression.
    pub fn result(&self) -> &Name {
        &self.result
    }

    pub fn lines(&self) -> Vec<String> {
        self.instructions.iter().map(ToString::to_string).collect()
    }

    pub fn listing(&self) -> String {
        listing(&self.instructions)
    }
}
