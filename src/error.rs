use simdutf8::basic::Utf8Error;
use strum::EnumDiscriminants;
use thiserror::Error;

pub type TacResult<T> = Result<T, TacError>;

/// Everything that can go wrong while turning an expression into TAC.
///
/// Positions are byte offsets into the expression: where the offending token
/// starts and where its last character starts.
#[derive(Debug, Error, PartialEq, Eq, EnumDiscriminants)]
#[strum_discriminants(name(ErrorKind), derive(Hash, strum::Display))]
pub enum TacError {
    #[error("invalid utf-8")]
    InvalidUtf8(#[from] Utf8Error),

    #[error("expression is empty")]
    EmptyInput,

    #[error("mismatched parentheses from `{0}` to `{1}`")]
    MismatchedParentheses(usize, usize),

    #[error("unknown operator `{token}` from `{start}` to `{end}`")]
    UnknownOperator {
        token: String,
        start: usize,
        end: usize,
    },

    #[error("insufficient operands for `{operator}` from `{start}` to `{end}`")]
    InsufficientOperands {
        operator: String,
        start: usize,
        end: usize,
    },

    #[error("expression did not resolve to a single result ({remaining} operands left)")]
    UnresolvedExpression { remaining: usize },
}

impl TacError {
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::from(self)
    }
}
