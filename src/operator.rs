use phf::phf_map;
use strum::{AsRefStr, Display, EnumString, VariantArray};

/// Ranks for every symbol the converter compares. `(` acts as a barrier and
/// `=` sits below everything so assignment is resolved last.
static PRECEDENCE: phf::Map<&'static str, i8> = phf_map! {
    "(" => 0,
    "+" => 1,
    "-" => 1,
    "*" => 2,
    "/" => 2,
    "=" => -1,
};

/// Look up the rank of an operator or grouping symbol.
pub fn precedence(symbol: &str) -> Option<i8> {
    PRECEDENCE.get(symbol).copied()
}

#[derive(
    Debug, PartialEq, Eq, Hash, Clone, Copy, EnumString, AsRefStr, Display, VariantArray,
)]
pub enum Operator {
    #[strum(serialize = "+")]
    Add,
    #[strum(serialize = "-")]
    Sub,
    #[strum(serialize = "*")]
    Mul,
    #[strum(serialize = "/")]
    Div,
    #[strum(serialize = "=")]
    Assign,
}

impl Operator {
    pub fn as_str(&self) -> &str {
        self.as_ref()
    }

    pub fn is_assignment(&self) -> bool {
        matches!(self, Operator::Assign)
    }
}
