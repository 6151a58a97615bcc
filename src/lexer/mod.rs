mod lexer;

pub(crate) use lexer::Lexer;
