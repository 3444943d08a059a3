use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EvalError {
    /// A character that starts no token, with its byte offset.
    UnexpectedChar { ch: char, at: usize },
    /// A token in a position the grammar does not allow.
    UnexpectedToken { found: String, at: usize },
    UnexpectedEnd,
    DivisionByZero,
    /// The result overflowed or is otherwise not a finite number.
    NonFinite,
    /// Parentheses or signs nested deeper than the parser follows.
    TooDeep { at: usize },
    /// More tokens than a formula may hold.
    TooLong { tokens: usize },
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvalError::UnexpectedChar { ch, at } => {
                write!(f, "unexpected character {ch:?} at offset {at}")
            }
            EvalError::UnexpectedToken { found, at } => {
                write!(f, "unexpected {found} at offset {at}")
            }
            EvalError::UnexpectedEnd => f.write_str("unexpected end of formula"),
            EvalError::DivisionByZero => f.write_str("division by zero"),
            EvalError::NonFinite => f.write_str("result is not a finite number"),
            EvalError::TooDeep { at } => write!(f, "formula nested too deeply at offset {at}"),
            EvalError::TooLong { tokens } => write!(f, "formula has too many tokens ({tokens})"),
        }
    }
}

impl std::error::Error for EvalError {}
