//! # formula
//!
//! A small arithmetic language for numeric fields in formula mode: decimal
//! literals, `+ - * /`, unary minus and parentheses.
//!
//! ```
//! assert_eq!(formula::evaluate("12+3*4"), Ok("24".to_string()));
//! assert_eq!(formula::evaluate("-(1.5 + .5) / 4"), Ok("-0.5".to_string()));
//! assert!(formula::evaluate("1/0").is_err());
//! ```

mod error;
mod eval;
mod lexer;
mod parser;

pub use error::EvalError;

/// Parse and evaluate `input`, returning the result as a plain decimal
/// string (no exponent).
pub fn evaluate(input: &str) -> Result<String, EvalError> {
    let tokens = lexer::tokenize(input)?;
    let expr = parser::parse(&tokens)?;
    let value = expr.eval()?;
    let text = format!("{value}");
    log::trace!(target: "numfield.formula", "evaluate {input:?} -> {text}");
    Ok(text)
}
