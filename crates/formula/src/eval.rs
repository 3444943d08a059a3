use crate::error::EvalError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BinaryOperator {
    Add,
    Sub,
    Mul,
    Div,
}

/// A parsed formula.
#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    Number(f64),
    Negate(Box<Expr>),
    Binary {
        operator: BinaryOperator,
        left: Box<Expr>,
        right: Box<Expr>,
    },
}

impl Expr {
    pub fn eval(&self) -> Result<f64, EvalError> {
        let value = match self {
            Expr::Number(value) => *value,
            Expr::Negate(inner) => -inner.eval()?,
            Expr::Binary {
                operator,
                left,
                right,
            } => {
                let (l, r) = (left.eval()?, right.eval()?);
                match operator {
                    BinaryOperator::Add => l + r,
                    BinaryOperator::Sub => l - r,
                    BinaryOperator::Mul => l * r,
                    BinaryOperator::Div if r == 0.0 => return Err(EvalError::DivisionByZero),
                    BinaryOperator::Div => l / r,
                }
            }
        };
        if !value.is_finite() {
            return Err(EvalError::NonFinite);
        }
        // Normalize -0 so it never renders as "-0".
        Ok(if value == 0.0 { 0.0 } else { value })
    }
}
