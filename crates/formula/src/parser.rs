use crate::error::EvalError;
use crate::eval::{BinaryOperator, Expr};
use crate::lexer::{Spanned, Token};

type ParserResult<T> = Result<T, EvalError>;

/// Nesting limit for parentheses and prefix signs.
pub(crate) const MAX_DEPTH: usize = 256;
/// Token limit, which also bounds the depth of operator chains.
pub(crate) const MAX_TOKENS: usize = 1024;

struct Parser<'t> {
    tokens: &'t [Spanned],
    pos: usize,
    depth: usize,
}

impl<'t> Parser<'t> {
    fn peek(&self) -> Option<&'t Spanned> {
        self.tokens.get(self.pos)
    }

    fn next_token(&mut self) -> ParserResult<&'t Spanned> {
        let token = self.tokens.get(self.pos).ok_or(EvalError::UnexpectedEnd)?;
        self.pos += 1;
        Ok(token)
    }

    fn unexpected(spanned: &Spanned) -> EvalError {
        EvalError::UnexpectedToken {
            found: spanned.token.describe(),
            at: spanned.at,
        }
    }

    fn get_precedence(&self) -> u8 {
        match self.peek().map(|s| &s.token) {
            Some(Token::Plus | Token::Minus) => 10,
            Some(Token::Star | Token::Slash) => 20,
            _ => 0,
        }
    }

    fn parse_expr(&mut self, precedence: u8) -> ParserResult<Expr> {
        if self.depth == MAX_DEPTH {
            let at = self.peek().or(self.tokens.last()).map_or(0, |s| s.at);
            return Err(EvalError::TooDeep { at });
        }
        self.depth += 1;
        let expr = self.parse_operators(precedence);
        self.depth -= 1;
        expr
    }

    fn parse_operators(&mut self, precedence: u8) -> ParserResult<Expr> {
        let mut expr = self.parse_prefix()?;
        let mut next = self.get_precedence();
        while precedence < next {
            expr = self.parse_infix(expr, next)?;
            next = self.get_precedence();
        }
        Ok(expr)
    }

    fn parse_infix(&mut self, left: Expr, precedence: u8) -> ParserResult<Expr> {
        let spanned = self.next_token()?;
        let operator = match spanned.token {
            Token::Plus => BinaryOperator::Add,
            Token::Minus => BinaryOperator::Sub,
            Token::Star => BinaryOperator::Mul,
            Token::Slash => BinaryOperator::Div,
            _ => return Err(Self::unexpected(spanned)),
        };
        let right = self.parse_expr(precedence)?;
        Ok(Expr::Binary {
            operator,
            left: Box::new(left),
            right: Box::new(right),
        })
    }

    fn parse_prefix(&mut self) -> ParserResult<Expr> {
        let spanned = self.next_token()?;
        match spanned.token {
            Token::Number(value) => Ok(Expr::Number(value)),
            Token::Minus => Ok(Expr::Negate(Box::new(self.parse_expr(20)?))),
            Token::Plus => self.parse_expr(20),
            Token::LeftParen => {
                let inner = self.parse_expr(0)?;
                match self.next_token()? {
                    Spanned {
                        token: Token::RightParen,
                        ..
                    } => Ok(inner),
                    other => Err(Self::unexpected(other)),
                }
            }
            _ => Err(Self::unexpected(spanned)),
        }
    }
}

pub(crate) fn parse(tokens: &[Spanned]) -> ParserResult<Expr> {
    if tokens.len() > MAX_TOKENS {
        return Err(EvalError::TooLong {
            tokens: tokens.len(),
        });
    }
    let mut parser = Parser {
        tokens,
        pos: 0,
        depth: 0,
    };
    let expr = parser.parse_expr(0)?;
    match parser.peek() {
        None => Ok(expr),
        Some(trailing) => Err(Parser::unexpected(trailing)),
    }
}
