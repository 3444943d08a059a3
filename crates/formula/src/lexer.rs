use crate::error::EvalError;
use std::iter::Peekable;
use std::str::CharIndices;

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Token {
    Number(f64),
    Plus,
    Minus,
    Star,
    Slash,
    LeftParen,
    RightParen,
}

impl Token {
    pub(crate) fn describe(&self) -> String {
        match self {
            Token::Number(n) => format!("number {n}"),
            Token::Plus => "'+'".to_string(),
            Token::Minus => "'-'".to_string(),
            Token::Star => "'*'".to_string(),
            Token::Slash => "'/'".to_string(),
            Token::LeftParen => "'('".to_string(),
            Token::RightParen => "')'".to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Spanned {
    pub token: Token,
    pub at: usize,
}

struct Lexer<'input> {
    input: &'input str,
    chars: Peekable<CharIndices<'input>>,
}

impl<'input> Lexer<'input> {
    fn new(input: &'input str) -> Self {
        Self {
            input,
            chars: input.char_indices().peekable(),
        }
    }

    fn number(&mut self, start: usize) -> Result<Token, EvalError> {
        let mut end = start;
        let mut seen_point = false;
        while let Some(&(at, c)) = self.chars.peek() {
            if c.is_ascii_digit() {
                end = at + 1;
            } else if c == '.' && !seen_point {
                seen_point = true;
                end = at + 1;
            } else {
                break;
            }
            self.chars.next();
        }
        let text = &self.input[start..end];
        if text == "." {
            return Err(EvalError::UnexpectedChar { ch: '.', at: start });
        }
        text.parse()
            .map(Token::Number)
            .map_err(|_| EvalError::UnexpectedChar { ch: '.', at: start })
    }

    fn next_token(&mut self) -> Option<Result<Spanned, EvalError>> {
        while self.chars.next_if(|(_, c)| c.is_whitespace()).is_some() {}
        let &(at, c) = self.chars.peek()?;
        let token = match c {
            '0'..='9' | '.' => self.number(at),
            '+' => self.single(Token::Plus),
            '-' => self.single(Token::Minus),
            '*' => self.single(Token::Star),
            '/' => self.single(Token::Slash),
            '(' => self.single(Token::LeftParen),
            ')' => self.single(Token::RightParen),
            ch => Err(EvalError::UnexpectedChar { ch, at }),
        };
        Some(token.map(|token| Spanned { token, at }))
    }

    fn single(&mut self, token: Token) -> Result<Token, EvalError> {
        self.chars.next();
        Ok(token)
    }
}

pub(crate) fn tokenize(input: &str) -> Result<Vec<Spanned>, EvalError> {
    let mut lexer = Lexer::new(input);
    std::iter::from_fn(|| lexer.next_token()).collect()
}
