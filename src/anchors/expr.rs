// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Coordinate expressions.
//!
//! Coordinate columns may hold simple arithmetic such as `250+12` or
//! `(1000-80)/2`. The grammar is deliberately small:
//!
//! ```text
//! expr   := term (('+' | '-') term)*
//! term   := factor (('*' | '/' | '//') factor)*
//! factor := ('+' | '-') factor | number | '(' expr ')'
//! number := digits ['.' digits] | '.' digits
//! ```
//!
//! Evaluation happens in `f64`. `/` is true division and `//` is floor
//! division; [`eval_coordinate`] truncates the result toward zero.

use thiserror::Error;

/// Parenthesis / unary nesting limit
const MAX_DEPTH: usize = 64;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExprError {
    #[error("empty expression")]
    Empty,
    #[error("unexpected character '{0}'")]
    UnexpectedChar(char),
    #[error("unexpected end of expression")]
    UnexpectedEnd,
    #[error("invalid number '{0}'")]
    InvalidNumber(String),
    #[error("division by zero")]
    DivisionByZero,
    #[error("expression nested too deeply")]
    TooDeep,
    #[error("value {0} is out of range")]
    OutOfRange(f64),
}

/// Evaluate an expression and truncate it to an integer coordinate
pub fn eval_coordinate(source: &str) -> Result<i32, ExprError> {
    let value = eval(source)?;
    let truncated = value.trunc();
    if !truncated.is_finite() || truncated < i32::MIN as f64 || truncated > i32::MAX as f64 {
        return Err(ExprError::OutOfRange(value));
    }
    Ok(truncated as i32)
}

/// Evaluate an expression
pub fn eval(source: &str) -> Result<f64, ExprError> {
    let mut parser = Parser {
        chars: source.chars().collect(),
        pos: 0,
        depth: 0,
    };
    parser.skip_whitespace();
    if parser.peek().is_none() {
        return Err(ExprError::Empty);
    }
    let value = parser.expr()?;
    parser.skip_whitespace();
    match parser.peek() {
        None => Ok(value),
        Some(c) => Err(ExprError::UnexpectedChar(c)),
    }
}

struct Parser {
    chars: Vec<char>,
    pos: usize,
    depth: usize,
}

impl Parser {
    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.pos += 1;
        }
    }

    /// Consume `c` (after whitespace) if it is next
    fn eat(&mut self, c: char) -> bool {
        self.skip_whitespace();
        if self.peek() == Some(c) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn expr(&mut self) -> Result<f64, ExprError> {
        let mut value = self.term()?;
        loop {
            if self.eat('+') {
                value += self.term()?;
            } else if self.eat('-') {
                value -= self.term()?;
            } else {
                return Ok(value);
            }
        }
    }

    fn term(&mut self) -> Result<f64, ExprError> {
        let mut value = self.factor()?;
        loop {
            if self.eat('*') {
                value *= self.factor()?;
            } else if self.eat('/') {
                // `//` only when the slashes are adjacent
                let floor = self.peek() == Some('/');
                if floor {
                    self.pos += 1;
                }
                let divisor = self.factor()?;
                if divisor == 0.0 {
                    return Err(ExprError::DivisionByZero);
                }
                value /= divisor;
                if floor {
                    value = value.floor();
                }
            } else {
                return Ok(value);
            }
        }
    }

    fn factor(&mut self) -> Result<f64, ExprError> {
        self.depth += 1;
        if self.depth > MAX_DEPTH {
            return Err(ExprError::TooDeep);
        }
        let result = self.factor_inner();
        self.depth -= 1;
        result
    }

    fn factor_inner(&mut self) -> Result<f64, ExprError> {
        if self.eat('-') {
            return Ok(-self.factor()?);
        }
        if self.eat('+') {
            return self.factor();
        }
        if self.eat('(') {
            let value = self.expr()?;
            if !self.eat(')') {
                return Err(match self.peek() {
                    Some(c) => ExprError::UnexpectedChar(c),
                    None => ExprError::UnexpectedEnd,
                });
            }
            return Ok(value);
        }
        self.number()
    }

    fn number(&mut self) -> Result<f64, ExprError> {
        self.skip_whitespace();
        let start = self.pos;
        while self
            .peek()
            .is_some_and(|c| c.is_ascii_digit() || c == '.')
        {
            self.pos += 1;
        }
        if start == self.pos {
            return Err(match self.peek() {
                Some(c) => ExprError::UnexpectedChar(c),
                None => ExprError::UnexpectedEnd,
            });
        }
        let text: String = self.chars[start..self.pos].iter().collect();
        text.parse::<f64>()
            .map_err(|_| ExprError::InvalidNumber(text))
    }
}
