use serde::Serialize;
use std::fmt;
use thiserror::Error;

use crate::model::operator::Operator;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("division by zero")]
    DivisionByZero,

    #[error("answer overflows: {left} {operator} {right}")]
    Overflow {
        left: i64,
        operator: Operator,
        right: i64,
    },
}

/// A generated arithmetic prompt with its precomputed answer.
///
/// Superseded by the next generated question, never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Question {
    left: i64,
    operator: Operator,
    right: i64,
    answer: i64,
}

impl Question {
    /// Builds a question and computes its answer.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError::DivisionByZero` for `x / 0` and
    /// `QuestionError::Overflow` if the answer does not fit in `i64`.
    pub fn new(left: i64, operator: Operator, right: i64) -> Result<Self, QuestionError> {
        if operator == Operator::Divide && right == 0 {
            return Err(QuestionError::DivisionByZero);
        }
        let answer = operator.apply(left, right).ok_or(QuestionError::Overflow {
            left,
            operator,
            right,
        })?;
        Ok(Self {
            left,
            operator,
            right,
            answer,
        })
    }

    /// Builds a question from tier operands.
    ///
    /// # Panics
    ///
    /// Panics if the operands divide by zero or overflow, which tier ranges
    /// (small, starting at 1) rule out.
    pub(crate) fn generated(left: i64, operator: Operator, right: i64) -> Self {
        let answer = operator
            .apply(left, right)
            .expect("tier operands should have a defined answer");
        Self {
            left,
            operator,
            right,
            answer,
        }
    }

    #[must_use]
    pub fn left(&self) -> i64 {
        self.left
    }

    #[must_use]
    pub fn right(&self) -> i64 {
        self.right
    }

    #[must_use]
    pub fn operator(&self) -> Operator {
        self.operator
    }

    #[must_use]
    pub fn answer(&self) -> i64 {
        self.answer
    }

    /// Textual form, e.g. `"3 + 4"`.
    #[must_use]
    pub fn expression(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.left, self.operator, self.right)
    }
}
