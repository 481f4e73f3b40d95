use super::{Ident, OrError};
use std::fmt::Display;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AddOp {
    Add,
    Sub,
    Or,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MulOp {
    Mul,
    Div,
    And,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RelOp {
    Equal,
    NotEqual,
    Greater,
    Less,
    GreaterEqual,
    LessEqual,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Constant {
    Int(i64),
    Float(f64),
    Char(char),
}

/// Atomic operand
#[derive(Clone, Debug, PartialEq)]
pub enum Factor {
    Ident(Ident),
    Constant(Constant),
    /// Expr bound by parentheses
    Group(Box<Expression>),
}

/// Unary prefix applied to a factor
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Sign {
    Base,
    Not,
    Negate,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FactorA {
    pub sign: Sign,
    pub factor: Option<Factor>,
}

/// Right-recursive tail of a product, empty when no multiplicative operator follows
#[derive(Clone, Debug, PartialEq)]
pub enum Term {
    Empty,
    Mul {
        op: Option<MulOp>,
        factor: FactorA,
        rest: Box<Term>,
    },
}

#[derive(Clone, Debug, PartialEq)]
pub struct TermA {
    pub factor: FactorA,
    pub rest: Term,
}

/// Right-recursive tail of a sum, empty when no additive operator follows
#[derive(Clone, Debug, PartialEq)]
pub enum SimpleExpr {
    Empty,
    Add {
        op: Option<AddOp>,
        term: TermA,
        rest: Box<SimpleExpr>,
    },
}

#[derive(Clone, Debug, PartialEq)]
pub struct SimpleExprA {
    pub term: TermA,
    pub rest: SimpleExpr,
}

/// At most one relational operator per expression
#[derive(Clone, Debug, PartialEq)]
pub struct Expression {
    pub lhs: SimpleExprA,
    pub comparison: Option<(Option<RelOp>, SimpleExprA)>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Condition {
    pub expr: Expression,
}

impl Display for AddOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let op = match self {
            AddOp::Add => "+",
            AddOp::Sub => "-",
            AddOp::Or => "or",
        };
        write!(f, "{}", op)
    }
}

impl Display for MulOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let op = match self {
            MulOp::Mul => "*",
            MulOp::Div => "/",
            MulOp::And => "and",
        };
        write!(f, "{}", op)
    }
}

impl Display for RelOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let op = match self {
            RelOp::Equal => "=",
            RelOp::NotEqual => "<>",
            RelOp::Greater => ">",
            RelOp::Less => "<",
            RelOp::GreaterEqual => ">=",
            RelOp::LessEqual => "<=",
        };
        write!(f, "{}", op)
    }
}

impl Display for Constant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Constant::Int(n) => write!(f, "{}", n),
            Constant::Float(n) => write!(f, "{:?}", n),
            Constant::Char(c) => write!(f, "'{}'", c),
        }
    }
}

impl Display for Factor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Factor::Ident(id) => write!(f, "{}", id),
            Factor::Constant(constant) => write!(f, "{}", constant),
            Factor::Group(expr) => write!(f, "({})", expr),
        }
    }
}

impl Display for FactorA {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let factor = OrError(&self.factor);
        match self.sign {
            Sign::Base => write!(f, "{}", factor),
            Sign::Not => write!(f, "(not {})", factor),
            Sign::Negate => write!(f, "(-{})", factor),
        }
    }
}

// The tails are right-recursive, but the operators associate to the left, so
// both chains are folded left-to-right while rendering.

impl Display for TermA {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut acc = self.factor.to_string();
        let mut rest = &self.rest;
        while let Term::Mul {
            op,
            factor,
            rest: next,
        } = rest
        {
            acc = format!("({} {} {})", OrError(op), acc, factor);
            rest = &**next;
        }
        write!(f, "{}", acc)
    }
}

impl Display for SimpleExprA {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut acc = self.term.to_string();
        let mut rest = &self.rest;
        while let SimpleExpr::Add { op, term, rest: next } = rest {
            acc = format!("({} {} {})", OrError(op), acc, term);
            rest = &**next;
        }
        write!(f, "{}", acc)
    }
}

impl Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.comparison {
            Some((op, rhs)) => write!(f, "({} {} {})", OrError(op), self.lhs, rhs),
            None => write!(f, "{}", self.lhs),
        }
    }
}

impl Display for Condition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.expr)
    }
}
