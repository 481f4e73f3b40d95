//! Concrete syntax tree built by the parser.
//!
//! A child that is `None` marks a subtree that failed to parse. The error has
//! already been reported by the time the tree is built.
pub mod expr;
pub mod program;
pub mod stmt;

pub use expr::{
    AddOp, Condition, Constant, Expression, Factor, FactorA, MulOp, RelOp, Sign, SimpleExpr,
    SimpleExprA, Term, TermA,
};
pub use program::{Body, Decl, DeclList, DeclSection, Ident, IdentList, Program, Type};
pub use stmt::{
    AssignStmt, IfStmt, ReadStmt, RepeatStmt, Stmt, StmtList, StmtPrefix, StmtSuffix, WhileStmt,
    WriteStmt, Writable,
};

use std::fmt::Display;

/// Displays a possibly missing node, `<error>` standing in for the gap
pub(crate) struct OrError<'a, T>(pub &'a Option<T>);

impl<T: Display> Display for OrError<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            Some(node) => write!(f, "{}", node),
            None => write!(f, "<error>"),
        }
    }
}
