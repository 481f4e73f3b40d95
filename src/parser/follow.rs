//! Follow sets, one per nonterminal.
//!
//! Each set holds the terminals that may appear right after its nonterminal
//! anywhere in the grammar, plus `Eof`. A production that hits a syntax error
//! skips input until the next token is in its own set.
use crate::tokens::{
    TokenKind::{self, *},
    TokenKindSet,
};

const fn set(kinds: &[TokenKind]) -> TokenKindSet {
    TokenKindSet::from_kinds(kinds)
}

const REL_OPS: TokenKindSet = set(&[Equal, NotEqual, Greater, Less, GreaterEqual, LessEqual]);

/// Everything that can start an operand: FIRST(simple_expr_a)
const OPERAND_START: TokenKindSet = set(&[
    Identifier, IntConst, FloatConst, CharConst, LeftParen, Not, Minus, Eof,
]);

pub const PROGRAM: TokenKindSet = set(&[Eof]);
pub const BODY: TokenKindSet = set(&[Eof]);
pub const DECL_LIST: TokenKindSet = set(&[Begin, Eof]);
pub const DECL: TokenKindSet = set(&[Semicolon, Eof]);
pub const TYPE: TokenKindSet = set(&[Identifier, Eof]);
pub const IDENT_LIST: TokenKindSet = set(&[Semicolon, Eof]);

pub const STMT_LIST: TokenKindSet = set(&[End, Else, Until, Eof]);
pub const STMT: TokenKindSet = STMT_LIST.union(set(&[Semicolon]));
pub const ASSIGN_STMT: TokenKindSet = STMT;
pub const IF_STMT: TokenKindSet = STMT;
pub const WHILE_STMT: TokenKindSet = STMT;
pub const REPEAT_STMT: TokenKindSet = STMT;
pub const READ_STMT: TokenKindSet = STMT;
pub const WRITE_STMT: TokenKindSet = STMT;
pub const STMT_SUFFIX: TokenKindSet = STMT;
/// FIRST(stmt_list)
pub const STMT_PREFIX: TokenKindSet = set(&[Identifier, If, While, Repeat, Read, Write, Eof]);
pub const WRITABLE: TokenKindSet = set(&[RightParen, Eof]);

pub const CONDITION: TokenKindSet = STMT.union(set(&[Then, Do]));
pub const EXPRESSION: TokenKindSet = CONDITION.union(set(&[RightParen]));
pub const SIMPLE_EXPR_A: TokenKindSet = EXPRESSION.union(REL_OPS);
pub const SIMPLE_EXPR: TokenKindSet = SIMPLE_EXPR_A;
pub const TERM_A: TokenKindSet = SIMPLE_EXPR_A.union(set(&[Plus, Minus, Or]));
pub const TERM: TokenKindSet = TERM_A;
pub const FACTOR_A: TokenKindSet = TERM_A.union(set(&[Star, Slash, And]));
pub const FACTOR: TokenKindSet = FACTOR_A;
pub const CONSTANT: TokenKindSet = FACTOR_A;

pub const REL_OP: TokenKindSet = OPERAND_START;
pub const ADD_OP: TokenKindSet = OPERAND_START;
pub const MUL_OP: TokenKindSet = OPERAND_START;

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [TokenKindSet; 30] = [
        PROGRAM,
        BODY,
        DECL_LIST,
        DECL,
        TYPE,
        IDENT_LIST,
        STMT_LIST,
        STMT,
        ASSIGN_STMT,
        IF_STMT,
        WHILE_STMT,
        REPEAT_STMT,
        READ_STMT,
        WRITE_STMT,
        STMT_SUFFIX,
        STMT_PREFIX,
        WRITABLE,
        CONDITION,
        EXPRESSION,
        SIMPLE_EXPR_A,
        SIMPLE_EXPR,
        TERM_A,
        TERM,
        FACTOR_A,
        FACTOR,
        CONSTANT,
        REL_OP,
        ADD_OP,
        MUL_OP,
        OPERAND_START,
    ];

    #[test]
    fn test_every_set_stops_at_eof() {
        for follow in ALL.iter() {
            assert!(follow.contains(Eof));
        }
    }

    #[test]
    fn test_expression_sets_nest() {
        // a factor can end wherever a term, sum or comparison can
        assert!(FACTOR.contains(Star));
        assert!(FACTOR.contains(Plus));
        assert!(FACTOR.contains(LessEqual));
        assert!(FACTOR.contains(RightParen));
        assert!(FACTOR.contains(Then));
        assert!(!TERM.contains(Star));
        assert!(!SIMPLE_EXPR.contains(Plus));
        assert!(!EXPRESSION.contains(Equal));
    }

    #[test]
    fn test_statement_sets() {
        for kind in [Semicolon, End, Else, Until].iter() {
            assert!(STMT.contains(*kind));
        }
        assert!(!STMT_LIST.contains(Semicolon));
        assert!(STMT_PREFIX.contains(Identifier));
        assert!(!STMT_PREFIX.contains(Do));
    }
}
