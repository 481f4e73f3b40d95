//! Recursive descent parser with panic mode error recovery.
//!
//! Every nonterminal has one `parse_*` method. A method that runs into a
//! token it cannot use reports it, skips ahead to its follow set and returns
//! `None`; callers keep building around the gap without reporting again.
mod decl;
mod expr;
mod stmt;

pub mod cursor;
pub mod follow;

use crate::ast::{Ident, Program};
use crate::lexer::Scanner;
use crate::tokens::{Literal, Position, Token, TokenKind, TokenKindSet};
use cursor::TokenCursor;
use thiserror::Error;
use tracing::{debug, trace};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SyntaxError {
    #[error("Invalid token at position {position}")]
    InvalidToken { position: Position },
    #[error("Unexpected token at position {position}")]
    UnexpectedToken { position: Position },
}

impl SyntaxError {
    pub fn position(&self) -> Position {
        match self {
            SyntaxError::InvalidToken { position } | SyntaxError::UnexpectedToken { position } => {
                *position
            }
        }
    }
}

/// Result of parsing one source unit
#[derive(Debug)]
pub struct ParseOutput {
    /// `None` only when not even the `routine` keyword was found
    pub program: Option<Program>,
    pub errors: Vec<SyntaxError>,
}

impl ParseOutput {
    pub fn has_error(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Parses a whole program from `scanner`
pub fn parse<S: Scanner>(scanner: S) -> ParseOutput {
    let mut parser = Parser::new(scanner);
    let program = parser.parse_program();
    ParseOutput {
        program,
        errors: parser.finish(),
    }
}

pub struct Parser<S> {
    cursor: TokenCursor<S>,
}

impl<S: Scanner> Parser<S> {
    pub fn new(scanner: S) -> Parser<S> {
        Parser {
            cursor: TokenCursor::new(scanner),
        }
    }

    /// True once any error, lexical or syntactic, has been reported
    pub fn has_error(&self) -> bool {
        self.cursor.has_error()
    }

    pub fn errors(&self) -> &[SyntaxError] {
        self.cursor.errors()
    }

    pub fn finish(self) -> Vec<SyntaxError> {
        self.cursor.into_errors()
    }

    /// Reports an unexpected token at the scanner's current position
    pub fn report_error(&mut self) {
        let position = self.cursor.position();
        self.cursor.report(SyntaxError::UnexpectedToken { position });
    }

    /// Skips tokens until one in `follow` (or EOF) is next, leaving it unconsumed.
    ///
    /// The token that caused the error is examined first, so if it already
    /// belongs to `follow` nothing is skipped.
    pub fn synchronize(&mut self, follow: TokenKindSet) {
        self.cursor.push_back();
        let mut skipped = 0usize;
        let mut token = self.cursor.next();
        while !follow.contains(token.kind) && token.kind != TokenKind::Eof {
            trace!(kind = %token.kind, position = %token.position, "skipping token");
            skipped += 1;
            token = self.cursor.next();
        }
        self.cursor.push_back();
        debug!(skipped, resume = %token.kind, "synchronized");
    }

    /// Reports, recovers on `follow` and yields the empty subtree
    fn fail<T>(&mut self, follow: TokenKindSet) -> Option<T> {
        self.report_error();
        self.synchronize(follow);
        None
    }

    /// Consumes the next token, telling whether it had the expected kind
    fn expect(&mut self, kind: TokenKind) -> bool {
        self.cursor.next().kind == kind
    }

    /// Kind of the next token, left unconsumed
    fn peek(&mut self) -> TokenKind {
        let kind = self.cursor.next().kind;
        self.cursor.push_back();
        kind
    }
}

/// Identifier node for a token already known to be an identifier
fn ident(token: Token) -> Ident {
    let name = match token.literal {
        Some(Literal::Identifier(name)) => name,
        Some(other) => other.to_string(),
        None => String::new(),
    };
    Ident::new(name, token.position)
}
