use super::SyntaxError;
use crate::lexer::Scanner;
use crate::tokens::{Position, Token, TokenKind};
use tracing::{debug, trace};

/// Wraps a scanner with a single token of pushback.
///
/// Invalid tokens are reported and skipped here, so nothing above the
/// cursor ever sees one.
pub struct TokenCursor<S> {
    scanner: S,
    /// Token most recently handed out
    current: Option<Token>,
    /// Re-deliver `current` on the next call to `next`
    pushed_back: bool,
    /// Diagnostics in the order they were reported
    errors: Vec<SyntaxError>,
}

impl<S: Scanner> TokenCursor<S> {
    pub fn new(scanner: S) -> TokenCursor<S> {
        TokenCursor {
            scanner,
            current: None,
            pushed_back: false,
            errors: Vec::new(),
        }
    }

    /// Gets next token, either the pushed back one or a fresh one from the scanner
    pub fn next(&mut self) -> Token {
        if self.pushed_back {
            self.pushed_back = false;
            if let Some(token) = &self.current {
                trace!(kind = %token.kind, "redelivering pushed back token");
                return token.clone();
            }
        }

        let mut token = self.scanner.next_token();
        while token.kind == TokenKind::Invalid {
            self.report(SyntaxError::InvalidToken {
                position: self.scanner.position(),
            });
            token = self.scanner.next_token();
        }
        self.current = Some(token.clone());
        token
    }

    /// Hands the last token out again on the next `next`.
    /// Only one slot exists, pushing back twice in a row is the same as once.
    pub fn push_back(&mut self) {
        self.pushed_back = true;
    }

    pub fn position(&self) -> Position {
        self.scanner.position()
    }

    pub fn report(&mut self, error: SyntaxError) {
        debug!("{}", error);
        self.errors.push(error);
    }

    pub fn has_error(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn errors(&self) -> &[SyntaxError] {
        &self.errors
    }

    pub fn into_errors(self) -> Vec<SyntaxError> {
        self.errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::{Lexer, TokenStream};
    use std::cell::Cell;
    use std::rc::Rc;

    /// Counts how many tokens were pulled from the inner scanner
    struct Counting {
        inner: TokenStream,
        pulls: Rc<Cell<usize>>,
    }

    impl Scanner for Counting {
        fn next_token(&mut self) -> Token {
            self.pulls.set(self.pulls.get() + 1);
            self.inner.next_token()
        }

        fn position(&self) -> Position {
            self.inner.position()
        }
    }

    fn counting(source: &str) -> (TokenCursor<Counting>, Rc<Cell<usize>>) {
        let pulls = Rc::new(Cell::new(0));
        let scanner = Counting {
            inner: TokenStream::new(Lexer::new(source).tokenize()),
            pulls: pulls.clone(),
        };
        (TokenCursor::new(scanner), pulls)
    }

    #[test]
    fn test_push_back_round_trip() {
        let (mut cursor, pulls) = counting("routine begin");
        let first = cursor.next();
        assert_eq!(pulls.get(), 1);
        cursor.push_back();
        let again = cursor.next();
        assert_eq!(first, again);
        assert_eq!(pulls.get(), 1);
        assert_eq!(cursor.next().kind, TokenKind::Begin);
        assert_eq!(pulls.get(), 2);
    }

    #[test]
    fn test_double_push_back_keeps_one_slot() {
        let (mut cursor, _) = counting("x y");
        cursor.next();
        let y = cursor.next();
        cursor.push_back();
        cursor.push_back();
        assert_eq!(cursor.next(), y);
        assert_eq!(cursor.next().kind, TokenKind::Eof);
    }

    #[test]
    fn test_invalid_tokens_are_reported_and_skipped() {
        let (mut cursor, pulls) = counting("x $ # y");
        assert_eq!(cursor.next().kind, TokenKind::Identifier);
        let y = cursor.next();
        assert_eq!(y.kind, TokenKind::Identifier);
        assert_eq!(pulls.get(), 4);
        assert_eq!(
            cursor.errors(),
            [
                SyntaxError::InvalidToken {
                    position: Position::new(1, 3)
                },
                SyntaxError::InvalidToken {
                    position: Position::new(1, 5)
                },
            ]
        );
        assert!(cursor.has_error());
    }

    #[test]
    fn test_only_invalid_tokens_reach_eof() {
        let (mut cursor, _) = counting("$ $ $");
        assert_eq!(cursor.next().kind, TokenKind::Eof);
        assert_eq!(cursor.into_errors().len(), 3);
    }

    #[test]
    fn test_push_back_before_any_token_fetches() {
        let (mut cursor, pulls) = counting("x");
        cursor.push_back();
        assert_eq!(cursor.next().kind, TokenKind::Identifier);
        assert_eq!(pulls.get(), 1);
        assert!(!cursor.has_error());
    }
}
