use crate::tokens::{reserved_to_tokenkind, Literal, Position, Token, TokenKind};
use std::iter::Peekable;
use std::str::CharIndices;

/// Pull-based source of tokens for the parser.
///
/// Once the input is exhausted a scanner must keep handing out `Eof`
/// tokens, never panic or block.
pub trait Scanner {
    /// Produces the next token. Lexical faults come back as `TokenKind::Invalid`.
    fn next_token(&mut self) -> Token;
    /// Position of the token most recently produced
    fn position(&self) -> Position;
}

/// Scans through source code and produces tokens
pub struct Lexer<'input> {
    input: Peekable<CharIndices<'input>>,
    input_str: &'input str,
    line: usize,
    /// Byte offset where the current line starts
    line_start: usize,
    position: Position,
}

impl<'input> Lexer<'input> {
    pub fn new(input_str: &'input str) -> Lexer<'input> {
        Lexer {
            input: input_str.char_indices().peekable(),
            input_str,
            line: 1,
            line_start: 0,
            position: Position::new(1, 1),
        }
    }

    /// Drains the lexer, EOF token included
    pub fn tokenize(mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        loop {
            let token = self.scan_token();
            let done = token.kind == TokenKind::Eof;
            tokens.push(token);
            if done {
                break tokens;
            }
        }
    }

    pub fn scan_token(&mut self) -> Token {
        self.skip_whitespace();

        let (idx, c) = match self.input.next() {
            Some(next) => next,
            None => {
                self.position = self.position_at(self.input_str.len());
                return Token::new(TokenKind::Eof, self.position);
            }
        };
        self.position = self.position_at(idx);

        match c {
            // Single char tokens
            '(' => self.make_token(TokenKind::LeftParen),
            ')' => self.make_token(TokenKind::RightParen),
            ',' => self.make_token(TokenKind::Comma),
            ';' => self.make_token(TokenKind::Semicolon),
            '+' => self.make_token(TokenKind::Plus),
            '-' => self.make_token(TokenKind::Minus),
            '*' => self.make_token(TokenKind::Star),
            '/' => self.make_token(TokenKind::Slash),
            '=' => self.make_token(TokenKind::Equal),
            // Two char tokens
            ':' => {
                if self.input.next_if(|(_, c)| *c == '=').is_some() {
                    self.make_token(TokenKind::Assign)
                } else {
                    self.make_token(TokenKind::Invalid)
                }
            }
            '<' => {
                if self.input.next_if(|(_, c)| *c == '>').is_some() {
                    self.make_token(TokenKind::NotEqual)
                } else if self.input.next_if(|(_, c)| *c == '=').is_some() {
                    self.make_token(TokenKind::LessEqual)
                } else {
                    self.make_token(TokenKind::Less)
                }
            }
            '>' => {
                if self.input.next_if(|(_, c)| *c == '=').is_some() {
                    self.make_token(TokenKind::GreaterEqual)
                } else {
                    self.make_token(TokenKind::Greater)
                }
            }
            '"' => self.string(idx),
            '\'' => self.character(),
            '0'..='9' => self.number(idx),
            'a'..='z' | 'A'..='Z' | '_' => self.identifier(idx),
            _ => self.make_token(TokenKind::Invalid),
        }
    }

    fn skip_whitespace(&mut self) {
        while let Some((idx, c)) = self.input.peek().copied() {
            match c {
                ' ' | '\r' | '\t' => {
                    self.input.next();
                }
                '\n' => {
                    self.input.next();
                    self.line += 1;
                    self.line_start = idx + 1;
                }
                '/' => {
                    if let Some((_, '/')) = self.peek_next() {
                        // comment runs to the end of the line, newline left for the loop
                        while self.input.next_if(|(_, c)| *c != '\n').is_some() {}
                    } else {
                        break;
                    }
                }
                _ => break,
            }
        }
    }

    fn peek_next(&self) -> Option<(usize, char)> {
        let mut peeker = self.input.clone();
        peeker.next();
        peeker.peek().copied()
    }

    fn position_at(&self, idx: usize) -> Position {
        Position::new(self.line, idx - self.line_start + 1)
    }

    /// Byte offset of the next unread char
    fn offset(&mut self) -> usize {
        match self.input.peek() {
            Some((idx, _)) => *idx,
            None => self.input_str.len(),
        }
    }

    fn string(&mut self, start: usize) -> Token {
        while let Some((idx, c)) = self.input.peek().copied() {
            match c {
                '"' => {
                    self.input.next();
                    let text = &self.input_str[start + 1..idx];
                    return self.make_literal(TokenKind::StringConst, Literal::Str(text.to_string()));
                }
                // strings cannot span lines
                '\n' => break,
                _ => {
                    self.input.next();
                }
            }
        }
        self.make_token(TokenKind::Invalid)
    }

    fn character(&mut self) -> Token {
        let c = match self.input.next_if(|(_, c)| *c != '\n') {
            Some((_, '\'')) | None => return self.make_token(TokenKind::Invalid),
            Some((_, c)) => c,
        };
        if self.input.next_if(|(_, c)| *c == '\'').is_some() {
            self.make_literal(TokenKind::CharConst, Literal::Char(c))
        } else {
            self.make_token(TokenKind::Invalid)
        }
    }

    fn number(&mut self, start: usize) -> Token {
        while self.input.next_if(|(_, c)| c.is_ascii_digit()).is_some() {}

        if self.input.next_if(|(_, c)| *c == '.').is_none() {
            let end = self.offset();
            let lexeme = &self.input_str[start..end];
            return match lexeme.parse::<i64>() {
                Ok(n) => self.make_literal(TokenKind::IntConst, Literal::Int(n)),
                Err(_) => self.make_token(TokenKind::Invalid),
            };
        }

        // fractional part needs at least one digit
        if self.input.next_if(|(_, c)| c.is_ascii_digit()).is_none() {
            return self.make_token(TokenKind::Invalid);
        }
        while self.input.next_if(|(_, c)| c.is_ascii_digit()).is_some() {}

        let end = self.offset();
        let lexeme = &self.input_str[start..end];
        match lexeme.parse::<f64>() {
            Ok(n) => self.make_literal(TokenKind::FloatConst, Literal::Float(n)),
            Err(_) => self.make_token(TokenKind::Invalid),
        }
    }

    fn identifier(&mut self, start: usize) -> Token {
        while self
            .input
            .next_if(|(_, c)| c.is_ascii_alphanumeric() || *c == '_')
            .is_some()
        {}
        let end = self.offset();
        let lexeme = &self.input_str[start..end];
        // check for keyword
        match reserved_to_tokenkind(lexeme) {
            Some(keyword) => self.make_token(keyword),
            None => self.make_literal(TokenKind::Identifier, Literal::Identifier(lexeme.to_string())),
        }
    }

    fn make_token(&self, kind: TokenKind) -> Token {
        Token::new(kind, self.position)
    }

    fn make_literal(&self, kind: TokenKind, literal: Literal) -> Token {
        Token::with_literal(kind, literal, self.position)
    }
}

impl Scanner for Lexer<'_> {
    fn next_token(&mut self) -> Token {
        self.scan_token()
    }

    fn position(&self) -> Position {
        self.position
    }
}

/// Replays tokens that were scanned ahead of time.
#[derive(Debug)]
pub struct TokenStream {
    tokens: std::vec::IntoIter<Token>,
    position: Position,
}

impl TokenStream {
    pub fn new(tokens: Vec<Token>) -> TokenStream {
        TokenStream {
            tokens: tokens.into_iter(),
            position: Position::default(),
        }
    }
}

impl From<Vec<Token>> for TokenStream {
    fn from(tokens: Vec<Token>) -> TokenStream {
        TokenStream::new(tokens)
    }
}

impl Scanner for TokenStream {
    fn next_token(&mut self) -> Token {
        match self.tokens.next() {
            Some(token) => {
                self.position = token.position;
                token
            }
            None => Token::new(TokenKind::Eof, self.position),
        }
    }

    fn position(&self) -> Position {
        self.position
    }
}
