use std::fmt::Display;

/// Every terminal the scanner can produce.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Keywords.
    Routine,
    Declare,
    Begin,
    End,
    Int,
    Float,
    Char,
    If,
    Then,
    Else,
    While,
    Do,
    Repeat,
    Until,
    Read,
    Write,
    Not,
    And,
    Or,

    // Punctuation.
    Assign,
    Semicolon,
    Comma,
    LeftParen,
    RightParen,

    // Operators.
    Plus,
    Minus,
    Star,
    Slash,
    Equal,
    NotEqual,
    Greater,
    Less,
    GreaterEqual,
    LessEqual,

    // Literals.
    Identifier,
    IntConst,
    FloatConst,
    CharConst,
    StringConst,

    /// A lexeme the scanner could not classify
    Invalid,
    // End of file
    Eof,
}

impl TokenKind {
    fn bit(self) -> u64 {
        1 << (self as u64)
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            TokenKind::Routine => "routine",
            TokenKind::Declare => "declare",
            TokenKind::Begin => "begin",
            TokenKind::End => "end",
            TokenKind::Int => "int",
            TokenKind::Float => "float",
            TokenKind::Char => "char",
            TokenKind::If => "if",
            TokenKind::Then => "then",
            TokenKind::Else => "else",
            TokenKind::While => "while",
            TokenKind::Do => "do",
            TokenKind::Repeat => "repeat",
            TokenKind::Until => "until",
            TokenKind::Read => "read",
            TokenKind::Write => "write",
            TokenKind::Not => "not",
            TokenKind::And => "and",
            TokenKind::Or => "or",
            TokenKind::Assign => ":=",
            TokenKind::Semicolon => ";",
            TokenKind::Comma => ",",
            TokenKind::LeftParen => "(",
            TokenKind::RightParen => ")",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Star => "*",
            TokenKind::Slash => "/",
            TokenKind::Equal => "=",
            TokenKind::NotEqual => "<>",
            TokenKind::Greater => ">",
            TokenKind::Less => "<",
            TokenKind::GreaterEqual => ">=",
            TokenKind::LessEqual => "<=",
            TokenKind::Identifier => "identifier",
            TokenKind::IntConst => "integer constant",
            TokenKind::FloatConst => "float constant",
            TokenKind::CharConst => "char constant",
            TokenKind::StringConst => "string literal",
            TokenKind::Invalid => "invalid token",
            TokenKind::Eof => "EOF",
        };
        f.pad(s)
    }
}

/// An immutable set of token kinds, cheap enough to live in `const` items.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TokenKindSet(u64);

impl TokenKindSet {
    pub const EMPTY: TokenKindSet = TokenKindSet(0);

    pub const fn from_kinds(kinds: &[TokenKind]) -> TokenKindSet {
        let mut bits = 0u64;
        let mut i = 0;
        while i < kinds.len() {
            bits |= 1 << (kinds[i] as u64);
            i += 1;
        }
        TokenKindSet(bits)
    }

    pub const fn union(self, other: TokenKindSet) -> TokenKindSet {
        TokenKindSet(self.0 | other.0)
    }

    pub fn contains(&self, kind: TokenKind) -> bool {
        self.0 & kind.bit() != 0
    }
}

/// Value carried by identifier and literal tokens
#[derive(Clone, Debug, PartialEq)]
pub enum Literal {
    Identifier(String),
    Int(i64),
    Float(f64),
    Char(char),
    Str(String),
}

impl Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Literal::Identifier(id) => write!(f, "{}", id),
            Literal::Int(n) => write!(f, "{}", n),
            Literal::Float(n) => write!(f, "{:?}", n),
            Literal::Char(c) => write!(f, "'{}'", c),
            Literal::Str(s) => write!(f, "\"{}\"", s),
        }
    }
}

/// Location in the source, both components 1-based.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Position {
        Position { line, column }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub literal: Option<Literal>,
    pub position: Position,
}

impl Token {
    pub fn new(kind: TokenKind, position: Position) -> Token {
        Token {
            kind,
            literal: None,
            position,
        }
    }

    pub fn with_literal(kind: TokenKind, literal: Literal, position: Position) -> Token {
        Token {
            kind,
            literal: Some(literal),
            position,
        }
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let at = self.position.to_string();
        match &self.literal {
            Some(literal) => write!(f, "{:<8} {:<16} {}", at, self.kind, literal),
            None => write!(f, "{:<8} {}", at, self.kind),
        }
    }
}

pub fn reserved_to_tokenkind(keyword: &str) -> Option<TokenKind> {
    Some(match keyword {
        "routine" => TokenKind::Routine,
        "declare" => TokenKind::Declare,
        "begin" => TokenKind::Begin,
        "end" => TokenKind::End,
        "int" => TokenKind::Int,
        "float" => TokenKind::Float,
        "char" => TokenKind::Char,
        "if" => TokenKind::If,
        "then" => TokenKind::Then,
        "else" => TokenKind::Else,
        "while" => TokenKind::While,
        "do" => TokenKind::Do,
        "repeat" => TokenKind::Repeat,
        "until" => TokenKind::Until,
        "read" => TokenKind::Read,
        "write" => TokenKind::Write,
        "not" => TokenKind::Not,
        "and" => TokenKind::And,
        "or" => TokenKind::Or,
        _ => return None,
    })
}
