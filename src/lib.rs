//! Syntax analysis for a small imperative language.
//!
//! Source text goes through [`lexer::Lexer`] and [`parser::parse`] into an
//! [`ast::Program`]. Syntax errors never stop a parse: they are collected and
//! the tree keeps `None` where a subtree could not be built.
pub mod ast;
pub mod lexer;
pub mod parser;
pub mod tokens;
