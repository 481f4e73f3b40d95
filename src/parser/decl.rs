use super::{follow, ident, Parser};
use crate::ast::{Body, Decl, DeclList, DeclSection, IdentList, Program, Type};
use crate::lexer::Scanner;
use crate::tokens::TokenKind;
use tracing::debug;

impl<S: Scanner> Parser<S> {
    /// program = "routine" body
    ///
    /// Whatever follows the body is reported once and skipped, so the whole
    /// input is always consumed.
    pub fn parse_program(&mut self) -> Option<Program> {
        if !self.expect(TokenKind::Routine) {
            return self.fail(follow::PROGRAM);
        }

        let body = self.parse_body();

        if self.peek() != TokenKind::Eof {
            debug!("tokens left after the program body");
            self.report_error();
            self.synchronize(follow::PROGRAM);
        }

        Some(Program { body })
    }

    /// body = [ decl_list ] "begin" stmt_list "end"
    pub fn parse_body(&mut self) -> Option<Body> {
        let decl_section = match self.peek() {
            TokenKind::Begin => DeclSection::Omitted,
            _ => DeclSection::Parsed(self.parse_decl_list()),
        };

        if !self.expect(TokenKind::Begin) {
            return self.fail(follow::BODY);
        }

        let stmt_list = self.parse_stmt_list();

        if !self.expect(TokenKind::End) {
            return self.fail(follow::BODY);
        }

        Some(Body {
            decl_section,
            stmt_list,
        })
    }

    /// decl_list = "declare" decl ";" { decl ";" }
    pub fn parse_decl_list(&mut self) -> Option<DeclList> {
        if !self.expect(TokenKind::Declare) {
            return self.fail(follow::DECL_LIST);
        }

        let mut decls = vec![self.parse_decl()];
        if !self.expect(TokenKind::Semicolon) {
            return self.fail(follow::DECL_LIST);
        }

        while let TokenKind::Int | TokenKind::Float | TokenKind::Char = self.peek() {
            decls.push(self.parse_decl());
            if !self.expect(TokenKind::Semicolon) {
                return self.fail(follow::DECL_LIST);
            }
        }

        Some(DeclList { decls })
    }

    /// decl = type ident_list
    pub fn parse_decl(&mut self) -> Decl {
        let ty = self.parse_type();
        let idents = self.parse_ident_list();
        Decl { ty, idents }
    }

    pub fn parse_type(&mut self) -> Option<Type> {
        let ty = match self.cursor.next().kind {
            TokenKind::Int => Type::Int,
            TokenKind::Float => Type::Float,
            TokenKind::Char => Type::Char,
            _ => return self.fail(follow::TYPE),
        };
        Some(ty)
    }

    /// ident_list = identifier { "," identifier }
    pub fn parse_ident_list(&mut self) -> Option<IdentList> {
        let token = self.cursor.next();
        if token.kind != TokenKind::Identifier {
            return self.fail(follow::IDENT_LIST);
        }
        let mut idents = vec![ident(token)];

        while self.expect(TokenKind::Comma) {
            let token = self.cursor.next();
            if token.kind != TokenKind::Identifier {
                // a comma promises another name
                return self.fail(follow::IDENT_LIST);
            }
            idents.push(ident(token));
        }
        self.cursor.push_back();

        Some(IdentList { idents })
    }
}
