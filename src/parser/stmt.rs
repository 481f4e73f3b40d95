use super::{follow, ident, Parser};
use crate::ast::{
    AssignStmt, IfStmt, ReadStmt, RepeatStmt, Stmt, StmtList, StmtPrefix, StmtSuffix, WhileStmt,
    Writable, WriteStmt,
};
use crate::lexer::Scanner;
use crate::tokens::{Literal, TokenKind};

impl<S: Scanner> Parser<S> {
    /// stmt_list = stmt { ";" stmt }
    pub fn parse_stmt_list(&mut self) -> StmtList {
        let mut stmts = vec![self.parse_stmt()];
        while self.expect(TokenKind::Semicolon) {
            stmts.push(self.parse_stmt());
        }
        self.cursor.push_back();
        StmtList { stmts }
    }

    /// Picks the statement form from the next token alone
    pub fn parse_stmt(&mut self) -> Option<Stmt> {
        match self.peek() {
            TokenKind::Identifier => self.parse_assign_stmt().map(Stmt::Assign),
            TokenKind::Read => self.parse_read_stmt().map(Stmt::Read),
            TokenKind::Write => self.parse_write_stmt().map(Stmt::Write),
            TokenKind::If => self.parse_if_stmt().map(Stmt::If),
            TokenKind::While => self.parse_while_stmt().map(Stmt::While),
            TokenKind::Repeat => self.parse_repeat_stmt().map(Stmt::Repeat),
            _ => self.fail(follow::STMT),
        }
    }

    /// assign_stmt = identifier ":=" simple_expr_a
    pub fn parse_assign_stmt(&mut self) -> Option<AssignStmt> {
        let token = self.cursor.next();
        if token.kind != TokenKind::Identifier {
            return self.fail(follow::ASSIGN_STMT);
        }
        let target = ident(token);

        if !self.expect(TokenKind::Assign) {
            return self.fail(follow::ASSIGN_STMT);
        }

        Some(AssignStmt {
            target,
            value: self.parse_simple_expr_a(),
        })
    }

    /// if_stmt = "if" condition "then" stmt_list [ "else" stmt_list ] "end"
    pub fn parse_if_stmt(&mut self) -> Option<IfStmt> {
        if !self.expect(TokenKind::If) {
            return self.fail(follow::IF_STMT);
        }

        let condition = self.parse_condition();

        if !self.expect(TokenKind::Then) {
            return self.fail(follow::IF_STMT);
        }

        let then_branch = self.parse_stmt_list();

        match self.cursor.next().kind {
            TokenKind::End => Some(IfStmt {
                condition,
                then_branch,
                else_branch: None,
            }),
            TokenKind::Else => {
                let else_branch = self.parse_stmt_list();
                if !self.expect(TokenKind::End) {
                    return self.fail(follow::IF_STMT);
                }
                Some(IfStmt {
                    condition,
                    then_branch,
                    else_branch: Some(else_branch),
                })
            }
            _ => self.fail(follow::IF_STMT),
        }
    }

    /// stmt_prefix = "while" condition "do"
    pub fn parse_stmt_prefix(&mut self) -> Option<StmtPrefix> {
        if !self.expect(TokenKind::While) {
            return self.fail(follow::STMT_PREFIX);
        }

        let condition = self.parse_condition();

        if !self.expect(TokenKind::Do) {
            return self.fail(follow::STMT_PREFIX);
        }

        Some(StmtPrefix { condition })
    }

    /// while_stmt = stmt_prefix stmt_list "end"
    pub fn parse_while_stmt(&mut self) -> Option<WhileStmt> {
        let prefix = self.parse_stmt_prefix();
        let body = self.parse_stmt_list();

        if !self.expect(TokenKind::End) {
            return self.fail(follow::WHILE_STMT);
        }

        Some(WhileStmt { prefix, body })
    }

    /// stmt_suffix = "until" condition
    pub fn parse_stmt_suffix(&mut self) -> Option<StmtSuffix> {
        if !self.expect(TokenKind::Until) {
            return self.fail(follow::STMT_SUFFIX);
        }

        Some(StmtSuffix {
            condition: self.parse_condition(),
        })
    }

    /// repeat_stmt = "repeat" stmt_list stmt_suffix
    pub fn parse_repeat_stmt(&mut self) -> Option<RepeatStmt> {
        if !self.expect(TokenKind::Repeat) {
            return self.fail(follow::REPEAT_STMT);
        }

        let body = self.parse_stmt_list();
        let suffix = self.parse_stmt_suffix();

        Some(RepeatStmt { body, suffix })
    }

    /// read_stmt = "read" "(" identifier ")"
    pub fn parse_read_stmt(&mut self) -> Option<ReadStmt> {
        if !self.expect(TokenKind::Read) || !self.expect(TokenKind::LeftParen) {
            return self.fail(follow::READ_STMT);
        }

        let token = self.cursor.next();
        if token.kind != TokenKind::Identifier {
            return self.fail(follow::READ_STMT);
        }
        let target = ident(token);

        if !self.expect(TokenKind::RightParen) {
            return self.fail(follow::READ_STMT);
        }

        Some(ReadStmt { target })
    }

    /// write_stmt = "write" "(" writable ")"
    pub fn parse_write_stmt(&mut self) -> Option<WriteStmt> {
        if !self.expect(TokenKind::Write) || !self.expect(TokenKind::LeftParen) {
            return self.fail(follow::WRITE_STMT);
        }

        let write_stmt = WriteStmt {
            value: self.parse_writable(),
        };

        if !self.expect(TokenKind::RightParen) {
            // the argument is already built, keep the statement
            self.report_error();
            self.synchronize(follow::WRITE_STMT);
        }

        Some(write_stmt)
    }

    /// writable = string_literal | simple_expr_a
    pub fn parse_writable(&mut self) -> Option<Writable> {
        let token = self.cursor.next();
        match token.kind {
            TokenKind::StringConst => {
                let text = match token.literal {
                    Some(Literal::Str(text)) => text,
                    _ => String::new(),
                };
                Some(Writable::Str(text))
            }
            TokenKind::Identifier
            | TokenKind::LeftParen
            | TokenKind::Not
            | TokenKind::Minus
            | TokenKind::IntConst
            | TokenKind::FloatConst
            | TokenKind::CharConst => {
                self.cursor.push_back();
                Some(Writable::Expr(self.parse_simple_expr_a()))
            }
            _ => self.fail(follow::WRITABLE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::Lexer;
    use crate::parser::SyntaxError;
    use crate::tokens::Position;

    fn stmt_list(source: &str) -> (StmtList, Vec<SyntaxError>) {
        let mut parser = Parser::new(Lexer::new(source));
        let list = parser.parse_stmt_list();
        (list, parser.finish())
    }

    #[test]
    fn test_if_else() {
        let (list, errors) = stmt_list("if x > 0 then write(x) else write('n'); read(x) end");
        assert!(errors.is_empty());
        assert_eq!(list.stmts.len(), 1);
        match &list.stmts[0] {
            Some(Stmt::If(if_stmt)) => {
                assert_eq!(if_stmt.condition.to_string(), "(> x 0)");
                assert_eq!(if_stmt.then_branch.stmts.len(), 1);
                assert_eq!(if_stmt.else_branch.as_ref().map(|list| list.stmts.len()), Some(2));
            }
            other => panic!("expected if statement, found {:?}", other),
        }
    }

    #[test]
    fn test_while_loop() {
        let (list, errors) = stmt_list("while i < 10 do i := i + 1; write(i) end");
        assert!(errors.is_empty());
        match &list.stmts[0] {
            Some(Stmt::While(while_stmt)) => {
                let prefix = while_stmt.prefix.as_ref().unwrap();
                assert_eq!(prefix.condition.to_string(), "(< i 10)");
                assert_eq!(while_stmt.body.stmts.len(), 2);
            }
            other => panic!("expected while statement, found {:?}", other),
        }
    }

    #[test]
    fn test_repeat_checks_condition_after_body() {
        let (list, errors) = stmt_list("repeat read(c); n := n - 1 until n = 0 or c = 'q'");
        assert!(errors.is_empty());
        match &list.stmts[0] {
            Some(Stmt::Repeat(repeat)) => {
                assert_eq!(repeat.body.stmts.len(), 2);
                let suffix = repeat.suffix.as_ref().unwrap();
                assert_eq!(suffix.condition.to_string(), "(= n (or 0 c))");
            }
            other => panic!("expected repeat statement, found {:?}", other),
        }
        // `= 'q'` is a second comparison and is left unparsed
        assert_eq!(list.stmts.len(), 1);
    }

    #[test]
    fn test_nested_rendering() {
        let (list, errors) =
            stmt_list("while a do if b then x := 1 else repeat y := 2 until c end end");
        assert!(errors.is_empty());
        let expected = "while a do
    if b then
        x := 1
    else
        repeat
            y := 2
        until c
    end
end";
        assert_eq!(list.to_string(), expected);
    }

    #[test]
    fn test_empty_statement_is_isolated() {
        let (list, errors) = stmt_list("x := 1; ; y := 2");
        assert_eq!(errors.len(), 1);
        assert_eq!(list.stmts.len(), 3);
        assert!(list.stmts[0].is_some());
        assert!(list.stmts[1].is_none());
        assert!(list.stmts[2].is_some());
    }

    #[test]
    fn test_if_without_end_or_else() {
        let (list, errors) = stmt_list("if a then x := 1 until");
        assert_eq!(
            errors,
            [SyntaxError::UnexpectedToken {
                position: Position::new(1, 18)
            }]
        );
        assert_eq!(list.stmts, [None]);
    }

    #[test]
    fn test_if_recovery_leaves_end_for_caller() {
        let mut parser = Parser::new(Lexer::new("if a x := 1 end"));
        assert_eq!(parser.parse_if_stmt(), None);
        assert_eq!(parser.cursor.next().kind, TokenKind::End);
        assert_eq!(parser.errors().len(), 1);
    }

    #[test]
    fn test_read_missing_paren() {
        let (list, errors) = stmt_list("read(x; write(x)");
        assert_eq!(errors.len(), 1);
        assert_eq!(list.stmts.len(), 2);
        assert!(list.stmts[0].is_none());
        assert!(matches!(list.stmts[1], Some(Stmt::Write(_))));
    }

    #[test]
    fn test_write_missing_paren_keeps_statement() {
        let (list, errors) = stmt_list(r#"write("done" ; x := 1"#);
        assert_eq!(errors.len(), 1);
        assert_eq!(list.stmts.len(), 2);
        match &list.stmts[0] {
            Some(stmt) => assert_eq!(stmt.to_string(), r#"write("done")"#),
            None => panic!("write statement should survive"),
        }
    }

    #[test]
    fn test_write_expression() {
        let (list, errors) = stmt_list("write(-a * (b + 1))");
        assert!(errors.is_empty());
        assert_eq!(list.to_string(), "write((* (-a) ((+ b 1))))");
    }

    #[test]
    fn test_bad_writable() {
        let mut parser = Parser::new(Lexer::new("write(:=)"));
        let write = parser.parse_write_stmt();
        assert_eq!(write, Some(WriteStmt { value: None }));
        assert_eq!(parser.errors().len(), 1);
        assert_eq!(parser.cursor.next().kind, TokenKind::Eof);
    }

    #[test]
    fn test_assignment_rejects_comparison() {
        let (list, errors) = stmt_list("x := a < b");
        assert_eq!(list.stmts.len(), 1);
        // the statement list stops in front of `<`, it is not a separator
        assert!(errors.is_empty());
        assert_eq!(list.to_string(), "x := a");
    }
}
