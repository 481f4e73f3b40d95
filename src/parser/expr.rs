use super::{follow, ident, Parser};
use crate::ast::{
    AddOp, Condition, Constant, Expression, Factor, FactorA, MulOp, RelOp, Sign, SimpleExpr,
    SimpleExprA, Term, TermA,
};
use crate::lexer::Scanner;
use crate::tokens::{Literal, TokenKind};

impl<S: Scanner> Parser<S> {
    /// constant = int_const | float_const | char_const
    pub fn parse_constant(&mut self) -> Option<Constant> {
        let token = self.cursor.next();
        let constant = match (token.kind, token.literal) {
            (TokenKind::IntConst, Some(Literal::Int(n))) => Constant::Int(n),
            (TokenKind::FloatConst, Some(Literal::Float(n))) => Constant::Float(n),
            (TokenKind::CharConst, Some(Literal::Char(c))) => Constant::Char(c),
            _ => return self.fail(follow::CONSTANT),
        };
        Some(constant)
    }

    pub fn parse_mul_op(&mut self) -> Option<MulOp> {
        let op = match self.cursor.next().kind {
            TokenKind::Star => MulOp::Mul,
            TokenKind::Slash => MulOp::Div,
            TokenKind::And => MulOp::And,
            _ => return self.fail(follow::MUL_OP),
        };
        Some(op)
    }

    pub fn parse_add_op(&mut self) -> Option<AddOp> {
        let op = match self.cursor.next().kind {
            TokenKind::Plus => AddOp::Add,
            TokenKind::Minus => AddOp::Sub,
            TokenKind::Or => AddOp::Or,
            _ => return self.fail(follow::ADD_OP),
        };
        Some(op)
    }

    pub fn parse_rel_op(&mut self) -> Option<RelOp> {
        let op = match self.cursor.next().kind {
            TokenKind::Equal => RelOp::Equal,
            TokenKind::NotEqual => RelOp::NotEqual,
            TokenKind::Greater => RelOp::Greater,
            TokenKind::Less => RelOp::Less,
            TokenKind::GreaterEqual => RelOp::GreaterEqual,
            TokenKind::LessEqual => RelOp::LessEqual,
            _ => return self.fail(follow::REL_OP),
        };
        Some(op)
    }

    /// factor = identifier | constant | "(" expression ")"
    pub fn parse_factor(&mut self) -> Option<Factor> {
        let token = self.cursor.next();
        match token.kind {
            TokenKind::Identifier => Some(Factor::Ident(ident(token))),
            TokenKind::IntConst | TokenKind::FloatConst | TokenKind::CharConst => {
                self.cursor.push_back();
                self.parse_constant().map(Factor::Constant)
            }
            TokenKind::LeftParen => {
                let expr = self.parse_expression();
                if !self.expect(TokenKind::RightParen) {
                    // the inner expression is already built, keep it
                    self.report_error();
                    self.synchronize(follow::FACTOR);
                }
                Some(Factor::Group(Box::new(expr)))
            }
            _ => self.fail(follow::FACTOR),
        }
    }

    /// factor_a = [ "not" | "-" ] factor
    pub fn parse_factor_a(&mut self) -> FactorA {
        let sign = match self.cursor.next().kind {
            TokenKind::Not => Sign::Not,
            TokenKind::Minus => Sign::Negate,
            _ => {
                self.cursor.push_back();
                Sign::Base
            }
        };
        FactorA {
            sign,
            factor: self.parse_factor(),
        }
    }

    /// term = mul_op factor_a term | ε
    pub fn parse_term(&mut self) -> Term {
        match self.cursor.next().kind {
            TokenKind::Star | TokenKind::Slash | TokenKind::And => {
                self.cursor.push_back();
                let op = self.parse_mul_op();
                let factor = self.parse_factor_a();
                let rest = self.parse_term();
                Term::Mul {
                    op,
                    factor,
                    rest: Box::new(rest),
                }
            }
            _ => {
                self.cursor.push_back();
                Term::Empty
            }
        }
    }

    /// term_a = factor_a term
    pub fn parse_term_a(&mut self) -> TermA {
        let factor = self.parse_factor_a();
        let rest = self.parse_term();
        TermA { factor, rest }
    }

    /// simple_expr = add_op term_a simple_expr | ε
    pub fn parse_simple_expr(&mut self) -> SimpleExpr {
        match self.cursor.next().kind {
            TokenKind::Plus | TokenKind::Minus | TokenKind::Or => {
                self.cursor.push_back();
                let op = self.parse_add_op();
                let term = self.parse_term_a();
                let rest = self.parse_simple_expr();
                SimpleExpr::Add {
                    op,
                    term,
                    rest: Box::new(rest),
                }
            }
            _ => {
                self.cursor.push_back();
                SimpleExpr::Empty
            }
        }
    }

    /// simple_expr_a = term_a simple_expr
    pub fn parse_simple_expr_a(&mut self) -> SimpleExprA {
        let term = self.parse_term_a();
        let rest = self.parse_simple_expr();
        SimpleExprA { term, rest }
    }

    /// expression = simple_expr_a [ rel_op simple_expr_a ]
    pub fn parse_expression(&mut self) -> Expression {
        let lhs = self.parse_simple_expr_a();
        let comparison = match self.cursor.next().kind {
            TokenKind::Equal
            | TokenKind::NotEqual
            | TokenKind::Greater
            | TokenKind::Less
            | TokenKind::GreaterEqual
            | TokenKind::LessEqual => {
                self.cursor.push_back();
                let op = self.parse_rel_op();
                let rhs = self.parse_simple_expr_a();
                Some((op, rhs))
            }
            _ => {
                self.cursor.push_back();
                None
            }
        };
        Expression { lhs, comparison }
    }

    pub fn parse_condition(&mut self) -> Condition {
        Condition {
            expr: self.parse_expression(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::Lexer;

    fn expression(source: &str) -> (String, usize) {
        let mut parser = Parser::new(Lexer::new(source));
        let expr = parser.parse_expression();
        (expr.to_string(), parser.finish().len())
    }

    #[test]
    fn test_simple_parse_expression() {
        assert_eq!(expression("-1 + 2 * 2"), ("(+ (-1) (* 2 2))".to_string(), 0));
    }

    #[test]
    fn test_parse_grouping_expression() {
        assert_eq!(
            expression("(-1 + 2) * 2"),
            ("(* ((+ (-1) 2)) 2)".to_string(), 0)
        );
    }

    #[test]
    fn test_parse_conditional_expression() {
        assert_eq!(
            expression("1 + 2 < 2 + 2"),
            ("(< (+ 1 2) (+ 2 2))".to_string(), 0)
        );
    }

    #[test]
    fn test_boolean_operators_share_arithmetic_levels() {
        assert_eq!(
            expression("not a or b and c"),
            ("(or (not a) (and b c))".to_string(), 0)
        );
    }

    #[test]
    fn test_left_to_right_order() {
        assert_eq!(
            expression("a / b * c - d - e"),
            ("(- (- (* (/ a b) c) d) e)".to_string(), 0)
        );
    }

    #[test]
    fn test_constants() {
        assert_eq!(expression("'x' <> 2.5"), ("(<> 'x' 2.5)".to_string(), 0));
    }

    #[test]
    fn test_syntax_error_doubleop() {
        let mut parser = Parser::new(Lexer::new("1 * / 2"));
        let expr = parser.parse_expression();
        // `/` can't start a factor, it is left for the product tail
        assert_eq!(expr.to_string(), "(/ (* 1 <error>) 2)");
        assert_eq!(parser.errors().len(), 1);
    }

    #[test]
    fn test_syntax_error_trailingop() {
        let (rendered, errors) = expression("1 * ");
        assert_eq!(rendered, "(* 1 <error>)");
        assert_eq!(errors, 1);
    }

    #[test]
    fn test_missing_right_paren_keeps_group() {
        let mut parser = Parser::new(Lexer::new("(a + b then"));
        let factor = parser.parse_factor();
        assert_eq!(factor.map(|f| f.to_string()), Some("((+ a b))".to_string()));
        assert_eq!(parser.errors().len(), 1);
        // `then` may follow a factor, so recovery stops in front of it
        assert_eq!(parser.cursor.next().kind, TokenKind::Then);
    }

    #[test]
    fn test_bad_factor_recovers_on_follow_set() {
        let mut parser = Parser::new(Lexer::new(":= := x ; y"));
        assert_eq!(parser.parse_factor(), None);
        assert_eq!(parser.cursor.next().kind, TokenKind::Semicolon);
    }

    #[test]
    fn test_epsilon_tails_consume_nothing() {
        let mut parser = Parser::new(Lexer::new(";"));
        assert_eq!(parser.parse_term(), Term::Empty);
        assert_eq!(parser.parse_simple_expr(), SimpleExpr::Empty);
        assert_eq!(parser.cursor.next().kind, TokenKind::Semicolon);
        assert!(!parser.has_error());
    }

    #[test]
    fn test_operator_mismatch() {
        let mut parser = Parser::new(Lexer::new("x"));
        assert_eq!(parser.parse_rel_op(), None);
        assert_eq!(parser.errors().len(), 1);
    }
}
