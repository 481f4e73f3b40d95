use super::{Condition, Ident, OrError, SimpleExprA};
use std::fmt::{self, Display, Formatter};

const INDENT: &str = "    ";

#[derive(Clone, Debug, PartialEq)]
pub struct AssignStmt {
    pub target: Ident,
    pub value: SimpleExprA,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ReadStmt {
    pub target: Ident,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Writable {
    Str(String),
    Expr(SimpleExprA),
}

#[derive(Clone, Debug, PartialEq)]
pub struct WriteStmt {
    pub value: Option<Writable>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct IfStmt {
    pub condition: Condition,
    pub then_branch: StmtList,
    pub else_branch: Option<StmtList>,
}

/// `while <condition> do`
#[derive(Clone, Debug, PartialEq)]
pub struct StmtPrefix {
    pub condition: Condition,
}

#[derive(Clone, Debug, PartialEq)]
pub struct WhileStmt {
    pub prefix: Option<StmtPrefix>,
    pub body: StmtList,
}

/// `until <condition>`
#[derive(Clone, Debug, PartialEq)]
pub struct StmtSuffix {
    pub condition: Condition,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RepeatStmt {
    pub body: StmtList,
    pub suffix: Option<StmtSuffix>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Stmt {
    Assign(AssignStmt),
    Read(ReadStmt),
    Write(WriteStmt),
    If(IfStmt),
    While(WhileStmt),
    Repeat(RepeatStmt),
}

/// Statements separated by `;`, never empty once parsed
#[derive(Clone, Debug, PartialEq)]
pub struct StmtList {
    pub stmts: Vec<Option<Stmt>>,
}

fn indent(f: &mut Formatter<'_>, depth: usize) -> fmt::Result {
    for _ in 0..depth {
        f.write_str(INDENT)?;
    }
    Ok(())
}

impl StmtList {
    pub(crate) fn render(&self, f: &mut Formatter<'_>, depth: usize) -> fmt::Result {
        for (i, stmt) in self.stmts.iter().enumerate() {
            if i > 0 {
                f.write_str(";\n")?;
            }
            indent(f, depth)?;
            match stmt {
                Some(stmt) => stmt.render(f, depth)?,
                None => f.write_str("<error>")?,
            }
        }
        Ok(())
    }
}

impl Stmt {
    /// Writes the statement, assuming the cursor already sits at `depth`
    fn render(&self, f: &mut Formatter<'_>, depth: usize) -> fmt::Result {
        match self {
            Stmt::Assign(assign) => write!(f, "{} := {}", assign.target, assign.value),
            Stmt::Read(read) => write!(f, "read({})", read.target),
            Stmt::Write(write) => write!(f, "{}", write),
            Stmt::If(if_stmt) => {
                writeln!(f, "if {} then", if_stmt.condition)?;
                if_stmt.then_branch.render(f, depth + 1)?;
                if let Some(else_branch) = &if_stmt.else_branch {
                    f.write_str("\n")?;
                    indent(f, depth)?;
                    writeln!(f, "else")?;
                    else_branch.render(f, depth + 1)?;
                }
                f.write_str("\n")?;
                indent(f, depth)?;
                f.write_str("end")
            }
            Stmt::While(while_stmt) => {
                match &while_stmt.prefix {
                    Some(prefix) => writeln!(f, "while {} do", prefix.condition)?,
                    None => writeln!(f, "while <error> do")?,
                }
                while_stmt.body.render(f, depth + 1)?;
                f.write_str("\n")?;
                indent(f, depth)?;
                f.write_str("end")
            }
            Stmt::Repeat(repeat) => {
                writeln!(f, "repeat")?;
                repeat.body.render(f, depth + 1)?;
                f.write_str("\n")?;
                indent(f, depth)?;
                match &repeat.suffix {
                    Some(suffix) => write!(f, "until {}", suffix.condition),
                    None => write!(f, "until <error>"),
                }
            }
        }
    }
}

impl Display for Stmt {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.render(f, 0)
    }
}

impl Display for StmtList {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.render(f, 0)
    }
}

impl Display for Writable {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Writable::Str(s) => write!(f, "\"{}\"", s),
            Writable::Expr(expr) => write!(f, "{}", expr),
        }
    }
}

impl Display for WriteStmt {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "write({})", OrError(&self.value))
    }
}
