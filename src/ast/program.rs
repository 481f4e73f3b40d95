use super::{OrError, StmtList};
use crate::tokens::Position;
use std::fmt::Display;

#[derive(Clone, Debug, PartialEq)]
pub struct Ident {
    pub name: String,
    pub position: Position,
}

impl Ident {
    pub fn new(name: impl Into<String>, position: Position) -> Ident {
        Ident {
            name: name.into(),
            position,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Type {
    Int,
    Float,
    Char,
}

#[derive(Clone, Debug, PartialEq)]
pub struct IdentList {
    pub idents: Vec<Ident>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Decl {
    pub ty: Option<Type>,
    pub idents: Option<IdentList>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct DeclList {
    pub decls: Vec<Decl>,
}

/// The `declare` section of a body
#[derive(Clone, Debug, PartialEq)]
pub enum DeclSection {
    /// No `declare` keyword, the body starts straight at `begin`
    Omitted,
    /// Parsed section, `None` if it was malformed
    Parsed(Option<DeclList>),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Body {
    pub decl_section: DeclSection,
    pub stmt_list: StmtList,
}

impl Body {
    /// Declarations that parsed cleanly, empty when the section is omitted or malformed
    pub fn decls(&self) -> &[Decl] {
        match &self.decl_section {
            DeclSection::Parsed(Some(list)) => &list.decls,
            _ => &[],
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Program {
    pub body: Option<Body>,
}

impl Display for Ident {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl Display for Type {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Type::Int => "int",
            Type::Float => "float",
            Type::Char => "char",
        };
        write!(f, "{}", name)
    }
}

impl Display for IdentList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names = self
            .idents
            .iter()
            .map(|ident| ident.name.as_str())
            .collect::<Vec<&str>>()
            .join(", ");
        write!(f, "{}", names)
    }
}

impl Display for Decl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", OrError(&self.ty), OrError(&self.idents))
    }
}

impl Display for DeclList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for decl in &self.decls {
            writeln!(f, "    {};", decl)?;
        }
        Ok(())
    }
}

impl Display for Body {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.decl_section {
            DeclSection::Omitted => {}
            DeclSection::Parsed(Some(list)) => write!(f, "declare\n{}", list)?,
            DeclSection::Parsed(None) => writeln!(f, "declare\n    <error>")?,
        }
        writeln!(f, "begin")?;
        self.stmt_list.render(f, 1)?;
        write!(f, "\nend")
    }
}

impl Display for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "routine")?;
        write!(f, "{}", OrError(&self.body))
    }
}
