//! Expression tree produced by lowering a format tree.

use std::fmt;

/// A Serif expression. Owns its sub-expressions and is never mutated
/// after lowering.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Expr {
    /// Colour-encoded integer literal, always within `0..=0xFFFFFF`.
    Integer(u32),
    /// Font-encoded string literal.
    Str(String),
    /// Plain token.
    Ident(String),
    Call {
        callee: Box<Expr>,
        args: Vec<Expr>,
    },
    Index {
        base: Box<Expr>,
        indices: Vec<Expr>,
    },
    /// Assignment, function definition, array declaration or element store,
    /// depending on the shape of `target`.
    Bind {
        target: Box<Expr>,
        value: Box<Expr>,
    },
    If {
        test: Box<Expr>,
        then: Box<Expr>,
        otherwise: Box<Expr>,
    },
    Add(Vec<Expr>),
    Negate(Box<Expr>),
    Sequence(Vec<Expr>),
}

impl Expr {
    pub fn ident(name: impl Into<String>) -> Self {
        Expr::Ident(name.into())
    }

    pub fn string(text: impl Into<String>) -> Self {
        Expr::Str(text.into())
    }

    pub fn call(callee: Expr, args: Vec<Expr>) -> Self {
        Expr::Call {
            callee: Box::new(callee),
            args,
        }
    }

    pub fn index(base: Expr, indices: Vec<Expr>) -> Self {
        Expr::Index {
            base: Box::new(base),
            indices,
        }
    }

    pub fn bind(target: Expr, value: Expr) -> Self {
        Expr::Bind {
            target: Box::new(target),
            value: Box::new(value),
        }
    }

    pub fn if_else(test: Expr, then: Expr, otherwise: Expr) -> Self {
        Expr::If {
            test: Box::new(test),
            then: Box::new(then),
            otherwise: Box::new(otherwise),
        }
    }

    pub fn negate(operand: Expr) -> Self {
        Expr::Negate(Box::new(operand))
    }

    /// Name of a bare identifier.
    pub fn as_ident(&self) -> Option<&str> {
        match self {
            Expr::Ident(name) => Some(name),
            _ => None,
        }
    }
}

fn write_list(f: &mut fmt::Formatter<'_>, items: &[Expr]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Integer(n) => write!(f, "NumC({n})"),
            Expr::Str(s) => write!(f, "StrC(\"{s}\")"),
            Expr::Ident(name) => write!(f, "IdC(\"{name}\")"),
            Expr::Call { callee, args } => {
                write!(f, "FuncC({callee}, (")?;
                write_list(f, args)?;
                f.write_str("))")
            }
            Expr::Index { base, indices } => {
                write!(f, "IndexC({base}")?;
                for index in indices {
                    write!(f, "[{index}]")?;
                }
                f.write_str(")")
            }
            Expr::Bind { target, value } => write!(f, "BindC({target}, {value})"),
            Expr::If {
                test,
                then,
                otherwise,
            } => write!(f, "IfC({test}, {then}, {otherwise})"),
            Expr::Add(addends) => {
                f.write_str("AddC(")?;
                write_list(f, addends)?;
                f.write_str(")")
            }
            Expr::Negate(operand) => write!(f, "NegC({operand})"),
            Expr::Sequence(exprs) => {
                f.write_str("SeqC(")?;
                write_list(f, exprs)?;
                f.write_str(")")
            }
        }
    }
}

#[cfg(test)]
mod tests;
