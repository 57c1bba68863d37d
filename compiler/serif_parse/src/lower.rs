//! Lowering from format tree to expression tree.
//!
//! Each node is pre-parsed, then converted according to its tag after its
//! child count and child kinds are checked. Lowering is top-down and stops
//! at the first violation.

use serif_ir::{Expr, FormatTag, FormatTree, NodeId, MAX_COLOR};
use serif_stack::ensure_sufficient_stack;
use tracing::debug;

use crate::error::{check_arity, Arity, ParseError, ParseErrorKind};
use crate::preparse::preparse;

/// Lower the subtree rooted at `id` into an expression.
///
/// Pre-parsing rewrites `tree` in place.
pub fn parse(tree: &mut FormatTree, id: NodeId) -> Result<Expr, ParseError> {
    ensure_sufficient_stack(|| lower(tree, id))
}

fn lower(tree: &mut FormatTree, id: NodeId) -> Result<Expr, ParseError> {
    let id = preparse(tree, id)?;
    let node = tree.node(id).clone();
    let tag = node.tag;
    let children = &node.children;
    debug!(tag = %tag, children = children.len(), "lowering node");

    let expr = match tag {
        FormatTag::Document => {
            check_arity(tag, Arity::AtLeast(1), children.len())?;
            if let Some(&stray) = children
                .iter()
                .find(|&&child| tree.tag(child) != FormatTag::Statement)
            {
                return Err(ParseErrorKind::NotAStatement {
                    found: tree.tag(stray),
                }
                .into());
            }
            Expr::Sequence(parse_each(tree, children)?)
        }
        FormatTag::Statement | FormatTag::Size => {
            check_arity(tag, Arity::Exactly(1), children.len())?;
            parse(tree, children[0])?
        }
        FormatTag::Bold => {
            check_arity(tag, Arity::Exactly(3), children.len())?;
            let test = parse(tree, children[0])?;
            let then = parse(tree, children[1])?;
            let otherwise = parse(tree, children[2])?;
            Expr::if_else(test, then, otherwise)
        }
        FormatTag::Italic => {
            check_arity(tag, Arity::AtLeast(2), children.len())?;
            Expr::Add(parse_each(tree, children)?)
        }
        FormatTag::Under => {
            check_arity(tag, Arity::Exactly(2), children.len())?;
            let target = parse(tree, children[0])?;
            let value = parse(tree, children[1])?;
            Expr::bind(target, value)
        }
        FormatTag::Strike => {
            check_arity(tag, Arity::Exactly(1), children.len())?;
            Expr::negate(parse(tree, children[0])?)
        }
        FormatTag::Color => {
            // The coloured text only carries the value; it is never lowered.
            check_arity(tag, Arity::Exactly(1), children.len())?;
            let value = node.value.ok_or(ParseErrorKind::MissingPayload { tag })?;
            if value > MAX_COLOR {
                return Err(ParseErrorKind::LiteralOutOfRange { value }.into());
            }
            Expr::Integer(value)
        }
        FormatTag::String => {
            check_arity(tag, Arity::Exactly(0), children.len())?;
            let text = node
                .text
                .ok_or(ParseErrorKind::MissingPayload { tag })?;
            Expr::Ident(text)
        }
        FormatTag::Font => {
            check_arity(tag, Arity::Exactly(1), children.len())?;
            let literal = tree.node(children[0]);
            match literal.token_text() {
                Some(text) => Expr::string(text),
                None => {
                    return Err(ParseErrorKind::FontContent {
                        found: literal.tag,
                    }
                    .into())
                }
            }
        }
        FormatTag::Function | FormatTag::Index => {
            check_arity(tag, Arity::AtLeast(1), children.len())?;
            let base = node.base.ok_or(ParseErrorKind::MissingPayload { tag })?;
            let base = parse(tree, base)?;
            let args = parse_each(tree, children)?;
            if tag == FormatTag::Function {
                Expr::call(base, args)
            } else {
                Expr::index(base, args)
            }
        }
        FormatTag::Sequence => {
            check_arity(tag, Arity::AtLeast(1), children.len())?;
            Expr::Sequence(parse_each(tree, children)?)
        }
        FormatTag::Sub | FormatTag::Super => {
            return Err(ParseErrorKind::StrayScript { tag }.into());
        }
    };
    Ok(expr)
}

fn parse_each(tree: &mut FormatTree, ids: &[NodeId]) -> Result<Vec<Expr>, ParseError> {
    ids.iter().map(|&id| parse(tree, id)).collect()
}
