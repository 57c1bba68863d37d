//! One-level structural rewrite applied before lowering a node.
//!
//! Two rewrites, on the node's direct children only:
//! - a `Super`/`Sub` child swallows its preceding sibling as the base of
//!   a `Function`/`Index` node, scanning right to left;
//! - children separated by `","` tokens become a `Sequence` node, which
//!   then stands in for the node itself.

use serif_ir::{ArgsKind, FormatNode, FormatTag, FormatTree, NodeId};
use tracing::trace;

use crate::error::{ParseError, ParseErrorKind};

/// Rewrite the children of `id` and return the node to lower in its place.
pub fn preparse(tree: &mut FormatTree, id: NodeId) -> Result<NodeId, ParseError> {
    absorb_scripts(tree, id)?;
    split_sequence(tree, id)
}

fn absorb_scripts(tree: &mut FormatTree, id: NodeId) -> Result<(), ParseError> {
    let mut children = tree.children(id).to_vec();
    let mut i = children.len();
    while i > 0 {
        i -= 1;
        let script = children[i];
        let kind = match tree.tag(script) {
            FormatTag::Super => ArgsKind::Function,
            FormatTag::Sub => ArgsKind::Index,
            _ => continue,
        };
        if i == 0 {
            return Err(ParseErrorKind::ScriptFirstChild {
                tag: tree.tag(script),
            }
            .into());
        }
        let base = children[i - 1];
        let args = tree.children(script).to_vec();
        let merged = tree.with_args(kind, base, args);
        tree.node_mut(merged).parent = Some(id);
        trace!(kind = ?kind, node = %tree.display(merged), "absorbed script");
        children.splice(i - 1..=i, [merged]);
        // The base is consumed; scanning resumes before it.
        i -= 1;
    }
    tree.node_mut(id).children = children;
    Ok(())
}

fn split_sequence(tree: &mut FormatTree, id: NodeId) -> Result<NodeId, ParseError> {
    let children = tree.children(id).to_vec();

    let mut has_commas = false;
    for &child in &children {
        match tree.token_text(child) {
            Some(",") => has_commas = true,
            Some(token) if token.contains(',') => {
                return Err(ParseErrorKind::CommaInToken {
                    token: token.to_owned(),
                }
                .into());
            }
            _ => {}
        }
    }
    if !has_commas {
        return Ok(id);
    }

    let mut items = Vec::with_capacity(children.len() / 2 + 1);
    for (position, &child) in children.iter().enumerate() {
        let expect_comma = position % 2 == 1;
        if tree.is_token(child, ",") != expect_comma {
            return Err(ParseErrorKind::MisplacedComma { position }.into());
        }
        if !expect_comma {
            items.push(child);
        }
    }
    if children.len() % 2 == 0 {
        return Err(ParseErrorKind::TrailingComma.into());
    }

    let sequence = tree.alloc(FormatNode::new(FormatTag::Sequence));
    tree.node_mut(sequence).parent = tree.parent(id);
    for item in items {
        tree.add_child(sequence, item);
    }
    Ok(sequence)
}
