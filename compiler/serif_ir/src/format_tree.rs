//! Format tree recovered from styled text.
//!
//! Nodes live in a flat arena and refer to one another by [`NodeId`]. The
//! parent back-reference is just another index, so building the tree needs
//! no shared ownership or interior mutability. Pruned nodes are detached
//! from their parent and stay in the arena, unreachable.

use std::fmt;

use crate::Style;

/// Characters that separate tokens when buffered text is flushed.
///
/// `.` is a separator too; `,` is an ordinary character.
pub const TOKEN_SEPARATORS: [char; 6] = [' ', '\t', '\u{b}', '\r', '\n', '.'];

/// Index into a [`FormatTree`].
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[repr(transparent)]
pub struct NodeId(u32);

impl NodeId {
    #[inline]
    pub const fn new(index: u32) -> Self {
        NodeId(index)
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

/// What a format tree node stands for.
///
/// The formatting tags mirror the character attributes; `String` is a
/// token leaf; `Function`, `Index` and `Sequence` only appear after
/// pre-parsing.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum FormatTag {
    Document,
    Statement,
    Bold,
    Italic,
    Under,
    Sub,
    Super,
    Strike,
    Size,
    Color,
    Font,
    String,
    Function,
    Index,
    Sequence,
}

impl FormatTag {
    /// Name used in the canonical debug string.
    pub fn label(self) -> &'static str {
        match self {
            FormatTag::Document => "document",
            FormatTag::Statement => "statement",
            FormatTag::Bold => "bold",
            FormatTag::Italic => "italic",
            FormatTag::Under => "under",
            FormatTag::Sub => "sub",
            FormatTag::Super => "super",
            FormatTag::Strike => "strike",
            FormatTag::Size => "size",
            FormatTag::Color => "color",
            FormatTag::Font => "font",
            FormatTag::String => "string",
            FormatTag::Function => "function",
            FormatTag::Index => "index",
            FormatTag::Sequence => "seq",
        }
    }
}

impl fmt::Display for FormatTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The two pre-parse nodes that carry a separate base expression.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ArgsKind {
    /// Base followed by a superscript: call or definition.
    Function,
    /// Base followed by a subscript: indexing or array declaration.
    Index,
}

impl ArgsKind {
    pub fn tag(self) -> FormatTag {
        match self {
            ArgsKind::Function => FormatTag::Function,
            ArgsKind::Index => FormatTag::Index,
        }
    }
}

/// One node of a [`FormatTree`].
#[derive(Clone, Debug, PartialEq)]
pub struct FormatNode {
    pub tag: FormatTag,
    /// Point size of a `Size` node, RGB value of a `Color` node.
    pub value: Option<u32>,
    /// Family name of a `Font` node.
    pub name: Option<String>,
    /// Token text of a `String` node.
    pub text: Option<String>,
    /// Base expression of a `Function` or `Index` node.
    pub base: Option<NodeId>,
    pub children: Vec<NodeId>,
    pub parent: Option<NodeId>,
    /// Style expected while this node is open. Only used during construction.
    pub style: Option<Style>,
}

impl FormatNode {
    pub fn new(tag: FormatTag) -> Self {
        FormatNode {
            tag,
            value: None,
            name: None,
            text: None,
            base: None,
            children: Vec::new(),
            parent: None,
            style: None,
        }
    }

    /// A token leaf.
    pub fn token(text: impl Into<String>) -> Self {
        FormatNode {
            text: Some(text.into()),
            ..Self::new(FormatTag::String)
        }
    }

    /// A `Size` or `Color` node carrying its numeric payload.
    pub fn with_value(tag: FormatTag, value: u32) -> Self {
        FormatNode {
            value: Some(value),
            ..Self::new(tag)
        }
    }

    /// A `Font` node carrying its family name.
    pub fn font(name: impl Into<String>) -> Self {
        FormatNode {
            name: Some(name.into()),
            ..Self::new(FormatTag::Font)
        }
    }

    #[must_use]
    pub fn with_style(mut self, style: Style) -> Self {
        self.style = Some(style);
        self
    }

    /// Token text, if this node is a token leaf.
    pub fn token_text(&self) -> Option<&str> {
        match self.tag {
            FormatTag::String => self.text.as_deref(),
            _ => None,
        }
    }
}

/// Arena holding every node of one or more format trees.
#[derive(Clone, Debug, Default)]
pub struct FormatTree {
    nodes: Vec<FormatNode>,
}

impl FormatTree {
    pub fn new() -> Self {
        FormatTree { nodes: Vec::new() }
    }

    /// Number of nodes ever allocated, reachable or not.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Move `node` into the arena without attaching it anywhere.
    ///
    /// # Panics
    ///
    /// Panics if the arena already holds `u32::MAX` nodes.
    #[allow(clippy::cast_possible_truncation)]
    pub fn alloc(&mut self, node: FormatNode) -> NodeId {
        assert!(
            self.nodes.len() < u32::MAX as usize,
            "format tree exceeds u32::MAX nodes"
        );
        let id = NodeId::new(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    #[inline]
    pub fn node(&self, id: NodeId) -> &FormatNode {
        &self.nodes[id.index()]
    }

    #[inline]
    pub fn node_mut(&mut self, id: NodeId) -> &mut FormatNode {
        &mut self.nodes[id.index()]
    }

    #[inline]
    pub fn tag(&self, id: NodeId) -> FormatTag {
        self.node(id).tag
    }

    #[inline]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.node(id).children
    }

    #[inline]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).parent
    }

    #[inline]
    pub fn is_childless(&self, id: NodeId) -> bool {
        self.node(id).children.is_empty()
    }

    /// Token text of `id`, if it is a token leaf.
    pub fn token_text(&self, id: NodeId) -> Option<&str> {
        self.node(id).token_text()
    }

    /// Whether `id` is a token leaf spelling exactly `text`.
    pub fn is_token(&self, id: NodeId, text: &str) -> bool {
        self.token_text(id) == Some(text)
    }

    /// Append `child` to `parent` and link it back. Returns `child`.
    pub fn add_child(&mut self, parent: NodeId, child: NodeId) -> NodeId {
        self.node_mut(parent).children.push(child);
        self.node_mut(child).parent = Some(parent);
        child
    }

    /// Allocate `node` as the last child of `parent`.
    pub fn push_node(&mut self, parent: NodeId, node: FormatNode) -> NodeId {
        let child = self.alloc(node);
        self.add_child(parent, child)
    }

    /// Split `text` on [`TOKEN_SEPARATORS`] and append every non-empty
    /// piece to `parent` as a token. Returns the new tokens.
    pub fn add_string(&mut self, parent: NodeId, text: &str) -> Vec<NodeId> {
        text.split(TOKEN_SEPARATORS)
            .filter(|piece| !piece.is_empty())
            .map(|piece| self.push_node(parent, FormatNode::token(piece)))
            .collect()
    }

    /// Append `text` to `parent` as a single token, whitespace included.
    pub fn add_string_unsplit(&mut self, parent: NodeId, text: &str) -> NodeId {
        self.push_node(parent, FormatNode::token(text))
    }

    /// Build a `Function` or `Index` node over `base` with `args` as children.
    pub fn with_args(&mut self, kind: ArgsKind, base: NodeId, args: Vec<NodeId>) -> NodeId {
        let id = self.alloc(FormatNode {
            base: Some(base),
            ..FormatNode::new(kind.tag())
        });
        self.node_mut(base).parent = Some(id);
        for arg in args {
            self.add_child(id, arg);
        }
        id
    }

    /// Detach every non-token node without children below `id`, bottom-up.
    ///
    /// A formatting node whose only content was pruned is pruned in turn,
    /// so a single pass reaches a fixed point.
    pub fn prune(&mut self, id: NodeId) {
        let children = std::mem::take(&mut self.node_mut(id).children);
        let mut kept = Vec::with_capacity(children.len());
        for child in children {
            self.prune(child);
            let node = self.node(child);
            if node.tag == FormatTag::String || !node.children.is_empty() {
                kept.push(child);
            } else {
                self.node_mut(child).parent = None;
            }
        }
        self.node_mut(id).children = kept;
    }

    /// Canonical debug string of the subtree rooted at `id`.
    pub fn display(&self, id: NodeId) -> DisplayNode<'_> {
        DisplayNode { tree: self, id }
    }
}

/// `Display` adapter returned by [`FormatTree::display`].
pub struct DisplayNode<'a> {
    tree: &'a FormatTree,
    id: NodeId,
}

impl DisplayNode<'_> {
    fn write_children(&self, f: &mut fmt::Formatter<'_>, children: &[NodeId]) -> fmt::Result {
        for (i, child) in children.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", self.tree.display(*child))?;
        }
        Ok(())
    }
}

impl fmt::Display for DisplayNode<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let node = self.tree.node(self.id);
        match node.tag {
            FormatTag::String => {
                return write!(f, "\"{}\"", node.text.as_deref().unwrap_or_default());
            }
            FormatTag::Function | FormatTag::Index => {
                write!(f, "{}(", node.tag.label())?;
                if let Some(base) = node.base {
                    write!(f, "{}", self.tree.display(base))?;
                }
                f.write_str(", (")?;
                self.write_children(f, &node.children)?;
                return f.write_str("))");
            }
            FormatTag::Size | FormatTag::Color => {
                write!(f, "{}{}(", node.tag.label(), node.value.unwrap_or_default())?;
            }
            FormatTag::Font => {
                let name = node.name.as_deref().unwrap_or_default().replace(' ', "");
                write!(f, "font{name}(")?;
            }
            _ => write!(f, "{}(", node.tag.label())?,
        }
        self.write_children(f, &node.children)?;
        f.write_str(")")
    }
}

#[cfg(test)]
mod tests;
