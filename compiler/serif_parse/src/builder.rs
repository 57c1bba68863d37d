//! Format tree builder.
//!
//! Recovers nesting from styled text. The builder walks a statement one
//! character at a time, keeping a cursor into the tree and the style it
//! expects at that cursor. Every attribute on which the next character
//! differs from the expected style opens or closes a node, in the fixed
//! precedence of [`PRECEDENCE`]. Text between transitions is buffered and
//! flushed onto the cursor as tokens.
//!
//! The first character fixes a baseline colour and font. Colour and font
//! nodes only open on deviation from that baseline, so a document written
//! entirely in one colour or family produces no colour or font nodes.

use serif_ir::{FormatNode, FormatTag, FormatTree, NodeId, Style};
use tracing::{debug, trace};

use crate::runs::{split_statements, StyledRun};

/// Order in which attribute transitions are handled for one character.
pub const PRECEDENCE: [FormatTag; 9] = [
    FormatTag::Size,
    FormatTag::Bold,
    FormatTag::Sub,
    FormatTag::Super,
    FormatTag::Strike,
    FormatTag::Italic,
    FormatTag::Under,
    FormatTag::Color,
    FormatTag::Font,
];

/// Build a `Document` node holding one `Statement` per sentence of `runs`.
pub fn build_document(tree: &mut FormatTree, runs: &[StyledRun]) -> NodeId {
    let document = tree.alloc(FormatNode::new(FormatTag::Document));
    for statement in split_statements(runs) {
        let id = build_statement(tree, &statement);
        tree.add_child(document, id);
    }
    document
}

/// Build a pruned `Statement` node from the runs of one sentence.
pub fn build_statement(tree: &mut FormatTree, runs: &[StyledRun]) -> NodeId {
    let mut builder = TreeBuilder::new(tree);
    for run in runs {
        for c in run.text.chars() {
            builder.push_char(&run.style, c);
        }
    }
    builder.finish()
}

/// Incremental builder for a single statement.
pub struct TreeBuilder<'t> {
    tree: &'t mut FormatTree,
    root: NodeId,
    current: NodeId,
    expected: Style,
    baseline: Option<Style>,
    pending: String,
}

impl<'t> TreeBuilder<'t> {
    pub fn new(tree: &'t mut FormatTree) -> Self {
        let root = tree.alloc(FormatNode::new(FormatTag::Statement).with_style(Style::plain()));
        TreeBuilder {
            tree,
            root,
            current: root,
            expected: Style::plain(),
            baseline: None,
            pending: String::new(),
        }
    }

    /// Feed the next character and its style.
    pub fn push_char(&mut self, style: &Style, c: char) {
        if self.baseline.is_none() {
            self.fix_baseline(style);
        }
        for tag in PRECEDENCE {
            self.transition(tag, style);
        }
        self.pending.push(c);
        self.expected = self.recorded_style(self.current);
    }

    /// Flush the remaining text, prune childless nodes, return the statement.
    pub fn finish(mut self) -> NodeId {
        let pending = std::mem::take(&mut self.pending);
        self.tree.add_string(self.current, &pending);
        self.tree.prune(self.root);
        debug!(statement = %self.tree.display(self.root), "built statement");
        self.root
    }

    fn fix_baseline(&mut self, style: &Style) {
        let baseline = Style {
            color: style.color,
            font: style.font.clone(),
            ..Style::plain()
        };
        if let Some(recorded) = self.tree.node_mut(self.root).style.as_mut() {
            recorded.color = baseline.color;
            recorded.font.clone_from(&baseline.font);
        }
        self.expected.color = baseline.color;
        self.expected.font.clone_from(&baseline.font);
        self.baseline = Some(baseline);
    }

    fn baseline(&self) -> Style {
        self.baseline.clone().unwrap_or_default()
    }

    fn recorded_style(&self, id: NodeId) -> Style {
        self.tree.node(id).style.clone().unwrap_or_default()
    }

    fn transition(&mut self, tag: FormatTag, new: &Style) {
        if !differs(tag, &self.expected, new) {
            return;
        }
        self.flush();
        match tag {
            // A larger size opens a group; its contents start from the baseline.
            FormatTag::Size if new.size > self.expected.size => {
                self.expected = Style {
                    size: new.size,
                    ..self.baseline()
                };
                self.open(FormatNode::with_value(FormatTag::Size, new.size));
            }
            FormatTag::Size => {
                self.close(tag, new);
            }
            FormatTag::Color | FormatTag::Font => {
                if differs(tag, &self.baseline(), new) {
                    copy_attribute(tag, new, &mut self.expected);
                    let node = match tag {
                        FormatTag::Color => FormatNode::with_value(FormatTag::Color, new.color),
                        _ => FormatNode::font(new.font.clone()),
                    };
                    self.open(node);
                } else {
                    while self.close(tag, new) && differs(tag, &self.expected, new) {}
                }
            }
            _ => {
                if flag(new, tag) {
                    copy_attribute(tag, new, &mut self.expected);
                    self.open(FormatNode::new(tag));
                } else {
                    self.close(tag, new);
                }
            }
        }
    }

    fn open(&mut self, node: FormatNode) {
        trace!(tag = %node.tag, "open");
        let node = node.with_style(self.expected.clone());
        self.current = self.tree.push_node(self.current, node);
    }

    /// Move the cursor above the nearest open node tagged `tag`.
    ///
    /// A size node only closes when its parent's size equals the new size,
    /// so one transition can close several nested size groups. Returns
    /// `false` when no such node is open below the statement root; the
    /// transition is then absorbed into the current node's style.
    fn close(&mut self, tag: FormatTag, new: &Style) -> bool {
        let mut cursor = self.current;
        while cursor != self.root {
            let node = self.tree.node(cursor);
            let Some(parent) = node.parent else {
                break;
            };
            let matches = node.tag == tag
                && (tag != FormatTag::Size || self.recorded_style(parent).size == new.size);
            if matches {
                trace!(tag = %tag, "close");
                self.current = parent;
                self.expected = self.recorded_style(parent);
                return true;
            }
            cursor = parent;
        }

        trace!(tag = %tag, "stray closing transition absorbed");
        copy_attribute(tag, new, &mut self.expected);
        if let Some(recorded) = self.tree.node_mut(self.current).style.as_mut() {
            copy_attribute(tag, new, recorded);
        }
        false
    }

    fn flush(&mut self) {
        if self.pending.is_empty() {
            return;
        }
        let pending = std::mem::take(&mut self.pending);
        // Font content is a string literal; keep its whitespace.
        if self.tree.tag(self.current) == FormatTag::Font {
            self.tree.add_string_unsplit(self.current, &pending);
        } else {
            self.tree.add_string(self.current, &pending);
        }
    }
}

fn flag(style: &Style, tag: FormatTag) -> bool {
    match tag {
        FormatTag::Bold => style.bold,
        FormatTag::Italic => style.italic,
        FormatTag::Under => style.underline,
        FormatTag::Strike => style.strike,
        FormatTag::Sub => style.sub,
        FormatTag::Super => style.superscript,
        _ => false,
    }
}

fn differs(tag: FormatTag, expected: &Style, new: &Style) -> bool {
    match tag {
        FormatTag::Size => expected.size != new.size,
        FormatTag::Color => expected.color != new.color,
        FormatTag::Font => expected.font != new.font,
        _ => flag(expected, tag) != flag(new, tag),
    }
}

fn copy_attribute(tag: FormatTag, from: &Style, to: &mut Style) {
    match tag {
        FormatTag::Size => to.size = from.size,
        FormatTag::Color => to.color = from.color,
        FormatTag::Font => to.font.clone_from(&from.font),
        FormatTag::Bold => to.bold = from.bold,
        FormatTag::Italic => to.italic = from.italic,
        FormatTag::Under => to.underline = from.underline,
        FormatTag::Strike => to.strike = from.strike,
        FormatTag::Sub => to.sub = from.sub,
        FormatTag::Super => to.superscript = from.superscript,
        _ => {}
    }
}
